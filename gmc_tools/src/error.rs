use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GmcApiError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("Invalid REST response: {0}")]
    RestResponseError(String),
    #[error("Could not deserialize JSON: {0}")]
    JsonError(String),
    #[error("Query failed. Error {status}. {message}")]
    QueryError { status: u16, message: String },
    #[error("Could not obtain an access token. {0}")]
    OAuthError(String),
}

impl GmcApiError {
    /// True if Merchant Center rejected an insert because the offer already exists.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::QueryError { status, .. } if *status == StatusCode::CONFLICT.as_u16())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::QueryError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The response payload when the API returned one, otherwise the error message.
    pub fn details(&self) -> String {
        match self {
            Self::QueryError { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => self.to_string(),
        }
    }
}
