use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use bundle_sync_engine::SyncError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("{message}")]
    SyncFailed {
        message: String,
        /// Outcomes of the bundles that were processed before the sync was aborted.
        details: Vec<String>,
    },
}

impl From<SyncError> for ServerError {
    fn from(e: SyncError) -> Self {
        let details = e.completed_outcomes().iter().map(|o| o.to_string()).collect();
        Self::SyncFailed { message: e.to_string(), details }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SyncFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = serde_json::json!({ "error": self.to_string() });
        if let Self::SyncFailed { details, .. } = self {
            if !details.is_empty() {
                body["details"] = serde_json::json!(details);
            }
        }
        HttpResponse::build(self.status_code()).insert_header(ContentType::json()).body(body.to_string())
    }
}
