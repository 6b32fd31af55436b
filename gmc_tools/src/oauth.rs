use std::sync::Arc;

use bsync_common::Secret;
use log::*;
use reqwest::Client;
use serde::Deserialize;

use crate::{GmcApiError, GmcConfig};

/// A short-lived bearer token for the Content API.
#[derive(Debug, Clone, Default)]
pub struct AccessToken {
    pub token: Secret<String>,
    pub token_type: String,
    /// Lifetime in seconds, as reported by the token endpoint.
    pub expires_in: Option<u64>,
}

impl AccessToken {
    pub fn new(token: &str) -> Self {
        Self { token: Secret::new(token.to_string()), token_type: "Bearer".to_string(), expires_in: None }
    }

    pub fn reveal(&self) -> &str {
        self.token.reveal().as_str()
    }
}

/// Exchanges the long-lived refresh token for an access token using the standard OAuth2 refresh-token grant.
#[derive(Clone)]
pub struct GoogleOAuthClient {
    client_id: String,
    client_secret: Secret<String>,
    refresh_token: Secret<String>,
    token_url: String,
    client: Arc<Client>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl GoogleOAuthClient {
    pub fn new(config: &GmcConfig) -> Result<Self, GmcApiError> {
        let client = Client::builder().build().map_err(|e| GmcApiError::Initialization(e.to_string()))?;
        Ok(Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            refresh_token: config.refresh_token.clone(),
            token_url: config.token_url.clone(),
            client: Arc::new(client),
        })
    }

    pub async fn refresh_access_token(&self) -> Result<AccessToken, GmcApiError> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.reveal().as_str()),
            ("refresh_token", self.refresh_token.reveal().as_str()),
            ("grant_type", "refresh_token"),
        ];
        debug!("Requesting access token from {}", self.token_url);
        let response = self
            .client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| GmcApiError::OAuthError(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(GmcApiError::OAuthError(format!("Token exchange failed with status {status}. {text}")));
        }
        let token = response.json::<TokenResponse>().await.map_err(|e| GmcApiError::JsonError(e.to_string()))?;
        info!("Obtained Merchant Center access token (expires in {}s)", token.expires_in.unwrap_or_default());
        Ok(AccessToken {
            token: Secret::new(token.access_token),
            token_type: token.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_in: token.expires_in,
        })
    }
}
