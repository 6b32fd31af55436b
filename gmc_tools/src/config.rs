use bsync_common::Secret;
use log::*;

pub const DEFAULT_GMC_API_BASE_URL: &str = "https://shoppingcontent.googleapis.com/content/v2.1/";
pub const DEFAULT_GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, Clone, Default)]
pub struct GmcConfig {
    pub merchant_id: String,
    pub client_id: String,
    pub client_secret: Secret<String>,
    pub refresh_token: Secret<String>,
    /// Base URL of the Content API, including the version segment.
    pub api_base_url: String,
    /// OAuth2 token endpoint used for the refresh-token grant.
    pub token_url: String,
}

impl GmcConfig {
    pub fn new_from_env_or_default() -> Self {
        let merchant_id = std::env::var("GMC_MERCHANT_ID").unwrap_or_else(|_| {
            warn!("GMC_MERCHANT_ID not set. Merchant Center requests will fail.");
            String::default()
        });
        let client_id = std::env::var("GMC_CLIENT_ID").unwrap_or_else(|_| {
            warn!("GMC_CLIENT_ID not set. Access tokens cannot be obtained without it.");
            String::default()
        });
        let client_secret = Secret::new(std::env::var("GMC_CLIENT_SECRET").unwrap_or_else(|_| {
            warn!("GMC_CLIENT_SECRET not set. Access tokens cannot be obtained without it.");
            String::default()
        }));
        let refresh_token = Secret::new(std::env::var("GMC_REFRESH_TOKEN").unwrap_or_else(|_| {
            warn!("GMC_REFRESH_TOKEN not set. Access tokens cannot be obtained without it.");
            String::default()
        }));
        let api_base_url =
            std::env::var("GMC_API_BASE_URL").unwrap_or_else(|_| DEFAULT_GMC_API_BASE_URL.to_string());
        let token_url = std::env::var("GMC_TOKEN_URL").unwrap_or_else(|_| DEFAULT_GOOGLE_TOKEN_URL.to_string());
        Self { merchant_id, client_id, client_secret, refresh_token, api_base_url, token_url }
    }
}
