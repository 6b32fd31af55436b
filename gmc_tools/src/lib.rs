//! A small client for the Google Merchant Center Content API (v2.1).
//!
//! Only what is needed to upsert products is implemented: `products.insert`, `products.update` and the OAuth2
//! refresh-token grant that yields the bearer token both calls require.
mod api;
mod config;
mod error;
mod gmc_product;
mod oauth;

pub use api::GmcApi;
pub use config::{GmcConfig, DEFAULT_GMC_API_BASE_URL, DEFAULT_GOOGLE_TOKEN_URL};
pub use error::GmcApiError;
pub use gmc_product::{
    product_rest_id,
    Availability,
    Condition,
    GmcProduct,
    Price,
    CONTENT_LANGUAGE,
    DEFAULT_CURRENCY,
    ONLINE_CHANNEL,
    TARGET_COUNTRY,
};
pub use oauth::{AccessToken, GoogleOAuthClient};
