use bsync_common::Secret;
use log::*;

pub const DEFAULT_SHOPIFY_API_VERSION: &str = "2024-04";

#[derive(Debug, Clone, Default)]
pub struct ShopifyConfig {
    /// The store's myshopify domain, e.g. "my-shop.myshopify.com". Also used to build public product links.
    pub shop: String,
    pub admin_access_token: Secret<String>,
    pub api_version: String,
}

impl ShopifyConfig {
    pub fn new_from_env_or_default() -> Self {
        let shop = std::env::var("SHOPIFY_STORE_DOMAIN").unwrap_or_else(|_| {
            warn!("SHOPIFY_STORE_DOMAIN not set, using (probably useless) default");
            "example.myshopify.com".to_string()
        });
        let api_version = std::env::var("SHOPIFY_API_VERSION").unwrap_or_else(|_| {
            info!("SHOPIFY_API_VERSION not set, using {DEFAULT_SHOPIFY_API_VERSION} as default");
            DEFAULT_SHOPIFY_API_VERSION.to_string()
        });
        let admin_access_token = Secret::new(std::env::var("SHOPIFY_ADMIN_API_TOKEN").unwrap_or_else(|_| {
            warn!("SHOPIFY_ADMIN_API_TOKEN not set, using (probably useless) default");
            "shpat_00000000000000".to_string()
        }));
        Self { shop, admin_access_token, api_version }
    }
}
