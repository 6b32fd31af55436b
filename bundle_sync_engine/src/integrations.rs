//! Wires the real Shopify and Merchant Center clients into the engine's traits.
use gmc_tools::{AccessToken, GmcApi, GmcApiError, GmcProduct, GoogleOAuthClient};
use shopify_tools::{ProductPage, ShopifyApi, ShopifyApiError};

use crate::{AccessTokenSource, BundleCatalog, BundleSyncApi, MerchantCenter, SyncConfig, SyncError};

pub type LiveSyncApi = BundleSyncApi<ShopifyApi, GmcApi, GoogleOAuthClient>;

impl BundleCatalog for ShopifyApi {
    async fn fetch_products_page(&self, cursor: Option<String>) -> Result<ProductPage, ShopifyApiError> {
        ShopifyApi::fetch_products_page(self, cursor.as_deref()).await
    }
}

impl MerchantCenter for GmcApi {
    async fn insert_product(&self, token: &AccessToken, product: &GmcProduct) -> Result<(), GmcApiError> {
        GmcApi::insert_product(self, token, product).await
    }

    async fn update_product(&self, token: &AccessToken, product: &GmcProduct) -> Result<(), GmcApiError> {
        GmcApi::update_product(self, token, product).await
    }
}

impl AccessTokenSource for GoogleOAuthClient {
    async fn acquire_access_token(&self) -> Result<AccessToken, GmcApiError> {
        self.refresh_access_token().await
    }
}

/// Builds a sync API backed by the live Shopify and Merchant Center endpoints described in `config`.
pub fn new_live_sync_api(config: &SyncConfig) -> Result<LiveSyncApi, SyncError> {
    let shopify = ShopifyApi::new(config.shopify.clone()).map_err(|e| SyncError::Initialization(e.to_string()))?;
    let gmc = GmcApi::new(config.gmc.clone()).map_err(|e| SyncError::Initialization(e.to_string()))?;
    let oauth = GoogleOAuthClient::new(&config.gmc).map_err(|e| SyncError::Initialization(e.to_string()))?;
    Ok(BundleSyncApi::new(shopify, gmc, oauth, &config.shopify.shop, config.options))
}
