#![allow(dead_code)]
use bundle_sync_engine::{AccessTokenSource, BundleCatalog, BundleSyncApi, MerchantCenter, SyncOptions};
use gmc_tools::{AccessToken, GmcApiError, GmcProduct};
use mockall::mock;
use shopify_tools::{ProductImage, ProductPage, ShopifyApiError, ShopifyProduct, Variant};

pub const SHOP: &str = "bundles.myshopify.com";

mock! {
    pub Catalog {}
    impl BundleCatalog for Catalog {
        async fn fetch_products_page(&self, cursor: Option<String>) -> Result<ProductPage, ShopifyApiError>;
    }
}

mock! {
    pub Merchant {}
    impl MerchantCenter for Merchant {
        async fn insert_product(&self, token: &AccessToken, product: &GmcProduct) -> Result<(), GmcApiError>;
        async fn update_product(&self, token: &AccessToken, product: &GmcProduct) -> Result<(), GmcApiError>;
    }
}

mock! {
    pub Tokens {}
    impl AccessTokenSource for Tokens {
        async fn acquire_access_token(&self) -> Result<AccessToken, GmcApiError>;
    }
}

pub type MockSyncApi = BundleSyncApi<MockCatalog, MockMerchant, MockTokens>;

pub fn sync_api(catalog: MockCatalog, merchant: MockMerchant, tokens: MockTokens, options: SyncOptions) -> MockSyncApi {
    BundleSyncApi::new(catalog, merchant, tokens, SHOP, options)
}

pub fn product(id: i64, title: &str, sku: &str, tags: &str) -> ShopifyProduct {
    ShopifyProduct {
        id,
        title: title.to_string(),
        body_html: Some(format!("<p>{title}</p>")),
        variants: vec![Variant {
            id: Some(id * 10),
            sku: Some(sku.to_string()),
            barcode: None,
            price: "25.00".to_string(),
            inventory_quantity: Some(5),
        }],
        images: vec![ProductImage { id: Some(id * 100), src: format!("https://cdn.shopify.com/{sku}.png") }],
        product_type: Some("Bundle".to_string()),
        tags: tags.to_string(),
        vendor: Some("Acme".to_string()),
        handle: title.to_lowercase().replace(' ', "-"),
    }
}

pub fn page(products: Vec<ShopifyProduct>, next_page: Option<&str>) -> ProductPage {
    ProductPage { products, next_page: next_page.map(String::from) }
}

pub fn token_source(expected_calls: usize) -> MockTokens {
    let mut tokens = MockTokens::new();
    tokens.expect_acquire_access_token().times(expected_calls).returning(|| Ok(AccessToken::new("ya29.test-token")));
    tokens
}

pub fn conflict() -> GmcApiError {
    GmcApiError::QueryError {
        status: 409,
        message: r#"{"error":{"code":409,"message":"Product already exists"}}"#.to_string(),
    }
}

pub fn server_error(message: &str) -> GmcApiError {
    GmcApiError::QueryError { status: 500, message: message.to_string() }
}
