use shopify_tools::{ProductPage, ShopifyApiError};

#[allow(async_fn_in_trait)]
pub trait BundleCatalog {
    /// Fetch one page of the catalog. `cursor` is `None` for the first page, and the previous page's `next_page`
    /// thereafter.
    async fn fetch_products_page(&self, cursor: Option<String>) -> Result<ProductPage, ShopifyApiError>;
}
