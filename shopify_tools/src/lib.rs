//! A thin client for the parts of the Shopify Admin REST API that the bundle sync needs: listing products page by
//! page, following the cursor that Shopify hands back in the `Link` response header.
mod api;
mod config;
mod error;
pub mod pagination;
mod shopify_product;

pub use api::{ProductPage, ShopifyApi, PRODUCT_FIELDS, PRODUCT_PAGE_LIMIT};
pub use config::ShopifyConfig;
pub use error::ShopifyApiError;
pub use shopify_product::{ProductImage, ShopifyProduct, Variant};
