//! Conversion of Shopify products into Merchant Center products.
//!
//! Only the first variant of a product is used, so a multi-variant product is listed once, at the price, SKU and
//! stock level of that variant.
use std::sync::OnceLock;

use gmc_tools::{
    Availability,
    Condition,
    GmcProduct,
    Price,
    CONTENT_LANGUAGE,
    DEFAULT_CURRENCY,
    TARGET_COUNTRY,
};
use regex::Regex;
use shopify_tools::ShopifyProduct;

use crate::MappingError;

/// Prefix of the offer id used for products whose first variant has no SKU.
pub const SYNTHETIC_OFFER_PREFIX: &str = "shopify-";
/// Brand used when the product has no vendor.
pub const PLACEHOLDER_BRAND: &str = "YourBrand";

fn html_tag() -> &'static Regex {
    static HTML_TAG: OnceLock<Regex> = OnceLock::new();
    HTML_TAG.get_or_init(|| Regex::new(r"<[^>]*>?").expect("HTML tag pattern is valid"))
}

/// Removes anything that looks like an HTML tag. Entities (`&amp;` etc.) are left alone.
pub fn strip_html(html: &str) -> String {
    html_tag().replace_all(html, "").into_owned()
}

/// Builds the Merchant Center product for `product`. `store_domain` is the shop domain that public product links are
/// built on.
pub fn build_gmc_product(product: &ShopifyProduct, store_domain: &str) -> Result<GmcProduct, MappingError> {
    let variant = product.first_variant().ok_or(MappingError::NoVariants { product_id: product.id })?;
    let offer_id = variant
        .sku
        .as_deref()
        .filter(|sku| !sku.is_empty())
        .map(String::from)
        .unwrap_or_else(|| format!("{SYNTHETIC_OFFER_PREFIX}{}", product.id));
    let description = strip_html(product.body_html.as_deref().unwrap_or_default());
    let availability = match variant.inventory_quantity {
        Some(qty) if qty > 0 => Availability::InStock,
        _ => Availability::OutOfStock,
    };
    let gtin = variant.barcode.as_deref().filter(|b| !b.trim().is_empty()).map(String::from);
    let brand = product
        .vendor
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER_BRAND)
        .to_string();
    Ok(GmcProduct {
        offer_id,
        title: product.title.clone(),
        description,
        link: format!("https://{store_domain}/products/{}", product.handle),
        image_link: product.first_image_src().unwrap_or_default().to_string(),
        availability,
        price: Price { value: variant.price.clone(), currency: DEFAULT_CURRENCY.to_string() },
        brand,
        identifier_exists: gtin.is_some(),
        gtin,
        content_language: CONTENT_LANGUAGE.to_string(),
        target_country: TARGET_COUNTRY.to_string(),
        condition: Condition::New,
    })
}
