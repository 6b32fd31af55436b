use serde::{Deserialize, Serialize};

/// A product as returned by the `products.json` listing, restricted to the fields in
/// [`PRODUCT_FIELDS`](crate::PRODUCT_FIELDS). `id`, `title` and `handle` are required; a product missing any of them
/// fails deserialization of the whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopifyProduct {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body_html: Option<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub product_type: Option<String>,
    /// Comma-separated tag list, e.g. "bundle, Summer, gift"
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub vendor: Option<String>,
    pub handle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    /// Shopify expresses prices as decimal strings, e.g. "49.95"
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub inventory_quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub id: Option<i64>,
    pub src: String,
}

impl ShopifyProduct {
    /// The product's tags, trimmed and lower-cased. Empty entries are dropped.
    pub fn normalized_tags(&self) -> impl Iterator<Item = String> + '_ {
        self.tags.split(',').map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty())
    }

    /// Case-insensitive, whitespace-insensitive exact tag match. A blank tag never matches.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        !tag.is_empty() && self.normalized_tags().any(|t| t == tag)
    }

    pub fn first_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }

    pub fn first_image_src(&self) -> Option<&str> {
        self.images.first().map(|i| i.src.as_str())
    }
}
