use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub const ONLINE_CHANNEL: &str = "online";
pub const CONTENT_LANGUAGE: &str = "en";
pub const TARGET_COUNTRY: &str = "US";
pub const DEFAULT_CURRENCY: &str = "USD";

/// A product resource as accepted by the Content API `products.insert` and `products.update` calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GmcProduct {
    pub offer_id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_link: String,
    pub availability: Availability,
    pub price: Price,
    pub brand: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    pub identifier_exists: bool,
    pub content_language: String,
    pub target_country: String,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Decimal amount, e.g. "49.95"
    pub value: String,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "in stock")]
    InStock,
    #[serde(rename = "out of stock")]
    OutOfStock,
}

impl Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InStock => f.write_str("in stock"),
            Self::OutOfStock => f.write_str("out of stock"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "new")]
    New,
}

/// The REST id Merchant Center assigns to an online product: `channel:contentLanguage:targetCountry:offerId`.
pub fn product_rest_id(offer_id: &str) -> String {
    format!("{ONLINE_CHANNEL}:{CONTENT_LANGUAGE}:{TARGET_COUNTRY}:{offer_id}")
}
