use gmc_tools::GmcApiError;
use shopify_tools::ShopifyApiError;
use thiserror::Error;

use crate::SyncOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("Product {product_id} has no variants")]
    NoVariants { product_id: i64 },
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Could not initialize the sync. {0}")]
    Initialization(String),
    #[error("No bundle tag is configured. Set BUNDLE_TAG to the tag that marks bundle products.")]
    EmptyBundleTag,
    #[error("Could not fetch products from Shopify. {0}")]
    Fetch(#[from] ShopifyApiError),
    #[error("Could not authenticate with Merchant Center. {0}")]
    Authentication(GmcApiError),
    #[error("Updating {title} ({offer_id}) after an insert conflict failed. {source}")]
    UpdateFallback {
        title: String,
        offer_id: String,
        source: GmcApiError,
        /// Outcomes of the products processed before the failure.
        completed: Vec<SyncOutcome>,
    },
}

impl SyncError {
    /// Outcomes recorded before the run was aborted, if any.
    pub fn completed_outcomes(&self) -> &[SyncOutcome] {
        match self {
            Self::UpdateFallback { completed, .. } => completed.as_slice(),
            _ => &[],
        }
    }
}
