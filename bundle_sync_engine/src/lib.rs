//! Bundle Sync Engine
//!
//! The engine pulls every product carrying a given tag out of a Shopify catalog, converts each one into a Google
//! Merchant Center product and upserts it (insert, then update when Merchant Center reports that the offer already
//! exists).
//!
//! The library is provider-agnostic. [`BundleSyncApi`] only depends on the three traits in [`mod@traits`]:
//! * [`BundleCatalog`] pages through the source catalog,
//! * [`MerchantCenter`] inserts and updates destination listings,
//! * [`AccessTokenSource`] hands out the bearer token used for the whole run.
//!
//! The [`integrations`] module implements those traits for the real Shopify and Merchant Center clients.
//!
//! A run is strictly sequential. Nothing is cached or persisted between runs.
pub mod config;
mod errors;
pub mod integrations;
pub mod mapper;
mod sync_api;
pub mod sync_objects;
pub mod traits;

pub use config::SyncConfig;
pub use errors::{MappingError, SyncError};
pub use sync_api::BundleSyncApi;
pub use sync_objects::{
    BundlePreview,
    SyncOptions,
    SyncOutcome,
    SyncReport,
    NO_BUNDLES_MESSAGE,
    SYNC_DONE_MESSAGE,
};
pub use traits::{AccessTokenSource, BundleCatalog, MerchantCenter};
