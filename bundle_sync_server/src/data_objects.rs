use bundle_sync_engine::SYNC_DONE_MESSAGE;
use serde::{Deserialize, Serialize};

/// The tag that marks bundle products, shared with the route handlers as app data.
#[derive(Debug, Clone)]
pub struct BundleTag(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    pub status: String,
    /// One human-readable line per bundle, in catalog order.
    pub details: Vec<String>,
}

impl SyncResponse {
    pub fn done(details: Vec<String>) -> Self {
        Self { status: SYNC_DONE_MESSAGE.to_string(), details }
    }
}
