use std::env;

use bsync_common::parse_boolean_flag;
use gmc_tools::GmcConfig;
use log::*;
use shopify_tools::ShopifyConfig;

use crate::SyncOptions;

#[derive(Debug, Clone, Default)]
pub struct SyncConfig {
    /// Products carrying this tag (compared case-insensitively) are treated as bundles.
    pub bundle_tag: String,
    pub options: SyncOptions,
    pub shopify: ShopifyConfig,
    pub gmc: GmcConfig,
}

impl SyncConfig {
    pub fn from_env_or_default() -> Self {
        let bundle_tag = bundle_tag_or_empty(env::var("BUNDLE_TAG").ok());
        let isolate_update_failures = parse_boolean_flag(env::var("BSYNC_ISOLATE_UPDATE_FAILURES").ok(), false);
        if isolate_update_failures {
            info!("🪛️ Update failures after an insert conflict will be recorded per product instead of aborting.");
        }
        Self {
            bundle_tag,
            options: SyncOptions { isolate_update_failures },
            shopify: ShopifyConfig::new_from_env_or_default(),
            gmc: GmcConfig::new_from_env_or_default(),
        }
    }

    /// Returns a copy of this configuration with the bundle tag replaced, if `tag` is given.
    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        if let Some(tag) = tag {
            self.bundle_tag = tag;
        }
        self
    }
}

/// A missing or blank tag is logged once and kept empty; the sync refuses it later.
fn bundle_tag_or_empty(value: Option<String>) -> String {
    let tag = value.unwrap_or_default();
    if tag.trim().is_empty() {
        error!("🪛️ BUNDLE_TAG is not set. Syncs will be refused until it names the product tag that marks bundles.");
    }
    tag
}
