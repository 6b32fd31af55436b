use std::fmt::Display;

use gmc_tools::GmcProduct;

use crate::MappingError;

pub const NO_BUNDLES_MESSAGE: &str = "No bundles found with the specified tag.";
pub const SYNC_DONE_MESSAGE: &str = "Done syncing bundles!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// When false (the default), a failed update following an insert conflict aborts the rest of the batch. When
    /// true, the failure is recorded against that product and the batch carries on.
    pub isolate_update_failures: bool,
}

/// What happened to a single bundle during a push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Pushed { title: String },
    Updated { title: String },
    Failed { title: String, reason: String },
}

impl SyncOutcome {
    pub fn failed<S: Display>(title: &str, reason: S) -> Self {
        Self::Failed { title: title.to_string(), reason: reason.to_string() }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Pushed { title } | Self::Updated { title } | Self::Failed { title, .. } => title,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pushed { title } => write!(f, "Pushed: {title}"),
            Self::Updated { title } => write!(f, "Updated: {title}"),
            Self::Failed { title, reason } => write!(f, "Error for {title}: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncReport {
    /// No product in the catalog carries the bundle tag. Merchant Center was not contacted.
    NoBundles,
    Synced(Vec<SyncOutcome>),
}

impl SyncReport {
    pub fn outcomes(&self) -> &[SyncOutcome] {
        match self {
            Self::NoBundles => &[],
            Self::Synced(outcomes) => outcomes.as_slice(),
        }
    }

    /// The human-readable outcome lines, in input order.
    pub fn details(&self) -> Vec<String> {
        self.outcomes().iter().map(|o| o.to_string()).collect()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes().iter().filter(|o| o.is_failure()).count()
    }
}

/// A bundle and the Merchant Center product it would be pushed as. Used for dry runs.
#[derive(Debug, Clone)]
pub struct BundlePreview {
    pub title: String,
    pub product: Result<GmcProduct, MappingError>,
}
