use bundle_sync_engine::{BundlePreview, SyncError, SyncReport, NO_BUNDLES_MESSAGE, SYNC_DONE_MESSAGE};

/// One line per bundle, followed by a closing status line.
pub fn format_report(report: &SyncReport) -> Vec<String> {
    match report {
        SyncReport::NoBundles => vec![NO_BUNDLES_MESSAGE.to_string()],
        SyncReport::Synced(_) => {
            let mut lines = report.details();
            lines.push(SYNC_DONE_MESSAGE.to_string());
            lines
        },
    }
}

/// Lines printed when a sync fails. Outcomes recorded before the failure are listed first.
pub fn format_error(error: &SyncError) -> Vec<String> {
    let mut lines = error.completed_outcomes().iter().map(|o| o.to_string()).collect::<Vec<_>>();
    lines.push(format!("Sync error: {error}"));
    lines
}

pub fn format_preview(previews: &[BundlePreview]) -> Vec<String> {
    if previews.is_empty() {
        return vec![NO_BUNDLES_MESSAGE.to_string()];
    }
    previews
        .iter()
        .map(|p| match &p.product {
            Ok(product) => format!(
                "{:<30} offer: {:<20} {} {} ({})",
                p.title, product.offer_id, product.price.value, product.price.currency, product.availability
            ),
            Err(e) => format!("{:<30} cannot be synced: {e}", p.title),
        })
        .collect()
}
