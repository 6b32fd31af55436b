//! The bundle sync API: fetch tagged products, map them, and upsert them into Merchant Center.

use std::fmt::Debug;

use log::*;
use shopify_tools::ShopifyProduct;

use crate::{
    mapper::build_gmc_product,
    AccessTokenSource,
    BundleCatalog,
    BundlePreview,
    MerchantCenter,
    SyncError,
    SyncOptions,
    SyncOutcome,
    SyncReport,
};

pub struct BundleSyncApi<C, M, T> {
    catalog: C,
    merchant: M,
    tokens: T,
    store_domain: String,
    options: SyncOptions,
}

impl<C, M, T> Debug for BundleSyncApi<C, M, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BundleSyncApi({})", self.store_domain)
    }
}

impl<C, M, T> BundleSyncApi<C, M, T>
where
    C: BundleCatalog,
    M: MerchantCenter,
    T: AccessTokenSource,
{
    pub fn new(catalog: C, merchant: M, tokens: T, store_domain: &str, options: SyncOptions) -> Self {
        Self { catalog, merchant, tokens, store_domain: store_domain.to_string(), options }
    }

    /// Runs a full sync for `tag`: fetch every bundle, then push them all. When no product carries the tag, no
    /// access token is requested and Merchant Center is not contacted.
    pub async fn sync(&self, tag: &str) -> Result<SyncReport, SyncError> {
        let bundles = self.fetch_bundles(tag).await?;
        if bundles.is_empty() {
            info!("No bundles found with tag '{tag}'");
            return Ok(SyncReport::NoBundles);
        }
        let outcomes = self.push_bundles(&bundles).await?;
        let report = SyncReport::Synced(outcomes);
        info!("Synced {} bundles. {} failed.", bundles.len(), report.failure_count());
        Ok(report)
    }

    /// Collects every product, across all catalog pages, that carries `tag`. Any page failure aborts the fetch and
    /// discards what was collected so far.
    pub async fn fetch_bundles(&self, tag: &str) -> Result<Vec<ShopifyProduct>, SyncError> {
        if tag.trim().is_empty() {
            return Err(SyncError::EmptyBundleTag);
        }
        let mut bundles = vec![];
        let mut cursor = None;
        let mut page_count = 0usize;
        loop {
            let page = self.catalog.fetch_products_page(cursor.take()).await?;
            page_count += 1;
            let page_size = page.products.len();
            let before = bundles.len();
            bundles.extend(page.products.into_iter().filter(|p| p.has_tag(tag)));
            debug!("Page {page_count}: {} of {page_size} products are tagged '{tag}'", bundles.len() - before);
            match page.next_page {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        info!("Found {} bundles tagged '{tag}' in {page_count} pages", bundles.len());
        Ok(bundles)
    }

    /// Upserts each bundle into Merchant Center, in order, using a single access token for the whole batch.
    ///
    /// Per-product failures are recorded in the returned outcomes and do not stop the batch, with one exception: if
    /// an insert conflicts and the follow-up update fails, the batch is aborted with [`SyncError::UpdateFallback`]
    /// unless [`SyncOptions::isolate_update_failures`] is set.
    pub async fn push_bundles(&self, bundles: &[ShopifyProduct]) -> Result<Vec<SyncOutcome>, SyncError> {
        let token = self.tokens.acquire_access_token().await.map_err(SyncError::Authentication)?;
        let mut outcomes = Vec::with_capacity(bundles.len());
        for bundle in bundles {
            let product = match build_gmc_product(bundle, &self.store_domain) {
                Ok(p) => p,
                Err(e) => {
                    warn!("Skipping {}: {e}", bundle.title);
                    outcomes.push(SyncOutcome::failed(&bundle.title, e));
                    continue;
                },
            };
            let title = product.title.clone();
            let outcome = match self.merchant.insert_product(&token, &product).await {
                Ok(()) => SyncOutcome::Pushed { title },
                Err(e) if e.is_conflict() => {
                    debug!("{} already exists in Merchant Center. Updating instead.", product.offer_id);
                    match self.merchant.update_product(&token, &product).await {
                        Ok(()) => SyncOutcome::Updated { title },
                        Err(e) if self.options.isolate_update_failures => SyncOutcome::failed(&title, e.details()),
                        Err(e) => {
                            error!("Update of {} failed after an insert conflict. Aborting the batch. {e}", title);
                            return Err(SyncError::UpdateFallback {
                                title,
                                offer_id: product.offer_id,
                                source: e,
                                completed: outcomes,
                            });
                        },
                    }
                },
                Err(e) => SyncOutcome::failed(&title, e.details()),
            };
            if outcome.is_failure() {
                warn!("{outcome}");
            } else {
                info!("{outcome}");
            }
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Fetches the bundles for `tag` and maps them without pushing anything.
    pub async fn preview(&self, tag: &str) -> Result<Vec<BundlePreview>, SyncError> {
        let bundles = self.fetch_bundles(tag).await?;
        let previews = bundles
            .iter()
            .map(|b| BundlePreview { title: b.title.clone(), product: build_gmc_product(b, &self.store_domain) })
            .collect();
        Ok(previews)
    }
}
