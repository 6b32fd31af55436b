mod support;

use bundle_sync_engine::{SyncError, SyncOptions, SyncOutcome, SyncReport};
use gmc_tools::{GmcApiError, GmcProduct};
use support::*;

fn offer(product: &GmcProduct, offer_id: &str) -> bool {
    product.offer_id == offer_id
}

fn three_bundles() -> MockCatalog {
    let mut catalog = MockCatalog::new();
    catalog.expect_fetch_products_page().times(1).returning(|_| {
        Ok(page(
            vec![
                product(1, "Starter Kit", "KIT-1", "bundle"),
                product(2, "Gift Box", "BOX-1", "bundle"),
                product(3, "Travel Set", "TRV-1", "bundle"),
            ],
            None,
        ))
    });
    catalog
}

#[tokio::test]
async fn new_offer_is_pushed() {
    let _ = env_logger::try_init();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_fetch_products_page()
        .times(1)
        .returning(|_| Ok(page(vec![product(1, "Starter Kit", "KIT-1", "bundle")], None)));
    let mut merchant = MockMerchant::new();
    merchant
        .expect_insert_product()
        .withf(|token, p| token.reveal() == "ya29.test-token" && offer(p, "KIT-1"))
        .times(1)
        .returning(|_, _| Ok(()));
    merchant.expect_update_product().times(0);
    let api = sync_api(catalog, merchant, token_source(1), SyncOptions::default());
    let report = api.sync("bundle").await.expect("sync failed");
    assert_eq!(report.details(), vec!["Pushed: Starter Kit"]);
}

#[tokio::test]
async fn conflict_falls_back_to_a_single_update() {
    let _ = env_logger::try_init();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_fetch_products_page()
        .times(1)
        .returning(|_| Ok(page(vec![product(1, "Starter Kit", "KIT-1", "bundle")], None)));
    let mut merchant = MockMerchant::new();
    merchant.expect_insert_product().times(1).returning(|_, _| Err(conflict()));
    merchant.expect_update_product().withf(|_, p| offer(p, "KIT-1")).times(1).returning(|_, _| Ok(()));
    let api = sync_api(catalog, merchant, token_source(1), SyncOptions::default());
    let report = api.sync("bundle").await.expect("sync failed");
    assert_eq!(report, SyncReport::Synced(vec![SyncOutcome::Updated { title: "Starter Kit".into() }]));
    assert_eq!(report.details(), vec!["Updated: Starter Kit"]);
}

#[tokio::test]
async fn insert_failure_does_not_stop_the_batch() {
    let _ = env_logger::try_init();
    let mut merchant = MockMerchant::new();
    merchant.expect_insert_product().withf(|_, p| offer(p, "KIT-1")).times(1).returning(|_, _| Ok(()));
    merchant
        .expect_insert_product()
        .withf(|_, p| offer(p, "BOX-1"))
        .times(1)
        .returning(|_, _| Err(server_error(r#"{"error":{"code":500,"message":"Backend Error"}}"#)));
    merchant.expect_insert_product().withf(|_, p| offer(p, "TRV-1")).times(1).returning(|_, _| Err(conflict()));
    merchant.expect_update_product().withf(|_, p| offer(p, "TRV-1")).times(1).returning(|_, _| Ok(()));
    let api = sync_api(three_bundles(), merchant, token_source(1), SyncOptions::default());
    let report = api.sync("bundle").await.expect("sync failed");
    assert_eq!(
        report.details(),
        vec![
            "Pushed: Starter Kit",
            r#"Error for Gift Box: {"error":{"code":500,"message":"Backend Error"}}"#,
            "Updated: Travel Set",
        ]
    );
    assert_eq!(report.failure_count(), 1);
}

#[tokio::test]
async fn transport_errors_are_recorded_with_their_message() {
    let _ = env_logger::try_init();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_fetch_products_page()
        .times(1)
        .returning(|_| Ok(page(vec![product(1, "Starter Kit", "KIT-1", "bundle")], None)));
    let mut merchant = MockMerchant::new();
    merchant
        .expect_insert_product()
        .times(1)
        .returning(|_, _| Err(GmcApiError::RestResponseError("connection reset by peer".into())));
    let api = sync_api(catalog, merchant, token_source(1), SyncOptions::default());
    let report = api.sync("bundle").await.expect("sync failed");
    assert_eq!(report.details(), vec!["Error for Starter Kit: Invalid REST response: connection reset by peer"]);
}

#[tokio::test]
async fn failed_update_after_conflict_aborts_the_batch() {
    let _ = env_logger::try_init();
    let mut merchant = MockMerchant::new();
    merchant.expect_insert_product().withf(|_, p| offer(p, "KIT-1")).times(1).returning(|_, _| Ok(()));
    merchant.expect_insert_product().withf(|_, p| offer(p, "BOX-1")).times(1).returning(|_, _| Err(conflict()));
    merchant
        .expect_update_product()
        .withf(|_, p| offer(p, "BOX-1"))
        .times(1)
        .returning(|_, _| Err(server_error("quota exceeded")));
    merchant.expect_insert_product().withf(|_, p| offer(p, "TRV-1")).times(0);
    let api = sync_api(three_bundles(), merchant, token_source(1), SyncOptions::default());
    let err = api.sync("bundle").await.expect_err("Expected the batch to abort");
    match &err {
        SyncError::UpdateFallback { title, offer_id, source, completed } => {
            assert_eq!(title, "Gift Box");
            assert_eq!(offer_id, "BOX-1");
            assert_eq!(source.status(), Some(500));
            assert_eq!(completed, &vec![SyncOutcome::Pushed { title: "Starter Kit".into() }]);
        },
        e => panic!("Unexpected error: {e}"),
    }
    assert_eq!(err.completed_outcomes().len(), 1);
}

#[tokio::test]
async fn failed_update_is_isolated_when_configured() {
    let _ = env_logger::try_init();
    let mut merchant = MockMerchant::new();
    merchant.expect_insert_product().withf(|_, p| offer(p, "KIT-1")).times(1).returning(|_, _| Ok(()));
    merchant.expect_insert_product().withf(|_, p| offer(p, "BOX-1")).times(1).returning(|_, _| Err(conflict()));
    merchant
        .expect_update_product()
        .withf(|_, p| offer(p, "BOX-1"))
        .times(1)
        .returning(|_, _| Err(server_error("quota exceeded")));
    merchant.expect_insert_product().withf(|_, p| offer(p, "TRV-1")).times(1).returning(|_, _| Ok(()));
    let options = SyncOptions { isolate_update_failures: true };
    let api = sync_api(three_bundles(), merchant, token_source(1), options);
    let report = api.sync("bundle").await.expect("sync failed");
    assert_eq!(report.details(), vec!["Pushed: Starter Kit", "Error for Gift Box: quota exceeded", "Pushed: Travel Set"]);
}

#[tokio::test]
async fn token_is_acquired_once_per_batch() {
    let _ = env_logger::try_init();
    let mut merchant = MockMerchant::new();
    merchant.expect_insert_product().times(3).returning(|_, _| Ok(()));
    let api = sync_api(three_bundles(), merchant, token_source(1), SyncOptions::default());
    let report = api.sync("bundle").await.expect("sync failed");
    assert_eq!(report.outcomes().len(), 3);
}

#[tokio::test]
async fn token_failure_is_fatal() {
    let _ = env_logger::try_init();
    let mut tokens = MockTokens::new();
    tokens
        .expect_acquire_access_token()
        .times(1)
        .returning(|| Err(GmcApiError::OAuthError("Token exchange failed with status 400. invalid_grant".into())));
    let mut merchant = MockMerchant::new();
    merchant.expect_insert_product().times(0);
    let api = sync_api(three_bundles(), merchant, tokens, SyncOptions::default());
    let err = api.sync("bundle").await.expect_err("Expected authentication to fail");
    assert!(matches!(err, SyncError::Authentication(GmcApiError::OAuthError(_))));
}

#[tokio::test]
async fn product_without_variants_is_recorded_and_skipped() {
    let _ = env_logger::try_init();
    let mut catalog = MockCatalog::new();
    catalog.expect_fetch_products_page().times(1).returning(|_| {
        let mut broken = product(2, "Empty Bundle", "EMP-1", "bundle");
        broken.variants.clear();
        Ok(page(vec![broken, product(3, "Travel Set", "TRV-1", "bundle")], None))
    });
    let mut merchant = MockMerchant::new();
    merchant.expect_insert_product().withf(|_, p| offer(p, "TRV-1")).times(1).returning(|_, _| Ok(()));
    let api = sync_api(catalog, merchant, token_source(1), SyncOptions::default());
    let report = api.sync("bundle").await.expect("sync failed");
    assert_eq!(report.details(), vec!["Error for Empty Bundle: Product 2 has no variants", "Pushed: Travel Set"]);
}

#[tokio::test]
async fn offer_id_falls_back_to_synthetic_id() {
    let _ = env_logger::try_init();
    let mut catalog = MockCatalog::new();
    catalog
        .expect_fetch_products_page()
        .times(1)
        .returning(|_| Ok(page(vec![product(42, "Starter Kit", "", "bundle")], None)));
    let mut merchant = MockMerchant::new();
    merchant.expect_insert_product().times(1).returning(|_, _| Err(conflict()));
    merchant.expect_update_product().withf(|_, p| offer(p, "shopify-42")).times(1).returning(|_, _| Ok(()));
    let api = sync_api(catalog, merchant, token_source(1), SyncOptions::default());
    let report = api.sync("bundle").await.expect("sync failed");
    assert_eq!(report.details(), vec!["Updated: Starter Kit"]);
}
