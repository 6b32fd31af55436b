use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use bundle_sync_engine::integrations::{new_live_sync_api, LiveSyncApi};
use gmc_tools::{GmcApi, GoogleOAuthClient};
use shopify_tools::ShopifyApi;

use crate::{
    config::ServerConfig,
    data_objects::BundleTag,
    errors::ServerError,
    routes::{health, SyncBundlesRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let api = new_live_sync_api(&config.sync).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, api)?;
    srv.await.map_err(ServerError::from)
}

pub fn create_server_instance(config: ServerConfig, api: LiveSyncApi) -> Result<Server, ServerError> {
    let api = web::Data::new(api);
    let tag = web::Data::new(BundleTag(config.sync.bundle_tag.clone()));
    let srv = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("bsync::access_log"))
            .app_data(api.clone())
            .app_data(tag.clone())
            .service(health)
            .service(SyncBundlesRoute::<ShopifyApi, GmcApi, GoogleOAuthClient>::new())
    })
    // Syncs of large catalogs can take minutes
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
