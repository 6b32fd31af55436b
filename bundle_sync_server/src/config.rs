use std::env;

use bundle_sync_engine::SyncConfig;
use log::*;

const DEFAULT_BSYNC_HOST: &str = "127.0.0.1";
const DEFAULT_BSYNC_PORT: u16 = 8370;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Everything the sync itself needs: the bundle tag, Shopify and Merchant Center credentials.
    pub sync: SyncConfig,
}

impl ServerConfig {
    pub fn from_env_or_default() -> Self {
        let host = env::var("BSYNC_HOST").ok().unwrap_or_else(|| DEFAULT_BSYNC_HOST.into());
        let port = env::var("BSYNC_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for BSYNC_PORT. {e} Using the default, {DEFAULT_BSYNC_PORT}, \
                         instead."
                    );
                    DEFAULT_BSYNC_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_BSYNC_PORT);
        let sync = SyncConfig::from_env_or_default();
        Self { host, port, sync }
    }
}
