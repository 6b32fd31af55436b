use anyhow::{anyhow, Result};
use bundle_sync_engine::{integrations::new_live_sync_api, SyncConfig};
use gmc_tools::GoogleOAuthClient;
use log::info;

use crate::formatting::{format_error, format_preview, format_report};

fn load_config(tag: Option<String>) -> SyncConfig {
    SyncConfig::from_env_or_default().with_tag(tag)
}

pub async fn run_sync(tag: Option<String>) -> Result<()> {
    let config = load_config(tag);
    let api = new_live_sync_api(&config)?;
    info!("Syncing bundles tagged '{}' from {}", config.bundle_tag, config.shopify.shop);
    match api.sync(&config.bundle_tag).await {
        Ok(report) => {
            format_report(&report).iter().for_each(|line| println!("{line}"));
            Ok(())
        },
        Err(e) => {
            format_error(&e).iter().for_each(|line| eprintln!("{line}"));
            Err(anyhow!("Sync aborted"))
        },
    }
}

pub async fn preview_bundles(tag: Option<String>, json: bool) -> Result<()> {
    let config = load_config(tag);
    let api = new_live_sync_api(&config)?;
    let previews = api.preview(&config.bundle_tag).await?;
    if json {
        let products = previews.iter().filter_map(|p| p.product.as_ref().ok()).collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&products)?);
    } else {
        format_preview(&previews).iter().for_each(|line| println!("{line}"));
    }
    Ok(())
}

pub async fn check_token() -> Result<()> {
    let config = load_config(None);
    let client = GoogleOAuthClient::new(&config.gmc)?;
    let token = client.refresh_access_token().await?;
    println!(
        "Obtained a {} access token for merchant {}. Expires in {}s.",
        token.token_type,
        config.gmc.merchant_id,
        token.expires_in.map(|s| s.to_string()).unwrap_or_else(|| "?".to_string())
    );
    Ok(())
}
