use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod command_handler;
mod formatting;

use command_handler::{check_token, preview_bundles, run_sync};

#[derive(Parser, Debug)]
#[command(version = "0.1.0", about = "Sync Shopify bundle products to Google Merchant Center")]
pub struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch every bundle from Shopify and upsert it into Merchant Center
    Sync {
        /// The product tag that marks bundles. Overrides BUNDLE_TAG.
        #[arg(short = 't', long = "tag")]
        tag: Option<String>,
    },
    /// List the bundles that would be synced, and the Merchant Center products they map to. Nothing is pushed.
    Bundles {
        /// The product tag that marks bundles. Overrides BUNDLE_TAG.
        #[arg(short = 't', long = "tag")]
        tag: Option<String>,
        /// Print the mapped products as JSON
        #[arg(short = 'j', long = "json")]
        json: bool,
    },
    /// Check that the Merchant Center OAuth credentials yield an access token
    Token,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let cli = Arguments::parse();
    let result = match cli.command {
        Command::Sync { tag } => run_sync(tag).await,
        Command::Bundles { tag, json } => preview_bundles(tag, json).await,
        Command::Token => check_token().await,
    };
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
