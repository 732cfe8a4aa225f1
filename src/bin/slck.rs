use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use slck::cli::{self, Cli};
use slck::core::config::AppConfig;
use slck::slack::SlackClient;

#[tokio::main]
async fn main() -> Result<()> {
    slck::setup_logging();

    let args = Cli::parse();

    let config = AppConfig::from_env().context("loading configuration")?;
    let client = Arc::new(SlackClient::from_config(&config));

    let output = cli::run(args.command, client).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
