//! Argument parsing and dispatch for the `slck` binary.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::errors::SlckError;
use crate::slack::{ChannelManager, MessageManager, SlackApi};

/// Command-line client for listing and archiving Slack channels and reading history.
#[derive(Parser, Debug)]
#[command(name = "slck", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List channels, optionally only those whose name starts with PREFIX
    Channels { prefix: Option<String> },

    /// Dump a channel's history, selected by exactly one of --name or --id
    Messages {
        #[arg(long = "name")]
        channel_name: Option<String>,

        #[arg(long = "id")]
        channel_id: Option<String>,
    },

    /// Archive channels whose name starts with PREFIX (dry run unless --yes)
    Archive {
        prefix: String,

        #[arg(short, long)]
        yes: bool,
    },
}

/// Execute `command` against `client` and return the result as JSON.
///
/// # Errors
///
/// Propagates errors from the managers.
pub async fn run(command: Command, client: Arc<dyn SlackApi>) -> Result<Value, SlckError> {
    match command {
        Command::Channels { prefix } => {
            let channels = ChannelManager::new(client).list(prefix.as_deref()).await?;
            Ok(serde_json::to_value(channels)?)
        }
        Command::Messages {
            channel_name,
            channel_id,
        } => {
            let messages = MessageManager::new(client)
                .list(channel_name.as_deref(), channel_id.as_deref())
                .await?;
            Ok(serde_json::to_value(messages)?)
        }
        Command::Archive { prefix, yes } => {
            let channels = ChannelManager::new(client).archive(&prefix, yes).await?;
            Ok(serde_json::json!({
                "archived": yes,
                "channels": channels,
            }))
        }
    }
}
