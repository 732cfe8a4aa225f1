/// slck - a small convenience layer over the Slack Web API.
///
/// Lists and archives channels, and pages through channel history into flat
/// [`core::models::Message`] records.
///
/// # Architecture
///
/// - [`slack::SlackApi`] is the seam to Slack: list channels, fetch a history page,
///   archive a channel. [`slack::SlackClient`] implements it over HTTP.
/// - [`slack::ChannelManager`] lists, resolves and archives channels.
/// - [`slack::MessageManager`] resolves a channel and walks its history cursor.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use slck::core::config::AppConfig;
/// use slck::slack::{MessageManager, SlackClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     slck::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client = Arc::new(SlackClient::from_config(&config));
///
///     let messages = MessageManager::new(client).list(Some("general"), None).await?;
///     for message in &messages {
///         println!("{} {} reactions", message.ts, message.reaction_count);
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod cli;
pub mod core;
pub mod errors;
pub mod slack;
pub mod utils;

/// Configure structured JSON logging on stderr.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// slck::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
