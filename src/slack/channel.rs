use std::sync::Arc;

use tracing::{debug, info};

use crate::core::models::Channel;
use crate::errors::SlckError;
use crate::slack::client::SlackApi;
use crate::utils::filters::{filter_by_name_or_id, filter_by_prefix};

/// Lists, resolves and archives channels.
#[derive(Clone)]
pub struct ChannelManager {
    client: Arc<dyn SlackApi>,
}

impl ChannelManager {
    #[must_use]
    pub fn new(client: Arc<dyn SlackApi>) -> Self {
        Self { client }
    }

    /// All channels, or only those whose name starts with `prefix`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the Slack API.
    pub async fn list(&self, prefix: Option<&str>) -> Result<Vec<Channel>, SlckError> {
        let channels: Vec<Channel> = self
            .client
            .list_channels()
            .await?
            .into_iter()
            .map(Channel::from)
            .collect();
        debug!(total = channels.len(), ?prefix, "Fetched channel list");

        Ok(filter_by_prefix(channels, prefix))
    }

    /// Channels whose name equals `name` or whose id equals `id`.
    ///
    /// Both selectors may be given; a channel matching either is returned. With neither,
    /// nothing can match.
    ///
    /// # Errors
    ///
    /// Returns `SlckError::NotFound` when nothing matches, or propagates a Slack API error.
    pub async fn find(
        &self,
        name: Option<&str>,
        id: Option<&str>,
    ) -> Result<Vec<Channel>, SlckError> {
        let found = filter_by_name_or_id(self.list(None).await?, name, id);

        if found.is_empty() {
            return Err(SlckError::NotFound(describe_selector(name, id)));
        }
        Ok(found)
    }

    /// Archive every channel whose name starts with `prefix`.
    ///
    /// With `yes == false` nothing is archived and the channels that would have been are
    /// returned.
    ///
    /// # Errors
    ///
    /// Propagates the first Slack API error. Channels archived before the failure stay
    /// archived.
    pub async fn archive(&self, prefix: &str, yes: bool) -> Result<Vec<Channel>, SlckError> {
        let targets = self.list(Some(prefix)).await?;

        if !yes {
            info!(count = targets.len(), prefix, "Dry run, not archiving");
            return Ok(targets);
        }

        for channel in &targets {
            self.client.archive_channel(&channel.id).await?;
            info!(channel_id = %channel.id, channel_name = %channel.name, "Archived channel");
        }

        Ok(targets)
    }
}

fn describe_selector(name: Option<&str>, id: Option<&str>) -> String {
    match (name, id) {
        (Some(name), Some(id)) => format!("name={name} or id={id}"),
        (Some(name), None) => format!("name={name}"),
        (None, Some(id)) => format!("id={id}"),
        (None, None) => "no name or id given".to_string(),
    }
}
