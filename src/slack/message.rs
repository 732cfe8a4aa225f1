use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::models::{Message, MessageRecord, User};
use crate::errors::SlckError;
use crate::slack::channel::ChannelManager;
use crate::slack::client::SlackApi;
use crate::utils::filters::is_message_record;

/// Decode one raw `conversations.history` entry.
///
/// `reply_count`, `reply_users`, `reactions` and each reaction's `count` may be absent and
/// count as zero.
///
/// # Errors
///
/// Returns `SlckError::Parse` if `type`, `user`, `ts` or `text` is missing or not a string.
pub fn parse_message(record: &Value) -> Result<Message, SlckError> {
    let record = MessageRecord::deserialize(record)
        .map_err(|e| SlckError::Parse(format!("malformed message record: {e}")))?;

    Ok(Message {
        message_type: record.kind,
        user: User { id: record.user },
        ts: record.ts,
        text: record.text,
        reply_count: record.reply_count,
        reply_user_count: record.reply_users.len() as u64,
        reaction_count: record.reactions.iter().map(|r| r.count).sum(),
    })
}

/// Reads channel history.
pub struct MessageManager {
    client: Arc<dyn SlackApi>,
}

impl MessageManager {
    #[must_use]
    pub fn new(client: Arc<dyn SlackApi>) -> Self {
        Self { client }
    }

    /// Every message in a channel, selected by exactly one of name or id.
    ///
    /// Empty strings count as not given. A name is resolved with
    /// [`ChannelManager::find`] and the first match wins. Entries whose `type` is not
    /// `"message"` are skipped. Order is whatever Slack returns.
    ///
    /// # Errors
    ///
    /// - `SlckError::InvalidArgument` if both or neither selector is given.
    /// - `SlckError::NotFound` if the name resolves to no channel.
    /// - `SlckError::Parse` if a message is malformed or a page claims more results without
    ///   a cursor.
    /// - Any Slack API error, as is. Nothing accumulated so far is returned.
    pub async fn list(
        &self,
        channel_name: Option<&str>,
        channel_id: Option<&str>,
    ) -> Result<Vec<Message>, SlckError> {
        let channel_name = channel_name.filter(|s| !s.is_empty());
        let channel_id = channel_id.filter(|s| !s.is_empty());

        let channel_id = match (channel_name, channel_id) {
            (None, None) => {
                return Err(SlckError::InvalidArgument(
                    "one of channel_name or channel_id is required".to_string(),
                ));
            }
            (Some(_), Some(_)) => {
                return Err(SlckError::InvalidArgument(
                    "received both channel_name and channel_id, expected only one".to_string(),
                ));
            }
            (None, Some(id)) => id.to_string(),
            (Some(name), None) => self.resolve_channel_id(name).await?,
        };

        self.fetch_history(&channel_id).await
    }

    async fn resolve_channel_id(&self, name: &str) -> Result<String, SlckError> {
        let mut matches = ChannelManager::new(Arc::clone(&self.client))
            .find(Some(name), None)
            .await?;

        if matches.len() > 1 {
            warn!(
                channel_name = name,
                count = matches.len(),
                "Channel name is ambiguous, using the first match"
            );
        }
        // find() never returns an empty list
        Ok(matches.swap_remove(0).id)
    }

    async fn fetch_history(&self, channel_id: &str) -> Result<Vec<Message>, SlckError> {
        let mut messages = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .client
                .conversations_history(channel_id, cursor.as_deref())
                .await?;
            pages += 1;

            for record in page.messages.iter().filter(|r| is_message_record(r)) {
                messages.push(parse_message(record)?);
            }

            if !page.has_more {
                break;
            }
            let next = page.next_cursor().ok_or_else(|| {
                SlckError::Parse(format!(
                    "conversations.history for {channel_id} reported has_more without a next_cursor"
                ))
            })?;
            cursor = Some(next.to_string());
        }

        debug!(channel_id, pages, count = messages.len(), "Fetched channel history");
        Ok(messages)
    }
}
