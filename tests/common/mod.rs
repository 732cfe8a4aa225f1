//! Fixture Slack collaborator shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};
use slck::core::models::{ChannelRecord, HistoryPage};
use slck::errors::SlckError;
use slck::slack::SlackApi;

/// History request as seen by the fixture: `(channel_id, cursor)`.
pub type HistoryCall = (String, Option<String>);

pub struct MockSlackClient {
    pub token: String,
    channels: Vec<ChannelRecord>,
    history_pages: Mutex<VecDeque<Result<HistoryPage, SlckError>>>,
    history_calls: Mutex<Vec<HistoryCall>>,
    archived: Mutex<Vec<String>>,
    fail_archive_for: Option<String>,
}

impl MockSlackClient {
    /// Three channels: general/C111, random/C222, other/C333.
    pub fn new() -> Self {
        Self::with_channels(&[("C111", "general"), ("C222", "random"), ("C333", "other")])
    }

    pub fn with_channels(channels: &[(&str, &str)]) -> Self {
        Self {
            token: "dummy-token".to_string(),
            channels: channels
                .iter()
                .map(|(id, name)| ChannelRecord {
                    id: (*id).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
            history_pages: Mutex::new(VecDeque::new()),
            history_calls: Mutex::new(Vec::new()),
            archived: Mutex::new(Vec::new()),
            fail_archive_for: None,
        }
    }

    /// Queue a page built from raw JSON; pages are served in order.
    pub fn push_page(self, page: Value) -> Self {
        let page: HistoryPage = serde_json::from_value(page).unwrap();
        self.history_pages.lock().unwrap().push_back(Ok(page));
        self
    }

    pub fn push_error(self, error: SlckError) -> Self {
        self.history_pages.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn fail_archive_for(mut self, channel_id: &str) -> Self {
        self.fail_archive_for = Some(channel_id.to_string());
        self
    }

    pub fn history_calls(&self) -> Vec<HistoryCall> {
        self.history_calls.lock().unwrap().clone()
    }

    pub fn archived(&self) -> Vec<String> {
        self.archived.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlackApi for MockSlackClient {
    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, SlckError> {
        Ok(self.channels.clone())
    }

    async fn conversations_history(
        &self,
        channel_id: &str,
        cursor: Option<&str>,
    ) -> Result<HistoryPage, SlckError> {
        self.history_calls
            .lock()
            .unwrap()
            .push((channel_id.to_string(), cursor.map(str::to_string)));

        self.history_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(SlckError::Api("fixture has no more pages".to_string())))
    }

    async fn archive_channel(&self, channel_id: &str) -> Result<(), SlckError> {
        if self.fail_archive_for.as_deref() == Some(channel_id) {
            return Err(SlckError::Api("conversations.archive error: not_authorized".to_string()));
        }
        self.archived.lock().unwrap().push(channel_id.to_string());
        Ok(())
    }
}

pub fn message(user: &str, ts: &str, text: &str) -> Value {
    json!({ "type": "message", "user": user, "ts": ts, "text": text })
}
