//! Slack API client module
//!
//! The managers only ever talk to Slack through [`SlackApi`], so tests can swap in a
//! fixture. [`SlackClient`] is the real implementation.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use slack_morphism::prelude::SlackApiConversationsArchiveRequest;
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::core::config::{AppConfig, DEFAULT_API_BASE_URL, DEFAULT_PAGE_LIMIT};
use crate::core::models::{ChannelListPage, ChannelRecord, HistoryPage};
use crate::errors::SlckError;

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// The three Slack operations this crate depends on.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Every channel in the workspace, in the order Slack returns them.
    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, SlckError>;

    /// A single page of `conversations.history`. `cursor` is `None` for the first page.
    async fn conversations_history(
        &self,
        channel_id: &str,
        cursor: Option<&str>,
    ) -> Result<HistoryPage, SlckError>;

    async fn archive_channel(&self, channel_id: &str) -> Result<(), SlckError>;
}

/// Slack Web API client authenticated with a bearer token.
pub struct SlackClient {
    token: SlackApiToken,
    base_url: String,
    page_limit: u16,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.slack_bot_token.clone())
            .with_base_url(&config.api_base_url)
            .with_page_limit(config.page_limit)
    }

    /// Override the Web API endpoint for every call, archive included.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_page_limit(mut self, page_limit: u16) -> Self {
        self.page_limit = page_limit;
        self
    }

    #[must_use]
    pub fn token(&self) -> &SlackApiToken {
        &self.token
    }

    /// GET a Web API method and decode the body once Slack reports `ok: true`.
    async fn call_api<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<T, SlckError> {
        debug!(method, ?params, "Calling Slack API");
        let request = HTTP_CLIENT.get(self.method_url(method)).query(params);
        self.send_api(method, request).await
    }

    /// POST a JSON body to a Web API method.
    async fn post_api<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<T, SlckError> {
        debug!(method, "Posting to Slack API");
        let request = HTTP_CLIENT.post(self.method_url(method)).json(body);
        self.send_api(method, request).await
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.base_url)
    }

    async fn send_api<T: DeserializeOwned>(
        &self,
        method: &str,
        request: RequestBuilder,
    ) -> Result<T, SlckError> {
        let resp = request
            .bearer_auth(&self.token.token_value.0)
            .send()
            .await
            .map_err(|e| SlckError::Http(format!("{method} request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(SlckError::Api(format!("{method} HTTP {}", resp.status())));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| SlckError::Parse(format!("{method} JSON parse error: {e}")))?;

        let body = check_ok(method, body)?;
        serde_json::from_value(body)
            .map_err(|e| SlckError::Parse(format!("{method} unexpected response shape: {e}")))
    }
}

/// Walk `conversations.list` pages until Slack stops handing out a cursor.
///
/// `fetch_page` receives the cursor for the page to load, `None` for the first one.
async fn collect_channel_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<ChannelRecord>, SlckError>
where
    F: FnMut(Option<String>) -> Fut + Send,
    Fut: Future<Output = Result<ChannelListPage, SlckError>> + Send,
{
    let mut channels = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch_page(cursor.take()).await?;
        let next = page.next_cursor().map(str::to_string);
        channels.extend(page.channels);

        match next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(channels)
}

#[async_trait]
impl SlackApi for SlackClient {
    /// # Errors
    ///
    /// Returns an error if any `conversations.list` page fails.
    async fn list_channels(&self) -> Result<Vec<ChannelRecord>, SlckError> {
        collect_channel_pages(|cursor| async move {
            let params = build_list_params(cursor.as_deref(), self.page_limit);
            self.call_api("conversations.list", &params).await
        })
        .await
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Slack reports `ok: false`.
    async fn conversations_history(
        &self,
        channel_id: &str,
        cursor: Option<&str>,
    ) -> Result<HistoryPage, SlckError> {
        let params = build_history_params(channel_id, cursor, self.page_limit);
        self.call_api("conversations.history", &params).await
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Slack rejects the archive.
    async fn archive_channel(&self, channel_id: &str) -> Result<(), SlckError> {
        let request =
            SlackApiConversationsArchiveRequest::new(SlackChannelId(channel_id.to_string()));
        let _: Value = self.post_api("conversations.archive", &request).await?;

        Ok(())
    }
}

#[must_use]
fn build_list_params(cursor: Option<&str>, limit: u16) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("exclude_archived", "true".to_string()),
        ("limit", limit.to_string()),
    ];
    if let Some(cursor) = cursor {
        params.push(("cursor", cursor.to_string()));
    }
    params
}

#[must_use]
fn build_history_params(
    channel_id: &str,
    cursor: Option<&str>,
    limit: u16,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("channel", channel_id.to_string()),
        ("limit", limit.to_string()),
    ];
    if let Some(cursor) = cursor {
        params.push(("cursor", cursor.to_string()));
    }
    params
}

/// Slack answers 200 even on failure; `ok: false` carries the error code.
fn check_ok(method: &str, body: Value) -> Result<Value, SlckError> {
    if body.get("ok").and_then(Value::as_bool).unwrap_or(false) {
        Ok(body)
    } else {
        Err(SlckError::Api(format!(
            "{method} error: {}",
            body.get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
        )))
    }
}
