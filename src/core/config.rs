use std::env;

use crate::errors::SlckError;

pub const DEFAULT_API_BASE_URL: &str = "https://slack.com/api";
pub const DEFAULT_PAGE_LIMIT: u16 = 200;

/// Slack caps `limit` on `conversations.*` list methods at 1000.
const MAX_PAGE_LIMIT: u16 = 1000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_bot_token: String,
    pub api_base_url: String,
    pub page_limit: u16,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `SlckError::Config` if `SLACK_BOT_TOKEN` is unset or `SLCK_PAGE_LIMIT`
    /// is not an integer in `1..=1000`.
    pub fn from_env() -> Result<Self, SlckError> {
        let slack_bot_token = env::var("SLACK_BOT_TOKEN")
            .map_err(|e| SlckError::Config(format!("SLACK_BOT_TOKEN: {e}")))?;
        let api_base_url = env::var("SLACK_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let page_limit = match env::var("SLCK_PAGE_LIMIT") {
            Ok(raw) => parse_page_limit(&raw)?,
            Err(_) => DEFAULT_PAGE_LIMIT,
        };

        Ok(Self {
            slack_bot_token,
            api_base_url,
            page_limit,
        })
    }
}

fn parse_page_limit(raw: &str) -> Result<u16, SlckError> {
    let limit = raw
        .trim()
        .parse::<u16>()
        .map_err(|e| SlckError::Config(format!("SLCK_PAGE_LIMIT: {e}")))?;
    if limit == 0 || limit > MAX_PAGE_LIMIT {
        return Err(SlckError::Config(format!(
            "SLCK_PAGE_LIMIT must be between 1 and {MAX_PAGE_LIMIT}, got {limit}"
        )));
    }
    Ok(limit)
}
