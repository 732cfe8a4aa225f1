use slack_morphism::errors::SlackClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlckError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Channel not found: {0}")]
    NotFound(String),

    #[error("Failed to access Slack API: {0}")]
    Api(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to parse Slack response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<SlackClientError> for SlckError {
    fn from(error: SlackClientError) -> Self {
        SlckError::Api(error.to_string())
    }
}

impl From<reqwest::Error> for SlckError {
    fn from(error: reqwest::Error) -> Self {
        SlckError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for SlckError {
    fn from(error: serde_json::Error) -> Self {
        SlckError::Parse(error.to_string())
    }
}
