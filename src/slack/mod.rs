//! All Slack-specific functionality

pub mod channel;
pub mod client;
pub mod message;

// Re-export main types for convenience
pub use channel::ChannelManager;
pub use client::{SlackApi, SlackClient};
pub use message::{MessageManager, parse_message};
