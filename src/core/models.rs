use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Snapshot of a Slack conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

impl Channel {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
}

/// A history entry flattened into counters.
///
/// `reply_user_count` is the number of distinct repliers Slack reported. It is not checked
/// against `reply_count`; both come straight from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_type: String,
    pub user: User,
    pub ts: String,
    pub text: String,
    pub reply_count: u64,
    pub reply_user_count: u64,
    pub reaction_count: u64,
}

impl Message {
    /// Interpret `ts` ("<seconds>.<micros>") as a UTC instant.
    ///
    /// Returns `None` when `ts` is not in that shape.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let (secs, frac) = self.ts.split_once('.').unwrap_or((self.ts.as_str(), ""));
        if secs.is_empty() || !is_ascii_digits(secs) || !is_ascii_digits(frac) {
            return None;
        }
        let secs = secs.parse::<i64>().ok()?;
        // Slack emits six fractional digits. Shorter fractions are right-padded; digits past
        // microsecond precision are dropped.
        let micros = frac
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(6)
            .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'));
        DateTime::from_timestamp(secs, micros * 1_000)
    }
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire records
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of `conversations.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl From<ChannelRecord> for Channel {
    fn from(record: ChannelRecord) -> Self {
        Channel {
            id: record.id,
            name: record.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionRecord {
    #[serde(default)]
    pub count: u64,
}

/// One entry of `conversations.history` once it is known to be a message.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub user: String,
    pub ts: String,
    pub text: String,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub reply_users: Vec<String>,
    #[serde(default)]
    pub reactions: Vec<ReactionRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// One page of `conversations.history`.
///
/// Messages stay raw here; the caller decides which entries are messages before decoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryPage {
    #[serde(default)]
    pub messages: Vec<Value>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

impl HistoryPage {
    /// Cursor for the following page. Slack sends `""` on the last page.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        next_cursor(self.response_metadata.as_ref())
    }
}

/// One page of `conversations.list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelListPage {
    #[serde(default)]
    pub channels: Vec<ChannelRecord>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

impl ChannelListPage {
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        next_cursor(self.response_metadata.as_ref())
    }
}

fn next_cursor(metadata: Option<&ResponseMetadata>) -> Option<&str> {
    metadata
        .and_then(|m| m.next_cursor.as_deref())
        .filter(|cursor| !cursor.is_empty())
}
