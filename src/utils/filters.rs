use serde_json::Value;

use crate::core::models::Channel;

/// The `type` value Slack uses for ordinary history entries.
pub const MESSAGE_TYPE: &str = "message";

/// Retains channels whose name starts with `prefix`. `None` keeps everything, in order.
#[must_use]
pub fn filter_by_prefix(channels: Vec<Channel>, prefix: Option<&str>) -> Vec<Channel> {
    match prefix {
        Some(prefix) => channels
            .into_iter()
            .filter(|channel| channel.name.starts_with(prefix))
            .collect(),
        None => channels,
    }
}

/// Retains channels matching either selector exactly.
#[must_use]
pub fn filter_by_name_or_id(
    channels: Vec<Channel>,
    name: Option<&str>,
    id: Option<&str>,
) -> Vec<Channel> {
    channels
        .into_iter()
        .filter(|channel| {
            let name_matches = name.is_some_and(|n| channel.name == n);
            let id_matches = id.is_some_and(|i| channel.id == i);
            name_matches || id_matches
        })
        .collect()
}

/// Whether a raw history entry is a message (as opposed to some other event type).
#[must_use]
pub fn is_message_record(record: &Value) -> bool {
    record.get("type").and_then(Value::as_str) == Some(MESSAGE_TYPE)
}
