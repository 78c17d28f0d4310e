use super::types::{Channel, Message};

/// Message count used when the requested limit is out of range.
pub const DEFAULT_MESSAGE_LIMIT: u32 = 20;

/// Hard cap on messages per request imposed by the messaging service.
pub const MAX_MESSAGE_LIMIT: u32 = 100;

/// Clamps a requested message count to the range the service accepts.
///
/// Non-positive values and values above [`MAX_MESSAGE_LIMIT`] become
/// [`DEFAULT_MESSAGE_LIMIT`].
pub fn clamp_limit(requested: i64) -> u32 {
    match u32::try_from(requested) {
        Ok(n) if (1..=MAX_MESSAGE_LIMIT).contains(&n) => n,
        _ => DEFAULT_MESSAGE_LIMIT,
    }
}

/// Reorders a newest-first page into chronological (oldest-first) order.
pub fn into_chronological(mut newest_first: Vec<Message>) -> Vec<Message> {
    newest_first.reverse();
    newest_first
}

/// Keeps only text channels, preserving their relative order.
pub fn text_channels(channels: Vec<Channel>) -> Vec<Channel> {
    channels.into_iter().filter(Channel::is_text).collect()
}
