//! Messaging service types and the post-processing applied to its responses.

mod format;
mod operations;
mod types;

pub use format::{format_message, format_messages, quote, truncate_timestamp, NO_TEXT};
pub use operations::{
    clamp_limit, into_chronological, text_channels, DEFAULT_MESSAGE_LIMIT, MAX_MESSAGE_LIMIT,
};
pub use types::{Author, Channel, Message, ReferencedMessage, TEXT_CHANNEL};
