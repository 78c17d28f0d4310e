use serde::{Deserialize, Serialize};

/// Channel type discriminator of a guild text channel.
///
/// Opaque value from the messaging service's schema.
pub const TEXT_CHANNEL: u32 = 0;

/// A channel message. Read-only; never created locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    /// Text content; empty for attachment- or embed-only messages.
    #[serde(default)]
    pub content: String,
    /// ISO-8601 timestamp.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub author: Author,
    /// The parent message when this message is a reply.
    #[serde(rename = "referenced_message", default)]
    pub reference: Option<Box<ReferencedMessage>>,
}

/// The part of a parent message needed to render a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencedMessage {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Author,
}

/// A message author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
}

impl Author {
    /// Returns the global display name, falling back to the username.
    pub fn display_name(&self) -> &str {
        match self.global_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

/// A guild channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: u32,
    #[serde(default)]
    pub position: i64,
}

impl Channel {
    /// Returns true for guild text channels.
    pub fn is_text(&self) -> bool {
        self.kind == TEXT_CHANNEL
    }
}
