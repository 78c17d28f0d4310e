//! Wire types returned by the calendar service.
//!
//! The service is inconsistent about key casing: list and read responses use
//! capitalized keys (`ID`, `FeedID`, `CreatedAt`), while the create-feed
//! response uses lowercase keys and a different field set. Each shape gets its
//! own type with explicit renames; they must not be unified.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::wire::{deserialize_null_default, deserialize_optional_string};

/// A calendar feed, as returned by `GET /api/feeds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    /// Opaque subscription token (server-generated UUID or a readable slug).
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "CreatedAt", default, deserialize_with = "deserialize_null_default")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(rename = "UpdatedAt", default, deserialize_with = "deserialize_null_default")]
    pub updated_at: DateTime<FixedOffset>,
}

/// Result of `POST /api/feeds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedFeed {
    #[serde(rename = "id")]
    pub id: String,
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "token")]
    pub token: String,
    /// Subscription path or URL as reported by the server.
    #[serde(rename = "url")]
    pub url: String,
}

/// A calendar event. Always belongs to exactly one feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "FeedID")]
    pub feed_id: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(
        rename = "Description",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(
        rename = "Location",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub location: Option<String>,
    #[serde(rename = "URL", default, deserialize_with = "deserialize_optional_string")]
    pub url: Option<String>,
    #[serde(rename = "Start")]
    pub start: DateTime<FixedOffset>,
    #[serde(rename = "End", default)]
    pub end: Option<DateTime<FixedOffset>>,
    #[serde(rename = "AllDay", default)]
    pub all_day: bool,
    #[serde(rename = "Deadline", default)]
    pub deadline: Option<DateTime<FixedOffset>>,
    #[serde(rename = "Status", default, deserialize_with = "deserialize_null_default")]
    pub status: EventStatus,
    /// Comma-joined category names.
    #[serde(
        rename = "Categories",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub categories: Option<String>,
    #[serde(rename = "CreatedAt", default, deserialize_with = "deserialize_null_default")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(rename = "UpdatedAt", default, deserialize_with = "deserialize_null_default")]
    pub updated_at: DateTime<FixedOffset>,
}

/// Event status (iCalendar `STATUS`).
///
/// Values outside the known set, including the empty string, are kept
/// verbatim in [`EventStatus::Other`] instead of failing the decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventStatus {
    Tentative,
    Confirmed,
    Cancelled,
    Other(String),
}

impl EventStatus {
    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Tentative => "TENTATIVE",
            EventStatus::Confirmed => "CONFIRMED",
            EventStatus::Cancelled => "CANCELLED",
            EventStatus::Other(s) => s,
        }
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        EventStatus::Other(String::new())
    }
}

impl From<String> for EventStatus {
    fn from(s: String) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "TENTATIVE" => EventStatus::Tentative,
            "CONFIRMED" => EventStatus::Confirmed,
            "CANCELLED" => EventStatus::Cancelled,
            _ => EventStatus::Other(s),
        }
    }
}

impl From<EventStatus> for String {
    fn from(status: EventStatus) -> Self {
        match status {
            EventStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
