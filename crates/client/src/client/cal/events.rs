//! Event API operations.

use pylon_core::cal::{Event, EventStatus};
use pylon_core::wire::is_false;
use serde::Serialize;

use super::CalClient;
use crate::client::require_id;
use crate::error::Result;

/// Request for creating an event.
///
/// Date-times are passed through as strings (RFC 3339 expected); the server
/// validates them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateEventRequest {
    #[serde(rename = "feed_id")]
    pub feed_id: String,
    #[serde(rename = "summary")]
    pub summary: String,
    #[serde(rename = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "start")]
    pub start: String,
    #[serde(rename = "end", skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(rename = "all_day", skip_serializing_if = "is_false")]
    pub all_day: bool,
    #[serde(rename = "deadline", skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(rename = "status", skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    /// Comma-separated categories.
    #[serde(rename = "categories", skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
}

impl CalClient {
    /// Create a new event.
    pub async fn create_event(&self, req: &CreateEventRequest) -> Result<Event> {
        let response = self
            .send(self.client.post(self.url("/api/events")).json(req))
            .await?;
        self.handle_response(response).await
    }

    /// List the events of a feed.
    pub async fn list_events(&self, feed_id: &str) -> Result<Vec<Event>> {
        require_id("feed ID", feed_id)?;
        let response = self
            .send(
                self.client
                    .get(self.url(&format!("/api/feeds/{}/events", feed_id))),
            )
            .await?;
        self.handle_list_response(response).await
    }

    /// Delete an event by ID.
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        require_id("event ID", id)?;
        let response = self
            .send(self.client.delete(self.url(&format!("/api/events/{}", id))))
            .await?;
        self.handle_empty_response(response).await
    }
}
