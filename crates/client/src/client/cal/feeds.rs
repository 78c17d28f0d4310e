//! Feed API operations.

use pylon_core::cal::{CreatedFeed, Feed};
use serde::Serialize;

use super::CalClient;
use crate::client::require_id;
use crate::error::Result;

/// Request for creating a feed.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFeedRequest {
    #[serde(rename = "name")]
    pub name: String,
    /// Readable token for the subscription URL; the server generates one
    /// when absent.
    #[serde(rename = "slug", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl CalClient {
    /// Create a new feed.
    pub async fn create_feed(&self, name: &str, slug: Option<&str>) -> Result<CreatedFeed> {
        let req = CreateFeedRequest {
            name: name.to_string(),
            slug: slug.filter(|s| !s.is_empty()).map(str::to_string),
        };
        let response = self
            .send(self.client.post(self.url("/api/feeds")).json(&req))
            .await?;
        self.handle_response(response).await
    }

    /// List all feeds, in server order.
    pub async fn list_feeds(&self) -> Result<Vec<Feed>> {
        let response = self.send(self.client.get(self.url("/api/feeds"))).await?;
        self.handle_list_response(response).await
    }

    /// Delete a feed by ID. The server deletes its events too.
    pub async fn delete_feed(&self, id: &str) -> Result<()> {
        require_id("feed ID", id)?;
        let response = self
            .send(self.client.delete(self.url(&format!("/api/feeds/{}", id))))
            .await?;
        self.handle_empty_response(response).await
    }
}
