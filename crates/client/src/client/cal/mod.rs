//! Client for the calendar-feed service API.

pub mod events;
pub mod feeds;

use std::time::Duration;

use pylon_core::config::Settings;
use pylon_core::http::api_error_message;
use serde::de::DeserializeOwned;

use super::{api_error, decode, decode_list, execute, http_client, DEFAULT_TIMEOUT};
use crate::error::Result;

/// HTTP client for the calendar-feed service.
#[derive(Debug, Clone)]
pub struct CalClient {
    client: reqwest::Client,
    base_url: String,
}

impl CalClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    /// Create from a resolved configuration.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(settings.cal_url.clone())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Subscription URL for a feed token. Pure string construction.
    pub fn subscribe_url(&self, token: &str) -> String {
        pylon_core::cal::subscribe_url(&self.base_url, token)
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        execute(&self.client, request, None).await
    }

    /// Decode a successful response or normalize the error body.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            decode(response).await
        } else {
            Err(api_error(response, api_error_message).await)
        }
    }

    /// Decode a successful list response or normalize the error body.
    async fn handle_list_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<T>> {
        if response.status().is_success() {
            decode_list(response).await
        } else {
            Err(api_error(response, api_error_message).await)
        }
    }

    /// Handle responses where no body is expected.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(api_error(response, api_error_message).await)
        }
    }
}
