//! Webhook message delivery.

use pylon_core::config::Setting;
use reqwest::StatusCode;
use serde::Serialize;

use super::DiscordClient;
use crate::client::{api_error, execute};
use crate::error::{ClientError, Result};

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

impl DiscordClient {
    /// Post a plain-text message to the configured webhook.
    ///
    /// Fails with a configuration error, without any request, when no webhook
    /// URL is set. Only `200 OK` and `204 No Content` count as success.
    pub async fn send_message(&self, content: &str) -> Result<()> {
        if self.webhook_url.is_empty() {
            return Err(ClientError::missing(Setting::DiscordWebhook));
        }

        let request = self
            .client
            .post(&self.webhook_url)
            .json(&WebhookPayload { content });
        let response = execute(&self.client, request, Some("webhook")).await?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            _ => Err(api_error(response, |body| body.to_string()).await),
        }
    }
}
