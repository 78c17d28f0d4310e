//! Client for the messaging service: webhook delivery and bot-API reads.

pub mod channels;
pub mod messages;
pub mod webhook;

use std::time::Duration;

use pylon_core::config::{Setting, Settings, DEFAULT_DISCORD_API_BASE};
use serde::de::DeserializeOwned;

use super::{api_error, decode_list, execute, http_client, DEFAULT_TIMEOUT};
use crate::error::{ClientError, Result};

/// HTTP client for the messaging service.
///
/// The webhook URL is only needed to send; the bot token only to read.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    client: reqwest::Client,
    bot_token: String,
    webhook_url: String,
    api_base: String,
}

impl DiscordClient {
    /// Create a client against the public bot API.
    pub fn new(bot_token: impl Into<String>, webhook_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(bot_token, webhook_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout.
    pub fn with_timeout(
        bot_token: impl Into<String>,
        webhook_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            bot_token: bot_token.into(),
            webhook_url: webhook_url.into(),
            api_base: DEFAULT_DISCORD_API_BASE.to_string(),
        })
    }

    /// Create from a resolved configuration.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(
            settings.discord_bot_token.clone(),
            settings.discord_webhook.clone(),
        )?
        .with_api_base(settings.discord_api_base.clone()))
    }

    /// Point bot-API calls at a different base URL.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Get the bot-API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn require_bot_token(&self) -> Result<&str> {
        if self.bot_token.is_empty() {
            return Err(ClientError::missing(Setting::DiscordBotToken));
        }
        Ok(&self.bot_token)
    }

    /// Authenticated GET of a list resource on the bot API.
    async fn bot_get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let token = self.require_bot_token()?;
        let url = format!("{}{}", self.api_base.trim_end_matches('/'), path);
        let request = self
            .client
            .get(url)
            .query(query)
            .header(reqwest::header::AUTHORIZATION, format!("Bot {}", token))
            .header(reqwest::header::ACCEPT, "application/json");

        let response = execute(&self.client, request, None).await?;
        if response.status().is_success() {
            decode_list(response).await
        } else {
            Err(api_error(response, |body| body.to_string()).await)
        }
    }
}
