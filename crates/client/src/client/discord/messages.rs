//! Channel message history.

use pylon_core::config::Setting;
use pylon_core::discord::{clamp_limit, into_chronological, Message};

use super::DiscordClient;
use crate::error::{ClientError, Result};

impl DiscordClient {
    /// Fetch the latest messages of a channel, oldest first.
    ///
    /// `limit` outside `1..=100` falls back to 20.
    pub async fn read_messages(&self, channel_id: &str, limit: i64) -> Result<Vec<Message>> {
        self.require_bot_token()?;
        if channel_id.is_empty() {
            return Err(ClientError::missing(Setting::DiscordChannelId));
        }

        let limit = clamp_limit(limit);
        let newest_first: Vec<Message> = self
            .bot_get_list(
                &format!("/channels/{}/messages", channel_id),
                &[("limit", limit.to_string())],
            )
            .await?;

        Ok(into_chronological(newest_first))
    }
}
