//! Guild channel listing.

use pylon_core::config::Setting;
use pylon_core::discord::{text_channels, Channel};

use super::DiscordClient;
use crate::error::{ClientError, Result};

impl DiscordClient {
    /// List the text channels of a guild, in server order.
    pub async fn list_channels(&self, guild_id: &str) -> Result<Vec<Channel>> {
        self.require_bot_token()?;
        if guild_id.is_empty() {
            return Err(ClientError::missing(Setting::DiscordGuildId));
        }

        let all: Vec<Channel> = self
            .bot_get_list(&format!("/guilds/{}/channels", guild_id), &[])
            .await?;

        Ok(text_channels(all))
    }
}
