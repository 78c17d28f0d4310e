/// Default base URL of the calendar service (local development server).
pub const DEFAULT_CAL_URL: &str = "http://localhost:8085";

/// Default base URL of the messaging service's bot API.
pub const DEFAULT_DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// A resolved configuration snapshot.
///
/// Messaging fields default to empty strings; an empty value means "not
/// configured" and is reported by the client operation that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the calendar service API.
    pub cal_url: String,
    /// Webhook URL used to send messages.
    pub discord_webhook: String,
    /// Bot token used for reading messages and listing channels.
    pub discord_bot_token: String,
    /// Default guild (server) ID.
    pub discord_guild_id: String,
    /// Default channel ID for reading.
    pub discord_channel_id: String,
    /// Base URL of the bot API.
    pub discord_api_base: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cal_url: DEFAULT_CAL_URL.to_string(),
            discord_webhook: String::new(),
            discord_bot_token: String::new(),
            discord_guild_id: String::new(),
            discord_channel_id: String::new(),
            discord_api_base: DEFAULT_DISCORD_API_BASE.to_string(),
        }
    }
}

impl Settings {
    /// Replaces the value of a setting.
    pub fn set(&mut self, setting: Setting, value: impl Into<String>) {
        let slot = match setting {
            Setting::CalUrl => &mut self.cal_url,
            Setting::DiscordWebhook => &mut self.discord_webhook,
            Setting::DiscordBotToken => &mut self.discord_bot_token,
            Setting::DiscordGuildId => &mut self.discord_guild_id,
            Setting::DiscordChannelId => &mut self.discord_channel_id,
            Setting::DiscordApiBase => &mut self.discord_api_base,
        };
        *slot = value.into();
    }
}

/// Every configurable field, with its rc-file location and environment name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    CalUrl,
    DiscordWebhook,
    DiscordBotToken,
    DiscordGuildId,
    DiscordChannelId,
    DiscordApiBase,
}

impl Setting {
    pub const ALL: [Setting; 6] = [
        Setting::CalUrl,
        Setting::DiscordWebhook,
        Setting::DiscordBotToken,
        Setting::DiscordGuildId,
        Setting::DiscordChannelId,
        Setting::DiscordApiBase,
    ];

    /// The rc-file section holding this setting.
    pub fn section(self) -> &'static str {
        match self {
            Setting::CalUrl => "cal",
            _ => "discord",
        }
    }

    /// The key of this setting within its section.
    pub fn key(self) -> &'static str {
        match self {
            Setting::CalUrl => "url",
            Setting::DiscordWebhook => "webhook",
            Setting::DiscordBotToken => "bot_token",
            Setting::DiscordGuildId => "guild_id",
            Setting::DiscordChannelId => "channel_id",
            Setting::DiscordApiBase => "api_base",
        }
    }

    /// The environment variable that overrides this setting.
    pub fn env_var(self) -> &'static str {
        match self {
            Setting::CalUrl => "PYLON_CAL_URL",
            Setting::DiscordWebhook => "PYLON_DISCORD_WEBHOOK",
            Setting::DiscordBotToken => "PYLON_DISCORD_BOT_TOKEN",
            Setting::DiscordGuildId => "PYLON_DISCORD_GUILD_ID",
            Setting::DiscordChannelId => "PYLON_DISCORD_CHANNEL_ID",
            Setting::DiscordApiBase => "PYLON_DISCORD_API_BASE",
        }
    }

    /// Finds the setting stored under `[section] key`, if any.
    pub fn from_rc_key(section: &str, key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.section() == section && s.key() == key)
    }

    /// Operator-facing hint naming both ways to provide this setting.
    pub fn hint(self) -> String {
        format!(
            "set {} in ~/.pylonrc [{}] or {}",
            self.key(),
            self.section(),
            self.env_var()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rc_key() {
        assert_eq!(Setting::from_rc_key("cal", "url"), Some(Setting::CalUrl));
        assert_eq!(
            Setting::from_rc_key("discord", "bot_token"),
            Some(Setting::DiscordBotToken)
        );
        assert_eq!(Setting::from_rc_key("discord", "url"), None);
        assert_eq!(Setting::from_rc_key("unknown", "key"), None);
    }

    #[test]
    fn test_set_covers_every_setting() {
        let mut settings = Settings::default();
        for setting in Setting::ALL {
            settings.set(setting, setting.env_var());
        }
        assert_eq!(
            settings,
            Settings {
                cal_url: "PYLON_CAL_URL".to_string(),
                discord_webhook: "PYLON_DISCORD_WEBHOOK".to_string(),
                discord_bot_token: "PYLON_DISCORD_BOT_TOKEN".to_string(),
                discord_guild_id: "PYLON_DISCORD_GUILD_ID".to_string(),
                discord_channel_id: "PYLON_DISCORD_CHANNEL_ID".to_string(),
                discord_api_base: "PYLON_DISCORD_API_BASE".to_string(),
            }
        );
    }

    #[test]
    fn test_hint() {
        assert_eq!(
            Setting::DiscordWebhook.hint(),
            "set webhook in ~/.pylonrc [discord] or PYLON_DISCORD_WEBHOOK"
        );
    }
}
