//! Client error types.

use std::path::PathBuf;

use pylon_core::config::Setting;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A setting the operation needs is empty. Raised before any request.
    #[error("{setting} not configured ({hint})")]
    MissingSetting { setting: &'static str, hint: String },

    #[error("reading {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("api error: {status} {message}")]
    Api { status: u16, message: String },

    #[error("decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Configuration error for an empty setting.
    pub fn missing(setting: Setting) -> Self {
        let name = match setting {
            Setting::CalUrl => "cal URL",
            Setting::DiscordWebhook => "webhook URL",
            Setting::DiscordBotToken => "bot token",
            Setting::DiscordGuildId => "guild ID",
            Setting::DiscordChannelId => "channel ID",
            Setting::DiscordApiBase => "API base URL",
        };
        ClientError::MissingSetting {
            setting: name,
            hint: setting.hint(),
        }
    }

    /// Status code of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for configuration errors, which are always raised before
    /// any request is sent.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ClientError::MissingSetting { .. } | ClientError::ConfigFile { .. }
        )
    }
}
