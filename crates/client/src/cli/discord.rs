//! Discord CLI commands.

use clap::{Parser, Subcommand};
use pylon_core::discord::DEFAULT_MESSAGE_LIMIT;

/// Discord commands.
#[derive(Debug, Parser)]
pub struct DiscordCommand {
    #[command(subcommand)]
    pub action: DiscordAction,
}

/// Available discord actions.
#[derive(Debug, Subcommand)]
pub enum DiscordAction {
    /// Send a message via webhook.
    #[command(visible_alias = "send")]
    Msg {
        /// Message text; words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Read recent messages from a channel.
    Read {
        /// Channel ID (defaults to [discord] channel_id).
        #[arg(long)]
        channel: Option<String>,
        /// Number of messages (1-100).
        #[arg(long, default_value_t = i64::from(DEFAULT_MESSAGE_LIMIT), allow_negative_numbers = true)]
        count: i64,
    },
    /// List text channels in a guild.
    Channels {
        /// Guild ID (defaults to [discord] guild_id).
        #[arg(long)]
        guild: Option<String>,
    },
}
