//! pylon_client - CLI client for the cal and discord services.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use client::{CalClient, DiscordClient};
pub use error::{ClientError, Result};
