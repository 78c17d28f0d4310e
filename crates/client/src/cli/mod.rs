//! CLI command definitions.

pub mod cal;
pub mod discord;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// pylon - interact with deployed infrastructure.
#[derive(Debug, Parser)]
#[command(name = "pylon")]
#[command(version, about = "Interact with the cal and discord services", long_about = None)]
pub struct Cli {
    /// Config file (INI-style). Defaults to ~/.pylonrc.
    #[arg(long, global = true, env = "PYLON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log requests and config loading to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available services.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Calendar subscription service.
    Cal(cal::CalCommand),
    /// Discord messaging and channel access.
    Discord(discord::DiscordCommand),
}
