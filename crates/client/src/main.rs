//! pylon CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pylon_client::cli::cal::{split_name_slug, CalCommand, CalResource, EventAction, FeedAction};
use pylon_client::cli::discord::{DiscordAction, DiscordCommand};
use pylon_client::cli::{Cli, Commands, OutputFormat};
use pylon_client::client::cal::events::CreateEventRequest;
use pylon_client::client::{CalClient, DiscordClient};
use pylon_client::config;
use pylon_client::output::{json, pretty, render};
use pylon_core::cal::webcal_url;
use pylon_core::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pylon: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pylon=debug,pylon_client=debug"
    } else {
        "pylon=warn,pylon_client=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let settings = config::load(cli.config.as_deref()).context("config")?;
    let out = Output {
        format: cli.format,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Cal(cmd) => run_cal(cmd, &settings, out).await,
        Commands::Discord(cmd) => run_discord(cmd, &settings, out).await,
    }
}

#[derive(Clone, Copy)]
struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    /// Print a confirmation line unless quiet or emitting JSON.
    fn confirm(&self, message: &str) {
        if !self.quiet && matches!(self.format, OutputFormat::Pretty) {
            println!("{}", message);
        }
    }
}

async fn run_cal(cmd: CalCommand, settings: &Settings, out: Output) -> Result<()> {
    let base_url = cmd.url.unwrap_or_else(|| settings.cal_url.clone());
    let client = CalClient::new(base_url)?;

    match cmd.resource {
        CalResource::Feed(action) => match action {
            FeedAction::Create { words } => {
                let (name, slug) = split_name_slug(&words);
                let feed = client
                    .create_feed(&name, slug.as_deref())
                    .await
                    .context("create feed")?;
                println!(
                    "{}",
                    render(&feed, out.format, |f| format!(
                        "Created feed:\n{}",
                        pretty::format_created_feed(f)
                    ))
                );
            }
            FeedAction::List => {
                let feeds = client.list_feeds().await.context("list feeds")?;
                println!("{}", render(feeds.as_slice(), out.format, pretty::format_feeds));
            }
            FeedAction::Delete { id } => {
                client.delete_feed(&id).await.context("delete feed")?;
                out.confirm("Feed deleted.");
            }
        },
        CalResource::Event(action) => match action {
            EventAction::Add(new_event) => {
                let req = CreateEventRequest::from(new_event);
                let event = client.create_event(&req).await.context("create event")?;
                println!(
                    "{}",
                    render(&event, out.format, |e| format!(
                        "Created event:\n{}",
                        pretty::format_event(e)
                    ))
                );
            }
            EventAction::List { feed } => {
                let events = client.list_events(&feed).await.context("list events")?;
                println!("{}", render(events.as_slice(), out.format, pretty::format_events));
            }
            EventAction::Delete { id } => {
                client.delete_event(&id).await.context("delete event")?;
                out.confirm("Event deleted.");
            }
        },
        CalResource::Subscribe { token } => {
            let url = client.subscribe_url(&token);
            let webcal = webcal_url(&url);
            match out.format {
                OutputFormat::Json => println!(
                    "{}",
                    json::format_json(&serde_json::json!({ "url": url, "webcal": webcal }))
                ),
                OutputFormat::Pretty => println!("{}", pretty::format_subscribe(&url, &webcal)),
            }
        }
    }

    Ok(())
}

async fn run_discord(cmd: DiscordCommand, settings: &Settings, out: Output) -> Result<()> {
    let client = DiscordClient::from_settings(settings)?;

    match cmd.action {
        DiscordAction::Msg { message } => {
            client
                .send_message(&message.join(" "))
                .await
                .context("discord msg")?;
            out.confirm("Message sent.");
        }
        DiscordAction::Read { channel, count } => {
            let channel_id = channel.unwrap_or_else(|| settings.discord_channel_id.clone());
            let messages = client
                .read_messages(&channel_id, count)
                .await
                .context("discord read")?;
            println!(
                "{}",
                render(messages.as_slice(), out.format, pretty::format_message_log)
            );
        }
        DiscordAction::Channels { guild } => {
            let guild_id = guild.unwrap_or_else(|| settings.discord_guild_id.clone());
            let channels = client
                .list_channels(&guild_id)
                .await
                .context("discord channels")?;
            println!(
                "{}",
                render(channels.as_slice(), out.format, pretty::format_channels)
            );
        }
    }

    Ok(())
}
