//! Calendar CLI commands.

use clap::{Args, Parser, Subcommand, ValueEnum};
use pylon_core::cal::EventStatus;

use crate::client::cal::events::CreateEventRequest;

/// Calendar service commands.
#[derive(Debug, Parser)]
pub struct CalCommand {
    /// Base URL of the cal service (overrides [cal] url and PYLON_CAL_URL).
    #[arg(long)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub resource: CalResource,
}

/// Calendar resources.
#[derive(Debug, Subcommand)]
pub enum CalResource {
    /// Manage calendar feeds.
    #[command(subcommand)]
    Feed(FeedAction),
    /// Manage calendar events.
    #[command(subcommand)]
    Event(EventAction),
    /// Get subscription URLs for a feed.
    Subscribe {
        /// Feed token.
        token: String,
    },
}

/// Available feed actions.
#[derive(Debug, Subcommand)]
pub enum FeedAction {
    /// Create a new feed.
    ///
    /// With two or more words the last one is the slug, a readable URL token
    /// (e.g. "my-calendar" -> /cal/my-calendar.ics). The rest form the name.
    Create {
        /// Feed name words, then an optional slug.
        #[arg(required = true, num_args = 1.., value_name = "NAME")]
        words: Vec<String>,
    },
    /// List all feeds.
    #[command(visible_alias = "ls")]
    List,
    /// Delete a feed and all its events.
    #[command(visible_alias = "rm")]
    Delete {
        /// Feed ID.
        id: String,
    },
}

/// Splits `feed create` words into the feed name and an optional slug.
pub fn split_name_slug(words: &[String]) -> (String, Option<String>) {
    match words {
        [name] => (name.clone(), None),
        [name @ .., slug] => (name.join(" "), Some(slug.clone())),
        [] => (String::new(), None),
    }
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventAction {
    /// Create a new event.
    #[command(visible_alias = "create")]
    Add(NewEvent),
    /// List events for a feed.
    #[command(visible_alias = "ls")]
    List {
        /// Feed ID.
        #[arg(long)]
        feed: String,
    },
    /// Delete an event.
    #[command(visible_alias = "rm")]
    Delete {
        /// Event ID.
        id: String,
    },
}

/// Flags for `cal event add`.
#[derive(Debug, Args)]
pub struct NewEvent {
    /// Feed ID.
    #[arg(long)]
    pub feed: String,
    /// Event title.
    #[arg(long)]
    pub summary: String,
    /// Start time in RFC 3339 format.
    #[arg(long)]
    pub start: String,
    /// End time in RFC 3339 format.
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    /// Mark as all-day event.
    #[arg(long)]
    pub all_day: bool,
    /// Deadline with alarm, RFC 3339.
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<Status>,
    /// Comma-separated categories.
    #[arg(long)]
    pub categories: Option<String>,
}

/// CLI event status (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Status {
    Tentative,
    Confirmed,
    Cancelled,
}

impl From<Status> for EventStatus {
    fn from(s: Status) -> Self {
        match s {
            Status::Tentative => EventStatus::Tentative,
            Status::Confirmed => EventStatus::Confirmed,
            Status::Cancelled => EventStatus::Cancelled,
        }
    }
}

impl From<NewEvent> for CreateEventRequest {
    fn from(e: NewEvent) -> Self {
        CreateEventRequest {
            feed_id: e.feed,
            summary: e.summary,
            description: e.description,
            location: e.location,
            url: e.url,
            start: e.start,
            end: e.end,
            all_day: e.all_day,
            deadline: e.deadline,
            status: e.status.map(Into::into),
            categories: e.categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Commands};

    fn parse(args: &[&str]) -> CalCommand {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Cal(cmd) => cmd,
            other => panic!("expected cal command, got {:?}", other),
        }
    }

    fn create_words(args: &[&str]) -> Vec<String> {
        match parse(args).resource {
            CalResource::Feed(FeedAction::Create { words }) => words,
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_feed_create_quoted_name_with_slug() {
        let words = create_words(&["pylon", "cal", "feed", "create", "Team Work", "team"]);
        assert_eq!(
            split_name_slug(&words),
            ("Team Work".to_string(), Some("team".to_string()))
        );
    }

    #[test]
    fn test_feed_create_unquoted_name_with_slug() {
        let words = create_words(&["pylon", "cal", "feed", "create", "Team", "Work", "team"]);
        assert_eq!(
            split_name_slug(&words),
            ("Team Work".to_string(), Some("team".to_string()))
        );
    }

    #[test]
    fn test_feed_create_single_word_has_no_slug() {
        let words = create_words(&["pylon", "cal", "feed", "create", "Work"]);
        assert_eq!(split_name_slug(&words), ("Work".to_string(), None));
    }

    #[test]
    fn test_feed_create_requires_name() {
        assert!(Cli::try_parse_from(["pylon", "cal", "feed", "create"]).is_err());
    }

    #[test]
    fn test_url_override_and_alias() {
        let cmd = parse(&["pylon", "cal", "--url", "http://other", "feed", "ls"]);
        assert_eq!(cmd.url.as_deref(), Some("http://other"));
        assert!(matches!(cmd.resource, CalResource::Feed(FeedAction::List)));
    }

    #[test]
    fn test_event_add_builds_request() {
        let cmd = parse(&[
            "pylon",
            "cal",
            "event",
            "add",
            "--feed",
            "feed-1",
            "--summary",
            "Standup",
            "--start",
            "2026-02-18T10:30:00Z",
            "--all-day",
            "--status",
            "cancelled",
        ]);
        let CalResource::Event(EventAction::Add(new_event)) = cmd.resource else {
            panic!("expected event add");
        };
        let req = CreateEventRequest::from(new_event);
        assert_eq!(req.feed_id, "feed-1");
        assert_eq!(req.summary, "Standup");
        assert!(req.all_day);
        assert_eq!(req.status, Some(EventStatus::Cancelled));
        assert_eq!(req.end, None);
    }

    #[test]
    fn test_event_add_requires_start() {
        let result = Cli::try_parse_from([
            "pylon", "cal", "event", "add", "--feed", "f", "--summary", "s",
        ]);
        assert!(result.is_err());
    }
}
