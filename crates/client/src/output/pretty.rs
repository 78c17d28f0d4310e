//! Pretty output formatting.

use pylon_core::cal::{CreatedFeed, Event, Feed};
use pylon_core::discord::{format_messages, Channel, Message};

/// Lay out rows in space-padded columns separated by two spaces.
///
/// The last column is not padded.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let render_row = |cells: Vec<&str>| -> String {
        let last = cells.len().saturating_sub(1);
        let mut line = String::new();
        for (i, cell) in cells.into_iter().enumerate() {
            line.push_str(cell);
            if i < last {
                let width = widths.get(i).copied().unwrap_or(0);
                let pad = width.saturating_sub(cell.chars().count()) + 2;
                line.push_str(&" ".repeat(pad));
            }
        }
        line.push('\n');
        line
    };

    let mut output = render_row(headers.to_vec());
    for row in rows {
        output.push_str(&render_row(row.iter().map(String::as_str).collect()));
    }
    output
}

/// Format a newly created feed.
pub fn format_created_feed(feed: &CreatedFeed) -> String {
    format!(
        "  ID:    {}\n  Name:  {}\n  Token: {}\n  URL:   {}",
        feed.id, feed.name, feed.token, feed.url
    )
}

/// Format feeds as a table.
pub fn format_feeds(feeds: &[Feed]) -> String {
    if feeds.is_empty() {
        return "No feeds.".to_string();
    }
    let rows: Vec<Vec<String>> = feeds
        .iter()
        .map(|f| {
            vec![
                f.id.clone(),
                f.name.clone(),
                f.token.clone(),
                f.created_at.format("%Y-%m-%d").to_string(),
            ]
        })
        .collect();
    table(&["ID", "NAME", "TOKEN", "CREATED"], &rows)
        .trim_end()
        .to_string()
}

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "  ID:      {}\n  Summary: {}\n  Start:   {}",
        event.id,
        event.summary,
        event.start.to_rfc3339()
    );
    if let Some(end) = &event.end {
        output.push_str(&format!("\n  End:     {}", end.to_rfc3339()));
    }
    if let Some(location) = &event.location {
        output.push_str(&format!("\n  Location: {}", location));
    }
    output
}

/// Format events as a table.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events.".to_string();
    }
    let rows: Vec<Vec<String>> = events
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.summary.clone(),
                e.start.to_rfc3339(),
                e.end.map(|end| end.to_rfc3339()).unwrap_or_default(),
                e.status.to_string(),
            ]
        })
        .collect();
    table(&["ID", "SUMMARY", "START", "END", "STATUS"], &rows)
        .trim_end()
        .to_string()
}

/// Format the subscription URLs for a feed token.
pub fn format_subscribe(url: &str, webcal: &str) -> String {
    format!(
        "Subscribe URL:  {}\nWebcal URL:     {}\n\n\
         To subscribe in your calendar app, use the webcal URL.\n\
         For Google Calendar, use the https URL in 'Other calendars > From URL'.",
        url, webcal
    )
}

/// Format messages, one line each.
pub fn format_message_log(messages: &[Message]) -> String {
    if messages.is_empty() {
        return "No messages found.".to_string();
    }
    format_messages(messages).trim_end().to_string()
}

/// Format channels as a table.
pub fn format_channels(channels: &[Channel]) -> String {
    if channels.is_empty() {
        return "No text channels.".to_string();
    }
    let rows: Vec<Vec<String>> = channels
        .iter()
        .map(|c| vec![c.id.clone(), format!("#{}", c.name)])
        .collect();
    table(&["ID", "NAME"], &rows).trim_end().to_string()
}
