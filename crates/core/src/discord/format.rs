use std::fmt::Write;

use super::types::Message;

/// Placeholder rendered for messages without text content.
pub const NO_TEXT: &str = "(no text)";

/// Truncates an ISO-8601 timestamp to second precision.
///
/// Keeps the first 19 characters (`YYYY-MM-DDTHH:MM:SS`) when the string is
/// at least that long; shorter strings are returned unchanged.
pub fn truncate_timestamp(ts: &str) -> &str {
    ts.get(..19).unwrap_or(ts)
}

fn or_placeholder(content: &str) -> &str {
    if content.is_empty() {
        NO_TEXT
    } else {
        content
    }
}

/// Wraps `text` in double quotes, escaping only quotes, backslashes and
/// control characters. Other characters, including combining marks and emoji,
/// are kept as-is.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() && (c as u32) < 0x80 => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Renders one message as a single line, without a trailing newline.
pub fn format_message(message: &Message) -> String {
    let ts = truncate_timestamp(&message.timestamp);
    let author = message.author.display_name();
    let content = or_placeholder(&message.content);

    match &message.reference {
        Some(parent) => format!(
            "[{}] {} (reply to {}: {}): {}",
            ts,
            author,
            parent.author.display_name(),
            quote(or_placeholder(&parent.content)),
            content
        ),
        None => format!("[{}] {}: {}", ts, author, content),
    }
}

/// Renders messages for terminal output, one newline-terminated line each.
pub fn format_messages(messages: &[Message]) -> String {
    let mut output = String::new();
    for message in messages {
        let _ = writeln!(output, "{}", format_message(message));
    }
    output
}
