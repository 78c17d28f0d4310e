//! Parser for the INI-like `~/.pylonrc` format.
//!
//! ```text
//! # comment
//! [cal]
//! url = https://cal.example.com
//!
//! [discord]
//! bot_token = ...
//! ```
//!
//! Blank lines and `#` comments are skipped. Lines without `=` are ignored.
//! Only the first `=` separates key from value, so values may contain `=`.

use super::settings::{Setting, Settings};

/// A `key = value` line together with the section it appeared in.
///
/// Pairs that precede any section header have an empty `section`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RcEntry<'a> {
    pub section: &'a str,
    pub key: &'a str,
    pub value: &'a str,
}

/// Extracts every well-formed pair from rc-file contents, in file order.
pub fn parse_rc(contents: &str) -> Vec<RcEntry<'_>> {
    let mut section = "";
    let mut entries = Vec::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = name.trim();
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        entries.push(RcEntry {
            section,
            key: key.trim(),
            value: value.trim(),
        });
    }

    entries
}

impl Settings {
    /// Overlays values from rc-file contents.
    ///
    /// Unknown sections and unknown keys are ignored. A key given twice keeps
    /// its last value.
    pub fn with_rc(mut self, contents: &str) -> Self {
        for entry in parse_rc(contents) {
            if let Some(setting) = Setting::from_rc_key(entry.section, entry.key) {
                self.set(setting, entry.value);
            }
        }
        self
    }
}
