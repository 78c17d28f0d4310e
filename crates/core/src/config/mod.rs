//! Layered configuration: built-in defaults, then the rc file, then the
//! environment.
//!
//! Everything here is pure. Reading the rc file from disk and consulting the
//! process environment is the caller's job; this module only receives the file
//! contents and an environment lookup function.

mod env;
mod rc;
mod settings;

pub use rc::{parse_rc, RcEntry};
pub use settings::{Setting, Settings, DEFAULT_CAL_URL, DEFAULT_DISCORD_API_BASE};

/// Resolves a configuration snapshot.
///
/// Precedence, lowest to highest: [`Settings::default`], the rc file contents
/// (when present), then every environment variable that `lookup` reports as
/// set and non-empty. Never fails.
pub fn resolve<F>(rc_contents: Option<&str>, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let settings = Settings::default();
    let settings = match rc_contents {
        Some(contents) => settings.with_rc(contents),
        None => settings,
    };
    settings.with_env(lookup)
}
