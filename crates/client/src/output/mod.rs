//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

/// Render a result either as JSON or with the given pretty renderer.
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> String
where
    T: serde::Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}
