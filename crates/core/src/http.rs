//! Pure helpers for interpreting HTTP error responses.

use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extracts the human-readable message from an error response body.
///
/// A JSON object with a non-empty string `error` field yields that string;
/// any other body is returned verbatim.
///
/// # Examples
///
/// ```
/// use pylon_core::http::api_error_message;
///
/// assert_eq!(api_error_message(r#"{"error":"feed not found"}"#), "feed not found");
/// assert_eq!(api_error_message("boom"), "boom");
/// ```
pub fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => body.to_string(),
    }
}
