/// Builds the public `.ics` subscription URL for a feed token.
///
/// Trailing slashes on `base_url` are ignored.
///
/// # Examples
///
/// ```
/// use pylon_core::cal::subscribe_url;
///
/// assert_eq!(
///     subscribe_url("https://cal.example.com", "tok"),
///     "https://cal.example.com/cal/tok.ics"
/// );
/// ```
pub fn subscribe_url(base_url: &str, token: &str) -> String {
    format!("{}/cal/{}.ics", base_url.trim_end_matches('/'), token)
}

/// Rewrites an http(s) URL to the `webcal://` scheme understood by calendar
/// apps. URLs with any other scheme are returned unchanged.
pub fn webcal_url(url: &str) -> String {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .map(|rest| format!("webcal://{}", rest))
        .unwrap_or_else(|| url.to_string())
}
