//! HTTP clients for the cal and discord services.
//!
//! Every operation performs exactly one request. Response bodies are read to
//! completion before decoding and on every error path.

pub mod cal;
pub mod discord;

pub use cal::CalClient;
pub use discord::DiscordClient;

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Per-request timeout used by [`CalClient::new`] and [`DiscordClient::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Build the HTTP transport owned by a client.
fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

/// Send a request, logging `target` instead of the URL when the URL itself is
/// a credential.
async fn execute(
    client: &reqwest::Client,
    request: reqwest::RequestBuilder,
    target: Option<&str>,
) -> Result<reqwest::Response> {
    let request = request.build()?;
    let method = request.method().clone();
    match target {
        Some(endpoint) => tracing::debug!(%method, endpoint, "sending request"),
        None => tracing::debug!(%method, url = %request.url(), "sending request"),
    }

    let response = client.execute(request).await?;
    tracing::debug!(%method, status = response.status().as_u16(), "received response");
    Ok(response)
}

/// Read the whole body and decode it as JSON.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Decode a JSON array body. A `null` body is an empty list.
async fn decode_list<T: DeserializeOwned>(response: reqwest::Response) -> Result<Vec<T>> {
    let items: Option<Vec<T>> = decode(response).await?;
    Ok(items.unwrap_or_default())
}

/// Drain the body of a failed response into an [`ClientError::Api`].
///
/// `message` turns the raw body into the error message.
async fn api_error(response: reqwest::Response, message: fn(&str) -> String) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = message(&body);
    tracing::warn!(status, %message, "api error");
    ClientError::Api { status, message }
}

/// Reject empty identifiers that would otherwise change the request path.
fn require_id(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ClientError::InvalidInput(format!("{} required", name)));
    }
    Ok(())
}
