use crate::feed::types::FeedResponse;
use std::time::Duration;
use thiserror::Error;

/// Hard cap on a single feed request. The backend synthesizes its payload
/// upstream behind a cache, so anything slower than this is a hang.
pub const FEED_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum response body size (4MB). The feed is capped at 50 articles
/// server-side; a larger body indicates a misbehaving endpoint.
const MAX_BODY_SIZE: usize = 4 * 1024 * 1024;

/// Errors that can occur while fetching the feed.
///
/// The UI collapses all of these into a single failed state — the
/// distinction exists for logs, not for the rendered surface.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the 30-second timeout
    #[error("Request timed out")]
    Timeout,
    /// Response body was not a decodable feed payload
    #[error("Invalid feed payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// Response body exceeded the size limit
    #[error("Response too large")]
    ResponseTooLarge,
}

/// Fetches the feed from `{base_url}/feed`.
///
/// Issues a single unauthenticated GET with no query parameters. A trailing
/// slash on `base_url` is tolerated.
///
/// # Errors
///
/// - [`FetchError::Network`] - Connection or TLS errors
/// - [`FetchError::Timeout`] - Request exceeded 30 seconds
/// - [`FetchError::HttpStatus`] - Non-2xx HTTP response
/// - [`FetchError::ResponseTooLarge`] - Body exceeded 4MB
/// - [`FetchError::Decode`] - Body was not valid feed JSON
///
/// All variants land in the same error state upstream; there is no retry
/// here — the only retry path is a manual refresh.
pub async fn fetch_feed(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<FeedResponse, FetchError> {
    let url = format!("{}/feed", base_url.trim_end_matches('/'));

    tracing::debug!(url = %url, "Fetching feed");

    let response = tokio::time::timeout(FEED_TIMEOUT, client.get(&url).send())
        .await
        .map_err(|_| FetchError::Timeout)?
        .map_err(FetchError::Network)?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %url, status = %status, "Feed request rejected");
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_BODY_SIZE {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let bytes = response.bytes().await.map_err(FetchError::Network)?;
    if bytes.len() > MAX_BODY_SIZE {
        return Err(FetchError::ResponseTooLarge);
    }

    let feed: FeedResponse = serde_json::from_slice(&bytes)?;

    tracing::info!(
        url = %url,
        articles = feed.articles.len(),
        has_synthesis = !feed.synthesis.is_empty(),
        "Feed fetched"
    );

    Ok(feed)
}
