use thiserror::Error;
use url::Url;

/// Errors that can occur while validating the backend endpoint.
#[derive(Error, Debug)]
pub enum BackendUrlError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// The URL has no host component.
    #[error("URL has no host")]
    MissingHost,
}

/// Validates the configured backend base URL.
///
/// The backend is commonly a locally-run service, so unlike feed-reader
/// URL validation there is no localhost or private-range restriction —
/// only that the value is an absolute http(s) URL with a host, catching
/// config typos before the first request fails confusingly.
///
/// # Examples
///
/// ```
/// use neurosync::util::validate_backend_url;
///
/// assert!(validate_backend_url("http://127.0.0.1:8000").is_ok());
/// assert!(validate_backend_url("https://cortex.example.com").is_ok());
/// assert!(validate_backend_url("ftp://example.com").is_err());
/// assert!(validate_backend_url("not a url").is_err());
/// ```
pub fn validate_backend_url(url_str: &str) -> Result<Url, BackendUrlError> {
    let url = Url::parse(url_str)?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(BackendUrlError::UnsupportedScheme(scheme.to_owned())),
    }

    if url.host_str().is_none() {
        return Err(BackendUrlError::MissingHost);
    }

    Ok(url)
}
