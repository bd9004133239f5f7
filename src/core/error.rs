use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// None of these ever reach a presentation layer through the
/// best-effort entry points (`fetch_or_empty`, `parse`, the refresh driver);
/// they are logged there and turned into an empty list.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Connecting, timing out, or reading the response body failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL or query produced an invalid request URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server answered with anything other than `200 OK`.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The body was not JSON, or `response.results` was absent or not an array.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A configuration value (builder or environment) was unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl FeedError {
    /// True only for connect failures and timeouts, the cases a caller
    /// usually reports as "no connectivity". Body decode errors and
    /// non-200 statuses are not network errors.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect() || e.is_timeout())
    }
}
