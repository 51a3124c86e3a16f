//! Failures talking to the aggregator.

/// Aggregator call failed or returned an unusable body.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Connection, TLS, or body transfer failure.
    #[error("aggregator request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The aggregator answered with a non-success status.
    #[error("aggregator returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Aggregator's error description, or the raw body.
        message: String,
    },

    /// The body was not the JSON shape expected for this endpoint.
    #[error("malformed aggregator response: {0}")]
    MalformedBody(String),

    /// A field the gateway relies on was absent or empty.
    #[error("aggregator response is missing `{0}`")]
    MissingField(&'static str),
}
