//! Crate-level error types.
//!
//! [`GlanceError`] unifies every error source (configuration, HTTP, JSON,
//! terminal I/O) behind a single enum so callers can match on the variant
//! they care about while still using the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GlanceError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum GlanceError {
    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request to the market-data provider failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// TLS configuration could not be built.
    #[error("tls error: {0}")]
    Tls(String),

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// The provider answered, but not with anything we can use.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A quote could not be derived from its closes (e.g. a zero previous close).
    #[error("computation error: {0}")]
    Compute(String),

    /// The display sink went away; the refresh loop should stop.
    #[error("display sink closed")]
    SinkClosed,
}
