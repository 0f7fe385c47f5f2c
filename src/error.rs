//! Error types for mot-du-jour.
//!
//! This module defines the error types returned by extraction, fetching and
//! caching operations.

/// Error type for extraction and service operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The heading for the target language section is not in the document.
    #[error("language section not found: {language}")]
    SectionNotFound {
        /// Language that was searched for (e.g. "French").
        language: String,
    },

    /// The document has no usable primary heading to name the word.
    #[error("primary heading not found")]
    HeadwordNotFound,

    /// The request to the source page failed at the transport level.
    #[error("fetching source page failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The source page answered with a non-success status.
    #[error("source page returned HTTP {status} for {url}")]
    UpstreamStatus {
        /// HTTP status code returned upstream.
        status: u16,
        /// URL that was requested.
        url: String,
    },

    /// A cache tier was requested that was never configured.
    #[error("unknown cache tier: {0}")]
    UnknownTier(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error originated upstream (network or non-2xx status).
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::UpstreamStatus { .. })
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
