//! Error types for mhlw-rss.

use thiserror::Error;

/// Common error type for mhlw-rss.
#[derive(Error, Debug)]
pub enum MhlwRssError {
    /// Page fetch error (network failure, timeout, or non-2xx status).
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Feed construction or serialization error.
    #[error("feed error: {0}")]
    Feed(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for mhlw-rss operations.
pub type Result<T> = std::result::Result<T, MhlwRssError>;
