//! Error types for building and inspecting search URLs

use thiserror::Error;

/// Failure to build a search URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Query was empty after trimming; nothing to search for
    #[error("Search term is empty")]
    EmptyQuery,
}

/// Failure to decode a previously built search URL
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input is not an absolute URL
    #[error("Invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// URL has no `q` parameter
    #[error("Search URL has no '{0}' query parameter")]
    MissingQueryParam(&'static str),

    /// Percent-decoding produced bytes that are not UTF-8
    #[error("Query parameter is not valid UTF-8 after decoding: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}
