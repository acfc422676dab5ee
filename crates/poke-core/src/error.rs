//! Error types for upstream lookups and rendering

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching or rendering Pokemon data
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure before any HTTP status was obtained
    #[error("network error: {0}")]
    Network(String),

    /// Upstream answered with a non-OK status
    #[error("API returned status code {0}")]
    Status(u16),

    /// Response body did not decode into the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Stat lists of different lengths cannot be paired positionally
    #[error("stat count mismatch: {left} has {left_count} stats, {right} has {right_count}")]
    StatCountMismatch {
        left: String,
        left_count: usize,
        right: String,
        right_count: usize,
    },
}
