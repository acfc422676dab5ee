//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
///
/// The tool-level variants carry the exact text surfaced to the calling
/// agent; they are converted to error tool results at the dispatch
/// boundary and never escape as protocol failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on the stdio channel
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tool argument missing or of the wrong type
    #[error("{argument} must be a string")]
    ArgumentType { argument: &'static str },

    /// Upstream lookup failed
    #[error("Error fetching {subject}: {source}")]
    Fetch {
        subject: String,
        source: poke_core::Error,
    },

    /// Comparing two fetched records failed
    #[error("Error comparing Pokemon: {0}")]
    Compare(poke_core::Error),

    /// Unknown tool requested
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}
