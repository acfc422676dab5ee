//! Core library for the Pokedex MCP server
//!
//! Provides the upstream PokeAPI client, the decoded data model, and the
//! text rendering used by the tool layer. Records are fetched fresh on
//! every lookup; nothing here caches, retries, or holds state between
//! calls.

pub mod client;
pub mod error;
pub mod format;
pub mod model;

pub use client::{DEFAULT_API_BASE, PokeClient};
pub use error::{Error, Result};
pub use model::Pokemon;
