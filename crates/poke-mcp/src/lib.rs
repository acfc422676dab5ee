//! MCP Server for Pokedex lookups
//!
//! This crate exposes Pokemon lookups via the Model Context Protocol
//! (MCP), allowing agentic clients (Claude Desktop, IDEs) to fetch a
//! Pokemon's attributes or compare two Pokemon.
//!
//! # Architecture
//!
//! The `poke-mcp` crate acts as a facade layer over the `poke-core`
//! library:
//!
//! ```text
//! [ MCP Client (Claude/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ poke-mcp (MCP Server) ]
//!        | (Rust API)
//!        v
//! [ poke-core (Client + Rendering) ]
//!        |
//!        +--> https://pokeapi.co/api/v2 (HTTP GET)
//! ```
//!
//! # Tools
//!
//! The server exposes two tools:
//! - `get_pokemon` - fetch one Pokemon and render its attributes
//! - `compare_pokemon` - fetch two Pokemon and compare their base stats
//!
//! Tool failures (bad arguments, upstream errors) are reported as tool
//! results with `is_error` set, never as protocol-level failures.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use server::PokeMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
