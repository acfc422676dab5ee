//! Pokedex MCP Server
//!
//! A Model Context Protocol server that exposes Pokemon lookups to
//! agentic clients like Claude Desktop.
//!
//! # Usage
//!
//! ```bash
//! poke-mcp [--api-base <url>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `poke_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use clap::Parser;
use poke_core::{DEFAULT_API_BASE, PokeClient};
use poke_mcp::PokeMcpServer;

/// MCP server for Pokedex lookups
#[derive(Parser)]
#[command(name = "poke-mcp")]
#[command(about = "MCP server exposing Pokemon lookups")]
#[command(version)]
struct Args {
    /// Base URL of the upstream PokeAPI
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("poke_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!(api_base = %args.api_base, "Starting poke-mcp server");

    let mut server = PokeMcpServer::new(PokeClient::with_api_base(args.api_base));
    server.run().await?;

    Ok(())
}
