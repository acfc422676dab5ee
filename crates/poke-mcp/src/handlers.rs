//! MCP Tool Handlers
//!
//! Implements the handlers for MCP tool calls, delegating to poke-core
//! for lookups and rendering. Arguments are validated before any
//! network call is made; every failure is reported through [`Error`]
//! whose display text is what the calling agent sees.

use poke_core::{PokeClient, format};
use serde_json::Value;

use crate::{Error, Result};

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(
    client: &PokeClient,
    tool_name: &str,
    arguments: Value,
) -> Result<String> {
    match tool_name {
        "get_pokemon" => handle_get_pokemon(client, arguments).await,
        "compare_pokemon" => handle_compare_pokemon(client, arguments).await,
        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

/// Pull a required string argument out of the arguments object.
fn string_arg<'a>(arguments: &'a Value, name: &'static str) -> Result<&'a str> {
    arguments
        .get(name)
        .and_then(Value::as_str)
        .ok_or(Error::ArgumentType { argument: name })
}

/// Handle get_pokemon - fetch one Pokemon and render its attributes
async fn handle_get_pokemon(client: &PokeClient, arguments: Value) -> Result<String> {
    let name = string_arg(&arguments, "name")?;

    let pokemon = client
        .fetch_pokemon(name)
        .await
        .map_err(|source| Error::Fetch {
            subject: "Pokemon".to_string(),
            source,
        })?;

    Ok(format::pokemon_summary(&pokemon))
}

/// Handle compare_pokemon - fetch both Pokemon sequentially, then
/// render the stat comparison
async fn handle_compare_pokemon(client: &PokeClient, arguments: Value) -> Result<String> {
    let first = string_arg(&arguments, "pokemon1")?;
    let second = string_arg(&arguments, "pokemon2")?;

    let a = client
        .fetch_pokemon(first)
        .await
        .map_err(|source| Error::Fetch {
            subject: first.to_string(),
            source,
        })?;

    let b = client
        .fetch_pokemon(second)
        .await
        .map_err(|source| Error::Fetch {
            subject: second.to_string(),
            source,
        })?;

    format::pokemon_comparison(&a, &b).map_err(Error::Compare)
}
