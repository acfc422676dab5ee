//! Decoded upstream payloads
//!
//! Mirrors the subset of the PokeAPI `pokemon` resource that the server
//! renders. Decoding is structural: unknown fields are ignored, missing
//! required fields fail the decode.

use serde::Deserialize;

/// A single Pokemon as returned by the upstream API.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
}

/// One entry of the `types` array (`types[].type.name`).
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One entry of the `stats` array (`stats[].base_stat`, `stats[].stat.name`).
#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: i64,
    pub stat: NamedResource,
}

/// The `{"name": ..., "url": ...}` shape PokeAPI uses for resource references.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

impl Pokemon {
    /// Type names in upstream order.
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }
}
