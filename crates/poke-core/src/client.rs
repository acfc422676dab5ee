//! Upstream PokeAPI client
//!
//! One GET per lookup, no caching and no retries. Names are case-folded
//! for the lookup but otherwise forwarded verbatim into the request
//! path.

use crate::error::{Error, Result};
use crate::model::Pokemon;

/// Base URL of the public PokeAPI.
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// HTTP client for the PokeAPI `pokemon` resource.
#[derive(Debug, Clone)]
pub struct PokeClient {
    client: reqwest::Client,
    api_base: String,
}

impl Default for PokeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeClient {
    /// Create a client against the public API.
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    /// Create a client against a custom base URL (local mirrors, tests).
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.api_base, name.to_lowercase())
    }

    /// Fetch a single Pokemon by name.
    ///
    /// The name is lower-cased for the lookup. Succeeds only when the
    /// upstream answers 200 OK with a body that decodes into
    /// [`Pokemon`].
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.pokemon_url(name);
        tracing::debug!(%url, "fetching pokemon");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::debug!(%url, status = status.as_u16(), "upstream returned non-OK status");
            return Err(Error::Status(status.as_u16()));
        }

        response
            .json::<Pokemon>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }
}
