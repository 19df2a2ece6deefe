//! PokeAPI client.
//!
//! Async HTTP client using `reqwest`. PokeAPI is unauthenticated, so no
//! default headers beyond the user agent are set.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{Pokemon, PokemonPage};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Everything but RFC 3986 unreserved characters is escaped in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Errors from the PokeAPI client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// PokeAPI client.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a new client pointed at the public PokeAPI.
    pub fn new() -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pokedex-gallery/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Sets a custom base URL (mirrors, local fixtures).
    ///
    /// A trailing slash is dropped so endpoints can be appended verbatim.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Returns the base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET request and decodes the JSON body.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, endpoint);
        let resp = self.http.get(&url).query(params).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Lists `limit` pokemon starting at `offset`, in catalog order.
    pub async fn list_pokemons(&self, offset: u32, limit: u32) -> Result<PokemonPage, Error> {
        debug!(offset, limit, "listing pokemon");
        let params = [("offset", offset.to_string()), ("limit", limit.to_string())];
        self.get("/pokemon", &params).await
    }

    /// Returns the full record for one pokemon.
    pub async fn get_pokemon_by_name(&self, name: &str) -> Result<Pokemon, Error> {
        debug!(name, "fetching pokemon");
        let encoded = utf8_percent_encode(name, PATH_SEGMENT).to_string();
        self.get(&format!("/pokemon/{encoded}"), &[]).await
    }
}
