//! Fetch-and-project routine.
//!
//! Lists one catalog page, fans out one detail request per entry, waits for
//! all of them and projects each record into a [`DisplayCard`]. The batch is
//! all-or-nothing: the first failing detail fetch fails the whole load.

use std::future::Future;
use std::pin::Pin;

use futures_util::future::try_join_all;
use pokedex_pokeapi::{Client, Error as CatalogError, Pokemon, PokemonPage};
use tracing::{debug, info, warn};

use crate::card::{DisplayCard, project};
use crate::error::GalleryError;

/// Offset of the gallery page.
pub const GALLERY_OFFSET: u32 = 0;

/// Number of pokemon in the gallery (the first generation).
pub const GALLERY_SIZE: u32 = 151;

/// Boxed future returned by [`CatalogSource`] methods.
pub type CatalogFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, CatalogError>> + Send + 'a>>;

/// Abstract catalog the loader reads from.
///
/// Implemented for [`pokedex_pokeapi::Client`]; tests provide in-memory
/// catalogs.
pub trait CatalogSource: Send + Sync {
    /// Lists `limit` entries starting at `offset`, in catalog order.
    fn list_pokemons(&self, offset: u32, limit: u32) -> CatalogFuture<'_, PokemonPage>;

    /// Returns the detail record for one entry.
    fn get_pokemon_by_name<'a>(&'a self, name: &'a str) -> CatalogFuture<'a, Pokemon>;
}

impl CatalogSource for Client {
    fn list_pokemons(&self, offset: u32, limit: u32) -> CatalogFuture<'_, PokemonPage> {
        Box::pin(Client::list_pokemons(self, offset, limit))
    }

    fn get_pokemon_by_name<'a>(&'a self, name: &'a str) -> CatalogFuture<'a, Pokemon> {
        Box::pin(Client::get_pokemon_by_name(self, name))
    }
}

/// Which slice of the catalog to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: GALLERY_OFFSET,
            limit: GALLERY_SIZE,
        }
    }
}

/// Loads and projects one page of the catalog.
///
/// Detail requests run concurrently; the returned cards are in page order
/// regardless of completion order.
pub async fn fetch_cards(
    source: &dyn CatalogSource,
    request: PageRequest,
) -> Result<Vec<DisplayCard>, GalleryError> {
    let page = source
        .list_pokemons(request.offset, request.limit)
        .await
        .map_err(GalleryError::Page)?;
    debug!(
        offset = request.offset,
        limit = request.limit,
        entries = page.results.len(),
        "fetched catalog page"
    );

    let details = try_join_all(page.results.iter().map(|entry| async move {
        source
            .get_pokemon_by_name(&entry.name)
            .await
            .map_err(|e| {
                warn!(name = %entry.name, error = %e, "detail fetch failed");
                GalleryError::Detail {
                    name: entry.name.clone(),
                    source: e,
                }
            })
    }))
    .await?;

    let cards: Vec<DisplayCard> = details.iter().map(project).collect();
    info!(count = cards.len(), "gallery page loaded");
    Ok(cards)
}
