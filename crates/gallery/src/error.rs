//! Error types for gallery loading and rendering.

use pokedex_pokeapi::Error as CatalogError;

/// Errors produced while loading or rendering the gallery.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("failed to list pokemon: {0}")]
    Page(#[source] CatalogError),

    #[error("failed to fetch pokemon {name:?}: {source}")]
    Detail {
        name: String,
        #[source]
        source: CatalogError,
    },

    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

impl GalleryError {
    /// Name of the catalog entry whose detail fetch failed, if any.
    pub fn failed_name(&self) -> Option<&str> {
        match self {
            Self::Detail { name, .. } => Some(name),
            _ => None,
        }
    }
}
