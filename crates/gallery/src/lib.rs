//! Pokedex card gallery.
//!
//! Loads one page of the PokeAPI catalog, fetches every entry's detail record
//! in parallel and projects each into a [`DisplayCard`]. The result is held in
//! a [`GalleryView`] whose state renders to an HTML document.
//!
//! # Pieces
//!
//! - **Loader**: page fetch, concurrent detail fan-out, projection
//! - **Colors**: fixed type-label to badge-color table
//! - **View**: `Loading | Loaded | Failed` state bound to a cancellable task
//! - **Render**: askama templates for the gallery page and its cards

pub mod card;
pub mod colors;
pub mod error;
pub mod loader;
pub mod render;
pub mod view;

#[cfg(test)]
mod testing;

// Re-export primary types for convenience.
pub use card::{DisplayCard, project};
pub use colors::type_color;
pub use error::GalleryError;
pub use loader::{CatalogSource, PageRequest, fetch_cards};
pub use render::render_page;
pub use view::{GalleryView, ViewState};
