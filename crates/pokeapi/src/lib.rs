//! PokeAPI v2 client for paged listings and per-pokemon detail lookups.
//!
//! Provides an async client for the [PokeAPI](https://pokeapi.co) REST
//! endpoints used by the gallery: the paged `/pokemon` listing and the
//! `/pokemon/{name}` detail record.

pub mod client;
pub mod types;

pub use client::{Client, Error};
pub use types::{NamedResource, Pokemon, PokemonPage, PokemonTypeSlot, Sprites};
