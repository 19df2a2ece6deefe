//! In-memory catalog used by the gallery tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use pokedex_pokeapi::{Error as CatalogError, NamedResource, Pokemon, PokemonPage};

use crate::loader::{CatalogFuture, CatalogSource};

pub(crate) fn pokemon(id: u32, name: &str, types: &[&str], artwork: Option<&str>) -> Pokemon {
    let types: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(i, t)| serde_json::json!({"slot": i + 1, "type": {"name": t, "url": ""}}))
        .collect();
    let sprites = match artwork {
        Some(url) => serde_json::json!({"other": {"official-artwork": {"front_default": url}}}),
        None => serde_json::json!({}),
    };
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "sprites": sprites,
        "types": types,
    }))
    .unwrap()
}

/// Catalog answering from a fixed list with optional per-name delays and failures.
#[derive(Default)]
pub(crate) struct MockCatalog {
    entries: Vec<Pokemon>,
    delays: HashMap<String, Duration>,
    failures: HashSet<String>,
    list_status: Option<u16>,
    completed: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub(crate) fn new(entries: Vec<Pokemon>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub(crate) fn delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.into(), delay);
        self
    }

    pub(crate) fn fail(mut self, name: &str) -> Self {
        self.failures.insert(name.into());
        self
    }

    pub(crate) fn fail_list(mut self, status: u16) -> Self {
        self.list_status = Some(status);
        self
    }

    pub(crate) fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

impl CatalogSource for MockCatalog {
    fn list_pokemons(&self, offset: u32, limit: u32) -> CatalogFuture<'_, PokemonPage> {
        Box::pin(async move {
            if let Some(status) = self.list_status {
                return Err(CatalogError::Api {
                    status,
                    body: "list failed".into(),
                });
            }
            let results = self
                .entries
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .map(|p| NamedResource {
                    name: p.name.clone(),
                    url: format!("https://pokeapi.co/api/v2/pokemon/{}/", p.id),
                })
                .collect();
            Ok(PokemonPage {
                count: self.entries.len() as u32,
                results,
                ..Default::default()
            })
        })
    }

    fn get_pokemon_by_name<'a>(&'a self, name: &'a str) -> CatalogFuture<'a, Pokemon> {
        Box::pin(async move {
            if let Some(delay) = self.delays.get(name) {
                tokio::time::sleep(*delay).await;
            }
            self.completed.lock().unwrap().push(name.to_string());
            if self.failures.contains(name) {
                return Err(CatalogError::Api {
                    status: 500,
                    body: format!("{name} unavailable"),
                });
            }
            self.entries
                .iter()
                .find(|p| p.name == name)
                .cloned()
                .ok_or_else(|| CatalogError::Api {
                    status: 404,
                    body: "Not Found".into(),
                })
        })
    }
}
