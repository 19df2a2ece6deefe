//! Display-ready projection of a catalog detail record.

use pokedex_pokeapi::Pokemon;

/// The four fields a card renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub id: u32,
    /// Official artwork URL, or empty when the record has none.
    pub image: String,
    pub name: String,
    /// Type labels in the order the API lists them.
    pub types: Vec<String>,
}

impl DisplayCard {
    /// Name with its first character upper-cased (`pikachu` -> `Pikachu`).
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Projects a detail record into a [`DisplayCard`].
pub fn project(pokemon: &Pokemon) -> DisplayCard {
    DisplayCard {
        id: pokemon.id,
        image: pokemon.official_artwork().unwrap_or_default().to_string(),
        name: pokemon.name.clone(),
        types: pokemon
            .types
            .iter()
            .map(|slot| slot.kind.name.clone())
            .collect(),
    }
}

impl From<&Pokemon> for DisplayCard {
    fn from(pokemon: &Pokemon) -> Self {
        project(pokemon)
    }
}
