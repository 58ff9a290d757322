//! Transformers: raw API payloads in, flat relational rows out. No I/O.

pub mod ability;
pub mod moves;
pub mod pokemon;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::pokeapi::types::Localized;
use crate::storage::models::{
    PokemonAbilityRow, PokemonMoveRow, PokemonRow, PokemonTypeRow, StatRow, TypeEffectivenessRow,
    TypeRow,
};
use crate::{error::PokedexError, Result};

pub use ability::{transform_ability, transform_ability_batch};
pub use moves::{transform_move, transform_move_batch};
pub use pokemon::{transform_pokemon, transform_pokemon_batch, MOVE_VERSION_GROUPS};
pub use types::{transform_type, transform_type_batch};

/// Everything one or more Pokémon expand into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonBatch {
    pub pokemon: Vec<PokemonRow>,
    pub stats: Vec<StatRow>,
    pub types: Vec<PokemonTypeRow>,
    pub abilities: Vec<PokemonAbilityRow>,
    pub moves: Vec<PokemonMoveRow>,
}

impl PokemonBatch {
    pub fn extend(&mut self, other: PokemonBatch) {
        self.pokemon.extend(other.pokemon);
        self.stats.extend(other.stats);
        self.types.extend(other.types);
        self.abilities.extend(other.abilities);
        self.moves.extend(other.moves);
    }

    /// Distinct ability ids referenced by the batch, ascending.
    pub fn referenced_ability_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.abilities.iter().map(|a| a.ability_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Distinct move ids referenced by the batch, ascending.
    pub fn referenced_move_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.moves.iter().map(|m| m.move_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Drop association rows whose type, ability or move is not in the given
    /// id sets. Returns how many rows were dropped.
    pub fn retain_known_references(
        &mut self,
        type_ids: &BTreeSet<u32>,
        ability_ids: &BTreeSet<u32>,
        move_ids: &BTreeSet<u32>,
    ) -> usize {
        let before = self.types.len() + self.abilities.len() + self.moves.len();

        self.types.retain(|t| type_ids.contains(&t.type_id));
        self.abilities.retain(|a| ability_ids.contains(&a.ability_id));
        self.moves.retain(|m| move_ids.contains(&m.move_id));

        before - (self.types.len() + self.abilities.len() + self.moves.len())
    }
}

/// Types plus their offensive effectiveness pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeBatch {
    pub types: Vec<TypeRow>,
    pub effectiveness: Vec<TypeEffectivenessRow>,
}

impl TypeBatch {
    pub fn type_ids(&self) -> BTreeSet<u32> {
        self.types.iter().map(|t| t.id).collect()
    }

    /// Drop effectiveness pairs naming a type outside `known`. Returns how
    /// many were dropped.
    pub fn retain_known_types(&mut self, known: &BTreeSet<u32>) -> usize {
        let before = self.effectiveness.len();
        self.effectiveness
            .retain(|e| known.contains(&e.attack_type_id) && known.contains(&e.defense_type_id));
        before - self.effectiveness.len()
    }
}

/// Numeric id from the trailing path segment of a resource URL.
///
/// `https://pokeapi.co/api/v2/type/13/` → `13`
pub fn extract_id_from_url(url: &str) -> Result<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .ok_or_else(|| PokedexError::InvalidUrl {
            url: url.to_string(),
        })
}

/// Text of the first English entry, if there is one.
pub fn first_english<T: Localized>(entries: &[T]) -> Option<&str> {
    entries
        .iter()
        .find(|entry| entry.language() == "en")
        .map(|entry| entry.text())
}
