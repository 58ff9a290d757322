//! Composite loads in foreign-key order
//!
//! Each step commits on its own; a failure part-way through leaves the
//! earlier entity types in place.

use super::{models::LoadSummary, schema::PokedexDatabase};
use crate::storage::models::{AbilityRow, MoveRow};
use crate::transform::{PokemonBatch, TypeBatch};
use crate::Result;
use tracing::info;

impl PokedexDatabase {
    /// Pokémon, then stats, type, ability and move associations.
    ///
    /// The referenced types, abilities and moves must already be stored.
    pub fn load_all_pokemon_data(&mut self, batch: &PokemonBatch) -> Result<LoadSummary> {
        let summary = LoadSummary {
            pokemon: self.load_pokemon(&batch.pokemon)?,
            stats: self.load_pokemon_stats(&batch.stats)?,
            pokemon_types: self.load_pokemon_types(&batch.types)?,
            pokemon_abilities: self.load_pokemon_abilities(&batch.abilities)?,
            pokemon_moves: self.load_pokemon_moves(&batch.moves)?,
            ..LoadSummary::default()
        };

        info!("Loaded all data for {} Pokémon", summary.pokemon);
        Ok(summary)
    }

    /// Types, then their effectiveness pairs.
    pub fn load_all_type_data(&mut self, batch: &TypeBatch) -> Result<LoadSummary> {
        let summary = LoadSummary {
            types: self.load_types(&batch.types)?,
            effectiveness: self.load_type_effectiveness(&batch.effectiveness)?,
            ..LoadSummary::default()
        };

        info!("Loaded all data for {} types", summary.types);
        Ok(summary)
    }

    pub fn load_all_ability_data(&mut self, abilities: &[AbilityRow]) -> Result<LoadSummary> {
        Ok(LoadSummary {
            abilities: self.load_abilities(abilities)?,
            ..LoadSummary::default()
        })
    }

    /// Move rows reference types; load types first.
    pub fn load_all_move_data(&mut self, moves: &[MoveRow]) -> Result<LoadSummary> {
        Ok(LoadSummary {
            moves: self.load_moves(moves)?,
            ..LoadSummary::default()
        })
    }
}
