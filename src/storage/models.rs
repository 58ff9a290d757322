//! Data models for the storage layer
//!
//! Rows hold foreign-key values only, never back-references.

use serde::{Deserialize, Serialize};

/// One Pokémon form as stored in `pokemon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRow {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub is_default: bool,
    pub order_num: Option<i32>,
}

/// Base stat, unique per `(pokemon_id, stat_name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    pub pokemon_id: u32,
    pub stat_name: String,
    pub base_value: u32,
}

/// Type assignment, unique per `(pokemon_id, type_id)`; slot 1 is primary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonTypeRow {
    pub pokemon_id: u32,
    pub type_id: u32,
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonAbilityRow {
    pub pokemon_id: u32,
    pub ability_id: u32,
    pub is_hidden: bool,
    pub slot: u8,
}

/// Move a Pokémon can learn, unique per `(pokemon_id, move_id, learn_method)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonMoveRow {
    pub pokemon_id: u32,
    pub move_id: u32,
    pub level_learned_at: u32,
    pub learn_method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRow {
    pub id: u32,
    pub name: String,
}

/// Damage multiplier of an attacking type against a defending type.
/// A pair with no row is neutral (1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeEffectivenessRow {
    pub attack_type_id: u32,
    pub defense_type_id: u32,
    pub effectiveness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityRow {
    pub id: u32,
    pub name: String,
    pub effect: String,
    pub flavor_text: String,
    pub is_main_series: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRow {
    pub id: u32,
    pub name: String,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub accuracy: Option<u32>,
    pub type_id: Option<u32>,
    pub damage_class: Option<String>,
}

/// Pokémon ranked by the sum of its base stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPokemon {
    pub id: u32,
    pub name: String,
    pub total_base_stats: i64,
}

/// Number of Pokémon carrying a type in any slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    pub type_name: String,
    pub pokemon_count: i64,
}

/// Frequency of a `primary/secondary` (or single) type combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCombination {
    pub type_combination: String,
    pub pokemon_count: i64,
}

/// Diversity of move types a Pokémon can learn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveCoverage {
    pub pokemon_id: u32,
    pub pokemon_name: String,
    pub unique_move_types: i64,
    pub total_moves: i64,
    /// `unique_move_types / number of types`, rounded to two decimals
    pub type_coverage_pct: f64,
}

/// Row counts written by a composite load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub pokemon: usize,
    pub stats: usize,
    pub types: usize,
    pub effectiveness: usize,
    pub pokemon_types: usize,
    pub abilities: usize,
    pub pokemon_abilities: usize,
    pub moves: usize,
    pub pokemon_moves: usize,
}

impl LoadSummary {
    pub fn total(&self) -> usize {
        self.pokemon
            + self.stats
            + self.types
            + self.effectiveness
            + self.pokemon_types
            + self.abilities
            + self.pokemon_abilities
            + self.moves
            + self.pokemon_moves
    }

    /// Add another summary's counts onto this one.
    pub fn absorb(&mut self, other: LoadSummary) {
        self.pokemon += other.pokemon;
        self.stats += other.stats;
        self.types += other.types;
        self.effectiveness += other.effectiveness;
        self.pokemon_types += other.pokemon_types;
        self.abilities += other.abilities;
        self.pokemon_abilities += other.pokemon_abilities;
        self.moves += other.moves;
        self.pokemon_moves += other.pokemon_moves;
    }
}
