//! ID types for PokéAPI resources.

use crate::error::{PokedexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Pokémon IDs.
///
/// # Examples
///
/// ```rust
/// use pokedex_etl::PokemonId;
///
/// let pikachu = PokemonId::new(25);
/// assert_eq!(pikachu.as_u32(), 25);
/// assert_eq!(pikachu.to_string(), "25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PokemonId(pub u32);

impl PokemonId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PokemonId {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
