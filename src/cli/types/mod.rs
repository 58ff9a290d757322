//! Type-safe wrappers and enums for CLI arguments.

pub mod filters;
pub mod ids;

pub use filters::AnalyticsKind;
pub use ids::PokemonId;
