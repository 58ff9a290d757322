//! Storage layer for the Pokédex ETL pipeline
//!
//! A thin abstraction over the SQLite database, organized into:
//! - `models`: Row and result structures
//! - `schema`: Connection and schema management
//! - `queries`: Per-entity-type upserts and lookups
//! - `loader`: Composite loads in foreign-key order
//! - `analysis`: Aggregate queries and type-matchup analytics

pub mod analysis;
pub mod loader;
pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::{DatabaseLocation, PokedexDatabase};
