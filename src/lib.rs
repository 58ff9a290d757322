//! Pokédex ETL Library
//!
//! Pulls Pokémon, type, ability and move data from [PokéAPI](https://pokeapi.co),
//! reshapes the JSON into relational rows, upserts them into SQLite and runs
//! aggregate analytics over the result.
//!
//! ## Features
//!
//! - **API Client**: Rate-limited, file-cached GET requests with exponential backoff
//! - **Transformers**: Pure functions from raw payloads to flat rows
//! - **Idempotent Loading**: One `INSERT ... ON CONFLICT DO UPDATE` per row, one transaction per entity type
//! - **Analytics**: Top stats, type distribution, effectiveness matrix, counter recommendations
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pokedex_etl::{
//!     pipeline::{fetch_and_load_pokemon_data, fetch_and_load_type_data, PokemonSelection},
//!     ClientConfig, PokeApiClient, PokedexDatabase, PokemonId,
//! };
//!
//! # async fn example() -> pokedex_etl::Result<()> {
//! let mut client = PokeApiClient::new(ClientConfig::default())?;
//! let mut db = PokedexDatabase::open("sqlite://pokedex.db")?;
//!
//! fetch_and_load_type_data(&mut client, &mut db).await?;
//! fetch_and_load_pokemon_data(
//!     &mut client,
//!     &mut db,
//!     PokemonSelection::Range { start_id: 1, end_id: 151 },
//! )
//! .await?;
//!
//! for counter in db.recommend_counter_types(PokemonId::new(130), 3)? {
//!     println!("{} {}", counter.type_name, counter.label);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database instead of passing `--database-url` every time:
//! ```bash
//! export DATABASE_URL=sqlite:///path/to/pokedex.db
//! ```

pub mod analytics;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod pokeapi;
pub mod storage;
pub mod transform;

// Re-export commonly used types
pub use cli::types::{AnalyticsKind, PokemonId};
pub use error::{PokedexError, Result};
pub use pokeapi::{ClientConfig, PokeApiClient};
pub use storage::PokedexDatabase;

pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
