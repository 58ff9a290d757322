//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{AnalyticsKind, PokemonId};

/// Relational store selection shared between commands
#[derive(Debug, Clone, Default, Args)]
pub struct DatabaseArgs {
    /// Connection string: `sqlite://path`, a bare path or `:memory:`
    /// (or set `DATABASE_URL` env var).
    #[clap(long)]
    pub database_url: Option<String>,
}

/// Which entity groups `fetch` pulls and loads
#[derive(Debug, Clone, Default, Args)]
pub struct FetchTargets {
    /// Fetch Pokémon (with the abilities and moves they reference).
    #[clap(long)]
    pub pokemon: bool,

    /// Fetch types and their effectiveness relations.
    #[clap(long)]
    pub types: bool,

    /// Fetch every ability in the catalog.
    #[clap(long)]
    pub abilities: bool,

    /// Types first, then Pokémon.
    #[clap(long)]
    pub all: bool,
}

impl FetchTargets {
    pub fn wants_types(&self) -> bool {
        self.all || self.types
    }

    pub fn wants_pokemon(&self) -> bool {
        self.all || self.pokemon
    }

    pub fn wants_abilities(&self) -> bool {
        self.abilities
    }

    pub fn is_empty(&self) -> bool {
        !(self.wants_types() || self.wants_pokemon() || self.wants_abilities())
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch data from PokéAPI, transform it and load it into the database.
    Fetch {
        #[clap(flatten)]
        targets: FetchTargets,

        /// First Pokémon ID of the range.
        #[clap(long, default_value_t = 1)]
        start_id: u32,

        /// Last Pokémon ID of the range (inclusive).
        #[clap(long, default_value_t = 151)]
        end_id: u32,

        /// Fetch the whole Pokémon catalog instead of an ID range.
        #[clap(long)]
        all_pokemon: bool,

        /// Maximum network requests per minute.
        #[clap(long, short)]
        rate_limit: Option<u32>,

        /// Directory for the per-endpoint JSON cache.
        #[clap(long)]
        cache_dir: Option<PathBuf>,

        /// Skip the cache entirely: always hit the network, write nothing.
        #[clap(long)]
        no_cache: bool,

        #[clap(flatten)]
        database: DatabaseArgs,
    },

    /// Print aggregate statistics over the loaded data.
    Analytics {
        /// Which analytics to print.
        #[clap(long, short, value_enum, default_value_t = AnalyticsKind::All)]
        kind: AnalyticsKind,

        /// Rows per ranking.
        #[clap(long, short, default_value_t = 10)]
        limit: u32,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        #[clap(flatten)]
        database: DatabaseArgs,
    },

    /// Recommend attacking types against one Pokémon.
    Counters {
        /// Pokémon ID (e.g. 25).
        pokemon_id: PokemonId,

        /// Number of counter types to show.
        #[clap(long, short = 'n', default_value_t = 5)]
        top_n: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        #[clap(flatten)]
        database: DatabaseArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "pokedex-etl",
    version,
    about = "Pokémon ETL pipeline: PokéAPI → SQLite → analytics"
)]
pub struct Pokedex {
    #[clap(subcommand)]
    pub command: Commands,
}
