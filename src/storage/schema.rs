//! Database schema and connection management

use crate::core::app_cache_dir;
use crate::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

/// Connection to the relational store holding all loaded Pokédex data
pub struct PokedexDatabase {
    pub(crate) conn: Connection,
}

/// Where a connection string points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    InMemory,
    File(PathBuf),
}

impl DatabaseLocation {
    /// Parse `sqlite://path`, `sqlite:path`, `:memory:` or a bare path.
    pub fn parse(url: &str) -> Self {
        let trimmed = url.trim();
        let path = trimmed
            .strip_prefix("sqlite://")
            .or_else(|| trimmed.strip_prefix("sqlite:"))
            .unwrap_or(trimmed);

        if path.is_empty() || path == ":memory:" {
            DatabaseLocation::InMemory
        } else {
            DatabaseLocation::File(PathBuf::from(path))
        }
    }
}

impl PokedexDatabase {
    /// Open the store named by a connection string and ensure tables exist
    pub fn open(url: &str) -> Result<Self> {
        match DatabaseLocation::parse(url) {
            DatabaseLocation::InMemory => Self::new_in_memory(),
            DatabaseLocation::File(path) => Self::open_path(&path),
        }
    }

    /// Open (or create) a database file and ensure tables exist
    pub fn open_path(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        info!("Opened database at {}", path.display());
        Self::from_connection(conn)
    }

    /// Fresh in-memory database, mostly for tests
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default database file: ~/.cache/pokedex-etl/pokedex.db
    pub fn default_path() -> Result<PathBuf> {
        Ok(app_cache_dir()?.join("pokedex.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS pokemon (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                height INTEGER NOT NULL,
                weight INTEGER NOT NULL,
                base_experience INTEGER,
                is_default INTEGER NOT NULL,
                order_num INTEGER
            );

            CREATE TABLE IF NOT EXISTS pokemon_stats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                pokemon_id INTEGER NOT NULL REFERENCES pokemon(id),
                stat_name TEXT NOT NULL,
                base_value INTEGER NOT NULL,
                UNIQUE (pokemon_id, stat_name)
            );

            CREATE TABLE IF NOT EXISTS types (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS pokemon_types (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                pokemon_id INTEGER NOT NULL REFERENCES pokemon(id),
                type_id INTEGER NOT NULL REFERENCES types(id),
                slot INTEGER NOT NULL,
                UNIQUE (pokemon_id, type_id),
                UNIQUE (pokemon_id, slot)
            );

            CREATE TABLE IF NOT EXISTS type_effectiveness (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                attack_type_id INTEGER NOT NULL REFERENCES types(id),
                defense_type_id INTEGER NOT NULL REFERENCES types(id),
                effectiveness REAL NOT NULL,
                UNIQUE (attack_type_id, defense_type_id)
            );

            CREATE TABLE IF NOT EXISTS abilities (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                effect TEXT NOT NULL DEFAULT '',
                flavor_text TEXT NOT NULL DEFAULT '',
                is_main_series INTEGER NOT NULL DEFAULT 1
            );

            CREATE TABLE IF NOT EXISTS pokemon_abilities (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                pokemon_id INTEGER NOT NULL REFERENCES pokemon(id),
                ability_id INTEGER NOT NULL REFERENCES abilities(id),
                is_hidden INTEGER NOT NULL,
                slot INTEGER NOT NULL,
                UNIQUE (pokemon_id, ability_id)
            );

            CREATE TABLE IF NOT EXISTS moves (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                power INTEGER,
                pp INTEGER,
                accuracy INTEGER,
                type_id INTEGER REFERENCES types(id),
                damage_class TEXT
            );

            CREATE TABLE IF NOT EXISTS pokemon_moves (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                pokemon_id INTEGER NOT NULL REFERENCES pokemon(id),
                move_id INTEGER NOT NULL REFERENCES moves(id),
                level_learned_at INTEGER NOT NULL,
                learn_method TEXT NOT NULL,
                UNIQUE (pokemon_id, move_id, learn_method)
            );

            CREATE INDEX IF NOT EXISTS idx_pokemon_types_type ON pokemon_types(type_id);
            CREATE INDEX IF NOT EXISTS idx_pokemon_moves_move ON pokemon_moves(move_id);",
        )?;

        Ok(())
    }
}
