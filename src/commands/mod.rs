//! Command implementations for the Pokédex ETL CLI

pub mod analytics;
pub mod counters;
pub mod fetch;


use crate::{storage::PokedexDatabase, Result, DATABASE_URL_ENV_VAR};
use tracing::info;

/// Resolve the connection string from option, then `DATABASE_URL`, then the
/// default database file under the user cache directory.
///
/// Blank values count as unset; use `:memory:` to ask for an in-memory store.
pub fn resolve_database_url(database_url: Option<String>) -> Result<String> {
    let non_blank = |url: &String| !url.trim().is_empty();
    let from_env = || std::env::var(DATABASE_URL_ENV_VAR).ok().filter(non_blank);
    if let Some(url) = database_url.filter(non_blank).or_else(from_env) {
        return Ok(url);
    }

    let path = PokedexDatabase::default_path()?;
    Ok(format!("sqlite://{}", path.display()))
}

/// Open (and create if needed) the database a command works against
pub fn open_database(database_url: Option<String>) -> Result<PokedexDatabase> {
    let url = resolve_database_url(database_url)?;
    info!("Using database {}", url);
    PokedexDatabase::open(&url)
}
