//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use pokedex_etl::{
    cli::{Commands, Pokedex},
    commands::{
        analytics::handle_analytics,
        counters::handle_counters,
        fetch::{handle_fetch, FetchParams},
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let app = Pokedex::parse();

    match app.command {
        Commands::Fetch {
            targets,
            start_id,
            end_id,
            all_pokemon,
            rate_limit,
            cache_dir,
            no_cache,
            database,
        } => {
            handle_fetch(FetchParams {
                targets,
                start_id,
                end_id,
                all_pokemon,
                rate_limit,
                cache_dir,
                no_cache,
                database_url: database.database_url,
            })
            .await
            .context("fetch failed")?;
        }

        Commands::Analytics {
            kind,
            limit,
            json,
            database,
        } => handle_analytics(kind, limit, json, database.database_url)
            .context("analytics failed")?,

        Commands::Counters {
            pokemon_id,
            top_n,
            json,
            database,
        } => handle_counters(pokemon_id, top_n, json, database.database_url)
            .with_context(|| format!("counter lookup for Pokémon {} failed", pokemon_id))?,
    }

    Ok(())
}
