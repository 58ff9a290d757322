//! Fetch command implementation

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::FetchTargets,
    pipeline::{
        fetch_and_load_ability_data, fetch_and_load_pokemon_data, fetch_and_load_type_data,
        PipelineSummary, PokemonSelection,
    },
    pokeapi::{ClientConfig, PokeApiClient},
    storage::PokedexDatabase,
    Result,
};

use super::open_database;

/// Parameters for the fetch command
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    pub targets: FetchTargets,
    pub start_id: u32,
    pub end_id: u32,
    pub all_pokemon: bool,
    pub rate_limit: Option<u32>,
    pub cache_dir: Option<PathBuf>,
    pub no_cache: bool,
    pub database_url: Option<String>,
}

impl FetchParams {
    /// Client settings, keeping defaults for anything not given
    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            rate_limit: self.rate_limit.unwrap_or(defaults.rate_limit),
            cache_dir: self.cache_dir.clone().unwrap_or(defaults.cache_dir.clone()),
            use_cache: !self.no_cache,
            ..defaults
        }
    }

    pub fn selection(&self) -> PokemonSelection {
        if self.all_pokemon {
            PokemonSelection::All
        } else {
            PokemonSelection::Range {
                start_id: self.start_id,
                end_id: self.end_id,
            }
        }
    }
}

/// Handle the fetch command
pub async fn handle_fetch(params: FetchParams) -> Result<PipelineSummary> {
    if params.targets.is_empty() {
        println!("Nothing to fetch: pass --pokemon, --types, --abilities or --all");
        return Ok(PipelineSummary::default());
    }

    let mut client = PokeApiClient::new(params.client_config())?;
    let mut db = open_database(params.database_url.clone())?;

    let summary = run_fetch(&params, &mut client, &mut db).await?;

    println!("✓ Fetch complete");
    println!(
        "Fetched: {} Pokémon, {} types, {} abilities, {} moves ({} network requests)",
        summary.pokemon_fetched,
        summary.types_fetched,
        summary.abilities_fetched,
        summary.moves_fetched,
        client.network_requests()
    );
    println!(
        "Loaded {} rows ({} dropped for missing references)",
        summary.rows_loaded.total(),
        summary.rows_dropped
    );

    Ok(summary)
}

/// Run the requested pipelines against an existing client and database:
/// types, then abilities, then Pokémon
pub async fn run_fetch(
    params: &FetchParams,
    client: &mut PokeApiClient,
    db: &mut PokedexDatabase,
) -> Result<PipelineSummary> {
    let mut summary = PipelineSummary::default();

    if params.targets.wants_types() {
        info!("Starting type data ingestion");
        summary.absorb(fetch_and_load_type_data(client, db).await?);
    }

    if params.targets.wants_abilities() {
        info!("Starting ability data ingestion");
        summary.absorb(fetch_and_load_ability_data(client, db).await?);
    }

    if params.targets.wants_pokemon() {
        let selection = params.selection();
        info!("Starting Pokémon data ingestion: {:?}", selection);
        summary.absorb(fetch_and_load_pokemon_data(client, db, selection).await?);
    }

    Ok(summary)
}
