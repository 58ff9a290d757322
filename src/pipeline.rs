//! Fetch → transform → load orchestration
//!
//! Every run is strictly sequential. Load order follows the foreign keys:
//! types, then abilities and moves, then Pokémon with their associations.
//! Each entity type commits on its own, so a failure part-way through keeps
//! whatever was already loaded.

use serde::Serialize;
use tracing::{info, warn};

use crate::pokeapi::{fetch, PokeApiClient};
use crate::storage::{LoadSummary, PokedexDatabase};
use crate::transform::{
    transform_ability_batch, transform_move_batch, transform_pokemon_batch, transform_type_batch,
};
use crate::Result;

/// Which Pokémon a pipeline run pulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PokemonSelection {
    /// Inclusive ID range
    Range { start_id: u32, end_id: u32 },
    /// The whole catalog, paged
    All,
}

/// What a run fetched and wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineSummary {
    pub pokemon_fetched: usize,
    pub types_fetched: usize,
    pub abilities_fetched: usize,
    pub moves_fetched: usize,
    /// Rows discarded because something they reference is not stored
    pub rows_dropped: usize,
    pub rows_loaded: LoadSummary,
}

impl PipelineSummary {
    pub fn absorb(&mut self, other: PipelineSummary) {
        self.pokemon_fetched += other.pokemon_fetched;
        self.types_fetched += other.types_fetched;
        self.abilities_fetched += other.abilities_fetched;
        self.moves_fetched += other.moves_fetched;
        self.rows_dropped += other.rows_dropped;
        self.rows_loaded.absorb(other.rows_loaded);
    }
}

/// Fetch every type with its damage relations and load types, then
/// effectiveness pairs.
pub async fn fetch_and_load_type_data(
    client: &mut PokeApiClient,
    db: &mut PokedexDatabase,
) -> Result<PipelineSummary> {
    let raw_types = fetch::fetch_all_types_with_effectiveness(client).await?;
    let mut batch = transform_type_batch(&raw_types)?;

    // A type whose detail fetch failed cannot be referenced.
    let mut known = db.type_ids()?;
    known.extend(batch.type_ids());
    let rows_dropped = batch.retain_known_types(&known);
    if rows_dropped > 0 {
        warn!(
            "Dropped {} effectiveness pairs referencing unknown types",
            rows_dropped
        );
    }

    let rows_loaded = db.load_all_type_data(&batch)?;

    Ok(PipelineSummary {
        types_fetched: raw_types.len(),
        rows_dropped,
        rows_loaded,
        ..PipelineSummary::default()
    })
}

/// Fetch every ability in the catalog and load it.
pub async fn fetch_and_load_ability_data(
    client: &mut PokeApiClient,
    db: &mut PokedexDatabase,
) -> Result<PipelineSummary> {
    let raw_abilities = fetch::fetch_all_abilities(client).await?;
    let abilities = transform_ability_batch(&raw_abilities);
    let rows_loaded = db.load_all_ability_data(&abilities)?;

    Ok(PipelineSummary {
        abilities_fetched: raw_abilities.len(),
        rows_loaded,
        ..PipelineSummary::default()
    })
}

/// Fetch Pokémon, then the abilities and moves they reference, and load all
/// of it in foreign-key order.
///
/// Types must already be loaded. Association rows pointing at a type,
/// ability or move that is not stored are dropped with a warning.
pub async fn fetch_and_load_pokemon_data(
    client: &mut PokeApiClient,
    db: &mut PokedexDatabase,
    selection: PokemonSelection,
) -> Result<PipelineSummary> {
    let type_ids = db.type_ids()?;
    if type_ids.is_empty() {
        warn!("No types loaded yet; load type data first or type associations will be dropped");
    }

    let raw_pokemon = match selection {
        PokemonSelection::Range { start_id, end_id } => {
            fetch::fetch_pokemon_batch(client, start_id, end_id).await
        }
        PokemonSelection::All => fetch::fetch_all_pokemon(client).await?,
    };
    let mut batch = transform_pokemon_batch(&raw_pokemon)?;

    let mut rows_loaded = LoadSummary::default();

    let ability_ids = batch.referenced_ability_ids();
    let raw_abilities = fetch::fetch_abilities(client, &ability_ids).await;
    rows_loaded.absorb(db.load_all_ability_data(&transform_ability_batch(&raw_abilities))?);

    let move_ids = batch.referenced_move_ids();
    let raw_moves = fetch::fetch_moves(client, &move_ids).await;
    let mut moves = transform_move_batch(&raw_moves)?;
    let before = moves.len();
    moves.retain(|m| m.type_id.map_or(true, |id| type_ids.contains(&id)));
    let mut rows_dropped = before - moves.len();
    rows_loaded.absorb(db.load_all_move_data(&moves)?);

    rows_dropped +=
        batch.retain_known_references(&type_ids, &db.ability_ids()?, &db.move_ids()?);
    if rows_dropped > 0 {
        warn!(
            "Dropped {} rows referencing types, abilities or moves that are not stored",
            rows_dropped
        );
    }

    rows_loaded.absorb(db.load_all_pokemon_data(&batch)?);

    let summary = PipelineSummary {
        pokemon_fetched: raw_pokemon.len(),
        abilities_fetched: raw_abilities.len(),
        moves_fetched: raw_moves.len(),
        rows_dropped,
        rows_loaded,
        ..PipelineSummary::default()
    };
    info!(
        "Pipeline loaded {} Pokémon, {} abilities and {} moves",
        summary.rows_loaded.pokemon, summary.rows_loaded.abilities, summary.rows_loaded.moves
    );
    Ok(summary)
}

