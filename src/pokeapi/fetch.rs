//! Fetchers: sequential loops over the client that discover resources from a
//! list endpoint and then pull each detail endpoint.
//!
//! Batch fetchers are partial-failure tolerant. A detail fetch that fails is
//! logged and skipped; the rest of the batch carries on.

use tracing::{error, info};

use super::{
    client::PokeApiClient,
    types::{NamedResource, RawAbility, RawMove, RawPokemon, RawType, ResourceList},
};
use crate::Result;

#[cfg(test)]
mod tests;

/// Page size when walking the full Pokémon catalog.
pub const POKEMON_BATCH_SIZE: u32 = 100;

/// Page size for the type list; large enough to return every type at once.
pub const TYPE_LIST_LIMIT: u32 = 100;

// --- Pokémon ---

pub async fn fetch_pokemon_list(
    client: &mut PokeApiClient,
    limit: u32,
    offset: u32,
) -> Result<Vec<NamedResource>> {
    let endpoint = format!("pokemon?limit={}&offset={}", limit, offset);
    let list: ResourceList = client.get_json(&endpoint).await?;

    info!("Fetched list of {} Pokémon", list.results.len());
    Ok(list.results)
}

/// Fetch one Pokémon by name or numeric ID.
pub async fn fetch_pokemon_detail(
    client: &mut PokeApiClient,
    identifier: &str,
) -> Result<RawPokemon> {
    let pokemon: RawPokemon = client.get_json(&format!("pokemon/{}", identifier)).await?;

    info!(
        "Fetched detailed data for Pokémon: {} (ID: {})",
        pokemon.name, pokemon.id
    );
    Ok(pokemon)
}

/// Fetch every Pokémon in the inclusive ID range `start_id..=end_id`.
pub async fn fetch_pokemon_batch(
    client: &mut PokeApiClient,
    start_id: u32,
    end_id: u32,
) -> Vec<RawPokemon> {
    let mut pokemon_data = Vec::new();

    for pokemon_id in start_id..=end_id {
        match fetch_pokemon_detail(client, &pokemon_id.to_string()).await {
            Ok(pokemon) => pokemon_data.push(pokemon),
            Err(e) => error!("Error fetching Pokémon ID {}: {}", pokemon_id, e),
        }
    }

    info!(
        "Fetched data for {} Pokémon (IDs {}-{})",
        pokemon_data.len(),
        start_id,
        end_id
    );
    pokemon_data
}

/// Fetch the whole catalog, paging through the list in fixed-size batches.
pub async fn fetch_all_pokemon(client: &mut PokeApiClient) -> Result<Vec<RawPokemon>> {
    let catalog: ResourceList = client.get_json("pokemon").await?;
    let total = catalog.count;

    info!("Found {} total Pokémon in the API", total);

    let mut all_pokemon_data = Vec::new();
    let mut offset = 0;

    while offset < total {
        let batch_limit = POKEMON_BATCH_SIZE.min(total - offset);
        let pokemon_list = fetch_pokemon_list(client, batch_limit, offset).await?;

        info!(
            "Processing batch of {} Pokémon (offset: {})",
            pokemon_list.len(),
            offset
        );

        for pokemon in pokemon_list {
            match fetch_pokemon_detail(client, &pokemon.name).await {
                Ok(detail) => all_pokemon_data.push(detail),
                Err(e) => error!("Error fetching Pokémon {}: {}", pokemon.name, e),
            }
        }

        offset += POKEMON_BATCH_SIZE;
    }

    info!(
        "Fetched data for {} out of {} total Pokémon",
        all_pokemon_data.len(),
        total
    );
    Ok(all_pokemon_data)
}

// --- Types ---

pub async fn fetch_type_list(client: &mut PokeApiClient) -> Result<Vec<NamedResource>> {
    let endpoint = format!("type?limit={}", TYPE_LIST_LIMIT);
    let list: ResourceList = client.get_json(&endpoint).await?;

    info!("Fetched list of {} types", list.results.len());
    Ok(list.results)
}

/// Fetch one type, including its damage relations.
pub async fn fetch_type_detail(client: &mut PokeApiClient, identifier: &str) -> Result<RawType> {
    let raw: RawType = client.get_json(&format!("type/{}", identifier)).await?;

    info!("Fetched detailed data for type: {} (ID: {})", raw.name, raw.id);
    Ok(raw)
}

pub async fn fetch_all_types_with_effectiveness(
    client: &mut PokeApiClient,
) -> Result<Vec<RawType>> {
    let types_list = fetch_type_list(client).await?;
    let mut types_data = Vec::new();

    for type_info in types_list {
        match fetch_type_detail(client, &type_info.name).await {
            Ok(raw) => types_data.push(raw),
            Err(e) => error!("Error fetching type {}: {}", type_info.name, e),
        }
    }

    info!("Fetched effectiveness data for {} types", types_data.len());
    Ok(types_data)
}

// --- Abilities ---

pub async fn fetch_ability(client: &mut PokeApiClient, ability_id: u32) -> Result<RawAbility> {
    client.get_json(&format!("ability/{}", ability_id)).await
}

pub async fn fetch_abilities(client: &mut PokeApiClient, ability_ids: &[u32]) -> Vec<RawAbility> {
    let mut abilities = Vec::new();

    for &ability_id in ability_ids {
        match fetch_ability(client, ability_id).await {
            Ok(ability) => abilities.push(ability),
            Err(e) => error!("Error fetching ability {}: {}", ability_id, e),
        }
    }

    info!("Fetched {} of {} abilities", abilities.len(), ability_ids.len());
    abilities
}

/// Fetch abilities `1..=count`, where `count` comes from the ability list.
pub async fn fetch_all_abilities(client: &mut PokeApiClient) -> Result<Vec<RawAbility>> {
    let ability_list: ResourceList = client.get_json("ability").await?;
    let ids: Vec<u32> = (1..=ability_list.count).collect();

    Ok(fetch_abilities(client, &ids).await)
}

// --- Moves ---

pub async fn fetch_move(client: &mut PokeApiClient, move_id: u32) -> Result<RawMove> {
    client.get_json(&format!("move/{}", move_id)).await
}

pub async fn fetch_moves(client: &mut PokeApiClient, move_ids: &[u32]) -> Vec<RawMove> {
    let mut moves = Vec::new();

    for &move_id in move_ids {
        match fetch_move(client, move_id).await {
            Ok(raw) => moves.push(raw),
            Err(e) => error!("Error fetching move {}: {}", move_id, e),
        }
    }

    info!("Fetched {} of {} moves", moves.len(), move_ids.len());
    moves
}
