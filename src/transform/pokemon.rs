use tracing::info;

use super::{extract_id_from_url, PokemonBatch};
use crate::pokeapi::types::RawPokemon;
use crate::storage::models::{PokemonAbilityRow, PokemonMoveRow, PokemonRow, PokemonTypeRow, StatRow};
use crate::Result;

/// Version groups whose learnsets are kept.
pub const MOVE_VERSION_GROUPS: [&str; 3] = ["sword-shield", "sun-moon", "x-y"];

pub fn transform_pokemon(raw: &RawPokemon) -> Result<PokemonBatch> {
    let pokemon = PokemonRow {
        id: raw.id,
        name: raw.name.clone(),
        height: raw.height,
        weight: raw.weight,
        base_experience: raw.base_experience,
        is_default: raw.is_default,
        order_num: raw.order,
    };

    let stats = raw
        .stats
        .iter()
        .map(|s| StatRow {
            pokemon_id: raw.id,
            stat_name: s.stat.name.clone(),
            base_value: s.base_stat,
        })
        .collect();

    let types = raw
        .types
        .iter()
        .map(|t| {
            Ok(PokemonTypeRow {
                pokemon_id: raw.id,
                type_id: extract_id_from_url(&t.kind.url)?,
                slot: t.slot,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let abilities = raw
        .abilities
        .iter()
        .map(|a| {
            Ok(PokemonAbilityRow {
                pokemon_id: raw.id,
                ability_id: extract_id_from_url(&a.ability.url)?,
                is_hidden: a.is_hidden,
                slot: a.slot,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut moves = Vec::new();
    for entry in &raw.moves {
        let move_id = extract_id_from_url(&entry.move_ref.url)?;

        // First matching version group wins
        let detail = entry
            .version_group_details
            .iter()
            .find(|d| MOVE_VERSION_GROUPS.contains(&d.version_group.name.as_str()));

        if let Some(detail) = detail {
            moves.push(PokemonMoveRow {
                pokemon_id: raw.id,
                move_id,
                level_learned_at: detail.level_learned_at,
                learn_method: detail.move_learn_method.name.clone(),
            });
        }
    }

    info!("Transformed data for Pokémon: {} (ID: {})", pokemon.name, pokemon.id);

    Ok(PokemonBatch {
        pokemon: vec![pokemon],
        stats,
        types,
        abilities,
        moves,
    })
}

pub fn transform_pokemon_batch(raw_batch: &[RawPokemon]) -> Result<PokemonBatch> {
    let mut batch = PokemonBatch::default();

    for raw in raw_batch {
        batch.extend(transform_pokemon(raw)?);
    }

    info!("Transformed batch of {} Pokémon", raw_batch.len());
    Ok(batch)
}
