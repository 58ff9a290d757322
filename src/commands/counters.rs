//! Counters command implementation

use serde::Serialize;

use crate::{
    analytics::CounterRecommendation, cli::types::PokemonId, storage::PokedexDatabase, Result,
};

use super::open_database;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterReport {
    pub pokemon_id: PokemonId,
    pub pokemon_name: Option<String>,
    pub types: Vec<String>,
    pub counters: Vec<CounterRecommendation>,
}

pub fn build_counter_report(
    db: &PokedexDatabase,
    pokemon_id: PokemonId,
    top_n: usize,
) -> Result<CounterReport> {
    Ok(CounterReport {
        pokemon_id,
        pokemon_name: db.pokemon_name(pokemon_id)?,
        types: db.pokemon_type_names(pokemon_id)?,
        counters: db.recommend_counter_types(pokemon_id, top_n)?,
    })
}

/// Handle the counters command
pub fn handle_counters(
    pokemon_id: PokemonId,
    top_n: usize,
    as_json: bool,
    database_url: Option<String>,
) -> Result<()> {
    let db = open_database(database_url)?;
    let report = build_counter_report(&db, pokemon_id, top_n)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let Some(name) = &report.pokemon_name else {
        println!("Pokémon {} is not in the database; fetch it first", pokemon_id);
        return Ok(());
    };

    println!("Counters for {} (#{}) [{}]:", name, pokemon_id, report.types.join("/"));
    if report.counters.is_empty() {
        println!("No attacking type deals more than neutral damage");
    }
    for c in &report.counters {
        println!("{:<12} {}", c.type_name, c.label);
    }

    Ok(())
}
