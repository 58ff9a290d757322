//! Storage tests through the public API

use pokedex_etl::{
    pokeapi::types::{RawPokemon, RawType},
    storage::*,
    transform::{transform_pokemon, transform_type_batch},
    PokemonId,
};
use serde_json::json;
use tempfile::TempDir;

fn electric_and_ground() -> Vec<RawType> {
    serde_json::from_value(json!([
        {
            "id": 13,
            "name": "electric",
            "damage_relations": {
                "no_damage_to": [{"name": "ground", "url": "https://pokeapi.co/api/v2/type/5/"}],
                "half_damage_to": [{"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}],
                "double_damage_to": []
            }
        },
        {
            "id": 5,
            "name": "ground",
            "damage_relations": {
                "no_damage_to": [],
                "half_damage_to": [],
                "double_damage_to": [{"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}]
            }
        }
    ]))
    .unwrap()
}

fn pikachu(name: &str, hp: u32) -> RawPokemon {
    serde_json::from_value(json!({
        "id": 25,
        "name": name,
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "is_default": true,
        "order": 35,
        "stats": [{"base_stat": hp, "stat": {"name": "hp", "url": ""}}],
        "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
        "abilities": [],
        "moves": []
    }))
    .unwrap()
}

#[test]
fn test_database_creation() {
    let db = PokedexDatabase::new_in_memory().unwrap();
    assert_eq!(db.row_counts().unwrap().total(), 0);
}

#[test]
fn test_loading_twice_keeps_one_row_with_latest_values() {
    let mut db = PokedexDatabase::new_in_memory().unwrap();
    db.load_all_type_data(&transform_type_batch(&electric_and_ground()).unwrap())
        .unwrap();

    db.load_all_pokemon_data(&transform_pokemon(&pikachu("pikachu", 35)).unwrap())
        .unwrap();
    db.load_all_pokemon_data(&transform_pokemon(&pikachu("pikachu-rock-star", 40)).unwrap())
        .unwrap();

    let counts = db.row_counts().unwrap();
    assert_eq!(counts.pokemon, 1);
    assert_eq!(counts.stats, 1);
    assert_eq!(counts.pokemon_types, 1);

    assert_eq!(db.get_pokemon(25).unwrap().unwrap().name, "pikachu-rock-star");
    assert_eq!(db.get_pokemon_stats(25).unwrap()[0].base_value, 40);
}

#[test]
fn test_file_database_persists_between_opens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pokedex.db");
    let url = format!("sqlite:{}", path.display());

    {
        let mut db = PokedexDatabase::open(&url).unwrap();
        db.load_all_type_data(&transform_type_batch(&electric_and_ground()).unwrap())
            .unwrap();
        db.load_all_pokemon_data(&transform_pokemon(&pikachu("pikachu", 35)).unwrap())
            .unwrap();
    }

    let db = PokedexDatabase::open(path.to_str().unwrap()).unwrap();
    assert_eq!(
        db.pokemon_name(PokemonId::new(25)).unwrap().as_deref(),
        Some("pikachu")
    );

    let matrix = db.effectiveness_matrix().unwrap();
    assert_eq!(matrix.get("electric", "ground"), Some(0.0));
    assert_eq!(matrix.get("ground", "electric"), Some(2.0));
    assert_eq!(matrix.get("ground", "ground"), Some(1.0));
}

#[test]
fn test_foreign_keys_are_enforced() {
    let mut db = PokedexDatabase::new_in_memory().unwrap();

    let result = db.load_pokemon_stats(&[StatRow {
        pokemon_id: 25,
        stat_name: "hp".to_string(),
        base_value: 35,
    }]);

    assert!(result.is_err());
    assert_eq!(db.row_counts().unwrap().stats, 0);
}
