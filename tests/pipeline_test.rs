//! End-to-end pipeline tests against a mock PokéAPI

use pokedex_etl::{
    cli::FetchTargets,
    commands::fetch::{run_fetch, FetchParams},
    pipeline::{fetch_and_load_pokemon_data, fetch_and_load_type_data, PokemonSelection},
    ClientConfig, PokeApiClient, PokedexDatabase, PokemonId,
};
use serde_json::{json, Value};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn resource(kind: &str, name: &str, id: u32) -> Value {
    json!({"name": name, "url": format!("https://pokeapi.co/api/v2/{}/{}/", kind, id)})
}

fn type_detail(id: u32, name: &str, no: &[(&str, u32)], half: &[(&str, u32)], double: &[(&str, u32)]) -> Value {
    let refs = |list: &[(&str, u32)]| -> Vec<Value> {
        list.iter().map(|(n, i)| resource("type", n, *i)).collect()
    };
    json!({
        "id": id,
        "name": name,
        "damage_relations": {
            "no_damage_to": refs(no),
            "half_damage_to": refs(half),
            "double_damage_to": refs(double),
            "no_damage_from": [],
            "half_damage_from": [],
            "double_damage_from": []
        }
    })
}

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Four types, pikachu (25), an ability and a move. Everything else 404s.
async fn mock_pokeapi() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/type"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 4,
            "next": null,
            "results": [
                resource("type", "flying", 3),
                resource("type", "ground", 5),
                resource("type", "water", 11),
                resource("type", "electric", 13)
            ]
        })))
        .mount(&server)
        .await;

    mount_json(&server, "/type/flying", type_detail(3, "flying", &[], &[("electric", 13)], &[])).await;
    mount_json(
        &server,
        "/type/ground",
        type_detail(5, "ground", &[("flying", 3)], &[], &[("electric", 13)]),
    )
    .await;
    mount_json(&server, "/type/water", type_detail(11, "water", &[], &[("water", 11)], &[("ground", 5)])).await;
    mount_json(
        &server,
        "/type/electric",
        type_detail(
            13,
            "electric",
            &[("ground", 5)],
            &[("electric", 13)],
            &[("water", 11), ("flying", 3)],
        ),
    )
    .await;

    mount_json(
        &server,
        "/pokemon/25",
        json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "is_default": true,
            "order": 35,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": resource("stat", "hp", 1)},
                {"base_stat": 90, "effort": 2, "stat": resource("stat", "speed", 6)}
            ],
            "types": [{"slot": 1, "type": resource("type", "electric", 13)}],
            "abilities": [
                {"ability": resource("ability", "static", 9), "is_hidden": false, "slot": 1},
                {"ability": resource("ability", "lightning-rod", 31), "is_hidden": true, "slot": 3}
            ],
            "moves": [
                {
                    "move": resource("move", "thunderbolt", 85),
                    "version_group_details": [
                        {
                            "level_learned_at": 0,
                            "move_learn_method": {"name": "machine", "url": ""},
                            "version_group": {"name": "sword-shield", "url": ""}
                        }
                    ]
                },
                {
                    "move": resource("move", "mega-punch", 5),
                    "version_group_details": [
                        {
                            "level_learned_at": 0,
                            "move_learn_method": {"name": "machine", "url": ""},
                            "version_group": {"name": "red-blue", "url": ""}
                        }
                    ]
                }
            ]
        }),
    )
    .await;

    mount_json(
        &server,
        "/ability/9",
        json!({
            "id": 9,
            "name": "static",
            "is_main_series": true,
            "effect_entries": [{"effect": "Paralyzes on contact.", "language": {"name": "en", "url": ""}}],
            "flavor_text_entries": [],
            "names": [{"name": "Static", "language": {"name": "en", "url": ""}}]
        }),
    )
    .await;

    mount_json(
        &server,
        "/move/85",
        json!({
            "id": 85,
            "name": "thunderbolt",
            "power": 90,
            "pp": 15,
            "accuracy": 100,
            "type": resource("type", "electric", 13),
            "damage_class": {"name": "special", "url": ""}
        }),
    )
    .await;

    server
}

fn client_for(server: &MockServer, cache_dir: &TempDir) -> PokeApiClient {
    PokeApiClient::new(ClientConfig {
        base_url: server.uri(),
        rate_limit: 6000,
        cache_dir: cache_dir.path().to_path_buf(),
        max_attempts: 2,
        initial_backoff: Duration::from_millis(1),
        use_cache: true,
    })
    .unwrap()
}

#[tokio::test]
async fn test_type_then_pokemon_pipeline() {
    let server = mock_pokeapi().await;
    let cache_dir = TempDir::new().unwrap();
    let mut client = client_for(&server, &cache_dir);
    let mut db = PokedexDatabase::new_in_memory().unwrap();

    let types = fetch_and_load_type_data(&mut client, &mut db).await.unwrap();
    assert_eq!(types.types_fetched, 4);
    assert_eq!(types.rows_loaded.types, 4);
    assert_eq!(types.rows_loaded.effectiveness, 9);

    // 26 does not exist on the mock and is skipped
    let pokemon = fetch_and_load_pokemon_data(
        &mut client,
        &mut db,
        PokemonSelection::Range {
            start_id: 25,
            end_id: 26,
        },
    )
    .await
    .unwrap();

    assert_eq!(pokemon.pokemon_fetched, 1);
    assert_eq!(pokemon.abilities_fetched, 1);
    assert_eq!(pokemon.moves_fetched, 1);
    // lightning-rod could not be fetched
    assert_eq!(pokemon.rows_dropped, 1);

    let counts = db.row_counts().unwrap();
    assert_eq!(counts.pokemon, 1);
    assert_eq!(counts.stats, 2);
    assert_eq!(counts.pokemon_types, 1);
    assert_eq!(counts.abilities, 1);
    assert_eq!(counts.pokemon_abilities, 1);
    assert_eq!(counts.moves, 1);
    assert_eq!(counts.pokemon_moves, 1);

    let ability = db.get_ability(9).unwrap().unwrap();
    assert_eq!(ability.name, "Static");
    assert_eq!(ability.effect, "Paralyzes on contact.");

    let counters = db.recommend_counter_types(PokemonId::new(25), 5).unwrap();
    assert_eq!(counters.len(), 1);
    assert_eq!(counters[0].type_name, "ground");
    assert_eq!(counters[0].label, "2× (super effective)");
}

#[tokio::test]
async fn test_rerun_is_served_from_cache_and_idempotent() {
    let server = mock_pokeapi().await;
    let cache_dir = TempDir::new().unwrap();
    let mut db = PokedexDatabase::new_in_memory().unwrap();
    let selection = PokemonSelection::Range {
        start_id: 25,
        end_id: 25,
    };

    let mut first_client = client_for(&server, &cache_dir);
    fetch_and_load_type_data(&mut first_client, &mut db).await.unwrap();
    fetch_and_load_pokemon_data(&mut first_client, &mut db, selection)
        .await
        .unwrap();
    let first_requests = first_client.network_requests();
    let after_first = db.row_counts().unwrap();

    let mut second_client = client_for(&server, &cache_dir);
    fetch_and_load_type_data(&mut second_client, &mut db).await.unwrap();
    fetch_and_load_pokemon_data(&mut second_client, &mut db, selection)
        .await
        .unwrap();

    // only the failing ability (never cached) goes back to the network
    assert!(first_requests > second_client.network_requests());
    assert_eq!(second_client.network_requests(), 2);
    assert_eq!(db.row_counts().unwrap(), after_first);
}

#[tokio::test]
async fn test_pokemon_without_types_loaded_keeps_core_rows() {
    let server = mock_pokeapi().await;
    let cache_dir = TempDir::new().unwrap();
    let mut client = client_for(&server, &cache_dir);
    let mut db = PokedexDatabase::new_in_memory().unwrap();

    let summary = fetch_and_load_pokemon_data(
        &mut client,
        &mut db,
        PokemonSelection::Range {
            start_id: 25,
            end_id: 25,
        },
    )
    .await
    .unwrap();

    let counts = db.row_counts().unwrap();
    assert_eq!(counts.pokemon, 1);
    assert_eq!(counts.stats, 2);
    assert_eq!(counts.pokemon_types, 0);
    // thunderbolt needs the electric type, so it and its association go
    assert_eq!(counts.moves, 0);
    assert_eq!(counts.pokemon_moves, 0);
    assert_eq!(summary.rows_dropped, 4);
}

#[tokio::test]
async fn test_run_fetch_all_loads_types_first() {
    let server = mock_pokeapi().await;
    let cache_dir = TempDir::new().unwrap();
    let mut client = client_for(&server, &cache_dir);
    let mut db = PokedexDatabase::new_in_memory().unwrap();

    let params = FetchParams {
        targets: FetchTargets {
            all: true,
            ..FetchTargets::default()
        },
        start_id: 25,
        end_id: 25,
        ..FetchParams::default()
    };

    let summary = run_fetch(&params, &mut client, &mut db).await.unwrap();

    assert_eq!(summary.types_fetched, 4);
    assert_eq!(summary.pokemon_fetched, 1);
    assert_eq!(summary.rows_loaded.pokemon_types, 1);
    assert_eq!(db.pokemon_type_names(PokemonId::new(25)).unwrap(), vec!["electric"]);
}
