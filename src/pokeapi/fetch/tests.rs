//! Unit tests for the catalog fetchers

use super::*;
use crate::pokeapi::client::ClientConfig;
use serde_json::{json, Value};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, path_regex, query_param, query_param_is_missing},
    Mock, MockServer, ResponseTemplate,
};

fn test_client(server: &MockServer, cache_dir: &TempDir) -> PokeApiClient {
    PokeApiClient::new(ClientConfig {
        base_url: server.uri(),
        rate_limit: 60_000,
        cache_dir: cache_dir.path().to_path_buf(),
        max_attempts: 1,
        initial_backoff: Duration::from_millis(1),
        use_cache: true,
    })
    .unwrap()
}

fn pokemon_page(ids: std::ops::RangeInclusive<u32>) -> Value {
    let results: Vec<Value> = ids
        .map(|id| {
            json!({
                "name": format!("mon-{}", id),
                "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", id)
            })
        })
        .collect();
    json!({"count": 150, "results": results})
}

fn pokemon_detail(id: u32) -> Value {
    json!({
        "id": id,
        "name": format!("mon-{}", id),
        "height": 10,
        "weight": 100,
        "is_default": true
    })
}

#[tokio::test]
async fn test_fetch_all_pokemon_pages_in_batches_of_100() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 150, "results": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_page(1..=100)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "50"))
        .and(query_param("offset", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_page(101..=150)))
        .expect(1)
        .mount(&server)
        .await;

    // mon-77 is missing from the API
    Mock::given(method("GET"))
        .and(path("/pokemon/mon-77"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    for id in (1..=150).filter(|id| *id != 77) {
        Mock::given(method("GET"))
            .and(path(format!("/pokemon/mon-{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_detail(id)))
            .mount(&server)
            .await;
    }

    let mut client = test_client(&server, &temp_dir);
    let pokemon = fetch_all_pokemon(&mut client).await.unwrap();

    assert_eq!(pokemon.len(), 149);
    assert!(pokemon.iter().all(|p| p.id != 77));
    assert_eq!(pokemon.first().map(|p| p.id), Some(1));
    assert_eq!(pokemon.last().map(|p| p.id), Some(150));
    // catalog + two pages + 150 details
    assert_eq!(client.network_requests(), 153);
}

#[tokio::test]
async fn test_fetch_all_pokemon_surfaces_catalog_failure() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut client = test_client(&server, &temp_dir);
    let result = fetch_all_pokemon(&mut client).await;

    assert!(matches!(result, Err(crate::PokedexError::Http(_))));
}

#[tokio::test]
async fn test_fetch_all_abilities_skips_missing_ids() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/ability"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 5, "results": []})))
        .expect(1)
        .mount(&server)
        .await;
    for (id, name) in [(1, "stench"), (2, "drizzle"), (4, "battle-armor")] {
        Mock::given(method("GET"))
            .and(path(format!("/ability/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": id, "name": name})))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path_regex(r"^/ability/(3|5)$"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = test_client(&server, &temp_dir);
    let abilities = fetch_all_abilities(&mut client).await.unwrap();

    let ids: Vec<u32> = abilities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
    assert_eq!(client.network_requests(), 6);
}
