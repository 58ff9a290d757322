//! PokéAPI access: the rate-limited caching client, raw payload types, and
//! the fetchers built on top of them.

pub mod client;
pub mod fetch;
pub mod throttle;
pub mod types;

pub use client::{ClientConfig, PokeApiClient, POKEAPI_BASE_URL};
pub use throttle::Throttle;
