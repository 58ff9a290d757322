//! HTTP utilities for PokéAPI communication

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("pokedex-etl/", env!("CARGO_PKG_VERSION"));

/// Headers shared by every request: we only ever want JSON back.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the underlying HTTP client with our user agent and default headers.
pub fn build_http_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_headers())
        .build()?;
    Ok(client)
}
