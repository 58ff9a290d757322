//! Rate-limited, file-cached PokéAPI client.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{debug, info, warn};

use super::throttle::Throttle;
use crate::core::{build_http_client, default_api_cache_dir, endpoint_cache_path, read_cached, write_cached};
use crate::{error::PokedexError, Result};


/// Base path for the PokéAPI v2.
pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Requests per minute when nothing else is configured.
pub const DEFAULT_RATE_LIMIT: u32 = 20;

/// Total tries per `get` (first call plus retries).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Constructor parameters for [`PokeApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Maximum requests per minute.
    pub rate_limit: u32,
    pub cache_dir: PathBuf,
    pub max_attempts: u32,
    /// Delay before the first retry; doubled for every retry after that.
    pub initial_backoff: Duration,
    /// Whether [`PokeApiClient::get_json`] reads and writes the cache.
    pub use_cache: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_BASE_URL.to_string(),
            rate_limit: DEFAULT_RATE_LIMIT,
            cache_dir: default_api_cache_dir(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Duration::from_secs(1),
            use_cache: true,
        }
    }
}

pub struct PokeApiClient {
    http: Client,
    config: ClientConfig,
    throttle: Throttle,
    network_requests: u64,
}

impl PokeApiClient {
    /// Create a client and make sure its cache directory exists.
    pub fn new(config: ClientConfig) -> Result<Self> {
        fs::create_dir_all(&config.cache_dir)?;
        let http = build_http_client()?;
        let throttle = Throttle::per_minute(config.rate_limit);

        info!(
            "Initialized PokéAPI client with rate limit of {} requests per minute",
            config.rate_limit
        );

        Ok(Self {
            http,
            config,
            throttle,
            network_requests: 0,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Number of requests that actually went out over the network.
    pub fn network_requests(&self) -> u64 {
        self.network_requests
    }

    pub fn cache_path(&self, endpoint: &str) -> PathBuf {
        endpoint_cache_path(&self.config.cache_dir, endpoint)
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// GET `endpoint` as JSON, from cache when possible.
    ///
    /// Transport failures (connect errors, non-2xx statuses, undecodable
    /// bodies) are retried with exponential backoff. Once the attempts are
    /// used up the last failure is returned unchanged.
    pub async fn get(&mut self, endpoint: &str, use_cache: bool) -> Result<Value> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut delay = self.config.initial_backoff;
        let mut attempt = 1;

        loop {
            match self.try_get(endpoint, use_cache).await {
                Ok(value) => return Ok(value),
                Err(PokedexError::Http(err)) if attempt < max_attempts => {
                    warn!(
                        "Request for {} failed on attempt {} of {}: {}; retrying in {:?}",
                        endpoint, attempt, max_attempts, err, delay
                    );
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// [`get`](Self::get) with the configured cache setting, deserialized into `T`.
    pub async fn get_json<T: DeserializeOwned>(&mut self, endpoint: &str) -> Result<T> {
        let value = self.get(endpoint, self.config.use_cache).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn try_get(&mut self, endpoint: &str, use_cache: bool) -> Result<Value> {
        if use_cache {
            if let Some(cached) = read_cached(&self.config.cache_dir, endpoint) {
                debug!("Cache hit for {}", endpoint);
                return Ok(cached);
            }
            debug!("Cache miss for {}", endpoint);
        }

        self.throttle.wait().await;

        let url = self.url_for(endpoint);
        info!("Requesting {}", url);
        self.network_requests += 1;

        let data = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        if use_cache {
            match write_cached(&self.config.cache_dir, endpoint, &data) {
                Ok(()) => debug!("Cached data for {}", endpoint),
                Err(err) => warn!("Failed to cache {}: {}", endpoint, err),
            }
        }

        Ok(data)
    }
}
