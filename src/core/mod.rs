//! Core utilities for the Pokédex ETL pipeline
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system caching of raw API responses
//! - `http`: HTTP client construction

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{
    app_cache_dir, default_api_cache_dir, endpoint_cache_key, endpoint_cache_path, read_cached,
    try_read_to_string, write_cached, write_string,
};
pub use http::{build_http_client, default_headers};
