//! File system cache for raw API responses
//!
//! One JSON file per endpoint, stored flat under a cache root. Entries are
//! never expired or evicted: once an endpoint has been written, every later
//! lookup for it is served from disk.

use dirs;
use serde_json::Value;
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{error::PokedexError, Result};

/// Application directory name under the user cache directory.
pub const APP_DIR: &str = "pokedex-etl";

/// Base cache directory for this application: `~/.cache/pokedex-etl`.
pub fn app_cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut home| {
                home.push(".cache");
                home
            })
        })
        .ok_or_else(|| PokedexError::Cache {
            message: "Could not determine cache directory".to_string(),
        })?;
    Ok(base.join(APP_DIR))
}

/// Default location for cached API responses.
pub fn default_api_cache_dir() -> PathBuf {
    app_cache_dir()
        .unwrap_or_else(|_| PathBuf::from(".cache").join(APP_DIR))
        .join("api")
}

/// Turn an endpoint like `pokemon?limit=100&offset=0` into a flat file stem.
///
/// Only `/` and `?` are replaced; everything else is kept verbatim.
pub fn endpoint_cache_key(endpoint: &str) -> String {
    endpoint.replace(['/', '?'], "_")
}

/// Path: {cache_dir}/{endpoint_cache_key}.json
pub fn endpoint_cache_path(cache_dir: &Path, endpoint: &str) -> PathBuf {
    cache_dir.join(format!("{}.json", endpoint_cache_key(endpoint)))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Read a cached response for `endpoint`.
///
/// A missing or unparseable file is a miss.
pub fn read_cached(cache_dir: &Path, endpoint: &str) -> Option<Value> {
    let s = try_read_to_string(&endpoint_cache_path(cache_dir, endpoint))?;
    serde_json::from_str(&s).ok()
}

/// Persist a response for `endpoint`, overwriting any previous entry.
pub fn write_cached(cache_dir: &Path, endpoint: &str, value: &Value) -> Result<()> {
    let path = endpoint_cache_path(cache_dir, endpoint);
    write_string(&path, &serde_json::to_string(value)?)?;
    Ok(())
}
