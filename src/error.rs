//! Error types for the Pokédex ETL pipeline

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PokedexError>;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Resource URL has no numeric ID: {url}")]
    InvalidUrl { url: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}
