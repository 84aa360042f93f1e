//! Error types for errand pricing

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Input validation errors raised at the boundary, before pricing
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Distance must not be negative: {0} km")]
    NegativeDistance(f64),

    #[error("Distance must be a finite number")]
    NonFiniteDistance,

    #[error("Distance too large: {distance} km (max {max} km)")]
    DistanceTooLarge { distance: f64, max: f64 },

    #[error("Latitude out of range (-90..=90): {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude out of range (-180..=180): {0}")]
    LongitudeOutOfRange(f64),

    #[error("Invalid pricing table: {0}")]
    InvalidPricingTable(String),

    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}

/// Quote history store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Quote not found: {0}")]
    NotFound(String),

    #[error("Store data corrupted: {0}")]
    Corrupted(String),

    #[error("Quote id prefix `{0}` matches {1} quotes")]
    Ambiguous(String, usize),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
