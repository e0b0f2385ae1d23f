use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

/// A preference profile that cannot be scored
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Invalid profile fields: {0}")]
    InvalidFields(#[from] ValidationErrors),

    #[error("Price range minimum {min} exceeds maximum {max}")]
    InvertedPriceRange { min: u32, max: u32 },

    #[error("At least one preferred transport mode is required")]
    NoTransportModes,
}

/// A catalog record that fails validation
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location id must not be empty")]
    EmptyId,

    #[error("Location {id}: metric '{metric}' is {value}, expected 0-100")]
    MetricOutOfRange {
        id: String,
        metric: &'static str,
        value: f64,
    },

    #[error("Location {id}: rent {value} is not a non-negative amount")]
    InvalidRent { id: String, value: f64 },
}

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not a JSON array of locations: {0}")]
    Json(#[from] serde_json::Error),
}
