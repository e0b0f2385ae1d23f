//! Neighborhood Match - lifestyle-driven neighborhood ranking
//!
//! This library scores a catalog of neighborhoods against a person's lifestyle,
//! commute and housing preferences. Every location receives a 0-100 match
//! score, a per-factor breakdown and rule-based reasons and concerns, and the
//! full catalog is returned ranked by score.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{find_matches, Matcher};
pub use error::{CatalogError, LocationError, ProfileError};
pub use models::{Breakdown, Factor, LocationRecord, MatchResult, PreferenceProfile, ScoringWeights};
