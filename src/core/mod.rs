// Core algorithm exports
pub mod explain;
pub mod fit;
pub mod matcher;
pub mod scoring;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use explain::{generate_concerns, generate_reasons};
pub use fit::{evaluate_commute, evaluate_housing, price_fit, type_fit};
pub use matcher::{find_matches, Matcher};
pub use scoring::{affordability_preference, evaluate_lifestyle, score_contribution, LifestyleScore};
pub use validate::{validate_location, validate_profile};
