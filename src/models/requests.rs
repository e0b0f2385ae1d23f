use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::PreferenceProfile;

/// Request to find matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(nested)]
    pub preferences: PreferenceProfile,
    /// Number of results to return; the full ranking is always computed
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
