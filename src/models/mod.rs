// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod weights;

pub use domain::{
    Breakdown, CommuteOptions, CommutePreferences, Coordinates, DemographicPreferences,
    DesiredHousing, Factor, FactorScore, FamilyStatus, HousingMarket, HousingPreferences,
    HousingType, LifestyleRatings, LocationRecord, LocationScores, MatchResult,
    NeighborhoodDemographics, PreferenceProfile, PriceRange, Priorities, TransportMode, UnitSize,
};
pub use requests::FindMatchesRequest;
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse};
pub use weights::{
    BlendWeights, CategoryWeights, DefaultPriorities, ScoringWeights, WEIGHT_SUM_TOLERANCE,
};
