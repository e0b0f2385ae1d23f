// Shared fixtures for the integration tests
#![allow(dead_code)]

use neighborhood_match::models::{
    CommuteOptions, CommutePreferences, DesiredHousing, HousingMarket, HousingPreferences,
    HousingType, LifestyleRatings, LocationRecord, LocationScores, PreferenceProfile, PriceRange,
    Priorities, TransportMode, UnitSize,
};
use neighborhood_match::services::load_catalog_from_str;

pub const SAMPLE_CATALOG: &str = include_str!("../../data/neighborhoods.json");

/// The six bundled sample neighborhoods
pub fn sample_catalog() -> Vec<LocationRecord> {
    let load = load_catalog_from_str(SAMPLE_CATALOG).expect("sample catalog parses");
    assert!(load.skipped.is_empty(), "sample catalog has skipped records: {:?}", load.skipped);
    load.locations
}

pub fn ratings(
    nightlife: u8,
    culture: u8,
    outdoors: u8,
    dining: u8,
    quietness: u8,
    walkability: u8,
    safety: u8,
) -> LifestyleRatings {
    LifestyleRatings {
        nightlife,
        culture,
        outdoors,
        dining,
        shopping: 3,
        quietness,
        walkability,
        safety,
    }
}

pub fn create_test_preferences(
    lifestyle: LifestyleRatings,
    priorities: Priorities,
    modes: Vec<TransportMode>,
    min: u32,
    max: u32,
) -> PreferenceProfile {
    PreferenceProfile {
        id: Some("test-profile".to_string()),
        user_id: None,
        commute: CommutePreferences {
            max_time: 30,
            preferred_modes: modes,
            work_location: None,
        },
        housing: HousingPreferences {
            desired_type: DesiredHousing::Any,
            price_range: PriceRange { min, max },
            size: UnitSize::Any,
        },
        lifestyle,
        demographics: None,
        priorities,
    }
}

/// The default profile of the lifestyle questionnaire
pub fn questionnaire_defaults() -> PreferenceProfile {
    create_test_preferences(
        ratings(3, 3, 3, 3, 3, 3, 4),
        Priorities {
            safety: Some(8),
            walkability: Some(7),
            affordability: Some(6),
            nightlife: Some(5),
            culture: Some(5),
            dining: Some(5),
            outdoors: Some(5),
            quietness: Some(4),
        },
        vec![TransportMode::Car],
        1000,
        5000,
    )
}

pub fn create_test_location(id: &str, metric: u8, rent: u32) -> LocationRecord {
    let metric = f64::from(metric);
    LocationRecord {
        id: id.to_string(),
        name: format!("Hood {}", id),
        city: "Testville".to_string(),
        state: "TS".to_string(),
        coordinates: None,
        scores: LocationScores {
            walkability: metric,
            transit: metric,
            bikeability: metric,
            crime: metric,
            schools: metric,
            nightlife: metric,
            culture: metric,
            dining: metric,
            shopping: metric,
            outdoors: metric,
            quietness: metric,
            affordability: metric,
        },
        demographics: None,
        housing: HousingMarket {
            median_price: 600_000.0,
            rent_price: f64::from(rent),
            available_types: vec![HousingType::Apartment, HousingType::Condo],
        },
        amenities: vec!["Parks".to_string()],
        commute_options: CommuteOptions {
            subway: true,
            bus: true,
            bike: true,
            walkable: true,
        },
        description: None,
        images: vec![],
    }
}
