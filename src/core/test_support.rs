//! Fixtures shared by the core unit tests.

use crate::models::{
    CommuteOptions, CommutePreferences, DesiredHousing, HousingMarket, HousingPreferences,
    HousingType, LifestyleRatings, LocationRecord, LocationScores, PreferenceProfile, PriceRange,
    Priorities, TransportMode, UnitSize,
};

/// Profile with every lifestyle rating set to `rating`, commuting by car
pub fn create_test_preferences(rating: u8, max_budget: u32) -> PreferenceProfile {
    PreferenceProfile {
        id: None,
        user_id: None,
        commute: CommutePreferences {
            max_time: 30,
            preferred_modes: vec![TransportMode::Car],
            work_location: None,
        },
        housing: HousingPreferences {
            desired_type: DesiredHousing::Any,
            price_range: PriceRange { min: 1000, max: max_budget },
            size: UnitSize::Any,
        },
        lifestyle: LifestyleRatings {
            nightlife: rating,
            culture: rating,
            outdoors: rating,
            dining: rating,
            shopping: rating,
            quietness: rating,
            walkability: rating,
            safety: rating,
        },
        demographics: None,
        priorities: Priorities::default(),
    }
}

/// Location with every metric set to `metric`, no commute options, rent $2000
pub fn create_test_location(id: &str, metric: u8) -> LocationRecord {
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
            median_price: 500_000.0,
            rent_price: 2000.0,
            available_types: vec![HousingType::Apartment],
        },
        amenities: vec![],
        commute_options: CommuteOptions::default(),
        description: None,
        images: vec![],
    }
}
