use validator::Validate;
use crate::error::{LocationError, ProfileError};
use crate::models::{LocationRecord, PreferenceProfile};

/// Reject a profile that cannot be scored.
///
/// Checks the 1-5 ratings and 0-10 priorities, the price range ordering and
/// that at least one transport mode is selected.
pub fn validate_profile(preferences: &PreferenceProfile) -> Result<(), ProfileError> {
    preferences.validate()?;

    let range = preferences.housing.price_range;
    if range.min > range.max {
        return Err(ProfileError::InvertedPriceRange { min: range.min, max: range.max });
    }

    if preferences.commute.preferred_modes.is_empty() {
        return Err(ProfileError::NoTransportModes);
    }

    Ok(())
}

/// Check a catalog record before it is admitted for scoring.
///
/// Every metric must lie in `0..=100` (NaN fails the range check) and the rent
/// must be a finite, non-negative amount.
pub fn validate_location(location: &LocationRecord) -> Result<(), LocationError> {
    if location.id.trim().is_empty() {
        return Err(LocationError::EmptyId);
    }

    let out_of_range = location
        .scores
        .named()
        .into_iter()
        .find(|(_, value)| !(0.0..=100.0).contains(value));

    if let Some((metric, value)) = out_of_range {
        return Err(LocationError::MetricOutOfRange {
            id: location.id.clone(),
            metric,
            value,
        });
    }

    let rent = location.housing.rent_price;
    if !rent.is_finite() || rent < 0.0 {
        return Err(LocationError::InvalidRent {
            id: location.id.clone(),
            value: rent,
        });
    }

    Ok(())
}
