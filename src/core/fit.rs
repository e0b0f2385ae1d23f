use crate::models::{DesiredHousing, LocationRecord, PreferenceProfile, PriceRange, TransportMode};

/// Quality assumed for car commuting, which is treated as viable everywhere
pub const CAR_ASSUMED_SCORE: f64 = 80.0;

/// Commute score when none of the user's modes is available at a location
pub const NEUTRAL_COMMUTE_SCORE: f64 = 50.0;

/// Price fit for rent below the user's minimum
pub const UNDER_BUDGET_SCORE: f64 = 80.0;

/// Type fit when the desired unit type is not among the location's stock
pub const TYPE_MISMATCH_SCORE: f64 = 60.0;

/// Score the user's transport modes against a location's commute options (0-100)
///
/// Each selected mode the location supports adds its quality metric; the
/// result is the mean over those modes. Car always counts.
pub fn evaluate_commute(preferences: &PreferenceProfile, location: &LocationRecord) -> f64 {
    let modes = &preferences.commute.preferred_modes;
    let options = &location.commute_options;
    let scores = &location.scores;

    let candidates = [
        (TransportMode::Public, options.subway, scores.transit),
        (TransportMode::Bike, options.bike, scores.bikeability),
        (TransportMode::Walk, options.walkable, scores.walkability),
        (TransportMode::Car, true, CAR_ASSUMED_SCORE),
    ];

    let (total, valid_modes) = candidates
        .iter()
        .filter(|(mode, available, _)| *available && modes.contains(mode))
        .fold((0.0, 0u32), |(total, count), (_, _, quality)| (total + quality, count + 1));

    if valid_modes > 0 {
        total / f64::from(valid_modes)
    } else {
        NEUTRAL_COMMUTE_SCORE
    }
}

/// Price compatibility (0-100)
///
/// In range scores 100, under the minimum scores 80, and over the maximum
/// loses one point per percent over budget.
#[inline]
pub fn price_fit(rent: f64, range: &PriceRange) -> f64 {
    if range.contains(rent) {
        100.0
    } else if rent < f64::from(range.min) {
        UNDER_BUDGET_SCORE
    } else if range.max == 0 {
        0.0
    } else {
        let max = f64::from(range.max);
        let over_budget = (rent - max) / max;
        (100.0 - over_budget * 100.0).max(0.0)
    }
}

/// Housing type compatibility (100 or partial credit)
#[inline]
pub fn type_fit(desired: &DesiredHousing, location: &LocationRecord) -> f64 {
    match desired {
        DesiredHousing::Any => 100.0,
        DesiredHousing::Specific(kind) if location.housing.available_types.contains(kind) => 100.0,
        DesiredHousing::Specific(_) => TYPE_MISMATCH_SCORE,
    }
}

/// Score housing as the mean of price fit and type fit (0-100)
pub fn evaluate_housing(preferences: &PreferenceProfile, location: &LocationRecord) -> f64 {
    let housing = &preferences.housing;
    let price = price_fit(location.housing.rent_price, &housing.price_range);
    let kind = type_fit(&housing.desired_type, location);

    (price + kind) / 2.0
}
