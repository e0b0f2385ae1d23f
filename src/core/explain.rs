use crate::models::{LocationRecord, PreferenceProfile};

/// Maximum number of reasons attached to a match
pub const MAX_REASONS: usize = 4;

/// Maximum number of concerns attached to a match
pub const MAX_CONCERNS: usize = 3;

type Rule = fn(&PreferenceProfile, &LocationRecord) -> bool;

/// Reason rules in priority order
const REASON_RULES: [(Rule, &str); 6] = [
    (
        |_, l| l.scores.walkability >= 80.0,
        "Excellent walkability for daily errands",
    ),
    (
        |_, l| l.scores.crime >= 80.0,
        "High safety ratings and low crime",
    ),
    (
        |p, l| p.lifestyle.nightlife >= 4 && l.scores.nightlife >= 85.0,
        "Vibrant nightlife and entertainment scene",
    ),
    (
        |p, l| p.lifestyle.culture >= 4 && l.scores.culture >= 85.0,
        "Rich cultural amenities and arts scene",
    ),
    (
        |p, l| p.lifestyle.dining >= 4 && l.scores.dining >= 85.0,
        "Outstanding dining and restaurant options",
    ),
    (
        |p, l| p.lifestyle.outdoors >= 4 && l.scores.outdoors >= 80.0,
        "Great access to parks and outdoor activities",
    ),
];

/// Concern rules checked after the budget concern
const CONCERN_RULES: [(Rule, &str); 4] = [
    (
        |p, l| p.lifestyle.quietness >= 4 && l.scores.quietness < 60.0,
        "May be noisier than preferred",
    ),
    (
        |p, l| p.lifestyle.nightlife >= 4 && l.scores.nightlife < 60.0,
        "Limited nightlife options",
    ),
    (
        |p, l| p.lifestyle.safety >= 4 && l.scores.crime < 70.0,
        "Safety ratings below your preferences",
    ),
    (
        |p, l| p.lifestyle.outdoors >= 4 && l.scores.outdoors < 60.0,
        "Limited outdoor recreation options",
    ),
];

/// Build up to four reasons, in rule order
pub fn generate_reasons(preferences: &PreferenceProfile, location: &LocationRecord) -> Vec<String> {
    REASON_RULES
        .iter()
        .filter(|(applies, _)| applies(preferences, location))
        .map(|(_, reason)| (*reason).to_string())
        .take(MAX_REASONS)
        .collect()
}

/// Build up to three concerns, budget first
pub fn generate_concerns(preferences: &PreferenceProfile, location: &LocationRecord) -> Vec<String> {
    let rent = location.housing.rent_price;
    let budget = (rent > f64::from(preferences.housing.price_range.max))
        .then(|| format!("Rent may exceed budget (avg ${})", rent));

    budget
        .into_iter()
        .chain(
            CONCERN_RULES
                .iter()
                .filter(|(applies, _)| applies(preferences, location))
                .map(|(_, concern)| (*concern).to_string()),
        )
        .take(MAX_CONCERNS)
        .collect()
}
