use crate::models::{Breakdown, Factor, FactorScore, LocationRecord, PreferenceProfile, ScoringWeights};

/// Multiplier projecting a 1-5 preference onto the 0-100 metric scale
pub const PREFERENCE_SCALE: f64 = 20.0;

/// Points of match lost per point of distance between preference and metric.
/// A gap of roughly 67 points zeroes the match.
pub const MISMATCH_PENALTY: f64 = 1.5;

/// Rent ceilings mapped to an implied affordability preference, checked in order
const AFFORDABILITY_TIERS: [(u32, u8); 4] = [(1500, 5), (2500, 4), (4000, 3), (6000, 2)];

/// Lifestyle sub-score with its per-factor breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct LifestyleScore {
    pub score: f64,
    pub breakdown: Breakdown,
}

/// Calculate one factor's contribution to the lifestyle sum
///
/// Scoring formula:
/// match = max(0, 100 - |preference * 20 - location_score| * 1.5)
/// contribution = match * category_weight * user_importance / 100
#[inline]
pub fn score_contribution(
    user_preference: u8,
    location_score: f64,
    category_weight: f64,
    user_importance: f64,
) -> f64 {
    let projected = f64::from(user_preference) * PREFERENCE_SCALE;
    let delta = (projected - location_score).abs();
    let match_score = (100.0 - delta * MISMATCH_PENALTY).max(0.0);

    match_score * category_weight * user_importance / 100.0
}

/// Derive an implicit 1-5 affordability preference from the rent ceiling.
/// A tighter budget implies a stronger preference for cheap locations.
#[inline]
pub fn affordability_preference(max_budget: u32) -> u8 {
    AFFORDABILITY_TIERS
        .iter()
        .find(|(ceiling, _)| max_budget <= *ceiling)
        .map_or(1, |(_, preference)| *preference)
}

/// Aggregate the eight lifestyle factors into a 0-100 sub-score.
///
/// The sub-score is the importance-weighted average of the per-factor match
/// fractions, so it stays in range however the priorities are set. When every
/// resolved importance is zero the sub-score is 0.
pub fn evaluate_lifestyle(
    preferences: &PreferenceProfile,
    location: &LocationRecord,
    weights: &ScoringWeights,
) -> LifestyleScore {
    let ratings = &preferences.lifestyle;
    let scores = &location.scores;
    let affordability = affordability_preference(preferences.housing.price_range.max);

    // (factor, user rating, location metric); safety is matched against crime
    let factors = [
        (Factor::Walkability, ratings.walkability, scores.walkability),
        (Factor::Safety, ratings.safety, scores.crime),
        (Factor::Nightlife, ratings.nightlife, scores.nightlife),
        (Factor::Culture, ratings.culture, scores.culture),
        (Factor::Dining, ratings.dining, scores.dining),
        (Factor::Outdoors, ratings.outdoors, scores.outdoors),
        (Factor::Quietness, ratings.quietness, scores.quietness),
        (Factor::Affordability, affordability, scores.affordability),
    ];

    let mut total_score = 0.0;
    let mut total_weight = 0.0;
    let mut breakdown = Breakdown::new();

    for (factor, user_value, location_score) in factors {
        let category_weight = weights.category_weight(factor);
        let importance = weights.importance(factor, &preferences.priorities);
        let contribution = score_contribution(user_value, location_score, category_weight, importance);

        total_score += contribution;
        total_weight += category_weight * importance;

        breakdown.insert(
            factor,
            FactorScore {
                score: location_score,
                weight: importance,
                contribution,
            },
        );
    }

    let score = if total_weight > 0.0 {
        (total_score / total_weight) * 100.0
    } else {
        0.0
    };

    LifestyleScore { score, breakdown }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{create_test_location, create_test_preferences};
    use crate::models::Priorities;

    #[test]
    fn test_contribution_perfect_match() {
        // 4 * 20 = 80, delta 0, match 100
        let contribution = score_contribution(4, 80.0, 0.2, 10.0);
        assert!((contribution - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_contribution_penalty_is_steeper_than_linear() {
        // delta 20 -> match 70
        let contribution = score_contribution(5, 80.0, 1.0, 1.0);
        assert!((contribution - 0.70).abs() < 1e-9);
    }

    #[test]
    fn test_contribution_floors_at_zero() {
        // 1 * 20 = 20 vs 100, delta 80 -> 100 - 120 clamps to 0
        assert_eq!(score_contribution(1, 100.0, 0.15, 10.0), 0.0);
    }

    #[test]
    fn test_contribution_zero_importance() {
        assert_eq!(score_contribution(3, 60.0, 0.15, 0.0), 0.0);
    }

    #[test]
    fn test_contribution_fractional_metric() {
        // 3 * 20 = 60 vs 62.5, delta 2.5 -> match 96.25
        let contribution = score_contribution(3, 62.5, 1.0, 1.0);
        assert!((contribution - 0.9625).abs() < 1e-9);
    }

    #[test]
    fn test_affordability_tiers() {
        assert_eq!(affordability_preference(1000), 5);
        assert_eq!(affordability_preference(1500), 5);
        assert_eq!(affordability_preference(1501), 4);
        assert_eq!(affordability_preference(2500), 4);
        assert_eq!(affordability_preference(4000), 3);
        assert_eq!(affordability_preference(6000), 2);
        assert_eq!(affordability_preference(6001), 1);
    }

    #[test]
    fn test_lifestyle_perfect_match_scores_100() {
        // rating 3 projects to 60; budget 4000 implies affordability preference 3
        let preferences = create_test_preferences(3, 4000);
        let location = create_test_location("test", 60);

        let result = evaluate_lifestyle(&preferences, &location, &ScoringWeights::default());

        assert!((result.score - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_lifestyle_breakdown_records_effective_weights() {
        let mut preferences = create_test_preferences(3, 4000);
        preferences.priorities.safety = Some(10);
        preferences.priorities.quietness = Some(0);
        let mut location = create_test_location("test", 60);
        location.scores.crime = 91.0;

        let result = evaluate_lifestyle(&preferences, &location, &ScoringWeights::default());

        assert_eq!(result.breakdown.len(), 8);
        let safety = result.breakdown.get(Factor::Safety).unwrap();
        assert_eq!(safety.weight, 10.0);
        assert_eq!(safety.score, 91.0);
        assert_eq!(result.breakdown.get(Factor::Quietness).unwrap().weight, 0.0);
        assert_eq!(result.breakdown.get(Factor::Culture).unwrap().weight, 5.0);
    }

    #[test]
    fn test_lifestyle_zero_weights_yield_zero() {
        let mut preferences = create_test_preferences(3, 4000);
        preferences.priorities = Priorities::uniform(0);
        let location = create_test_location("test", 60);

        let result = evaluate_lifestyle(&preferences, &location, &ScoringWeights::default());

        assert_eq!(result.score, 0.0);
        assert!(result.breakdown.iter().all(|(_, entry)| entry.contribution == 0.0));
    }

    #[test]
    fn test_lifestyle_score_in_range() {
        for rating in 1..=5 {
            for metric in [0, 25, 50, 75, 100] {
                let preferences = create_test_preferences(rating, 2000);
                let location = create_test_location("test", metric);
                let result = evaluate_lifestyle(&preferences, &location, &ScoringWeights::default());
                assert!(result.score >= 0.0 && result.score <= 100.0);
            }
        }
    }
}
