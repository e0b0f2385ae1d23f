use serde::{Deserialize, Serialize};
use crate::models::domain::{Factor, Priorities};

/// Allowed drift of a weight group's sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Fixed per-factor category weights (fractions summing to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub walkability: f64,
    pub safety: f64,
    pub nightlife: f64,
    pub culture: f64,
    pub dining: f64,
    pub outdoors: f64,
    pub quietness: f64,
    pub affordability: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            walkability: 0.15,
            safety: 0.20,
            nightlife: 0.12,
            culture: 0.10,
            dining: 0.10,
            outdoors: 0.10,
            quietness: 0.08,
            affordability: 0.15,
        }
    }
}

impl CategoryWeights {
    pub fn sum(&self) -> f64 {
        self.walkability
            + self.safety
            + self.nightlife
            + self.culture
            + self.dining
            + self.outdoors
            + self.quietness
            + self.affordability
    }
}

/// Importance (1-10) applied when a profile omits a factor's priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPriorities {
    pub walkability: u8,
    pub safety: u8,
    pub nightlife: u8,
    pub culture: u8,
    pub dining: u8,
    pub outdoors: u8,
    pub quietness: u8,
    pub affordability: u8,
}

impl Default for DefaultPriorities {
    fn default() -> Self {
        Self {
            walkability: 5,
            safety: 8,
            nightlife: 5,
            culture: 5,
            dining: 5,
            outdoors: 5,
            quietness: 4,
            affordability: 6,
        }
    }
}

/// Blend of the three sub-scores into the overall match score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendWeights {
    pub lifestyle: f64,
    pub commute: f64,
    pub housing: f64,
}

impl BlendWeights {
    pub fn sum(&self) -> f64 {
        self.lifestyle + self.commute + self.housing
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            lifestyle: 0.70,
            commute: 0.20,
            housing: 0.10,
        }
    }
}

/// Complete weight table used by the evaluators.
///
/// Scoring formula:
/// overall = (
///     lifestyle * 0.70 +    # weighted average of the eight factor matches
///     commute * 0.20 +      # mean quality of usable transport modes
///     housing * 0.10        # mean of price fit and type fit
/// )
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub category: CategoryWeights,
    pub default_priorities: DefaultPriorities,
    pub blend: BlendWeights,
}

impl ScoringWeights {
    /// Fixed weight of a factor: the category weight for lifestyle factors,
    /// the blend weight for commute and housing
    pub fn category_weight(&self, factor: Factor) -> f64 {
        let c = &self.category;
        match factor {
            Factor::Walkability => c.walkability,
            Factor::Safety => c.safety,
            Factor::Nightlife => c.nightlife,
            Factor::Culture => c.culture,
            Factor::Dining => c.dining,
            Factor::Outdoors => c.outdoors,
            Factor::Quietness => c.quietness,
            Factor::Affordability => c.affordability,
            Factor::Commute => self.blend.commute,
            Factor::Housing => self.blend.housing,
        }
    }

    /// Weight groups whose sum is not 1.0, paired with the actual sum
    pub fn unnormalized_groups(&self) -> Vec<(&'static str, f64)> {
        [("category", self.category.sum()), ("blend", self.blend.sum())]
            .into_iter()
            .filter(|(_, sum)| (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE)
            .collect()
    }

    fn default_priority(&self, factor: Factor) -> u8 {
        let d = &self.default_priorities;
        match factor {
            Factor::Walkability => d.walkability,
            Factor::Safety => d.safety,
            Factor::Nightlife => d.nightlife,
            Factor::Culture => d.culture,
            Factor::Dining => d.dining,
            Factor::Outdoors => d.outdoors,
            Factor::Quietness => d.quietness,
            Factor::Affordability => d.affordability,
            Factor::Commute | Factor::Housing => 0,
        }
    }

    /// Resolve the user importance of a lifestyle factor, falling back to the
    /// default priority when the profile leaves it unset
    pub fn importance(&self, factor: Factor, priorities: &Priorities) -> f64 {
        let priority = priorities
            .get(factor)
            .unwrap_or_else(|| self.default_priority(factor));
        f64::from(priority)
    }
}
