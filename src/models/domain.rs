use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Transportation mode a user is willing to commute with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    #[serde(alias = "public-transit", alias = "transit")]
    Public,
    Bike,
    Walk,
}

/// Housing unit types offered by a location.
///
/// Catalogs may list types outside the common set (`"studio"`, `"co-op"`);
/// those are kept verbatim in `Other` and compared by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HousingType {
    Apartment,
    House,
    Condo,
    Loft,
    Duplex,
    Townhouse,
    #[serde(untagged)]
    Other(String),
}

/// Housing type the user is looking for, serialized as `"any"` or the plain type name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesiredHousing {
    #[default]
    Any,
    #[serde(untagged)]
    Specific(HousingType),
}

/// Desired unit size (display-only, not scored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSize {
    #[serde(rename = "studio")]
    Studio,
    #[serde(rename = "1br")]
    OneBedroom,
    #[serde(rename = "2br")]
    TwoBedroom,
    #[serde(rename = "3br+")]
    ThreePlusBedroom,
    #[default]
    #[serde(rename = "any")]
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyStatus {
    Single,
    Couple,
    Family,
    Roommates,
}

/// Commute requirements
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommutePreferences {
    #[validate(range(min = 1))]
    #[serde(rename = "maxTime")]
    pub max_time: u16,
    #[serde(rename = "preferredModes")]
    pub preferred_modes: Vec<TransportMode>,
    #[serde(rename = "workLocation", default)]
    pub work_location: Option<String>,
}

/// Inclusive monthly rent range in whole dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn contains(&self, rent: f64) -> bool {
        rent >= f64::from(self.min) && rent <= f64::from(self.max)
    }
}

/// Housing requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousingPreferences {
    #[serde(rename = "type", default)]
    pub desired_type: DesiredHousing,
    #[serde(rename = "priceRange")]
    pub price_range: PriceRange,
    #[serde(default)]
    pub size: UnitSize,
}

/// Lifestyle intensity ratings on a 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LifestyleRatings {
    #[validate(range(min = 1, max = 5))]
    pub nightlife: u8,
    #[validate(range(min = 1, max = 5))]
    pub culture: u8,
    #[validate(range(min = 1, max = 5))]
    pub outdoors: u8,
    #[validate(range(min = 1, max = 5))]
    pub dining: u8,
    #[validate(range(min = 1, max = 5))]
    pub shopping: u8,
    #[validate(range(min = 1, max = 5))]
    pub quietness: u8,
    #[validate(range(min = 1, max = 5))]
    pub walkability: u8,
    #[validate(range(min = 1, max = 5))]
    pub safety: u8,
}

/// Per-factor importance on a 0-10 scale.
///
/// An absent field falls back to the configured default priority; an explicit
/// zero is honoured as "does not matter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Priorities {
    #[validate(range(max = 10))]
    pub walkability: Option<u8>,
    #[validate(range(max = 10))]
    pub safety: Option<u8>,
    #[validate(range(max = 10))]
    pub nightlife: Option<u8>,
    #[validate(range(max = 10))]
    pub culture: Option<u8>,
    #[validate(range(max = 10))]
    pub dining: Option<u8>,
    #[validate(range(max = 10))]
    pub outdoors: Option<u8>,
    #[validate(range(max = 10))]
    pub quietness: Option<u8>,
    #[validate(range(max = 10))]
    pub affordability: Option<u8>,
}

impl Priorities {
    /// Priority the user stated for a lifestyle factor, if any
    pub fn get(&self, factor: Factor) -> Option<u8> {
        match factor {
            Factor::Walkability => self.walkability,
            Factor::Safety => self.safety,
            Factor::Nightlife => self.nightlife,
            Factor::Culture => self.culture,
            Factor::Dining => self.dining,
            Factor::Outdoors => self.outdoors,
            Factor::Quietness => self.quietness,
            Factor::Affordability => self.affordability,
            Factor::Commute | Factor::Housing => None,
        }
    }

    /// Every priority explicitly set to the same value
    pub fn uniform(value: u8) -> Self {
        Self {
            walkability: Some(value),
            safety: Some(value),
            nightlife: Some(value),
            culture: Some(value),
            dining: Some(value),
            outdoors: Some(value),
            quietness: Some(value),
            affordability: Some(value),
        }
    }
}

/// Demographic context supplied with a profile (passthrough)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicPreferences {
    #[serde(rename = "ageRange", default)]
    pub age_range: Option<String>,
    #[serde(rename = "familyStatus", default)]
    pub family_status: Option<FamilyStatus>,
    #[serde(rename = "petsAllowed", default)]
    pub pets_allowed: bool,
}

/// A user's lifestyle preference profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PreferenceProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[validate(nested)]
    pub commute: CommutePreferences,
    pub housing: HousingPreferences,
    #[validate(nested)]
    pub lifestyle: LifestyleRatings,
    #[serde(default)]
    pub demographics: Option<DemographicPreferences>,
    #[validate(nested)]
    #[serde(default)]
    pub priorities: Priorities,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Location metrics on a 0-100 scale (higher is better, so `crime` is safety
/// and `affordability` is cheapness). Fractional values are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationScores {
    pub walkability: f64,
    pub transit: f64,
    pub bikeability: f64,
    pub crime: f64,
    pub schools: f64,
    pub nightlife: f64,
    pub culture: f64,
    pub dining: f64,
    pub shopping: f64,
    pub outdoors: f64,
    pub quietness: f64,
    pub affordability: f64,
}

impl LocationScores {
    /// All metrics paired with their field names
    pub fn named(&self) -> [(&'static str, f64); 12] {
        [
            ("walkability", self.walkability),
            ("transit", self.transit),
            ("bikeability", self.bikeability),
            ("crime", self.crime),
            ("schools", self.schools),
            ("nightlife", self.nightlife),
            ("culture", self.culture),
            ("dining", self.dining),
            ("shopping", self.shopping),
            ("outdoors", self.outdoors),
            ("quietness", self.quietness),
            ("affordability", self.affordability),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodDemographics {
    #[serde(rename = "medianAge")]
    pub median_age: f64,
    #[serde(rename = "medianIncome")]
    pub median_income: f64,
    #[serde(rename = "populationDensity")]
    pub population_density: f64,
    #[serde(rename = "familyFriendly")]
    pub family_friendly: f64,
}

/// Housing market figures for a location, in dollars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingMarket {
    #[serde(rename = "medianPrice")]
    pub median_price: f64,
    #[serde(rename = "rentPrice")]
    pub rent_price: f64,
    #[serde(rename = "availableTypes")]
    pub available_types: Vec<HousingType>,
}

/// Declared commute mode availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommuteOptions {
    pub subway: bool,
    pub bus: bool,
    pub bike: bool,
    pub walkable: bool,
}

/// A catalog entry describing one neighborhood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub scores: LocationScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<NeighborhoodDemographics>,
    pub housing: HousingMarket,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(rename = "commuteOptions")]
    pub commute_options: CommuteOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Scored dimension of a match: the eight lifestyle factors plus the commute
/// and housing sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Walkability,
    Safety,
    Nightlife,
    Culture,
    Dining,
    Outdoors,
    Quietness,
    Affordability,
    Commute,
    Housing,
}

/// One breakdown entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    /// Raw location metric (lifestyle) or sub-score (commute, housing)
    pub score: f64,
    /// Effective weight applied
    pub weight: f64,
    /// Points added to the weighted sum
    pub contribution: f64,
}

/// Per-factor explanation of a match score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown(BTreeMap<Factor, FactorScore>);

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, factor: Factor, entry: FactorScore) {
        self.0.insert(factor, entry);
    }

    pub fn get(&self, factor: Factor) -> Option<&FactorScore> {
        self.0.get(&factor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, &FactorScore)> {
        self.0.iter().map(|(factor, entry)| (*factor, entry))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ranked match of one catalog location against a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    #[serde(rename = "neighborhood")]
    pub location: &'a LocationRecord,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    pub breakdown: Breakdown,
    pub reasons: Vec<String>,
    pub concerns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desired_housing_serde() {
        let any: DesiredHousing = serde_json::from_str("\"any\"").unwrap();
        assert_eq!(any, DesiredHousing::Any);

        let condo: DesiredHousing = serde_json::from_str("\"condo\"").unwrap();
        assert_eq!(condo, DesiredHousing::Specific(HousingType::Condo));
        assert_eq!(serde_json::to_string(&condo).unwrap(), "\"condo\"");
    }

    #[test]
    fn test_transport_mode_aliases() {
        let modes: Vec<TransportMode> =
            serde_json::from_str(r#"["public", "public-transit", "walk"]"#).unwrap();
        assert_eq!(
            modes,
            vec![TransportMode::Public, TransportMode::Public, TransportMode::Walk]
        );
    }

    #[test]
    fn test_priorities_absent_vs_zero() {
        let priorities: Priorities = serde_json::from_str(r#"{"safety": 0}"#).unwrap();
        assert_eq!(priorities.get(Factor::Safety), Some(0));
        assert_eq!(priorities.get(Factor::Walkability), None);
        assert_eq!(priorities.get(Factor::Commute), None);
    }

    #[test]
    fn test_breakdown_serializes_factor_names() {
        let mut breakdown = Breakdown::new();
        breakdown.insert(
            Factor::Commute,
            FactorScore { score: 50.0, weight: 0.2, contribution: 10.0 },
        );
        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["commute"]["contribution"], 10.0);
    }

    #[test]
    fn test_unknown_housing_type_is_kept() {
        let types: Vec<HousingType> =
            serde_json::from_str(r#"["loft", "studio", "Co-op"]"#).unwrap();
        assert_eq!(
            types,
            vec![
                HousingType::Loft,
                HousingType::Other("studio".to_string()),
                HousingType::Other("Co-op".to_string()),
            ]
        );
        assert_eq!(serde_json::to_string(&types[1]).unwrap(), "\"studio\"");

        let desired: DesiredHousing = serde_json::from_str("\"studio\"").unwrap();
        assert_eq!(desired, DesiredHousing::Specific(HousingType::Other("studio".to_string())));
    }

    #[test]
    fn test_price_range_contains_fractional_rent() {
        let range = PriceRange { min: 1000, max: 2500 };
        assert!(range.contains(2450.5));
        assert!(range.contains(2500.0));
        assert!(!range.contains(2500.01));
    }
}
