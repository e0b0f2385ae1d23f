use rayon::prelude::*;
use crate::error::ProfileError;
use crate::models::{Factor, FactorScore, LocationRecord, MatchResult, PreferenceProfile, ScoringWeights};
use crate::core::{
    explain::{generate_concerns, generate_reasons},
    fit::{evaluate_commute, evaluate_housing},
    scoring::evaluate_lifestyle,
    validate::validate_profile,
};

/// Catalog size from which scoring fans out across the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Main matching orchestrator - scores every catalog location and ranks them
///
/// # Pipeline Stages
/// 1. Profile validation (the only way a run can fail)
/// 2. Lifestyle, commute and housing evaluation per location
/// 3. Blending, breakdown assembly and explanations
/// 4. Stable descending sort by match score
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    parallel_threshold: usize,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Set the catalog size at which scoring runs in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank every location in the catalog for a preference profile
    ///
    /// # Arguments
    /// * `preferences` - The user's lifestyle preferences
    /// * `catalog` - All candidate locations
    ///
    /// # Returns
    /// One result per catalog entry, sorted by match score descending. Equal
    /// scores keep catalog order. Nothing is filtered or truncated.
    ///
    /// # Errors
    /// Returns [`ProfileError`] when the profile is malformed; no location is
    /// scored in that case.
    pub fn find_matches<'a>(
        &self,
        preferences: &PreferenceProfile,
        catalog: &'a [LocationRecord],
    ) -> Result<Vec<MatchResult<'a>>, ProfileError> {
        validate_profile(preferences)?;

        let parallel = catalog.len() >= self.parallel_threshold;
        tracing::debug!(
            "Scoring {} locations (parallel: {})",
            catalog.len(),
            parallel
        );

        let mut matches: Vec<MatchResult<'a>> = if parallel {
            catalog
                .par_iter()
                .map(|location| self.score_location(preferences, location))
                .collect()
        } else {
            catalog
                .iter()
                .map(|location| self.score_location(preferences, location))
                .collect()
        };

        // Stable sort: ties keep catalog order
        matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

        Ok(matches)
    }

    /// Score a single location. The profile is assumed valid.
    pub fn score_location<'a>(
        &self,
        preferences: &PreferenceProfile,
        location: &'a LocationRecord,
    ) -> MatchResult<'a> {
        let blend = &self.weights.blend;

        let lifestyle = evaluate_lifestyle(preferences, location, &self.weights);
        let commute = evaluate_commute(preferences, location);
        let housing = evaluate_housing(preferences, location);

        let overall = lifestyle.score * blend.lifestyle
            + commute * blend.commute
            + housing * blend.housing;

        let mut breakdown = lifestyle.breakdown;
        breakdown.insert(
            Factor::Commute,
            FactorScore {
                score: commute,
                weight: blend.commute,
                contribution: commute * blend.commute,
            },
        );
        breakdown.insert(
            Factor::Housing,
            FactorScore {
                score: housing,
                weight: blend.housing,
                contribution: housing * blend.housing,
            },
        );

        let match_score = overall.clamp(0.0, 100.0);
        tracing::trace!("Scored {}: {:.2}", location.id, match_score);

        MatchResult {
            location,
            match_score,
            breakdown,
            reasons: generate_reasons(preferences, location),
            concerns: generate_concerns(preferences, location),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank a catalog with the default weights
pub fn find_matches<'a>(
    preferences: &PreferenceProfile,
    catalog: &'a [LocationRecord],
) -> Result<Vec<MatchResult<'a>>, ProfileError> {
    Matcher::default().find_matches(preferences, catalog)
}
