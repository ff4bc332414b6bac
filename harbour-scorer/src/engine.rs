//! The match engine: run every category scorer and combine the results.

use std::sync::Arc;

use harbour_core::{
    CategoryScorer, CategoryWeights, LocationRecord, MatchResult, Preferences, ScoreResult,
};
use rayon::prelude::*;
use serde_json::Value;

use crate::admin::AdminScorer;
use crate::climate::ClimateScorer;
use crate::cost::CostScorer;
use crate::culture::{CultureScorer, CultureVersion};
use crate::hobbies::HobbiesScorer;
use crate::region::RegionScorer;
use crate::summary::summarise;
use crate::{HobbyCatalogue, HobbyCatalogueCache};

/// Choices fixed when the engine is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Culture point table.
    pub culture_version: CultureVersion,
    /// Category weights for the total.
    pub weights: CategoryWeights,
}

impl EngineConfig {
    /// Use `version`'s culture table.
    #[must_use]
    pub const fn with_culture_version(mut self, version: CultureVersion) -> Self {
        self.culture_version = version;
        self
    }

    /// Use `weights` for the total.
    #[must_use]
    pub const fn with_weights(mut self, weights: CategoryWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Matches preference documents against location records.
///
/// The engine holds no per-request state. Hobby definitions come from the
/// shared [`HobbyCatalogueCache`]; everything else is pure.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use harbour_core::{LocationRecord, MatchQuality};
/// use harbour_scorer::{HobbyCatalogueCache, MatchEngine, StaticHobbySource};
/// use serde_json::json;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let cache = HobbyCatalogueCache::new(Arc::new(StaticHobbySource::default()));
/// let engine = MatchEngine::new(Arc::new(cache));
/// let location = LocationRecord {
///     country: Some("Portugal".to_owned()),
///     ..LocationRecord::default()
/// };
/// let result = engine
///     .compute_match(&json!({ "region_preferences": { "countries": ["Portugal"] } }), &location)
///     .await;
/// assert_eq!(result.quality, MatchQuality::Excellent);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MatchEngine {
    config: EngineConfig,
    catalogue: Arc<HobbyCatalogueCache>,
}

impl MatchEngine {
    /// Build an engine with the default configuration.
    #[must_use]
    pub fn new(catalogue: Arc<HobbyCatalogueCache>) -> Self {
        Self::with_config(catalogue, EngineConfig::default())
    }

    /// Build an engine with `config`.
    #[must_use]
    pub const fn with_config(catalogue: Arc<HobbyCatalogueCache>, config: EngineConfig) -> Self {
        Self { config, catalogue }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Match one location against a raw preference document.
    pub async fn compute_match(
        &self,
        preferences: &Value,
        location: &LocationRecord,
    ) -> MatchResult {
        let parsed = Preferences::parse(preferences);
        let catalogue = self.catalogue.get().await;
        self.score_parsed(&parsed, location, &catalogue)
    }

    /// Match many locations against one preference document.
    ///
    /// Preferences are parsed and the catalogue fetched once; locations are
    /// then scored in parallel. Results are in input order.
    pub async fn compute_match_batch(
        &self,
        locations: &[LocationRecord],
        preferences: &Value,
    ) -> Vec<MatchResult> {
        let parsed = Preferences::parse(preferences);
        let catalogue = self.catalogue.get().await;
        log::debug!(
            "scoring {} locations with {} hobby definitions",
            locations.len(),
            catalogue.len()
        );
        locations
            .par_iter()
            .map(|location| self.score_parsed(&parsed, location, &catalogue))
            .collect()
    }

    /// Match one location against already parsed preferences.
    #[must_use]
    pub fn score_parsed(
        &self,
        preferences: &Preferences,
        location: &LocationRecord,
        catalogue: &HobbyCatalogue,
    ) -> MatchResult {
        let results = self.score_categories(preferences, location, catalogue);
        summarise(results, &self.config.weights, preferences, location)
    }

    fn score_categories(
        &self,
        preferences: &Preferences,
        location: &LocationRecord,
        catalogue: &HobbyCatalogue,
    ) -> Vec<ScoreResult> {
        let culture = CultureScorer::new(self.config.culture_version);
        let hobbies = HobbiesScorer::new(catalogue);
        let scorers: [&dyn CategoryScorer; 6] = [
            &RegionScorer,
            &ClimateScorer,
            &culture,
            &hobbies,
            &AdminScorer,
            &CostScorer,
        ];
        scorers
            .iter()
            .map(|scorer| {
                let result = scorer.score(preferences, location);
                log::debug!(
                    "{} scored {} for {}",
                    result.category,
                    result.score,
                    location.label()
                );
                for factor in &result.factors {
                    log::trace!("{}: {} ({:+})", result.category, factor.description, factor.delta);
                }
                result
            })
            .collect()
    }
}
