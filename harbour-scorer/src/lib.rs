//! Category scorers and the match engine for Harbour.
//!
//! Six scorers implement [`CategoryScorer`](harbour_core::CategoryScorer):
//! region, climate, culture, hobbies, administration and cost. The
//! [`MatchEngine`] runs them against a location, weights the results and
//! summarises them into a [`MatchResult`](harbour_core::MatchResult).
//!
//! Scoring is pure apart from hobby definitions, which come from an injected
//! [`HobbyDefinitionSource`] through a shared [`HobbyCatalogueCache`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use harbour_core::LocationRecord;
//! use harbour_scorer::{
//!     CultureVersion, EngineConfig, HobbyCatalogueCache, MatchEngine, StaticHobbySource,
//! };
//! use serde_json::json;
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let cache = Arc::new(HobbyCatalogueCache::new(Arc::new(StaticHobbySource::default())));
//! let config = EngineConfig::default().with_culture_version(CultureVersion::V2);
//! let engine = MatchEngine::with_config(cache, config);
//! let results = engine
//!     .compute_match_batch(&[LocationRecord::default()], &json!({}))
//!     .await;
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].total_score, 100);
//! # });
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod admin;
mod catalogue;
pub mod climate;
pub mod cost;
pub mod culture;
mod engine;
mod error;
pub mod geographic;
pub mod healthcare;
pub mod hobbies;
mod points;
pub mod region;
pub mod safety;
mod summary;
pub mod tax;

pub use admin::{AdminScorer, AdminTier};
pub use catalogue::{
    DEFAULT_TTL, HobbyCatalogue, HobbyCatalogueCache, HobbyDefinition, HobbyDefinitionSource,
    StaticHobbySource,
};
pub use climate::ClimateScorer;
pub use cost::CostScorer;
pub use culture::{CULTURE_V1, CULTURE_V2, CultureScorer, CultureTable, CultureVersion};
pub use engine::{EngineConfig, MatchEngine};
pub use error::HobbySourceError;
pub use hobbies::HobbiesScorer;
pub use region::RegionScorer;
