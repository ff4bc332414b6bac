//! Facade crate for the Harbour location matching engine.
//!
//! This crate re-exports the preference and location model together with
//! the match engine, so callers need only one dependency.

#![forbid(unsafe_code)]

pub use harbour_core::{
    Category, CategoryScorer, CategoryWeights, Confidence, Factor, LocationRecord, MatchQuality,
    MatchResult, Preferences, ScoreResult,
};
pub use harbour_scorer::{
    CultureVersion, EngineConfig, HobbyCatalogue, HobbyCatalogueCache, HobbyDefinition,
    HobbyDefinitionSource, HobbySourceError, MatchEngine, StaticHobbySource,
};
