//! Core domain types for the Harbour matching engine.
//!
//! The crate holds everything the category scorers share: the normalised
//! [`Preferences`] model and its parser, the flat [`LocationRecord`], the
//! case-insensitive primitive matchers, the static adjacency tables, the
//! attribute inference helpers, and the score/result model returned to
//! callers.
//!
//! Nothing here performs I/O. Malformed or missing input degrades to "no
//! preference" or "no data"; it never produces an error.
//!
//! # Examples
//!
//! ```
//! use harbour_core::{Preferences, matcher};
//! use serde_json::json;
//!
//! let preferences = Preferences::parse(&json!({
//!     "countries": "Portugal",
//!     "climate_preferences": { "summer_climate_preference": ["warm"] }
//! }));
//! assert!(preferences.region.has_any_preferences());
//! assert!(matcher::contains_ignore_case(&preferences.region.countries, "portugal"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adjacency;
pub mod inference;
pub mod location;
pub mod matcher;
pub mod preferences;
mod score;
mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use adjacency::AdjacencyMap;
pub use location::LocationRecord;
pub use matcher::{AdjacencyMatch, MatchKind, match_with_adjacency};
pub use preferences::{
    AdminPreferences, ClimatePreferences, CostPreferences, CulturePreferences, HobbyPreferences,
    Importance, LanguagePreferences, Preferences, RegionPreferences,
};
pub use score::{
    Category, CategoryScores, CategoryWeights, Confidence, Factor, MatchQuality, MatchResult,
    ScoreResult, WeightsError, to_score,
};
pub use scorer::CategoryScorer;
