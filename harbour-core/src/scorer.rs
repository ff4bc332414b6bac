//! Score one category of a location for a user.
//!
//! The `CategoryScorer` trait turns normalised [`Preferences`] and a
//! [`LocationRecord`] into a [`ScoreResult`] for a single [`Category`].

use crate::{Category, LocationRecord, Preferences, ScoreResult, to_score};

/// Calculate the score for one category.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so batches can be
/// scored across threads, and pure: identical inputs must give identical
/// results. Scoring is infallible; missing or malformed data degrades to a
/// documented neutral score.
///
/// Implementations must:
/// - Return 100 when the user has no preference in the category.
/// - Keep scores within `0..=100`.
///
/// Use [`CategoryScorer::sanitise`] to turn raw points into a score.
///
/// # Examples
///
/// ```rust
/// use harbour_core::{Category, CategoryScorer, LocationRecord, Preferences, ScoreResult};
///
/// struct Indifferent;
///
/// impl CategoryScorer for Indifferent {
///     fn category(&self) -> Category {
///         Category::Hobbies
///     }
///
///     fn score(&self, _preferences: &Preferences, _location: &LocationRecord) -> ScoreResult {
///         ScoreResult::open(self.category())
///     }
/// }
///
/// let result = Indifferent.score(&Preferences::default(), &LocationRecord::default());
/// assert_eq!(result.score, 100);
/// ```
pub trait CategoryScorer: Send + Sync {
    /// Category this scorer covers.
    fn category(&self) -> Category;

    /// Score `location` against `preferences`.
    fn score(&self, preferences: &Preferences, location: &LocationRecord) -> ScoreResult;

    /// Round raw points and clamp them to `0..=100`.
    ///
    /// Returns `0` for non-finite values.
    fn sanitise(raw: f32) -> u8
    where
        Self: Sized,
    {
        to_score(raw)
    }
}
