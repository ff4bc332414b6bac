//! Case-insensitive primitive matchers.
//!
//! Every categorical comparison in the engine goes through this module so
//! that casing and stray whitespace never decide a score. Scorers must not
//! lowercase strings themselves.

use crate::AdjacencyMap;

/// Fraction of the attribute budget awarded when the location has no value.
pub const UNAVAILABLE_CREDIT: f32 = 0.5_f32;

/// Fold a term for comparison: trim and lowercase.
#[must_use]
pub fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Compare two terms ignoring case and surrounding whitespace.
///
/// # Examples
///
/// ```
/// use harbour_core::matcher::eq_ignore_case;
///
/// assert!(eq_ignore_case("Often_Sunny ", "often_sunny"));
/// assert!(!eq_ignore_case("dry", "humid"));
/// ```
#[must_use]
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    fold(left) == fold(right)
}

/// Report whether `values` holds `needle`, ignoring case.
#[must_use]
pub fn contains_ignore_case<S: AsRef<str>>(values: &[S], needle: &str) -> bool {
    values.iter().any(|value| eq_ignore_case(value.as_ref(), needle))
}

/// Report whether the two lists share at least one term, ignoring case.
#[must_use]
pub fn overlaps_ignore_case<L: AsRef<str>, R: AsRef<str>>(left: &[L], right: &[R]) -> bool {
    left.iter()
        .any(|value| contains_ignore_case(right, value.as_ref()))
}

/// Report whether free text mentions any of the keywords, ignoring case.
///
/// Keywords are matched as substrings, so `"sunny"` matches
/// `"Sunny, dry summers"`.
#[must_use]
pub fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    let folded = fold(text);
    keywords
        .iter()
        .any(|keyword| folded.contains(fold(keyword).as_str()))
}

/// How an adjacency-scored attribute was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The user expressed no preference.
    Open,
    /// The location has no value for the attribute.
    Unavailable,
    /// A user value equals the location value.
    Exact,
    /// The location value is a listed neighbour of a user value.
    Adjacent,
    /// Nothing matched.
    None,
}

/// Points awarded by [`match_with_adjacency`] with the reason.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjacencyMatch {
    /// Points earned, between zero and the attribute budget.
    pub points: f32,
    /// Which rule produced the points.
    pub kind: MatchKind,
}

/// Score a categorical attribute with exact and adjacent credit.
///
/// 1. No user values: full points.
/// 2. No location value: half points.
/// 3. Any user value equal to the location value: full points.
/// 4. The location value is adjacent to a user value: `adjacent_factor` of
///    the points.
/// 5. Otherwise zero.
///
/// # Examples
///
/// ```
/// use harbour_core::adjacency::{CLIMATE_CREDIT, HUMIDITY};
/// use harbour_core::{MatchKind, match_with_adjacency};
///
/// let wanted = vec!["dry".to_owned()];
/// let result = match_with_adjacency(&wanted, Some("Balanced"), 20.0, &HUMIDITY, CLIMATE_CREDIT);
/// assert_eq!(result.kind, MatchKind::Adjacent);
/// assert!((result.points - 14.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn match_with_adjacency(
    user_values: &[String],
    location_value: Option<&str>,
    max_points: f32,
    adjacency: &AdjacencyMap,
    adjacent_factor: f32,
) -> AdjacencyMatch {
    evaluate(
        user_values,
        location_value,
        max_points,
        adjacency,
        adjacent_factor,
        UNAVAILABLE_CREDIT,
    )
}

/// Variant of [`match_with_adjacency`] that awards nothing for missing data.
#[must_use]
pub fn match_with_adjacency_strict(
    user_values: &[String],
    location_value: Option<&str>,
    max_points: f32,
    adjacency: &AdjacencyMap,
    adjacent_factor: f32,
) -> AdjacencyMatch {
    evaluate(
        user_values,
        location_value,
        max_points,
        adjacency,
        adjacent_factor,
        0.0_f32,
    )
}

#[expect(
    clippy::float_arithmetic,
    reason = "partial credit scales the attribute budget"
)]
fn evaluate(
    user_values: &[String],
    location_value: Option<&str>,
    max_points: f32,
    adjacency: &AdjacencyMap,
    adjacent_factor: f32,
    unavailable_credit: f32,
) -> AdjacencyMatch {
    if user_values.is_empty() {
        return AdjacencyMatch {
            points: max_points,
            kind: MatchKind::Open,
        };
    }
    let Some(actual) = location_value.filter(|value| !value.trim().is_empty()) else {
        return AdjacencyMatch {
            points: max_points * unavailable_credit,
            kind: MatchKind::Unavailable,
        };
    };
    if contains_ignore_case(user_values, actual) {
        return AdjacencyMatch {
            points: max_points,
            kind: MatchKind::Exact,
        };
    }
    if user_values
        .iter()
        .any(|wanted| adjacency.are_adjacent(wanted, actual))
    {
        return AdjacencyMatch {
            points: max_points * adjacent_factor,
            kind: MatchKind::Adjacent,
        };
    }
    AdjacencyMatch {
        points: 0.0_f32,
        kind: MatchKind::None,
    }
}
