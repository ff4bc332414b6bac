//! Culture scoring.
//!
//! Lifestyle attributes use the adjacency matcher, language comfort has its
//! own ladder, and amenities (dining, events, museums) weigh the location's
//! quality rating against how much the user cares. The point allocation is a
//! versioned table chosen when the engine is built.

use std::fmt;
use std::str::FromStr;

use harbour_core::adjacency::{
    CULTURE_CREDIT, EXPAT, PACE, SOCIAL_ATMOSPHERE, TRADITIONAL_PROGRESSIVE, URBAN_RURAL,
};
use harbour_core::inference;
use harbour_core::matcher::{contains_ignore_case, eq_ignore_case, fold};
use harbour_core::{
    AdjacencyMap, Category, CategoryScorer, CulturePreferences, Factor, Importance,
    LanguagePreferences, LocationRecord, MatchKind, Preferences, ScoreResult,
    match_with_adjacency,
};
use serde::{Deserialize, Serialize};

use crate::points::{delta, percentage, share};

/// Point allocation for the culture attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CultureTable {
    /// Living environment.
    pub living: f32,
    /// Pace of life.
    pub pace: f32,
    /// Language comfort.
    pub language: f32,
    /// Expat community size.
    pub expat: f32,
    /// Dining and nightlife.
    pub dining: f32,
    /// Cultural events.
    pub events: f32,
    /// Museums.
    pub museums: f32,
    /// Traditional versus progressive lean; zero when not scored.
    pub traditional_progressive: f32,
    /// Social atmosphere; zero when not scored.
    pub social_atmosphere: f32,
}

impl CultureTable {
    /// Sum of every attribute's points.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the table total is a sum of point budgets"
    )]
    pub fn total(&self) -> f32 {
        self.living
            + self.pace
            + self.language
            + self.expat
            + self.dining
            + self.events
            + self.museums
            + self.traditional_progressive
            + self.social_atmosphere
    }
}

/// Original allocation: seven attributes summing to 100.
pub const CULTURE_V1: CultureTable = CultureTable {
    living: 20.0_f32,
    pace: 20.0_f32,
    language: 20.0_f32,
    expat: 10.0_f32,
    dining: 10.0_f32,
    events: 10.0_f32,
    museums: 10.0_f32,
    traditional_progressive: 0.0_f32,
    social_atmosphere: 0.0_f32,
};

/// Extended allocation adding political lean and social atmosphere.
pub const CULTURE_V2: CultureTable = CultureTable {
    living: 15.0_f32,
    pace: 15.0_f32,
    language: 15.0_f32,
    expat: 10.0_f32,
    dining: 10.0_f32,
    events: 10.0_f32,
    museums: 10.0_f32,
    traditional_progressive: 10.0_f32,
    social_atmosphere: 10.0_f32,
};

/// Which culture table the engine uses.
///
/// # Examples
/// ```
/// use harbour_scorer::culture::CultureVersion;
///
/// assert_eq!("V2".parse::<CultureVersion>(), Ok(CultureVersion::V2));
/// assert_eq!(CultureVersion::default().to_string(), "v1");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CultureVersion {
    /// Seven attributes summing to 100.
    #[default]
    V1,
    /// Nine attributes, normalised by their 110-point total.
    V2,
}

impl CultureVersion {
    /// Return the version as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    /// Point table for this version.
    #[must_use]
    pub const fn table(self) -> &'static CultureTable {
        match self {
            Self::V1 => &CULTURE_V1,
            Self::V2 => &CULTURE_V2,
        }
    }
}

impl fmt::Display for CultureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CultureVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            _ => Err(format!("unknown culture version '{s}'")),
        }
    }
}

/// Scores lifestyle, language and cultural amenities.
#[derive(Debug, Clone, Copy, Default)]
pub struct CultureScorer {
    version: CultureVersion,
}

impl CultureScorer {
    /// Build a scorer using `version`'s point table.
    #[must_use]
    pub const fn new(version: CultureVersion) -> Self {
        Self { version }
    }

    /// Table version in use.
    #[must_use]
    pub const fn version(&self) -> CultureVersion {
        self.version
    }
}

impl CategoryScorer for CultureScorer {
    fn category(&self) -> Category {
        Category::Culture
    }

    fn score(&self, preferences: &Preferences, location: &LocationRecord) -> ScoreResult {
        score_culture(&preferences.culture, location, self.version.table())
    }
}

/// Score `location` against culture preferences using `table`.
#[must_use]
pub fn score_culture(
    prefs: &CulturePreferences,
    location: &LocationRecord,
    table: &CultureTable,
) -> ScoreResult {
    if !prefs.has_any_preferences() {
        return ScoreResult::open(Category::Culture);
    }

    let mut factors = Vec::new();
    let mut earned = Vec::with_capacity(9);

    earned.push(lifestyle(
        "Living environment",
        &prefs.urban_rural,
        inference::urban_rural(location).as_deref(),
        table.living,
        &URBAN_RURAL,
        &mut factors,
    ));
    earned.push(lifestyle(
        "Pace of life",
        &prefs.pace_of_life,
        inference::pace_of_life(location).as_deref(),
        table.pace,
        &PACE,
        &mut factors,
    ));
    earned.push(language_points(
        &prefs.language,
        location,
        table.language,
        &mut factors,
    ));
    earned.push(lifestyle(
        "Expat community",
        &prefs.expat_community,
        inference::expat_community(location).as_deref(),
        table.expat,
        &EXPAT,
        &mut factors,
    ));
    earned.push(amenity(
        "Dining and nightlife",
        prefs.dining_nightlife,
        dining_rating(location),
        table.dining,
        &mut factors,
    ));
    earned.push(amenity(
        "Cultural events",
        prefs.cultural_events,
        location.cultural_events_rating,
        table.events,
        &mut factors,
    ));
    earned.push(amenity(
        "Museums",
        prefs.museums,
        location.museums_rating,
        table.museums,
        &mut factors,
    ));
    if table.traditional_progressive > 0.0_f32 {
        earned.push(lifestyle(
            "Traditional or progressive lean",
            &prefs.traditional_progressive,
            location.traditional_progressive_lean.as_deref(),
            table.traditional_progressive,
            &TRADITIONAL_PROGRESSIVE,
            &mut factors,
        ));
    }
    if table.social_atmosphere > 0.0_f32 {
        earned.push(lifestyle(
            "Social atmosphere",
            &prefs.social_atmosphere,
            location.social_atmosphere.as_deref(),
            table.social_atmosphere,
            &SOCIAL_ATMOSPHERE,
            &mut factors,
        ));
    }

    let score = percentage(sum(&earned), table.total());
    ScoreResult::new(Category::Culture, score, factors)
}

#[expect(
    clippy::float_arithmetic,
    reason = "culture attributes are summed as raw points"
)]
fn sum(parts: &[f32]) -> f32 {
    parts.iter().sum()
}

fn lifestyle(
    label: &str,
    wanted: &[String],
    actual: Option<&str>,
    max: f32,
    map: &AdjacencyMap,
    factors: &mut Vec<Factor>,
) -> f32 {
    let result = match_with_adjacency(wanted, actual, max, map, CULTURE_CREDIT);
    let outcome = match result.kind {
        MatchKind::Open => "open to any",
        MatchKind::Unavailable => "no data",
        MatchKind::Exact => "match",
        MatchKind::Adjacent => "close match",
        MatchKind::None => "mismatch",
    };
    factors.push(Factor::new(format!("{label}: {outcome}"), delta(result.points)));
    result.points
}

/// Average of the restaurant and nightlife ratings that are present.
#[expect(
    clippy::float_arithmetic,
    reason = "the dining rating averages two 0-10 ratings"
)]
fn dining_rating(location: &LocationRecord) -> Option<f32> {
    match (location.restaurants_rating, location.nightlife_rating) {
        (Some(restaurants), Some(nightlife)) => Some((restaurants + nightlife) / 2.0_f32),
        (restaurants, nightlife) => restaurants.or(nightlife),
    }
}

/// Share of an amenity's points for a quality rating at a given importance.
///
/// Importance 2 follows the moderate ladder and 4 the essential one.
#[must_use]
pub fn amenity_fraction(importance: Importance, rating: Option<f32>) -> f32 {
    if !importance.is_expressed() {
        return 1.0_f32;
    }
    let Some(quality) = rating else {
        return 0.5_f32;
    };
    if importance.get() <= Importance::MODERATE.get() {
        if quality >= 7.0_f32 {
            1.0_f32
        } else if quality >= 5.0_f32 {
            0.6_f32
        } else if quality >= 3.0_f32 {
            0.3_f32
        } else {
            0.0_f32
        }
    } else if quality >= 8.0_f32 {
        1.0_f32
    } else if quality >= 6.0_f32 {
        0.5_f32
    } else {
        0.0_f32
    }
}

fn amenity(
    label: &str,
    importance: Importance,
    rating: Option<f32>,
    max: f32,
    factors: &mut Vec<Factor>,
) -> f32 {
    let points = share(max, amenity_fraction(importance, rating));
    let detail = match rating {
        _ if !importance.is_expressed() => "not important".to_owned(),
        Some(quality) => format!("rated {quality:.1} at importance {}", importance.get()),
        None => "no rating".to_owned(),
    };
    factors.push(Factor::new(format!("{label}: {detail}"), delta(points)));
    points
}

/// Share of the language budget for an English proficiency label.
fn proficiency_fraction(level: Option<&str>) -> f32 {
    let Some(raw) = level else {
        return 0.0_f32;
    };
    [
        ("native", 1.0_f32),
        ("high", 0.75_f32),
        ("moderate", 0.5_f32),
        ("low", 0.25_f32),
    ]
    .into_iter()
    .find(|(label, _)| eq_ignore_case(label, raw))
    .map_or(0.0_f32, |(_, fraction)| fraction)
}

fn language_points(
    prefs: &LanguagePreferences,
    location: &LocationRecord,
    max: f32,
    factors: &mut Vec<Factor>,
) -> f32 {
    if !prefs.has_any_preferences() {
        factors.push(Factor::new("Language: open to any", delta(max)));
        return max;
    }

    let speaks_primary = location
        .primary_language
        .as_deref()
        .is_some_and(|primary| contains_ignore_case(&prefs.already_speak, primary));
    let speaks_spoken = location
        .languages_spoken
        .iter()
        .any(|spoken| contains_ignore_case(&prefs.already_speak, spoken));
    if speaks_primary || speaks_spoken {
        factors.push(Factor::new("Language: already spoken locally", delta(max)));
        return max;
    }

    let english_only = if contains_ignore_case(&prefs.comfort, "english_only") {
        let primary_is_english = location
            .primary_language
            .as_deref()
            .is_some_and(|primary| eq_ignore_case(primary, "english"));
        if primary_is_english {
            1.0_f32
        } else {
            proficiency_fraction(location.english_proficiency_level.as_deref())
        }
    } else {
        0.0_f32
    };
    let willing = if contains_ignore_case(&prefs.comfort, "willing_to_learn") {
        0.5_f32
    } else {
        0.0_f32
    };
    let points = share(max, english_only.max(willing));
    factors.push(Factor::new("Language: comfort", delta(points)));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbour_core::test_support::{arctic_town, coastal_city, coastal_city_preferences, parsed};
    use rstest::rstest;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[rstest]
    fn open_preferences_score_full_marks() {
        let result = score_culture(&CulturePreferences::default(), &arctic_town(), &CULTURE_V1);
        assert_eq!(result.score, 100);
    }

    #[rstest]
    #[case(" V1 ", Ok(CultureVersion::V1))]
    #[case("2", Ok(CultureVersion::V2))]
    #[case("v3", Err(()))]
    fn versions_parse_ignoring_case(
        #[case] raw: &str,
        #[case] expected: Result<CultureVersion, ()>,
    ) {
        assert_eq!(raw.parse::<CultureVersion>().map_err(|_| ()), expected);
    }

    #[rstest]
    fn tables_have_documented_totals() {
        assert!((CULTURE_V1.total() - 100.0).abs() < f32::EPSILON);
        assert!((CULTURE_V2.total() - 110.0).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case(Importance::DONT_CARE, None, 1.0)]
    #[case(Importance::MODERATE, None, 0.5)]
    #[case(Importance::MODERATE, Some(7.0), 1.0)]
    #[case(Importance::MODERATE, Some(5.5), 0.6)]
    #[case(Importance::MODERATE, Some(3.0), 0.3)]
    #[case(Importance::MODERATE, Some(2.0), 0.0)]
    #[case(Importance::new(2), Some(5.0), 0.6)]
    #[case(Importance::ESSENTIAL, Some(8.0), 1.0)]
    #[case(Importance::ESSENTIAL, Some(7.0), 0.5)]
    #[case(Importance::ESSENTIAL, Some(5.0), 0.0)]
    #[case(Importance::new(4), Some(6.0), 0.5)]
    fn amenity_ladder(
        #[case] importance: Importance,
        #[case] rating: Option<f32>,
        #[case] expected: f32,
    ) {
        assert!((amenity_fraction(importance, rating) - expected).abs() < 1e-6);
    }

    #[rstest]
    #[case(&[], &["english_only"], Some("native"), 20)]
    #[case(&[], &["english_only"], Some("high"), 15)]
    #[case(&[], &["english_only"], Some("low"), 5)]
    #[case(&[], &["english_only"], None, 0)]
    #[case(&[], &["willing_to_learn"], Some("low"), 10)]
    #[case(&["Spanish"], &[], None, 20)]
    #[case(&["French"], &[], None, 0)]
    fn language_fit(
        #[case] speaks: &[&str],
        #[case] comfort: &[&str],
        #[case] proficiency: Option<&str>,
        #[case] expected: i32,
    ) {
        let prefs = LanguagePreferences {
            comfort: strings(comfort),
            already_speak: strings(speaks),
        };
        let location = LocationRecord {
            primary_language: Some("Spanish".to_owned()),
            english_proficiency_level: proficiency.map(ToOwned::to_owned),
            ..LocationRecord::default()
        };
        let mut factors = Vec::new();
        let points = language_points(&prefs, &location, 20.0, &mut factors);
        assert_eq!(delta(points), expected);
    }

    #[rstest]
    fn raw_location_labels_are_canonicalised() {
        let prefs = CulturePreferences {
            pace_of_life: strings(&["relaxed"]),
            ..CulturePreferences::default()
        };
        let location = LocationRecord {
            pace_of_life: Some("Slow".to_owned()),
            ..LocationRecord::default()
        };
        let result = score_culture(&prefs, &location, &CULTURE_V1);
        assert_eq!(result.factors.get(1).map(|factor| factor.delta), Some(20));
    }

    #[rstest]
    #[case(CultureVersion::V1)]
    #[case(CultureVersion::V2)]
    fn coastal_city_satisfies_its_own_preferences(#[case] version: CultureVersion) {
        let prefs = parsed(&coastal_city_preferences());
        let result = CultureScorer::new(version).score(&prefs, &coastal_city());
        assert_eq!(result.score, 100);
    }

    #[rstest]
    fn v2_scores_extra_attributes() {
        let prefs = CulturePreferences {
            traditional_progressive: strings(&["progressive"]),
            ..CulturePreferences::default()
        };
        let location = LocationRecord {
            traditional_progressive_lean: Some("traditional".to_owned()),
            ..LocationRecord::default()
        };
        let v1 = score_culture(&prefs, &location, &CULTURE_V1);
        let v2 = score_culture(&prefs, &location, &CULTURE_V2);
        assert_eq!(v1.score, 100);
        // 100 of 110 points.
        assert_eq!(v2.score, 91);
    }
}
