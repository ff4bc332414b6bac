//! Region scoring: country, broad region, landscape and vegetation.
//!
//! Raw points come from three independent parts (country or region 40,
//! geographic features 30, vegetation 20) and are normalised against their
//! 90-point maximum.

use harbour_core::adjacency::{
    ALL_GEOGRAPHIC_FEATURES, ALL_VEGETATION_TYPES, GEOGRAPHIC_FEATURES, REGION_CREDIT, VEGETATION,
};
use harbour_core::matcher::{contains_ignore_case, mentions_any, overlaps_ignore_case};
use harbour_core::{
    AdjacencyMap, Category, CategoryScorer, Factor, LocationRecord, Preferences,
    RegionPreferences, ScoreResult,
};

use crate::points::{delta, percentage, share};

const COUNTRY_POINTS: f32 = 40.0_f32;
const REGION_POINTS: f32 = 30.0_f32;
const FEATURE_POINTS: f32 = 30.0_f32;
const VEGETATION_POINTS: f32 = 20.0_f32;
const REGION_MAX: f32 = 90.0_f32;

/// Keywords in a location's regions that imply a coastline.
const COASTAL_KEYWORDS: &[&str] = &[
    "gulf",
    "ocean",
    "coast",
    "beach",
    "sea",
    "atlantic",
    "pacific",
    "mediterranean",
];

/// Scores where a location is and what its landscape looks like.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionScorer;

impl CategoryScorer for RegionScorer {
    fn category(&self) -> Category {
        Category::Region
    }

    fn score(&self, preferences: &Preferences, location: &LocationRecord) -> ScoreResult {
        score_region(&preferences.region, location)
    }
}

/// Score `location` against region preferences.
///
/// # Examples
///
/// ```
/// use harbour_core::{LocationRecord, RegionPreferences};
/// use harbour_scorer::region::score_region;
///
/// let prefs = RegionPreferences {
///     countries: vec!["Portugal".to_owned()],
///     ..RegionPreferences::default()
/// };
/// let location = LocationRecord {
///     country: Some("portugal".to_owned()),
///     ..LocationRecord::default()
/// };
/// assert_eq!(score_region(&prefs, &location).score, 100);
/// ```
#[must_use]
pub fn score_region(prefs: &RegionPreferences, location: &LocationRecord) -> ScoreResult {
    if !prefs.has_any_preferences() {
        return ScoreResult::open(Category::Region);
    }

    let mut factors = Vec::new();
    let country = place_points(prefs, location, &mut factors);
    let features = landscape_points(
        &Landscape {
            label: "Geographic features",
            wanted: &prefs.geographic_features,
            every_option: ALL_GEOGRAPHIC_FEATURES,
            adjacency: &GEOGRAPHIC_FEATURES,
            max: FEATURE_POINTS,
        },
        &location.geographic_features,
        wants_coast(prefs) && regions_mention_coast(location),
        &mut factors,
    );
    let vegetation = landscape_points(
        &Landscape {
            label: "Vegetation",
            wanted: &prefs.vegetation_types,
            every_option: ALL_VEGETATION_TYPES,
            adjacency: &VEGETATION,
            max: VEGETATION_POINTS,
        },
        &location.vegetation_types,
        false,
        &mut factors,
    );

    let raw = sum(&[country, features, vegetation]);
    let score = percentage(raw, REGION_MAX);
    log::trace!("region raw {raw} for {}", location.label());
    ScoreResult::new(Category::Region, score, factors)
}

#[expect(
    clippy::float_arithmetic,
    reason = "region parts are summed as raw points"
)]
fn sum(parts: &[f32]) -> f32 {
    parts.iter().sum()
}

fn place_points(
    prefs: &RegionPreferences,
    location: &LocationRecord,
    factors: &mut Vec<Factor>,
) -> f32 {
    if prefs.countries.is_empty() && prefs.regions.is_empty() && prefs.provinces.is_empty() {
        factors.push(Factor::new("Open to any country or region", delta(COUNTRY_POINTS)));
        return COUNTRY_POINTS;
    }

    if let Some(country) = location.country.as_deref()
        && contains_ignore_case(&prefs.countries, country)
    {
        factors.push(Factor::new(
            format!("Country match ({country})"),
            delta(COUNTRY_POINTS),
        ));
        return COUNTRY_POINTS;
    }

    if let Some(region) = location.region.as_deref() {
        let named_as_country = contains_ignore_case(&prefs.countries, region);
        let named_as_province =
            contains_ignore_case(&prefs.provinces, region) && prefs.countries.is_empty();
        if named_as_country || named_as_province {
            factors.push(Factor::new(
                format!("State or province match ({region})"),
                delta(COUNTRY_POINTS),
            ));
            return COUNTRY_POINTS;
        }
    }

    if overlaps_ignore_case(&prefs.regions, &location.regions)
        || overlaps_ignore_case(&prefs.regions, &location.geo_region)
    {
        factors.push(Factor::new("Region match", delta(REGION_POINTS)));
        return REGION_POINTS;
    }

    factors.push(Factor::new("Outside preferred countries and regions", 0));
    0.0_f32
}

struct Landscape<'a> {
    label: &'static str,
    wanted: &'a [String],
    every_option: &'static [&'static str],
    adjacency: &'static AdjacencyMap,
    max: f32,
}

fn landscape_points(
    part: &Landscape<'_>,
    actual: &[String],
    implied_match: bool,
    factors: &mut Vec<Factor>,
) -> f32 {
    let selected_everything = part
        .every_option
        .iter()
        .all(|option| contains_ignore_case(part.wanted, option));
    if part.wanted.is_empty() || selected_everything {
        factors.push(Factor::new(
            format!("{}: open to any", part.label),
            delta(part.max),
        ));
        return part.max;
    }

    if overlaps_ignore_case(part.wanted, actual) || implied_match {
        factors.push(Factor::new(
            format!("{} match", part.label),
            delta(part.max),
        ));
        return part.max;
    }

    let related = actual.iter().any(|candidate| {
        part.wanted
            .iter()
            .any(|wanted| part.adjacency.are_adjacent(wanted, candidate))
    });
    if related {
        let points = share(part.max, REGION_CREDIT);
        factors.push(Factor::new(
            format!("{} partially match", part.label),
            delta(points),
        ));
        return points;
    }

    let reason = if actual.is_empty() {
        "no data"
    } else {
        "no match"
    };
    factors.push(Factor::new(format!("{}: {reason}", part.label), 0));
    0.0_f32
}

fn wants_coast(prefs: &RegionPreferences) -> bool {
    contains_ignore_case(&prefs.geographic_features, "coastal")
}

fn regions_mention_coast(location: &LocationRecord) -> bool {
    location
        .regions
        .iter()
        .chain(&location.geo_region)
        .any(|region| mentions_any(region, COASTAL_KEYWORDS))
}
