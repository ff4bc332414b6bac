//! Climate scoring.
//!
//! Summer and winter are judged on measured temperatures when the record has
//! them, falling back to labels and then to description keywords. Humidity,
//! sunshine and precipitation use the adjacency matcher with budgets that
//! shrink as the evidence gets weaker. A seasonal-alignment bonus rewards
//! locations that excel in the season the user cares about. The raw total
//! can exceed 100 and is capped.

use harbour_core::adjacency::{CLIMATE_CREDIT, HUMIDITY, PRECIPITATION, SUMMER, SUNSHINE, WINTER};
use harbour_core::inference::{self, InferenceSource, Inferred, Season};
use harbour_core::matcher::{contains_ignore_case, eq_ignore_case, fold};
use harbour_core::{
    AdjacencyMap, Category, CategoryScorer, ClimatePreferences, Factor, LocationRecord,
    MatchKind, Preferences, ScoreResult, match_with_adjacency, to_score,
};

use crate::points::{delta, share};

const SEASON_POINTS: f32 = 25.0_f32;
const SEASON_DESCRIPTION_POINTS: f32 = 13.0_f32;
const SEASONAL_BONUS: f32 = 15.0_f32;
const SEASON_QUALIFIES: f32 = 0.8_f32;

const FLEXIBLE: &[&str] = &["flexible", "no_preference", "any", "no preference"];
const WARM_FOCUS: &[&str] = &["summer_focused", "warm_seasons", "prefer_warm_seasons"];
const COOL_FOCUS: &[&str] = &["winter_focused", "cool_seasons", "prefer_cool_seasons"];
const ALL_SEASONS: &str = "all_seasons";

/// Points available for an attribute at each evidence tier.
#[derive(Debug, Clone, Copy)]
struct Budget {
    label: f32,
    numeric: f32,
    description: f32,
}

impl Budget {
    const fn for_source(self, source: InferenceSource) -> f32 {
        match source {
            InferenceSource::Label => self.label,
            InferenceSource::Numeric => self.numeric,
            InferenceSource::Description => self.description,
        }
    }
}

const HUMIDITY_BUDGET: Budget = Budget {
    label: 20.0_f32,
    numeric: 13.0_f32,
    description: 13.0_f32,
};
const SUNSHINE_BUDGET: Budget = Budget {
    label: 20.0_f32,
    numeric: 13.0_f32,
    description: 10.0_f32,
};
const PRECIPITATION_BUDGET: Budget = Budget {
    label: 10.0_f32,
    numeric: 7.0_f32,
    description: 5.0_f32,
};

/// Scores temperature, humidity, sunshine and rainfall.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClimateScorer;

impl CategoryScorer for ClimateScorer {
    fn category(&self) -> Category {
        Category::Climate
    }

    fn score(&self, preferences: &Preferences, location: &LocationRecord) -> ScoreResult {
        score_climate(&preferences.climate, location)
    }
}

/// Score `location` against climate preferences.
#[must_use]
pub fn score_climate(prefs: &ClimatePreferences, location: &LocationRecord) -> ScoreResult {
    if !prefs.has_any_preferences() {
        return ScoreResult::open(Category::Climate);
    }

    let mut factors = Vec::new();
    let summer = season_points(Season::Summer, &prefs.summer, location, &mut factors);
    let winter = season_points(Season::Winter, &prefs.winter, location, &mut factors);
    let humidity = tiered(
        "Humidity",
        &prefs.humidity,
        inference::humidity(location),
        HUMIDITY_BUDGET,
        &HUMIDITY,
        &mut factors,
    );
    let sunshine = tiered(
        "Sunshine",
        &prefs.sunshine,
        inference::sunshine(location),
        SUNSHINE_BUDGET,
        &SUNSHINE,
        &mut factors,
    );
    let precipitation = tiered(
        "Precipitation",
        &prefs.precipitation,
        inference::precipitation(location),
        PRECIPITATION_BUDGET,
        &PRECIPITATION,
        &mut factors,
    );
    let seasonal = seasonal_points(&prefs.seasonal, &summer, &winter, &mut factors);

    let raw = total(&[
        summer.points,
        winter.points,
        humidity,
        sunshine,
        precipitation,
        seasonal,
    ]);
    ScoreResult::new(Category::Climate, to_score(raw), factors)
}

#[expect(
    clippy::float_arithmetic,
    reason = "climate parts are summed as raw points"
)]
fn total(parts: &[f32]) -> f32 {
    parts.iter().sum()
}

/// Summer or winter points and whether they qualify for the seasonal bonus.
#[derive(Debug, Clone, Copy)]
struct SeasonOutcome {
    points: f32,
    qualifies: bool,
}

fn season_points(
    season: Season,
    wanted: &[String],
    location: &LocationRecord,
    factors: &mut Vec<Factor>,
) -> SeasonOutcome {
    let name = season_name(season);
    if let Some(celsius) = season.temperature(location) {
        let fraction = if wanted.is_empty() {
            1.0_f32
        } else {
            wanted
                .iter()
                .filter_map(|band| band_fraction(season, band, celsius))
                .fold(0.0_f32, f32::max)
        };
        let points = share(SEASON_POINTS, fraction).round();
        factors.push(Factor::new(
            format!("{name}: {celsius:.0}°C averages"),
            delta(points),
        ));
        return SeasonOutcome {
            points,
            qualifies: fraction >= SEASON_QUALIFIES,
        };
    }

    let map = season_map(season);
    let (result, budget) = if let Some(label) = season.label(location) {
        (
            match_with_adjacency(
                wanted,
                Some(label.as_str()),
                SEASON_POINTS,
                map,
                CLIMATE_CREDIT,
            ),
            SEASON_POINTS,
        )
    } else if let Some(guess) = season.from_description(location) {
        (
            match_with_adjacency(
                wanted,
                Some(guess),
                SEASON_DESCRIPTION_POINTS,
                map,
                CLIMATE_CREDIT,
            ),
            SEASON_DESCRIPTION_POINTS,
        )
    } else {
        (
            match_with_adjacency(wanted, None, SEASON_POINTS, map, CLIMATE_CREDIT),
            SEASON_POINTS,
        )
    };
    factors.push(Factor::new(
        format!("{name}: {}", kind_label(result.kind)),
        delta(result.points),
    ));
    SeasonOutcome {
        points: result.points,
        qualifies: result.kind != MatchKind::Unavailable
            && result.points >= share(budget, SEASON_QUALIFIES),
    }
}

const fn season_name(season: Season) -> &'static str {
    match season {
        Season::Summer => "Summer",
        Season::Winter => "Winter",
    }
}

const fn season_map(season: Season) -> &'static AdjacencyMap {
    match season {
        Season::Summer => &SUMMER,
        Season::Winter => &WINTER,
    }
}

/// Inclusive temperature range for a canonical band.
fn band_range(season: Season, band: &str) -> Option<(f32, f32)> {
    let key = fold(band);
    match (season, key.as_str()) {
        (Season::Summer, "mild") => Some((15.0_f32, 24.0_f32)),
        (Season::Summer, "warm") => Some((22.0_f32, 32.0_f32)),
        (Season::Summer, "hot") => Some((28.0_f32, f32::INFINITY)),
        (Season::Winter, "cold") => Some((f32::NEG_INFINITY, 5.0_f32)),
        (Season::Winter, "cool") => Some((3.0_f32, 15.0_f32)),
        (Season::Winter, "mild") => Some((12.0_f32, f32::INFINITY)),
        _ => None,
    }
}

/// Share of the season budget earned by `celsius` against a preferred band.
#[expect(
    clippy::float_arithmetic,
    reason = "distance outside a band is a temperature difference"
)]
fn band_fraction(season: Season, band: &str, celsius: f32) -> Option<f32> {
    let (low, high) = band_range(season, band)?;
    let distance = if celsius < low {
        low - celsius
    } else if celsius > high {
        celsius - high
    } else {
        0.0_f32
    };
    Some(distance_credit(distance))
}

fn distance_credit(distance: f32) -> f32 {
    if distance <= 0.0_f32 {
        1.0_f32
    } else if distance <= 2.0_f32 {
        0.8_f32
    } else if distance <= 5.0_f32 {
        0.5_f32
    } else if distance <= 10.0_f32 {
        0.2_f32
    } else {
        0.0_f32
    }
}

fn tiered(
    label: &str,
    wanted: &[String],
    inferred: Option<Inferred>,
    budget: Budget,
    map: &AdjacencyMap,
    factors: &mut Vec<Factor>,
) -> f32 {
    let (result, source) = inferred.as_ref().map_or_else(
        || {
            (
                match_with_adjacency(wanted, None, budget.label, map, CLIMATE_CREDIT),
                None,
            )
        },
        |found| {
            (
                match_with_adjacency(
                    wanted,
                    Some(found.value.as_str()),
                    budget.for_source(found.source),
                    map,
                    CLIMATE_CREDIT,
                ),
                Some(found.source),
            )
        },
    );
    let evidence = match source {
        Some(InferenceSource::Numeric) => " (from measurements)",
        Some(InferenceSource::Description) => " (from description)",
        Some(InferenceSource::Label) | None => "",
    };
    factors.push(Factor::new(
        format!("{label}: {}{evidence}", kind_label(result.kind)),
        delta(result.points),
    ));
    result.points
}

const fn kind_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Open => "open to any",
        MatchKind::Unavailable => "no data",
        MatchKind::Exact => "match",
        MatchKind::Adjacent => "close match",
        MatchKind::None => "mismatch",
    }
}

fn seasonal_points(
    wanted: &[String],
    summer: &SeasonOutcome,
    winter: &SeasonOutcome,
    factors: &mut Vec<Factor>,
) -> f32 {
    let flexible = wanted.is_empty()
        || wanted
            .iter()
            .any(|value| contains_ignore_case(FLEXIBLE, value));
    let aligned = flexible
        || wanted.iter().any(|value| {
            (contains_ignore_case(WARM_FOCUS, value) && summer.qualifies)
                || (contains_ignore_case(COOL_FOCUS, value) && winter.qualifies)
                || (eq_ignore_case(value, ALL_SEASONS)
                    && summer.qualifies
                    && winter.qualifies)
        });
    if aligned {
        factors.push(Factor::new("Seasonal preference aligned", delta(SEASONAL_BONUS)));
        SEASONAL_BONUS
    } else {
        factors.push(Factor::new("Seasonal preference not met", 0));
        0.0_f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbour_core::test_support::{arctic_town, coastal_city, sparse_location};
    use rstest::rstest;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    fn summer_only(wanted: &[&str]) -> ClimatePreferences {
        ClimatePreferences {
            summer: strings(wanted),
            ..ClimatePreferences::default()
        }
    }

    fn summer_delta(result: &ScoreResult) -> Option<i32> {
        result
            .factors
            .iter()
            .find(|factor| factor.description.starts_with("Summer"))
            .map(|factor| factor.delta)
    }

    #[rstest]
    fn open_preferences_score_full_marks() {
        let result = score_climate(&ClimatePreferences::default(), &arctic_town());
        assert_eq!(result.score, 100);
    }

    #[rstest]
    #[case(20.0, 25)]
    #[case(26.0, 20)]
    #[case(29.0, 13)]
    #[case(34.0, 5)]
    #[case(40.0, 0)]
    fn summer_distance_from_band(#[case] celsius: f32, #[case] expected: i32) {
        let location = LocationRecord {
            avg_temp_summer: Some(celsius),
            ..LocationRecord::default()
        };
        let result = score_climate(&summer_only(&["mild"]), &location);
        assert_eq!(summer_delta(&result), Some(expected));
    }

    #[rstest]
    fn best_of_several_bands_counts() {
        let location = LocationRecord {
            avg_temp_summer: Some(30.0),
            ..LocationRecord::default()
        };
        let result = score_climate(&summer_only(&["mild", "hot"]), &location);
        assert_eq!(summer_delta(&result), Some(25));
    }

    #[rstest]
    fn labels_use_adjacency_when_temperatures_are_missing() {
        let location = LocationRecord {
            summer_climate: Some("Warm".to_owned()),
            ..LocationRecord::default()
        };
        let result = score_climate(&summer_only(&["hot"]), &location);
        // 25 x 0.7 = 17.5
        assert_eq!(summer_delta(&result), Some(18));
    }

    #[rstest]
    fn descriptions_are_the_last_resort() {
        let location = LocationRecord {
            climate_description: Some("Long hot summers".to_owned()),
            ..LocationRecord::default()
        };
        let result = score_climate(&summer_only(&["hot"]), &location);
        assert_eq!(summer_delta(&result), Some(13));
    }

    #[rstest]
    fn numeric_evidence_shrinks_the_budget() {
        let prefs = ClimatePreferences {
            humidity: strings(&["humid"]),
            ..ClimatePreferences::default()
        };
        let location = LocationRecord {
            humidity_average: Some(80.0),
            ..LocationRecord::default()
        };
        let result = score_climate(&prefs, &location);
        let humidity = result
            .factors
            .iter()
            .find(|factor| factor.description.starts_with("Humidity"))
            .map(|factor| factor.delta);
        assert_eq!(humidity, Some(13));
    }

    #[rstest]
    fn perfect_climate_is_capped_at_one_hundred() {
        let prefs = ClimatePreferences {
            summer: strings(&["warm"]),
            winter: strings(&["mild"]),
            seasonal: strings(&["summer_focused"]),
            humidity: strings(&["balanced"]),
            sunshine: strings(&["often_sunny"]),
            precipitation: strings(&["mostly_dry"]),
        };
        assert_eq!(score_climate(&prefs, &coastal_city()).score, 100);
    }

    #[rstest]
    #[case(&["summer_focused"], 15)]
    #[case(&["winter_focused"], 0)]
    #[case(&["all_seasons"], 0)]
    #[case(&["flexible"], 15)]
    fn seasonal_bonus_needs_the_focused_season(#[case] seasonal: &[&str], #[case] bonus: i32) {
        let prefs = ClimatePreferences {
            summer: strings(&["hot"]),
            winter: strings(&["cold"]),
            seasonal: strings(seasonal),
            ..ClimatePreferences::default()
        };
        let location = LocationRecord {
            avg_temp_summer: Some(31.0),
            avg_temp_winter: Some(16.0),
            ..LocationRecord::default()
        };
        let result = score_climate(&prefs, &location);
        let last = result.factors.last().map(|factor| factor.delta);
        assert_eq!(last, Some(bonus));
    }

    #[rstest]
    #[case("all_seasons")]
    #[case(" ALL_SEASONS ")]
    fn all_seasons_matches_ignoring_case(#[case] seasonal: &str) {
        let prefs = ClimatePreferences {
            summer: strings(&["hot"]),
            winter: strings(&["mild"]),
            seasonal: strings(&[seasonal]),
            ..ClimatePreferences::default()
        };
        let location = LocationRecord {
            avg_temp_summer: Some(31.0),
            avg_temp_winter: Some(16.0),
            ..LocationRecord::default()
        };
        let result = score_climate(&prefs, &location);
        let last = result.factors.last().map(|factor| factor.delta);
        assert_eq!(last, Some(15));
    }

    #[rstest]
    #[case(Season::Summer, " Warm ", Some((22.0, 32.0)))]
    #[case(Season::Winter, "COLD", Some((f32::NEG_INFINITY, 5.0)))]
    #[case(Season::Winter, "hot", None)]
    fn bands_are_looked_up_ignoring_case(
        #[case] season: Season,
        #[case] band: &str,
        #[case] expected: Option<(f32, f32)>,
    ) {
        assert_eq!(band_range(season, band), expected);
    }

    #[rstest]
    fn missing_data_earns_neutral_credit() {
        let prefs = ClimatePreferences {
            summer: strings(&["warm"]),
            winter: strings(&["mild"]),
            seasonal: strings(&["summer_focused"]),
            humidity: strings(&["balanced"]),
            sunshine: strings(&["often_sunny"]),
            precipitation: strings(&["mostly_dry"]),
        };
        // 12.5 + 12.5 + 10 + 10 + 5, no seasonal bonus without temperatures.
        assert_eq!(score_climate(&prefs, &sparse_location()).score, 50);
    }
}
