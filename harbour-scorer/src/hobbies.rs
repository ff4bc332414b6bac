//! Hobby and activity scoring.
//!
//! Each requested activity is classified by the strongest evidence the
//! location offers for it: listed among its top hobbies, inferred from its
//! geography, or pursuable anywhere. Locations whose specialities line up
//! with a requested activity family earn a native-match score instead of the
//! weighted sum. Travel frequency adjusts the result last.

use harbour_core::matcher::{contains_ignore_case, eq_ignore_case, fold};
use harbour_core::{
    Category, CategoryScorer, Factor, HobbyPreferences, LocationRecord, Preferences, ScoreResult,
    to_score,
};

use crate::HobbyCatalogue;
use crate::geographic::{
    ActivityFamily, has_golf_courses, infer_availability, is_snow_location, is_water_location,
    is_wine_country,
};
use crate::points::{delta, ratio, share};

/// Hobbies that can be pursued almost anywhere.
pub const UNIVERSAL_HOBBIES: &[&str] = &[
    "Walking",
    "Reading",
    "Cooking",
    "Gardening",
    "Photography",
    "Yoga",
    "Meditation",
    "Bird Watching",
    "Writing",
    "Painting",
    "Music",
    "Chess",
    "Board Games",
    "Knitting",
    "Hiking",
];

/// Legacy compound selections and the activities they stand for.
const COMPOUND_ACTIVITIES: &[(&str, &[&str])] = &[
    ("walking_cycling", &["Walking", "Cycling"]),
    ("golf_tennis", &["Golf", "Tennis"]),
    (
        "water_sports",
        &["Swimming", "Snorkeling", "Scuba Diving", "Sailing", "Kayaking"],
    ),
    ("water_crafts", &["Sailing", "Kayaking", "Boating", "Fishing"]),
    ("winter_sports", &["Skiing", "Snowboarding"]),
];

/// Families that can earn a native match.
const NATIVE_FAMILIES: &[ActivityFamily] = &[
    ActivityFamily::Water,
    ActivityFamily::Winter,
    ActivityFamily::Golf,
    ActivityFamily::Wine,
];

const NATIVE_BASE: f32 = 85.0_f32;
const NATIVE_RANGE: f32 = 15.0_f32;
const FALLBACK_CEILING: u8 = 70;
const FREQUENT_WITH_AIRPORT: i32 = 15;
const FREQUENT_WITHOUT_AIRPORT: i32 = -10;
const OCCASIONAL_WITH_AIRPORT: i32 = 10;

/// Strongest evidence a location offers for one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HobbyMatch {
    /// Listed among the location's top hobbies.
    Distinctive,
    /// Inferred from the location's geography.
    Inferred,
    /// Possible anywhere.
    Universal,
    /// No evidence.
    Missing,
}

impl HobbyMatch {
    /// Weight this evidence contributes to the hobby score.
    #[must_use]
    pub const fn weight(self) -> f32 {
        match self {
            Self::Distinctive => 1.0_f32,
            Self::Inferred => 0.8_f32,
            Self::Universal => 0.5_f32,
            Self::Missing => 0.0_f32,
        }
    }

    const fn is_local(self) -> bool {
        matches!(self, Self::Distinctive | Self::Inferred)
    }
}

/// Scores hobbies against a hobby-definition catalogue snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HobbiesScorer<'a> {
    catalogue: &'a HobbyCatalogue,
}

impl<'a> HobbiesScorer<'a> {
    /// Score hobbies using `catalogue` for universal-hobby lookups.
    #[must_use]
    pub const fn new(catalogue: &'a HobbyCatalogue) -> Self {
        Self { catalogue }
    }
}

impl CategoryScorer for HobbiesScorer<'_> {
    fn category(&self) -> Category {
        Category::Hobbies
    }

    fn score(&self, preferences: &Preferences, location: &LocationRecord) -> ScoreResult {
        score_hobbies(&preferences.hobbies, location, self.catalogue)
    }
}

/// Score `location` against hobby preferences.
///
/// # Examples
///
/// ```
/// use harbour_core::{HobbyPreferences, LocationRecord};
/// use harbour_scorer::HobbyCatalogue;
/// use harbour_scorer::hobbies::score_hobbies;
///
/// let prefs = HobbyPreferences {
///     activities: vec!["reading".to_owned()],
///     ..HobbyPreferences::default()
/// };
/// // No specialities listed: universal hobbies earn half credit.
/// let result = score_hobbies(&prefs, &LocationRecord::default(), &HobbyCatalogue::default());
/// assert_eq!(result.score, 50);
/// ```
#[must_use]
pub fn score_hobbies(
    prefs: &HobbyPreferences,
    location: &LocationRecord,
    catalogue: &HobbyCatalogue,
) -> ScoreResult {
    if !prefs.has_any_preferences() {
        return ScoreResult::open(Category::Hobbies);
    }

    let mut factors = Vec::new();
    let requested = expand_activities(prefs);
    let base = if requested.is_empty() {
        factors.push(Factor::new("No specific activities requested", 0));
        100
    } else {
        activity_score(&requested, location, catalogue, &mut factors)
    };

    let score = match travel_adjustment(prefs.travel_frequency.as_deref(), location) {
        Some(factor) => {
            let adjusted = adjust(base, factor.delta);
            factors.push(factor);
            adjusted
        }
        None => base,
    };
    log::trace!("hobbies base {base} adjusted {score} for {}", location.label());
    ScoreResult::new(Category::Hobbies, score, factors)
}

/// Requested activities with compounds expanded, names title-cased and
/// duplicates dropped, in request order.
#[must_use]
pub fn expand_activities(prefs: &HobbyPreferences) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::new();
    for raw in prefs.requested() {
        let key = fold(raw.trim()).replace([' ', '-'], "_");
        let names = COMPOUND_ACTIVITIES
            .iter()
            .find(|(compound, _)| *compound == key)
            .map_or_else(
                || vec![title_case(raw)],
                |(_, members)| members.iter().map(|member| (*member).to_owned()).collect(),
            );
        for name in names {
            if !name.is_empty() && !contains_ignore_case(&expanded, &name) {
                expanded.push(name);
            }
        }
    }
    expanded
}

/// Classify `activity` by the strongest evidence `location` offers.
#[must_use]
pub fn classify(
    activity: &str,
    location: &LocationRecord,
    inferred_available: bool,
    catalogue: &HobbyCatalogue,
) -> HobbyMatch {
    if contains_ignore_case(&location.top_hobbies, activity) {
        HobbyMatch::Distinctive
    } else if inferred_available {
        HobbyMatch::Inferred
    } else if contains_ignore_case(UNIVERSAL_HOBBIES, activity) || catalogue.is_universal(activity)
    {
        HobbyMatch::Universal
    } else {
        HobbyMatch::Missing
    }
}

/// Weighted activity fit out of 100.
///
/// With a specialities list the weighted sum is divided by the number of
/// listed specialities, not by the number requested. The same request
/// therefore scores lower against a place that lists more specialities.
/// Without a list the sum is divided by the request count and capped.
fn activity_score(
    requested: &[String],
    location: &LocationRecord,
    catalogue: &HobbyCatalogue,
    factors: &mut Vec<Factor>,
) -> u8 {
    let availability = infer_availability(location, requested);
    let matches: Vec<HobbyMatch> = requested
        .iter()
        .map(|activity| {
            let found = classify(
                activity,
                location,
                availability.is_available(activity),
                catalogue,
            );
            factors.push(activity_factor(activity, found));
            found
        })
        .collect();

    if let Some(family) = native_match(requested, location) {
        let local = matches.iter().filter(|found| found.is_local()).count();
        let score = native_score(ratio(local, requested.len()));
        factors.push(Factor::new(
            format!("Native destination for {}", family_label(family)),
            delta(NATIVE_RANGE),
        ));
        return score;
    }

    let sum = weight_sum(&matches);
    if location.top_hobbies.is_empty() {
        weighted(sum, requested.len()).min(FALLBACK_CEILING)
    } else {
        weighted(sum, location.top_hobbies.len())
    }
}

fn activity_factor(activity: &str, found: HobbyMatch) -> Factor {
    let description = match found {
        HobbyMatch::Distinctive => format!("{activity} is a local speciality"),
        HobbyMatch::Inferred => format!("{activity} likely available"),
        HobbyMatch::Universal => format!("{activity} possible anywhere"),
        HobbyMatch::Missing => format!("{activity} unlikely to be available"),
    };
    Factor::new(description, delta(share(10.0_f32, found.weight())))
}

#[expect(
    clippy::float_arithmetic,
    reason = "match weights are summed as raw points"
)]
fn weight_sum(matches: &[HobbyMatch]) -> f32 {
    matches.iter().map(|found| found.weight()).sum()
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the weighted sum is scaled by a small activity count"
)]
fn weighted(sum: f32, count: usize) -> u8 {
    if count == 0 {
        return 0;
    }
    to_score(sum / count as f32 * 100.0_f32)
}

#[expect(
    clippy::float_arithmetic,
    reason = "native matches scale a fixed range by local availability"
)]
fn native_score(local_fraction: f32) -> u8 {
    to_score(NATIVE_BASE + (NATIVE_RANGE * local_fraction).round())
}

/// First family whose requested activity, location gate and listed
/// speciality all line up.
fn native_match(requested: &[String], location: &LocationRecord) -> Option<ActivityFamily> {
    NATIVE_FAMILIES.iter().copied().find(|&family| {
        let wanted = requested
            .iter()
            .any(|activity| ActivityFamily::of(activity) == Some(family));
        let listed = location
            .top_hobbies
            .iter()
            .any(|hobby| ActivityFamily::of(hobby) == Some(family));
        wanted && listed && native_gate(family, location)
    })
}

fn native_gate(family: ActivityFamily, location: &LocationRecord) -> bool {
    match family {
        ActivityFamily::Water => is_water_location(location),
        ActivityFamily::Winter => is_snow_location(location),
        ActivityFamily::Golf => has_golf_courses(location),
        ActivityFamily::Wine => is_wine_country(location),
        _ => false,
    }
}

const fn family_label(family: ActivityFamily) -> &'static str {
    match family {
        ActivityFamily::Water => "water sports",
        ActivityFamily::Winter => "winter sports",
        ActivityFamily::Golf => "golf",
        ActivityFamily::Wine => "wine",
        _ => "activities",
    }
}

fn travel_adjustment(frequency: Option<&str>, location: &LocationRecord) -> Option<Factor> {
    let wanted = frequency?;
    let airport = location.has_airport();
    if eq_ignore_case(wanted, "frequent") {
        Some(if airport {
            Factor::new("Airport access for frequent travel", FREQUENT_WITH_AIRPORT)
        } else {
            Factor::new(
                "No nearby airport for frequent travel",
                FREQUENT_WITHOUT_AIRPORT,
            )
        })
    } else if eq_ignore_case(wanted, "occasional") && airport {
        Some(Factor::new(
            "Airport access for occasional travel",
            OCCASIONAL_WITH_AIRPORT,
        ))
    } else {
        None
    }
}

fn adjust(score: u8, change: i32) -> u8 {
    u8::try_from((i32::from(score) + change).clamp(0, 100)).unwrap_or(100)
}

fn title_case(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HobbyDefinition;
    use harbour_core::test_support::{arctic_town, coastal_city};
    use rstest::{fixture, rstest};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    fn wanting(activities: &[&str]) -> HobbyPreferences {
        HobbyPreferences {
            activities: strings(activities),
            ..HobbyPreferences::default()
        }
    }

    #[fixture]
    fn empty_catalogue() -> HobbyCatalogue {
        HobbyCatalogue::default()
    }

    #[rstest]
    fn no_preferences_scores_full_marks(empty_catalogue: HobbyCatalogue) {
        let result = score_hobbies(&HobbyPreferences::default(), &arctic_town(), &empty_catalogue);
        assert_eq!(result.score, 100);
    }

    #[rstest]
    #[case(
        &["water_sports", "swimming"],
        &["Swimming", "Snorkeling", "Scuba Diving", "Sailing", "Kayaking"]
    )]
    #[case(&["walking_cycling", "golf_tennis"], &["Walking", "Cycling", "Golf", "Tennis"])]
    #[case(&["bird_watching", "Bird Watching"], &["Bird Watching"])]
    #[case(&["Winter Sports"], &["Skiing", "Snowboarding"])]
    fn expands_and_deduplicates(#[case] raw: &[&str], #[case] expected: &[&str]) {
        assert_eq!(expand_activities(&wanting(raw)), strings(expected));
    }

    #[rstest]
    fn native_water_destination_scores_full(empty_catalogue: HobbyCatalogue) {
        let prefs = wanting(&["swimming", "sailing"]);
        let result = score_hobbies(&prefs, &coastal_city(), &empty_catalogue);
        assert_eq!(result.score, 100);
        assert!(
            result
                .factors
                .iter()
                .any(|factor| factor.description == "Native destination for water sports")
        );
    }

    #[rstest]
    fn native_match_scales_with_local_share(empty_catalogue: HobbyCatalogue) {
        let location = LocationRecord {
            golf_courses_count: Some(3),
            top_hobbies: strings(&["Golf"]),
            ..LocationRecord::default()
        };
        // One of two activities is local: 85 + round(7.5).
        let result = score_hobbies(&wanting(&["golf", "chess"]), &location, &empty_catalogue);
        assert_eq!(result.score, 93);
    }

    #[rstest]
    #[case(&["Chess"], 100)]
    #[case(&["Chess", "Opera"], 50)]
    #[case(&["Chess", "Opera", "Pottery", "Theatre"], 25)]
    fn longer_speciality_lists_dilute_a_match(
        empty_catalogue: HobbyCatalogue,
        #[case] specialities: &[&str],
        #[case] expected: u8,
    ) {
        let location = LocationRecord {
            top_hobbies: strings(specialities),
            ..LocationRecord::default()
        };
        let mut factors = Vec::new();
        let requested = strings(&["chess"]);
        let score = activity_score(&requested, &location, &empty_catalogue, &mut factors);
        assert_eq!(score, expected);
    }

    #[rstest]
    fn unsupported_activities_score_zero(empty_catalogue: HobbyCatalogue) {
        let result = score_hobbies(
            &wanting(&["swimming", "sailing"]),
            &arctic_town(),
            &empty_catalogue,
        );
        assert_eq!(result.score, 0);
    }

    #[rstest]
    #[case(&["reading"], 50)]
    #[case(&["golf"], 70)]
    #[case(&["polo"], 0)]
    fn fallback_without_specialities_is_capped(
        empty_catalogue: HobbyCatalogue,
        #[case] activities: &[&str],
        #[case] expected: u8,
    ) {
        let location = LocationRecord {
            golf_courses_count: Some(2),
            ..LocationRecord::default()
        };
        let result = score_hobbies(&wanting(activities), &location, &empty_catalogue);
        assert_eq!(result.score, expected);
    }

    #[rstest]
    fn catalogue_marks_extra_universal_hobbies() {
        let catalogue = HobbyCatalogue::new(vec![HobbyDefinition::new("Pottery", true)]);
        let location = LocationRecord {
            top_hobbies: strings(&["Golf", "Tennis"]),
            ..LocationRecord::default()
        };
        assert_eq!(
            classify("pottery", &location, false, &catalogue),
            HobbyMatch::Universal
        );
        assert_eq!(score_hobbies(&wanting(&["pottery"]), &location, &catalogue).score, 25);
        assert_eq!(
            score_hobbies(&wanting(&["pottery"]), &location, &HobbyCatalogue::default()).score,
            0
        );
    }

    #[rstest]
    fn distinctive_beats_inferred_and_universal(empty_catalogue: HobbyCatalogue) {
        let location = coastal_city();
        assert_eq!(
            classify("Cycling", &location, true, &empty_catalogue),
            HobbyMatch::Distinctive
        );
        assert_eq!(
            classify("Hiking", &location, true, &empty_catalogue),
            HobbyMatch::Inferred
        );
    }

    #[rstest]
    #[case("frequent", None, Some(8.0), 100)]
    #[case("frequent", None, Some(120.0), 90)]
    #[case("occasional", Some("Regional Airport"), None, 100)]
    #[case("rare", None, None, 100)]
    fn travel_adjusts_open_activity_score(
        empty_catalogue: HobbyCatalogue,
        #[case] frequency: &str,
        #[case] airport: Option<&str>,
        #[case] distance: Option<f32>,
        #[case] expected: u8,
    ) {
        let prefs = HobbyPreferences {
            travel_frequency: Some(frequency.to_owned()),
            ..HobbyPreferences::default()
        };
        let location = LocationRecord {
            nearest_airport: airport.map(str::to_owned),
            airport_distance: distance,
            ..LocationRecord::default()
        };
        assert_eq!(score_hobbies(&prefs, &location, &empty_catalogue).score, expected);
    }

    #[rstest]
    fn frequent_traveller_without_airport_gets_a_warning_factor(empty_catalogue: HobbyCatalogue) {
        let prefs = HobbyPreferences {
            activities: strings(&["reading"]),
            travel_frequency: Some("frequent".to_owned()),
            ..HobbyPreferences::default()
        };
        let result = score_hobbies(&prefs, &LocationRecord::default(), &empty_catalogue);
        assert_eq!(result.score, 40);
        assert!(result.factors.iter().any(|factor| factor.delta < 0));
    }
}
