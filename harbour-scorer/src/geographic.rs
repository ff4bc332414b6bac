//! Geographic inference of activity availability.
//!
//! Most location records do not list every activity they support. These
//! rules estimate availability from geography, infrastructure counts and
//! population. Each rule family is independent and gated on location
//! attributes only, so inference is pure and idempotent.

use harbour_core::LocationRecord;
use harbour_core::matcher::{contains_ignore_case, eq_ignore_case};

/// Activity families with a shared availability rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityFamily {
    /// Ocean and lake activities.
    Water,
    /// Snow activities.
    Winter,
    /// Golf.
    Golf,
    /// Tennis and similar.
    Racquet,
    /// Museums, performances and galleries.
    Cultural,
    /// Markets and shopping.
    Markets,
    /// Wine tasting and vineyard tours.
    Wine,
    /// Gyms, studios and spas.
    Fitness,
    /// Walking trails.
    Hiking,
    /// Off-road cycling.
    MountainBiking,
    /// Road cycling.
    Cycling,
}

const FAMILIES: &[(ActivityFamily, &[&str])] = &[
    (
        ActivityFamily::Water,
        &[
            "Swimming",
            "Snorkeling",
            "Scuba Diving",
            "Sailing",
            "Kayaking",
            "Boating",
            "Fishing",
            "Surfing",
            "Paddleboarding",
            "Windsurfing",
            "Kitesurfing",
            "Canoeing",
            "Water Sports",
        ],
    ),
    (
        ActivityFamily::Winter,
        &[
            "Skiing",
            "Snowboarding",
            "Cross-Country Skiing",
            "Snowshoeing",
            "Ice Skating",
            "Winter Sports",
        ],
    ),
    (ActivityFamily::Golf, &["Golf"]),
    (
        ActivityFamily::Racquet,
        &["Tennis", "Pickleball", "Padel", "Badminton", "Squash"],
    ),
    (
        ActivityFamily::Cultural,
        &[
            "Museums",
            "Theater",
            "Theatre",
            "Concerts",
            "Opera",
            "Ballet",
            "Art Galleries",
            "Live Music",
        ],
    ),
    (
        ActivityFamily::Markets,
        &["Farmers Markets", "Markets", "Shopping", "Antiques"],
    ),
    (
        ActivityFamily::Wine,
        &["Wine Tasting", "Wine", "Vineyards", "Wine Tours"],
    ),
    (
        ActivityFamily::Fitness,
        &["Fitness", "Gym", "Pilates", "Spa", "Wellness", "Aqua Aerobics"],
    ),
    (ActivityFamily::Hiking, &["Hiking", "Trekking", "Trail Running"]),
    (ActivityFamily::MountainBiking, &["Mountain Biking"]),
    (ActivityFamily::Cycling, &["Cycling", "Road Cycling"]),
];

/// Cultural activities that spill over from a nearby city.
const SPILLOVER_ACTIVITIES: &[&str] = &["Museums", "Theater", "Theatre", "Concerts"];

/// Countries known for wine everywhere.
const WINE_COUNTRIES: &[&str] = &["Spain", "France", "Italy", "Portugal", "Greece"];

/// Countries whose wine regions sit in valleys.
const VALLEY_WINE_COUNTRIES: &[&str] = &["Australia", "Argentina", "Chile", "South Africa"];

impl ActivityFamily {
    /// Family an activity belongs to, if any rule covers it.
    #[must_use]
    pub fn of(activity: &str) -> Option<Self> {
        FAMILIES
            .iter()
            .find(|(_, members)| contains_ignore_case(members, activity))
            .map(|(family, _)| *family)
    }

    /// Activity names in the family.
    #[must_use]
    pub fn members(self) -> &'static [&'static str] {
        FAMILIES
            .iter()
            .find(|(family, _)| *family == self)
            .map(|(_, members)| *members)
            .unwrap_or_default()
    }
}

/// How inference judged one requested activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The family's rule holds at this location.
    Available(ActivityFamily),
    /// The family's rule fails at this location.
    Unavailable(ActivityFamily),
    /// No rule covers the activity.
    Unknown,
}

/// Inferred availability for a list of requested activities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Availability {
    /// Requested activities the location is inferred to support.
    pub available: Vec<String>,
    /// Classification of every requested activity, in request order.
    pub classification: Vec<(String, Classification)>,
}

impl Availability {
    /// Report whether `activity` was inferred available.
    #[must_use]
    pub fn is_available(&self, activity: &str) -> bool {
        contains_ignore_case(&self.available, activity)
    }
}

/// Estimate which requested activities a location supports.
///
/// # Examples
///
/// ```
/// use harbour_core::LocationRecord;
/// use harbour_scorer::geographic::infer_availability;
///
/// let harbour_town = LocationRecord {
///     geographic_features: vec!["coastal".to_owned()],
///     golf_courses_count: Some(0),
///     ..LocationRecord::default()
/// };
/// let requested = vec!["Sailing".to_owned(), "Golf".to_owned()];
/// let availability = infer_availability(&harbour_town, &requested);
/// assert_eq!(availability.available, vec!["Sailing".to_owned()]);
/// ```
#[must_use]
pub fn infer_availability(location: &LocationRecord, requested: &[String]) -> Availability {
    let mut availability = Availability::default();
    for activity in requested {
        let classification = match ActivityFamily::of(activity) {
            Some(family) if supports(location, family, activity) => {
                availability.available.push(activity.clone());
                Classification::Available(family)
            }
            Some(family) => Classification::Unavailable(family),
            None => Classification::Unknown,
        };
        availability
            .classification
            .push((activity.clone(), classification));
    }
    availability
}

/// Fraction of a city's amenities reachable from `distance_km` away.
///
/// # Examples
///
/// ```
/// use harbour_scorer::geographic::urban_spillover;
///
/// assert!((urban_spillover(0.0) - 1.0).abs() < f32::EPSILON);
/// assert!((urban_spillover(35.0) - 0.7).abs() < f32::EPSILON);
/// assert!((urban_spillover(250.0) - 0.1).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn urban_spillover(distance_km: f32) -> f32 {
    if distance_km <= 0.0_f32 {
        1.0_f32
    } else if distance_km <= 20.0_f32 {
        0.9_f32
    } else if distance_km <= 40.0_f32 {
        0.7_f32
    } else if distance_km <= 60.0_f32 {
        0.5_f32
    } else if distance_km <= 100.0_f32 {
        0.3_f32
    } else {
        0.1_f32
    }
}

fn supports(location: &LocationRecord, family: ActivityFamily, activity: &str) -> bool {
    let population = location.population.unwrap_or_default();
    match family {
        ActivityFamily::Water => is_water_location(location),
        ActivityFamily::Winter => is_snow_location(location),
        ActivityFamily::Golf => has_golf_courses(location),
        ActivityFamily::Racquet => location.tennis_courts_count.is_some_and(|n| n > 0),
        ActivityFamily::Cultural => {
            population >= 100_000
                || in_city(location)
                || (contains_ignore_case(SPILLOVER_ACTIVITIES, activity)
                    && population >= 20_000
                    && location
                        .distance_to_urban_center
                        .is_some_and(|km| urban_spillover(km) >= 0.7_f32))
        }
        ActivityFamily::Markets => population >= 10_000,
        ActivityFamily::Wine => is_wine_country(location),
        ActivityFamily::Fitness => {
            population >= 50_000
                || location
                    .distance_to_urban_center
                    .is_some_and(|km| km <= 20.0_f32)
                || on_the_ocean(location)
        }
        ActivityFamily::Hiking => {
            location.elevation_meters.is_some_and(|m| m > 200.0_f32)
                || has_feature(location, "mountain")
                || location.hiking_trails_km.is_some_and(|km| km > 0.0_f32)
        }
        ActivityFamily::MountainBiking => {
            location.elevation_meters.is_some_and(|m| m > 500.0_f32)
                || has_feature(location, "mountain")
        }
        ActivityFamily::Cycling => population >= 20_000,
    }
}

fn has_feature(location: &LocationRecord, feature: &str) -> bool {
    contains_ignore_case(&location.geographic_features, feature)
}

fn on_the_ocean(location: &LocationRecord) -> bool {
    location
        .distance_to_ocean_km
        .is_some_and(|km| km <= 0.0_f32)
}

fn in_city(location: &LocationRecord) -> bool {
    location
        .distance_to_urban_center
        .is_some_and(|km| km <= 0.0_f32)
}

/// Coastal geography, a zero ocean distance, or a water body near the sea.
pub(crate) fn is_water_location(location: &LocationRecord) -> bool {
    has_feature(location, "coastal")
        || on_the_ocean(location)
        || (!location.water_bodies.is_empty()
            && location
                .distance_to_ocean_km
                .is_some_and(|km| km <= 50.0_f32))
}

/// High ground, nearby ski resorts, or mountain geography.
pub(crate) fn is_snow_location(location: &LocationRecord) -> bool {
    location.elevation_meters.is_some_and(|m| m > 800.0_f32)
        || location.ski_resorts_within_100km.is_some_and(|n| n > 0)
        || has_feature(location, "mountain")
}

pub(crate) fn has_golf_courses(location: &LocationRecord) -> bool {
    location.golf_courses_count.is_some_and(|n| n > 0)
}

/// Wine-producing country, with valley terrain where only valleys qualify.
pub(crate) fn is_wine_country(location: &LocationRecord) -> bool {
    let Some(country) = location.country.as_deref() else {
        return false;
    };
    WINE_COUNTRIES
        .iter()
        .any(|wine| eq_ignore_case(wine, country))
        || (contains_ignore_case(VALLEY_WINE_COUNTRIES, country) && has_feature(location, "valley"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbour_core::test_support::{arctic_town, coastal_city, sparse_location};
    use rstest::rstest;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[rstest]
    #[case("scuba diving", Some(ActivityFamily::Water))]
    #[case("Golf", Some(ActivityFamily::Golf))]
    #[case("Museums", Some(ActivityFamily::Cultural))]
    #[case("Knitting", None)]
    fn activities_map_to_families(#[case] activity: &str, #[case] family: Option<ActivityFamily>) {
        assert_eq!(ActivityFamily::of(activity), family);
    }

    #[rstest]
    fn coastal_city_supports_water_and_culture() {
        let requested = strings(&["Kayaking", "Opera", "Skiing", "Wine Tasting", "Knitting"]);
        let availability = infer_availability(&coastal_city(), &requested);
        assert_eq!(
            availability.available,
            strings(&["Kayaking", "Opera", "Wine Tasting"])
        );
        assert_eq!(
            availability.classification.get(2),
            Some(&(
                "Skiing".to_owned(),
                Classification::Unavailable(ActivityFamily::Winter)
            ))
        );
        assert_eq!(
            availability.classification.get(4).map(|(_, class)| *class),
            Some(Classification::Unknown)
        );
    }

    #[rstest]
    fn mountain_town_supports_winter_and_hiking() {
        let requested = strings(&["Skiing", "Hiking", "Mountain Biking", "Golf"]);
        let availability = infer_availability(&arctic_town(), &requested);
        assert_eq!(
            availability.available,
            strings(&["Skiing", "Hiking", "Mountain Biking"])
        );
    }

    #[rstest]
    fn museums_spill_over_from_a_nearby_city() {
        let town = LocationRecord {
            population: Some(25_000),
            distance_to_urban_center: Some(30.0),
            ..LocationRecord::default()
        };
        let availability = infer_availability(&town, &strings(&["Museums", "Opera"]));
        assert_eq!(availability.available, strings(&["Museums"]));
    }

    #[rstest]
    #[case("Chile", &["valley"], true)]
    #[case("Chile", &["coastal"], false)]
    #[case("Italy", &[], true)]
    #[case("Norway", &["valley"], false)]
    fn wine_country_rules(#[case] country: &str, #[case] features: &[&str], #[case] wine: bool) {
        let location = LocationRecord {
            country: Some(country.to_owned()),
            geographic_features: strings(features),
            ..LocationRecord::default()
        };
        assert_eq!(is_wine_country(&location), wine);
    }

    #[rstest]
    fn sparse_records_support_nothing_with_rules() {
        let requested = strings(&["Swimming", "Golf", "Cycling"]);
        assert!(infer_availability(&sparse_location(), &requested)
            .available
            .is_empty());
    }

    #[rstest]
    fn inference_is_idempotent() {
        let requested = strings(&["Sailing", "Tennis", "Museums"]);
        let first = infer_availability(&coastal_city(), &requested);
        let second = infer_availability(&coastal_city(), &requested);
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(20.0, 0.9)]
    #[case(40.0, 0.7)]
    #[case(60.0, 0.5)]
    #[case(100.0, 0.3)]
    #[case(101.0, 0.1)]
    fn spillover_steps(#[case] distance: f32, #[case] expected: f32) {
        assert!((urban_spillover(distance) - expected).abs() < f32::EPSILON);
    }
}
