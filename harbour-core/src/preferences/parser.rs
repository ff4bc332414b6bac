//! Shape coercion for raw preference documents.

use serde_json::{Map, Value};

use super::{
    AdminPreferences, ClimatePreferences, CostPreferences, CulturePreferences, HobbyPreferences,
    Importance, LanguagePreferences, Preferences, RegionPreferences,
};
use crate::matcher::{contains_ignore_case, fold};

/// Values that mean "the user skipped this question".
const PLACEHOLDERS: &[&str] = &[
    "",
    "optional",
    "select preference",
    "select_preference",
    "no_specific_preference",
];

const TRUTHY: &[&str] = &["true", "yes", "1", "sensitive", "very_sensitive", "important"];

const REGION_SECTIONS: &[&str] = &["region", "region_preferences"];
const CLIMATE_SECTIONS: &[&str] = &["climate", "climate_preferences"];
const CULTURE_SECTIONS: &[&str] = &["culture", "culture_preferences"];
const HOBBY_SECTIONS: &[&str] = &["hobbies", "hobbies_preferences"];
const ADMIN_SECTIONS: &[&str] = &["admin", "administration", "admin_preferences"];
const COST_SECTIONS: &[&str] = &["cost", "costs", "cost_preferences"];

pub(super) fn parse(raw: &Value) -> Preferences {
    let Some(root) = raw.as_object() else {
        if !raw.is_null() {
            log::debug!("ignoring non-object preference document");
        }
        return Preferences::default();
    };

    Preferences {
        region: parse_region(&Source::new(root, REGION_SECTIONS)),
        climate: parse_climate(&Source::new(root, CLIMATE_SECTIONS)),
        culture: parse_culture(&Source::new(root, CULTURE_SECTIONS)),
        hobbies: parse_hobbies(&Source::new(root, HOBBY_SECTIONS)),
        admin: parse_admin(&Source::new(root, ADMIN_SECTIONS)),
        cost: parse_cost(&Source::new(root, COST_SECTIONS)),
        citizenship: first_term(Source::new(root, &[]).first(&[
            &["current_status", "citizenship"],
            &["primary_citizenship"],
            &["citizenship"],
        ])),
    }
}

/// A root document plus the nested sections a category may live in.
///
/// Flat keys on the root win over nested ones.
struct Source<'a> {
    root: &'a Map<String, Value>,
    sections: Vec<&'a Map<String, Value>>,
}

impl<'a> Source<'a> {
    fn new(root: &'a Map<String, Value>, names: &[&str]) -> Self {
        let sections = names
            .iter()
            .filter_map(|name| root.get(*name).and_then(Value::as_object))
            .collect();
        Self { root, sections }
    }

    fn get(&self, path: &[&str]) -> Option<&'a Value> {
        std::iter::once(self.root)
            .chain(self.sections.iter().copied())
            .find_map(|map| lookup(map, path))
    }

    fn first(&self, paths: &[&[&str]]) -> Option<&'a Value> {
        paths.iter().find_map(|path| self.get(path))
    }
}

fn lookup<'a>(map: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (head, rest) = path.split_first()?;
    let value = map.get(*head)?;
    if rest.is_empty() {
        return (!value.is_null()).then_some(value);
    }
    lookup(value.as_object()?, rest)
}

fn parse_region(source: &Source<'_>) -> RegionPreferences {
    RegionPreferences {
        countries: terms(source.get(&["countries"])),
        regions: terms(source.get(&["regions"])),
        provinces: terms(source.get(&["provinces"])),
        geographic_features: terms(source.get(&["geographic_features"])),
        vegetation_types: terms(source.get(&["vegetation_types"])),
    }
}

fn parse_climate(source: &Source<'_>) -> ClimatePreferences {
    ClimatePreferences {
        summer: terms(source.get(&["summer_climate_preference"])),
        winter: terms(source.get(&["winter_climate_preference"])),
        seasonal: terms(source.get(&["seasonal_preference"])),
        humidity: terms(source.get(&["humidity_level"])),
        sunshine: terms(source.get(&["sunshine"])),
        precipitation: terms(source.get(&["precipitation"])),
    }
}

fn parse_culture(source: &Source<'_>) -> CulturePreferences {
    CulturePreferences {
        urban_rural: terms(source.first(&[
            &["lifestyle_preferences", "urban_rural_preference"],
            &["lifestyle_preferences", "urban_rural"],
            &["urban_rural_preference"],
        ])),
        pace_of_life: terms(source.first(&[
            &["lifestyle_preferences", "pace_of_life_preference"],
            &["lifestyle_preferences", "pace_of_life"],
            &["pace_of_life_preference"],
        ])),
        expat_community: terms(source.get(&["expat_community_preference"])),
        language: LanguagePreferences {
            comfort: terms(source.first(&[
                &["language_comfort", "preferences"],
                &["language_preference"],
            ])),
            already_speak: terms(source.get(&["language_comfort", "already_speak"])),
        },
        dining_nightlife: importance(source.get(&["cultural_importance", "dining_nightlife"])),
        cultural_events: importance(source.get(&["cultural_importance", "cultural_events"])),
        museums: importance(source.get(&["cultural_importance", "museums"])),
        traditional_progressive: terms(source.get(&["traditional_progressive_lean"])),
        social_atmosphere: terms(source.get(&["social_atmosphere"])),
    }
}

fn parse_hobbies(source: &Source<'_>) -> HobbyPreferences {
    HobbyPreferences {
        activities: terms(source.get(&["activities"])),
        interests: terms(source.get(&["interests"])),
        custom_physical: terms(source.get(&["custom_physical"])),
        custom_hobbies: terms(source.first(&[&["custom_hobbies"], &["custom_activities"]])),
        travel_frequency: first_term(source.get(&["travel_frequency"])),
    }
}

fn parse_admin(source: &Source<'_>) -> AdminPreferences {
    AdminPreferences {
        healthcare: terms(source.get(&["healthcare_quality"])),
        safety: terms(source.get(&["safety_importance"])),
        government_efficiency: terms(source.get(&["government_efficiency"])),
        political_stability: terms(source.get(&["political_stability"])),
        visa: terms(source.get(&["visa_preference"])),
        stay_duration: terms(source.get(&["stay_duration"])),
        environmental_sensitivity: flag(
            source.get(&["health_considerations", "environmental_health"]),
        ),
    }
}

fn parse_cost(source: &Source<'_>) -> CostPreferences {
    CostPreferences {
        total_monthly_budget: max_amount(
            source.first(&[&["total_monthly_budget"], &["total_monthly_cost"]]),
        ),
        max_monthly_rent: max_amount(source.get(&["max_monthly_rent"])),
        monthly_healthcare_budget: max_amount(source.first(&[
            &["monthly_healthcare_budget"],
            &["monthly_healthcare_cost"],
        ])),
        income_tax_sensitive: flag(source.get(&["income_tax_sensitive"])),
        property_tax_sensitive: flag(source.get(&["property_tax_sensitive"])),
        sales_tax_sensitive: flag(source.get(&["sales_tax_sensitive"])),
    }
}

/// Collect string terms from a scalar or array, dropping placeholders and
/// case-insensitive duplicates.
fn terms(value: Option<&Value>) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(found) = value {
        collect_terms(found, &mut out);
    }
    out
}

fn collect_terms(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(text) => push_term(text, out),
        Value::Number(number) => push_term(&number.to_string(), out),
        Value::Array(items) => {
            for item in items {
                collect_terms(item, out);
            }
        }
        Value::Null | Value::Bool(_) | Value::Object(_) => {}
    }
}

fn push_term(text: &str, out: &mut Vec<String>) {
    let trimmed = text.trim();
    if is_placeholder(trimmed) || contains_ignore_case(out, trimmed) {
        return;
    }
    out.push(trimmed.to_owned());
}

fn is_placeholder(text: &str) -> bool {
    contains_ignore_case(PLACEHOLDERS, text)
}

fn first_term(value: Option<&Value>) -> Option<String> {
    terms(value).into_iter().next()
}

/// Largest positive amount found in a scalar, array, or range object.
fn max_amount(value: Option<&Value>) -> Option<f32> {
    let mut amounts = Vec::new();
    if let Some(found) = value {
        collect_amounts(found, &mut amounts);
    }
    amounts
        .into_iter()
        .filter(|amount| amount.is_finite() && *amount > 0.0_f64)
        .reduce(f64::max)
        .map(narrow)
}

fn collect_amounts(value: &Value, out: &mut Vec<f64>) {
    match value {
        Value::Number(number) => out.extend(number.as_f64()),
        Value::String(text) => {
            // "2000-3500" and "$2,000 – 3,500" contribute both ends.
            for side in text.split(['-', '\u{2013}']) {
                let cleaned: String = side
                    .chars()
                    .filter(|ch| ch.is_ascii_digit() || *ch == '.')
                    .collect();
                out.extend(cleaned.parse::<f64>().ok());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_amounts(item, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_amounts(item, out);
            }
        }
        Value::Null | Value::Bool(_) => {}
    }
}

fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(set)) => *set,
        Some(Value::String(text)) => contains_ignore_case(TRUTHY, &fold(text)),
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n > 0.0_f64),
        Some(Value::Array(items)) => items.iter().any(|item| flag(Some(item))),
        Some(Value::Null | Value::Object(_)) | None => false,
    }
}

fn importance(value: Option<&Value>) -> Importance {
    let rating = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    rating
        .filter(|r| r.is_finite())
        .map_or(Importance::DONT_CARE, |r| Importance::new(rating_to_u8(r)))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "ratings are rounded and clamped to 1..=5 before narrowing"
)]
fn rating_to_u8(rating: f64) -> u8 {
    rating.round().clamp(1.0_f64, 5.0_f64) as u8
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "budget amounts sit well inside f32 range"
)]
const fn narrow(amount: f64) -> f32 {
    amount as f32
}
