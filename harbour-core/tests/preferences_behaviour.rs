#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for preference normalisation using rstest-bdd.

use std::cell::RefCell;

use harbour_core::Preferences;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

/// World state for preference scenarios.
#[derive(Debug, Default)]
struct PreferenceWorld {
    raw: RefCell<Value>,
    parsed: RefCell<Option<Preferences>>,
}

impl PreferenceWorld {
    fn parsed(&self) -> Preferences {
        self.parsed
            .borrow()
            .clone()
            .expect("preferences should be parsed")
    }
}

#[fixture]
fn world() -> PreferenceWorld {
    PreferenceWorld::default()
}

#[given("a null preference document")]
fn given_null(world: &PreferenceWorld) {
    world.raw.replace(Value::Null);
}

#[given("a preference document answering every climate question with Select Preference")]
fn given_placeholders(world: &PreferenceWorld) {
    world.raw.replace(json!({
        "climate_preferences": {
            "summer_climate_preference": "Select Preference",
            "winter_climate_preference": ["select_preference"],
            "seasonal_preference": "Optional",
            "humidity_level": [""],
            "sunshine": [],
            "precipitation": null
        }
    }));
}

#[given("a preference document with a monthly budget range of {low} to {high}")]
fn given_budget_range(world: &PreferenceWorld, low: u32, high: u32) {
    world
        .raw
        .replace(json!({ "cost_preferences": { "total_monthly_budget": [low, high] } }));
}

#[given("a preference document naming the country {country}")]
fn given_country(world: &PreferenceWorld, country: String) {
    world
        .raw
        .replace(json!({ "countries": country.trim_matches('"') }));
}

#[when("the preferences are parsed")]
fn when_parsed(world: &PreferenceWorld) {
    let parsed = Preferences::parse(&world.raw.borrow());
    world.parsed.replace(Some(parsed));
}

#[then("no category holds a preference")]
fn then_empty(world: &PreferenceWorld) {
    let parsed = world.parsed();
    assert!(!parsed.has_any_preferences());
    assert_eq!(parsed.category_flags(), [false; 6]);
}

#[then("the total monthly budget is {amount}")]
fn then_budget(world: &PreferenceWorld, amount: f32) {
    let budget = world
        .parsed()
        .cost
        .total_monthly_budget
        .expect("budget should be parsed");
    assert!((budget - amount).abs() < 1e-3, "got {budget}");
}

#[then("the region preferences list {count} country")]
fn then_country_count(world: &PreferenceWorld, count: usize) {
    assert_eq!(world.parsed().region.countries.len(), count);
}

#[scenario(path = "tests/features/preferences.feature", index = 0)]
fn null_document(world: PreferenceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/preferences.feature", index = 1)]
fn placeholder_answers(world: PreferenceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/preferences.feature", index = 2)]
fn budget_range(world: PreferenceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/preferences.feature", index = 3)]
fn single_country(world: PreferenceWorld) {
    let _ = world;
}
