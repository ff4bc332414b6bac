#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for whole-location matching using rstest-bdd.

use std::cell::RefCell;
use std::sync::Arc;

use harbour_core::test_support::{
    antithetical_preferences, arctic_town, coastal_city, coastal_city_preferences,
    country_only_preferences, sparse_location,
};
use harbour_core::{Category, LocationRecord, MatchQuality, MatchResult};
use harbour_scorer::{HobbyCatalogueCache, MatchEngine, StaticHobbySource};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

/// World state for matching scenarios.
#[derive(Debug, Default)]
struct MatchWorld {
    preferences: RefCell<Value>,
    location: RefCell<LocationRecord>,
    result: RefCell<Option<MatchResult>>,
}

impl MatchWorld {
    fn result(&self) -> MatchResult {
        self.result
            .borrow()
            .clone()
            .expect("location should be matched")
    }
}

#[fixture]
fn world() -> MatchWorld {
    MatchWorld::default()
}

#[given("the coastal city preferences")]
fn given_coastal_preferences(world: &MatchWorld) {
    world.preferences.replace(coastal_city_preferences());
}

#[given("the antithetical preferences")]
fn given_antithetical_preferences(world: &MatchWorld) {
    world.preferences.replace(antithetical_preferences());
}

#[given("a user who only names Spain")]
fn given_country_only(world: &MatchWorld) {
    world.preferences.replace(country_only_preferences());
}

#[given("a user with no preferences")]
fn given_no_preferences(world: &MatchWorld) {
    world.preferences.replace(json!({}));
}

#[given("the coastal city")]
fn given_coastal_city(world: &MatchWorld) {
    world.location.replace(coastal_city());
}

#[given("the arctic town")]
fn given_arctic_town(world: &MatchWorld) {
    world.location.replace(arctic_town());
}

#[given("a location known only by its country")]
fn given_sparse_location(world: &MatchWorld) {
    world.location.replace(sparse_location());
}

#[given("a location known only as Spain")]
fn given_spanish_location(world: &MatchWorld) {
    world.location.replace(LocationRecord {
        country: Some("Spain".to_owned()),
        ..LocationRecord::default()
    });
}

#[when("the location is matched")]
fn when_matched(world: &MatchWorld) {
    let cache = HobbyCatalogueCache::new(Arc::new(StaticHobbySource::default()));
    let engine = MatchEngine::new(Arc::new(cache));
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let result = runtime.block_on(
        engine.compute_match(&world.preferences.borrow(), &world.location.borrow()),
    );
    world.result.replace(Some(result));
}

#[then("the match quality is excellent")]
fn then_excellent(world: &MatchWorld) {
    assert_eq!(world.result().quality, MatchQuality::Excellent);
}

#[then("the total score is at least {minimum}")]
fn then_at_least(world: &MatchWorld, minimum: u8) {
    let total = world.result().total_score;
    assert!(total >= minimum, "total {total} below {minimum}");
}

#[then("the total score is at most {maximum}")]
fn then_at_most(world: &MatchWorld, maximum: u8) {
    let total = world.result().total_score;
    assert!(total <= maximum, "total {total} above {maximum}");
}

#[then("the region score is {expected}")]
fn then_region(world: &MatchWorld, expected: u8) {
    assert_eq!(world.result().category_scores.region, expected);
}

#[then("the total score is exactly {expected}")]
fn then_total(world: &MatchWorld, expected: u8) {
    assert_eq!(world.result().total_score, expected);
}

#[then("every category except region scores 100")]
fn then_open_except_region(world: &MatchWorld) {
    let scores = world.result().category_scores;
    for category in Category::ALL {
        if category != Category::Region {
            assert_eq!(scores.get(category), 100, "{category} was not open");
        }
    }
}

#[scenario(path = "tests/features/engine.feature", index = 0)]
fn perfect_match(world: MatchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/engine.feature", index = 1)]
fn antithetical_match(world: MatchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/engine.feature", index = 2)]
fn country_only_user_in_that_country(world: MatchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/engine.feature", index = 3)]
fn country_only_user_elsewhere(world: MatchWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/engine.feature", index = 4)]
fn open_user(world: MatchWorld) {
    let _ = world;
}
