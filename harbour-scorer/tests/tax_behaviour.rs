#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for tax banding using rstest-bdd.

use std::cell::Cell;

use harbour_scorer::tax::{TaxBand, TaxKind};
use rstest::fixture;
use rstest_bdd_macros::{scenario, then, when};

/// World state for tax band scenarios.
#[derive(Debug, Default)]
struct TaxWorld {
    band: Cell<Option<TaxBand>>,
}

#[fixture]
fn world() -> TaxWorld {
    TaxWorld::default()
}

#[when("an income tax rate of {rate} is banded")]
fn when_banded(world: &TaxWorld, rate: f32) {
    world.band.set(Some(TaxKind::Income.band(rate)));
}

#[then("the band is {name}")]
fn then_band(world: &TaxWorld, name: String) {
    let expected = match name.as_str() {
        "excellent" => Some(TaxBand::Excellent),
        "good" => Some(TaxBand::Good),
        "moderate" => Some(TaxBand::Moderate),
        "high" => Some(TaxBand::High),
        "very high" => Some(TaxBand::VeryHigh),
        _ => None,
    };
    let band = world.band.get().expect("rate should be banded");
    assert_eq!(Some(band), expected, "unexpected band name {name}");
}

#[scenario(path = "tests/features/tax.feature", index = 0)]
fn ten_percent_is_excellent(world: TaxWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/tax.feature", index = 1)]
fn just_above_ten_is_good(world: TaxWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/tax.feature", index = 2)]
fn above_fifty_is_very_high(world: TaxWorld) {
    let _ = world;
}
