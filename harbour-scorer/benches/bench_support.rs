//! Deterministic location generation for the batch scoring benchmarks.

use harbour_core::LocationRecord;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

const COUNTRIES: &[&str] = &["Spain", "Portugal", "Italy", "Greece", "Mexico", "Thailand"];
const FEATURES: &[&str] = &["coastal", "mountain", "island", "lake", "river", "plains"];
const CLIMATES: &[&str] = &["hot", "warm", "mild", "cool", "cold"];
const PACES: &[&str] = &["relaxed", "moderate", "fast"];
const HOBBIES: &[&str] = &["Golf", "Sailing", "Hiking", "Skiing", "Wine Tasting", "Tennis"];

fn pick(rng: &mut ChaCha8Rng, options: &[&str]) -> Option<String> {
    options.choose(rng).map(|value| (*value).to_owned())
}

/// Generate `count` partially populated locations.
///
/// Roughly one field in five is left empty so the missing-data paths are
/// exercised alongside the full ones.
#[must_use]
pub fn generate_locations(count: usize, seed: u64) -> Vec<LocationRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let sparse = rng.gen_bool(0.2);
            LocationRecord {
                name: Some(format!("Town {i}")),
                country: pick(&mut rng, COUNTRIES),
                geographic_features: pick(&mut rng, FEATURES).into_iter().collect(),
                summer_climate: pick(&mut rng, CLIMATES),
                winter_climate: pick(&mut rng, CLIMATES),
                avg_temp_summer: (!sparse).then(|| rng.gen_range(10.0..35.0)),
                avg_temp_winter: (!sparse).then(|| rng.gen_range(-15.0..22.0)),
                pace_of_life: pick(&mut rng, PACES),
                top_hobbies: pick(&mut rng, HOBBIES).into_iter().collect(),
                healthcare_score: (!sparse).then(|| rng.gen_range(2.0..9.5)),
                safety_score: (!sparse).then(|| rng.gen_range(2.0..9.5)),
                cost_of_living_usd: (!sparse).then(|| rng.gen_range(900.0..5000.0)),
                typical_rent_1bed: (!sparse).then(|| rng.gen_range(300.0..2500.0)),
                income_tax_rate_pct: rng.gen_bool(0.7).then(|| rng.gen_range(0.0..45.0)),
                ..LocationRecord::default()
            }
        })
        .collect()
}
