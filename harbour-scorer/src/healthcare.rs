//! Dynamic healthcare score on a 0 to 10 scale.
//!
//! Three capped parts: quality (baseline rating and hospital count, up to
//! 4), accessibility (hospital distance, emergency services and
//! English-speaking doctors, up to 3) and cost (insurance and monthly
//! healthcare cost, up to 3).

use harbour_core::LocationRecord;
use harbour_core::matcher::mentions_any;

use crate::points::one_decimal;

const QUALITY_CAP: f32 = 4.0_f32;
const ACCESS_CAP: f32 = 3.0_f32;
const COST_CAP: f32 = 3.0_f32;
const BASELINE_CAP: f32 = 3.0_f32;
const BASELINE_DEFAULT: f32 = 1.5_f32;

/// Report whether the record carries any healthcare data at all.
#[must_use]
pub fn has_healthcare_data(location: &LocationRecord) -> bool {
    location.healthcare_score.is_some()
        || location.hospital_count.is_some()
        || location.nearest_major_hospital_km.is_some()
        || location.emergency_services_quality.is_some()
}

/// Healthcare score for `location`, rounded to one decimal.
///
/// # Examples
///
/// ```
/// use harbour_core::LocationRecord;
/// use harbour_scorer::healthcare::healthcare_score;
///
/// let clinic_town = LocationRecord {
///     healthcare_score: Some(10.0),
///     hospital_count: Some(12),
///     ..LocationRecord::default()
/// };
/// assert!((healthcare_score(&clinic_town) - 4.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn healthcare_score(location: &LocationRecord) -> f32 {
    one_decimal(total(&[
        quality(location).min(QUALITY_CAP),
        accessibility(location).min(ACCESS_CAP),
        cost(location).min(COST_CAP),
    ]))
}

#[expect(
    clippy::float_arithmetic,
    reason = "healthcare parts are summed and capped"
)]
fn total(parts: &[f32]) -> f32 {
    parts.iter().sum::<f32>().clamp(0.0_f32, 10.0_f32)
}

#[expect(
    clippy::float_arithmetic,
    reason = "quality scales the baseline rating"
)]
fn quality(location: &LocationRecord) -> f32 {
    let baseline = location
        .healthcare_score
        .map_or(BASELINE_DEFAULT, |rating| (rating * 0.3_f32).min(BASELINE_CAP));
    let hospitals = match location.hospital_count {
        Some(n) if n >= 10 => 1.0_f32,
        Some(n) if n >= 5 => 0.7_f32,
        Some(n) if n >= 2 => 0.5_f32,
        Some(1) => 0.3_f32,
        _ => 0.0_f32,
    };
    baseline + hospitals
}

#[expect(
    clippy::float_arithmetic,
    reason = "accessibility sums distance and service credits"
)]
fn accessibility(location: &LocationRecord) -> f32 {
    let distance = match location.nearest_major_hospital_km {
        Some(km) if km <= 5.0_f32 => 1.5_f32,
        Some(km) if km <= 15.0_f32 => 1.0_f32,
        Some(km) if km <= 30.0_f32 => 0.7_f32,
        Some(km) if km <= 50.0_f32 => 0.4_f32,
        _ => 0.0_f32,
    };
    let emergency = match location.emergency_services_quality {
        Some(rating) if rating >= 8.0_f32 => 1.0_f32,
        Some(rating) if rating >= 6.0_f32 => 0.7_f32,
        Some(rating) if rating >= 4.0_f32 => 0.4_f32,
        Some(rating) if rating >= 2.0_f32 => 0.2_f32,
        _ => 0.0_f32,
    };
    let english = if location.english_speaking_doctors == Some(true) {
        0.5_f32
    } else {
        0.0_f32
    };
    distance + emergency + english
}

#[expect(
    clippy::float_arithmetic,
    reason = "cost sums insurance and price credits"
)]
fn cost(location: &LocationRecord) -> f32 {
    let insurance = location.insurance_availability_rating.map_or_else(
        || {
            location
                .health_insurance_acceptance
                .as_deref()
                .map_or(0.0_f32, acceptance_credit)
        },
        |rating| rating / 10.0_f32 * 1.5_f32,
    );
    let price = match location.healthcare_cost_monthly {
        Some(usd) if usd <= 200.0_f32 => 1.5_f32,
        Some(usd) if usd <= 400.0_f32 => 1.2_f32,
        Some(usd) if usd <= 800.0_f32 => 0.8_f32,
        Some(usd) if usd <= 1500.0_f32 => 0.4_f32,
        _ => 0.0_f32,
    };
    insurance + price
}

fn acceptance_credit(text: &str) -> f32 {
    if mentions_any(text, &["widely", "universal"]) {
        1.5_f32
    } else if mentions_any(text, &["common"]) {
        1.0_f32
    } else if mentions_any(text, &["limited", "some"]) {
        0.5_f32
    } else {
        0.0_f32
    }
}
