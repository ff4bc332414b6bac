//! Dynamic safety score on a 0 to 10 scale.

use harbour_core::LocationRecord;
use harbour_core::matcher::mentions_any;

use crate::points::one_decimal;

const BASE_DEFAULT: f32 = 5.0_f32;
const BASE_CAP: f32 = 7.0_f32;

/// Report whether the record carries any safety data at all.
#[must_use]
pub fn has_safety_data(location: &LocationRecord) -> bool {
    location.safety_score.is_some() || location.crime_rate.is_some()
}

/// Safety score for `location`, rounded to one decimal.
///
/// The reported safety rating is capped at 7; crime rates and
/// environmental risk move it from there.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "safety sums a capped base with adjustments"
)]
pub fn safety_score(location: &LocationRecord) -> f32 {
    let base = location.safety_score.unwrap_or(BASE_DEFAULT).min(BASE_CAP);
    let raw = base + crime_impact(location.crime_rate) + environment(location);
    one_decimal(raw.clamp(0.0_f32, 10.0_f32))
}

fn crime_impact(crime_rate: Option<f32>) -> f32 {
    match crime_rate {
        Some(rate) if rate <= 20.0_f32 => 2.0_f32,
        Some(rate) if rate <= 40.0_f32 => 1.0_f32,
        Some(rate) if rate <= 60.0_f32 => 0.0_f32,
        Some(rate) if rate <= 80.0_f32 => -0.5_f32,
        Some(_) => -1.0_f32,
        None => 0.0_f32,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "environmental ratings are scaled into small credits"
)]
fn environment(location: &LocationRecord) -> f32 {
    let health = location
        .environmental_health_rating
        .map_or(0.3_f32, |rating| rating / 10.0_f32 * 0.6_f32);
    let disaster = location.natural_disaster_risk_score.map_or_else(
        || disaster_text_credit(location.natural_disaster_risk.as_deref()),
        |score| score / 10.0_f32 * 0.4_f32,
    );
    health + disaster
}

fn disaster_text_credit(text: Option<&str>) -> f32 {
    match text {
        Some(risk) if mentions_any(risk, &["low", "minimal"]) => 0.4_f32,
        Some(risk) if mentions_any(risk, &["moderate", "medium"]) => 0.2_f32,
        Some(risk) if mentions_any(risk, &["high", "severe"]) => 0.0_f32,
        _ => 0.2_f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbour_core::test_support::{arctic_town, coastal_city, sparse_location};
    use rstest::rstest;

    #[rstest]
    fn safe_city_keeps_a_high_score() {
        assert!((safety_score(&coastal_city()) - 8.7).abs() < 1e-4);
    }

    #[rstest]
    fn dangerous_town_scores_low() {
        assert!((safety_score(&arctic_town()) - 2.1).abs() < 1e-4);
    }

    #[rstest]
    fn missing_data_is_middling() {
        // 5.0 + 0 + 0.3 + 0.2
        assert!((safety_score(&sparse_location()) - 5.5).abs() < 1e-4);
        assert!(!has_safety_data(&sparse_location()));
    }

    #[rstest]
    #[case(Some(10.0), 2.0)]
    #[case(Some(40.0), 1.0)]
    #[case(Some(55.0), 0.0)]
    #[case(Some(75.0), -0.5)]
    #[case(Some(95.0), -1.0)]
    #[case(None, 0.0)]
    fn crime_rate_moves_the_score(#[case] rate: Option<f32>, #[case] expected: f32) {
        assert!((crime_impact(rate) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    fn base_rating_is_capped_at_seven() {
        let location = LocationRecord {
            safety_score: Some(10.0),
            crime_rate: Some(5.0),
            environmental_health_rating: Some(10.0),
            natural_disaster_risk_score: Some(10.0),
            ..LocationRecord::default()
        };
        assert!((safety_score(&location) - 10.0).abs() < 1e-4);
    }
}
