//! Small numeric helpers shared by the category scorers.

use harbour_core::to_score;

/// `fraction` of `max`, for partial credit.
#[expect(
    clippy::float_arithmetic,
    reason = "partial credit scales an attribute budget"
)]
pub(crate) fn share(max: f32, fraction: f32) -> f32 {
    max * fraction
}

/// Earned points as a percentage of the available points.
///
/// Zero available points means nothing could be judged, which is full
/// credit.
#[expect(
    clippy::float_arithmetic,
    reason = "scores are ratios of earned to available points"
)]
pub(crate) fn percentage(earned: f32, available: f32) -> u8 {
    if available <= 0.0_f32 {
        return 100;
    }
    to_score(earned / available * 100.0_f32)
}

/// `part` of `whole` as a fraction; zero when `whole` is zero.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "activity counts are tiny"
)]
pub(crate) fn ratio(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        return 0.0_f32;
    }
    part as f32 / whole as f32
}

/// Round to one decimal place.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to one decimal needs a scale and unscale"
)]
pub(crate) fn one_decimal(value: f32) -> f32 {
    (value * 10.0_f32).round() / 10.0_f32
}

/// Whole-point delta for a factor.
#[expect(
    clippy::cast_possible_truncation,
    reason = "factor deltas are small and rounded first"
)]
pub(crate) fn delta(points: f32) -> i32 {
    if points.is_finite() {
        points.round() as i32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(45.0, 90.0, 50)]
    #[case(0.0, 90.0, 0)]
    #[case(3.0, 0.0, 100)]
    fn percentage_of_available(#[case] earned: f32, #[case] available: f32, #[case] expected: u8) {
        assert_eq!(percentage(earned, available), expected);
    }

    #[rstest]
    #[case(9.25, 9.3)]
    #[case(8.74, 8.7)]
    #[case(0.0, 0.0)]
    fn rounds_to_one_decimal(#[case] raw: f32, #[case] expected: f32) {
        assert!((one_decimal(raw) - expected).abs() < 1e-4);
    }

    #[rstest]
    fn deltas_round_half_away_from_zero() {
        assert_eq!(delta(2.5), 3);
        assert_eq!(delta(-0.5), -1);
        assert_eq!(delta(f32::NAN), 0);
    }
}
