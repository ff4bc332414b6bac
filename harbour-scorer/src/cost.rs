//! Cost scoring: overall budget fit, rent, healthcare spending and tax.
//!
//! The overall budget is judged against an adaptive ceiling. With only a
//! total budget the ceiling is 85 and tax takes the remaining 15. When a
//! rent or healthcare sub-budget is also given the ceiling drops to 40 so
//! rent (25) and healthcare (20) can be judged separately.

use harbour_core::{
    Category, CategoryScorer, CostPreferences, Factor, LocationRecord, Preferences, ScoreResult,
    to_score,
};

use crate::points::{delta, share};
use crate::tax::{known_rates, tax_points};

const TOTAL_ONLY_CEILING: f32 = 85.0_f32;
const WITH_SUB_BUDGETS_CEILING: f32 = 40.0_f32;
const RENT_POINTS: f32 = 25.0_f32;
const HEALTHCARE_POINTS: f32 = 20.0_f32;
const TAX_POINTS: f32 = 15.0_f32;
const SPARSE_TAX_PENALTY: f32 = 1.0_f32;
const CLOSE_TO_BUDGET: f32 = 0.8_f32;

/// Budget-to-cost ratios and the share of the ceiling each earns.
const BUDGET_TIERS: &[(f32, f32, &str)] = &[
    (2.0_f32, 1.00_f32, "Excellent value"),
    (1.5_f32, 0.93_f32, "Very comfortable budget"),
    (1.2_f32, 0.86_f32, "Comfortable budget"),
    (1.0_f32, 0.79_f32, "Within budget"),
    (0.9_f32, 0.64_f32, "Slightly over budget"),
    (0.8_f32, 0.43_f32, "Over budget"),
    (0.7_f32, 0.21_f32, "Well over budget"),
];
const OVER_BUDGET_SHARE: f32 = 0.07_f32;

/// Scores affordability against the user's budgets and tax sensitivities.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostScorer;

impl CategoryScorer for CostScorer {
    fn category(&self) -> Category {
        Category::Cost
    }

    fn score(&self, preferences: &Preferences, location: &LocationRecord) -> ScoreResult {
        score_cost(&preferences.cost, location)
    }
}

/// Score `location` against cost preferences.
///
/// # Examples
///
/// ```
/// use harbour_core::{CostPreferences, LocationRecord};
/// use harbour_scorer::cost::score_cost;
///
/// let prefs = CostPreferences {
///     total_monthly_budget: Some(3000.0),
///     ..CostPreferences::default()
/// };
/// let location = LocationRecord {
///     cost_of_living_usd: Some(1500.0),
///     ..LocationRecord::default()
/// };
/// // Full ceiling of 85 plus the neutral half of the tax budget.
/// assert_eq!(score_cost(&prefs, &location).score, 93);
/// ```
#[must_use]
pub fn score_cost(prefs: &CostPreferences, location: &LocationRecord) -> ScoreResult {
    if !prefs.has_any_preferences() {
        return ScoreResult::open(Category::Cost);
    }

    let mut factors = Vec::new();
    let ceiling = if prefs.has_sub_budgets() {
        WITH_SUB_BUDGETS_CEILING
    } else {
        TOTAL_ONLY_CEILING
    };

    let mut parts = vec![budget_points(prefs, location, ceiling, &mut factors)];
    if prefs.has_sub_budgets() {
        parts.push(fit_points(
            "Rent",
            prefs.max_monthly_rent,
            location.typical_rent_1bed,
            RENT_POINTS,
            &mut factors,
        ));
        parts.push(fit_points(
            "Healthcare costs",
            prefs.monthly_healthcare_budget,
            location.healthcare_cost_monthly,
            HEALTHCARE_POINTS,
            &mut factors,
        ));
    }
    parts.push(tax_part(prefs, location, &mut factors));

    let raw = sum(&parts);
    let score = to_score(raw);
    log::trace!("cost raw {raw} for {}", location.label());
    ScoreResult::new(Category::Cost, score, factors)
}

/// Share of the budget ceiling earned for a budget-to-cost ratio.
///
/// # Examples
///
/// ```
/// use harbour_scorer::cost::budget_share;
///
/// assert!((budget_share(2.5) - 1.0).abs() < f32::EPSILON);
/// assert!((budget_share(0.95) - 0.64).abs() < f32::EPSILON);
/// assert!((budget_share(0.2) - 0.07).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn budget_share(ratio: f32) -> f32 {
    tier(ratio).map_or(OVER_BUDGET_SHARE, |(_, share_of_ceiling, _)| share_of_ceiling)
}

fn tier(ratio: f32) -> Option<(f32, f32, &'static str)> {
    BUDGET_TIERS
        .iter()
        .copied()
        .find(|(minimum, _, _)| ratio >= *minimum)
}

fn budget_points(
    prefs: &CostPreferences,
    location: &LocationRecord,
    ceiling: f32,
    factors: &mut Vec<Factor>,
) -> f32 {
    let Some(budget) = prefs.total_monthly_budget else {
        factors.push(Factor::new("No overall budget limit", delta(ceiling)));
        return ceiling;
    };
    let Some(cost) = location.monthly_cost() else {
        let points = missing_cost_points(ceiling);
        factors.push(Factor::new("Cost of living: no data", delta(points)));
        return points;
    };
    let ratio = budget_ratio(budget, cost);
    let label = tier(ratio).map_or("Over budget", |(_, _, label)| label);
    let points = share(ceiling, budget_share(ratio));
    factors.push(Factor::new(
        format!("{label} (ratio {ratio:.2})"),
        delta(points),
    ));
    points
}

/// Credit for an unknown cost of living, scaled to the ceiling.
#[expect(
    clippy::float_arithmetic,
    reason = "the missing-data credit scales with the ceiling"
)]
fn missing_cost_points(ceiling: f32) -> f32 {
    (ceiling * 20.0_f32 / 70.0_f32).round()
}

#[expect(
    clippy::float_arithmetic,
    reason = "affordability is a budget-to-cost ratio"
)]
fn budget_ratio(budget: f32, cost: f32) -> f32 {
    budget / cost
}

/// Full points when the budget covers the cost, half when it comes within
/// 80%, none otherwise. Missing cost data earns half; no budget earns full.
fn fit_points(
    label: &str,
    budget: Option<f32>,
    cost: Option<f32>,
    max: f32,
    factors: &mut Vec<Factor>,
) -> f32 {
    let half = share(max, 0.5_f32);
    let (points, verdict) = match (budget, cost) {
        (None, _) => (max, "no limit"),
        (Some(_), None) => (half, "no data"),
        (Some(limit), Some(actual)) if limit >= actual => (max, "within budget"),
        (Some(limit), Some(actual)) if limit >= share(actual, CLOSE_TO_BUDGET) => {
            (half, "slightly over budget")
        }
        (Some(_), Some(_)) => (0.0_f32, "over budget"),
    };
    factors.push(Factor::new(format!("{label}: {verdict}"), delta(points)));
    points
}

fn tax_part(prefs: &CostPreferences, location: &LocationRecord, factors: &mut Vec<Factor>) -> f32 {
    let points = tax_points(prefs, location, TAX_POINTS);
    if prefs.is_tax_sensitive() && known_rates(location) < 2 {
        let penalised = reduce(points, SPARSE_TAX_PENALTY);
        factors.push(Factor::new("Tax data incomplete", -delta(SPARSE_TAX_PENALTY)));
        return penalised;
    }
    factors.push(Factor::new("Tax fit", delta(points)));
    points
}

#[expect(clippy::float_arithmetic, reason = "penalties subtract points")]
fn reduce(points: f32, penalty: f32) -> f32 {
    (points - penalty).max(0.0_f32)
}

#[expect(
    clippy::float_arithmetic,
    reason = "cost parts are summed as raw points"
)]
fn sum(parts: &[f32]) -> f32 {
    parts.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbour_core::test_support::{
        arctic_town, coastal_city, coastal_city_preferences, parsed, sparse_location,
    };
    use rstest::rstest;

    fn total_only(budget: f32) -> CostPreferences {
        CostPreferences {
            total_monthly_budget: Some(budget),
            ..CostPreferences::default()
        }
    }

    #[rstest]
    fn no_preferences_scores_full_marks() {
        assert_eq!(
            score_cost(&CostPreferences::default(), &arctic_town()).score,
            100
        );
    }

    #[rstest]
    #[case(2.0, 1.00)]
    #[case(1.5, 0.93)]
    #[case(1.2, 0.86)]
    #[case(1.0, 0.79)]
    #[case(0.9, 0.64)]
    #[case(0.8, 0.43)]
    #[case(0.7, 0.21)]
    #[case(0.69, 0.07)]
    fn ratio_tiers(#[case] ratio: f32, #[case] expected: f32) {
        assert!((budget_share(ratio) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    fn affordable_city_with_sub_budgets() {
        let prefs = parsed(&coastal_city_preferences());
        // 40 + 25 + 20 + 7.5
        assert_eq!(score_cost(&prefs.cost, &coastal_city()).score, 93);
    }

    #[rstest]
    fn expensive_town_with_sub_budgets() {
        let prefs = parsed(&coastal_city_preferences());
        // 2.8 + 0 + 0 + 7.5
        assert_eq!(score_cost(&prefs.cost, &arctic_town()).score, 10);
    }

    #[rstest]
    fn total_only_uses_the_high_ceiling() {
        // Ratio 1.0: 0.79 of 85 plus 7.5.
        assert_eq!(score_cost(&total_only(2000.0), &coastal_city()).score, 75);
    }

    #[rstest]
    fn missing_cost_earns_scaled_credit() {
        // round(85 * 20 / 70) = 24, plus 7.5.
        assert_eq!(score_cost(&total_only(2000.0), &sparse_location()).score, 32);
    }

    #[rstest]
    #[case(Some(1000.0), Some(900.0), 25.0)]
    #[case(Some(800.0), Some(900.0), 12.5)]
    #[case(Some(500.0), Some(900.0), 0.0)]
    #[case(Some(500.0), None, 12.5)]
    #[case(None, Some(900.0), 25.0)]
    fn rent_fit(#[case] budget: Option<f32>, #[case] rent: Option<f32>, #[case] expected: f32) {
        let mut factors = Vec::new();
        let points = fit_points("Rent", budget, rent, RENT_POINTS, &mut factors);
        assert!((points - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    fn sparse_tax_data_costs_a_point() {
        let prefs = CostPreferences {
            income_tax_sensitive: true,
            ..CostPreferences::default()
        };
        // Open budget of 85, neutral tax 7.5, penalty 1.
        let result = score_cost(&prefs, &sparse_location());
        assert_eq!(result.score, 92);
        assert!(result.factors.iter().any(|factor| factor.delta < 0));
    }
}
