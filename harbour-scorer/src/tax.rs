//! Tax sub-score shared by the cost and administration scorers.
//!
//! Rates the user is sensitive to are bucketed into five bands and averaged
//! into 80% of the tax budget. Treaty, haven and foreign-income status add
//! up to the remaining 20%.

use std::fmt;

use harbour_core::{CostPreferences, LocationRecord};

use crate::points::share;

const RATE_SHARE: f32 = 0.8_f32;
const BONUS_SHARE: f32 = 0.2_f32;
const NEUTRAL_SHARE: f32 = 0.5_f32;
const TREATY_BONUS: f32 = 0.4_f32;
const HAVEN_BONUS: f32 = 0.5_f32;
const UNTAXED_FOREIGN_INCOME_BONUS: f32 = 0.3_f32;

/// A kind of tax a user may be sensitive to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxKind {
    /// Personal income tax.
    Income,
    /// Property tax.
    Property,
    /// Sales or value-added tax.
    Sales,
}

impl TaxKind {
    /// Every tax kind.
    pub const ALL: [Self; 3] = [Self::Income, Self::Property, Self::Sales];

    /// Inclusive upper bounds of the excellent, good, moderate and high
    /// bands, in percent.
    #[must_use]
    pub const fn thresholds(self) -> [f32; 4] {
        match self {
            Self::Income => [10.0_f32, 20.0_f32, 30.0_f32, 40.0_f32],
            Self::Property => [1.0_f32, 2.0_f32, 3.0_f32, 4.0_f32],
            Self::Sales => [10.0_f32, 17.0_f32, 22.0_f32, 27.0_f32],
        }
    }

    /// Location's rate for this kind, in percent.
    #[must_use]
    pub const fn rate(self, location: &LocationRecord) -> Option<f32> {
        match self {
            Self::Income => location.income_tax_rate_pct,
            Self::Property => location.property_tax_rate_pct,
            Self::Sales => location.sales_tax_rate_pct,
        }
    }

    const fn is_sensitive(self, prefs: &CostPreferences) -> bool {
        match self {
            Self::Income => prefs.income_tax_sensitive,
            Self::Property => prefs.property_tax_sensitive,
            Self::Sales => prefs.sales_tax_sensitive,
        }
    }

    /// Band for `rate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use harbour_scorer::tax::{TaxBand, TaxKind};
    ///
    /// assert_eq!(TaxKind::Income.band(10.0), TaxBand::Excellent);
    /// assert_eq!(TaxKind::Income.band(10.01), TaxBand::Good);
    /// ```
    #[must_use]
    pub fn band(self, rate: f32) -> TaxBand {
        let [excellent, good, moderate, high] = self.thresholds();
        if rate <= excellent {
            TaxBand::Excellent
        } else if rate <= good {
            TaxBand::Good
        } else if rate <= moderate {
            TaxBand::Moderate
        } else if rate <= high {
            TaxBand::High
        } else {
            TaxBand::VeryHigh
        }
    }
}

impl fmt::Display for TaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Income => "income",
            Self::Property => "property",
            Self::Sales => "sales",
        })
    }
}

/// How favourable a tax rate is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaxBand {
    /// Above every threshold.
    VeryHigh,
    /// Within the fourth threshold.
    High,
    /// Within the third threshold.
    Moderate,
    /// Within the second threshold.
    Good,
    /// Within the first threshold.
    Excellent,
}

impl TaxBand {
    /// Bucket score from 1 (very high) to 5 (excellent).
    #[must_use]
    pub const fn bucket(self) -> u8 {
        match self {
            Self::VeryHigh => 1,
            Self::High => 2,
            Self::Moderate => 3,
            Self::Good => 4,
            Self::Excellent => 5,
        }
    }
}

/// Number of the location's three tax rates that are known.
#[must_use]
pub fn known_rates(location: &LocationRecord) -> usize {
    TaxKind::ALL
        .iter()
        .filter(|kind| kind.rate(location).is_some())
        .count()
}

/// Tax points for `location` out of `budget`.
///
/// Users with no tax sensitivities, and locations with none of the
/// relevant rates, earn half the budget.
#[must_use]
pub fn tax_points(prefs: &CostPreferences, location: &LocationRecord, budget: f32) -> f32 {
    let buckets: Vec<f32> = TaxKind::ALL
        .iter()
        .filter(|kind| kind.is_sensitive(prefs))
        .filter_map(|kind| kind.rate(location).map(|rate| kind.band(rate)))
        .map(|band| f32::from(band.bucket()))
        .collect();
    if buckets.is_empty() {
        return share(budget, NEUTRAL_SHARE);
    }
    let rates = share(share(budget, RATE_SHARE), mean_bucket(&buckets));
    let bonus = share(share(budget, BONUS_SHARE), bonus_fraction(location));
    combine(rates, bonus, budget)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "bucket scores are averaged and scaled to a fraction"
)]
fn mean_bucket(buckets: &[f32]) -> f32 {
    buckets.iter().sum::<f32>() / buckets.len() as f32 / 5.0_f32
}

#[expect(
    clippy::float_arithmetic,
    reason = "categorical bonuses are summed"
)]
fn bonus_fraction(location: &LocationRecord) -> f32 {
    let mut fraction = 0.0_f32;
    if location.tax_treaty_us == Some(true) {
        fraction += TREATY_BONUS;
    }
    if location.tax_haven_status == Some(true) {
        fraction += HAVEN_BONUS;
    }
    if location.foreign_income_taxed == Some(false) {
        fraction += UNTAXED_FOREIGN_INCOME_BONUS;
    }
    fraction
}

#[expect(clippy::float_arithmetic, reason = "rate and bonus points are summed")]
fn combine(rates: f32, bonus: f32, budget: f32) -> f32 {
    (rates + bonus).min(budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbour_core::test_support::{arctic_town, coastal_city};
    use rstest::rstest;

    fn income_sensitive() -> CostPreferences {
        CostPreferences {
            income_tax_sensitive: true,
            ..CostPreferences::default()
        }
    }

    #[rstest]
    #[case(TaxKind::Income, 10.0, TaxBand::Excellent)]
    #[case(TaxKind::Income, 10.01, TaxBand::Good)]
    #[case(TaxKind::Income, 40.0, TaxBand::High)]
    #[case(TaxKind::Income, 52.0, TaxBand::VeryHigh)]
    #[case(TaxKind::Property, 1.0, TaxBand::Excellent)]
    #[case(TaxKind::Property, 2.5, TaxBand::Moderate)]
    #[case(TaxKind::Sales, 17.0, TaxBand::Good)]
    #[case(TaxKind::Sales, 27.5, TaxBand::VeryHigh)]
    fn rates_fall_into_inclusive_bands(
        #[case] kind: TaxKind,
        #[case] rate: f32,
        #[case] expected: TaxBand,
    ) {
        assert_eq!(kind.band(rate), expected);
    }

    #[rstest]
    fn insensitive_users_earn_half() {
        let points = tax_points(&CostPreferences::default(), &arctic_town(), 15.0);
        assert!((points - 7.5).abs() < 1e-4);
    }

    #[rstest]
    fn unknown_rates_earn_half() {
        let points = tax_points(&income_sensitive(), &LocationRecord::default(), 15.0);
        assert!((points - 7.5).abs() < 1e-4);
    }

    #[rstest]
    fn treaty_adds_bonus() {
        // Income 24% is moderate: 3/5 of 12, plus 0.4 of 3.
        let points = tax_points(&income_sensitive(), &coastal_city(), 15.0);
        assert!((points - 8.4).abs() < 1e-4);
    }

    #[rstest]
    fn total_never_exceeds_budget() {
        let location = LocationRecord {
            income_tax_rate_pct: Some(0.0),
            tax_treaty_us: Some(true),
            tax_haven_status: Some(true),
            foreign_income_taxed: Some(false),
            ..LocationRecord::default()
        };
        let points = tax_points(&income_sensitive(), &location, 15.0);
        assert!((points - 15.0).abs() < 1e-4);
    }

    #[rstest]
    fn counts_known_rates() {
        assert_eq!(known_rates(&coastal_city()), 3);
        assert_eq!(known_rates(&LocationRecord::default()), 0);
    }
}
