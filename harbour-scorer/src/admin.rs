//! Administration scoring: healthcare, safety, governance, visas,
//! environmental health and, for tax-sensitive users, tax.
//!
//! Each sub-attribute has a point budget and a preference tier. The tier
//! picks a ladder that turns the location's 0 to 10 rating into a share of
//! the budget. Sub-attributes without a preference earn their full budget;
//! those without location data earn a fixed credit. Tax points come from
//! the shared [`crate::tax`] sub-score.

use std::fmt;
use std::str::FromStr;

use harbour_core::matcher::{contains_ignore_case, fold};
use harbour_core::{
    AdminPreferences, Category, CategoryScorer, CostPreferences, Factor, LocationRecord,
    Preferences, ScoreResult,
};

use crate::healthcare::{has_healthcare_data, healthcare_score};
use crate::points::{delta, percentage, share};
use crate::safety::{has_safety_data, safety_score};
use crate::tax::tax_points;

const HEALTHCARE_POINTS: f32 = 30.0_f32;
const SAFETY_POINTS: f32 = 25.0_f32;
const GOVERNMENT_POINTS: f32 = 15.0_f32;
const STABILITY_POINTS: f32 = 10.0_f32;
const VISA_POINTS: f32 = 10.0_f32;
const ENVIRONMENT_POINTS: f32 = 15.0_f32;
const TAX_POINTS: f32 = 15.0_f32;

const HEALTHCARE_MISSING: f32 = 5.0_f32;
const SAFETY_MISSING: f32 = 5.0_f32;
const GOVERNMENT_MISSING: f32 = 3.0_f32;
const STABILITY_MISSING: f32 = 2.0_f32;
const ENVIRONMENT_MISSING: f32 = 7.0_f32;

const VISA_RETIREMENT: f32 = 8.0_f32;
const VISA_BASIC: f32 = 5.0_f32;
const ENVIRONMENT_THRESHOLD: f32 = 4.0_f32;

/// How demanding a user is about one administrative attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AdminTier {
    /// Anything workable.
    Basic,
    /// Proportional to quality.
    Functional,
    /// High standards.
    Good,
}

impl AdminTier {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Functional => "functional",
            Self::Good => "good",
        }
    }

    /// Strictest tier among `values`, ignoring unrecognised entries.
    #[must_use]
    pub fn strictest<S: AsRef<str>>(values: &[S]) -> Option<Self> {
        values
            .iter()
            .filter_map(|value| value.as_ref().parse().ok())
            .max()
    }

    /// Share of the budget earned for a 0 to 10 rating.
    ///
    /// # Examples
    ///
    /// ```
    /// use harbour_scorer::admin::AdminTier;
    ///
    /// assert!((AdminTier::Good.fraction(6.2) - 0.85).abs() < f32::EPSILON);
    /// assert!((AdminTier::Basic.fraction(6.2) - 1.0).abs() < f32::EPSILON);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the functional tier is linear in the rating"
    )]
    pub fn fraction(self, rating: f32) -> f32 {
        match self {
            Self::Functional => (rating / 10.0_f32).clamp(0.0_f32, 1.0_f32),
            Self::Good => match rating {
                r if r >= 7.0_f32 => 1.0_f32,
                r if r >= 6.0_f32 => 0.85_f32,
                r if r >= 5.0_f32 => 0.65_f32,
                r if r >= 4.0_f32 => 0.40_f32,
                _ => 0.15_f32,
            },
            Self::Basic => match rating {
                r if r >= 4.0_f32 => 1.0_f32,
                r if r >= 3.0_f32 => 0.70_f32,
                r if r >= 2.0_f32 => 0.40_f32,
                _ => 0.15_f32,
            },
        }
    }
}

impl fmt::Display for AdminTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s.trim()).as_str() {
            "basic" => Ok(Self::Basic),
            "functional" => Ok(Self::Functional),
            "good" => Ok(Self::Good),
            other => Err(format!("unknown tier '{other}'")),
        }
    }
}

/// Scores healthcare, safety, governance, visa access and environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminScorer;

impl CategoryScorer for AdminScorer {
    fn category(&self) -> Category {
        Category::Admin
    }

    fn score(&self, preferences: &Preferences, location: &LocationRecord) -> ScoreResult {
        score_admin(
            &preferences.admin,
            &preferences.cost,
            preferences.citizenship.as_deref(),
            location,
        )
    }
}

/// Score `location` against administration preferences.
///
/// Tax sensitivities declared under cost preferences add a tax part worth
/// 15 points. They never make an otherwise open category scored.
#[must_use]
pub fn score_admin(
    prefs: &AdminPreferences,
    tax: &CostPreferences,
    citizenship: Option<&str>,
    location: &LocationRecord,
) -> ScoreResult {
    if !prefs.has_any_preferences() {
        return ScoreResult::open(Category::Admin);
    }

    let mut factors = Vec::new();
    let mut earned = Vec::new();
    let mut available = Vec::new();

    let rated = [
        Rated {
            label: "Healthcare",
            tier: AdminTier::strictest(&prefs.healthcare),
            rating: has_healthcare_data(location).then(|| healthcare_score(location)),
            max: HEALTHCARE_POINTS,
            missing: HEALTHCARE_MISSING,
        },
        Rated {
            label: "Safety",
            tier: AdminTier::strictest(&prefs.safety),
            rating: has_safety_data(location).then(|| safety_score(location)),
            max: SAFETY_POINTS,
            missing: SAFETY_MISSING,
        },
        Rated {
            label: "Government efficiency",
            tier: AdminTier::strictest(&prefs.government_efficiency),
            rating: location.government_efficiency_rating.map(out_of_ten),
            max: GOVERNMENT_POINTS,
            missing: GOVERNMENT_MISSING,
        },
        Rated {
            label: "Political stability",
            tier: AdminTier::strictest(&prefs.political_stability),
            rating: location.political_stability_rating.map(out_of_ten),
            max: STABILITY_POINTS,
            missing: STABILITY_MISSING,
        },
    ];
    for part in &rated {
        earned.push(part.points(&mut factors));
        available.push(part.max);
    }

    earned.push(visa_points(prefs, citizenship, location, &mut factors));
    available.push(VISA_POINTS);

    if prefs.environmental_sensitivity {
        earned.push(environment_points(location, &mut factors));
        available.push(ENVIRONMENT_POINTS);
    }

    if tax.is_tax_sensitive() {
        let points = tax_points(tax, location, TAX_POINTS);
        factors.push(Factor::new("Tax fit", delta(points)));
        earned.push(points);
        available.push(TAX_POINTS);
    }

    let raw = sum(&earned);
    let score = percentage(raw, sum(&available));
    log::trace!("admin raw {raw} for {}", location.label());
    ScoreResult::new(Category::Admin, score, factors)
}

/// A sub-attribute judged on a 0 to 10 rating.
struct Rated {
    label: &'static str,
    tier: Option<AdminTier>,
    rating: Option<f32>,
    max: f32,
    missing: f32,
}

impl Rated {
    fn points(&self, factors: &mut Vec<Factor>) -> f32 {
        let Some(tier) = self.tier else {
            factors.push(Factor::new(
                format!("{}: no requirement", self.label),
                delta(self.max),
            ));
            return self.max;
        };
        let Some(rating) = self.rating else {
            factors.push(Factor::new(
                format!("{}: no data", self.label),
                delta(self.missing),
            ));
            return self.missing;
        };
        let points = share(self.max, tier.fraction(rating));
        factors.push(Factor::new(
            format!("{} rated {rating:.1} against {tier} expectations", self.label),
            delta(points),
        ));
        points
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "governance ratings are rescaled to 0-10"
)]
fn out_of_ten(rating: f32) -> f32 {
    rating / 10.0_f32
}

#[expect(
    clippy::float_arithmetic,
    reason = "admin parts are summed as raw points"
)]
fn sum(parts: &[f32]) -> f32 {
    parts.iter().sum()
}

fn visa_points(
    prefs: &AdminPreferences,
    citizenship: Option<&str>,
    location: &LocationRecord,
    factors: &mut Vec<Factor>,
) -> f32 {
    if prefs.visa.is_empty() {
        factors.push(Factor::new("Visa: no requirement", delta(VISA_POINTS)));
        return VISA_POINTS;
    }
    if let Some(country) = citizenship
        && (contains_ignore_case(&location.visa_on_arrival_countries, country)
            || contains_ignore_case(&location.easy_residency_countries, country))
    {
        factors.push(Factor::new(
            format!("Easy visa access for {country} citizens"),
            delta(VISA_POINTS),
        ));
        return VISA_POINTS;
    }
    if location.retirement_visa_available == Some(true) {
        factors.push(Factor::new(
            "Retirement visa available",
            delta(VISA_RETIREMENT),
        ));
        return VISA_RETIREMENT;
    }
    factors.push(Factor::new("Basic visa access only", delta(VISA_BASIC)));
    VISA_BASIC
}

fn environment_points(location: &LocationRecord, factors: &mut Vec<Factor>) -> f32 {
    match location.environmental_health_rating {
        Some(rating) if rating >= ENVIRONMENT_THRESHOLD => {
            factors.push(Factor::new(
                "Good environmental health",
                delta(ENVIRONMENT_POINTS),
            ));
            ENVIRONMENT_POINTS
        }
        Some(_) => {
            factors.push(Factor::new("Poor environmental health", 0));
            0.0_f32
        }
        None => {
            factors.push(Factor::new(
                "Environmental health: no data",
                delta(ENVIRONMENT_MISSING),
            ));
            ENVIRONMENT_MISSING
        }
    }
}
