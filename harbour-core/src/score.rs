//! Score and result model.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::matcher::fold;

/// One of the six scored categories.
///
/// # Examples
/// ```
/// use harbour_core::Category;
///
/// assert_eq!(Category::Admin.as_str(), "admin");
/// assert_eq!("Administration".parse::<Category>(), Ok(Category::Admin));
/// assert_eq!(Category::Admin.title(), "Administration");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Countries, regions and landscape.
    Region,
    /// Temperature, humidity, sunshine and rain.
    Climate,
    /// Lifestyle, language and cultural amenities.
    Culture,
    /// Activities and travel.
    Hobbies,
    /// Healthcare, safety, governance and visas.
    Admin,
    /// Budget and tax.
    Cost,
}

impl Category {
    /// Every category in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Region,
        Self::Climate,
        Self::Culture,
        Self::Hobbies,
        Self::Admin,
        Self::Cost,
    ];

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Climate => "climate",
            Self::Culture => "culture",
            Self::Hobbies => "hobbies",
            Self::Admin => "admin",
            Self::Cost => "cost",
        }
    }

    /// Human-facing name used in insights and highlights.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Region => "Region",
            Self::Climate => "Climate",
            Self::Culture => "Culture",
            Self::Hobbies => "Hobbies",
            Self::Admin => "Administration",
            Self::Cost => "Cost",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Region => 0,
            Self::Climate => 1,
            Self::Culture => 2,
            Self::Hobbies => 3,
            Self::Admin => 4,
            Self::Cost => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold(s).as_str() {
            "region" => Ok(Self::Region),
            "climate" => Ok(Self::Climate),
            "culture" => Ok(Self::Culture),
            "hobbies" => Ok(Self::Hobbies),
            "admin" | "administration" => Ok(Self::Admin),
            "cost" | "costs" => Ok(Self::Cost),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

/// One entry in a score's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Factor {
    /// What was compared and how it went.
    pub description: String,
    /// Points gained (positive) or lost (negative).
    pub delta: i32,
}

impl Factor {
    /// Build a factor.
    pub fn new(description: impl Into<String>, delta: i32) -> Self {
        Self {
            description: description.into(),
            delta,
        }
    }
}

/// Output of a single category scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Category that produced the score.
    pub category: Category,
    /// Score in `0..=100`.
    pub score: u8,
    /// Ordered audit trail; never used for control flow.
    pub factors: Vec<Factor>,
}

impl ScoreResult {
    /// Build a result, clamping the score to 100.
    #[must_use]
    pub fn new(category: Category, score: u8, factors: Vec<Factor>) -> Self {
        Self {
            category,
            score: score.min(100),
            factors,
        }
    }

    /// Full marks for a category the user left open.
    #[must_use]
    pub fn open(category: Category) -> Self {
        Self::new(
            category,
            100,
            vec![Factor::new(
                format!("Open to any {} options", category.title().to_lowercase()),
                0,
            )],
        )
    }
}

/// Per-category scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    /// Region score.
    pub region: u8,
    /// Climate score.
    pub climate: u8,
    /// Culture score.
    pub culture: u8,
    /// Hobbies score.
    pub hobbies: u8,
    /// Administration score.
    pub admin: u8,
    /// Cost score.
    pub cost: u8,
}

impl CategoryScores {
    /// Score for `category`.
    #[must_use]
    pub const fn get(&self, category: Category) -> u8 {
        match category {
            Category::Region => self.region,
            Category::Climate => self.climate,
            Category::Culture => self.culture,
            Category::Hobbies => self.hobbies,
            Category::Admin => self.admin,
            Category::Cost => self.cost,
        }
    }

    /// Record the score for `category`, clamped to 100.
    pub fn set(&mut self, category: Category, score: u8) {
        let slot = match category {
            Category::Region => &mut self.region,
            Category::Climate => &mut self.climate,
            Category::Culture => &mut self.culture,
            Category::Hobbies => &mut self.hobbies,
            Category::Admin => &mut self.admin,
            Category::Cost => &mut self.cost,
        };
        *slot = score.min(100);
    }

    /// Iterate `(category, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    /// Unweighted mean of the six scores.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the mean is a plain average of six small integers"
    )]
    pub fn average(&self) -> f32 {
        let sum: u16 = self.iter().map(|(_, score)| u16::from(score)).sum();
        f32::from(sum) / 6.0_f32
    }
}

impl FromIterator<ScoreResult> for CategoryScores {
    fn from_iter<I: IntoIterator<Item = ScoreResult>>(iter: I) -> Self {
        let mut scores = Self::default();
        for result in iter {
            scores.set(result.category, result.score);
        }
        scores
    }
}

/// Overall verdict for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MatchQuality {
    /// Below 40.
    Poor,
    /// 40 to 54.
    Fair,
    /// 55 to 69.
    Good,
    /// 70 to 84.
    VeryGood,
    /// 85 and above.
    Excellent,
}

impl MatchQuality {
    /// Band a total score.
    ///
    /// # Examples
    /// ```
    /// use harbour_core::MatchQuality;
    ///
    /// assert_eq!(MatchQuality::from_score(85), MatchQuality::Excellent);
    /// assert_eq!(MatchQuality::from_score(84), MatchQuality::VeryGood);
    /// assert_eq!(MatchQuality::from_score(39), MatchQuality::Poor);
    /// ```
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            85.. => Self::Excellent,
            70..=84 => Self::VeryGood,
            55..=69 => Self::Good,
            40..=54 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much the category scores agree that this is a good match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Confidence {
    /// Average category score below 60.
    Low,
    /// Average category score from 60.
    Medium,
    /// Average category score from 80.
    High,
}

impl Confidence {
    /// Band an average category score.
    #[must_use]
    pub fn from_average(average: f32) -> Self {
        if average >= 80.0_f32 {
            Self::High
        } else if average >= 60.0_f32 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Complete outcome of matching one location against one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Weighted total in `0..=100`.
    pub total_score: u8,
    /// Verdict derived from the total.
    pub quality: MatchQuality,
    /// Per-category scores.
    pub category_scores: CategoryScores,
    /// Every factor from every category, in category order.
    pub all_factors: Vec<Factor>,
    /// Up to five factors with the largest deltas.
    pub top_factors: Vec<Factor>,
    /// Negative factors and data-quality warnings.
    pub warnings: Vec<String>,
    /// Fraction of categories with preferences.
    pub preference_coverage: f32,
    /// Caveat shown when a high score rests on few preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalization_note: Option<String>,
    /// One line per strong category.
    pub insights: Vec<String>,
    /// Short call-outs for the best categories.
    pub highlights: Vec<String>,
    /// Agreement between category scores.
    pub confidence: Confidence,
    /// Value-for-money rating, 2 to 5.
    pub value_rating: u8,
    /// Headline for the best category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appeal_statement: Option<String>,
}

/// Errors returned by [`CategoryWeights::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// The weights do not add up to 100.
    #[error("category weights must sum to 100, got {total}")]
    BadTotal {
        /// Sum of the supplied weights.
        total: u16,
    },
}

/// Percentage weight of each category in the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryWeights([u8; 6]);

impl CategoryWeights {
    /// Region 30, Climate 15, Culture 15, Hobbies 10, Administration 20,
    /// Cost 20.
    pub const CANONICAL: Self = Self([30, 15, 15, 10, 20, 20]);

    /// Build a weight table in canonical category order.
    ///
    /// # Errors
    ///
    /// Returns [`WeightsError::BadTotal`] when the weights do not sum to 100.
    ///
    /// # Examples
    /// ```
    /// use harbour_core::{CategoryWeights, WeightsError};
    ///
    /// assert!(CategoryWeights::new([20, 20, 20, 10, 15, 15]).is_ok());
    /// assert_eq!(
    ///     CategoryWeights::new([30, 30, 30, 30, 30, 30]),
    ///     Err(WeightsError::BadTotal { total: 180 })
    /// );
    /// ```
    pub fn new(weights: [u8; 6]) -> Result<Self, WeightsError> {
        let total: u16 = weights.iter().copied().map(u16::from).sum();
        if total != 100 {
            return Err(WeightsError::BadTotal { total });
        }
        Ok(Self(weights))
    }

    /// Weight for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> u8 {
        self.0.get(category.index()).copied().unwrap_or_default()
    }

    /// Weighted total of `scores`, rounded and clamped to `0..=100`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the weighted sum is divided by the weight total"
    )]
    pub fn total(&self, scores: &CategoryScores) -> u8 {
        let weighted: u16 = scores
            .iter()
            .map(|(category, score)| u16::from(score) * u16::from(self.get(category)))
            .sum();
        to_score(f32::from(weighted) / 100.0_f32)
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Round a raw score and clamp it to `0..=100`; non-finite input is zero.
///
/// # Examples
/// ```
/// use harbour_core::to_score;
///
/// assert_eq!(to_score(72.5), 73);
/// assert_eq!(to_score(140.0), 100);
/// assert_eq!(to_score(-3.0), 0);
/// assert_eq!(to_score(f32::NAN), 0);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and clamped to 0..=100 first"
)]
pub fn to_score(raw: f32) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0_f32, 100.0_f32) as u8
}
