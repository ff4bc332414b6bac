//! Normalised user preferences.
//!
//! [`Preferences::parse`] is the only place that knows about the loose input
//! shapes (scalars or arrays, nested or flat keys, placeholder strings).
//! Everything downstream works with the closed structures defined here.

mod parser;

use serde::Serialize;

/// Importance rating for quality-driven culture attributes.
///
/// Ratings run from 1 ("don't care") to 5 ("essential").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Importance(u8);

impl Importance {
    /// The user does not care about the attribute.
    pub const DONT_CARE: Self = Self(1);
    /// The attribute matters somewhat.
    pub const MODERATE: Self = Self(3);
    /// The attribute is essential.
    pub const ESSENTIAL: Self = Self(5);

    /// Build a rating, clamping to `1..=5`.
    #[must_use]
    pub const fn new(rating: u8) -> Self {
        if rating < 1 {
            Self(1)
        } else if rating > 5 {
            Self(5)
        } else {
            Self(rating)
        }
    }

    /// Raw rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Report whether the rating expresses any preference.
    #[must_use]
    pub const fn is_expressed(self) -> bool {
        self.0 > 1
    }
}

impl Default for Importance {
    fn default() -> Self {
        Self::DONT_CARE
    }
}

/// Where and what kind of landscape the user wants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionPreferences {
    /// Preferred countries.
    pub countries: Vec<String>,
    /// Broad regions such as "Mediterranean".
    pub regions: Vec<String>,
    /// First-level administrative regions (states, provinces).
    pub provinces: Vec<String>,
    /// Geographic features such as "coastal".
    pub geographic_features: Vec<String>,
    /// Vegetation types such as "mediterranean".
    pub vegetation_types: Vec<String>,
}

impl RegionPreferences {
    /// Report whether any region preference is present.
    #[must_use]
    pub fn has_any_preferences(&self) -> bool {
        !(self.countries.is_empty()
            && self.regions.is_empty()
            && self.provinces.is_empty()
            && self.geographic_features.is_empty()
            && self.vegetation_types.is_empty())
    }
}

/// Climate wishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClimatePreferences {
    /// Summer bands: mild, warm, hot.
    pub summer: Vec<String>,
    /// Winter bands: cold, cool, mild.
    pub winter: Vec<String>,
    /// Seasonal focus.
    pub seasonal: Vec<String>,
    /// Humidity levels.
    pub humidity: Vec<String>,
    /// Sunshine levels.
    pub sunshine: Vec<String>,
    /// Precipitation levels.
    pub precipitation: Vec<String>,
}

impl ClimatePreferences {
    /// Report whether any climate preference is present.
    #[must_use]
    pub fn has_any_preferences(&self) -> bool {
        !(self.summer.is_empty()
            && self.winter.is_empty()
            && self.seasonal.is_empty()
            && self.humidity.is_empty()
            && self.sunshine.is_empty()
            && self.precipitation.is_empty())
    }
}

/// Language comfort.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguagePreferences {
    /// Comfort options such as `english_only` or `willing_to_learn`.
    pub comfort: Vec<String>,
    /// Languages the user already speaks.
    pub already_speak: Vec<String>,
}

impl LanguagePreferences {
    /// Report whether any language preference is present.
    #[must_use]
    pub fn has_any_preferences(&self) -> bool {
        !(self.comfort.is_empty() && self.already_speak.is_empty())
    }
}

/// Lifestyle and cultural wishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CulturePreferences {
    /// Living environment: urban, suburban, rural.
    pub urban_rural: Vec<String>,
    /// Pace of life: fast, moderate, relaxed.
    pub pace_of_life: Vec<String>,
    /// Expat community size: large, moderate, small.
    pub expat_community: Vec<String>,
    /// Language comfort.
    pub language: LanguagePreferences,
    /// Importance of dining and nightlife.
    pub dining_nightlife: Importance,
    /// Importance of cultural events.
    pub cultural_events: Importance,
    /// Importance of museums.
    pub museums: Importance,
    /// Traditional, balanced or progressive lean.
    pub traditional_progressive: Vec<String>,
    /// Social atmosphere: quiet, friendly, vibrant.
    pub social_atmosphere: Vec<String>,
}

impl CulturePreferences {
    /// Report whether any culture preference is present.
    ///
    /// Importance ratings only count when above "don't care".
    #[must_use]
    pub fn has_any_preferences(&self) -> bool {
        !(self.urban_rural.is_empty()
            && self.pace_of_life.is_empty()
            && self.expat_community.is_empty()
            && !self.language.has_any_preferences()
            && !self.dining_nightlife.is_expressed()
            && !self.cultural_events.is_expressed()
            && !self.museums.is_expressed()
            && self.traditional_progressive.is_empty()
            && self.social_atmosphere.is_empty())
    }
}

/// Activities and travel habits.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HobbyPreferences {
    /// Selected activities.
    pub activities: Vec<String>,
    /// Selected interests.
    pub interests: Vec<String>,
    /// Free-text physical activities.
    pub custom_physical: Vec<String>,
    /// Free-text hobbies.
    pub custom_hobbies: Vec<String>,
    /// How often the user travels: `frequent`, `occasional`, `rare`.
    pub travel_frequency: Option<String>,
}

impl HobbyPreferences {
    /// Report whether any hobby preference is present.
    #[must_use]
    pub fn has_any_preferences(&self) -> bool {
        !(self.activities.is_empty()
            && self.interests.is_empty()
            && self.custom_physical.is_empty()
            && self.custom_hobbies.is_empty()
            && self.travel_frequency.is_none())
    }

    /// Every requested activity in input order, before any expansion.
    pub fn requested(&self) -> impl Iterator<Item = &str> {
        self.activities
            .iter()
            .chain(&self.interests)
            .chain(&self.custom_physical)
            .chain(&self.custom_hobbies)
            .map(String::as_str)
    }
}

/// Administrative expectations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminPreferences {
    /// Healthcare tier: basic, functional, good.
    pub healthcare: Vec<String>,
    /// Safety tier.
    pub safety: Vec<String>,
    /// Government efficiency tier.
    pub government_efficiency: Vec<String>,
    /// Political stability tier.
    pub political_stability: Vec<String>,
    /// Visa and residency tier.
    pub visa: Vec<String>,
    /// Intended stay, for example `long_term`.
    pub stay_duration: Vec<String>,
    /// Whether the user declared sensitivity to environmental health.
    pub environmental_sensitivity: bool,
}

impl AdminPreferences {
    /// Report whether any administration preference is present.
    #[must_use]
    pub fn has_any_preferences(&self) -> bool {
        !(self.healthcare.is_empty()
            && self.safety.is_empty()
            && self.government_efficiency.is_empty()
            && self.political_stability.is_empty()
            && self.visa.is_empty()
            && self.stay_duration.is_empty()
            && !self.environmental_sensitivity)
    }
}

/// Budget limits and tax sensitivities.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostPreferences {
    /// Most the user could spend per month in total.
    pub total_monthly_budget: Option<f32>,
    /// Most the user could spend on rent.
    pub max_monthly_rent: Option<f32>,
    /// Most the user could spend on healthcare.
    pub monthly_healthcare_budget: Option<f32>,
    /// Sensitive to income tax.
    pub income_tax_sensitive: bool,
    /// Sensitive to property tax.
    pub property_tax_sensitive: bool,
    /// Sensitive to sales tax.
    pub sales_tax_sensitive: bool,
}

impl CostPreferences {
    /// Report whether any cost preference is present.
    #[must_use]
    pub const fn has_any_preferences(&self) -> bool {
        self.total_monthly_budget.is_some()
            || self.max_monthly_rent.is_some()
            || self.monthly_healthcare_budget.is_some()
            || self.is_tax_sensitive()
    }

    /// Report whether any tax sensitivity is declared.
    #[must_use]
    pub const fn is_tax_sensitive(&self) -> bool {
        self.income_tax_sensitive || self.property_tax_sensitive || self.sales_tax_sensitive
    }

    /// Report whether a rent or healthcare sub-budget was given.
    #[must_use]
    pub const fn has_sub_budgets(&self) -> bool {
        self.max_monthly_rent.is_some() || self.monthly_healthcare_budget.is_some()
    }
}

/// A user's preferences, normalised into six categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preferences {
    /// Region wishes.
    pub region: RegionPreferences,
    /// Climate wishes.
    pub climate: ClimatePreferences,
    /// Culture wishes.
    pub culture: CulturePreferences,
    /// Hobby wishes.
    pub hobbies: HobbyPreferences,
    /// Administration wishes.
    pub admin: AdminPreferences,
    /// Cost wishes.
    pub cost: CostPreferences,
    /// Citizenship used for visa checks.
    pub citizenship: Option<String>,
}

impl Preferences {
    /// Normalise a loosely shaped preference document.
    ///
    /// Never fails: `null`, non-object input and unknown shapes produce
    /// empty preferences.
    ///
    /// # Examples
    ///
    /// ```
    /// use harbour_core::Preferences;
    /// use serde_json::json;
    ///
    /// let prefs = Preferences::parse(&json!({
    ///     "costs": { "total_monthly_budget": [2000, 3500] }
    /// }));
    /// assert_eq!(prefs.cost.total_monthly_budget, Some(3500.0));
    /// assert!(!Preferences::parse(&json!(null)).has_any_preferences());
    /// ```
    #[must_use]
    pub fn parse(raw: &serde_json::Value) -> Self {
        parser::parse(raw)
    }

    /// Report whether any category holds a preference.
    #[must_use]
    pub fn has_any_preferences(&self) -> bool {
        self.category_flags().iter().any(|flag| *flag)
    }

    /// Per-category preference flags in canonical category order.
    #[must_use]
    pub fn category_flags(&self) -> [bool; 6] {
        [
            self.region.has_any_preferences(),
            self.climate.has_any_preferences(),
            self.culture.has_any_preferences(),
            self.hobbies.has_any_preferences(),
            self.admin.has_any_preferences(),
            self.cost.has_any_preferences(),
        ]
    }

    /// Fraction of the six categories that carry preferences.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "coverage is a simple ratio of populated categories"
    )]
    pub fn coverage(&self) -> f32 {
        let count = self.category_flags().iter().filter(|flag| **flag).count();
        let populated = u8::try_from(count).unwrap_or(u8::MAX);
        f32::from(populated) / 6.0_f32
    }
}
