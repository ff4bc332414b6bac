//! Attribute inference helpers.
//!
//! Location records label the same concept many ways ("high", "Humid",
//! "very humid") and often carry a statistic or a description instead of a
//! label. The helpers here map all of that onto the canonical vocabulary the
//! adjacency tables use, and report which tier produced the value so the
//! scorers can lower the attainable points for weaker evidence.

use crate::LocationRecord;
use crate::matcher::{eq_ignore_case, fold, mentions_any};

/// The evidence an inferred value came from, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InferenceSource {
    /// An explicit label on the record.
    Label,
    /// A numeric statistic on the record.
    Numeric,
    /// A keyword in free-text description.
    Description,
}

/// A canonical value and the evidence it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inferred {
    /// Canonical value.
    pub value: String,
    /// Evidence tier.
    pub source: InferenceSource,
}

impl Inferred {
    fn new(value: impl Into<String>, source: InferenceSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }
}

type Aliases = (&'static str, &'static [&'static str]);

/// Raw label aliases for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    name: &'static str,
    entries: &'static [Aliases],
}

impl Vocabulary {
    const fn new(name: &'static str, entries: &'static [Aliases]) -> Self {
        Self { name, entries }
    }

    /// Attribute the vocabulary covers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Canonical value for a known raw label.
    ///
    /// Labels are compared after folding case and turning spaces and dashes
    /// into underscores, so `"Very Hot"` and `"very_hot"` are the same.
    #[must_use]
    pub fn canonical(&self, raw: &str) -> Option<&'static str> {
        let key = label_key(raw);
        self.entries
            .iter()
            .find(|(canonical, aliases)| {
                eq_ignore_case(canonical, &key) || aliases.iter().any(|alias| *alias == key)
            })
            .map(|(canonical, _)| *canonical)
    }

    /// Canonical value, or the normalised raw label when it is unknown.
    #[must_use]
    pub fn normalise(&self, raw: &str) -> String {
        self.canonical(raw)
            .map_or_else(|| label_key(raw), ToOwned::to_owned)
    }
}

fn label_key(raw: &str) -> String {
    fold(raw).replace([' ', '-'], "_")
}

/// Humidity labels.
pub static HUMIDITY_LABELS: Vocabulary = Vocabulary::new(
    "humidity",
    &[
        ("dry", &["low", "arid", "very_dry", "semi_arid"]),
        ("balanced", &["moderate", "medium", "average", "comfortable"]),
        ("humid", &["high", "very_humid", "very_high", "tropical", "muggy"]),
    ],
);

/// Sunshine labels.
pub static SUNSHINE_LABELS: Vocabulary = Vocabulary::new(
    "sunshine",
    &[
        (
            "often_sunny",
            &["abundant", "sunny", "very_sunny", "mostly_sunny", "high"],
        ),
        ("balanced", &["moderate", "partly_sunny", "average", "medium"]),
        (
            "less_sunny",
            &["often_cloudy", "cloudy", "overcast", "low", "limited"],
        ),
    ],
);

/// Precipitation labels.
pub static PRECIPITATION_LABELS: Vocabulary = Vocabulary::new(
    "precipitation",
    &[
        ("mostly_dry", &["dry", "low", "arid", "very_dry"]),
        ("balanced", &["moderate", "average", "medium"]),
        ("less_dry", &["wet", "rainy", "high", "very_wet", "often_rainy"]),
    ],
);

/// Summer climate labels.
pub static SUMMER_LABELS: Vocabulary = Vocabulary::new(
    "summer",
    &[
        ("mild", &["cool", "moderate", "pleasant", "temperate"]),
        ("warm", &["warm_summer"]),
        ("hot", &["very_hot", "scorching", "hot_summer"]),
    ],
);

/// Winter climate labels.
pub static WINTER_LABELS: Vocabulary = Vocabulary::new(
    "winter",
    &[
        ("cold", &["very_cold", "freezing", "harsh", "snowy"]),
        ("cool", &["chilly", "moderate"]),
        ("mild", &["warm", "very_mild", "pleasant"]),
    ],
);

/// Pace-of-life labels.
pub static PACE_LABELS: Vocabulary = Vocabulary::new(
    "pace_of_life",
    &[
        ("relaxed", &["slow", "laid_back", "leisurely", "very_slow"]),
        ("moderate", &["balanced", "medium", "steady"]),
        ("fast", &["busy", "hectic", "very_fast", "energetic"]),
    ],
);

/// Living-environment labels.
pub static URBAN_RURAL_LABELS: Vocabulary = Vocabulary::new(
    "urban_rural",
    &[
        ("urban", &["city", "metropolitan", "large_city", "big_city"]),
        ("suburban", &["small_city", "town", "small_town", "semi_urban"]),
        ("rural", &["village", "countryside", "remote"]),
    ],
);

/// Expat-community labels.
pub static EXPAT_LABELS: Vocabulary = Vocabulary::new(
    "expat_community",
    &[
        ("large", &["big", "high", "very_large", "significant"]),
        ("moderate", &["medium", "average", "growing"]),
        ("small", &["low", "few", "minimal", "tiny", "none"]),
    ],
);

/// Keyword rules applied to free text, first hit wins.
type KeywordRules = &'static [(&'static str, &'static [&'static str])];

const HUMIDITY_KEYWORDS: KeywordRules = &[
    ("dry", &["arid", "desert", "dry"]),
    ("humid", &["humid", "tropical", "moist"]),
    ("balanced", &["mediterranean", "temperate"]),
];

const SUNSHINE_KEYWORDS: KeywordRules = &[
    ("often_sunny", &["sunny", "desert", "arid"]),
    ("balanced", &["mediterranean", "tropical"]),
    ("less_sunny", &["cloudy", "overcast", "oceanic"]),
];

const PRECIPITATION_KEYWORDS: KeywordRules = &[
    ("mostly_dry", &["arid", "desert", "dry"]),
    ("less_dry", &["rainy", "wet", "monsoon"]),
    ("balanced", &["mediterranean", "temperate"]),
];

const SUMMER_KEYWORDS: KeywordRules = &[
    ("hot", &["hot", "tropical", "desert", "scorching"]),
    ("warm", &["warm", "mediterranean", "subtropical"]),
    ("mild", &["mild", "temperate", "oceanic", "cool"]),
];

const WINTER_KEYWORDS: KeywordRules = &[
    ("cold", &["cold", "snow", "freezing", "continental", "alpine"]),
    ("cool", &["cool", "temperate", "oceanic"]),
    ("mild", &["mild", "warm", "tropical", "mediterranean", "subtropical"]),
];

fn from_keywords(text: &str, rules: KeywordRules) -> Option<&'static str> {
    rules
        .iter()
        .find(|(_, keywords)| mentions_any(text, keywords))
        .map(|(value, _)| *value)
}

/// Season a temperature band refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// Summer months.
    Summer,
    /// Winter months.
    Winter,
}

impl Season {
    /// Canonical band for a mean temperature in °C.
    #[must_use]
    pub fn band_for(self, celsius: f32) -> &'static str {
        match self {
            Self::Summer if celsius < 22.0_f32 => "mild",
            Self::Summer if celsius < 27.0_f32 => "warm",
            Self::Summer => "hot",
            Self::Winter if celsius <= 5.0_f32 => "cold",
            Self::Winter if celsius <= 14.0_f32 => "cool",
            Self::Winter => "mild",
        }
    }

    /// Canonical band from the record's explicit label.
    #[must_use]
    pub fn label(self, location: &LocationRecord) -> Option<String> {
        let (raw, vocabulary) = match self {
            Self::Summer => (location.summer_climate.as_deref(), &SUMMER_LABELS),
            Self::Winter => (location.winter_climate.as_deref(), &WINTER_LABELS),
        };
        raw.map(|label| vocabulary.normalise(label))
    }

    /// Mean temperature recorded for the season.
    #[must_use]
    pub const fn temperature(self, location: &LocationRecord) -> Option<f32> {
        match self {
            Self::Summer => location.avg_temp_summer,
            Self::Winter => location.avg_temp_winter,
        }
    }

    /// Canonical band guessed from description keywords.
    #[must_use]
    pub fn from_description(self, location: &LocationRecord) -> Option<&'static str> {
        let rules = match self {
            Self::Summer => SUMMER_KEYWORDS,
            Self::Winter => WINTER_KEYWORDS,
        };
        location
            .climate_text()
            .and_then(|text| from_keywords(text, rules))
    }

    /// Canonical band using label, then temperature, then description.
    #[must_use]
    pub fn infer(self, location: &LocationRecord) -> Option<Inferred> {
        self.label(location)
            .map(|value| Inferred::new(value, InferenceSource::Label))
            .or_else(|| {
                self.temperature(location)
                    .map(|celsius| Inferred::new(self.band_for(celsius), InferenceSource::Numeric))
            })
            .or_else(|| {
                self.from_description(location)
                    .map(|value| Inferred::new(value, InferenceSource::Description))
            })
    }
}

/// Canonical humidity for a record.
///
/// # Examples
///
/// ```
/// use harbour_core::LocationRecord;
/// use harbour_core::inference::{InferenceSource, humidity};
///
/// let record = LocationRecord {
///     humidity_average: Some(72.0),
///     ..LocationRecord::default()
/// };
/// let inferred = humidity(&record).expect("numeric humidity");
/// assert_eq!(inferred.value, "humid");
/// assert_eq!(inferred.source, InferenceSource::Numeric);
/// ```
#[must_use]
pub fn humidity(location: &LocationRecord) -> Option<Inferred> {
    infer(
        location.humidity_level.as_deref(),
        &HUMIDITY_LABELS,
        location.humidity_average.map(humidity_band),
        location.climate_text(),
        HUMIDITY_KEYWORDS,
    )
}

/// Canonical sunshine level for a record.
#[must_use]
pub fn sunshine(location: &LocationRecord) -> Option<Inferred> {
    infer(
        location.sunshine_level.as_deref(),
        &SUNSHINE_LABELS,
        location.sunshine_hours.and_then(sunshine_band),
        location.climate_text(),
        SUNSHINE_KEYWORDS,
    )
}

/// Canonical precipitation level for a record.
#[must_use]
pub fn precipitation(location: &LocationRecord) -> Option<Inferred> {
    infer(
        location.precipitation_level.as_deref(),
        &PRECIPITATION_LABELS,
        location.annual_rainfall.map(rainfall_band),
        location.climate_text(),
        PRECIPITATION_KEYWORDS,
    )
}

fn infer(
    label: Option<&str>,
    vocabulary: &Vocabulary,
    numeric: Option<&'static str>,
    description: Option<&str>,
    keywords: KeywordRules,
) -> Option<Inferred> {
    label
        .map(|raw| Inferred::new(vocabulary.normalise(raw), InferenceSource::Label))
        .or_else(|| numeric.map(|value| Inferred::new(value, InferenceSource::Numeric)))
        .or_else(|| {
            description
                .and_then(|text| from_keywords(text, keywords))
                .map(|value| Inferred::new(value, InferenceSource::Description))
        })
}

fn humidity_band(percent: f32) -> &'static str {
    if percent < 40.0_f32 {
        "dry"
    } else if percent <= 65.0_f32 {
        "balanced"
    } else {
        "humid"
    }
}

fn sunshine_band(hours: f32) -> Option<&'static str> {
    if hours > 2800.0_f32 {
        Some("often_sunny")
    } else if hours > 2200.0_f32 {
        Some("balanced")
    } else if hours > 0.0_f32 {
        Some("less_sunny")
    } else {
        None
    }
}

fn rainfall_band(millimetres: f32) -> &'static str {
    if millimetres < 400.0_f32 {
        "mostly_dry"
    } else if millimetres < 1000.0_f32 {
        "balanced"
    } else {
        "less_dry"
    }
}

/// Canonical pace of life for a record.
#[must_use]
pub fn pace_of_life(location: &LocationRecord) -> Option<String> {
    location
        .pace_of_life
        .as_deref()
        .map(|raw| PACE_LABELS.normalise(raw))
}

/// Canonical living environment for a record.
#[must_use]
pub fn urban_rural(location: &LocationRecord) -> Option<String> {
    location
        .urban_rural_character
        .as_deref()
        .map(|raw| URBAN_RURAL_LABELS.normalise(raw))
}

/// Canonical expat-community size for a record.
#[must_use]
pub fn expat_community(location: &LocationRecord) -> Option<String> {
    location
        .expat_community_size
        .as_deref()
        .map(|raw| EXPAT_LABELS.normalise(raw))
}
