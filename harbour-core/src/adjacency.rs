//! Static adjacency tables.
//!
//! Each table lists, for a canonical preference value, the location values
//! that are close enough to earn partial credit. Tables are immutable and
//! versioned together through [`ADJACENCY_VERSION`]; any edit to a table
//! must bump it so stored results can be traced to the rules that produced
//! them.

use crate::matcher::eq_ignore_case;

/// Version of the adjacency rule set.
pub const ADJACENCY_VERSION: u32 = 1;

/// Partial-credit multiplier for climate attributes.
pub const CLIMATE_CREDIT: f32 = 0.70_f32;
/// Partial-credit multiplier for culture attributes.
pub const CULTURE_CREDIT: f32 = 0.50_f32;
/// Partial-credit multiplier for region attributes.
pub const REGION_CREDIT: f32 = 0.50_f32;

type Entry = (&'static str, &'static [&'static str]);

/// A named, immutable table of near-enough values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyMap {
    name: &'static str,
    entries: &'static [Entry],
}

impl AdjacencyMap {
    /// Build a table from static entries.
    #[must_use]
    pub const fn new(name: &'static str, entries: &'static [Entry]) -> Self {
        Self { name, entries }
    }

    /// Name of the attribute the table covers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Neighbours listed for `value`, or an empty slice.
    #[must_use]
    pub fn neighbours(&self, value: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(key, _)| eq_ignore_case(key, value))
            .map(|(_, near)| *near)
            .unwrap_or_default()
    }

    /// Report whether `candidate` is listed as a neighbour of `wanted`.
    #[must_use]
    pub fn are_adjacent(&self, wanted: &str, candidate: &str) -> bool {
        self.neighbours(wanted)
            .iter()
            .any(|near| eq_ignore_case(near, candidate))
    }

    /// Iterate over every `(value, neighbours)` entry.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
        self.entries.iter().copied()
    }
}

/// Humidity levels.
pub static HUMIDITY: AdjacencyMap = AdjacencyMap::new(
    "humidity",
    &[
        ("dry", &["balanced"]),
        ("balanced", &["dry", "humid"]),
        ("humid", &["balanced"]),
    ],
);

/// Sunshine levels, including legacy labels still found in records.
pub static SUNSHINE: AdjacencyMap = AdjacencyMap::new(
    "sunshine",
    &[
        (
            "often_sunny",
            &["balanced", "mostly_sunny", "sunny", "abundant"],
        ),
        (
            "balanced",
            &[
                "often_sunny",
                "mostly_sunny",
                "sunny",
                "abundant",
                "less_sunny",
                "partly_sunny",
                "often_cloudy",
            ],
        ),
        ("less_sunny", &["balanced", "partly_sunny", "often_cloudy"]),
        ("sunny", &["often_sunny", "balanced"]),
        ("abundant", &["often_sunny", "balanced"]),
        ("mostly_sunny", &["often_sunny", "balanced"]),
        ("partly_sunny", &["balanced", "less_sunny"]),
        ("often_cloudy", &["balanced", "less_sunny"]),
    ],
);

/// Precipitation levels.
pub static PRECIPITATION: AdjacencyMap = AdjacencyMap::new(
    "precipitation",
    &[
        ("mostly_dry", &["balanced"]),
        ("dry", &["balanced"]),
        ("balanced", &["mostly_dry", "dry", "less_dry", "wet"]),
        ("less_dry", &["balanced"]),
        ("wet", &["balanced"]),
    ],
);

/// Summer climate bands, used when only a label is known.
pub static SUMMER: AdjacencyMap = AdjacencyMap::new(
    "summer",
    &[
        ("mild", &["warm"]),
        ("warm", &["mild", "hot"]),
        ("hot", &["warm"]),
    ],
);

/// Winter climate bands, used when only a label is known.
pub static WINTER: AdjacencyMap = AdjacencyMap::new(
    "winter",
    &[
        ("cold", &["cool"]),
        ("cool", &["cold", "mild"]),
        ("mild", &["cool"]),
    ],
);

/// Living environment.
pub static URBAN_RURAL: AdjacencyMap = AdjacencyMap::new(
    "urban_rural",
    &[
        ("urban", &["suburban"]),
        ("suburban", &["urban", "rural"]),
        ("rural", &["suburban"]),
    ],
);

/// Pace of life.
pub static PACE: AdjacencyMap = AdjacencyMap::new(
    "pace_of_life",
    &[
        ("fast", &["moderate"]),
        ("moderate", &["fast", "relaxed"]),
        ("relaxed", &["moderate"]),
    ],
);

/// Expat community size.
pub static EXPAT: AdjacencyMap = AdjacencyMap::new(
    "expat_community",
    &[
        ("large", &["moderate"]),
        ("moderate", &["large", "small"]),
        ("small", &["moderate"]),
    ],
);

/// Traditional versus progressive lean.
pub static TRADITIONAL_PROGRESSIVE: AdjacencyMap = AdjacencyMap::new(
    "traditional_progressive",
    &[
        ("traditional", &["balanced"]),
        ("balanced", &["traditional", "progressive"]),
        ("progressive", &["balanced"]),
    ],
);

/// Social atmosphere.
pub static SOCIAL_ATMOSPHERE: AdjacencyMap = AdjacencyMap::new(
    "social_atmosphere",
    &[
        ("quiet", &["friendly"]),
        ("friendly", &["quiet", "vibrant"]),
        ("vibrant", &["friendly"]),
    ],
);

/// Geographic features.
pub static GEOGRAPHIC_FEATURES: AdjacencyMap = AdjacencyMap::new(
    "geographic_features",
    &[
        ("coastal", &["island", "lake", "river"]),
        ("island", &["coastal"]),
        ("lake", &["coastal", "river"]),
        ("river", &["lake", "coastal"]),
        ("mountain", &["valley", "forest"]),
        ("valley", &["mountain", "river"]),
        ("forest", &["mountain", "valley"]),
        ("plains", &["valley"]),
        ("desert", &[]),
    ],
);

/// Every geographic feature a user can select.
pub const ALL_GEOGRAPHIC_FEATURES: &[&str] = &[
    "coastal", "mountain", "island", "lake", "river", "valley", "desert", "forest", "plains",
];

/// Vegetation types.
pub static VEGETATION: AdjacencyMap = AdjacencyMap::new(
    "vegetation",
    &[
        ("mediterranean", &["subtropical"]),
        ("subtropical", &["mediterranean", "tropical"]),
        ("tropical", &["subtropical"]),
        ("forest", &["grassland"]),
        ("grassland", &["forest"]),
    ],
);

/// Every vegetation type a user can select.
pub const ALL_VEGETATION_TYPES: &[&str] = &[
    "tropical",
    "subtropical",
    "mediterranean",
    "forest",
    "grassland",
    "desert",
];
