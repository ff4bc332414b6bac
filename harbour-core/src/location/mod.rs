//! Candidate location records.
//!
//! A [`LocationRecord`] is a flat bag of optional attributes as curated in
//! the location store. Every field may be missing; scorers decide what a
//! missing value is worth.

mod lenient;

use serde::Deserialize;

/// A candidate retirement location.
///
/// Deserialisation is forgiving: unknown fields are ignored, list fields
/// accept a single string or comma-separated text, and numeric fields accept
/// numeric strings. Unusable values become `None` instead of failing the
/// record.
///
/// # Examples
///
/// ```
/// use harbour_core::LocationRecord;
///
/// let record: LocationRecord = serde_json::from_str(
///     r#"{"name": "Porto", "country": "Portugal", "geo_region": "Europe, Atlantic",
///         "avg_temp_summer": "24", "hospital_count": 9}"#,
/// )
/// .expect("valid JSON");
/// assert_eq!(record.geo_region, vec!["Europe".to_owned(), "Atlantic".to_owned()]);
/// assert_eq!(record.avg_temp_summer, Some(24.0));
/// assert_eq!(record.hospital_count, Some(9));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationRecord {
    /// Store identifier.
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    /// Display name.
    #[serde(alias = "town_name", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    /// Country name.
    #[serde(deserialize_with = "lenient::text")]
    pub country: Option<String>,
    /// First-level administrative region (state, province).
    #[serde(deserialize_with = "lenient::text")]
    pub region: Option<String>,
    /// Broad regions the location belongs to, such as "Mediterranean".
    #[serde(deserialize_with = "lenient::list")]
    pub regions: Vec<String>,
    /// Comma-separated geographic region labels.
    #[serde(deserialize_with = "lenient::list")]
    pub geo_region: Vec<String>,
    /// Geographic features such as "coastal" or "mountain".
    #[serde(alias = "geographic_features_actual", deserialize_with = "lenient::list")]
    pub geographic_features: Vec<String>,
    /// Vegetation types.
    #[serde(alias = "vegetation_type_actual", deserialize_with = "lenient::list")]
    pub vegetation_types: Vec<String>,
    /// Water bodies nearby.
    #[serde(deserialize_with = "lenient::list")]
    pub water_bodies: Vec<String>,

    /// General free-text description.
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    /// Free-text climate description.
    #[serde(deserialize_with = "lenient::text")]
    pub climate_description: Option<String>,
    /// Short climate label such as "Mediterranean".
    #[serde(deserialize_with = "lenient::text")]
    pub climate: Option<String>,
    /// Average summer temperature in °C.
    #[serde(deserialize_with = "lenient::number")]
    pub avg_temp_summer: Option<f32>,
    /// Average winter temperature in °C.
    #[serde(deserialize_with = "lenient::number")]
    pub avg_temp_winter: Option<f32>,
    /// Summer climate label.
    #[serde(alias = "summer_climate_actual", deserialize_with = "lenient::text")]
    pub summer_climate: Option<String>,
    /// Winter climate label.
    #[serde(alias = "winter_climate_actual", deserialize_with = "lenient::text")]
    pub winter_climate: Option<String>,
    /// Humidity label.
    #[serde(alias = "humidity_level_actual", deserialize_with = "lenient::text")]
    pub humidity_level: Option<String>,
    /// Average relative humidity in percent.
    #[serde(deserialize_with = "lenient::number")]
    pub humidity_average: Option<f32>,
    /// Sunshine label.
    #[serde(alias = "sunshine_level_actual", deserialize_with = "lenient::text")]
    pub sunshine_level: Option<String>,
    /// Annual sunshine hours.
    #[serde(deserialize_with = "lenient::number")]
    pub sunshine_hours: Option<f32>,
    /// Precipitation label.
    #[serde(alias = "precipitation_level_actual", deserialize_with = "lenient::text")]
    pub precipitation_level: Option<String>,
    /// Annual rainfall in millimetres.
    #[serde(deserialize_with = "lenient::number")]
    pub annual_rainfall: Option<f32>,

    /// Living environment label.
    #[serde(alias = "urban_rural", deserialize_with = "lenient::text")]
    pub urban_rural_character: Option<String>,
    /// Pace of life label.
    #[serde(alias = "pace_of_life_actual", deserialize_with = "lenient::text")]
    pub pace_of_life: Option<String>,
    /// Expat community size label.
    #[serde(deserialize_with = "lenient::text")]
    pub expat_community_size: Option<String>,
    /// Main local language.
    #[serde(deserialize_with = "lenient::text")]
    pub primary_language: Option<String>,
    /// Other languages commonly spoken.
    #[serde(deserialize_with = "lenient::list")]
    pub languages_spoken: Vec<String>,
    /// English proficiency label: native, high, moderate, low.
    #[serde(deserialize_with = "lenient::text")]
    pub english_proficiency_level: Option<String>,
    /// Traditional or progressive lean.
    #[serde(deserialize_with = "lenient::text")]
    pub traditional_progressive_lean: Option<String>,
    /// Social atmosphere label.
    #[serde(deserialize_with = "lenient::text")]
    pub social_atmosphere: Option<String>,
    /// Restaurant scene rating, 0–10.
    #[serde(alias = "dining_rating", deserialize_with = "lenient::number")]
    pub restaurants_rating: Option<f32>,
    /// Nightlife rating, 0–10.
    #[serde(deserialize_with = "lenient::number")]
    pub nightlife_rating: Option<f32>,
    /// Cultural events rating, 0–10.
    #[serde(deserialize_with = "lenient::number")]
    pub cultural_events_rating: Option<f32>,
    /// Museums rating, 0–10.
    #[serde(deserialize_with = "lenient::number")]
    pub museums_rating: Option<f32>,

    /// Activities the location is known for.
    #[serde(deserialize_with = "lenient::list")]
    pub top_hobbies: Vec<String>,
    /// Distance to the ocean in kilometres; zero means on the coast.
    #[serde(deserialize_with = "lenient::number")]
    pub distance_to_ocean_km: Option<f32>,
    /// Elevation in metres.
    #[serde(deserialize_with = "lenient::number")]
    pub elevation_meters: Option<f32>,
    /// Resident population.
    #[serde(deserialize_with = "lenient::count")]
    pub population: Option<u32>,
    /// Distance to the nearest urban centre in kilometres.
    #[serde(deserialize_with = "lenient::number")]
    pub distance_to_urban_center: Option<f32>,
    /// Ski resorts within 100 km.
    #[serde(deserialize_with = "lenient::count")]
    pub ski_resorts_within_100km: Option<u32>,
    /// Golf courses.
    #[serde(deserialize_with = "lenient::count")]
    pub golf_courses_count: Option<u32>,
    /// Tennis courts.
    #[serde(deserialize_with = "lenient::count")]
    pub tennis_courts_count: Option<u32>,
    /// Kilometres of hiking trails.
    #[serde(deserialize_with = "lenient::number")]
    pub hiking_trails_km: Option<f32>,
    /// Name of the nearest airport.
    #[serde(deserialize_with = "lenient::text")]
    pub nearest_airport: Option<String>,
    /// Distance to the nearest airport in kilometres.
    #[serde(deserialize_with = "lenient::number")]
    pub airport_distance: Option<f32>,

    /// Curated healthcare baseline, 0–10.
    #[serde(deserialize_with = "lenient::number")]
    pub healthcare_score: Option<f32>,
    /// Curated safety baseline, 0–10.
    #[serde(deserialize_with = "lenient::number")]
    pub safety_score: Option<f32>,
    /// Government efficiency, 0–100.
    #[serde(deserialize_with = "lenient::number")]
    pub government_efficiency_rating: Option<f32>,
    /// Political stability, 0–100.
    #[serde(deserialize_with = "lenient::number")]
    pub political_stability_rating: Option<f32>,
    /// Environmental health, 0–10.
    #[serde(deserialize_with = "lenient::number")]
    pub environmental_health_rating: Option<f32>,
    /// Number of hospitals.
    #[serde(deserialize_with = "lenient::count")]
    pub hospital_count: Option<u32>,
    /// Distance to the nearest major hospital in kilometres.
    #[serde(deserialize_with = "lenient::number")]
    pub nearest_major_hospital_km: Option<f32>,
    /// Whether English-speaking doctors are available.
    #[serde(deserialize_with = "lenient::boolean")]
    pub english_speaking_doctors: Option<bool>,
    /// Emergency services quality, 0–10.
    #[serde(deserialize_with = "lenient::number")]
    pub emergency_services_quality: Option<f32>,
    /// Health insurance availability, 0–10.
    #[serde(deserialize_with = "lenient::number")]
    pub insurance_availability_rating: Option<f32>,
    /// Free-text insurance acceptance, such as "widely accepted".
    #[serde(deserialize_with = "lenient::text")]
    pub health_insurance_acceptance: Option<String>,
    /// Typical monthly healthcare spend in USD.
    #[serde(alias = "healthcare_cost", deserialize_with = "lenient::number")]
    pub healthcare_cost_monthly: Option<f32>,
    /// Crime rate, 0–100 where lower is safer.
    #[serde(deserialize_with = "lenient::number")]
    pub crime_rate: Option<f32>,
    /// Natural disaster risk, 0–10 where higher is safer.
    #[serde(deserialize_with = "lenient::number")]
    pub natural_disaster_risk_score: Option<f32>,
    /// Natural disaster risk label: low, moderate, high.
    #[serde(deserialize_with = "lenient::text")]
    pub natural_disaster_risk: Option<String>,

    /// Citizenships granted a visa on arrival.
    #[serde(deserialize_with = "lenient::list")]
    pub visa_on_arrival_countries: Vec<String>,
    /// Citizenships with an easy residency path.
    #[serde(deserialize_with = "lenient::list")]
    pub easy_residency_countries: Vec<String>,
    /// Whether a retirement visa exists.
    #[serde(deserialize_with = "lenient::boolean")]
    pub retirement_visa_available: Option<bool>,

    /// Monthly cost of living in USD.
    #[serde(deserialize_with = "lenient::number")]
    pub cost_of_living_usd: Option<f32>,
    /// Alternative monthly living cost in USD.
    #[serde(deserialize_with = "lenient::number")]
    pub typical_monthly_living_cost: Option<f32>,
    /// Typical one-bedroom rent in USD.
    #[serde(alias = "rent_1bed", deserialize_with = "lenient::number")]
    pub typical_rent_1bed: Option<f32>,
    /// Top income tax rate in percent.
    #[serde(deserialize_with = "lenient::number")]
    pub income_tax_rate_pct: Option<f32>,
    /// Property tax rate in percent.
    #[serde(deserialize_with = "lenient::number")]
    pub property_tax_rate_pct: Option<f32>,
    /// Sales tax or VAT rate in percent.
    #[serde(deserialize_with = "lenient::number")]
    pub sales_tax_rate_pct: Option<f32>,
    /// Whether a US tax treaty is in force.
    #[serde(deserialize_with = "lenient::boolean")]
    pub tax_treaty_us: Option<bool>,
    /// Whether the location is a recognised tax haven.
    #[serde(deserialize_with = "lenient::boolean")]
    pub tax_haven_status: Option<bool>,
    /// Whether foreign income is taxed.
    #[serde(deserialize_with = "lenient::boolean")]
    pub foreign_income_taxed: Option<bool>,
}

impl LocationRecord {
    /// Name for messages: the display name, then the id, then a placeholder.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("unnamed location")
    }

    /// Best free text describing the climate.
    #[must_use]
    pub fn climate_text(&self) -> Option<&str> {
        self.climate_description
            .as_deref()
            .or(self.climate.as_deref())
            .or(self.description.as_deref())
    }

    /// Monthly living cost, preferring `cost_of_living_usd`.
    #[must_use]
    pub fn monthly_cost(&self) -> Option<f32> {
        self.cost_of_living_usd
            .or(self.typical_monthly_living_cost)
            .filter(|cost| *cost > 0.0_f32)
    }

    /// Report whether the location has a usable airport.
    #[must_use]
    pub fn has_airport(&self) -> bool {
        self.nearest_airport.is_some() || self.airport_distance.is_some_and(|km| km < 50.0_f32)
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "fixtures deserialise from literal JSON")]

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn malformed_fields_do_not_reject_the_record() {
        let record: LocationRecord = serde_json::from_str(
            r#"{
                "name": "Valletta",
                "hospital_count": "many",
                "avg_temp_summer": {"value": 30},
                "english_speaking_doctors": "yes",
                "regions": ["Mediterranean", "EU", "mediterranean"],
                "country": null
            }"#,
        )
        .expect("record should deserialise");

        assert_eq!(record.label(), "Valletta");
        assert_eq!(record.hospital_count, None);
        assert_eq!(record.avg_temp_summer, None);
        assert_eq!(record.english_speaking_doctors, Some(true));
        assert_eq!(record.regions.len(), 2);
        assert_eq!(record.country, None);
    }

    #[rstest]
    fn legacy_aliases_are_accepted() {
        let record: LocationRecord = serde_json::from_str(
            r#"{"town_name": "Granada", "geographic_features_actual": ["mountain"],
                "summer_climate_actual": "hot", "rent_1bed": 500}"#,
        )
        .expect("record should deserialise");

        assert_eq!(record.name.as_deref(), Some("Granada"));
        assert_eq!(record.geographic_features, vec!["mountain".to_owned()]);
        assert_eq!(record.summer_climate.as_deref(), Some("hot"));
        assert_eq!(record.typical_rent_1bed, Some(500.0));
    }

    #[rstest]
    #[case(Some(950.0), None, Some(950.0))]
    #[case(None, Some(1200.0), Some(1200.0))]
    #[case(Some(0.0), None, None)]
    fn monthly_cost_prefers_cost_of_living(
        #[case] cost_of_living: Option<f32>,
        #[case] typical: Option<f32>,
        #[case] expected: Option<f32>,
    ) {
        let record = LocationRecord {
            cost_of_living_usd: cost_of_living,
            typical_monthly_living_cost: typical,
            ..LocationRecord::default()
        };
        assert_eq!(record.monthly_cost(), expected);
    }

    #[rstest]
    fn label_falls_back_to_id() {
        let record = LocationRecord {
            id: Some("42".to_owned()),
            ..LocationRecord::default()
        };
        assert_eq!(record.label(), "42");
    }
}
