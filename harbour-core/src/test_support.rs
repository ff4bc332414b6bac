//! Sample locations and preference documents shared by unit, behaviour and
//! property tests across the workspace.

use serde_json::{Value, json};

use crate::{LocationRecord, Preferences};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// A well-documented Mediterranean coastal city.
#[must_use]
pub fn coastal_city() -> LocationRecord {
    LocationRecord {
        id: Some("valencia-es".to_owned()),
        name: Some("Valencia".to_owned()),
        country: Some("Spain".to_owned()),
        region: Some("Valencian Community".to_owned()),
        regions: strings(&["Mediterranean", "Southern Europe"]),
        geo_region: strings(&["Europe", "Iberia"]),
        geographic_features: strings(&["coastal", "plains"]),
        vegetation_types: strings(&["mediterranean"]),
        water_bodies: strings(&["Mediterranean Sea"]),
        climate: Some("Mediterranean".to_owned()),
        climate_description: Some("Hot, sunny summers and mild winters".to_owned()),
        avg_temp_summer: Some(27.0),
        avg_temp_winter: Some(12.0),
        summer_climate: Some("hot".to_owned()),
        winter_climate: Some("mild".to_owned()),
        humidity_level: Some("balanced".to_owned()),
        humidity_average: Some(62.0),
        sunshine_level: Some("often_sunny".to_owned()),
        sunshine_hours: Some(2900.0),
        precipitation_level: Some("mostly_dry".to_owned()),
        annual_rainfall: Some(450.0),
        urban_rural_character: Some("urban".to_owned()),
        pace_of_life: Some("moderate".to_owned()),
        expat_community_size: Some("large".to_owned()),
        primary_language: Some("Spanish".to_owned()),
        languages_spoken: strings(&["Valencian", "English"]),
        english_proficiency_level: Some("moderate".to_owned()),
        traditional_progressive_lean: Some("balanced".to_owned()),
        social_atmosphere: Some("vibrant".to_owned()),
        restaurants_rating: Some(9.0),
        nightlife_rating: Some(8.0),
        cultural_events_rating: Some(8.0),
        museums_rating: Some(8.0),
        top_hobbies: strings(&["Sailing", "Swimming", "Cycling", "Golf", "Tennis"]),
        distance_to_ocean_km: Some(0.0),
        elevation_meters: Some(15.0),
        population: Some(800_000),
        distance_to_urban_center: Some(0.0),
        ski_resorts_within_100km: Some(0),
        golf_courses_count: Some(4),
        tennis_courts_count: Some(30),
        hiking_trails_km: Some(120.0),
        nearest_airport: Some("Valencia Airport".to_owned()),
        airport_distance: Some(8.0),
        healthcare_score: Some(8.5),
        safety_score: Some(7.5),
        government_efficiency_rating: Some(70.0),
        political_stability_rating: Some(75.0),
        environmental_health_rating: Some(7.0),
        hospital_count: Some(12),
        nearest_major_hospital_km: Some(3.0),
        english_speaking_doctors: Some(true),
        emergency_services_quality: Some(8.0),
        insurance_availability_rating: Some(8.0),
        healthcare_cost_monthly: Some(150.0),
        crime_rate: Some(30.0),
        natural_disaster_risk_score: Some(8.0),
        visa_on_arrival_countries: strings(&["USA", "Canada", "United Kingdom"]),
        retirement_visa_available: Some(true),
        cost_of_living_usd: Some(2000.0),
        typical_rent_1bed: Some(900.0),
        income_tax_rate_pct: Some(24.0),
        property_tax_rate_pct: Some(1.1),
        sales_tax_rate_pct: Some(21.0),
        tax_treaty_us: Some(true),
        tax_haven_status: Some(false),
        foreign_income_taxed: Some(true),
        ..LocationRecord::default()
    }
}

/// A remote, cold, expensive mountain town: the opposite of
/// [`coastal_city`] on nearly every attribute.
#[must_use]
pub fn arctic_town() -> LocationRecord {
    LocationRecord {
        id: Some("kiruna-se".to_owned()),
        name: Some("Kiruna".to_owned()),
        country: Some("Sweden".to_owned()),
        region: Some("Norrbotten".to_owned()),
        regions: strings(&["Scandinavia", "Northern Europe"]),
        geo_region: strings(&["Europe", "Arctic"]),
        geographic_features: strings(&["mountain"]),
        vegetation_types: strings(&["forest"]),
        climate: Some("Subarctic".to_owned()),
        climate_description: Some("Cold, snowy winters and short cool summers".to_owned()),
        avg_temp_summer: Some(11.0),
        avg_temp_winter: Some(-14.0),
        humidity_level: Some("humid".to_owned()),
        sunshine_level: Some("less_sunny".to_owned()),
        precipitation_level: Some("less_dry".to_owned()),
        urban_rural_character: Some("rural".to_owned()),
        pace_of_life: Some("relaxed".to_owned()),
        expat_community_size: Some("small".to_owned()),
        primary_language: Some("Swedish".to_owned()),
        english_proficiency_level: Some("low".to_owned()),
        traditional_progressive_lean: Some("traditional".to_owned()),
        social_atmosphere: Some("quiet".to_owned()),
        restaurants_rating: Some(2.0),
        nightlife_rating: Some(1.0),
        cultural_events_rating: Some(2.0),
        museums_rating: Some(2.0),
        top_hobbies: strings(&["Skiing", "Snowmobiling", "Ice Fishing"]),
        distance_to_ocean_km: Some(300.0),
        elevation_meters: Some(530.0),
        population: Some(18_000),
        distance_to_urban_center: Some(250.0),
        ski_resorts_within_100km: Some(2),
        golf_courses_count: Some(0),
        tennis_courts_count: Some(0),
        airport_distance: Some(120.0),
        healthcare_score: Some(3.0),
        safety_score: Some(3.0),
        government_efficiency_rating: Some(20.0),
        political_stability_rating: Some(20.0),
        environmental_health_rating: Some(2.0),
        hospital_count: Some(0),
        nearest_major_hospital_km: Some(120.0),
        english_speaking_doctors: Some(false),
        emergency_services_quality: Some(1.0),
        healthcare_cost_monthly: Some(2000.0),
        crime_rate: Some(90.0),
        natural_disaster_risk: Some("high".to_owned()),
        retirement_visa_available: Some(false),
        cost_of_living_usd: Some(6000.0),
        typical_rent_1bed: Some(3000.0),
        income_tax_rate_pct: Some(52.0),
        property_tax_rate_pct: Some(5.0),
        sales_tax_rate_pct: Some(30.0),
        tax_treaty_us: Some(false),
        tax_haven_status: Some(false),
        foreign_income_taxed: Some(true),
        ..LocationRecord::default()
    }
}

/// A record that names a place and nothing else.
#[must_use]
pub fn sparse_location() -> LocationRecord {
    LocationRecord {
        id: Some("unknown-pt".to_owned()),
        name: Some("Aldeia".to_owned()),
        country: Some("Portugal".to_owned()),
        ..LocationRecord::default()
    }
}

/// A preference document that [`coastal_city`] satisfies on every
/// attribute.
#[must_use]
pub fn coastal_city_preferences() -> Value {
    json!({
        "current_status": { "citizenship": "USA" },
        "region_preferences": {
            "countries": ["Spain"],
            "regions": ["Mediterranean"],
            "geographic_features": ["coastal"],
            "vegetation_types": ["mediterranean"]
        },
        "climate_preferences": {
            "summer_climate_preference": ["warm", "hot"],
            "winter_climate_preference": ["mild"],
            "seasonal_preference": "summer_focused",
            "humidity_level": ["balanced"],
            "sunshine": ["often_sunny"],
            "precipitation": ["mostly_dry"]
        },
        "culture_preferences": {
            "lifestyle_preferences": {
                "urban_rural_preference": ["urban"],
                "pace_of_life_preference": ["moderate"]
            },
            "expat_community_preference": ["large"],
            "language_comfort": {
                "preferences": ["willing_to_learn"],
                "already_speak": ["English", "Spanish"]
            },
            "cultural_importance": { "dining_nightlife": 5, "cultural_events": 3, "museums": 3 },
            "traditional_progressive_lean": ["balanced"],
            "social_atmosphere": ["vibrant"]
        },
        "hobbies_preferences": {
            "activities": ["swimming", "sailing"],
            "travel_frequency": "frequent"
        },
        "admin_preferences": {
            "healthcare_quality": ["good"],
            "safety_importance": ["good"],
            "government_efficiency": ["basic"],
            "political_stability": ["good"],
            "visa_preference": ["good"],
            "health_considerations": { "environmental_health": "sensitive" }
        },
        "cost_preferences": {
            "total_monthly_budget": 4000,
            "max_monthly_rent": 1200,
            "monthly_healthcare_budget": 300
        }
    })
}

/// A preference document that [`arctic_town`] fails on every attribute.
///
/// Identical to [`coastal_city_preferences`]: the arctic town is built to
/// contradict it.
#[must_use]
pub fn antithetical_preferences() -> Value {
    coastal_city_preferences()
}

/// A user who only named a country.
#[must_use]
pub fn country_only_preferences() -> Value {
    json!({ "region_preferences": { "countries": ["Spain"] } })
}

/// Parse a preference document.
#[must_use]
pub fn parsed(raw: &Value) -> Preferences {
    Preferences::parse(raw)
}
