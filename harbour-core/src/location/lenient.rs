//! Forgiving field deserialisers.
//!
//! Curated location data is inconsistent: numbers arrive as strings, lists
//! arrive as comma-separated text, and booleans arrive as "yes". A bad field
//! must never reject the whole record, so each helper maps anything it
//! cannot use to "absent".

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::matcher::{contains_ignore_case, fold};

pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(raw) => {
            let trimmed = raw.trim();
            (!trimmed.is_empty() && !eq_null(trimmed)).then(|| trimmed.to_owned())
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

pub(super) fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let mut out = Vec::new();
    collect(&value, &mut out);
    Ok(out)
}

fn collect(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(raw) => {
            for part in raw.split(',') {
                let trimmed = part.trim();
                if !trimmed.is_empty() && !eq_null(trimmed) && !contains_ignore_case(out, trimmed)
                {
                    out.push(trimmed.to_owned());
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, out);
            }
        }
        _ => {}
    }
}

pub(super) fn number<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).map(narrow))
}

pub(super) fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value)
        .filter(|n| *n >= 0.0_f64)
        .map(|n| to_count(n.round())))
}

pub(super) fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(set) => Some(set),
        Value::Number(number) => number.as_f64().map(|n| n > 0.0_f64),
        Value::String(raw) => match fold(&raw).as_str() {
            "true" | "yes" | "y" | "1" | "available" => Some(true),
            "false" | "no" | "n" | "0" | "none" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn as_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().trim_end_matches('%').parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn eq_null(text: &str) -> bool {
    fold(text) == "null"
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "location statistics sit well inside f32 range"
)]
const fn narrow(value: f64) -> f32 {
    value as f32
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "counts are rounded, non-negative and saturate at u32::MAX"
)]
const fn to_count(value: f64) -> u32 {
    value as u32
}
