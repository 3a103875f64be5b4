//! Boundary parsing for numeric form fields.
//!
//! Documents exported by the browser app store numbers as strings
//! (`"price": "120000"`). Both spellings are accepted here, but anything that is
//! not a finite, non-negative number is rejected instead of becoming 0 or NaN.

use crate::error::{PlannerError, Result};
use serde::de::{self, Deserializer};
use serde::Deserialize;

const AMOUNT: &str = "a non-negative number";
const COUNT: &str = "a whole number";

fn invalid(field: &str, value: impl Into<String>, expected: &'static str) -> PlannerError {
    PlannerError::InvalidNumber { field: field.to_string(), value: value.into(), expected }
}

/// Parses a trimmed decimal string as a finite, non-negative amount.
pub fn parse_amount(field: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| invalid(field, raw, AMOUNT))?;
    check_amount(field, value, raw)
}

/// Parses a trimmed string as a whole, non-negative count.
pub fn parse_count(field: &str, raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| invalid(field, raw, COUNT))
}

fn check_amount(field: &str, value: f64, raw: &str) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid(field, raw, AMOUNT))
    }
}

fn check_count(field: &str, value: f64) -> Result<u32> {
    if value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
        Ok(value as u32)
    } else {
        Err(invalid(field, value.to_string(), COUNT))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn amount_field<'de, D: Deserializer<'de>>(deserializer: D, field: &str) -> std::result::Result<f64, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => check_amount(field, n, &n.to_string()),
        NumberOrString::Text(s) => parse_amount(field, &s),
    }
    .map_err(de::Error::custom)
}

fn count_field<'de, D: Deserializer<'de>>(deserializer: D, field: &str) -> std::result::Result<u32, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => check_count(field, n),
        NumberOrString::Text(s) => parse_count(field, &s),
    }
    .map_err(de::Error::custom)
}

// serde `deserialize_with` helpers: number or numeric string, named after the field they read.

pub fn price<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    amount_field(deserializer, "price")
}

pub fn duration<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    count_field(deserializer, "duration")
}

pub fn nights<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    count_field(deserializer, "nights")
}
