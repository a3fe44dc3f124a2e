//! Lenient deserializers for form-driven clients
//!
//! HTML form clients post numeric fields as strings, and an untouched input
//! arrives as `""`. These helpers accept a JSON number, a numeric string,
//! an empty string, or `null`. Empty and null values become `None`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Deserialize an optional whole number from a number or numeric string
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;

    match raw {
        None => Ok(None),
        Some(NumberOrText::Int(n)) => Ok(Some(n)),
        Some(NumberOrText::Float(f)) if f.fract() == 0.0 && f.is_finite() => Ok(Some(f as i64)),
        Some(NumberOrText::Float(f)) => Err(serde::de::Error::custom(format!(
            "Expected a whole number, got {f}"
        ))),
        Some(NumberOrText::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("Invalid whole number: '{s}'")))
        }
    }
}

/// Deserialize an optional decimal from a number or numeric string
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;

    match raw {
        None => Ok(None),
        Some(NumberOrText::Int(n)) => Ok(Some(Decimal::from(n))),
        Some(NumberOrText::Float(f)) => Decimal::try_from(f)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("Invalid decimal: {f}"))),
        Some(NumberOrText::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            Decimal::from_str(s)
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("Invalid decimal: '{s}'")))
        }
    }
}
