//! Input validation functions
//!
//! Request bodies arrive with optional fields; these helpers turn them into
//! the values the store accepts, or a [`FieldError`] describing the problem.

use crate::errors::FieldError;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Date format used for workout dates in paths and bodies
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest weight representable by the `NUMERIC(8,2)` column
const MAX_WEIGHT: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// Require a non-blank text value
pub fn required<'a>(value: Option<&'a str>, label: &'static str) -> Result<&'a str, FieldError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FieldError::Missing(label)),
    }
}

/// Treat an empty optional string as absent
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Normalize an optional set/rep count
///
/// Zero is stored as absent. Negative values are rejected.
pub fn positive_count(value: Option<i64>, field: &'static str) -> Result<Option<i32>, FieldError> {
    let invalid = FieldError::Invalid {
        field,
        expected: "a positive whole number",
    };
    match value {
        None | Some(0) => Ok(None),
        Some(n) if n < 0 => Err(invalid),
        Some(n) => i32::try_from(n).map(Some).map_err(|_| invalid),
    }
}

/// Normalize an optional weight
///
/// Zero is stored as absent. The value is rounded to two decimal places.
pub fn weight(value: Option<Decimal>) -> Result<Option<Decimal>, FieldError> {
    let invalid = FieldError::Invalid {
        field: "weight",
        expected: "a non-negative number below 1000000",
    };
    match value {
        None => Ok(None),
        Some(w) if w.is_zero() => Ok(None),
        Some(w) if w.is_sign_negative() => Err(invalid),
        Some(w) => {
            let rounded = w.round_dp(2);
            if rounded.is_zero() {
                Ok(None)
            } else if rounded > MAX_WEIGHT {
                Err(invalid)
            } else {
                Ok(Some(rounded))
            }
        }
    }
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// The year must be exactly four digits and not zero; chrono alone would
/// also take signed and extended years that the `DATE` column cannot store.
pub fn calendar_date(value: &str, field: &'static str) -> Result<NaiveDate, FieldError> {
    let invalid = FieldError::Invalid {
        field,
        expected: "a date in YYYY-MM-DD format",
    };
    let value = value.trim();
    if !is_iso_date_shape(value) {
        return Err(invalid);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
        .ok_or(invalid)
}

fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
