//! Field-level validators for parcel API request entities.
//!
//! # Design
//! Every validator is a pure function taking the entity field name (for the
//! error message) and a raw candidate value, returning the normalized value
//! or a `ValidationError`. Setters treat `None` as "clear the field" and
//! never call a validator for it, so clearing always succeeds.
//!
//! The date and time checks are pattern-only by contract: `31-02-2020`
//! passes even though February has no 31st day. The carrier's API performs
//! the same lenient check server-side; tightening it here would reject
//! requests the server accepts.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;

/// Day 01-31, month 01-12, 4-digit year. Pattern-only, no calendar check.
const DATE_PATTERN: &str = r"^(3[01]|[12][0-9]|0[1-9])-(1[0-2]|0[1-9])-[0-9]{4}$";

/// Hour 00-23, minute and second 00-59.
const TIME_PATTERN: &str = r"^(2[0-3]|[01][0-9]):[0-5][0-9]:[0-5][0-9]$";

/// `DATE_PATTERN` and `TIME_PATTERN` joined by a single space.
const DATE_TIME_PATTERN: &str =
    r"^(3[01]|[12][0-9]|0[1-9])-(1[0-2]|0[1-9])-[0-9]{4} (2[0-3]|[01][0-9]):[0-5][0-9]:[0-5][0-9]$";

/// 1-2 integer digits, a decimal point, 1-15 fractional digits.
const COORDINATE_PATTERN: &str = r"^[0-9]{1,2}\.[0-9]{1,15}$";

/// 1-10 digits, no sign.
const INTEGER_PATTERN: &str = r"^[0-9]{1,10}$";

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATE_PATTERN).unwrap())
}

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIME_PATTERN).unwrap())
}

fn date_time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATE_TIME_PATTERN).unwrap())
}

fn coordinate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(COORDINATE_PATTERN).unwrap())
}

fn integer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(INTEGER_PATTERN).unwrap())
}

/// Postal code: 1 to 10 characters.
pub fn postcode(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if (1..=10).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must be 1 to 10 characters, got {len}"),
        ))
    }
}

/// City name: at most 35 characters.
pub fn city(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len <= 35 {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must be at most 35 characters, got {len}"),
        ))
    }
}

/// Street name: at most 95 characters.
pub fn street(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len <= 95 {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must be at most 95 characters, got {len}"),
        ))
    }
}

/// Date in `DD-MM-YYYY` form. Pattern-only: `31-02-2020` passes.
pub fn date(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if date_regex().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must match DD-MM-YYYY, got '{value}'"),
        ))
    }
}

/// Time in `HH:MM:SS` form, hour 00-23.
pub fn time(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if time_regex().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must match HH:MM:SS, got '{value}'"),
        ))
    }
}

/// Date-time in `DD-MM-YYYY HH:MM:SS` form.
pub fn date_time(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if date_time_regex().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must match DD-MM-YYYY HH:MM:SS, got '{value}'"),
        ))
    }
}

/// Country code: exactly `NL` or `BE` — the carrier serves no other markets.
pub fn country_code_nl_be(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value == "NL" || value == "BE" {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must be 'NL' or 'BE', got '{value}'"),
        ))
    }
}

/// Decimal-degree coordinate: an `f64` passes through unchanged; a string
/// must match 1-2 integer digits, a point, and 1-15 fractional digits.
pub fn coordinate(
    field: &'static str,
    value: impl CoordinateInput,
) -> Result<f64, ValidationError> {
    value.validate(field)
}

/// Integer with at most 10 digits: an `i64` in range passes through; a
/// string must be all digits and is coerced.
pub fn integer(field: &'static str, value: impl IntegerInput) -> Result<i64, ValidationError> {
    value.validate(field)
}

/// Raw input accepted by the `coordinate` validator: either an
/// already-parsed float or its decimal-degree string spelling.
pub trait CoordinateInput {
    fn validate(self, field: &'static str) -> Result<f64, ValidationError>;
}

impl CoordinateInput for f64 {
    fn validate(self, _field: &'static str) -> Result<f64, ValidationError> {
        Ok(self)
    }
}

impl CoordinateInput for &str {
    fn validate(self, field: &'static str) -> Result<f64, ValidationError> {
        if !coordinate_regex().is_match(self) {
            return Err(ValidationError::new(
                field,
                format!("must be a decimal-degree coordinate, got '{self}'"),
            ));
        }
        // The pattern admits only forms `parse::<f64>` accepts.
        self.parse::<f64>().map_err(|e| {
            ValidationError::new(field, format!("cannot parse '{self}' as a float: {e}"))
        })
    }
}

impl CoordinateInput for String {
    fn validate(self, field: &'static str) -> Result<f64, ValidationError> {
        CoordinateInput::validate(self.as_str(), field)
    }
}

/// Raw input accepted by the `integer` validator: an `i64` or a digit string.
pub trait IntegerInput {
    fn validate(self, field: &'static str) -> Result<i64, ValidationError>;
}

impl IntegerInput for i64 {
    fn validate(self, field: &'static str) -> Result<i64, ValidationError> {
        if (0..10_000_000_000).contains(&self) {
            Ok(self)
        } else {
            Err(ValidationError::new(
                field,
                format!("must be a non-negative integer of at most 10 digits, got {self}"),
            ))
        }
    }
}

impl IntegerInput for &str {
    fn validate(self, field: &'static str) -> Result<i64, ValidationError> {
        if !integer_regex().is_match(self) {
            return Err(ValidationError::new(
                field,
                format!("must be a number of at most 10 digits, got '{self}'"),
            ));
        }
        // 10 digits fit in i64 with room to spare.
        self.parse::<i64>().map_err(|e| {
            ValidationError::new(field, format!("cannot parse '{self}' as an integer: {e}"))
        })
    }
}

impl IntegerInput for String {
    fn validate(self, field: &'static str) -> Result<i64, ValidationError> {
        IntegerInput::validate(self.as_str(), field)
    }
}
