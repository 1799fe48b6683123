//! Field-level checks shared by every builder.
//!
//! Each check takes ownership of the candidate value and hands it back on
//! success, so setters read as `self.x = Some(check::...(...)?)` and never
//! touch the stored value on failure.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use super::error::ValidationError;

/// A fixed field format: compiled expression plus a short description used in
/// error messages.
pub struct Pattern {
    regex: LazyLock<Regex>,
    pub description: &'static str,
}

impl Pattern {
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

macro_rules! pattern {
    ($name:ident, $re:literal, $desc:literal) => {
        pub static $name: Pattern = Pattern {
            regex: LazyLock::new(|| Regex::new($re).expect("static field pattern")),
            description: $desc,
        };
    };
}

pub mod patterns {
    use super::*;

    pattern!(COUNTRY, r"^[A-Z]{2}$", "ISO 3166-1 alpha-2 format");
    pattern!(STATE, r"^[A-Z]{2}$", "ISO 3166-2 format");
    pattern!(
        EMAIL,
        r"^[\w\p{L}!#$%&'*+/=?^_`{|}~\-]+(\.[\w\p{L}!#$%&'*+/=?^_`{|}~\-]+)*@\w[\w\p{L}\-]*(\.[\w\p{L}\-]+)*(\.[a-zA-Z][\-a-zA-Z0-9]{0,61}[a-zA-Z0-9])$",
        "a valid email address"
    );
    pattern!(CURRENCY, r"^[A-Z]{3}$", "ISO 4217 format");
    pattern!(MESSAGE_LANGUAGE, r"^[a-z]{2}_[A-Z]{2}$", "in format en_US");
    pattern!(DELIS_ID, r"^.{8,10}$", "8 to 10 characters");
    pattern!(PARCEL_LABEL_NUMBER, r"^.{11,14}$", "11 to 14 characters");
    pattern!(TRACKING_LABEL_NUMBER, r"^.{14}$", "exactly 14 characters");
    pattern!(UN_NUMBER, r"^\d{4}$", "4 digits");
    pattern!(HAZARDOUS_WEIGHT, r"^\d{1,4}\.\d{1,2}$", "format 9999.99");
    pattern!(CUSTOMS_ORIGIN, r"^[A-Z]$", "one uppercase letter");
    pattern!(VAT_NUMBER, r"^[A-Z]{2}\w{1,15}$", "country prefix plus up to 15 characters");
    pattern!(CUSTOMS_TARIF, r"^[0-9]{8,10}$", "8 to 10 digits");
    pattern!(SENDING_DEPOT, r"^[a-z0-9]{4}$", "4 lowercase letters or digits");
    pattern!(
        SENDING_DATE,
        r"^2[0-9]{3}(0[0-9]|1[0-2])(0[1-9]|[12][0-9]|3[01])$",
        "format YYYYMMDD"
    );
    pattern!(
        SENDING_TIME,
        r"^(([01][0-9]|2[0-3])[0-5][0-9][0-5][0-9]|[0-9][0-5][0-9][0-5][0-9])$",
        "format HHMMSS"
    );
    pattern!(PICKUP_DATE, r"^(\d{2}|\d{4})\d{4}$", "format YYYYMMDD");
    pattern!(HOUR_MINUTE, r"^([01]\d|2[0-3])([0-5]\d)$", "format HHMM");
    pattern!(LANGUAGE, r"^[A-Z]{2}$", "ISO 639-1 format in upper case");
}

/// Reject strings longer than `max` characters (Unicode scalar values, not bytes).
pub fn max_chars(field: &str, value: String, max: usize) -> Result<String, ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::max_length(field, max));
    }
    Ok(value)
}

/// Reject values above `max`.
pub fn at_most<N>(field: &str, value: N, max: N) -> Result<N, ValidationError>
where
    N: PartialOrd + Display,
{
    if value > max {
        return Err(ValidationError::above_max(field, max));
    }
    Ok(value)
}

/// Reject values outside `min..=max`.
pub fn within<N>(field: &str, value: N, min: N, max: N) -> Result<N, ValidationError>
where
    N: PartialOrd + Display,
{
    if value < min || value > max {
        return Err(ValidationError::out_of_range(field, min, max));
    }
    Ok(value)
}

/// Require a full match of `pattern`.
pub fn matches(field: &str, value: String, pattern: &Pattern) -> Result<String, ValidationError> {
    if !pattern.is_match(&value) {
        return Err(ValidationError::pattern(field, pattern.description, &value));
    }
    Ok(value)
}

/// Require the decimal's canonical text form (scale preserved) to match `pattern`.
pub fn decimal_matches(
    field: &str,
    value: Decimal,
    pattern: &Pattern,
) -> Result<Decimal, ValidationError> {
    let text = value.to_string();
    if !pattern.is_match(&text) {
        return Err(ValidationError::pattern(field, pattern.description, &text));
    }
    Ok(value)
}

/// Require the integer's decimal digits to match `pattern`.
pub fn digits_match(field: &str, value: u32, pattern: &Pattern) -> Result<u32, ValidationError> {
    let text = value.to_string();
    if !pattern.is_match(&text) {
        return Err(ValidationError::pattern(field, pattern.description, &text));
    }
    Ok(value)
}

/// Bulk assignment of a capped list.
pub fn capped<T>(field: &str, items: Vec<T>, max: usize) -> Result<Vec<T>, ValidationError> {
    if items.len() > max {
        return Err(ValidationError::too_many(field, max));
    }
    Ok(items)
}

/// Append to a capped list, rejecting when it is already full.
pub fn push_capped<T>(
    field: &str,
    items: &mut Vec<T>,
    item: T,
    max: usize,
) -> Result<(), ValidationError> {
    if items.len() >= max {
        return Err(ValidationError::too_many(field, max));
    }
    items.push(item);
    Ok(())
}
