use std::fmt;

use thiserror::Error;

/// Errors that can occur while assembling requests or talking to the web services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PaketError {
    /// A field value violated one of the carrier's constraints.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// XML generation or parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Network or HTTP error before a SOAP reply could be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a SOAP fault that is not an authentication fault.
    #[error("SOAP fault: {0}")]
    Fault(SoapFault),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A SOAP fault the dispatcher could not map to an [`AuthenticationFault`](super::AuthenticationFault).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapFault {
    /// `faultcode`, e.g. `soap:Server`.
    pub code: String,
    /// `faultstring`.
    pub message: String,
}

impl fmt::Display for SoapFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// The kind of constraint a rejected value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// More characters than the field allows.
    MaxLength(usize),
    /// Numeric value outside the allowed range.
    Range,
    /// Value does not match the field's format.
    Pattern,
    /// Value is not one of the allowed codes.
    NotAllowed,
    /// A list would exceed its maximum number of entries.
    Cardinality(usize),
}

/// A rejected field assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Wire name of the field (e.g. "name1", "parcelLabelNumber").
    pub field: String,
    /// Violated constraint.
    pub constraint: Constraint,
    /// Human-readable error description.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, constraint: Constraint, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint,
            message: message.into(),
        }
    }

    pub(crate) fn max_length(field: &str, max: usize) -> Self {
        Self::new(
            field,
            Constraint::MaxLength(max),
            format!("max length {field} is {max}"),
        )
    }

    pub(crate) fn above_max(field: &str, max: impl fmt::Display) -> Self {
        Self::new(field, Constraint::Range, format!("max {field} value is {max}"))
    }

    pub(crate) fn out_of_range(
        field: &str,
        min: impl fmt::Display,
        max: impl fmt::Display,
    ) -> Self {
        Self::new(
            field,
            Constraint::Range,
            format!("{field} must be between {min} and {max}"),
        )
    }

    pub(crate) fn pattern(field: &str, expected: &str, entered: &str) -> Self {
        Self::new(
            field,
            Constraint::Pattern,
            format!("{field} should be {expected}, entered '{entered}'"),
        )
    }

    pub(crate) fn not_allowed(field: &str, entered: &str, allowed: &[&str]) -> Self {
        Self::new(
            field,
            Constraint::NotAllowed,
            format!(
                "allowed {field} list is {}, entered '{entered}'",
                allowed.join(", ")
            ),
        )
    }

    pub(crate) fn too_many(field: &str, max: usize) -> Self {
        Self::new(
            field,
            Constraint::Cardinality(max),
            format!("max {field} count is {max}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field_and_constraint() {
        let err = ValidationError::max_length("name1", 50);
        assert_eq!(err.to_string(), "name1: max length name1 is 50");
        assert_eq!(err.constraint, Constraint::MaxLength(50));
    }

    #[test]
    fn not_allowed_lists_codes() {
        let err = ValidationError::not_allowed("addressType", "XYZ", &["PRV", "COM"]);
        assert!(err.message.contains("PRV, COM"));
        assert!(err.message.contains("'XYZ'"));
    }

    #[test]
    fn validation_converts_into_paket_error() {
        let err: PaketError = ValidationError::too_many("order", 30).into();
        assert!(matches!(err, PaketError::Validation(_)));
        assert!(err.to_string().contains("max order count is 30"));
    }
}
