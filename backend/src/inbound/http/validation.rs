//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper returns an `invalid_request` [`Error`] whose details carry the
//! offending `field` and a stable `code`, so clients can highlight the input
//! that failed.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::json;
use session_pricing::{Money, SessionType};

use crate::domain::{BookingStatus, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyField,
    InvalidId,
    InvalidTimestamp,
    InvalidSessionType,
    InvalidAmount,
    InvalidStatus,
    InvalidEmail,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyField => "empty_field",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidTimestamp => "invalid_timestamp",
            ErrorCode::InvalidSessionType => "invalid_session_type",
            ErrorCode::InvalidAmount => "invalid_amount",
            ErrorCode::InvalidStatus => "invalid_status",
            ErrorCode::InvalidEmail => "invalid_email",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn empty_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must not be empty")).with_code(ErrorCode::EmptyField)
}

pub(crate) fn invalid_email_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be a valid email address"))
        .with_code(ErrorCode::InvalidEmail)
}

/// Require a field to be present.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Require a string field to be present and non-blank.
pub(crate) fn require_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    let value = require(value, field)?;
    if value.trim().is_empty() {
        return Err(empty_field_error(field));
    }
    Ok(value)
}

/// Parse a numeric path identifier such as `/api/listeners/{id}`.
///
/// Ids arrive as strings so that non-numeric input is reported as a
/// validation failure rather than an unmatched route.
pub(crate) fn parse_id<T: FromStr>(value: &str, field: FieldName) -> Result<T, Error> {
    let name = field.as_str();
    value.trim().parse::<T>().map_err(|_| {
        ValidationError::new(field, format!("{name} must be a positive integer"))
            .with_value(ErrorCode::InvalidId, value)
    })
}

pub(crate) fn parse_rfc3339_timestamp(
    value: String,
    field: FieldName,
) -> Result<DateTime<Utc>, Error> {
    let name = field.as_str();
    DateTime::parse_from_rfc3339(&value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| {
            ValidationError::new(field, format!("{name} must be an RFC 3339 timestamp"))
                .with_value(ErrorCode::InvalidTimestamp, value)
        })
}

pub(crate) fn parse_session_type(value: String, field: FieldName) -> Result<SessionType, Error> {
    value.parse::<SessionType>().map_err(|err| {
        ValidationError::new(field, err.to_string())
            .with_value(ErrorCode::InvalidSessionType, value)
    })
}

pub(crate) fn parse_amount(value: String, field: FieldName) -> Result<Money, Error> {
    Money::parse_decimal(&value).map_err(|err| {
        ValidationError::new(field, err.to_string()).with_value(ErrorCode::InvalidAmount, value)
    })
}

pub(crate) fn parse_booking_status(value: String, field: FieldName) -> Result<BookingStatus, Error> {
    value.parse::<BookingStatus>().map_err(|err| {
        ValidationError::new(field, err.to_string()).with_value(ErrorCode::InvalidStatus, value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode as DomainCode, ListenerId};
    use rstest::rstest;
    use serde_json::Value;

    const FIELD: FieldName = FieldName::new("sample");

    fn detail<'a>(error: &'a Error, key: &str) -> Option<&'a str> {
        error.details().and_then(|d| d.get(key)).and_then(Value::as_str)
    }

    #[rstest]
    #[case("1", Some(1))]
    #[case(" 42 ", Some(42))]
    #[case("abc", None)]
    #[case("-3", None)]
    #[case("1.5", None)]
    fn ids_parse_as_integers(#[case] raw: &str, #[case] expected: Option<u32>) {
        let parsed = parse_id::<ListenerId>(raw, FIELD);
        match expected {
            Some(id) => assert_eq!(parsed.expect("valid id"), ListenerId::new(id)),
            None => {
                let err = parsed.expect_err("invalid id");
                assert_eq!(err.code(), DomainCode::InvalidRequest);
                assert_eq!(detail(&err, "code"), Some("invalid_id"));
                assert_eq!(detail(&err, "value"), Some(raw));
            }
        }
    }

    #[test]
    fn missing_fields_name_the_field() {
        let err = require::<u32>(None, FieldName::new("listenerId")).expect_err("missing");
        assert_eq!(err.message(), "missing required field: listenerId");
        assert_eq!(detail(&err, "field"), Some("listenerId"));
        assert_eq!(detail(&err, "code"), Some("missing_field"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_text_is_rejected(#[case] raw: &str) {
        let err = require_text(Some(raw.to_owned()), FIELD).expect_err("blank");
        assert_eq!(detail(&err, "code"), Some("empty_field"));
    }

    #[rstest]
    #[case("2026-03-01T15:00:00Z", true)]
    #[case("2026-03-01T15:00:00+01:00", true)]
    #[case("2026-03-01", false)]
    #[case("tomorrow", false)]
    fn timestamps_must_be_rfc3339(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(parse_rfc3339_timestamp(raw.to_owned(), FIELD).is_ok(), ok);
    }

    #[test]
    fn offsets_normalise_to_utc() {
        let parsed = parse_rfc3339_timestamp("2026-03-01T16:00:00+01:00".to_owned(), FIELD)
            .expect("valid timestamp");
        assert_eq!(parsed.to_rfc3339(), "2026-03-01T15:00:00+00:00");
    }

    #[rstest]
    #[case("45", "invalid_session_type")]
    fn session_types_are_checked(#[case] raw: &str, #[case] code: &str) {
        let err = parse_session_type(raw.to_owned(), FIELD).expect_err("unknown session");
        assert_eq!(detail(&err, "code"), Some(code));
    }

    #[rstest]
    #[case("25.00", Some(2500))]
    #[case("40", Some(4000))]
    #[case("25.001", None)]
    #[case("twenty", None)]
    fn amounts_parse_as_decimals(#[case] raw: &str, #[case] cents: Option<u64>) {
        let parsed = parse_amount(raw.to_owned(), FIELD);
        assert_eq!(parsed.ok().map(Money::cents), cents);
    }

    #[rstest]
    #[case("confirmed", true)]
    #[case("cancelled", true)]
    #[case("refunded", false)]
    #[case("Confirmed", false)]
    fn statuses_use_wire_names(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(parse_booking_status(raw.to_owned(), FIELD).is_ok(), ok);
    }
}
