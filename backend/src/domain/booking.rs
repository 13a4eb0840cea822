//! Booking records and their status lifecycle.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use session_pricing::{Money, SessionType};

use crate::domain::{BookingId, ListenerId, UserId};

/// Status of a booking.
///
/// New bookings start as [`BookingStatus::Pending`]; a succeeded payment moves
/// them to [`BookingStatus::Confirmed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown booking status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("status '{value}' must be one of pending, confirmed, completed or cancelled")]
pub struct BookingStatusParseError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for BookingStatus {
    type Err = BookingStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(BookingStatusParseError {
                value: other.to_owned(),
            }),
        }
    }
}

/// A reservation of a session with a listener.
///
/// ## Invariants
/// - `listener_id` referenced an existing listener when the booking was made.
/// - `amount` equals the price of `session_type`.
/// - `created_at` is stamped by storage and never changes.
///
/// Optional fields serialise as `null` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub user_id: Option<UserId>,
    pub listener_id: ListenerId,
    pub session_type: SessionType,
    pub session_date: DateTime<Utc>,
    pub session_time: String,
    pub amount: Money,
    pub payment_intent_id: Option<String>,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Build the stored record for `draft`.
    #[must_use]
    pub fn from_draft(id: BookingId, draft: NewBooking, created_at: DateTime<Utc>) -> Self {
        let NewBooking {
            user_id,
            listener_id,
            session_type,
            session_date,
            session_time,
            amount,
            payment_intent_id,
            status,
            notes,
        } = draft;
        Self {
            id,
            user_id,
            listener_id,
            session_type,
            session_date,
            session_time,
            amount,
            payment_intent_id,
            status: status.unwrap_or_default(),
            notes,
            created_at,
        }
    }
}

/// Validated booking fields supplied at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub user_id: Option<UserId>,
    pub listener_id: ListenerId,
    pub session_type: SessionType,
    pub session_date: DateTime<Utc>,
    pub session_time: String,
    pub amount: Money,
    pub payment_intent_id: Option<String>,
    pub status: Option<BookingStatus>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    fn draft() -> NewBooking {
        NewBooking {
            user_id: None,
            listener_id: ListenerId::new(1),
            session_type: SessionType::Thirty,
            session_date: Utc.with_ymd_and_hms(2026, 3, 1, 15, 0, 0).single().expect("date"),
            session_time: "3:00 PM".to_owned(),
            amount: SessionType::Thirty.price(),
            payment_intent_id: None,
            status: None,
            notes: None,
        }
    }

    #[rstest]
    #[case("pending", BookingStatus::Pending)]
    #[case("confirmed", BookingStatus::Confirmed)]
    #[case("completed", BookingStatus::Completed)]
    #[case("cancelled", BookingStatus::Cancelled)]
    fn parses_statuses(#[case] raw: &str, #[case] expected: BookingStatus) {
        assert_eq!(raw.parse::<BookingStatus>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("Confirmed")]
    #[case("paid")]
    #[case("")]
    fn rejects_unknown_statuses(#[case] raw: &str) {
        assert!(raw.parse::<BookingStatus>().is_err());
    }

    #[test]
    fn status_defaults_to_pending() {
        let created_at = Utc::now();
        let booking = Booking::from_draft(BookingId::new(1), draft(), created_at);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.created_at, created_at);
    }

    #[test]
    fn serialises_with_nulls_and_decimal_amount() {
        let created_at = Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).single().expect("date");
        let booking = Booking::from_draft(BookingId::new(2), draft(), created_at);
        let value = serde_json::to_value(booking).expect("serialise");
        assert_eq!(value["amount"], json!("25.00"));
        assert_eq!(value["sessionType"], json!("30"));
        assert_eq!(value["status"], json!("pending"));
        assert_eq!(value["userId"], json!(null));
        assert_eq!(value["paymentIntentId"], json!(null));
        assert_eq!(value["notes"], json!(null));
        assert_eq!(value["sessionDate"], json!("2026-03-01T15:00:00Z"));
        assert_eq!(value["createdAt"], json!("2026-02-01T09:00:00Z"));
    }
}
