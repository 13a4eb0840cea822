//! The three session lengths on offer and their prices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SessionTypeError;
use crate::money::Money;

/// Length of a listening session.
///
/// Serialised as the minute count in a string (`"15"`, `"30"`, `"60"`), which
/// is how bookings store it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    /// Fifteen-minute "Quick Chat".
    #[serde(rename = "15")]
    Fifteen,
    /// Thirty-minute "Deep Dive".
    #[serde(rename = "30")]
    Thirty,
    /// Sixty-minute "Extended" session.
    #[serde(rename = "60")]
    Sixty,
}

impl SessionType {
    /// Every session type, shortest first.
    pub const ALL: [Self; 3] = [Self::Fifteen, Self::Thirty, Self::Sixty];

    /// Wire form of the session type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fifteen => "15",
            Self::Thirty => "30",
            Self::Sixty => "60",
        }
    }

    /// Session length in minutes.
    #[must_use]
    pub const fn duration_minutes(self) -> u32 {
        match self {
            Self::Fifteen => 15,
            Self::Thirty => 30,
            Self::Sixty => 60,
        }
    }

    /// Price charged for the session.
    ///
    /// ```
    /// use session_pricing::{Money, SessionType};
    ///
    /// assert_eq!(SessionType::Sixty.price(), Money::from_cents(4000));
    /// ```
    #[must_use]
    pub const fn price(self) -> Money {
        match self {
            Self::Fifteen => Money::from_cents(1500),
            Self::Thirty => Money::from_cents(2500),
            Self::Sixty => Money::from_cents(4000),
        }
    }

    /// Display name shown next to the price.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fifteen => "Quick Chat",
            Self::Thirty => "Deep Dive",
            Self::Sixty => "Extended",
        }
    }
}

impl FromStr for SessionType {
    type Err = SessionTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|session| session.as_str() == value.trim())
            .ok_or_else(|| SessionTypeError {
                value: value.to_owned(),
            })
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
