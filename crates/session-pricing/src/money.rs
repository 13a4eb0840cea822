//! Money amounts held in minor units (cents).
//!
//! Amounts travel as decimal strings in stored records (`"25.00"`) and as JSON
//! numbers in payment requests (`25`). Both forms convert into [`Money`], which
//! keeps the value as an integer number of cents so comparisons are exact.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::MoneyError;

const CENTS_PER_UNIT: u64 = 100;
/// Largest integer a double represents exactly (2^53 - 1).
const MAX_EXACT_MINOR_UNITS: f64 = 9_007_199_254_740_991.0;

/// A non-negative amount of money in minor units.
///
/// # Examples
///
/// ```
/// use session_pricing::Money;
///
/// let amount = Money::parse_decimal("40").expect("valid amount");
/// assert_eq!(amount.cents(), 4000);
/// assert_eq!(amount.to_string(), "40.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    /// Construct an amount from minor units.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Convert a major-unit amount into cents by multiplying by 100 and
    /// rounding half up, matching the rounding rule of the payment client.
    ///
    /// Only positive amounts are accepted, so half-away-from-zero rounding and
    /// half-up rounding coincide.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NotFinite`] for NaN or infinities,
    /// [`MoneyError::NotPositive`] for zero or negative input, and
    /// [`MoneyError::OutOfRange`] when the result exceeds the exactly
    /// representable integer range of `f64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use session_pricing::Money;
    ///
    /// assert_eq!(Money::from_major_units(19.999).map(Money::cents), Ok(2000));
    /// assert_eq!(Money::from_major_units(0.5).map(Money::cents), Ok(50));
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "minor-unit conversion is defined on the JSON number sent by clients"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is rounded, positive and range-checked before the cast"
    )]
    pub fn from_major_units(amount: f64) -> Result<Self, MoneyError> {
        if !amount.is_finite() {
            return Err(MoneyError::NotFinite);
        }
        if amount <= 0.0 {
            return Err(MoneyError::NotPositive);
        }
        let minor = (amount * 100.0).round();
        if minor > MAX_EXACT_MINOR_UNITS {
            return Err(MoneyError::OutOfRange);
        }
        if minor < 1.0 {
            return Err(MoneyError::NotPositive);
        }
        Ok(Self(minor as u64))
    }

    /// Amount in major units, as sent to JSON APIs that take numbers.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "JSON payment requests carry the amount as a number of major units"
    )]
    #[must_use]
    pub fn as_major_units(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a non-negative decimal string with at most two fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Malformed`] for anything other than digits with an
    /// optional `.` and one or two fractional digits, and
    /// [`MoneyError::OutOfRange`] when the value overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use session_pricing::Money;
    ///
    /// assert_eq!(Money::parse_decimal("4.9").map(Money::cents), Ok(490));
    /// assert!(Money::parse_decimal("4.999").is_err());
    /// assert!(Money::parse_decimal("-1").is_err());
    /// ```
    pub fn parse_decimal(raw: &str) -> Result<Self, MoneyError> {
        let malformed = || MoneyError::Malformed {
            value: raw.to_owned(),
        };
        let trimmed = raw.trim();
        let (whole, fraction) = trimmed
            .split_once('.')
            .map_or((trimmed, None), |(whole, fraction)| (whole, Some(fraction)));

        if !is_digits(whole) {
            return Err(malformed());
        }
        let fraction_cents = match fraction {
            None => 0,
            Some(digits) if is_digits(digits) && digits.len() <= 2 => format!("{digits:0<2}")
                .parse::<u64>()
                .map_err(|_| malformed())?,
            Some(_) => return Err(malformed()),
        };
        let whole_units = whole.parse::<u64>().map_err(|_| MoneyError::OutOfRange)?;
        whole_units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Self)
            .ok_or(MoneyError::OutOfRange)
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0.div_euclid(CENTS_PER_UNIT),
            self.0.rem_euclid(CENTS_PER_UNIT)
        )
    }
}

/// Serialises as a two-decimal string such as `"25.00"`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_decimal(&raw).map_err(de::Error::custom)
    }
}
