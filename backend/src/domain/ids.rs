//! Integer identifiers assigned by storage.
//!
//! Each entity table hands out its own sequence starting at 1, so the ids are
//! distinct types to stop a booking id being used as a listener id.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// The raw identifier.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_entity_id! {
    /// Identifier of a [`crate::domain::Listener`].
    ListenerId
}

define_entity_id! {
    /// Identifier of a [`crate::domain::Booking`].
    BookingId
}

define_entity_id! {
    /// Identifier of a [`crate::domain::ContactMessage`].
    ContactMessageId
}

define_entity_id! {
    /// Identifier of a [`crate::domain::User`].
    UserId
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("7", Some(7))]
    #[case(" 12 ", Some(12))]
    #[case("abc", None)]
    #[case("-1", None)]
    #[case("1.5", None)]
    fn parses_path_segments(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(raw.parse::<ListenerId>().ok().map(ListenerId::get), expected);
    }

    #[test]
    fn serialises_as_plain_number() {
        let json = serde_json::to_string(&BookingId::new(3)).expect("serialise");
        assert_eq!(json, "3");
        let parsed: UserId = serde_json::from_str("9").expect("deserialise");
        assert_eq!(parsed, UserId::new(9));
    }
}
