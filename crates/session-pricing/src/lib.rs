//! Session pricing primitives shared by the booking backend and its clients.
//!
//! The listening service sells three fixed session lengths. Both the server
//! (which checks that a booking's amount matches its session) and the checkout
//! client (which stages a draft and asks for a payment intent) read prices from
//! the table in this crate so the two sides cannot drift apart.
//!
//! # Example
//!
//! ```
//! use session_pricing::{Money, SessionType};
//!
//! let session: SessionType = "30".parse().expect("known session type");
//! assert_eq!(session.price(), Money::from_cents(2500));
//! assert_eq!(session.price().to_string(), "25.00");
//! assert_eq!(Money::from_major_units(25.0), Ok(Money::from_cents(2500)));
//! ```

mod error;
mod money;
mod session_type;

pub use error::{MoneyError, SessionTypeError};
pub use money::Money;
pub use session_type::SessionType;
