//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local repositories for listeners, bookings, contact
//!   messages and users
//! - **stripe**: reqwest-backed payment gateway
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod memory;
pub mod stripe;
