//! Borrowed Bestie backend library.
//!
//! The crate is laid out as a hexagon: `domain` holds entities, services and
//! the port traits; `outbound` holds the in-memory store and the Stripe
//! adapter; `inbound::http` exposes the JSON API over Actix.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
