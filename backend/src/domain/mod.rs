//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed records of the listening service
//! (listeners, bookings, contact messages and users), the ports adapters
//! implement, and the services the HTTP layer calls. Serialisation contracts
//! are documented on each type.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifiers.
//! - Listener, Booking, ContactMessage, User: stored records and their drafts.
//! - ListenerQueryService, BookingService, ContactService, PaymentService:
//!   orchestration over the ports in [`ports`].

pub mod booking;
pub mod booking_service;
pub mod contact;
pub mod contact_service;
pub mod error;
pub mod ids;
pub mod listener;
pub mod listener_service;
pub mod payment_service;
pub mod ports;
pub mod seed;
pub mod trace_id;
pub mod user;

pub use self::booking::{Booking, BookingStatus, BookingStatusParseError, NewBooking};
pub use self::booking_service::{BOOKING_NOT_FOUND, BookingService};
pub use self::contact::{ContactMessage, ContactMessageValidationError, NewContactMessage};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, PAYMENT_NOT_CONFIGURED_MESSAGE};
pub use self::ids::{BookingId, ContactMessageId, ListenerId, UserId};
pub use self::listener::{DEFAULT_RATING, Listener, NewListener};
pub use self::listener_service::{LISTENER_NOT_FOUND, ListenerQueryService};
pub use self::payment_service::{PAYMENT_NOT_SUCCESSFUL, PaymentService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bestie_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Listener not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
