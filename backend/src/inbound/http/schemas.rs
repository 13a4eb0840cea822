//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

#![expect(
    dead_code,
    reason = "schema wrappers are only read by utoipa during OpenAPI generation"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request clashes with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// No payment provider credential is configured.
    #[schema(rename = "payment_not_configured")]
    PaymentNotConfigured,
    /// The payment provider rejected or failed the call.
    #[schema(rename = "payment_provider_error")]
    PaymentProviderError,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Listener not found")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, usually `{field, code}` for validation errors.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Listener`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Listener, rename_all = "camelCase")]
pub struct ListenerSchema {
    #[schema(example = 1)]
    id: u32,
    #[schema(example = "Sarah Chen")]
    name: String,
    bio: String,
    /// Ordered specialty tags; lookups match them exactly.
    #[schema(example = json!(["Anxiety", "Life Transitions"]))]
    specialties: Vec<String>,
    #[schema(example = json!(["English", "Mandarin"]))]
    languages: Vec<String>,
    /// Average rating as a decimal string.
    #[schema(example = "4.90")]
    rating: String,
    review_count: u32,
    image_url: String,
    is_available: bool,
}

/// OpenAPI schema for [`session_pricing::SessionType`].
#[derive(ToSchema)]
#[schema(as = crate::domain::SessionType)]
pub enum SessionTypeSchema {
    /// 15 minutes, $15.00.
    #[schema(rename = "15")]
    Fifteen,
    /// 30 minutes, $25.00.
    #[schema(rename = "30")]
    Thirty,
    /// 60 minutes, $40.00.
    #[schema(rename = "60")]
    Sixty,
}

/// OpenAPI schema for [`crate::domain::BookingStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BookingStatus)]
pub enum BookingStatusSchema {
    #[schema(rename = "pending")]
    Pending,
    #[schema(rename = "confirmed")]
    Confirmed,
    #[schema(rename = "completed")]
    Completed,
    #[schema(rename = "cancelled")]
    Cancelled,
}

/// OpenAPI schema for [`crate::domain::Booking`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Booking, rename_all = "camelCase")]
pub struct BookingSchema {
    #[schema(example = 1)]
    id: u32,
    user_id: Option<u32>,
    #[schema(example = 1)]
    listener_id: u32,
    session_type: SessionTypeSchema,
    #[schema(example = "2026-03-01T15:00:00Z")]
    session_date: String,
    #[schema(example = "3:00 PM")]
    session_time: String,
    /// Price as a two-decimal string.
    #[schema(example = "25.00")]
    amount: String,
    payment_intent_id: Option<String>,
    status: BookingStatusSchema,
    notes: Option<String>,
    #[schema(example = "2026-02-20T10:00:00Z")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::ContactMessage`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ContactMessage, rename_all = "camelCase")]
pub struct ContactMessageSchema {
    #[schema(example = 1)]
    id: u32,
    name: String,
    #[schema(example = "ada@example.com")]
    email: String,
    subject: String,
    message: String,
    created_at: String,
}
