//! Booking handlers.
//!
//! ```text
//! POST  /api/bookings {"listenerId":1,"sessionType":"30","sessionDate":"2026-03-01T15:00:00Z",
//!                      "sessionTime":"3:00 PM","amount":"25.00"}
//! GET   /api/bookings/{id}
//! PATCH /api/bookings/{id}/status {"status":"confirmed"}
//! ```

use actix_web::{HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Booking, BookingId, Error, ListenerId, NewBooking, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BookingSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_amount, parse_booking_status, parse_id, parse_rfc3339_timestamp,
    parse_session_type, require, require_text,
};

/// Booking creation body for `POST /api/bookings`.
///
/// Every field is optional at the serde layer so a missing field is reported
/// by name rather than as a generic decode failure.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Booking user; must exist when given.
    pub user_id: Option<u32>,
    /// Listener being booked; must exist.
    #[schema(example = 1)]
    pub listener_id: Option<u32>,
    /// One of `"15"`, `"30"` or `"60"`.
    #[schema(example = "30")]
    pub session_type: Option<String>,
    /// RFC 3339 timestamp.
    #[schema(example = "2026-03-01T15:00:00Z")]
    pub session_date: Option<String>,
    /// Free-text time slot.
    #[schema(example = "3:00 PM")]
    pub session_time: Option<String>,
    /// Decimal string equal to the session price.
    #[schema(example = "25.00")]
    pub amount: Option<String>,
    pub payment_intent_id: Option<String>,
    /// Initial status; defaults to `pending`.
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<CreateBookingRequest> for NewBooking {
    type Error = Error;

    fn try_from(value: CreateBookingRequest) -> Result<Self, Self::Error> {
        let CreateBookingRequest {
            user_id,
            listener_id,
            session_type,
            session_date,
            session_time,
            amount,
            payment_intent_id,
            status,
            notes,
        } = value;

        let listener_id = ListenerId::new(require(listener_id, FieldName::new("listenerId"))?);
        let session_type = parse_session_type(
            require(session_type, FieldName::new("sessionType"))?,
            FieldName::new("sessionType"),
        )?;
        let session_date = parse_rfc3339_timestamp(
            require(session_date, FieldName::new("sessionDate"))?,
            FieldName::new("sessionDate"),
        )?;
        let session_time = require_text(session_time, FieldName::new("sessionTime"))?;
        let amount = parse_amount(
            require(amount, FieldName::new("amount"))?,
            FieldName::new("amount"),
        )?;
        let status = status
            .map(|raw| parse_booking_status(raw, FieldName::new("status")))
            .transpose()?;

        Ok(Self {
            user_id: user_id.map(UserId::new),
            listener_id,
            session_type,
            session_date,
            session_time,
            amount,
            payment_intent_id,
            status,
            notes,
        })
    }
}

/// Status update body for `PATCH /api/bookings/{id}/status`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UpdateBookingStatusRequest {
    /// One of `pending`, `confirmed`, `completed` or `cancelled`.
    #[schema(example = "confirmed")]
    pub status: Option<String>,
}

/// Create a booking after checking its listener, user and price.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingSchema),
        (status = 400, description = "Invalid booking", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBookingRequest>,
) -> ApiResult<HttpResponse> {
    let booking = NewBooking::try_from(payload.into_inner())?;
    let created = state.bookings.create(booking).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Fetch one booking.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    params(("id" = u32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking", body = BookingSchema),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "Booking not found", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "getBooking"
)]
#[get("/bookings/{id}")]
pub async fn get_booking(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Booking>> {
    let id: BookingId = parse_id(&path, FieldName::new("id"))?;
    state.bookings.get(id).await.map(web::Json)
}

/// Overwrite a booking's status. Repeating the same update is harmless.
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/status",
    params(("id" = u32, Path, description = "Booking id")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Updated booking", body = BookingSchema),
        (status = 400, description = "Invalid id or status", body = ErrorSchema),
        (status = 404, description = "Booking not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "updateBookingStatus"
)]
#[patch("/bookings/{id}/status")]
pub async fn update_booking_status(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateBookingStatusRequest>,
) -> ApiResult<web::Json<Booking>> {
    let id: BookingId = parse_id(&path, FieldName::new("id"))?;
    let field = FieldName::new("status");
    let status = parse_booking_status(require(payload.into_inner().status, field)?, field)?;
    state.bookings.update_status(id, status).await.map(web::Json)
}

#[cfg(test)]
#[path = "bookings_tests.rs"]
mod tests;
