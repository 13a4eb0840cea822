//! Payment handlers.
//!
//! ```text
//! POST /api/create-payment-intent {"amount":25,"bookingId":3}
//! POST /api/confirm-payment {"paymentIntentId":"pi_123"}
//! ```
//!
//! Both endpoints answer 500 `payment_not_configured` before looking at the
//! body when the server started without a provider credential.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::domain::BookingId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require, require_text};

/// Body for `POST /api/create-payment-intent`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Charge in major units; converted to cents with half-up rounding.
    #[schema(example = 25.0)]
    pub amount: Option<f64>,
    /// Booking being paid for. When present its amount must match.
    pub booking_id: Option<u32>,
}

/// Response for `POST /api/create-payment-intent`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    /// Secret the client passes to the provider SDK.
    pub client_secret: String,
}

/// Body for `POST /api/confirm-payment`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentRequest {
    #[schema(example = "pi_3MtwBwLkdIwHu7ix28a3tqPa")]
    pub payment_intent_id: Option<String>,
}

/// Response for `POST /api/confirm-payment`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ConfirmPaymentResponse {
    pub success: bool,
}

/// Create a payment intent and return its client secret.
#[utoipa::path(
    post,
    path = "/api/create-payment-intent",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "Intent created", body = CreatePaymentIntentResponse),
        (status = 400, description = "Invalid amount or mismatched booking", body = ErrorSchema),
        (status = 404, description = "Booking not found", body = ErrorSchema),
        (status = 500, description = "Payments not configured or provider failure", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "createPaymentIntent"
)]
#[post("/create-payment-intent")]
pub async fn create_payment_intent(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePaymentIntentRequest>,
) -> ApiResult<web::Json<CreatePaymentIntentResponse>> {
    state.payments.ensure_configured()?;
    let CreatePaymentIntentRequest { amount, booking_id } = payload.into_inner();
    let amount = require(amount, FieldName::new("amount"))?;
    let client_secret = state
        .payments
        .create_intent(amount, booking_id.map(BookingId::new))
        .await?;
    Ok(web::Json(CreatePaymentIntentResponse { client_secret }))
}

/// Check a payment intent and confirm the booking it pays for.
#[utoipa::path(
    post,
    path = "/api/confirm-payment",
    request_body = ConfirmPaymentRequest,
    responses(
        (status = 200, description = "Payment succeeded", body = ConfirmPaymentResponse),
        (status = 400, description = "Payment not successful", body = ErrorSchema),
        (status = 500, description = "Payments not configured or provider failure", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "confirmPayment"
)]
#[post("/confirm-payment")]
pub async fn confirm_payment(
    state: web::Data<HttpState>,
    payload: web::Json<ConfirmPaymentRequest>,
) -> ApiResult<web::Json<ConfirmPaymentResponse>> {
    state.payments.ensure_configured()?;
    let payment_intent_id = require_text(
        payload.into_inner().payment_intent_id,
        FieldName::new("paymentIntentId"),
    )?;
    state.payments.confirm(&payment_intent_id).await?;
    Ok(web::Json(ConfirmPaymentResponse { success: true }))
}
