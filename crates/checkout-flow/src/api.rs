//! Client boundary to the booking API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use session_pricing::{Money, SessionType};
use tracing::debug;
use url::Url;

use crate::draft::BookingDraft;
use crate::error::ApiError;

/// Body for `POST /api/bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    /// Listener being booked.
    pub listener_id: u32,
    /// Session length.
    pub session_type: SessionType,
    /// Session start.
    pub session_date: DateTime<Utc>,
    /// Free-text slot.
    pub session_time: String,
    /// Price; the server rejects anything but the session's list price.
    pub amount: Money,
    /// Notes for the listener.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&BookingDraft> for CreateBooking {
    fn from(draft: &BookingDraft) -> Self {
        Self {
            listener_id: draft.listener.id,
            session_type: draft.session_type,
            session_date: draft.session_date,
            session_time: draft.session_time.clone(),
            amount: draft.price(),
            notes: draft.notes.clone(),
        }
    }
}

/// Server boundary used by [`crate::CheckoutFlow`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckoutApi: Send + Sync {
    /// Create the booking of record and return its id.
    async fn create_booking(&self, request: &CreateBooking) -> Result<u32, ApiError>;

    /// Create a payment intent and return its client secret.
    async fn create_payment_intent(
        &self,
        amount: Money,
        booking_id: Option<u32>,
    ) -> Result<String, ApiError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaymentIntentBody {
    amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    booking_id: Option<u32>,
}

#[derive(Deserialize)]
struct CreatedBooking {
    id: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientSecret {
    client_secret: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// [`CheckoutApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCheckoutApi {
    client: Client,
    base: Url,
}

impl HttpCheckoutApi {
    /// Build a client for the API served at `base`.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Transport {
                message: format!("API base '{}' cannot carry a path", self.base),
            })?
            .pop_if_empty()
            .extend(["api", path]);
        Ok(url)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "calling booking API");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(classify_failure(status, &bytes));
        }
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode {
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl CheckoutApi for HttpCheckoutApi {
    async fn create_booking(&self, request: &CreateBooking) -> Result<u32, ApiError> {
        let created: CreatedBooking = self.post_json("bookings", request).await?;
        Ok(created.id)
    }

    async fn create_payment_intent(
        &self,
        amount: Money,
        booking_id: Option<u32>,
    ) -> Result<String, ApiError> {
        let body = PaymentIntentBody {
            amount: amount.as_major_units(),
            booking_id,
        };
        let secret: ClientSecret = self.post_json("create-payment-intent", &body).await?;
        Ok(secret.client_secret)
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport {
        message: err.to_string(),
    }
}

/// Map a failed response to an [`ApiError`]. A 500 whose message says
/// payments are "not configured" is a configuration failure.
fn classify_failure(status: StatusCode, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|decoded| decoded.message);
    match message {
        Some(text)
            if status == StatusCode::INTERNAL_SERVER_ERROR && text.contains("not configured") =>
        {
            ApiError::PaymentNotConfigured { message: text }
        }
        Some(text) => ApiError::Status {
            status: status.as_u16(),
            message: text,
        },
        None => ApiError::Status {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("no message")
                .to_owned(),
        },
    }
}
