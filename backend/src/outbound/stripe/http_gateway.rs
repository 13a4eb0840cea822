//! Reqwest-backed Stripe payment gateway.
//!
//! This adapter owns transport details only: form encoding, bearer
//! authentication, timeout and HTTP error mapping, and JSON decoding into
//! domain payment intents. Each call is a single request with no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::{ErrorEnvelopeDto, PaymentIntentDto, booking_metadata_field};
use crate::domain::ports::{
    CreatePaymentIntent, PaymentGateway, PaymentGatewayError, PaymentIntent,
};

/// Public Stripe API origin.
pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Payment gateway that talks to the Stripe REST API.
pub struct StripeGateway {
    client: Client,
    base: Url,
    secret_key: String,
}

impl StripeGateway {
    /// Build a gateway for `base` using a reqwest client with an explicit
    /// request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base: Url,
        secret_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base,
            secret_key: secret_key.into(),
        })
    }

    fn intents_url<'a>(
        &self,
        extra: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, PaymentGatewayError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                PaymentGatewayError::transport(format!(
                    "payment API base '{}' cannot carry a path",
                    self.base
                ))
            })?
            .pop_if_empty()
            .extend(["v1", "payment_intents"])
            .extend(extra);
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<PaymentIntent, PaymentGatewayError> {
        let response = request
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_intent(body.as_ref())
    }
}

impl std::fmt::Debug for StripeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeGateway")
            .field("base", &self.base.as_str())
            .field("secret_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(
        &self,
        request: CreatePaymentIntent,
    ) -> Result<PaymentIntent, PaymentGatewayError> {
        let url = self.intents_url([])?;
        let form = [
            ("amount".to_owned(), request.amount.cents().to_string()),
            ("currency".to_owned(), request.currency.clone()),
            (booking_metadata_field(), request.booking_metadata()),
        ];
        debug!(amount_cents = request.amount.cents(), "creating payment intent");
        self.send(self.client.post(url).form(&form)).await
    }

    async fn retrieve_intent(&self, id: &str) -> Result<PaymentIntent, PaymentGatewayError> {
        if id.trim().is_empty() {
            return Err(PaymentGatewayError::rejected("payment intent id must not be empty"));
        }
        let url = self.intents_url([id])?;
        debug!(payment_intent_id = id, "retrieving payment intent");
        self.send(self.client.get(url)).await
    }
}

fn parse_intent(body: &[u8]) -> Result<PaymentIntent, PaymentGatewayError> {
    let decoded: PaymentIntentDto = serde_json::from_slice(body).map_err(|error| {
        PaymentGatewayError::decode(format!("invalid payment intent payload: {error}"))
    })?;
    Ok(decoded.into_domain())
}

fn map_transport_error(error: reqwest::Error) -> PaymentGatewayError {
    if error.is_timeout() {
        PaymentGatewayError::timeout(error.to_string())
    } else {
        PaymentGatewayError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PaymentGatewayError {
    let message = provider_message(body).unwrap_or_else(|| {
        let preview = body_preview(body);
        if preview.is_empty() {
            format!("status {}", status.as_u16())
        } else {
            format!("status {}: {preview}", status.as_u16())
        }
    });

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            PaymentGatewayError::timeout(message)
        }
        _ if status.is_client_error() => PaymentGatewayError::rejected(message),
        _ => PaymentGatewayError::transport(message),
    }
}

fn provider_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorEnvelopeDto>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|message| !message.trim().is_empty())
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network mapping helpers.

    use super::*;
    use crate::domain::ports::PaymentIntentStatus;
    use rstest::rstest;
    use session_pricing::Money;

    fn gateway(base: &str) -> StripeGateway {
        StripeGateway::new(
            Url::parse(base).expect("valid base"),
            "sk_test_123",
            Duration::from_secs(5),
        )
        .expect("client builds")
    }

    #[rstest]
    #[case("https://api.stripe.com", "https://api.stripe.com/v1/payment_intents/pi_1")]
    #[case("http://127.0.0.1:9/", "http://127.0.0.1:9/v1/payment_intents/pi_1")]
    #[case("http://proxy.test/stripe", "http://proxy.test/stripe/v1/payment_intents/pi_1")]
    fn builds_intent_urls_under_base(#[case] base: &str, #[case] expected: &str) {
        let url = gateway(base).intents_url(["pi_1"]).expect("url builds");
        assert_eq!(url.as_str(), expected);
    }

    #[test]
    fn encodes_intent_ids_as_one_segment() {
        let url = gateway("https://api.stripe.com")
            .intents_url(["pi_1/../x"])
            .expect("url builds");
        assert_eq!(
            url.as_str(),
            "https://api.stripe.com/v1/payment_intents/pi_1%2F..%2Fx"
        );
    }

    #[test]
    fn debug_output_hides_secret_key() {
        let rendered = format!("{:?}", gateway("https://api.stripe.com"));
        assert!(!rendered.contains("sk_test_123"));
    }

    #[test]
    fn decodes_intent_with_booking_metadata() {
        let body = br#"{
            "id": "pi_3Mt",
            "object": "payment_intent",
            "amount": 2500,
            "currency": "usd",
            "client_secret": "pi_3Mt_secret_xyz",
            "status": "succeeded",
            "metadata": { "bookingId": "12" }
        }"#;
        let intent = parse_intent(body).expect("payload decodes");
        assert_eq!(intent.id, "pi_3Mt");
        assert_eq!(intent.amount, Money::from_cents(2500));
        assert_eq!(intent.status, PaymentIntentStatus::Succeeded);
        assert_eq!(intent.booking_metadata, "12");
        assert_eq!(intent.client_secret.as_deref(), Some("pi_3Mt_secret_xyz"));
    }

    #[test]
    fn rejects_payload_without_id() {
        let error = parse_intent(br#"{"amount": 10, "status": "succeeded"}"#)
            .expect_err("decode should fail");
        assert!(matches!(error, PaymentGatewayError::Decode { .. }));
    }

    #[rstest]
    #[case::unauthorised(StatusCode::UNAUTHORIZED, "Rejected")]
    #[case::not_found(StatusCode::NOT_FOUND, "Rejected")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Transport")]
    fn maps_http_statuses_to_gateway_errors(#[case] status: StatusCode, #[case] expected: &str) {
        let error = map_status_error(status, b"{}");
        let matched = match expected {
            "Rejected" => matches!(error, PaymentGatewayError::Rejected { .. }),
            "Timeout" => matches!(error, PaymentGatewayError::Timeout { .. }),
            "Transport" => matches!(error, PaymentGatewayError::Transport { .. }),
            _ => panic!("unsupported test expectation: {expected}"),
        };
        assert!(matched, "{status} should map to {expected}, got {error:?}");
    }

    #[test]
    fn passes_provider_message_through() {
        let error = map_status_error(
            StatusCode::UNAUTHORIZED,
            br#"{"error":{"type":"invalid_request_error","message":"Invalid API Key provided: sk_test_***"}}"#,
        );
        assert_eq!(error.to_string(), "Invalid API Key provided: sk_test_***");
    }

    #[test]
    fn falls_back_to_status_and_preview() {
        let error = map_status_error(StatusCode::BAD_GATEWAY, b"<html>  upstream\n down </html>");
        assert_eq!(error.to_string(), "status 502: <html> upstream down </html>");
    }
}
