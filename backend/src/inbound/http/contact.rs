//! Contact form handlers.
//!
//! ```text
//! POST /api/contact {"name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello"}
//! GET  /api/contact
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{ContactMessage, ContactMessageValidationError, Error, NewContactMessage};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ContactMessageSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, empty_field_error, invalid_email_error, require,
};

/// Contact form body for `POST /api/contact`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "Volunteering")]
    pub subject: Option<String>,
    #[schema(example = "How do I become a listener?")]
    pub message: Option<String>,
}

impl TryFrom<ContactRequest> for NewContactMessage {
    type Error = Error;

    fn try_from(value: ContactRequest) -> Result<Self, Self::Error> {
        let name = require(value.name, FieldName::new("name"))?;
        let email = require(value.email, FieldName::new("email"))?;
        let subject = require(value.subject, FieldName::new("subject"))?;
        let message = require(value.message, FieldName::new("message"))?;
        NewContactMessage::try_new(name, email, subject, message)
            .map_err(map_contact_validation_error)
    }
}

fn map_contact_validation_error(err: ContactMessageValidationError) -> Error {
    let field = FieldName::new(err.field());
    match err {
        ContactMessageValidationError::EmptyField { .. } => empty_field_error(field),
        ContactMessageValidationError::InvalidEmail => invalid_email_error(field),
    }
}

/// Record a contact form submission.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored", body = ContactMessageSchema),
        (status = 400, description = "Invalid submission", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contact"],
    operation_id = "submitContactMessage"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let message = NewContactMessage::try_from(payload.into_inner())?;
    let stored = state.contact.submit(message).await?;
    Ok(HttpResponse::Created().json(stored))
}

/// List every contact submission, oldest first.
#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "Contact messages", body = [ContactMessageSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contact"],
    operation_id = "listContactMessages"
)]
#[get("/contact")]
pub async fn list_contact_messages(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ContactMessage>>> {
    state.contact.list_all().await.map(web::Json)
}
