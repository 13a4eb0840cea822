//! Listener directory handlers.
//!
//! ```text
//! GET /api/listeners
//! GET /api/listeners/specialty/{specialty}
//! GET /api/listeners/{id}
//! GET /api/listeners/{id}/bookings
//! ```

use actix_web::{get, web};

use crate::domain::{Booking, Listener, ListenerId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BookingSchema, ErrorSchema, ListenerSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id};

const ID_FIELD: FieldName = FieldName::new("id");

/// List every listener in insertion order.
#[utoipa::path(
    get,
    path = "/api/listeners",
    responses(
        (status = 200, description = "Listeners", body = [ListenerSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["listeners"],
    operation_id = "listListeners"
)]
#[get("/listeners")]
pub async fn list_listeners(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Listener>>> {
    state.listeners.list_all().await.map(web::Json)
}

/// List listeners carrying an exact, case-sensitive specialty tag.
#[utoipa::path(
    get,
    path = "/api/listeners/specialty/{specialty}",
    params(("specialty" = String, Path, description = "Specialty tag, e.g. `Anxiety`")),
    responses(
        (status = 200, description = "Matching listeners, possibly none", body = [ListenerSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["listeners"],
    operation_id = "listListenersBySpecialty"
)]
#[get("/listeners/specialty/{specialty}")]
pub async fn listeners_by_specialty(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Listener>>> {
    let specialty = path.into_inner();
    state
        .listeners
        .by_specialty(&specialty)
        .await
        .map(web::Json)
}

/// Fetch one listener.
#[utoipa::path(
    get,
    path = "/api/listeners/{id}",
    params(("id" = u32, Path, description = "Listener id")),
    responses(
        (status = 200, description = "Listener", body = ListenerSchema),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "Listener not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["listeners"],
    operation_id = "getListener"
)]
#[get("/listeners/{id}")]
pub async fn get_listener(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Listener>> {
    let id: ListenerId = parse_id(&path, ID_FIELD)?;
    state.listeners.get(id).await.map(web::Json)
}

/// List the bookings made with one listener.
#[utoipa::path(
    get,
    path = "/api/listeners/{id}/bookings",
    params(("id" = u32, Path, description = "Listener id")),
    responses(
        (status = 200, description = "Bookings for the listener", body = [BookingSchema]),
        (status = 400, description = "Id is not an integer", body = ErrorSchema),
        (status = 404, description = "Listener not found", body = ErrorSchema)
    ),
    tags = ["listeners"],
    operation_id = "listListenerBookings"
)]
#[get("/listeners/{id}/bookings")]
pub async fn listener_bookings(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Booking>>> {
    let id: ListenerId = parse_id(&path, ID_FIELD)?;
    state.bookings.for_listener(id).await.map(web::Json)
}
