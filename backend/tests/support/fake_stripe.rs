//! In-process stand-in for the Stripe payment intents API.
//!
//! Binds an Actix server on an ephemeral loopback port, records every create
//! request's form fields and answers with canned intents.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use bestie_backend::domain::ports::PaymentGateway;
use bestie_backend::outbound::stripe::StripeGateway;
use serde_json::json;
use url::Url;

/// One recorded `POST /v1/payment_intents` call.
#[derive(Debug, Clone)]
pub struct RecordedCreate {
    pub authorization: Option<String>,
    pub form: HashMap<String, String>,
}

#[derive(Clone)]
struct FakeState {
    creates: Arc<Mutex<Vec<RecordedCreate>>>,
    retrieve_status: Arc<str>,
    retrieve_booking: Arc<str>,
}

/// Running fake provider.
pub struct FakeStripe {
    addr: SocketAddr,
    handle: ServerHandle,
    creates: Arc<Mutex<Vec<RecordedCreate>>>,
}

impl FakeStripe {
    /// Start a fake whose retrieve endpoint reports `status` and links the
    /// intent to `booking` via metadata.
    pub fn start(status: &str, booking: &str) -> Self {
        let creates = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            creates: creates.clone(),
            retrieve_status: Arc::from(status),
            retrieve_booking: Arc::from(booking),
        };
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .route("/v1/payment_intents", web::post().to(create_intent))
                .route("/v1/payment_intents/{id}", web::get().to(retrieve_intent))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("fake provider should bind");
        let addr = *server.addrs().first().expect("bound address");
        let running = server.run();
        let handle = running.handle();
        actix_web::rt::spawn(running);
        Self {
            addr,
            handle,
            creates,
        }
    }

    /// Gateway pointed at this fake with the given secret key.
    pub fn gateway(&self, secret_key: &str) -> Arc<dyn PaymentGateway> {
        let base = Url::parse(&format!("http://{}", self.addr)).expect("fake base URL");
        let gateway = StripeGateway::new(base, secret_key, Duration::from_secs(5))
            .expect("gateway should build");
        Arc::new(gateway)
    }

    /// Every create request received so far.
    pub fn creates(&self) -> Vec<RecordedCreate> {
        self.creates.lock().expect("recorder lock").clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn create_intent(
    state: web::Data<FakeState>,
    request: HttpRequest,
    form: web::Form<HashMap<String, String>>,
) -> HttpResponse {
    let form = form.into_inner();
    let authorization = request
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let mut creates = state.creates.lock().expect("recorder lock");
    creates.push(RecordedCreate {
        authorization,
        form: form.clone(),
    });
    let id = format!("pi_fake_{}", creates.len());
    let amount: u64 = form
        .get("amount")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();
    HttpResponse::Ok().json(json!({
        "id": id,
        "client_secret": format!("{id}_secret_test"),
        "amount": amount,
        "status": "requires_payment_method",
        "metadata": {
            "bookingId": form.get("metadata[bookingId]").cloned().unwrap_or_default()
        }
    }))
}

async fn retrieve_intent(state: web::Data<FakeState>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    if id == "pi_missing" {
        return HttpResponse::NotFound().json(json!({
            "error": {"message": "No such payment_intent: 'pi_missing'"}
        }));
    }
    HttpResponse::Ok().json(json!({
        "id": id,
        "client_secret": null,
        "amount": 2500,
        "status": &*state.retrieve_status,
        "metadata": {"bookingId": &*state.retrieve_booking}
    }))
}
