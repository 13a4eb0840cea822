//! The checkout state machine.
//!
//! One [`CheckoutFlow`] drives one booking attempt from listener selection to
//! a terminal outcome. Events are methods; each checks the current state and
//! returns [`CheckoutError::InvalidTransition`] without changing anything when
//! the event does not apply.
//!
//! ```text
//! SelectingListener -> ConfiguringSession -> StagingDraft -> AwaitingPaymentIntent
//!     -> PresentingPaymentForm <-> Submitting -> Succeeded
//! ConfiguringSession -> HandedOff
//! AwaitingPaymentIntent -> Failed | Abandoned
//! ```

mod state;

pub use state::{CheckoutState, Notice, Redirect, Tone};

use std::mem;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use session_pricing::SessionType;
use tracing::{info, warn};

use crate::api::{CheckoutApi, CreateBooking};
use crate::config::CheckoutConfig;
use crate::confirmer::PaymentConfirmer;
use crate::draft::{BookingDraft, DraftStore, ListenerSnapshot, read_draft, stage_draft};
use crate::error::{ApiError, CheckoutError, PAYMENT_NOT_CONFIGURED_MESSAGE};

const NO_DRAFT_TITLE: &str = "No booking data found";
const NO_DRAFT_DESCRIPTION: &str = "Please start your booking process again.";
const INIT_FAILED_DESCRIPTION: &str = "Failed to initialize payment. Please try again.";
const PAYMENT_FAILED_TITLE: &str = "Payment Failed";
const PAYMENT_SUCCEEDED_TITLE: &str = "Payment Successful";
const PAYMENT_SUCCEEDED_DESCRIPTION: &str =
    "Your session has been booked! Check your email for confirmation.";

/// What the user picked on the session step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionChoice {
    /// Session length.
    pub session_type: SessionType,
    /// Placeholder start until real scheduling happens.
    pub session_date: DateTime<Utc>,
    /// Free-text slot.
    pub session_time: String,
    /// Notes; blank text counts as none.
    pub notes: Option<String>,
}

/// Collaborators the flow calls out to.
#[derive(Clone)]
pub struct CheckoutPorts {
    /// Single-slot draft storage.
    pub drafts: Arc<dyn DraftStore>,
    /// Booking API.
    pub api: Arc<dyn CheckoutApi>,
    /// Provider-side confirmation.
    pub confirmer: Arc<dyn PaymentConfirmer>,
}

/// Driver for one checkout attempt.
pub struct CheckoutFlow {
    config: CheckoutConfig,
    ports: CheckoutPorts,
    state: CheckoutState,
}

impl CheckoutFlow {
    /// Start a new attempt at the listener directory.
    #[must_use]
    pub const fn new(config: CheckoutConfig, ports: CheckoutPorts) -> Self {
        Self {
            config,
            ports,
            state: CheckoutState::SelectingListener,
        }
    }

    /// Start at the payment page, as after a reload or a direct link.
    #[must_use]
    pub const fn at_payment_page(config: CheckoutConfig, ports: CheckoutPorts) -> Self {
        Self {
            config,
            ports,
            state: CheckoutState::AwaitingPaymentIntent { notice: None },
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    fn reject(&self, event: &'static str) -> CheckoutError {
        CheckoutError::InvalidTransition {
            event,
            state: self.state.name(),
        }
    }

    /// Pick a listener. Picking again while configuring replaces the choice.
    ///
    /// # Errors
    /// [`CheckoutError::InvalidTransition`] outside the first two steps.
    pub fn select_listener(
        &mut self,
        listener: ListenerSnapshot,
    ) -> Result<&CheckoutState, CheckoutError> {
        match self.state {
            CheckoutState::SelectingListener | CheckoutState::ConfiguringSession { .. } => {
                self.state = CheckoutState::ConfiguringSession { listener };
                Ok(&self.state)
            }
            _ => Err(self.reject("select a listener")),
        }
    }

    /// Fix the session details and assemble the draft.
    ///
    /// # Errors
    /// [`CheckoutError::InvalidTransition`] unless configuring a session.
    pub fn configure_session(
        &mut self,
        choice: SessionChoice,
    ) -> Result<&CheckoutState, CheckoutError> {
        let CheckoutState::ConfiguringSession { listener } = &self.state else {
            return Err(self.reject("configure a session"));
        };
        let SessionChoice {
            session_type,
            session_date,
            session_time,
            notes,
        } = choice;
        let draft = BookingDraft {
            listener: listener.clone(),
            session_type,
            session_date,
            session_time,
            notes: notes.filter(|text| !text.trim().is_empty()),
            booking_id: None,
        };
        self.state = CheckoutState::StagingDraft { draft };
        Ok(&self.state)
    }

    /// Leave for the external scheduling page instead of paying in-app.
    ///
    /// # Errors
    /// [`CheckoutError::InvalidTransition`] unless configuring a session;
    /// [`CheckoutError::NoSchedulingLink`] when no page is configured.
    pub fn hand_off(&mut self) -> Result<&CheckoutState, CheckoutError> {
        if !matches!(self.state, CheckoutState::ConfiguringSession { .. }) {
            return Err(self.reject("hand off to scheduling"));
        }
        let url = self
            .config
            .scheduling_url()
            .cloned()
            .ok_or(CheckoutError::NoSchedulingLink)?;
        info!(%url, "handing off to external scheduling");
        self.state = CheckoutState::HandedOff { url };
        Ok(&self.state)
    }

    /// Stage the draft, overwriting any earlier one, and move to the payment
    /// page.
    ///
    /// # Errors
    /// [`CheckoutError::InvalidTransition`] unless a draft is assembled;
    /// [`CheckoutError::Draft`] when staging fails.
    pub fn proceed_to_payment(&mut self) -> Result<&CheckoutState, CheckoutError> {
        let CheckoutState::StagingDraft { draft } = &self.state else {
            return Err(self.reject("proceed to payment"));
        };
        stage_draft(self.ports.drafts.as_ref(), draft)?;
        self.state = CheckoutState::AwaitingPaymentIntent { notice: None };
        Ok(&self.state)
    }

    /// Run the payment-page load: check configuration, read the staged
    /// draft, make sure a booking of record exists and request an intent.
    ///
    /// Transient API failures leave the flow awaiting an intent with a notice
    /// so the load can be retried; the booking id is kept in the draft so a
    /// retry does not create a second booking.
    ///
    /// # Errors
    /// [`CheckoutError::InvalidTransition`] unless awaiting an intent;
    /// [`CheckoutError::Draft`] when the draft cannot be re-staged.
    pub async fn load_payment_page(&mut self) -> Result<&CheckoutState, CheckoutError> {
        if !matches!(self.state, CheckoutState::AwaitingPaymentIntent { .. }) {
            return Err(self.reject("load the payment page"));
        }

        if self.config.publishable_key().is_none() {
            warn!("publishable key missing; payments unavailable");
            self.state = CheckoutState::Failed {
                message: PAYMENT_NOT_CONFIGURED_MESSAGE.to_owned(),
                redirect: Redirect::Home,
            };
            return Ok(&self.state);
        }

        let Some(mut draft) = self.staged_draft() else {
            self.state = CheckoutState::Abandoned {
                notice: Some(Notice::destructive(NO_DRAFT_TITLE, NO_DRAFT_DESCRIPTION)),
                redirect: Redirect::Home,
            };
            return Ok(&self.state);
        };

        if draft.booking_id.is_none() {
            let created = self
                .ports
                .api
                .create_booking(&CreateBooking::from(&draft))
                .await;
            match created {
                Ok(id) => {
                    draft.booking_id = Some(id);
                    stage_draft(self.ports.drafts.as_ref(), &draft)?;
                }
                Err(err) => return Ok(self.intent_failed(&err)),
            }
        }

        let intent = self
            .ports
            .api
            .create_payment_intent(draft.price(), draft.booking_id)
            .await;
        match intent {
            Ok(client_secret) => {
                self.state = CheckoutState::PresentingPaymentForm {
                    draft,
                    client_secret,
                    notice: None,
                };
                Ok(&self.state)
            }
            Err(err) => Ok(self.intent_failed(&err)),
        }
    }

    fn staged_draft(&self) -> Option<BookingDraft> {
        match read_draft(self.ports.drafts.as_ref()) {
            Ok(draft) => draft,
            Err(err) => {
                warn!(error = %err, "discarding unreadable draft");
                self.ports.drafts.clear();
                None
            }
        }
    }

    fn intent_failed(&mut self, err: &ApiError) -> &CheckoutState {
        self.state = match err {
            ApiError::PaymentNotConfigured { message } => CheckoutState::Failed {
                message: message.clone(),
                redirect: Redirect::Home,
            },
            other => {
                warn!(error = %other, "payment initialisation failed");
                CheckoutState::AwaitingPaymentIntent {
                    notice: Some(Notice::destructive("Error", INIT_FAILED_DESCRIPTION)),
                }
            }
        };
        &self.state
    }

    /// Submit the payment form.
    ///
    /// A decline returns to the form with the provider's message; success
    /// clears the staged draft.
    ///
    /// # Errors
    /// [`CheckoutError::InvalidTransition`] unless the form is presented.
    pub async fn submit_payment(&mut self) -> Result<&CheckoutState, CheckoutError> {
        let (draft, client_secret) =
            match mem::replace(&mut self.state, CheckoutState::SelectingListener) {
                CheckoutState::PresentingPaymentForm {
                    draft,
                    client_secret,
                    ..
                } => (draft, client_secret),
                other => {
                    self.state = other;
                    return Err(self.reject("submit payment"));
                }
            };
        self.state = CheckoutState::Submitting {
            draft: draft.clone(),
            client_secret: client_secret.clone(),
        };

        match self.ports.confirmer.confirm(&client_secret).await {
            Ok(()) => {
                self.ports.drafts.clear();
                info!(booking_id = ?draft.booking_id, "payment confirmed");
                self.state = CheckoutState::Succeeded {
                    notice: Notice::success(PAYMENT_SUCCEEDED_TITLE, PAYMENT_SUCCEEDED_DESCRIPTION),
                    redirect: Redirect::Home,
                };
            }
            Err(declined) => {
                self.state = CheckoutState::PresentingPaymentForm {
                    draft,
                    client_secret,
                    notice: Some(Notice::destructive(PAYMENT_FAILED_TITLE, declined.message)),
                };
            }
        }
        Ok(&self.state)
    }

    /// Walk away before submitting. The staged draft is discarded and nothing
    /// is sent to the server.
    ///
    /// # Errors
    /// [`CheckoutError::InvalidTransition`] while submitting or once terminal.
    pub fn abandon(&mut self) -> Result<&CheckoutState, CheckoutError> {
        if self.state.is_terminal() || matches!(self.state, CheckoutState::Submitting { .. }) {
            return Err(self.reject("abandon"));
        }
        self.ports.drafts.clear();
        self.state = CheckoutState::Abandoned {
            notice: None,
            redirect: Redirect::Home,
        };
        Ok(&self.state)
    }
}
