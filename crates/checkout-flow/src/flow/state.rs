//! States of one checkout attempt and the notices shown along the way.

use url::Url;

use crate::draft::{BookingDraft, ListenerSnapshot};

/// Visual weight of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Positive confirmation.
    Success,
    /// Something went wrong.
    Destructive,
}

/// A toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short heading.
    pub title: String,
    /// Body text.
    pub description: String,
    /// How the notice is styled.
    pub tone: Tone,
}

impl Notice {
    pub(crate) fn success(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_owned(),
            description: description.into(),
            tone: Tone::Success,
        }
    }

    pub(crate) fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_owned(),
            description: description.into(),
            tone: Tone::Destructive,
        }
    }
}

/// Where the client should navigate after a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// The landing page.
    Home,
}

/// Progress of a single checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    /// Browsing the listener directory.
    SelectingListener,
    /// Choosing session length and notes for `listener`.
    ConfiguringSession {
        /// Listener picked in the previous step.
        listener: ListenerSnapshot,
    },
    /// Draft assembled and ready to be staged.
    StagingDraft {
        /// Draft to stage.
        draft: BookingDraft,
    },
    /// On the payment page, waiting for a client secret.
    AwaitingPaymentIntent {
        /// Retryable failure from the previous attempt.
        notice: Option<Notice>,
    },
    /// Provider form bound to `client_secret`.
    PresentingPaymentForm {
        /// Draft being paid for; carries the booking id.
        draft: BookingDraft,
        /// Secret for the provider SDK.
        client_secret: String,
        /// Decline message from the previous submission.
        notice: Option<Notice>,
    },
    /// Confirmation in flight.
    Submitting {
        /// Draft being paid for.
        draft: BookingDraft,
        /// Secret for the provider SDK.
        client_secret: String,
    },
    /// Paid; the draft has been discarded.
    Succeeded {
        /// Success toast.
        notice: Notice,
        /// Navigation target.
        redirect: Redirect,
    },
    /// Payments cannot be taken; only return-home is offered.
    Failed {
        /// Configuration message shown to the user.
        message: String,
        /// Navigation target.
        redirect: Redirect,
    },
    /// The user left for the external scheduling page.
    HandedOff {
        /// Page opened for the user.
        url: Url,
    },
    /// Nothing left to pay for.
    Abandoned {
        /// Shown when the payment page found no draft.
        notice: Option<Notice>,
        /// Navigation target.
        redirect: Redirect,
    },
}

impl CheckoutState {
    /// Human-readable state name used in transition errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectingListener => "selecting listener",
            Self::ConfiguringSession { .. } => "configuring session",
            Self::StagingDraft { .. } => "staging draft",
            Self::AwaitingPaymentIntent { .. } => "awaiting payment intent",
            Self::PresentingPaymentForm { .. } => "presenting payment form",
            Self::Submitting { .. } => "submitting",
            Self::Succeeded { .. } => "succeeded",
            Self::Failed { .. } => "failed",
            Self::HandedOff { .. } => "handed off",
            Self::Abandoned { .. } => "abandoned",
        }
    }

    /// Whether no further events are accepted.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Succeeded { .. } | Self::Failed { .. } | Self::HandedOff { .. } | Self::Abandoned { .. }
        )
    }
}
