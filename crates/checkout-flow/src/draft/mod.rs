//! The staged booking draft and the single-slot store that holds it between
//! the session picker and the payment page.
//!
//! The draft is not a record of truth. It is a snapshot of what the user
//! picked, serialised to JSON so any [`DraftStore`] that can hold one string
//! will do.

mod store;

pub use store::{DraftStore, SessionDraftStore};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use session_pricing::{Money, SessionType};

use crate::error::DraftError;

/// The listener fields the payment page needs for its summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerSnapshot {
    /// Server-assigned listener id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Portrait URL.
    pub image_url: String,
    /// Specialty tags in server order.
    pub specialties: Vec<String>,
}

/// Everything chosen before payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    /// Listener being booked.
    pub listener: ListenerSnapshot,
    /// Chosen session length; determines the price.
    pub session_type: SessionType,
    /// Placeholder start; real scheduling happens off-site.
    pub session_date: DateTime<Utc>,
    /// Free-text time slot, e.g. `3:00 PM`.
    pub session_time: String,
    /// Optional notes for the listener.
    pub notes: Option<String>,
    /// Booking of record, once the server has created it.
    #[serde(default)]
    pub booking_id: Option<u32>,
}

impl BookingDraft {
    /// Amount due for the draft.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.session_type.price()
    }
}

/// Serialise `draft` into the store, replacing whatever was staged.
///
/// # Errors
/// Returns [`DraftError::Encode`] when the draft cannot be serialised.
pub fn stage_draft(store: &dyn DraftStore, draft: &BookingDraft) -> Result<(), DraftError> {
    let raw = serde_json::to_string(draft).map_err(|err| DraftError::Encode {
        message: err.to_string(),
    })?;
    store.save(raw);
    Ok(())
}

/// Read the staged draft, if any.
///
/// # Errors
/// Returns [`DraftError::Corrupt`] when the slot holds something that is not
/// a draft.
pub fn read_draft(store: &dyn DraftStore) -> Result<Option<BookingDraft>, DraftError> {
    store
        .load()
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|err| DraftError::Corrupt {
                message: err.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn draft() -> BookingDraft {
        BookingDraft {
            listener: ListenerSnapshot {
                id: 1,
                name: "Sarah Chen".to_owned(),
                image_url: "https://example.com/sarah.jpg".to_owned(),
                specialties: vec!["Anxiety".to_owned()],
            },
            session_type: SessionType::Thirty,
            session_date: Utc
                .with_ymd_and_hms(2026, 3, 1, 15, 0, 0)
                .single()
                .expect("valid timestamp"),
            session_time: "3:00 PM".to_owned(),
            notes: None,
            booking_id: None,
        }
    }

    #[rstest]
    fn staged_draft_reads_back(draft: BookingDraft) {
        let store = SessionDraftStore::default();
        stage_draft(&store, &draft).expect("stage");
        assert_eq!(read_draft(&store).expect("read"), Some(draft));
    }

    #[rstest]
    fn staging_overwrites_the_slot(draft: BookingDraft) {
        let store = SessionDraftStore::default();
        stage_draft(&store, &draft).expect("stage first");
        let second = BookingDraft {
            session_type: SessionType::Sixty,
            ..draft
        };
        stage_draft(&store, &second).expect("stage second");
        assert_eq!(read_draft(&store).expect("read"), Some(second));
    }

    #[test]
    fn empty_slot_reads_as_none() {
        let store = SessionDraftStore::default();
        assert_eq!(read_draft(&store).expect("read"), None);
    }

    #[test]
    fn garbage_in_slot_is_corrupt() {
        let store = SessionDraftStore::default();
        store.save("{not json".to_owned());
        assert!(matches!(read_draft(&store), Err(DraftError::Corrupt { .. })));
    }

    #[rstest]
    fn draft_uses_wire_field_names(draft: BookingDraft) {
        let value = serde_json::to_value(&draft).expect("serialise");
        assert_eq!(value["sessionType"], "30");
        assert_eq!(value["listener"]["imageUrl"], "https://example.com/sarah.jpg");
        assert_eq!(draft.price(), Money::from_cents(2500));
    }
}
