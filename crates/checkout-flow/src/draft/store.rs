//! Single-slot draft storage.

use std::sync::{Mutex, PoisonError};

/// A store holding at most one serialised draft.
///
/// Mirrors a browser's per-tab session storage: saving replaces the slot and
/// nothing survives the owning session.
pub trait DraftStore: Send + Sync {
    /// Return the staged draft, if any.
    fn load(&self) -> Option<String>;
    /// Replace the slot with `raw`.
    fn save(&self, raw: String);
    /// Empty the slot.
    fn clear(&self);
}

/// In-memory [`DraftStore`].
#[derive(Debug, Default)]
pub struct SessionDraftStore {
    slot: Mutex<Option<String>>,
}

impl DraftStore for SessionDraftStore {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, raw: String) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
    }

    fn clear(&self) {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}
