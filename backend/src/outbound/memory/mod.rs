//! Process-local storage adapter.
//!
//! [`InMemoryStore`] implements every repository port over ordered maps.
//! Each table sits behind its own `tokio::sync::Mutex`, and the id counter
//! lives inside the same lock as the rows, so allocating an id and inserting
//! the record happen as one step. Ids start at 1, grow by one and are never
//! reused. Nothing survives a restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::ports::{
    BookingRepository, BookingRepositoryError, ContactMessageRepository,
    ContactMessageRepositoryError, ListenerRepository, ListenerRepositoryError, UserRepository,
    UserRepositoryError,
};
use crate::domain::seed::sample_listeners;
use crate::domain::{
    Booking, BookingId, BookingStatus, ContactMessage, ContactMessageId, Listener, ListenerId,
    NewBooking, NewContactMessage, NewListener, NewUser, User, UserId,
};

const ID_SPACE_EXHAUSTED: &str = "identifier space exhausted";

struct Table<T> {
    next_id: u32,
    rows: BTreeMap<u32, T>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    /// Allocate the next id and store the row built for it.
    fn insert_with(&mut self, build: impl FnOnce(u32) -> T) -> Option<T> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        let row = build(id);
        self.rows.insert(id, row.clone());
        Some(row)
    }

    fn get(&self, id: u32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn filtered(&self, mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| keep(row)).cloned().collect()
    }

    fn update(&mut self, id: u32, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }
}

/// In-memory implementation of the listener, booking, contact and user
/// repositories.
///
/// Cloning is cheap and clones share the same tables.
#[derive(Clone)]
pub struct InMemoryStore {
    listeners: Arc<Mutex<Table<Listener>>>,
    bookings: Arc<Mutex<Table<Booking>>>,
    contact_messages: Arc<Mutex<Table<ContactMessage>>>,
    users: Arc<Mutex<Table<User>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryStore {
    /// An empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Table::new())),
            bookings: Arc::new(Mutex::new(Table::new())),
            contact_messages: Arc::new(Mutex::new(Table::new())),
            users: Arc::new(Mutex::new(Table::new())),
            clock,
        }
    }

    /// A store holding the sample listener directory, ids 1 to 6.
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        let store = Self::new(clock);
        let mut table = Table::new();
        let count = seed_listeners(&mut table, sample_listeners());
        debug!(count, "seeded sample listeners");
        Self {
            listeners: Arc::new(Mutex::new(table)),
            ..store
        }
    }
}

/// Insert `drafts` in order and return how many were stored. Seeding stops
/// with a warning once the id space runs out.
fn seed_listeners(table: &mut Table<Listener>, drafts: Vec<NewListener>) -> usize {
    let mut stored = 0;
    for draft in drafts {
        let name = draft.name.clone();
        if table
            .insert_with(|id| Listener::from_draft(ListenerId::new(id), draft))
            .is_none()
        {
            warn!(listener = %name, reason = ID_SPACE_EXHAUSTED, "seeding stopped");
            break;
        }
        stored += 1;
    }
    stored
}

#[async_trait]
impl ListenerRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Listener>, ListenerRepositoryError> {
        Ok(self.listeners.lock().await.filtered(|_| true))
    }

    async fn find_by_id(&self, id: ListenerId) -> Result<Option<Listener>, ListenerRepositoryError> {
        Ok(self.listeners.lock().await.get(id.get()))
    }

    async fn find_by_specialty(
        &self,
        specialty: &str,
    ) -> Result<Vec<Listener>, ListenerRepositoryError> {
        Ok(self
            .listeners
            .lock()
            .await
            .filtered(|listener| listener.has_specialty(specialty)))
    }

    async fn create(&self, listener: NewListener) -> Result<Listener, ListenerRepositoryError> {
        self.listeners
            .lock()
            .await
            .insert_with(|id| Listener::from_draft(ListenerId::new(id), listener))
            .ok_or_else(|| ListenerRepositoryError::storage(ID_SPACE_EXHAUSTED))
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn create(&self, booking: NewBooking) -> Result<Booking, BookingRepositoryError> {
        let created_at = self.clock.utc();
        self.bookings
            .lock()
            .await
            .insert_with(|id| Booking::from_draft(BookingId::new(id), booking, created_at))
            .ok_or_else(|| BookingRepositoryError::storage(ID_SPACE_EXHAUSTED))
    }

    async fn find_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingRepositoryError> {
        Ok(self.bookings.lock().await.get(id.get()))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Booking>, BookingRepositoryError> {
        Ok(self
            .bookings
            .lock()
            .await
            .filtered(|booking| booking.user_id == Some(user_id)))
    }

    async fn list_by_listener(
        &self,
        listener_id: ListenerId,
    ) -> Result<Vec<Booking>, BookingRepositoryError> {
        Ok(self
            .bookings
            .lock()
            .await
            .filtered(|booking| booking.listener_id == listener_id))
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        Ok(self
            .bookings
            .lock()
            .await
            .update(id.get(), |booking| booking.status = status))
    }

    async fn attach_payment_intent(
        &self,
        id: BookingId,
        payment_intent_id: String,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        Ok(self
            .bookings
            .lock()
            .await
            .update(id.get(), |booking| {
                booking.payment_intent_id = Some(payment_intent_id);
            }))
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryStore {
    async fn create(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let created_at = self.clock.utc();
        self.contact_messages
            .lock()
            .await
            .insert_with(|id| {
                ContactMessage::from_draft(ContactMessageId::new(id), message, created_at)
            })
            .ok_or_else(|| ContactMessageRepositoryError::storage(ID_SPACE_EXHAUSTED))
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        Ok(self.contact_messages.lock().await.filtered(|_| true))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.lock().await.get(id.get()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .users
            .lock()
            .await
            .filtered(|user| user.username == username)
            .into_iter()
            .next())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        Ok(self
            .users
            .lock()
            .await
            .filtered(|user| user.email == email)
            .into_iter()
            .next())
    }

    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let created_at = self.clock.utc();
        let mut users = self.users.lock().await;
        if users.rows.values().any(|row| row.username == user.username) {
            return Err(UserRepositoryError::duplicate_username(user.username));
        }
        if users.rows.values().any(|row| row.email == user.email) {
            return Err(UserRepositoryError::duplicate_email(user.email));
        }
        users
            .insert_with(|id| User::from_draft(UserId::new(id), user, created_at))
            .ok_or_else(|| UserRepositoryError::storage(ID_SPACE_EXHAUSTED))
    }
}

#[cfg(test)]
mod tests;
