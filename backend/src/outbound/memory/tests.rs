//! Behavioural tests for the in-memory store.

use std::collections::BTreeSet;

use chrono::{DateTime, Local, TimeZone, Utc};
use rstest::{fixture, rstest};
use session_pricing::{Money, SessionType};

use super::*;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 2, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

#[fixture]
fn store() -> InMemoryStore {
    InMemoryStore::new(Arc::new(FixedClock(fixed_instant())))
}

#[fixture]
fn seeded() -> InMemoryStore {
    InMemoryStore::seeded(Arc::new(FixedClock(fixed_instant())))
}

fn booking_for(listener: u32) -> NewBooking {
    NewBooking {
        user_id: None,
        listener_id: ListenerId::new(listener),
        session_type: SessionType::Thirty,
        session_date: fixed_instant(),
        session_time: "3:00 PM".to_owned(),
        amount: Money::from_cents(2500),
        payment_intent_id: None,
        status: None,
        notes: None,
    }
}

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_owned(),
        email: email.to_owned(),
        password: "hunter2".to_owned(),
    }
}

#[rstest]
#[tokio::test]
async fn seeded_store_lists_sample_listeners_in_order(seeded: InMemoryStore) {
    let listeners = ListenerRepository::list_all(&seeded)
        .await
        .expect("listing succeeds");
    let names: Vec<_> = listeners.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Sarah Chen",
            "Marcus Johnson",
            "Lisa Rodriguez",
            "Dr. James Wilson",
            "Maya Patel",
            "Alex Thompson",
        ]
    );
    let ids: Vec<_> = listeners.iter().map(|l| l.id.get()).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
}

#[rstest]
#[tokio::test]
async fn created_listener_takes_next_id_and_defaults(seeded: InMemoryStore) {
    let created = ListenerRepository::create(
        &seeded,
        NewListener {
            name: "Robin".to_owned(),
            bio: "Here to listen.".to_owned(),
            specialties: vec!["Grief".to_owned()],
            languages: vec!["English".to_owned()],
            image_url: "https://example.test/robin.jpg".to_owned(),
            rating: None,
            review_count: None,
            is_available: None,
        },
    )
    .await
    .expect("listener stored");

    assert_eq!(created.id, ListenerId::new(7));
    assert_eq!(created.rating, "0.00");
    assert_eq!(created.review_count, 0);
    assert!(created.is_available);
}

#[rstest]
#[case("Anxiety")]
#[case("anxiety")]
#[case("Nonexistent")]
#[tokio::test]
async fn specialty_lookup_matches_exactly(seeded: InMemoryStore, #[case] tag: &str) {
    let found = seeded
        .find_by_specialty(tag)
        .await
        .expect("lookup succeeds");
    assert!(found.iter().all(|listener| listener.has_specialty(tag)));
    if tag != "Anxiety" {
        assert!(found.is_empty());
    } else {
        assert!(!found.is_empty());
    }
}

#[rstest]
#[tokio::test]
async fn booking_creation_stamps_time_and_defaults_status(store: InMemoryStore) {
    let booking = BookingRepository::create(&store, booking_for(1))
        .await
        .expect("booking stored");
    assert_eq!(booking.id, BookingId::new(1));
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.created_at, fixed_instant());
    assert!(booking.user_id.is_none());
    assert!(booking.payment_intent_id.is_none());
}

#[rstest]
#[tokio::test]
async fn updates_return_none_for_unknown_booking(store: InMemoryStore) {
    let status = store
        .update_status(BookingId::new(999), BookingStatus::Confirmed)
        .await
        .expect("update runs");
    assert!(status.is_none());
    let intent = store
        .attach_payment_intent(BookingId::new(999), "pi_1".to_owned())
        .await
        .expect("update runs");
    assert!(intent.is_none());
}

#[rstest]
#[tokio::test]
async fn updates_overwrite_fields_in_place(store: InMemoryStore) {
    let booking = BookingRepository::create(&store, booking_for(1))
        .await
        .expect("booking stored");
    store
        .attach_payment_intent(booking.id, "pi_123".to_owned())
        .await
        .expect("attach runs");
    let updated = store
        .update_status(booking.id, BookingStatus::Confirmed)
        .await
        .expect("update runs")
        .expect("booking exists");

    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert_eq!(updated.payment_intent_id.as_deref(), Some("pi_123"));
    assert_eq!(updated.created_at, booking.created_at);
}

#[rstest]
#[tokio::test]
async fn bookings_filter_by_listener_and_user(store: InMemoryStore) {
    let user = UserRepository::create(&store, new_user("sam", "sam@example.test"))
        .await
        .expect("user stored");
    let mut owned = booking_for(2);
    owned.user_id = Some(user.id);
    BookingRepository::create(&store, booking_for(1))
        .await
        .expect("booking stored");
    BookingRepository::create(&store, owned)
        .await
        .expect("booking stored");

    let for_listener = store
        .list_by_listener(ListenerId::new(2))
        .await
        .expect("listing succeeds");
    assert_eq!(for_listener.len(), 1);
    let for_user = store.list_by_user(user.id).await.expect("listing succeeds");
    assert_eq!(for_user.len(), 1);
    assert_eq!(for_user[0].id, BookingId::new(2));
}

#[rstest]
#[tokio::test]
async fn concurrent_creates_receive_distinct_ids(store: InMemoryStore) {
    let handles: Vec<_> = (0..32)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { BookingRepository::create(&store, booking_for(1)).await })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        let booking = handle
            .await
            .expect("task completes")
            .expect("booking stored");
        ids.insert(booking.id.get());
    }
    assert_eq!(ids, (1..=32).collect::<BTreeSet<_>>());
}

#[rstest]
#[tokio::test]
async fn contact_messages_list_in_submission_order(store: InMemoryStore) {
    for subject in ["first", "second"] {
        let message = NewContactMessage::try_new("Ana", "ana@example.test", subject, "Hello")
            .expect("valid message");
        ContactMessageRepository::create(&store, message)
            .await
            .expect("message stored");
    }
    let messages = ContactMessageRepository::list_all(&store)
        .await
        .expect("listing succeeds");
    let subjects: Vec<_> = messages.iter().map(|m| m.subject.as_str()).collect();
    assert_eq!(subjects, ["first", "second"]);
    assert_eq!(messages[1].id, ContactMessageId::new(2));
}

#[rstest]
#[tokio::test]
async fn users_reject_duplicate_username_and_email(store: InMemoryStore) {
    UserRepository::create(&store, new_user("sam", "sam@example.test"))
        .await
        .expect("user stored");

    let by_name = UserRepository::create(&store, new_user("sam", "other@example.test"))
        .await
        .expect_err("duplicate username");
    assert!(matches!(by_name, UserRepositoryError::DuplicateUsername { .. }));

    let by_email = UserRepository::create(&store, new_user("alex", "sam@example.test"))
        .await
        .expect_err("duplicate email");
    assert!(matches!(by_email, UserRepositoryError::DuplicateEmail { .. }));

    let found = store
        .find_by_email("sam@example.test")
        .await
        .expect("lookup succeeds")
        .expect("user exists");
    assert_eq!(found.username, "sam");
    assert!(
        store
            .find_by_username("alex")
            .await
            .expect("lookup succeeds")
            .is_none()
    );
}

#[rstest]
fn seeding_stops_when_ids_run_out() {
    let mut table = Table::new();
    table.next_id = u32::MAX - 1;

    let stored = seed_listeners(&mut table, sample_listeners());

    assert_eq!(stored, 1);
    assert_eq!(table.rows.len(), 1);
    assert!(table.rows.contains_key(&(u32::MAX - 1)));
}

#[rstest]
fn seeding_a_fresh_table_stores_every_sample() {
    let mut table = Table::new();
    let samples = sample_listeners();
    let expected = samples.len();

    assert_eq!(seed_listeners(&mut table, samples), expected);
    assert_eq!(table.next_id, u32::try_from(expected + 1).expect("small count"));
}
