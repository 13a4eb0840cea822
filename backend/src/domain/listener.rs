//! Listener profiles.

use serde::{Deserialize, Serialize};

use crate::domain::ListenerId;

/// Rating assigned when a new listener has no reviews yet.
pub const DEFAULT_RATING: &str = "0.00";

/// A peer-support listener shown to visitors.
///
/// ## Invariants
/// - `id` is assigned by storage and never changes.
/// - `specialties` and `languages` keep the order they were created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listener {
    pub id: ListenerId,
    pub name: String,
    pub bio: String,
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
    /// Average rating as a decimal string, e.g. `"4.9"`.
    pub rating: String,
    pub review_count: u32,
    pub image_url: String,
    pub is_available: bool,
}

impl Listener {
    /// Build the stored record for `draft`, filling in defaults for the
    /// optional fields.
    ///
    /// # Examples
    /// ```
    /// use bestie_backend::domain::{Listener, ListenerId, NewListener};
    ///
    /// let draft = NewListener {
    ///     name: "Robin".to_owned(),
    ///     bio: "Good listener".to_owned(),
    ///     specialties: vec!["Stress".to_owned()],
    ///     languages: vec!["English".to_owned()],
    ///     image_url: "https://example.test/robin.jpg".to_owned(),
    ///     rating: None,
    ///     review_count: None,
    ///     is_available: None,
    /// };
    /// let listener = Listener::from_draft(ListenerId::new(1), draft);
    /// assert_eq!(listener.rating, "0.00");
    /// assert_eq!(listener.review_count, 0);
    /// assert!(listener.is_available);
    /// ```
    #[must_use]
    pub fn from_draft(id: ListenerId, draft: NewListener) -> Self {
        let NewListener {
            name,
            bio,
            specialties,
            languages,
            image_url,
            rating,
            review_count,
            is_available,
        } = draft;
        Self {
            id,
            name,
            bio,
            specialties,
            languages,
            rating: rating.unwrap_or_else(|| DEFAULT_RATING.to_owned()),
            review_count: review_count.unwrap_or_default(),
            image_url,
            is_available: is_available.unwrap_or(true),
        }
    }

    /// Whether the listener carries `specialty`. Matching is exact and
    /// case-sensitive.
    #[must_use]
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|tag| tag == specialty)
    }
}

/// Listener fields supplied at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListener {
    pub name: String,
    pub bio: String,
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
    pub image_url: String,
    pub rating: Option<String>,
    pub review_count: Option<u32>,
    pub is_available: Option<bool>,
}
