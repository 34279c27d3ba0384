//! Wire shapes for store adapter operations.
//!
//! This module defines the request payloads the engine sends to an
//! [`EntryStore`](crate::store::EntryStore): the full field set for a create
//! and the all-optional field set for a partial update. These types are
//! separate from the domain [`Entry`](crate::domain::Entry) to maintain a
//! clear boundary between what the client is allowed to set and what the
//! store owns (identifiers and timestamps).

use crate::domain::{Entry, Mood};
use serde::{Deserialize, Serialize};

/// Fields the client supplies when creating an entry.
///
/// The store assigns `id`, `owner_id` scoping, and `created_at`/`updated_at`.
/// New entries always start un-bookmarked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_private: bool,
}

/// A partial update to an existing entry.
///
/// Only fields set to `Some` are written; everything else keeps its stored
/// value. This is what lets a bookmark toggle and a concurrent title edit
/// coexist in one session without undoing each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmarked: Option<bool>,
}

impl EntryPatch {
    /// Builds a patch that only flips the bookmark flag.
    #[must_use]
    pub fn bookmark(bookmarked: bool) -> Self {
        Self {
            bookmarked: Some(bookmarked),
            ..Self::default()
        }
    }

    /// Builds the patch a save of the composition form issues.
    ///
    /// Deliberately leaves `bookmarked` unset: the form has no bookmark
    /// control, so a save must preserve whatever the flag currently is.
    #[must_use]
    pub fn edit(
        title: String,
        content: String,
        mood: Mood,
        tags: Vec<String>,
        is_private: bool,
    ) -> Self {
        Self {
            title: Some(title),
            content: Some(content),
            mood: Some(mood),
            tags: Some(tags),
            is_private: Some(is_private),
            bookmarked: None,
        }
    }

    /// Returns whether the patch writes the bookmark flag and nothing else.
    ///
    /// A bookmark-only update acknowledges an optimistic toggle rather than a
    /// form save, so the two are reported back differently.
    #[must_use]
    pub fn is_bookmark_only(&self) -> bool {
        self.bookmarked.is_some()
            && self.title.is_none()
            && self.content.is_none()
            && self.mood.is_none()
            && self.tags.is_none()
            && self.is_private.is_none()
    }

    /// Returns whether the patch writes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.mood.is_none()
            && self.tags.is_none()
            && self.is_private.is_none()
            && self.bookmarked.is_none()
    }

    /// Merges this patch into an entry, leaving unset fields untouched.
    ///
    /// Does not touch `id`, `owner_id`, or timestamps; those belong to the
    /// store.
    pub fn apply(&self, entry: &mut Entry) {
        if let Some(title) = &self.title {
            entry.title.clone_from(title);
        }
        if let Some(content) = &self.content {
            entry.content.clone_from(content);
        }
        if let Some(mood) = self.mood {
            entry.mood = mood;
        }
        if let Some(tags) = &self.tags {
            entry.tags.clone_from(tags);
        }
        if let Some(is_private) = self.is_private {
            entry.is_private = is_private;
        }
        if let Some(bookmarked) = self.bookmarked {
            entry.bookmarked = bookmarked;
        }
    }
}
