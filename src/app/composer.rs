//! Composition form state.
//!
//! This module defines [`Composer`], the transient state of the entry form:
//! the editable fields plus the identifier of the entry being edited, if any.
//! Tags exist only here until a save commits them onto an entry.

use crate::domain::{DiaryError, Entry, EntryId, Mood, Result};
use crate::store::models::{EntryPatch, NewEntry};

/// Transient state of the entry composition form.
///
/// Defaults to an empty new-entry form. When `selected` is set, a save
/// updates that entry instead of creating one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    /// Entry title as typed.
    pub title: String,

    /// Entry body as typed.
    pub content: String,

    /// Mood picked in the form. Resets to neutral after a save.
    pub mood: Mood,

    /// Tags staged in the form, insertion order preserved, no duplicates.
    pub tags: Vec<String>,

    /// Privacy flag staged in the form.
    pub is_private: bool,

    /// Identifier of the entry loaded for editing, or `None` when composing
    /// a new entry.
    pub selected: Option<EntryId>,
}

impl Composer {
    /// Returns whether the form is editing an existing entry.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    /// Copies an existing entry's editable fields into the form and records
    /// it as selected. Does not touch the store.
    pub fn load(&mut self, entry: &Entry) {
        self.title.clone_from(&entry.title);
        self.content.clone_from(&entry.content);
        self.mood = entry.mood;
        self.tags.clone_from(&entry.tags);
        self.is_private = entry.is_private;
        self.selected = Some(entry.id.clone());
    }

    /// Resets every field to its default and clears the selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Stages a tag on the form.
    ///
    /// Silently a no-op when the candidate is empty after trimming or already
    /// present (case-sensitive equality).
    pub fn add_tag(&mut self, candidate: &str) {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            tracing::trace!("ignoring blank tag candidate");
            return;
        }
        if self.tags.iter().any(|tag| tag == trimmed) {
            tracing::trace!(tag = %trimmed, "ignoring duplicate tag");
            return;
        }
        self.tags.push(trimmed.to_string());
    }

    /// Removes a staged tag by exact value match.
    pub fn remove_tag(&mut self, value: &str) {
        self.tags.retain(|tag| tag != value);
    }

    /// Validates that both required fields are non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`DiaryError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(DiaryError::Validation("title"));
        }
        if self.content.trim().is_empty() {
            return Err(DiaryError::Validation("content"));
        }
        Ok(())
    }

    /// Builds the create payload for a new-entry save.
    #[must_use]
    pub fn to_draft(&self) -> NewEntry {
        NewEntry {
            title: self.title.clone(),
            content: self.content.clone(),
            mood: self.mood,
            tags: self.tags.clone(),
            is_private: self.is_private,
        }
    }

    /// Builds the partial update for an edit save.
    ///
    /// The patch leaves `bookmarked` unset so the save cannot undo a
    /// concurrent bookmark toggle.
    #[must_use]
    pub fn to_patch(&self) -> EntryPatch {
        EntryPatch::edit(
            self.title.clone(),
            self.content.clone(),
            self.mood,
            self.tags.clone(),
            self.is_private,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Composer;
    use crate::domain::{DiaryError, Entry, Mood};

    #[test]
    fn add_tag_ignores_blank_and_duplicate_candidates() {
        let mut composer = Composer::default();
        composer.add_tag("travel");
        composer.add_tag("  travel  ");
        composer.add_tag("   ");
        composer.add_tag("");
        composer.add_tag("Travel"); // case-sensitive: distinct
        assert_eq!(composer.tags, vec!["travel", "Travel"]);
    }

    #[test]
    fn remove_tag_deletes_by_exact_value() {
        let mut composer = Composer::default();
        composer.add_tag("travel");
        composer.add_tag("food");
        composer.remove_tag("Travel");
        assert_eq!(composer.tags, vec!["travel", "food"]);
        composer.remove_tag("travel");
        assert_eq!(composer.tags, vec!["food"]);
    }

    #[test]
    fn validate_requires_non_blank_title_and_content() {
        let mut composer = Composer {
            title: "   ".to_string(),
            content: "body".to_string(),
            ..Composer::default()
        };
        assert!(matches!(
            composer.validate(),
            Err(DiaryError::Validation("title"))
        ));

        composer.title = "title".to_string();
        composer.content = "\n\t".to_string();
        assert!(matches!(
            composer.validate(),
            Err(DiaryError::Validation("content"))
        ));

        composer.content = "body".to_string();
        assert!(composer.validate().is_ok());
    }

    #[test]
    fn load_copies_editable_fields_and_records_selection() {
        let entry = Entry {
            id: "entry-00000007".to_string(),
            owner_id: "user-1".to_string(),
            title: "Trip".to_string(),
            content: "Paris".to_string(),
            mood: Mood::Happy,
            tags: vec!["travel".to_string()],
            is_private: true,
            bookmarked: true,
            created_at: Some(1),
            updated_at: Some(1),
        };

        let mut composer = Composer::default();
        composer.load(&entry);
        assert_eq!(composer.title, "Trip");
        assert_eq!(composer.mood, Mood::Happy);
        assert!(composer.is_private);
        assert_eq!(composer.selected.as_deref(), Some("entry-00000007"));

        composer.reset();
        assert_eq!(composer, Composer::default());
    }
}
