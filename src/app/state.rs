//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! engine. It holds the authoritative in-memory entry cache alongside all
//! transient view state, applies the search/filter predicate, and computes
//! immutable view models for rendering.
//!
//! # Architecture
//!
//! `AppState` separates core data (the entry cache, the bookmarked set) from
//! transient view state (search query, filter mode, composer, expansion,
//! pending confirmations). The visible entry list is a pure function of both,
//! recomputed on demand; nothing here performs I/O.
//!
//! # Cache discipline
//!
//! The entry cache is the single authority on what the user sees. Every
//! successful store operation mutates it in place — inserts keep newest-first
//! order, updates replace records without moving them, deletions drop any
//! view state that pointed at the removed entry. Full refetches replace the
//! cache wholesale but must not clobber bookmark toggles whose server write
//! has not landed yet; those ids are tracked in `pending_bookmarks`.

use crate::app::composer::Composer;
use crate::app::modes::{AuthSession, FilterMode};
use crate::domain::{Entry, EntryId};
use crate::ui::format::excerpt;
use crate::ui::viewmodel::{ComposerView, DiaryViewModel, EmptyState, EntryItem};
use std::collections::HashSet;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Informational confirmation, e.g. a successful save.
    Info,
    /// A recoverable failure the user may retry or correct.
    Error,
}

/// A dismissible message surfaced to the user.
///
/// Every failure in the engine ends up here rather than as a blocking error;
/// the previous notice is replaced, never queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Central application state container.
///
/// Mutated only by the event handler in response to events; view models are
/// computed on demand from state snapshots.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Authentication context. All store traffic stops when this is
    /// `SignedOut`.
    pub session: AuthSession,

    /// Authoritative entry cache, newest first as the store returned it.
    pub entries: Vec<Entry>,

    /// Identifiers of bookmarked entries.
    ///
    /// Kept mutually consistent with each cached entry's own `bookmarked`
    /// flag at all times.
    pub bookmarked: HashSet<EntryId>,

    /// Current free-text search query.
    pub search_query: String,

    /// Current category filter.
    pub filter_mode: FilterMode,

    /// Composition form state.
    pub composer: Composer,

    /// Entry whose content is shown unclipped, if any.
    pub expanded_entry: Option<EntryId>,

    /// Entry armed for deletion by the two-step confirm gate, if any.
    pub pending_delete: Option<EntryId>,

    /// Entries with an optimistic bookmark toggle whose server write has not
    /// been acknowledged yet. A refetch landing meanwhile must not clobber
    /// these.
    pub pending_bookmarks: HashSet<EntryId>,

    /// Current dismissible notice, if any.
    pub notice: Option<Notice>,
}

impl AppState {
    /// Creates an empty, signed-out state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached entry with the given id, if present.
    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    /// Computes the ordered subset of entries to display.
    ///
    /// Applies the search predicate first (case-insensitive substring of
    /// title, content, or any tag; empty query matches all), then the
    /// category filter, preserving the cache's newest-first order. Pure
    /// function of state; no hidden memoization.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<&Entry> {
        let _span = tracing::debug_span!(
            "visible_entries",
            total_entries = self.entries.len(),
            query_len = self.search_query.len(),
            filter_mode = ?self.filter_mode
        )
        .entered();

        let needle = self.search_query.trim().to_lowercase();

        let visible: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|entry| entry.matches_search(&needle))
            .filter(|entry| match self.filter_mode {
                FilterMode::All => true,
                FilterMode::Bookmarked => self.bookmarked.contains(&entry.id),
                FilterMode::Private => entry.is_private,
                FilterMode::Mood(mood) => entry.mood == mood,
            })
            .collect();

        tracing::debug!(visible_count = visible.len(), "filter applied");
        visible
    }

    /// Replaces the entry cache with a freshly fetched collection.
    ///
    /// Rebuilds the bookmarked set from the fetched flags, except for entries
    /// with an unacknowledged optimistic toggle, whose local flag wins until
    /// the store confirms. View state pointing at entries the refetch dropped
    /// is cleared; a composer editing a dropped entry turns back into a
    /// new-entry draft, keeping the typed text.
    pub fn install_entries(&mut self, mut fetched: Vec<Entry>) {
        let preserved: Vec<(EntryId, bool)> = self
            .pending_bookmarks
            .iter()
            .filter_map(|id| self.entry(id).map(|e| (id.clone(), e.bookmarked)))
            .collect();

        for (id, local_flag) in preserved {
            if let Some(entry) = fetched.iter_mut().find(|e| e.id == id) {
                entry.bookmarked = local_flag;
            }
        }

        self.entries = fetched;
        self.bookmarked = self
            .entries
            .iter()
            .filter(|entry| entry.bookmarked)
            .map(|entry| entry.id.clone())
            .collect();

        let known: HashSet<&str> = self.entries.iter().map(|e| e.id.as_str()).collect();
        if let Some(id) = &self.expanded_entry {
            if !known.contains(id.as_str()) {
                self.expanded_entry = None;
            }
        }
        if let Some(id) = &self.pending_delete {
            if !known.contains(id.as_str()) {
                self.pending_delete = None;
            }
        }
        self.pending_bookmarks
            .retain(|id| known.contains(id.as_str()));
        if let Some(id) = &self.composer.selected {
            if !known.contains(id.as_str()) {
                // The edited entry vanished; keep the typed text as a
                // new-entry draft instead of resubmitting into NotFound.
                self.composer.selected = None;
            }
        }
    }

    /// Inserts or replaces one entry in the cache.
    ///
    /// A replacement keeps the entry's current position; a new entry is
    /// inserted by creation time so the newest-first order holds. The
    /// bookmarked set is kept consistent with the record's flag.
    pub fn upsert_entry(&mut self, entry: Entry) {
        if entry.bookmarked {
            self.bookmarked.insert(entry.id.clone());
        } else {
            self.bookmarked.remove(&entry.id);
        }

        if let Some(existing) = self.entry_mut(&entry.id) {
            *existing = entry;
            return;
        }

        let position = self
            .entries
            .iter()
            .position(|e| e.created_at <= entry.created_at)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, entry);
    }

    /// Removes one entry from the cache and drops every piece of view state
    /// that pointed at it, resetting the composer if it was being edited.
    pub fn remove_entry(&mut self, id: &str) {
        self.entries.retain(|entry| entry.id != id);
        self.bookmarked.remove(id);
        self.pending_bookmarks.remove(id);
        if self.expanded_entry.as_deref() == Some(id) {
            self.expanded_entry = None;
        }
        if self.pending_delete.as_deref() == Some(id) {
            self.pending_delete = None;
        }
        if self.composer.selected.as_deref() == Some(id) {
            self.composer.reset();
        }
    }

    /// Flips the bookmark flag of one cached entry and mirrors the change in
    /// the bookmarked set. Returns the new flag value, or `None` when the
    /// entry is not cached.
    pub fn flip_bookmark(&mut self, id: &str) -> Option<bool> {
        let entry = self.entry_mut(id)?;
        entry.bookmarked = !entry.bookmarked;
        let flagged = entry.bookmarked;
        if flagged {
            self.bookmarked.insert(id.to_string());
        } else {
            self.bookmarked.remove(id);
        }
        Some(flagged)
    }

    /// Discards everything tied to the signed-out user.
    ///
    /// Leaves the state exactly as a fresh session start would.
    pub fn clear_session(&mut self) {
        *self = Self::new();
    }

    /// Computes a renderable view model from current state.
    ///
    /// Entry content is clipped to `excerpt_chars` characters unless the
    /// entry is expanded. View models carry no business logic, only
    /// display-ready data.
    #[must_use]
    pub fn compute_viewmodel(&self, excerpt_chars: usize) -> DiaryViewModel {
        let visible = self.visible_entries();

        let items: Vec<EntryItem> = visible
            .iter()
            .map(|entry| {
                let is_expanded = self.expanded_entry.as_deref() == Some(entry.id.as_str());
                EntryItem {
                    id: entry.id.clone(),
                    title: entry.title.clone(),
                    date: entry.created_date(),
                    time: entry.created_time(),
                    glyph: entry.mood.glyph(),
                    mood_label: entry.mood.label(),
                    excerpt: if is_expanded {
                        entry.content.clone()
                    } else {
                        excerpt(&entry.content, excerpt_chars)
                    },
                    tags: entry.tags.clone(),
                    is_bookmarked: self.bookmarked.contains(&entry.id),
                    is_private: entry.is_private,
                    is_expanded,
                    is_editing: self.composer.selected.as_deref() == Some(entry.id.as_str()),
                    is_pending_delete: self.pending_delete.as_deref() == Some(entry.id.as_str()),
                }
            })
            .collect();

        let empty_state = if self.entries.is_empty() {
            Some(EmptyState {
                message: "No entries yet".to_string(),
                subtitle: "Write your first entry to get started".to_string(),
            })
        } else if items.is_empty() {
            Some(EmptyState {
                message: "No matching entries".to_string(),
                subtitle: "Try a different search or filter".to_string(),
            })
        } else {
            None
        };

        DiaryViewModel {
            items,
            total_entries: self.entries.len(),
            search_query: self.search_query.clone(),
            filter_mode: self.filter_mode,
            composer: ComposerView {
                title: self.composer.title.clone(),
                content: self.composer.content.clone(),
                mood: self.composer.mood,
                tags: self.composer.tags.clone(),
                is_private: self.composer.is_private,
                is_editing: self.composer.is_editing(),
            },
            empty_state,
            notice: self.notice.clone(),
        }
    }
}
