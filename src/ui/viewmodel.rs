//! Display-ready projections of application state.
//!
//! View models are plain data: every field is already formatted, filtered,
//! and flagged, so a rendering shell can paint them without touching
//! application state or business rules. They are computed fresh on each
//! render from [`AppState`](crate::app::state::AppState).

use crate::app::modes::FilterMode;
use crate::app::state::Notice;
use crate::domain::Mood;

/// Everything a rendering shell needs for one frame of the diary view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryViewModel {
    /// Entries that survive the active search and filter, newest first.
    pub items: Vec<EntryItem>,
    /// Cached entry count before filtering.
    pub total_entries: usize,
    /// The search query as typed.
    pub search_query: String,
    /// The active category filter.
    pub filter_mode: FilterMode,
    /// The composition form contents.
    pub composer: ComposerView,
    /// Set when there is nothing to list, with copy distinguishing an empty
    /// diary from an over-narrow filter.
    pub empty_state: Option<EmptyState>,
    /// The current user-facing notice, if any.
    pub notice: Option<Notice>,
}

/// One visible entry, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryItem {
    pub id: String,
    pub title: String,
    /// Human-readable creation date, e.g. "March 5, 2026".
    pub date: String,
    /// Human-readable creation time, e.g. "2:30 PM".
    pub time: String,
    /// Mood glyph for compact display.
    pub glyph: &'static str,
    /// Mood name for accessible display.
    pub mood_label: &'static str,
    /// Content, clipped unless the entry is expanded.
    pub excerpt: String,
    pub tags: Vec<String>,
    pub is_bookmarked: bool,
    pub is_private: bool,
    pub is_expanded: bool,
    /// Whether this entry is currently loaded in the composition form.
    pub is_editing: bool,
    /// Whether the delete confirm gate is armed for this entry.
    pub is_pending_delete: bool,
}

/// Composition form contents as the shell should render them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerView {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub tags: Vec<String>,
    pub is_private: bool,
    /// True when the form is editing an existing entry rather than drafting
    /// a new one.
    pub is_editing: bool,
}

/// Placeholder copy shown when the entry list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
