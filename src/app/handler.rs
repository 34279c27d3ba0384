//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! auth transitions, and store responses, translating them into state changes
//! and action sequences. It is the mutation coordinator: every create, update,
//! delete, and bookmark toggle flows through here, wrapped in the local state
//! transitions that keep the UI consistent without a full reload.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the UI shell or from the client runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Store outcomes re-enter as [`Event::StoreResponse`] so success and failure
//! handling also live here, next to the transitions they complete.

use crate::app::actions::Action;
use crate::app::modes::{AuthSession, FilterMode};
use crate::app::state::{AppState, Notice};
use crate::domain::error::Result;
use crate::domain::{Entry, EntryId, Mood, UserId};

/// Events triggered by user interaction, auth transitions, or store outcomes.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Reports an auth state transition from the identity provider.
    ///
    /// `Some(user)` starts a session and loads that user's entries; `None`
    /// discards all session state and stops store traffic.
    AuthChanged(Option<UserId>),

    /// Replaces the free-text search query.
    SearchChanged(String),

    /// Clears the search query.
    ClearSearch,

    /// Switches the category filter.
    FilterChanged(FilterMode),

    /// Toggles whether an entry's content is shown unclipped.
    ToggleExpand(EntryId),

    /// Loads an existing entry's editable fields into the composition form.
    EditEntry(EntryId),

    /// Abandons the current edit and resets the composition form.
    CancelEdit,

    /// Replaces the composition form title.
    TitleChanged(String),

    /// Replaces the composition form content.
    ContentChanged(String),

    /// Picks a mood in the composition form.
    MoodChanged(Mood),

    /// Flips the composition form privacy flag.
    PrivacyToggled,

    /// Stages a tag on the composition form. Blank and duplicate candidates
    /// are silently ignored.
    TagAdded(String),

    /// Removes a staged tag by exact value.
    TagRemoved(String),

    /// Submits the composition form: update when an entry is selected for
    /// edit, create otherwise. Validation failures never reach the store.
    SubmitEntry,

    /// Arms the two-step delete confirm gate for one entry.
    RequestDelete(EntryId),

    /// Fires the delete if the gate is armed for this exact entry.
    ConfirmDelete(EntryId),

    /// Disarms the delete confirm gate.
    CancelDelete,

    /// Optimistically flips an entry's bookmark flag and issues the
    /// bookmark-only partial update.
    ToggleBookmark(EntryId),

    /// Dismisses the current notice.
    DismissNotice,

    /// Wraps a store outcome delivered by the client runtime.
    StoreResponse(StoreResponse),
}

/// Store outcomes fed back into the handler by the client runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreResponse {
    /// A collection refetch completed.
    EntriesLoaded {
        /// The owner's entries, newest first.
        entries: Vec<Entry>,
    },

    /// A composition form save (create or update) committed.
    EntrySaved {
        /// The stored record as the store now holds it.
        entry: Entry,
    },

    /// A delete committed (or the entry was already gone, which ends in the
    /// same state).
    EntryDeleted {
        /// The removed entry.
        id: EntryId,
    },

    /// A bookmark toggle's server write landed.
    BookmarkCommitted {
        /// The toggled entry.
        id: EntryId,
        /// The flag value the store now holds.
        bookmarked: bool,
    },

    /// A store operation failed.
    Failed {
        /// Which operation failed.
        op: FailedOp,
        /// How it failed.
        failure: StoreFailure,
    },
}

/// The operation a [`StoreResponse::Failed`] refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailedOp {
    /// A collection refetch.
    Fetch,
    /// A composition form save.
    Save,
    /// A delete of the given entry.
    Delete(EntryId),
    /// A bookmark toggle of the given entry.
    Bookmark(EntryId),
}

/// Failure shape carried by store responses.
///
/// A deliberately small projection of [`DiaryError`](crate::domain::DiaryError)
/// so responses stay cloneable and comparable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreFailure {
    /// Network/auth failure; local state stays as it was before the attempt.
    Unavailable(String),
    /// The target entry vanished; triggers a resynchronizing refetch.
    NotFound(EntryId),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// Returns `(render, actions)`: whether the visible state changed, plus the
/// side effects to run in sequence. While signed out, every event except
/// [`Event::AuthChanged`] is dropped so no store traffic can be issued for a
/// dead session and stale responses are abandoned.
///
/// # Errors
///
/// Reserved for state transitions that cannot be expressed as a notice;
/// current transitions always return `Ok`.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    if !state.session.is_signed_in() && !matches!(event, Event::AuthChanged(_)) {
        tracing::debug!("signed out, dropping event");
        return Ok((false, vec![]));
    }

    match event {
        Event::AuthChanged(Some(user)) => {
            tracing::debug!(user = %user, "user signed in");
            state.clear_session();
            state.session = AuthSession::SignedIn(user.clone());
            Ok((true, vec![Action::FetchEntries { owner: user.clone() }]))
        }
        Event::AuthChanged(None) => {
            tracing::debug!("user signed out, discarding session state");
            state.clear_session();
            Ok((true, vec![Action::RedirectToLogin]))
        }
        Event::SearchChanged(query) => {
            state.search_query.clone_from(query);
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            state.search_query.clear();
            Ok((true, vec![]))
        }
        Event::FilterChanged(mode) => {
            state.filter_mode = *mode;
            Ok((true, vec![]))
        }
        Event::ToggleExpand(id) => {
            if state.expanded_entry.as_deref() == Some(id.as_str()) {
                state.expanded_entry = None;
            } else if state.entry(id).is_some() {
                state.expanded_entry = Some(id.clone());
            } else {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
        Event::EditEntry(id) => {
            let Some(entry) = state.entry(id) else {
                tracing::debug!(entry_id = %id, "edit target not cached");
                return Ok((false, vec![]));
            };
            let entry = entry.clone();
            state.composer.load(&entry);
            Ok((true, vec![]))
        }
        Event::CancelEdit => {
            state.composer.reset();
            Ok((true, vec![]))
        }
        Event::TitleChanged(title) => {
            state.composer.title.clone_from(title);
            Ok((true, vec![]))
        }
        Event::ContentChanged(content) => {
            state.composer.content.clone_from(content);
            Ok((true, vec![]))
        }
        Event::MoodChanged(mood) => {
            state.composer.mood = *mood;
            Ok((true, vec![]))
        }
        Event::PrivacyToggled => {
            state.composer.is_private = !state.composer.is_private;
            Ok((true, vec![]))
        }
        Event::TagAdded(candidate) => {
            state.composer.add_tag(candidate);
            Ok((true, vec![]))
        }
        Event::TagRemoved(value) => {
            state.composer.remove_tag(value);
            Ok((true, vec![]))
        }
        Event::SubmitEntry => submit_entry(state),
        Event::RequestDelete(id) => {
            if state.entry(id).is_none() {
                return Ok((false, vec![]));
            }
            state.pending_delete = Some(id.clone());
            Ok((true, vec![]))
        }
        Event::ConfirmDelete(id) => {
            if state.pending_delete.as_deref() != Some(id.as_str()) {
                tracing::debug!(entry_id = %id, "delete not armed for this entry");
                return Ok((false, vec![]));
            }
            state.pending_delete = None;
            tracing::debug!(entry_id = %id, "delete confirmed");
            Ok((false, vec![Action::DeleteEntry { id: id.clone() }]))
        }
        Event::CancelDelete => {
            let was_armed = state.pending_delete.take().is_some();
            Ok((was_armed, vec![]))
        }
        Event::ToggleBookmark(id) => toggle_bookmark(state, id),
        Event::DismissNotice => {
            let had_notice = state.notice.take().is_some();
            Ok((had_notice, vec![]))
        }
        Event::StoreResponse(response) => handle_store_response(state, response),
    }
}

/// Validates and submits the composition form.
///
/// Validation failures surface as an error notice and never produce a store
/// action. A valid edit emits an update patch that leaves `bookmarked` unset;
/// a valid new entry emits a create. The form is only reset once the store
/// confirms via [`StoreResponse::EntrySaved`].
fn submit_entry(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if let Err(err) = state.composer.validate() {
        tracing::debug!(error = %err, "save rejected by validation");
        state.notice = Some(Notice::error(err.to_string()));
        return Ok((true, vec![]));
    }

    let Some(owner) = state.session.user().map(str::to_string) else {
        return Ok((false, vec![]));
    };

    let action = match &state.composer.selected {
        Some(id) => {
            tracing::debug!(entry_id = %id, "submitting edit");
            Action::UpdateEntry {
                id: id.clone(),
                patch: state.composer.to_patch(),
            }
        }
        None => {
            tracing::debug!("submitting new entry");
            Action::CreateEntry {
                owner,
                draft: state.composer.to_draft(),
            }
        }
    };

    Ok((false, vec![action]))
}

/// Optimistically flips a bookmark and issues the bookmark-only update.
///
/// The cached record and the bookmarked set change immediately; the id is
/// recorded as pending so a refetch landing before the server write is
/// acknowledged cannot clobber the toggle.
fn toggle_bookmark(state: &mut AppState, id: &str) -> Result<(bool, Vec<Action>)> {
    let Some(flagged) = state.flip_bookmark(id) else {
        tracing::debug!(entry_id = %id, "bookmark target not cached");
        return Ok((false, vec![]));
    };

    state.pending_bookmarks.insert(id.to_string());
    tracing::debug!(entry_id = %id, bookmarked = flagged, "bookmark toggled locally");

    Ok((
        true,
        vec![Action::UpdateEntry {
            id: id.to_string(),
            patch: crate::store::models::EntryPatch::bookmark(flagged),
        }],
    ))
}

fn handle_store_response(
    state: &mut AppState,
    response: &StoreResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        StoreResponse::EntriesLoaded { entries } => {
            tracing::debug!(count = entries.len(), "entry collection loaded");
            state.install_entries(entries.clone());
            Ok((true, vec![]))
        }
        StoreResponse::EntrySaved { entry } => {
            tracing::debug!(entry_id = %entry.id, "save committed");
            state.upsert_entry(entry.clone());
            state.composer.reset();
            state.notice = Some(Notice::info("Entry saved"));
            Ok((true, vec![]))
        }
        StoreResponse::EntryDeleted { id } => {
            tracing::debug!(entry_id = %id, "delete committed");
            state.remove_entry(id);
            state.notice = Some(Notice::info("Entry deleted"));
            Ok((true, vec![]))
        }
        StoreResponse::BookmarkCommitted { id, bookmarked } => {
            tracing::debug!(entry_id = %id, bookmarked = bookmarked, "bookmark committed");
            state.pending_bookmarks.remove(id);
            // Last write wins: mirror whatever flag the store settled on.
            if state.entry(id).map(|e| e.bookmarked) != Some(*bookmarked) {
                state.flip_bookmark(id);
            }
            Ok((false, vec![]))
        }
        StoreResponse::Failed { op, failure } => handle_store_failure(state, op, failure),
    }
}

/// Maps a failed store operation back onto local state.
///
/// Transient failures roll local state back to its pre-attempt shape and
/// surface a notice; a vanished target additionally triggers a
/// resynchronizing refetch. A delete of an already-absent entry ends in the
/// desired state and is treated as success.
fn handle_store_failure(
    state: &mut AppState,
    op: &FailedOp,
    failure: &StoreFailure,
) -> Result<(bool, Vec<Action>)> {
    tracing::debug!(op = ?op, failure = ?failure, "store operation failed");

    match (op, failure) {
        (FailedOp::Delete(id), StoreFailure::NotFound(_)) => {
            // Already gone; end state is identical to a successful delete.
            state.remove_entry(id);
            state.notice = Some(Notice::info("Entry deleted"));
            Ok((true, vec![]))
        }
        (FailedOp::Bookmark(id), StoreFailure::Unavailable(message)) => {
            // Undo the optimistic flip.
            state.pending_bookmarks.remove(id);
            state.flip_bookmark(id);
            state.notice = Some(Notice::error(format!("Could not update bookmark: {message}")));
            Ok((true, vec![]))
        }
        (FailedOp::Bookmark(id), StoreFailure::NotFound(_)) => {
            state.pending_bookmarks.remove(id);
            state.notice = Some(Notice::error("Entry no longer exists"));
            Ok((true, resync_actions(state)))
        }
        (_, StoreFailure::NotFound(_)) => {
            state.notice = Some(Notice::error("Entry no longer exists"));
            Ok((true, resync_actions(state)))
        }
        (_, StoreFailure::Unavailable(message)) => {
            state.notice = Some(Notice::error(format!("Store unavailable: {message}")));
            Ok((true, vec![]))
        }
    }
}

fn resync_actions(state: &AppState) -> Vec<Action> {
    state
        .session
        .user()
        .map(|owner| Action::FetchEntries {
            owner: owner.to_string(),
        })
        .into_iter()
        .collect()
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::AuthChanged(_) => "auth_changed",
        Event::SearchChanged(_) => "search_changed",
        Event::ClearSearch => "clear_search",
        Event::FilterChanged(_) => "filter_changed",
        Event::ToggleExpand(_) => "toggle_expand",
        Event::EditEntry(_) => "edit_entry",
        Event::CancelEdit => "cancel_edit",
        Event::TitleChanged(_) => "title_changed",
        Event::ContentChanged(_) => "content_changed",
        Event::MoodChanged(_) => "mood_changed",
        Event::PrivacyToggled => "privacy_toggled",
        Event::TagAdded(_) => "tag_added",
        Event::TagRemoved(_) => "tag_removed",
        Event::SubmitEntry => "submit_entry",
        Event::RequestDelete(_) => "request_delete",
        Event::ConfirmDelete(_) => "confirm_delete",
        Event::CancelDelete => "cancel_delete",
        Event::ToggleBookmark(_) => "toggle_bookmark",
        Event::DismissNotice => "dismiss_notice",
        Event::StoreResponse(_) => "store_response",
    }
}
