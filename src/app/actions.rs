//! Actions representing side effects to be executed by the client runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing an event. Actions bridge pure state
//! transitions and effectful operations: store calls and navigation. The
//! handler returns a `Vec<Action>` so multiple side effects can be queued
//! atomically; [`DiaryClient`](crate::client::DiaryClient) executes them in
//! sequence and feeds store results back in as events.

use crate::domain::{EntryId, UserId};
use crate::store::models::{EntryPatch, NewEntry};

/// Commands representing side effects to be executed by the client runtime.
///
/// Store-bound actions map one-to-one onto
/// [`EntryStore`](crate::store::EntryStore) methods; the runtime converts
/// each outcome into a [`StoreResponse`](crate::app::handler::StoreResponse)
/// event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetches the full entry collection for the signed-in user,
    /// newest first.
    FetchEntries {
        /// Owner whose entries to load.
        owner: UserId,
    },

    /// Creates a new entry from the composition form.
    CreateEntry {
        /// Owner of the new entry.
        owner: UserId,
        /// Field values for the create.
        draft: NewEntry,
    },

    /// Applies a partial update to one entry.
    ///
    /// Used both by edit saves (patch without `bookmarked`) and by bookmark
    /// toggles (bookmark-only patch).
    UpdateEntry {
        /// Target entry.
        id: EntryId,
        /// Fields to merge.
        patch: EntryPatch,
    },

    /// Deletes one entry after the confirm gate has fired.
    DeleteEntry {
        /// Target entry.
        id: EntryId,
    },

    /// Navigates the shell to its unauthenticated view.
    ///
    /// Emitted when the auth session transitions to signed-out.
    RedirectToLogin,
}
