//! The client runtime: wires the event handler to a store adapter.
//!
//! [`DiaryClient`] owns the application state and a store implementation.
//! Each dispatched event runs through
//! [`handle_event`](crate::app::handler::handle_event); the actions it returns
//! are executed against the store immediately, and each outcome re-enters the
//! handler as a [`StoreResponse`] until the queue drains. Actions the runtime
//! cannot execute itself (navigation) are returned to the caller.

use crate::app::actions::Action;
use crate::app::handler::{handle_event, Event, FailedOp, StoreFailure, StoreResponse};
use crate::app::state::AppState;
use crate::domain::error::Result;
use crate::domain::{DiaryError, UserId};
use crate::store::EntryStore;
use crate::ui::viewmodel::DiaryViewModel;

/// Number of characters shown of a collapsed entry's content.
pub const DEFAULT_EXCERPT_CHARS: usize = 150;

/// Drives the diary engine against a concrete store.
///
/// Generic over [`EntryStore`] so the same runtime serves the JSON file store
/// and test doubles alike.
pub struct DiaryClient<S: EntryStore> {
    state: AppState,
    store: S,
    excerpt_chars: usize,
}

impl<S: EntryStore> DiaryClient<S> {
    /// Creates a client over the given store with default display settings.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_excerpt_chars(store, DEFAULT_EXCERPT_CHARS)
    }

    /// Creates a client with a configured excerpt length.
    #[must_use]
    pub fn with_excerpt_chars(store: S, excerpt_chars: usize) -> Self {
        Self {
            state: AppState::new(),
            store,
            excerpt_chars,
        }
    }

    /// Read access to the current application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Computes the current display-ready view model.
    #[must_use]
    pub fn viewmodel(&self) -> DiaryViewModel {
        self.state.compute_viewmodel(self.excerpt_chars)
    }

    /// Dispatches an event, executing every resulting store operation.
    ///
    /// Store outcomes are fed back into the handler as responses until the
    /// engine has nothing left to do, so a single dispatch covers an entire
    /// optimistic-update round trip. Actions the runtime cannot execute
    /// itself are returned for the caller to carry out.
    ///
    /// # Errors
    ///
    /// Propagates handler errors; store failures are absorbed into state as
    /// notices and rollbacks rather than surfacing here.
    pub fn dispatch(&mut self, event: Event) -> Result<Vec<Action>> {
        let _span = tracing::debug_span!("dispatch").entered();

        let mut external = Vec::new();
        let mut queue = std::collections::VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let (_, actions) = handle_event(&mut self.state, &event)?;
            for action in actions {
                match self.execute(action) {
                    Executed::Response(response) => {
                        queue.push_back(Event::StoreResponse(response));
                    }
                    Executed::External(action) => external.push(action),
                }
            }
        }

        Ok(external)
    }

    /// Starts a session for `user` and loads their entries.
    ///
    /// # Errors
    ///
    /// Propagates handler errors from the dispatch.
    pub fn sign_in(&mut self, user: impl Into<UserId>) -> Result<Vec<Action>> {
        self.dispatch(Event::AuthChanged(Some(user.into())))
    }

    /// Ends the session and discards all local state.
    ///
    /// # Errors
    ///
    /// Propagates handler errors from the dispatch.
    pub fn sign_out(&mut self) -> Result<Vec<Action>> {
        self.dispatch(Event::AuthChanged(None))
    }

    fn execute(&mut self, action: Action) -> Executed {
        match action {
            Action::FetchEntries { owner } => {
                let response = match self.store.fetch_entries(&owner) {
                    Ok(entries) => StoreResponse::EntriesLoaded { entries },
                    Err(err) => failed(FailedOp::Fetch, err),
                };
                Executed::Response(response)
            }
            Action::CreateEntry { owner, draft } => {
                let response = match self.store.create_entry(&owner, &draft) {
                    Ok(entry) => StoreResponse::EntrySaved { entry },
                    Err(err) => failed(FailedOp::Save, err),
                };
                Executed::Response(response)
            }
            Action::UpdateEntry { id, patch } => {
                let bookmark_only = patch.is_bookmark_only();
                let response = match self.store.update_entry(&id, &patch) {
                    Ok(entry) if bookmark_only => StoreResponse::BookmarkCommitted {
                        id,
                        bookmarked: entry.bookmarked,
                    },
                    Ok(entry) => StoreResponse::EntrySaved { entry },
                    Err(err) if bookmark_only => failed(FailedOp::Bookmark(id), err),
                    Err(err) => failed(FailedOp::Save, err),
                };
                Executed::Response(response)
            }
            Action::DeleteEntry { id } => {
                let response = match self.store.delete_entry(&id) {
                    Ok(()) => StoreResponse::EntryDeleted { id },
                    Err(err) => failed(FailedOp::Delete(id), err),
                };
                Executed::Response(response)
            }
            Action::RedirectToLogin => Executed::External(Action::RedirectToLogin),
        }
    }
}

enum Executed {
    Response(StoreResponse),
    External(Action),
}

fn failed(op: FailedOp, err: DiaryError) -> StoreResponse {
    let failure = match err {
        DiaryError::NotFound(id) => StoreFailure::NotFound(id),
        other => StoreFailure::Unavailable(other.to_string()),
    };
    StoreResponse::Failed { op, failure }
}
