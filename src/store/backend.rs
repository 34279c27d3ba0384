//! Store adapter abstraction.
//!
//! This module defines the [`EntryStore`] trait that abstracts over the backing
//! document database. The engine only ever talks to this trait, so a hosted
//! document store client, the bundled JSON file backend, and test doubles are
//! interchangeable without touching business logic.
//!
//! # Design Philosophy
//!
//! The trait is minimal and shaped by the engine's actual use cases, not a
//! generic ORM: one owner-scoped collection read plus single-document create,
//! merge-update, and delete. Durability and per-document atomicity are the
//! backend's responsibility.

use crate::domain::{Entry, Result};
use crate::store::models::{EntryPatch, NewEntry};

/// Abstraction over the backing entry store.
///
/// # Implementations
///
/// - [`JsonEntryStore`](crate::store::JsonEntryStore): JSON file with atomic
///   writes (bundled reference backend)
///
/// # Errors
///
/// All methods report network/auth-style failures as
/// [`DiaryError::StoreUnavailable`](crate::domain::DiaryError::StoreUnavailable)
/// and a missing target document as
/// [`DiaryError::NotFound`](crate::domain::DiaryError::NotFound).
pub trait EntryStore: Send {
    /// Retrieves every entry owned by `owner_id`, newest first.
    ///
    /// The returned ordering is authoritative: the engine preserves it through
    /// filtering and never re-sorts.
    fn fetch_entries(&self, owner_id: &str) -> Result<Vec<Entry>>;

    /// Creates one entry and returns the stored record.
    ///
    /// The store assigns the identifier and the creation timestamp.
    fn create_entry(&mut self, owner_id: &str, draft: &NewEntry) -> Result<Entry>;

    /// Merges a partial update into one entry and returns the updated record.
    ///
    /// Fields the patch leaves unset keep their stored values. The store
    /// reassigns `updated_at`.
    fn update_entry(&mut self, id: &str, patch: &EntryPatch) -> Result<Entry>;

    /// Deletes one entry by identifier.
    ///
    /// Reports `NotFound` when the entry is already absent; callers that only
    /// care about the end state may treat that as success.
    fn delete_entry(&mut self, id: &str) -> Result<()>;
}
