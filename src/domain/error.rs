//! Error types for the WhisperNote core engine.
//!
//! This module defines the centralized error type [`DiaryError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Nothing in this taxonomy is fatal to the process: every failure leaves the
//! composition form and entry list in their last-known-good state and is surfaced
//! to the user as a dismissible notice rather than a blocking error.

use crate::domain::entry::EntryId;
use thiserror::Error;

/// The main error type for WhisperNote core operations.
///
/// Variants fall into three behavioral groups:
///
/// - [`Validation`](DiaryError::Validation) is local. It is raised before any
///   store traffic and corrected by the user editing their input.
/// - [`StoreUnavailable`](DiaryError::StoreUnavailable), [`Io`](DiaryError::Io),
///   and [`Storage`](DiaryError::Storage) are transient. The attempted operation
///   is not retried automatically and local state remains as it was before the
///   attempt.
/// - [`NotFound`](DiaryError::NotFound) means the target entry vanished from the
///   store; the engine responds with a resynchronizing refetch.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// A required field is empty after trimming.
    ///
    /// Raised by the save path before the store adapter is contacted. The
    /// field name identifies which input the user must correct.
    #[error("{0} must not be empty")]
    Validation(&'static str),

    /// The store adapter could not complete a request.
    ///
    /// Covers network and authentication failures from the backing document
    /// store. The string contains a description of what went wrong.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The targeted entry no longer exists in the store.
    ///
    /// Occurs when a mutation races a deletion made elsewhere. The engine
    /// surfaces the error and refetches the collection to resynchronize.
    #[error("entry not found: {0}")]
    NotFound(EntryId),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations in the JSON store
    /// backend. Automatically converts from `std::io::Error` using `#[from]`.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON store backend read or wrote malformed data.
    ///
    /// The string contains a description of the serialization problem.
    #[error("storage error: {0}")]
    Storage(String),
}

/// A specialized `Result` type for WhisperNote core operations.
pub type Result<T> = std::result::Result<T, DiaryError>;
