//! Domain layer for the WhisperNote core engine.
//!
//! This module contains the core domain types and business rules of the diary,
//! independent of any particular store backend or UI shell. It keeps the entry
//! model and the error taxonomy isolated from infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Entry domain model, moods, and display formatting

pub mod entry;
pub mod error;

pub use entry::{Entry, EntryId, Mood, UserId};
pub use error::{DiaryError, Result};
