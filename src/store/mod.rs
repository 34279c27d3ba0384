//! Store adapter layer for entry persistence.
//!
//! This module provides the abstraction over the backing document database and
//! the bundled JSON file reference backend. The engine issues all reads and
//! writes through the [`EntryStore`] trait; wire shapes for create and partial
//! update live in [`models`].
//!
//! # Modules
//!
//! - `backend`: [`EntryStore`] trait abstraction for backend implementations
//! - `json`: JSON file-based reference implementation
//! - `models`: create/update payload types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::EntryStore;
pub use json::JsonEntryStore;
pub use models::{EntryPatch, NewEntry};
