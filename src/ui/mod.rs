//! Presentation layer: view models and formatting helpers.
//!
//! Nothing here mutates state or performs I/O. The application layer builds
//! these structures; a rendering shell consumes them.

pub mod format;
pub mod viewmodel;

pub use viewmodel::{ComposerView, DiaryViewModel, EmptyState, EntryItem};
