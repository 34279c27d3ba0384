//! WhisperNote: a personal diary engine with optimistic local state.
//!
//! WhisperNote keeps a per-user journal of mood-tagged entries and provides:
//! - Case-insensitive substring search across titles, content, and tags
//! - Category filters (all, bookmarked, private, per-mood)
//! - A composition form with validation, tag staging, and edit mode
//! - Optimistic bookmark toggles and two-step delete confirmation
//! - Persistent state backed by atomic JSON file storage

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Client Runtime (client.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐       ┌───────────────────┐
//! │ UI Layer          │       │ Store Layer       │
//! │ (ui/)             │       │ (store/)          │
//! │ - View models     │       │ - Adapter trait   │
//! │ - Formatting      │       │ - JSON file I/O   │
//! └───────────────────┘       └───────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Filesystem paths (infrastructure/)               │
//! │  - Error types (domain/error)                       │
//! │  - Entry model (domain/entry)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Structured tracing to stderr                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`client`]: Runtime wiring events to a store adapter
//! - [`domain`]: Core domain types (Entry, Mood, errors)
//! - [`infrastructure`]: Filesystem path resolution
//! - [`store`]: Store adapter trait and JSON file persistence
//! - [`ui`]: View models and formatting helpers
//! - [`observability`]: Structured tracing setup
//!
//! # Data Flow
//!
//! 1. **Sign-in** creates a session and fetches the user's entries,
//!    newest first.
//! 2. **Events** (search input, filter switches, form edits, toggles) run
//!    through [`handle_event`], which mutates state and returns actions.
//! 3. **Actions** execute against the configured [`EntryStore`]; outcomes
//!    re-enter the handler as store responses that commit or roll back the
//!    optimistic state.
//! 4. **Rendering** consumes a computed [`DiaryViewModel`](ui::DiaryViewModel)
//!    with display-ready strings and flags.
//!
//! # Examples
//!
//! ```no_run
//! use whispernote_core::{initialize, Config, Event};
//!
//! let config = Config {
//!     store_path: Some("/tmp/whispernote-doc/entries.json".into()),
//!     ..Default::default()
//! };
//!
//! let mut client = initialize(&config)?;
//! client.sign_in("user-1")?;
//!
//! client.dispatch(Event::TitleChanged("First entry".to_string()))?;
//! client.dispatch(Event::ContentChanged("Hello, diary.".to_string()))?;
//! client.dispatch(Event::SubmitEntry)?;
//!
//! assert_eq!(client.viewmodel().items.len(), 1);
//! # Ok::<(), whispernote_core::DiaryError>(())
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{
    handle_event, Action, AppState, AuthSession, Composer, Event, FailedOp, FilterMode, Notice,
    NoticeKind, StoreFailure, StoreResponse,
};
pub use client::DiaryClient;
pub use domain::{DiaryError, Entry, EntryId, Mood, Result, UserId};
pub use store::{EntryPatch, EntryStore, JsonEntryStore, NewEntry};

use std::path::PathBuf;

use serde::Deserialize;

/// Engine configuration, typically loaded from a TOML file.
///
/// All fields are optional; defaults cover the common case of a per-user
/// store under the home directory.
///
/// # Example
///
/// ```toml
/// # ~/.config/whispernote/config.toml
/// store_path = "~/diary/entries.json"
/// trace_level = "debug"
/// excerpt_chars = 200
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location of the JSON entry store.
    ///
    /// A leading `~` is expanded to the home directory. Default:
    /// `~/.local/share/whispernote/entries.json`.
    pub store_path: Option<PathBuf>,

    /// Tracing level for log output.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Overridden by
    /// `RUST_LOG` when set. Default: `"info"`
    pub trace_level: Option<String>,

    /// Number of characters shown of a collapsed entry's content.
    pub excerpt_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            trace_level: None,
            excerpt_chars: client::DEFAULT_EXCERPT_CHARS,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DiaryError::Io`] if the file cannot be read and
    /// [`DiaryError::Storage`] if it is not valid TOML.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| DiaryError::Storage(e.to_string()))
    }

    /// Resolves the configured store path, falling back to the default
    /// location under the home directory.
    #[must_use]
    pub fn resolved_store_path(&self) -> PathBuf {
        self.store_path.as_ref().map_or_else(
            infrastructure::default_store_path,
            |path| infrastructure::expand_tilde(&path.to_string_lossy()),
        )
    }
}

/// Initializes a diary client backed by the JSON file store.
///
/// Sets up tracing per the configuration, opens (or creates) the store file,
/// and returns a signed-out client ready for a
/// [`sign_in`](DiaryClient::sign_in).
///
/// # Errors
///
/// Returns an error if the store file exists but cannot be read or parsed.
pub fn initialize(config: &Config) -> Result<DiaryClient<JsonEntryStore>> {
    observability::init_tracing(config);
    tracing::debug!("initializing diary engine");

    let store = JsonEntryStore::new(config.resolved_store_path())?;
    Ok(DiaryClient::with_excerpt_chars(store, config.excerpt_chars))
}
