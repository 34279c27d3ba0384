//! Application layer: state, events, and the transitions between them.
//!
//! This layer owns the in-memory entry cache and every rule about how it may
//! change. It is deliberately free of I/O: handlers return [`Action`]s and the
//! client runtime executes them against the store, feeding outcomes back in as
//! [`Event::StoreResponse`].

pub mod actions;
pub mod composer;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use composer::Composer;
pub use handler::{handle_event, Event, FailedOp, StoreFailure, StoreResponse};
pub use modes::{AuthSession, FilterMode};
pub use state::{AppState, Notice, NoticeKind};
