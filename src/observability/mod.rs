//! Structured logging via the `tracing` ecosystem.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Initialize early, before the first store operation:
//!
//! ```rust
//! use whispernote_core::observability::init_tracing;
//! use whispernote_core::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("diary engine initialized");
//! ```

mod init;

pub use init::init_tracing;
