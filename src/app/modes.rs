//! Filter and session mode types for the application.
//!
//! This module defines the small state machine enums that control which
//! entries are visible and whether the engine is allowed to talk to the store
//! at all.

use crate::domain::{Mood, UserId};

/// Category filter applied to the entry list after search matching.
///
/// Filters narrow the visible set; they never change the newest-first
/// ordering established by the store query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// No additional constraint beyond the search query.
    #[default]
    All,

    /// Only entries in the bookmarked set.
    Bookmarked,

    /// Only entries flagged private.
    Private,

    /// Only entries recorded with the given mood.
    ///
    /// Carries its own selected mood, independent of whatever mood is
    /// currently picked in the composition form.
    Mood(Mood),
}

/// Authentication context injected into the engine.
///
/// Lifecycle: `SignedOut -> SignedIn(user) -> SignedOut`. The engine reacts
/// to transitions of this value instead of polling ambient global state;
/// once signed out it issues no further store operations and drops stale
/// responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthSession {
    /// No authenticated user. All events except sign-in are ignored.
    #[default]
    SignedOut,

    /// An authenticated user whose entries the engine manages.
    SignedIn(UserId),
}

impl AuthSession {
    /// Returns the signed-in user id, if any.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        match self {
            Self::SignedOut => None,
            Self::SignedIn(user) => Some(user),
        }
    }

    /// Returns whether a user is signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }
}
