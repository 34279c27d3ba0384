//! Entry domain model and operations.
//!
//! This module defines the core [`Entry`] type representing one diary record owned
//! by a user, along with the [`Mood`] enumeration and the human-readable time
//! formatting used by the entry list. Identifiers are opaque strings assigned by
//! the store adapter on creation and never reused.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a diary entry, assigned by the store adapter.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = String;

/// Identifier of an authenticated user, as reported by the auth provider.
pub type UserId = String;

/// Placeholder shown for entries whose creation timestamp has not landed yet.
const PENDING_TIMESTAMP_LABEL: &str = "Just now";

/// Mood attached to a diary entry.
///
/// One value from a fixed set; the composition form defaults to
/// [`Mood::Neutral`]. Unknown values coming in from outside the crate are
/// mapped to neutral at the parse boundary rather than rejected, so a store
/// document written by a newer version never poisons a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// No particular mood. The default for new entries.
    #[default]
    Neutral,
    Happy,
    Sad,
    Excited,
    Angry,
    Anxious,
}

impl Mood {
    /// All moods in the order the composition form offers them.
    pub const ALL: [Self; 6] = [
        Self::Neutral,
        Self::Happy,
        Self::Sad,
        Self::Excited,
        Self::Angry,
        Self::Anxious,
    ];

    /// Returns the display glyph for this mood.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Neutral => "\u{1f610}",  // 😐
            Self::Happy => "\u{1f60a}",    // 😊
            Self::Sad => "\u{1f622}",      // 😢
            Self::Excited => "\u{1f929}",  // 🤩
            Self::Angry => "\u{1f620}",    // 😠
            Self::Anxious => "\u{1f61f}",  // 😟
        }
    }

    /// Returns the human-readable label for this mood.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Excited => "Excited",
            Self::Angry => "Angry",
            Self::Anxious => "Anxious",
        }
    }

    /// Parses a mood tag, falling back to [`Mood::Neutral`] for anything
    /// unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use whispernote_core::Mood;
    ///
    /// assert_eq!(Mood::parse("happy"), Mood::Happy);
    /// assert_eq!(Mood::parse("grumpy"), Mood::Neutral);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "happy" => Self::Happy,
            "sad" => Self::Sad,
            "excited" => Self::Excited,
            "angry" => Self::Angry,
            "anxious" => Self::Anxious,
            _ => Self::Neutral,
        }
    }
}

impl<'de> Deserialize<'de> for Mood {
    /// Deserializes via [`Mood::parse`], mapping unrecognized values to
    /// [`Mood::Neutral`] instead of failing the surrounding document.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// One diary record owned by a user.
///
/// `id` and `owner_id` are immutable after creation. `created_at` is assigned
/// once by the store and never updated; `updated_at` is reassigned by the
/// store on every update. The `bookmarked` flag is independently toggleable
/// from edit state: a title/content save must never clobber it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque store-assigned identifier, unique and stable.
    pub id: EntryId,

    /// Identifier of the user who owns this entry. Set once at creation.
    pub owner_id: UserId,

    /// Entry title. Required to be non-empty (post-trim) for a save.
    pub title: String,

    /// Entry body text. Required to be non-empty (post-trim) for a save.
    pub content: String,

    /// Mood recorded with this entry.
    #[serde(default)]
    pub mood: Mood,

    /// Short text labels, insertion order preserved, duplicates forbidden.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether this entry is hidden from shared views.
    #[serde(default)]
    pub is_private: bool,

    /// Whether the user has bookmarked this entry.
    #[serde(default)]
    pub bookmarked: bool,

    /// Creation time in Unix epoch milliseconds. `None` while the store's
    /// server-side timestamp has not landed yet.
    pub created_at: Option<i64>,

    /// Last update time in Unix epoch milliseconds.
    pub updated_at: Option<i64>,
}

impl Entry {
    /// Returns whether this entry matches a search needle.
    ///
    /// The needle must already be lowercased by the caller. An entry matches
    /// when the needle is a substring of its title or content, or of any of
    /// its tags. An empty needle matches everything.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Returns the creation date formatted for display, e.g. "March 19, 2025".
    ///
    /// Falls back to a fixed placeholder when the store has not assigned a
    /// timestamp yet.
    #[must_use]
    pub fn created_date(&self) -> String {
        format_timestamp(self.created_at, "%B %-d, %Y")
    }

    /// Returns the creation time formatted for display, e.g. "3:04 PM".
    ///
    /// Falls back to the same placeholder as [`created_date`](Self::created_date).
    #[must_use]
    pub fn created_time(&self) -> String {
        format_timestamp(self.created_at, "%-I:%M %p")
    }
}

fn format_timestamp(millis: Option<i64>, pattern: &str) -> String {
    millis
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map_or_else(
            || PENDING_TIMESTAMP_LABEL.to_string(),
            |utc| {
                utc.with_timezone(&chrono::Local)
                    .format(pattern)
                    .to_string()
            },
        )
}
