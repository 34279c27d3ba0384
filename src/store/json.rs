//! JSON file-based entry store.
//!
//! This module provides the bundled reference backend: a single human-readable
//! JSON document holding every entry, with atomic file writes
//! (write-to-temp + rename) to prevent corruption on crashes. It stands in for
//! the hosted document store during local development and in tests.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n) over the in-memory map, loaded from disk once
//! - **Write**: O(n) - serializes and writes the entire dataset
//! - **Best for**: a personal diary's worth of entries, infrequent writes

use crate::domain::{DiaryError, Entry, Result};
use crate::store::backend::EntryStore;
use crate::store::models::{EntryPatch, NewEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// JSON store container format.
///
/// Top-level structure serialized to disk. Carries a format version for future
/// migrations and the id counter so identifiers stay unique across reloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the store format for future migrations.
    version: u32,

    /// Counter backing store-assigned identifiers. Never reused.
    #[serde(default)]
    next_id: u64,

    /// All stored entries, indexed by id for O(1) lookups.
    #[serde(default)]
    entries: HashMap<String, Entry>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            next_id: 1,
            entries: HashMap::new(),
        }
    }
}

/// JSON file entry store.
///
/// Keeps the whole dataset in memory and persists on every modification using
/// an atomic temp-write + rename. Identifiers are opaque, zero-padded, and
/// assigned from a persisted counter, so they remain stable and unique for the
/// lifetime of the store file.
#[derive(Debug)]
pub struct JsonEntryStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StoreData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonEntryStore {
    /// Creates or opens a JSON entry store.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty. Parent
    /// directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails, the file cannot be
    /// read, or it contains invalid JSON.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON entry store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StoreData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &PathBuf) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| DiaryError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded store data"
        );

        Ok(data)
    }

    /// Saves store data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it to the target path,
    /// so the file is never left in a corrupt state even if the process
    /// crashes mid-write.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving store data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DiaryError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("store saved successfully");
        Ok(())
    }

    /// Mints the next entry identifier.
    ///
    /// Zero-padded so lexicographic order matches assignment order, which
    /// keeps the newest-first sort stable for entries created within the same
    /// millisecond.
    fn next_entry_id(&mut self) -> String {
        let id = format!("entry-{:08}", self.data.next_id);
        self.data.next_id = self.data.next_id.saturating_add(1);
        id
    }

    fn now_millis() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

impl EntryStore for JsonEntryStore {
    fn fetch_entries(&self, owner_id: &str) -> Result<Vec<Entry>> {
        let _span = tracing::debug_span!("json_fetch_entries", owner_id = %owner_id).entered();

        let mut entries: Vec<Entry> = self
            .data
            .entries
            .values()
            .filter(|entry| entry.owner_id == owner_id)
            .cloned()
            .collect();

        // Newest first; ids break ties for same-millisecond creations.
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        tracing::debug!(count = entries.len(), "retrieved entries");
        Ok(entries)
    }

    fn create_entry(&mut self, owner_id: &str, draft: &NewEntry) -> Result<Entry> {
        let _span = tracing::debug_span!("json_create_entry", owner_id = %owner_id).entered();

        let now = Self::now_millis();
        let entry = Entry {
            id: self.next_entry_id(),
            owner_id: owner_id.to_string(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            mood: draft.mood,
            tags: draft.tags.clone(),
            is_private: draft.is_private,
            bookmarked: false,
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.data.entries.insert(entry.id.clone(), entry.clone());
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(entry_id = %entry.id, "entry created");
        Ok(entry)
    }

    fn update_entry(&mut self, id: &str, patch: &EntryPatch) -> Result<Entry> {
        let _span = tracing::debug_span!("json_update_entry", entry_id = %id).entered();

        let entry = self
            .data
            .entries
            .get_mut(id)
            .ok_or_else(|| DiaryError::NotFound(id.to_string()))?;

        patch.apply(entry);
        entry.updated_at = Some(Self::now_millis());
        let updated = entry.clone();

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(entry_id = %id, "entry updated");
        Ok(updated)
    }

    fn delete_entry(&mut self, id: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_delete_entry", entry_id = %id).entered();

        if self.data.entries.remove(id).is_none() {
            return Err(DiaryError::NotFound(id.to_string()));
        }

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(entry_id = %id, "entry deleted");
        Ok(())
    }
}

impl Drop for JsonEntryStore {
    /// Ensures data is saved on drop, even if a caller forgot to flush.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
