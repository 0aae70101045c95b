//! Answer history persistence
//!
//! Previous answers are stored per (username, template) pair so the next
//! run can offer them as defaults. The file is rewritten wholesale after
//! every generation, and the entry for the current pair is replaced rather
//! than merged: fields absent from the current submission are dropped.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Stored answers for one (username, template) pair
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Date this entry was last rewritten
    pub last_updated: String,

    /// Field name -> last submitted value
    pub data: BTreeMap<String, String>,
}

/// On-disk answer history
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: BTreeMap<String, HistoryEntry>,
}

impl HistoryStore {
    /// Key for a (username, template stem) pair
    pub fn key(username: &str, template_stem: &str) -> String {
        format!("{username}_{template_stem}")
    }

    /// Load history from the given path
    ///
    /// A missing file yields an empty store; a corrupt one is logged and
    /// treated as empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Failed to parse history {}: {e}. Starting empty", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "No history file yet");
                BTreeMap::new()
            }
        };

        Self { path, entries }
    }

    /// Stored entry for a (username, template stem) pair
    pub fn entry(&self, username: &str, template_stem: &str) -> Option<&HistoryEntry> {
        self.entries.get(&Self::key(username, template_stem))
    }

    /// Last stored value for one field of a (username, template stem) pair
    pub fn last_value(&self, username: &str, template_stem: &str, field: &str) -> Option<&str> {
        self.entry(username, template_stem)
            .and_then(|entry| entry.data.get(field))
            .map(String::as_str)
    }

    /// Replace the entry for this pair with the given data
    ///
    /// The previous entry is discarded wholesale: only fields present in
    /// `data` survive.
    pub fn record(&mut self, username: &str, template_stem: &str, data: BTreeMap<String, String>, today: &str) {
        self.entries.insert(
            Self::key(username, template_stem),
            HistoryEntry {
                last_updated: today.to_string(),
                data,
            },
        );
    }

    /// Rewrite the whole history file
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries).context("Failed to serialize history")?;

        fs::write(&self.path, content).context(format!("Failed to write history {}", self.path.display()))?;

        debug!(entries = self.entries.len(), "History saved");
        Ok(())
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
