//! Recent conversions, kept in `history.json` beside the config file.
//!
//! The newest entry comes first. Each resource path appears at most once;
//! recording it again moves it to the front with a fresh timestamp.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::config_dir;
use crate::resource::{ConversionMode, ConversionSummary};

/// History file name inside the configuration directory.
pub const HISTORY_FILE_NAME: &str = "history.json";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Errors raised while saving history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Default history file path.
pub fn history_file_path() -> PathBuf {
    config_dir().join(HISTORY_FILE_NAME)
}

/// One remembered conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Resource directory that was produced.
    pub path: PathBuf,
    /// Local time, `YYYY-MM-DD HH:MM`.
    pub timestamp: String,
    pub mode: ConversionMode,
    /// Registered model names.
    pub models: Vec<String>,
}

impl HistoryEntry {
    /// Entry for a finished conversion, stamped with the current local time.
    pub fn from_summary(summary: &ConversionSummary) -> Self {
        Self {
            path: summary.output_dir.clone(),
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            mode: summary.mode,
            models: summary.model_names.iter().cloned().collect(),
        }
    }
}

/// The recent-conversions list.
#[derive(Debug, Clone)]
pub struct History {
    path: PathBuf,
    max_entries: usize,
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Load from `path`.
    ///
    /// A missing or corrupt file yields an empty history.
    pub fn load(path: &Path, max_entries: usize) -> Self {
        let entries = match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<Vec<HistoryEntry>>(&text) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Ignoring corrupt history file");
                    Vec::new()
                }
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No history file");
                Vec::new()
            }
        };

        let mut history = Self {
            path: path.to_path_buf(),
            max_entries: max_entries.max(1),
            entries,
        };
        history.entries.truncate(history.max_entries);
        history
    }

    /// File backing this history.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry at the front, replacing any entry with the same path.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.retain(|existing| existing.path != entry.path);
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_entries);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Write the list back to its file.
    pub fn save(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| HistoryError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).map_err(|e| HistoryError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(path: &str, model: &str) -> HistoryEntry {
        HistoryEntry {
            path: PathBuf::from(path),
            timestamp: "2024-01-01 12:00".to_string(),
            mode: ConversionMode::Single,
            models: vec![model.to_string()],
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let history = History::load(&temp.path().join("history.json"), 5);
        assert!(history.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        let history = History::load(&path, 5);
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_deduplicates_by_path() {
        let temp = TempDir::new().unwrap();
        let mut history = History::load(&temp.path().join("history.json"), 5);

        history.record(entry("/res/adder", "adder"));
        history.record(entry("/res/comet", "comet"));
        history.record(entry("/res/adder", "adder2"));

        let paths: Vec<_> = history.entries().iter().map(|e| e.path.clone()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("/res/adder"), PathBuf::from("/res/comet")]
        );
        assert_eq!(history.entries()[0].models, vec!["adder2".to_string()]);
    }

    #[test]
    fn test_record_truncates() {
        let temp = TempDir::new().unwrap();
        let mut history = History::load(&temp.path().join("history.json"), 2);

        history.record(entry("/res/a", "a"));
        history.record(entry("/res/b", "b"));
        history.record(entry("/res/c", "c"));

        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.entries()[0].path, PathBuf::from("/res/c"));
        assert_eq!(history.entries()[1].path, PathBuf::from("/res/b"));
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sub").join("history.json");

        let mut history = History::load(&path, 5);
        history.record(entry("/res/adder", "adder"));
        history.save().unwrap();

        let reloaded = History::load(&path, 5);
        assert_eq!(reloaded.entries(), history.entries());

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"mode\": \"single\""));
    }

    #[test]
    fn test_entry_from_summary() {
        let mut summary =
            ConversionSummary::new(ConversionMode::Combined, PathBuf::from("/res/pack"));
        summary.model_names.insert("zentorno".to_string());
        summary.model_names.insert("adder".to_string());

        let entry = HistoryEntry::from_summary(&summary);
        assert_eq!(entry.path, PathBuf::from("/res/pack"));
        assert_eq!(entry.mode, ConversionMode::Combined);
        assert_eq!(
            entry.models,
            vec!["adder".to_string(), "zentorno".to_string()]
        );
        assert_eq!(entry.timestamp.len(), "2024-01-01 12:00".len());
    }
}
