//! Append-only command history at `~/.exo/history.json`.
//!
//! The file is read, extended and rewritten without locking; two concurrent
//! invocations can lose an entry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use exo_core::{application::ApplicationError, error::ExoResult};

use crate::filesystem::map_io_error;

/// Entries kept after every append.
pub const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub command: String,
    pub project: String,
    #[serde(default)]
    pub details: String,
}

impl HistoryEntry {
    pub fn new(
        command: impl Into<String>,
        project: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            command: command.into(),
            project: project.into(),
            details: details.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonHistoryLog {
    path: PathBuf,
    limit: usize,
}

impl JsonHistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            limit: HISTORY_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored entry, oldest first. An unreadable file counts as empty.
    pub fn entries(&self) -> ExoResult<Vec<HistoryEntry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error(&self.path, e, "read history")),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding corrupt history");
                Ok(Vec::new())
            }
        }
    }

    /// The newest `n` entries, newest first.
    pub fn recent(&self, n: usize) -> ExoResult<Vec<HistoryEntry>> {
        Ok(self.entries()?.into_iter().rev().take(n).collect())
    }

    #[instrument(skip(self, entry), fields(command = %entry.command))]
    pub fn append(&self, entry: HistoryEntry) -> ExoResult<()> {
        let mut entries = self.entries()?;
        entries.push(entry);
        if entries.len() > self.limit {
            let excess = entries.len() - self.limit;
            entries.drain(..excess);
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        let json = serde_json::to_string_pretty(&entries).map_err(|e| {
            ApplicationError::FilesystemError {
                path: self.path.clone(),
                reason: format!("Failed to serialize history: {e}"),
            }
        })?;
        fs::write(&self.path, json).map_err(|e| map_io_error(&self.path, e, "write history"))?;

        debug!(entries = entries.len(), "History updated");
        Ok(())
    }

    /// Delete the history file. Clearing an absent history is not an error.
    pub fn clear(&self) -> ExoResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(&self.path, e, "remove history")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn log(dir: &TempDir) -> JsonHistoryLog {
        JsonHistoryLog::new(dir.path().join("nested/history.json"))
    }

    #[test]
    fn append_creates_parent_and_recent_is_newest_first() {
        let dir = TempDir::new().unwrap();
        let log = log(&dir);
        log.append(HistoryEntry::new("gen", "svc", "docker")).unwrap();
        log.append(HistoryEntry::new("gen", "svc", "k8s")).unwrap();

        let recent = log.recent(10).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].details, "k8s");
    }

    #[test]
    fn bounded_to_limit() {
        let dir = TempDir::new().unwrap();
        let log = log(&dir).with_limit(3);
        for i in 0..5 {
            log.append(HistoryEntry::new("gen", "svc", i.to_string()))
                .unwrap();
        }

        let entries = log.entries().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].details, "2");
    }

    #[test]
    fn corrupt_file_is_replaced_on_append() {
        let dir = TempDir::new().unwrap();
        let log = log(&dir);
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(log.path(), "{not json").unwrap();

        assert!(log.entries().unwrap().is_empty());
        log.append(HistoryEntry::new("init", "svc", "")).unwrap();
        assert_eq!(log.entries().unwrap().len(), 1);
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let log = log(&dir);
        log.append(HistoryEntry::new("init", "svc", "")).unwrap();
        log.clear().unwrap();
        log.clear().unwrap();
        assert!(log.entries().unwrap().is_empty());
    }
}
