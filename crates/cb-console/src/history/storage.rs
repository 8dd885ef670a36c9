//! Bounded plain-text history store.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing the history file.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to read history file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write history file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Submitted lines, oldest first, bounded by a capacity.
///
/// When the store is full, appending drops the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    entries: VecDeque<String>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        HistoryStore {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Load entries from `path`, appending them after the current ones.
    ///
    /// A missing file is not an error and loads nothing. Blank lines are
    /// skipped. Returns the number of entries read.
    pub fn load(&mut self, path: &Path) -> Result<usize, HistoryError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No history file at {}", path.display());
                return Ok(0);
            }
            Err(source) => {
                return Err(HistoryError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut count = 0;
        for line in content.lines() {
            if self.push(line) {
                count += 1;
            }
        }
        log::info!("Loaded {} history entries from {}", count, path.display());
        Ok(count)
    }

    /// Record a submitted line.
    ///
    /// Blank lines are not recorded: the file holds one entry per line and
    /// skips blank lines on load, so they could not survive a save.
    pub fn append(&mut self, line: &str) {
        self.push(line);
    }

    fn push(&mut self, line: &str) -> bool {
        if line.trim().is_empty() || self.capacity == 0 {
            return false;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(line.replace(['\n', '\r'], " "));
        true
    }

    /// Write all entries to `path`, replacing its contents.
    ///
    /// Parent directories are created as needed.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let write_err = |source| HistoryError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut content = String::new();
        for entry in &self.entries {
            content.push_str(entry);
            content.push('\n');
        }
        fs::write(path, content).map_err(write_err)?;

        log::info!(
            "Saved {} history entries to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
