//! Command history management.
//!
//! History is kept in memory as a bounded list of lines and persisted as a
//! plain-text file, one line per entry.

mod storage;

pub use storage::HistoryStore;
