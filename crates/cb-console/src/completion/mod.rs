//! Code completion functionality.
//!
//! Completion offers every catalog token sharing the prefix of the word under
//! the cursor, shown in a columnar menu bound to Tab.

pub mod completer;

pub use completer::{CatalogCompleter, complete, word_start};
