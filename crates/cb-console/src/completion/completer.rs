//! Prefix completion over the token catalog.

use crate::session::Session;
use reedline::{Completer, Span, Suggestion};
use std::sync::Arc;

/// Byte offset where the word under the cursor begins.
///
/// Scans back from `pos` to the last character in `breaks`; the word starts
/// just after it, or at 0 when there is none.
pub fn word_start(line: &str, pos: usize, breaks: &[char]) -> usize {
    let pos = pos.min(line.len());
    let Some(head) = line.get(..pos) else {
        return 0;
    };
    head.char_indices()
        .rev()
        .find(|(_, c)| breaks.contains(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

/// Catalog tokens starting with `buffer[word_start..]`, in catalog order.
pub fn complete(catalog: &[String], buffer: &str, word_start: usize) -> Vec<String> {
    let prefix = buffer.get(word_start..).unwrap_or("");
    catalog
        .iter()
        .filter(|token| token.starts_with(prefix))
        .cloned()
        .collect()
}

/// reedline completer offering catalog tokens for the word under the cursor.
pub struct CatalogCompleter {
    session: Arc<Session>,
}

impl CatalogCompleter {
    pub fn new(session: Arc<Session>) -> Self {
        CatalogCompleter { session }
    }
}

impl Completer for CatalogCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let (start, candidates) = self.session.complete(line, pos);
        candidates
            .into_iter()
            .map(|value| Suggestion {
                description: self.session.description(&value).map(str::to_string),
                value,
                span: Span { start, end: pos },
                append_whitespace: false,
                ..Default::default()
            })
            .collect()
    }
}
