//! Shared read-only state for the editor callbacks.
//!
//! The highlighter, completer and hinter each hold an `Arc<Session>`. The
//! session is built once at startup and never mutated afterwards.

use crate::completion;
use crate::config::{Config, DEFAULT_WORD_BREAK_CHARS};
use crate::editor::hinter::{self, HintPolicy, Hints};
use crate::highlighter::{self, HighlightRule};
use cb_commands::CommandRegistry;
use nu_ansi_term::Color;
use std::collections::HashMap;

/// Color of command names in the input line.
const COMMAND_COLOR: Color = Color::LightMagenta;

/// Token catalog, highlight rules and hint policy.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Vec<String>,
    descriptions: HashMap<String, String>,
    rules: Vec<HighlightRule>,
    hint_policy: HintPolicy,
    word_breaks: Vec<char>,
}

impl Session {
    /// Create a session over `catalog` with default policies and no highlight rules.
    pub fn new(catalog: Vec<String>) -> Self {
        Session {
            catalog: dedup(catalog),
            descriptions: HashMap::new(),
            rules: Vec::new(),
            hint_policy: HintPolicy::default(),
            word_breaks: DEFAULT_WORD_BREAK_CHARS.chars().collect(),
        }
    }

    /// Build the session from the registered commands and configuration.
    ///
    /// The catalog holds the command names followed by `[completion] words`.
    /// Highlight rules are the built-in table, then one rule per command
    /// name, then the configured rules.
    pub fn from_config(registry: &CommandRegistry, config: &Config) -> Self {
        let names = registry.names();

        let mut catalog = names.clone();
        catalog.extend(config.completion.words.iter().cloned());

        let descriptions = names
            .iter()
            .filter_map(|name| {
                registry
                    .help(name)
                    .filter(|help| !help.is_empty())
                    .map(|help| (name.clone(), help.to_string()))
            })
            .collect();

        let mut rules = highlighter::default_rules();
        rules.extend(highlighter::command_rules(&names, COMMAND_COLOR));
        rules.extend(highlighter::config_rules(&config.highlight.rules));

        let hint_policy = HintPolicy {
            min_chars: config.hints.min_chars,
            sentinel: config.hints.sentinel.clone(),
            unique_color: config.hints.unique_color,
        };

        let session = Session::new(catalog)
            .with_descriptions(descriptions)
            .with_rules(rules)
            .with_hint_policy(hint_policy)
            .with_word_breaks(config.editor.word_break_chars.chars().collect());
        log::debug!(
            "Session ready: {} catalog tokens, {} highlight rules",
            session.catalog.len(),
            session.rules.len()
        );
        session
    }

    #[must_use]
    pub fn with_rules(mut self, rules: Vec<HighlightRule>) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_hint_policy(mut self, policy: HintPolicy) -> Self {
        self.hint_policy = policy;
        self
    }

    #[must_use]
    pub fn with_word_breaks(mut self, breaks: Vec<char>) -> Self {
        self.word_breaks = breaks;
        self
    }

    #[must_use]
    pub fn with_descriptions(mut self, descriptions: HashMap<String, String>) -> Self {
        self.descriptions = descriptions;
        self
    }

    pub fn word_breaks(&self) -> &[char] {
        &self.word_breaks
    }

    /// Help text shown next to a completion candidate.
    pub fn description(&self, token: &str) -> Option<&str> {
        self.descriptions.get(token).map(String::as_str)
    }

    /// Start of the word ending at `pos`.
    pub fn word_start(&self, line: &str, pos: usize) -> usize {
        completion::word_start(line, pos, &self.word_breaks)
    }

    /// Completion candidates for the word ending at `pos`, with its start offset.
    pub fn complete(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let head = line.get(..pos).unwrap_or(line);
        let start = self.word_start(head, head.len());
        (start, completion::complete(&self.catalog, head, start))
    }

    /// Hints for the word ending at `pos`, with its start offset.
    pub fn hint(&self, line: &str, pos: usize) -> (usize, Hints) {
        let head = line.get(..pos).unwrap_or(line);
        let start = self.word_start(head, head.len());
        (
            start,
            hinter::hint(&self.catalog, head, start, &self.hint_policy),
        )
    }

    /// Per-character colors of `line`.
    pub fn highlight(&self, line: &str) -> Vec<Option<Color>> {
        highlighter::highlight(line, &self.rules)
    }
}

/// Drop exact duplicates, keeping the first occurrence.
fn dedup(tokens: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
