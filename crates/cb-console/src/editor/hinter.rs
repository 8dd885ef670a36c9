//! Catalog-based inline hints for reedline.
//!
//! Hints complete the word under the cursor from the token catalog. They only
//! appear once the word is long enough or starts with the sentinel, so that
//! a single keystroke does not flood the line with suggestions.

use crate::session::Session;
use nu_ansi_term::{Color, Style};
use reedline::{Hinter, History};
use std::sync::Arc;

/// When hints are offered and how a unique match is colored.
#[derive(Debug, Clone, PartialEq)]
pub struct HintPolicy {
    /// Minimum prefix length, in characters.
    pub min_chars: usize,
    /// Prefixes starting with this text are always hinted. Empty disables it.
    pub sentinel: String,
    /// Color used when exactly one candidate remains.
    pub unique_color: Color,
}

impl HintPolicy {
    /// Whether `prefix` passes the gate.
    pub fn allows(&self, prefix: &str) -> bool {
        prefix.chars().count() >= self.min_chars
            || (!self.sentinel.is_empty() && prefix.starts_with(&self.sentinel))
    }
}

impl Default for HintPolicy {
    fn default() -> Self {
        HintPolicy {
            min_chars: 2,
            sentinel: ".".to_string(),
            unique_color: Color::Green,
        }
    }
}

/// Suggested suffixes for the word under the cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hints {
    /// Remaining text of each matching token, in catalog order.
    pub suffixes: Vec<String>,
    /// Override color, set only when exactly one token matches.
    pub color: Option<Color>,
}

impl Hints {
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

/// Compute hints for `buffer[word_start..]`.
pub fn hint(catalog: &[String], buffer: &str, word_start: usize, policy: &HintPolicy) -> Hints {
    let prefix = buffer.get(word_start..).unwrap_or("");
    if !policy.allows(prefix) {
        return Hints::default();
    }

    let suffixes: Vec<String> = catalog
        .iter()
        .filter_map(|token| token.strip_prefix(prefix))
        .map(str::to_string)
        .collect();
    let color = (suffixes.len() == 1).then_some(policy.unique_color);

    Hints { suffixes, color }
}

/// reedline hinter that renders [`Hints`] inline after the cursor.
///
/// The first suffix is what Right arrow accepts. Other candidates are listed
/// after it as full tokens, up to `max_rows` entries in total.
pub struct CatalogHinter {
    session: Arc<Session>,
    style: Style,
    max_rows: usize,
    current_hint: String,
}

impl CatalogHinter {
    pub fn new(session: Arc<Session>) -> Self {
        CatalogHinter {
            session,
            style: Style::new().fg(Color::DarkGray),
            max_rows: 8,
            current_hint: String::new(),
        }
    }

    /// Set the style for hints that are not a unique match.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the maximum number of candidates shown.
    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    fn render(&self, prefix: &str, hints: &Hints, use_ansi_coloring: bool) -> String {
        let first_style = hints.color.map_or(self.style, |c| Style::new().fg(c));

        let others: Vec<String> = hints
            .suffixes
            .iter()
            .skip(1)
            .take(self.max_rows.saturating_sub(1))
            .map(|suffix| format!("{}{}", prefix, suffix))
            .collect();
        let mut out = if use_ansi_coloring {
            first_style.paint(&self.current_hint).to_string()
        } else {
            self.current_hint.clone()
        };
        if !others.is_empty() {
            let rest = format!("  {}", others.join("  "));
            if use_ansi_coloring {
                out.push_str(&self.style.paint(rest).to_string());
            } else {
                out.push_str(&rest);
            }
        }
        out
    }
}

impl Hinter for CatalogHinter {
    fn handle(
        &mut self,
        line: &str,
        pos: usize,
        _history: &dyn History,
        use_ansi_coloring: bool,
        _cwd: &str,
    ) -> String {
        self.current_hint.clear();
        if pos != line.len() || self.max_rows == 0 {
            return String::new();
        }

        let (start, hints) = self.session.hint(line, pos);
        if hints.is_empty() {
            return String::new();
        }
        self.current_hint = hints.suffixes[0].clone();

        self.render(&line[start..], &hints, use_ansi_coloring)
    }

    fn complete_hint(&self) -> String {
        self.current_hint.clone()
    }

    fn next_hint_token(&self) -> String {
        first_word(&self.current_hint, self.session.word_breaks())
    }
}

/// Leading break characters plus the word that follows them.
fn first_word(s: &str, breaks: &[char]) -> String {
    let body = s.trim_start_matches(|c| breaks.contains(&c));
    let lead = s.len() - body.len();
    let end = body.find(|c| breaks.contains(&c)).unwrap_or(body.len());
    s[..lead + end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use reedline::FileBackedHistory;

    fn catalog() -> Vec<String> {
        [".help", ".history", ".quit", ".exit", ".info", "deposit"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_short_prefix_without_sentinel_is_empty() {
        let policy = HintPolicy::default();
        assert!(hint(&catalog(), "", 0, &policy).is_empty());
        assert!(hint(&catalog(), "d", 0, &policy).is_empty());
    }

    #[test]
    fn test_sentinel_opens_gate() {
        let hints = hint(&catalog(), ".", 0, &HintPolicy::default());
        assert_eq!(hints.suffixes, vec!["help", "history", "quit", "exit", "info"]);
        assert_eq!(hints.color, None);
    }

    #[test]
    fn test_long_prefix_yields_suffixes() {
        let hints = hint(&catalog(), "de", 0, &HintPolicy::default());
        assert_eq!(hints.suffixes, vec!["posit"]);
    }

    #[test]
    fn test_unique_match_is_colored() {
        let policy = HintPolicy::default();
        let hints = hint(&catalog(), ".q", 0, &policy);
        assert_eq!(hints.suffixes, vec!["uit"]);
        assert_eq!(hints.color, Some(Color::Green));

        let hints = hint(&catalog(), ".h", 0, &policy);
        assert_eq!(hints.suffixes, vec!["elp", "istory"]);
        assert_eq!(hints.color, None);

        let hints = hint(&catalog(), "zz", 0, &policy);
        assert!(hints.is_empty());
        assert_eq!(hints.color, None);
    }

    #[test]
    fn test_gate_counts_characters() {
        let policy = HintPolicy::default();
        assert!(!policy.allows("é"));
        assert!(policy.allows("éé"));
        assert!(policy.allows("."));
        assert!(!policy.allows(""));
    }

    #[test]
    fn test_empty_sentinel_disables_shortcut() {
        let policy = HintPolicy {
            sentinel: String::new(),
            ..HintPolicy::default()
        };
        assert!(!policy.allows("."));
        assert!(policy.allows(".h"));
    }

    #[test]
    fn test_prefix_taken_from_word_start() {
        let hints = hint(&catalog(), ".run dep", 5, &HintPolicy::default());
        assert_eq!(hints.suffixes, vec!["osit"]);
    }

    #[test]
    fn test_first_word() {
        let breaks: Vec<char> = " -".chars().collect();
        assert_eq!(first_word("abc def", &breaks), "abc");
        assert_eq!(first_word(" abc def", &breaks), " abc");
        assert_eq!(first_word("-x-y", &breaks), "-x");
        assert_eq!(first_word("", &breaks), "");
    }

    fn hinter() -> CatalogHinter {
        let session = Arc::new(Session::new(catalog()));
        CatalogHinter::new(session).with_max_rows(3)
    }

    #[test]
    fn test_hinter_renders_plain_candidates() {
        let history = FileBackedHistory::new(10).unwrap();
        let mut hinter = hinter();

        let out = hinter.handle(".", 1, &history, false, "");
        assert_eq!(out, "help  .history  .quit");
        assert_eq!(hinter.complete_hint(), "help");
        assert_eq!(hinter.next_hint_token(), "help");
    }

    #[test]
    fn test_hinter_unique_match() {
        let history = FileBackedHistory::new(10).unwrap();
        let mut hinter = hinter();

        let out = hinter.handle(".ex", 3, &history, false, "");
        assert_eq!(out, "it");
        assert_eq!(hinter.complete_hint(), "it");

        let colored = hinter.handle(".ex", 3, &history, true, "");
        assert_eq!(colored, format!("{}", Style::new().fg(Color::Green).paint("it")));
    }

    #[test]
    fn test_hinter_silent_when_cursor_not_at_end() {
        let history = FileBackedHistory::new(10).unwrap();
        let mut hinter = hinter();

        assert_eq!(hinter.handle(".ex", 1, &history, false, ""), "");
        assert_eq!(hinter.complete_hint(), "");
    }

    #[test]
    fn test_hinter_clears_previous_hint() {
        let history = FileBackedHistory::new(10).unwrap();
        let mut hinter = hinter();

        hinter.handle(".ex", 3, &history, false, "");
        assert_eq!(hinter.handle("x", 1, &history, false, ""), "");
        assert_eq!(hinter.complete_hint(), "");
    }
}
