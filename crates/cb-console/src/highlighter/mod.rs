//! Syntax highlighting for the console input line.
//!
//! Highlighting is rule based: every rule scans the whole buffer and paints
//! the characters its matches cover. Rules are applied in order, so a later
//! rule overrides the color an earlier one assigned to the same character.

mod rules;

pub use rules::{HighlightRule, command_rules, config_rules, default_rules};

use crate::session::Session;
use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};
use std::sync::Arc;

/// Compute the color of every character of `buffer`.
///
/// The result has one entry per `char`; `None` means no rule matched.
pub fn highlight(buffer: &str, rules: &[HighlightRule]) -> Vec<Option<Color>> {
    let starts: Vec<usize> = buffer.char_indices().map(|(i, _)| i).collect();
    let mut colors = vec![None; starts.len()];

    for rule in rules {
        for m in rule.regex().find_iter(buffer) {
            if m.is_empty() {
                continue;
            }
            let first = starts.partition_point(|&b| b < m.start());
            let last = starts.partition_point(|&b| b < m.end());
            for slot in &mut colors[first..last] {
                *slot = Some(rule.color());
            }
        }
    }

    colors
}

/// Group per-character colors into styled runs.
pub fn to_styled_text(buffer: &str, colors: &[Option<Color>]) -> StyledText {
    let mut styled = StyledText::new();
    let mut run = String::new();
    let mut run_color: Option<Color> = None;

    for (ch, &color) in buffer.chars().zip(colors.iter().chain(std::iter::repeat(&None))) {
        if color != run_color && !run.is_empty() {
            styled.push((color_to_style(run_color), std::mem::take(&mut run)));
        }
        run_color = color;
        run.push(ch);
    }
    if !run.is_empty() {
        styled.push((color_to_style(run_color), run));
    }

    styled
}

/// Convert a Color to a Style with that color as foreground.
/// `Color::Default` and unset results in no foreground color (plain text).
fn color_to_style(color: Option<Color>) -> Style {
    match color {
        None | Some(Color::Default) => Style::new(),
        Some(c) => Style::new().fg(c),
    }
}

/// reedline highlighter backed by the session's rule table.
pub struct ConsoleHighlighter {
    session: Arc<Session>,
}

impl ConsoleHighlighter {
    pub fn new(session: Arc<Session>) -> Self {
        ConsoleHighlighter { session }
    }
}

impl Highlighter for ConsoleHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let colors = self.session.highlight(line);
        to_styled_text(line, &colors)
    }
}
