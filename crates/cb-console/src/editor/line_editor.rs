//! Line input abstraction.
//!
//! The REPL loop reads input through [`LineEditor`], so it can be driven by
//! reedline in a terminal or by a scripted editor in tests.

use super::hinter::CatalogHinter;
use super::keybindings::{COMPLETION_MENU, edit_mode};
use super::prompt::ConsolePrompt;
use crate::completion::CatalogCompleter;
use crate::config::Config;
use crate::highlighter::ConsoleHighlighter;
use crate::history::HistoryStore;
use crate::session::Session;
use anyhow::{Context, Result};
use nu_ansi_term::Style;
use reedline::{
    FileBackedHistory, History, HistoryItem, IdeMenu, MenuBuilder, Reedline, ReedlineMenu, Signal,
};
use std::sync::Arc;

/// Result of reading one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The user submitted a line.
    Line(String),
    /// Input ended (Ctrl-D, Ctrl-C or a closed terminal).
    EndOfInput,
}

/// Source of input lines for the REPL.
pub trait LineEditor {
    fn read_line(&mut self, prompt: &ConsolePrompt) -> Result<ReadOutcome>;
}

/// Terminal line editor backed by reedline.
pub struct ReedlineEditor {
    editor: Reedline,
}

impl ReedlineEditor {
    /// Build the editor with the session callbacks installed.
    ///
    /// Reedline keeps its own in-memory history for Up/Down recall, seeded
    /// from `history`.
    pub fn new(session: Arc<Session>, config: &Config, history: &HistoryStore) -> Result<Self> {
        let mut recall = FileBackedHistory::new(history.capacity().max(1))
            .context("Failed to create line editor history")?;
        for entry in history.entries() {
            recall
                .save(HistoryItem::from_command_line(entry))
                .context("Failed to seed line editor history")?;
        }
        log::debug!("Seeded line editor with {} history entries", history.len());

        let mut editor = Reedline::create()
            .with_history(Box::new(recall))
            .with_edit_mode(edit_mode())
            .with_highlighter(Box::new(ConsoleHighlighter::new(Arc::clone(&session))));

        if config.completion.enabled {
            editor = editor.with_completer(Box::new(CatalogCompleter::new(Arc::clone(&session))));

            let ide_menu = IdeMenu::default()
                .with_name(COMPLETION_MENU)
                .with_max_completion_height(config.completion.max_height);
            editor = editor.with_menu(ReedlineMenu::EngineCompleter(Box::new(ide_menu)));
        }

        if config.hints.enabled {
            let hinter = CatalogHinter::new(Arc::clone(&session))
                .with_style(Style::new().fg(config.hints.color))
                .with_max_rows(config.editor.max_hint_rows);
            editor = editor.with_hinter(Box::new(hinter));
        }

        Ok(ReedlineEditor { editor })
    }
}

impl LineEditor for ReedlineEditor {
    fn read_line(&mut self, prompt: &ConsolePrompt) -> Result<ReadOutcome> {
        match self.editor.read_line(prompt)? {
            Signal::Success(line) => Ok(ReadOutcome::Line(line)),
            Signal::CtrlC | Signal::CtrlD => Ok(ReadOutcome::EndOfInput),
        }
    }
}
