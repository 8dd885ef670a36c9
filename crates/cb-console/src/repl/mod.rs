//! REPL (Read-Eval-Print Loop) implementation.

mod banner;
mod commands;

use crate::config::{Config, default_history_path};
use crate::editor::{ConsolePrompt, LineEditor, ReadOutcome, ReedlineEditor};
use crate::history::HistoryStore;
use crate::session::Session;
use anyhow::{Context, Result};
use cb_commands::{CommandRegistry, StatusCode};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use banner::format_banner;
use commands::register_app_commands;

/// Printed after a line fails to dispatch.
const ERROR_MESSAGE: &str = "Error in reading commands. Use '.help' command for more information.";

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// A command returned `Quit`.
    Quit,
    /// The editor reported end of input.
    EndOfInput,
}

/// States of the read-dispatch loop.
#[derive(Debug, PartialEq, Eq)]
enum LoopState {
    Prompting,
    Dispatching(String),
    Terminated(ExitReason),
}

/// Read, dispatch and record lines until `Quit` or end of input.
///
/// Every dispatched line is appended to `history`, including failed ones and
/// the line that quits. Lines longer than `max_line_length` characters are
/// truncated first.
pub fn run_loop(
    editor: &mut dyn LineEditor,
    prompt: &ConsolePrompt,
    registry: &CommandRegistry,
    history: &RefCell<HistoryStore>,
    max_line_length: usize,
) -> ExitReason {
    let mut state = LoopState::Prompting;

    loop {
        state = match state {
            LoopState::Prompting => match editor.read_line(prompt) {
                Ok(ReadOutcome::Line(line)) => {
                    LoopState::Dispatching(truncate_line(line, max_line_length))
                }
                Ok(ReadOutcome::EndOfInput) => LoopState::Terminated(ExitReason::EndOfInput),
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    LoopState::Terminated(ExitReason::EndOfInput)
                }
            },
            LoopState::Dispatching(line) => {
                let status = registry.dispatch(&line);
                log::debug!("Dispatched {:?}: {}", line, status);
                history.borrow_mut().append(&line);

                match status {
                    StatusCode::Quit => LoopState::Terminated(ExitReason::Quit),
                    status => {
                        if status.is_error() {
                            eprintln!("{}", ERROR_MESSAGE);
                        }
                        LoopState::Prompting
                    }
                }
            }
            LoopState::Terminated(reason) => return reason,
        };
    }
}

/// Cut `line` down to `max` characters.
///
/// Only the dispatched and recorded text is cut. The line editor's recall
/// history still holds what was typed until the next start, when it is seeded
/// from the store.
fn truncate_line(line: String, max: usize) -> String {
    match line.char_indices().nth(max) {
        Some((cut, _)) => {
            log::warn!("Input longer than {} characters was truncated", max);
            eprintln!("Warning: input truncated to {} characters", max);
            line[..cut].to_string()
        }
        None => line,
    }
}

/// The main REPL structure.
pub struct Repl {
    config: Config,
    registry: CommandRegistry,
    session: Arc<Session>,
    history: Rc<RefCell<HistoryStore>>,
    history_path: Option<PathBuf>,
    prompt: ConsolePrompt,
}

impl Repl {
    /// Create a new REPL with the given configuration.
    ///
    /// Registers the console commands, loads history and builds the session
    /// shared by the editor callbacks.
    pub fn new(config: Config) -> Result<Self> {
        let history = Rc::new(RefCell::new(HistoryStore::new(config.history.max_size)));

        let mut registry = CommandRegistry::new();
        register_app_commands(&mut registry, Rc::clone(&history))
            .context("Failed to register console commands")?;

        let history_path = if config.history.disabled {
            None
        } else {
            config.history.file.clone().or_else(default_history_path)
        };
        if let Some(path) = &history_path
            && let Err(e) = history.borrow_mut().load(path)
        {
            log::warn!("{}", e);
        }

        let session = Arc::new(Session::from_config(&registry, &config));
        let prompt = ConsolePrompt::new(config.prompt.text.clone(), config.prompt.symbol.clone())
            .with_color(config.prompt.color);

        Ok(Repl {
            config,
            registry,
            session,
            history,
            history_path,
            prompt,
        })
    }

    /// Run the REPL main loop.
    pub fn run(&mut self) -> Result<()> {
        if self.config.startup.show_banner {
            print!("{}", format_banner());
        }

        let mut editor = ReedlineEditor::new(
            Arc::clone(&self.session),
            &self.config,
            &self.history.borrow(),
        )?;
        log::info!("Starting cb-cli");

        let reason = run_loop(
            &mut editor,
            &self.prompt,
            &self.registry,
            &self.history,
            self.config.editor.max_line_length,
        );
        if reason == ExitReason::EndOfInput {
            println!();
        }

        self.shutdown();
        Ok(())
    }

    /// Save history and say goodbye. A failed save is reported, never fatal.
    fn shutdown(&self) {
        if let Some(path) = &self.history_path
            && let Err(e) = self.history.borrow().save(path)
        {
            log::warn!("{}", e);
            eprintln!("Warning: {}", e);
        }
        println!("\nExiting cb-cli");
    }
}
