//! Editor and input related functionality.
//!
//! This module provides the reedline adapters: prompt, key bindings,
//! hinting and the [`LineEditor`] abstraction the REPL reads from.

pub mod hinter;
pub mod keybindings;
pub mod line_editor;
pub mod prompt;

pub use line_editor::{LineEditor, ReadOutcome, ReedlineEditor};
pub use prompt::ConsolePrompt;
