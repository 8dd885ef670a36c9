//! Commands provided by the console on top of the built-ins.

use crate::history::HistoryStore;
use cb_commands::{CommandRegistry, CommandResult, StatusCode};
use crossterm::{
    ExecutableCommand,
    cursor::MoveTo,
    terminal::{Clear, ClearType},
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// Text printed by `.info`.
pub const INFO_TEXT: &str = "Welcome to the example console. This command does not really
do anything aside from printing this statement. Thus it does
not need to look into the arguments that are passed to it.
";

/// Register `.info`, `.history` and `.clear`.
pub fn register_app_commands(
    registry: &mut CommandRegistry,
    history: Rc<RefCell<HistoryStore>>,
) -> CommandResult<()> {
    registry.register(
        ".info",
        "this command shows the manual for this application.",
        |_args| {
            print!("{}", INFO_TEXT);
            StatusCode::Ok
        },
    )?;

    registry.register(".history", "Show the command history", move |_args| {
        let history = history.borrow();
        if history.is_empty() {
            println!("No history yet.");
        } else {
            print!("{}", format_history(&history));
        }
        StatusCode::Ok
    })?;

    registry.register(".clear", "Clear the screen", |_args| match clear_screen() {
        Ok(()) => StatusCode::Ok,
        Err(e) => {
            eprintln!("Failed to clear the screen: {}", e);
            StatusCode::Error
        }
    })?;

    Ok(())
}

/// Numbered listing of the history, oldest first.
pub fn format_history(history: &HistoryStore) -> String {
    history
        .entries()
        .enumerate()
        .map(|(i, entry)| format!("{:>4}  {}\n", i + 1, entry))
        .collect()
}

fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(MoveTo(0, 0))?;
    Ok(())
}
