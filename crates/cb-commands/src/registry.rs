//! Command registration and dispatch.

use crate::error::{CommandResult, RegistryError};
use crate::status::StatusCode;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Signature of a registered command handler.
///
/// The handler receives the tokens following the command name.
pub type CommandFn = dyn Fn(&[String]) -> StatusCode;

/// Maximum nesting of `.run` scripts before dispatch gives up.
pub const MAX_SCRIPT_DEPTH: usize = 16;

/// How a registered command is executed.
enum Handler {
    /// `.help`: list registered commands.
    Help,
    /// `.quit` / `.exit`.
    Quit,
    /// `.run <file>`: dispatch every line of a script.
    Run,
    /// Application-supplied handler.
    Custom(Box<CommandFn>),
}

struct CommandEntry {
    name: String,
    help: String,
    handler: Handler,
}

/// Registry of named commands.
///
/// Entries keep their registration order, which is also the order used by
/// [`names`](Self::names) and the `.help` listing.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create a registry pre-populated with the built-in commands
    /// (`.help`, `.quit`, `.exit`, `.run`).
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.push_entry(".help", "Show the available commands", Handler::Help);
        registry.push_entry(".quit", "Exit the console", Handler::Quit);
        registry.push_entry(".exit", "Exit the console", Handler::Quit);
        registry.push_entry(".run", "Execute commands from a script file", Handler::Run);
        registry
    }

    /// Create a registry without any commands.
    pub fn empty() -> Self {
        CommandRegistry {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a command handler.
    ///
    /// Names must be non-empty, contain no whitespace and be unique.
    pub fn register<F>(&mut self, name: &str, help: &str, handler: F) -> CommandResult<()>
    where
        F: Fn(&[String]) -> StatusCode + 'static,
    {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.index.contains_key(name) {
            return Err(RegistryError::DuplicateCommand(name.to_string()));
        }
        self.push_entry(name, help, Handler::Custom(Box::new(handler)));
        log::debug!("Registered command {}", name);
        Ok(())
    }

    fn push_entry(&mut self, name: &str, help: &str, handler: Handler) {
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(CommandEntry {
            name: name.to_string(),
            help: help.to_string(),
            handler,
        });
    }

    /// Names of all registered commands, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Help text of a registered command.
    pub fn help(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].help.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the `.help` listing.
    pub fn help_text(&self) -> String {
        let width = self.entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
        let mut text = String::from("Available commands:\n");
        for entry in &self.entries {
            text.push_str(&format!(
                "  {:<width$}  {}\n",
                entry.name,
                entry.help,
                width = width
            ));
        }
        text
    }

    /// Tokenize a line and run the named command.
    ///
    /// An empty or whitespace-only line is a no-op returning `Ok`.
    pub fn dispatch(&self, line: &str) -> StatusCode {
        self.dispatch_at_depth(line, 0)
    }

    /// Run a command by name with pre-split arguments.
    pub fn execute(&self, name: &str, args: &[String]) -> StatusCode {
        self.execute_at_depth(name, args, 0)
    }

    /// Dispatch every line of a script file.
    ///
    /// Stops at the first line whose status is not `Ok` and returns it.
    pub fn run_script(&self, path: &Path) -> StatusCode {
        self.run_script_at_depth(path, 1)
    }

    fn dispatch_at_depth(&self, line: &str, depth: usize) -> StatusCode {
        let tokens = tokenize(line);
        let Some((name, args)) = tokens.split_first() else {
            return StatusCode::Ok;
        };
        self.execute_at_depth(name, args, depth)
    }

    fn execute_at_depth(&self, name: &str, args: &[String], depth: usize) -> StatusCode {
        let Some(&i) = self.index.get(name) else {
            log::debug!("Unknown command: {}", name);
            eprintln!("Command '{}' not found.", name);
            return StatusCode::UnknownCommand;
        };

        match &self.entries[i].handler {
            Handler::Help => {
                print!("{}", self.help_text());
                StatusCode::Ok
            }
            Handler::Quit => StatusCode::Quit,
            Handler::Run => match args.first() {
                Some(path) => self.run_script_at_depth(Path::new(path), depth + 1),
                None => {
                    println!("Usage: {} script_filename", name);
                    StatusCode::Error
                }
            },
            Handler::Custom(handler) => handler(args),
        }
    }

    fn run_script_at_depth(&self, path: &Path, depth: usize) -> StatusCode {
        if depth > MAX_SCRIPT_DEPTH {
            eprintln!(
                "Script nesting exceeds {} levels: {}",
                MAX_SCRIPT_DEPTH,
                path.display()
            );
            return StatusCode::Error;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Could not read script {}: {}", path.display(), e);
                return StatusCode::Error;
            }
        };
        log::debug!("Running script {} (depth {})", path.display(), depth);

        for line in content.lines() {
            let status = self.dispatch_at_depth(line, depth);
            if status != StatusCode::Ok {
                return status;
            }
        }
        StatusCode::Ok
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

/// Split a line into whitespace-separated tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
