//! Command registry and dispatcher for the cb-cli console.
//!
//! A [`CommandRegistry`] maps command names (such as `.help`) to handlers.
//! Dispatching a line splits it on whitespace, looks up the first token and
//! calls the matching handler with the remaining tokens.
//!
//! ```
//! use cb_commands::{CommandRegistry, StatusCode};
//!
//! let mut registry = CommandRegistry::new();
//! registry
//!     .register(".ping", "reply with pong", |_args| {
//!         println!("pong");
//!         StatusCode::Ok
//!     })
//!     .unwrap();
//!
//! assert_eq!(registry.dispatch(".ping"), StatusCode::Ok);
//! assert_eq!(registry.dispatch(".quit"), StatusCode::Quit);
//! assert_eq!(registry.dispatch("nope"), StatusCode::UnknownCommand);
//! ```

mod error;
mod registry;
mod status;

pub use error::{CommandResult, RegistryError};
pub use registry::{CommandFn, CommandRegistry, MAX_SCRIPT_DEPTH, tokenize};
pub use status::StatusCode;
