//! Status codes returned by command handlers.

use std::fmt;

/// Outcome of dispatching a line.
///
/// `Quit` is a signal rather than a failure: the console records the line
/// and then stops. `Error` and `UnknownCommand` are reported to the user but
/// never end the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// The command ran successfully (or the line was empty).
    Ok,
    /// A registered handler reported a failure.
    Error,
    /// The first token did not name a registered command.
    UnknownCommand,
    /// The user asked to leave the console.
    Quit,
}

impl StatusCode {
    /// Numeric form of the status.
    pub fn code(self) -> i32 {
        match self {
            StatusCode::Quit => -1,
            StatusCode::Ok => 0,
            StatusCode::Error => 1,
            StatusCode::UnknownCommand => 2,
        }
    }

    /// Returns true for statuses that should be reported as an error.
    pub fn is_error(self) -> bool {
        matches!(self, StatusCode::Error | StatusCode::UnknownCommand)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::Ok => write!(f, "ok"),
            StatusCode::Error => write!(f, "error"),
            StatusCode::UnknownCommand => write!(f, "unknown command"),
            StatusCode::Quit => write!(f, "quit"),
        }
    }
}
