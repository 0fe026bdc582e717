//! Text session front end for kibitz: play against the engine one command
//! per line.

pub mod command;
pub mod console;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use console::Console;
pub use error::CliError;
pub use session::{Flow, Session, SessionConfig};
