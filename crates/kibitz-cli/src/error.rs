//! Session protocol errors.

use kibitz_core::MoveError;
use kibitz_engine::{ConfigError, SearchError};

/// Errors that can occur while handling a session command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The command word was not recognized.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The unrecognized word.
        command: String,
    },

    /// A command that needs an argument was given none.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command missing its argument.
        command: &'static str,
    },

    /// A move could not be read as coordinate notation.
    #[error("cannot parse move: {text} (expected e.g. e2e4)")]
    MalformedMove {
        /// The text that failed to parse.
        text: String,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid number: {value}")]
    InvalidNumber {
        /// The text that failed to parse.
        value: String,
    },

    /// The rules engine rejected a move.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// The search could not run.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// A configuration change was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use kibitz_core::{MoveError, Position};
    use kibitz_engine::SearchError;

    use super::CliError;

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err: CliError = MoveError::InvalidMove {
            from: Position::new(6, 4),
            to: Position::new(3, 4),
        }
        .into();
        assert_eq!(err.to_string(), "invalid move from e2 to e5");

        let err: CliError = SearchError::GameOver.into();
        assert_eq!(err.to_string(), "game is over");
    }

    #[test]
    fn protocol_errors_display() {
        let err = CliError::MissingArgument { command: "depth" };
        assert_eq!(err.to_string(), "missing argument for depth");
        let err = CliError::MalformedMove { text: "e2".to_string() };
        assert_eq!(err.to_string(), "cannot parse move: e2 (expected e.g. e2e4)");
    }
}
