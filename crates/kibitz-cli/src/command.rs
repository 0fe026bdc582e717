//! Session command parsing.

use std::time::Duration;

use kibitz_core::Move;

use crate::error::CliError;

/// A parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `new` -- start a fresh game.
    New,
    /// `move e2e4` or a bare `e2e4` -- play a move for the side to move.
    Move(Move),
    /// `go` -- let the engine move for the side to move.
    Go,
    /// `moves` -- list legal moves for the side to move.
    Moves,
    /// `history` -- list the moves played so far.
    History,
    /// `eval` -- evaluate the current position.
    Eval,
    /// `stats` -- show engine configuration and last search statistics.
    Stats,
    /// `board` -- print the board.
    Board,
    /// `depth <n>` -- set the search depth.
    Depth(u32),
    /// `difficulty <name>` -- set the search depth by preset name.
    Difficulty(String),
    /// `think <seconds>` -- set the engine's think time.
    Think(Duration),
    /// `quit` -- leave the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&word) = tokens.first() else {
        return Ok(Command::Empty);
    };
    let arg = tokens.get(1).copied();

    match word {
        "new" => Ok(Command::New),
        "move" => parse_move(required(arg, "move")?).map(Command::Move),
        "go" => Ok(Command::Go),
        "moves" => Ok(Command::Moves),
        "history" => Ok(Command::History),
        "eval" => Ok(Command::Eval),
        "stats" => Ok(Command::Stats),
        "board" => Ok(Command::Board),
        "depth" => {
            let value = required(arg, "depth")?;
            value
                .parse()
                .map(Command::Depth)
                .map_err(|_| CliError::InvalidNumber { value: value.to_string() })
        }
        "difficulty" => Ok(Command::Difficulty(required(arg, "difficulty")?.to_string())),
        "think" => parse_seconds(required(arg, "think")?).map(Command::Think),
        "quit" | "exit" => Ok(Command::Quit),
        other if looks_like_move(other) => parse_move(other).map(Command::Move),
        other => Err(CliError::UnknownCommand {
            command: other.to_string(),
        }),
    }
}

fn required<'a>(arg: Option<&'a str>, command: &'static str) -> Result<&'a str, CliError> {
    arg.ok_or(CliError::MissingArgument { command })
}

/// A bare four-character token starting with a file letter is taken as a move.
fn looks_like_move(token: &str) -> bool {
    token.len() == 4 && token.as_bytes()[0].is_ascii_alphabetic() && token.as_bytes()[1].is_ascii_digit()
}

fn parse_move(text: &str) -> Result<Move, CliError> {
    Move::from_coordinates(text).ok_or_else(|| CliError::MalformedMove {
        text: text.to_string(),
    })
}

/// Parse a positive number of seconds, fractions allowed.
fn parse_seconds(value: &str) -> Result<Duration, CliError> {
    let invalid = || CliError::InvalidNumber {
        value: value.to_string(),
    };
    let secs: f64 = value.parse().map_err(|_| invalid())?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(invalid());
    }
    Duration::try_from_secs_f64(secs).map_err(|_| invalid())
}
