//! Line-oriented session loop over any reader and writer.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::command::parse_command;
use crate::error::CliError;
use crate::session::{Flow, Session};

/// Drives a [`Session`] from text input, one command per line.
///
/// Command errors are reported as `error: <message>` lines and the loop
/// keeps going; only I/O failures end it early.
pub struct Console {
    session: Session,
}

impl Console {
    /// Wrap a session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = parse_command(trimmed).and_then(|cmd| self.session.handle(cmd, &mut output));
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(CliError::Io { source }) => return Err(CliError::Io { source }),
                Err(e) => {
                    warn!(error = %e, cmd = %trimmed, "command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!(plies = self.session.game().move_count(), "session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use kibitz_engine::Searcher;

    use super::Console;
    use crate::session::{Session, SessionConfig};

    fn console() -> Console {
        let mut searcher = Searcher::new();
        searcher.set_depth(1).unwrap();
        Console::new(Session::with_searcher(SessionConfig::default(), searcher))
    }

    fn run(console: &mut Console, input: &str) -> String {
        let mut out = Vec::new();
        console.run(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn errors_are_reported_and_loop_continues() {
        let mut console = console();
        let output = run(&mut console, "bogus\nmove e2e5\n\ndepth 2\n");
        assert_eq!(
            output,
            "error: unknown command: bogus\nerror: invalid move from e2 to e5\ndepth 2 (Easy)\n"
        );
    }

    #[test]
    fn quit_stops_reading() {
        let mut console = console();
        let output = run(&mut console, "quit\ne2e4\n");
        assert_eq!(output, "");
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut console = console();
        let output = run(&mut console, "e2e4\n");
        assert!(output.starts_with("move e2e4\nengine "), "{output}");
    }
}
