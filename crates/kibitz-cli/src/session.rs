//! One game session: the game, the engine that plays one color, and the
//! statistics of its last search.

use std::io::Write;
use std::time::Duration;

use tracing::{debug, info};

use kibitz_core::{Color, GameState, Move, Winner};
use kibitz_engine::{SearchOutcome, Searcher, describe_evaluation, evaluate, game_phase, material_balance};

use crate::command::Command;
use crate::error::CliError;

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// The color the engine plays.
    pub engine_color: Color,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            engine_color: Color::Black,
        }
    }
}

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A running game against the engine.
pub struct Session {
    game: GameState,
    searcher: Searcher,
    config: SessionConfig,
    last_search: Option<SearchOutcome>,
}

impl Session {
    /// Start a fresh game with `config` and a default searcher.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_searcher(config, Searcher::new())
    }

    /// Start a fresh game with an explicitly configured searcher.
    pub fn with_searcher(config: SessionConfig, searcher: Searcher) -> Self {
        Self {
            game: GameState::new(),
            searcher,
            config,
            last_search: None,
        }
    }

    /// The current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The engine's searcher.
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Execute one command, writing its response lines to `out`.
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<Flow, CliError> {
        match command {
            Command::Empty => {}
            Command::New => {
                self.game = GameState::new();
                self.last_search = None;
                info!("new game");
                writeln!(out, "new game, {} to move", self.game.side_to_move())?;
            }
            Command::Move(mv) => self.human_move(mv, out)?,
            Command::Go => self.engine_move(out)?,
            Command::Moves => self.list_moves(out)?,
            Command::History => self.print_history(out)?,
            Command::Eval => self.print_eval(out)?,
            Command::Stats => self.print_stats(out)?,
            Command::Board => {
                writeln!(out, "{}", self.game.board().pretty())?;
                writeln!(out, "turn: {}", self.game.side_to_move())?;
            }
            Command::Depth(depth) => {
                self.searcher.set_depth(depth)?;
                writeln!(out, "depth {} ({})", self.searcher.depth(), self.searcher.difficulty_label())?;
            }
            Command::Difficulty(name) => {
                let difficulty = self.searcher.set_difficulty(&name)?;
                writeln!(out, "difficulty {difficulty} (depth {})", self.searcher.depth())?;
            }
            Command::Think(think_time) => {
                self.searcher.set_think_time(think_time)?;
                writeln!(out, "think time {think_time:?}")?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Play a move for the side to move, then let the engine answer if it
    /// is now the engine's turn.
    fn human_move(&mut self, mv: Move, out: &mut impl Write) -> Result<(), CliError> {
        let played = self.game.validate_and_apply(mv.from(), mv.to())?;
        writeln!(out, "move {played}")?;
        if self.report_game_over(out)? {
            return Ok(());
        }
        if self.game.side_to_move() == self.config.engine_color {
            self.engine_move(out)?;
        }
        Ok(())
    }

    /// Search and play a move for the side to move.
    fn engine_move(&mut self, out: &mut impl Write) -> Result<(), CliError> {
        let outcome = self.searcher.best_move(&self.game)?;
        let chosen = outcome.chosen_move();
        let played = self.game.apply(chosen);
        debug!(mv = %played, timed_out = outcome.is_timed_out(), "engine move applied");
        self.last_search = Some(outcome);

        if outcome.is_timed_out() {
            writeln!(out, "engine {played} (think time exceeded, first legal move)")?;
        } else {
            writeln!(out, "engine {played}")?;
        }
        self.report_game_over(out)?;
        Ok(())
    }

    /// Print the result if the game has ended. Returns `true` when it has.
    fn report_game_over(&self, out: &mut impl Write) -> Result<bool, CliError> {
        if !self.game.is_game_over() {
            return Ok(false);
        }
        match self.game.winner() {
            Winner::Draw => writeln!(out, "game over: draw by stalemate")?,
            winner => writeln!(out, "game over: {winner} wins by checkmate")?,
        }
        Ok(true)
    }

    fn list_moves(&self, out: &mut impl Write) -> Result<(), CliError> {
        let moves = self.game.legal_moves(self.game.side_to_move());
        let listed: Vec<String> = moves.iter().map(Move::to_string).collect();
        writeln!(out, "moves ({}): {}", moves.len(), listed.join(" "))?;
        Ok(())
    }

    fn print_history(&self, out: &mut impl Write) -> Result<(), CliError> {
        if self.game.history().is_empty() {
            writeln!(out, "no moves played")?;
            return Ok(());
        }
        for (number, pair) in self.game.history().chunks(2).enumerate() {
            let line: Vec<String> = pair.iter().map(Move::to_string).collect();
            writeln!(out, "{}. {}", number + 1, line.join(" "))?;
        }
        Ok(())
    }

    fn print_eval(&self, out: &mut impl Write) -> Result<(), CliError> {
        let perspective = self.config.engine_color;
        let score = evaluate(&self.game, perspective);
        let material = material_balance(&self.game);
        writeln!(out, "evaluation: {score} ({perspective}'s view)")?;
        writeln!(out, "description: {}", describe_evaluation(score, perspective))?;
        writeln!(
            out,
            "material: white {} black {} difference {}",
            material.white,
            material.black,
            material.difference()
        )?;
        writeln!(out, "engine material: {}", material.of(perspective))?;
        writeln!(out, "phase: {}", game_phase(&self.game))?;
        writeln!(out, "turn: {}", self.game.side_to_move())?;
        if self.game.is_in_check(self.game.side_to_move()) {
            writeln!(out, "check: {} is in check", self.game.side_to_move())?;
        }
        Ok(())
    }

    fn print_stats(&self, out: &mut impl Write) -> Result<(), CliError> {
        let config = self.searcher.config();
        writeln!(out, "engine: minimax with alpha-beta pruning")?;
        writeln!(out, "depth: {} ({})", config.depth, config.difficulty_label())?;
        writeln!(out, "think time: {:?}", config.think_time)?;
        match self.last_search {
            Some(SearchOutcome::Found(result)) => {
                writeln!(out, "nodes searched: {}", result.nodes)?;
                writeln!(out, "last think time: {}", format_duration(result.elapsed))?;
            }
            Some(SearchOutcome::TimedOut { elapsed, .. }) => {
                writeln!(out, "nodes searched: unknown (timed out)")?;
                writeln!(out, "last think time: {}", format_duration(elapsed))?;
            }
            None => writeln!(out, "no search yet")?,
        }
        Ok(())
    }
}

fn format_duration(elapsed: Duration) -> String {
    format!("{}ms", elapsed.as_millis())
}
