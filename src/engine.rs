//! Game engine state management.
//!
//! Owns the board, the terminal/non-terminal game state, and the turn
//! counter, and drives the full move pipeline: coordinate translation,
//! the validator chain, the speculative ring census on a shadow board,
//! commit, border cleanup, the definitive census, and the turn increment.
//! A rejected move leaves the engine untouched.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Coord};
use crate::error::MoveError;
use crate::rules::{apply_move, ring_census, validate};

/// Whether the game is still running, and who won if not.
///
/// Transitions only move forward; a terminal state is never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    WhiteWon,
    BlackWon,
}

impl GameState {
    /// Returns the winning color for a terminal state.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::InProgress => None,
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
        }
    }

    const fn won_by(color: Color) -> GameState {
        match color {
            Color::Black => GameState::BlackWon,
            Color::White => GameState::WhiteWon,
        }
    }
}

/// A single two-player Gess game.
///
/// One engine instance per game; callers serialize access. All speculation
/// happens on board clones, so from the caller's perspective `apply_move`
/// is atomic: either every effect happens or none do.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    state: GameState,
    turn_count: u32,
}

impl GameEngine {
    /// Creates a game in the standard starting position, Black to move.
    pub fn new() -> GameEngine {
        GameEngine::from_position(Board::initial(), 0)
    }

    /// Creates a game from an arbitrary position and turn count.
    pub fn from_position(board: Board, turn_count: u32) -> GameEngine {
        GameEngine {
            board,
            state: GameState::InProgress,
            turn_count,
        }
    }

    /// Returns the current game state.
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Returns the number of committed moves.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Returns the color whose turn it is.
    pub fn active_color(&self) -> Color {
        Color::from_turn(self.turn_count)
    }

    /// Returns read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Validates and commits a move given two coordinate tokens.
    ///
    /// On success the turn counter advances, even when the move wins the
    /// game. On any failure the board, state, and counter are unchanged.
    pub fn apply_move(&mut self, source: &str, dest: &str) -> Result<(), MoveError> {
        if self.state != GameState::InProgress {
            return Err(MoveError::GameAlreadyOver);
        }
        let mover = self.active_color();
        let source = Coord::parse(source)?;
        let dest = Coord::parse(dest)?;
        let mv = validate(&self.board, mover, source, dest)?;

        // Speculative census on a shadow board: a player may take the
        // opponent's last ring but never their own.
        let mut shadow = self.board.clone();
        apply_move(&mut shadow, &mv);
        if ring_census(&shadow).of(mover) == 0 {
            return Err(MoveError::SelfEliminationForbidden);
        }

        apply_move(&mut self.board, &mv);
        let tally = ring_census(&self.board);
        if tally.black == 0 {
            self.state = GameState::WhiteWon;
        } else if tally.white == 0 {
            self.state = GameState::BlackWon;
        }
        self.turn_count += 1;
        Ok(())
    }

    /// Resigns the game on behalf of the player to move.
    ///
    /// The board and turn counter are untouched; only the state changes.
    pub fn resign(&mut self) -> Result<(), MoveError> {
        if self.state != GameState::InProgress {
            return Err(MoveError::GameAlreadyOver);
        }
        self.state = GameState::won_by(self.active_color().opponent());
        Ok(())
    }
}

impl Default for GameEngine {
    fn default() -> GameEngine {
        GameEngine::new()
    }
}
