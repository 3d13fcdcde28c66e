//! Game state for a single game

use chess_core::{parse_move, ChessError, Color, Move, Position, SearchResult};
use classical_engine::find_best_move;
use std::fmt;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Checkmate,
    Stalemate,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Checkmate => write!(f, "checkmate"),
            EndReason::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// None for a draw
    pub winner: Option<Color>,
    pub reason: EndReason,
}

/// Represents the current state of a chess game
#[derive(Debug, Clone, Default)]
pub struct Game {
    /// Current position
    pub position: Position,
    /// Moves played so far
    pub moves: Vec<Move>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary position.
    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            moves: Vec::new(),
        }
    }

    pub fn turn(&self) -> Color {
        self.position.side_to_move()
    }

    /// Plays `mv` without checking it; validate with
    /// [`Game::parse_and_validate_move`] first.
    pub fn apply_move(&mut self, mv: Move) {
        self.position = self.position.apply_move(mv, true);
        self.moves.push(mv);
    }

    /// `None` while the game is still going.
    pub fn outcome(&self) -> Option<GameOutcome> {
        let side = self.turn();
        if self.position.is_checkmate(side) {
            Some(GameOutcome {
                winner: Some(side.opposite()),
                reason: EndReason::Checkmate,
            })
        } else if self.position.is_stalemate(side) {
            Some(GameOutcome {
                winner: None,
                reason: EndReason::Stalemate,
            })
        } else {
            None
        }
    }

    pub fn parse_and_validate_move(&self, text: &str) -> Result<Move, ChessError> {
        parse_move(&self.position, text)
    }

    /// Ask the engine for a move for the side to move.
    pub fn engine_move(&self, depth: u8) -> SearchResult {
        find_best_move(&self.position, depth)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
