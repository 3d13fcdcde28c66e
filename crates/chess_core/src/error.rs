//! Error type shared by the parsing entry points of the core crate.
//!
//! Everything here is a recoverable input problem: a front end is expected to
//! report it and ask again. Rule-level conditions such as a missing king or a
//! position without legal moves are not errors and never show up here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid FEN {fen:?}: expected board and side-to-move fields")]
    FenFieldCount { fen: String },

    #[error("invalid FEN {fen:?}: expected 8 rows, found {rows}")]
    FenRowCount { fen: String, rows: usize },

    #[error("invalid FEN row {row:?}: describes {cells} cells instead of 8")]
    FenRowWidth { row: String, cells: usize },

    #[error("invalid piece symbol {0:?} in FEN")]
    InvalidPiece(char),

    #[error("invalid move string {0:?}")]
    InvalidMoveText(String),

    #[error("invalid square {0:?}")]
    InvalidSquare(String),

    #[error("invalid promotion piece {0:?}")]
    InvalidPromotion(char),

    #[error("illegal move {0}")]
    IllegalMove(String),
}
