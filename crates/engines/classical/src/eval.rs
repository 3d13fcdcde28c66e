//! Material-based position evaluation

use chess_core::{Color, PieceKind, Position, Square};

/// Evaluates the position from White's perspective.
///
/// Returns a score in pawns:
/// - Positive = good for White
/// - Negative = good for Black
/// - 0 = equal material
///
/// Only material is counted; the side to move does not matter.
pub fn evaluate(pos: &Position) -> f64 {
    Square::all()
        .filter_map(|sq| pos.piece_at(sq))
        .map(|pc| {
            let v = piece_value(pc.kind);
            if pc.color == Color::White { v } else { -v }
        })
        .sum()
}

/// Returns the material value of a piece in pawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.25,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
