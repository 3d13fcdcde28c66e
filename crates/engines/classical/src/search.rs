//! Minimax search with alpha-beta pruning

use chess_core::{legal_moves_into, Color, Move, Position, SearchResult};
use tracing::{debug, info};

use crate::eval::evaluate;

/// Score of a checkmate, in pawns.
pub const MATE_SCORE: f64 = 10_000.0;

/// Searches `pos` to `max_depth` plies and returns the best move for the side
/// to move.
///
/// The returned score is White-relative. A `max_depth` of 0 behaves like 1.
pub fn find_best_move(pos: &Position, max_depth: u8) -> SearchResult {
    let mut nodes = 0;
    pick_best_move(pos, max_depth, &mut nodes)
}

/// Same as [`find_best_move`], accumulating the visited-node count in `nodes`.
///
/// # Returns
/// `SearchResult` with no move when the side to move has no legal moves. Its
/// score is then `-MATE_SCORE` if White is mated, `MATE_SCORE` if Black is
/// mated and 0 on stalemate.
pub fn pick_best_move(pos: &Position, max_depth: u8, nodes: &mut u64) -> SearchResult {
    let side = pos.side_to_move();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, side, &mut moves);

    if moves.is_empty() {
        let score = if pos.is_in_check(side) {
            match side {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            }
        } else {
            0.0
        };
        info!(depth = max_depth, score, "no legal moves");
        return SearchResult {
            best_move: None,
            score,
            depth: max_depth,
            nodes: *nodes,
        };
    }

    let mut best: Option<Move> = None;
    let mut best_score = match side {
        Color::White => f64::NEG_INFINITY,
        Color::Black => f64::INFINITY,
    };

    for mv in moves {
        let child = pos.apply_move(mv, true);
        *nodes += 1;

        let score = minimax(
            &child,
            max_depth.saturating_sub(1),
            f64::NEG_INFINITY,
            f64::INFINITY,
            side,
            nodes,
        );
        // back to White-relative
        let score = if side == Color::Black { -score } else { score };
        debug!(mv = %mv, score, "root move");

        let improves = match side {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if best.is_none() || improves {
            best = Some(mv);
            best_score = score;
        }
    }

    if let Some(mv) = best {
        info!(mv = %mv, depth = max_depth, score = best_score, nodes = *nodes, "search done");
    }

    SearchResult {
        best_move: best,
        score: best_score,
        depth: max_depth,
        nodes: *nodes,
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// Scores are relative to `maximizing`: positive is good for that color.
pub fn minimax(
    pos: &Position,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: Color,
    nodes: &mut u64,
) -> f64 {
    if depth == 0 {
        let score = evaluate(pos);
        return if maximizing == Color::White { score } else { -score };
    }

    let side = pos.side_to_move();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(pos, side, &mut moves);

    if moves.is_empty() {
        if pos.is_in_check(side) {
            return if side == maximizing { -MATE_SCORE } else { MATE_SCORE };
        }
        return 0.0; // Stalemate
    }

    if side == maximizing {
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let child = pos.apply_move(mv, true);
            *nodes += 1;
            let score = minimax(&child, depth - 1, alpha, beta, maximizing, nodes);
            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = f64::INFINITY;
        for mv in moves {
            let child = pos.apply_move(mv, true);
            *nodes += 1;
            let score = minimax(&child, depth - 1, alpha, beta, maximizing, nodes);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
