//! Classical Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material evaluation.

mod eval;
mod search;

use chess_core::{Engine, Position, SearchResult};

/// Classical chess engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search relative to the side to move at the root
/// - Alpha-beta pruning
/// - Simple material evaluation
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;
        search::pick_best_move(pos, depth, &mut self.nodes)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use eval::{evaluate, piece_value};
pub use search::{find_best_move, minimax, pick_best_move, MATE_SCORE};
