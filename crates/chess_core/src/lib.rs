pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::ChessError;
pub use movegen::*;
pub use notation::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait, implemented by the search engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation in pawns; positive favors White
    pub score: f64,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Search the position to a fixed depth in plies.
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
