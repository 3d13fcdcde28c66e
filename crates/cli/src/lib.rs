//! Terminal front end: game state, play settings and the interactive loop.

pub mod config;
pub mod game;
pub mod session;

pub use config::{HumanSide, PlayConfig};
pub use game::{EndReason, Game, GameOutcome};
pub use session::{play, play_from};
