//! Interactive game loop over line-based input and output

use std::io::{self, BufRead, Write};

use chess_core::Color;
use tracing::{debug, info};

use crate::config::PlayConfig;
use crate::game::Game;

const HELP: &str = "
Commands:
  - Enter a move in long algebraic notation, e.g. 'e2e4', 'g1f3', 'e7e8q'.
  - 'help' or '?'  : Show this help message.
  - 'quit' or 'exit': Quit the game.
";

/// Capitalized color name for game-over lines.
fn title(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// Plays one game from the start position until it ends, the human quits,
/// input runs out or (engine against itself) `max_moves` plies are played.
///
/// Returns the finished game.
pub fn play<R: BufRead, W: Write>(config: &PlayConfig, input: R, out: W) -> io::Result<Game> {
    play_from(Game::new(), config, input, out)
}

/// Same as [`play`], continuing an existing game.
pub fn play_from<R: BufRead, W: Write>(
    mut game: Game,
    config: &PlayConfig,
    mut input: R,
    mut out: W,
) -> io::Result<Game> {
    let human = config.human_color.color();
    let depth = config.depth;

    writeln!(out, "Type moves like 'e2e4'. Type 'help' for commands, 'quit' to exit.")?;
    writeln!(out)?;

    loop {
        if let Some(outcome) = game.outcome() {
            writeln!(out, "{}", game.position.to_ascii())?;
            match outcome.winner {
                Some(winner) => {
                    writeln!(out, "Game over: {} wins by {}.", title(winner), outcome.reason)?
                }
                None => writeln!(out, "Game over: draw by {}.", outcome.reason)?,
            }
            info!(plies = game.moves.len(), ?outcome, "game over");
            break;
        }

        if human.is_none() && game.moves.len() as u32 >= config.max_moves {
            writeln!(out, "{}", game.position.to_ascii())?;
            writeln!(out, "Move limit of {} plies reached.", config.max_moves)?;
            break;
        }

        let side = game.turn();
        writeln!(out, "{}", game.position.to_ascii())?;
        writeln!(out, "Side to move: {}", side)?;
        writeln!(out)?;

        if human == Some(side) {
            write!(out, "Your move> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                debug!("input closed");
                break;
            }
            let text = line.trim();
            match text.to_lowercase().as_str() {
                "quit" | "exit" => {
                    writeln!(out, "Goodbye!")?;
                    break;
                }
                "help" | "?" => {
                    writeln!(out, "{}", HELP)?;
                    continue;
                }
                _ => {}
            }

            match game.parse_and_validate_move(text) {
                Ok(mv) => game.apply_move(mv),
                Err(e) => {
                    debug!(input = text, error = %e, "rejected move");
                    writeln!(out, "Invalid or illegal move. Please try again.")?;
                    writeln!(out)?;
                }
            }
        } else {
            writeln!(out, "Engine ({}) is thinking (depth={})...", side, depth)?;
            let result = game.engine_move(depth);
            let Some(mv) = result.best_move else {
                // outcome() already handles positions without moves
                break;
            };
            writeln!(out, "Engine plays: {} (score={:.2})", mv, result.score)?;
            writeln!(out)?;
            game.apply_move(mv);
        }
    }

    Ok(game)
}
