use super::*;

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let mv = game.parse_and_validate_move(text).unwrap();
        game.apply_move(mv);
    }
}

#[test]
fn test_new_game() {
    let game = Game::new();
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.position, Position::start_position());
    assert!(game.moves.is_empty());
    assert_eq!(game.outcome(), None);
}

#[test]
fn test_apply_move_switches_turn() {
    let mut game = Game::new();
    play(&mut game, &["e2e4"]);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.moves.len(), 1);
    assert_eq!(game.moves[0].to_long_algebraic(), "e2e4");
}

#[test]
fn test_fools_mate_outcome() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(
        game.outcome(),
        Some(GameOutcome {
            winner: Some(Color::Black),
            reason: EndReason::Checkmate,
        })
    );
}

#[test]
fn test_stalemate_outcome() {
    let game = Game::from_position(Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b").unwrap());
    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.reason.to_string(), "stalemate");
}

#[test]
fn test_rejects_bad_input() {
    let game = Game::new();
    assert!(matches!(
        game.parse_and_validate_move("e2e5"),
        Err(ChessError::IllegalMove(_))
    ));
    assert!(matches!(
        game.parse_and_validate_move("e2"),
        Err(ChessError::InvalidMoveText(_))
    ));
    assert!(game.parse_and_validate_move(" g1f3 ").is_ok());
}

#[test]
fn test_engine_move_is_legal() {
    let mut game = Game::new();
    play(&mut game, &["e2e4"]);
    let result = game.engine_move(2);
    let mv = result.best_move.unwrap();
    assert!(chess_core::legal_moves(&game.position).contains(&mv));
    assert_eq!(result.best_move.map(|m| m.to_long_algebraic()).as_deref(), Some("b8c6"));
}

#[test]
fn test_engine_move_in_finished_game() {
    let game = Game::from_position(Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b").unwrap());
    let result = game.engine_move(2);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0.0);
}
