use super::*;

#[test]
fn test_square_names() {
    assert_eq!(square_to_str(Square::new(7, 0)), "a1");
    assert_eq!(square_to_str(Square::new(0, 7)), "h8");
    assert_eq!(square_to_str(Square::new(6, 4)), "e2");
    assert_eq!(str_to_square("a8"), Ok(Square::new(0, 0)));
    assert_eq!(str_to_square("h1"), Ok(Square::new(7, 7)));
    assert!(str_to_square("a9").is_err());
    assert!(str_to_square("i1").is_err());
    assert!(str_to_square("e22").is_err());
}

#[test]
fn test_off_board_square_names() {
    assert_eq!(square_to_str(Square::new(-1, 0)), "(-1,0)");
    assert_eq!(square_to_str(Square::new(8, 8)), "(8,8)");
    assert_eq!(Square::new(7, 7).offset(1, 1).to_string(), "(8,8)");
    assert_eq!(Square::new(0, 0).offset(0, -1).to_string(), "(0,-1)");
}

#[test]
fn test_parse_long_algebraic() {
    let mv = Move::from_long_algebraic("e2e4").unwrap();
    assert_eq!(mv.from, Square::new(6, 4));
    assert_eq!(mv.to, Square::new(4, 4));
    assert_eq!(mv.promotion, None);
    assert_eq!(mv.to_long_algebraic(), "e2e4");
}

#[test]
fn test_promotion_letter_is_case_insensitive() {
    let lower = Move::from_long_algebraic("e7e8q").unwrap();
    let upper = Move::from_long_algebraic("e7e8Q").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.promotion, Some(PieceKind::Queen));
    assert_eq!(lower.to_long_algebraic(), "e7e8Q");
    assert_eq!(Move::from_long_algebraic("b2b1n").unwrap().to_string(), "b2b1N");
}

#[test]
fn test_parse_trims_whitespace() {
    let mv = Move::from_long_algebraic("  g1f3 \n").unwrap();
    assert_eq!(mv.to_long_algebraic(), "g1f3");
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        Move::from_long_algebraic("e2e"),
        Err(ChessError::InvalidMoveText(_))
    ));
    assert!(matches!(
        Move::from_long_algebraic("e2e4e5"),
        Err(ChessError::InvalidMoveText(_))
    ));
    assert!(matches!(
        Move::from_long_algebraic(""),
        Err(ChessError::InvalidMoveText(_))
    ));
    assert_eq!(
        Move::from_long_algebraic("e7e8k"),
        Err(ChessError::InvalidPromotion('k'))
    );
    assert_eq!(
        Move::from_long_algebraic("e7e8x"),
        Err(ChessError::InvalidPromotion('x'))
    );
    assert_eq!(
        Move::from_long_algebraic("i2e4"),
        Err(ChessError::InvalidSquare("i2".to_string()))
    );
    assert_eq!(
        Move::from_long_algebraic("e2e9"),
        Err(ChessError::InvalidSquare("e9".to_string()))
    );
}

#[test]
fn test_parse_move_matches_legal_moves() {
    let pos = Position::start_position();
    let mv = parse_move(&pos, "e2e4").unwrap();
    assert_eq!(mv, Move::new(Square::new(6, 4), Square::new(4, 4)));

    assert_eq!(
        parse_move(&pos, "e2e5"),
        Err(ChessError::IllegalMove("e2e5".to_string()))
    );
    assert!(matches!(parse_move(&pos, "e2"), Err(ChessError::InvalidMoveText(_))));
}

#[test]
fn test_parse_move_defaults_promotion_to_queen() {
    let pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w").unwrap();
    let mv = parse_move(&pos, "a7a8").unwrap();
    assert_eq!(mv.promotion, Some(PieceKind::Queen));

    let under = parse_move(&pos, "a7a8n").unwrap();
    assert_eq!(under.promotion, Some(PieceKind::Knight));
}

#[test]
fn test_parse_move_ignores_promotion_on_plain_move() {
    let pos = Position::start_position();
    let mv = parse_move(&pos, "e2e4q").unwrap();
    assert_eq!(mv.promotion, None);
}

#[test]
fn test_parse_move_black_promotion_piece_is_black() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/p7/4K3 b").unwrap();
    let mv = parse_move(&pos, "a2a1").unwrap();
    let next = pos.apply_move(mv, true);
    assert_eq!(
        next.piece_at(Square::new(7, 0)),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
}
