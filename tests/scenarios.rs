use chess_core::{Color, PieceKind, Position};

#[test]
fn initial_position_has_twenty_quiet_moves() {
    let mut pos =
        Position::load_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    let moves = pos.legal_moves(false);
    assert_eq!(moves.len(), 20);
    for &mv in moves.iter() {
        assert!(mv.promotion.is_none());
        assert!(pos.piece_at(mv.to).is_none(), "no captures available on move 1");
    }
}

#[test]
fn pawn_on_seventh_has_four_promotion_choices() {
    let mut pos = Position::load_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
    let (_, promotions) = pos.split_legal_moves();
    let a8_promotions: Vec<_> = promotions
        .iter()
        .filter(|m| m.from.to_string() == "a7" && m.to.to_string() == "a8")
        .collect();
    assert_eq!(a8_promotions.len(), 4);

    pos.commit_move(chess_core::Move {
        from: "a7".parse_square(),
        to: "a8".parse_square(),
        promotion: Some(PieceKind::Queen),
    });
    let queen = pos.piece_at("a8".parse_square()).unwrap();
    assert_eq!(queen.kind, PieceKind::Queen);
    assert_eq!(queen.color, Color::White);
}

#[test]
fn both_side_castling_available_and_applied() {
    let mut pos = Position::load_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves = pos.legal_moves(false);
    let has = |from: &str, to: &str| {
        moves.iter().any(|m| m.from.to_string() == from && m.to.to_string() == to)
    };
    assert!(has("e1", "g1"), "kingside castling should be legal");
    assert!(has("e1", "c1"), "queenside castling should be legal");

    pos.commit_move(chess_core::Move { from: "e1".parse_square(), to: "g1".parse_square(), promotion: None });
    assert_eq!(pos.piece_at("g1".parse_square()).unwrap().kind, PieceKind::King);
    assert_eq!(pos.piece_at("f1".parse_square()).unwrap().kind, PieceKind::Rook);
    assert!(pos.piece_at("e1".parse_square()).is_none());
    assert!(pos.piece_at("h1".parse_square()).is_none());
}

#[test]
fn double_pawn_push_sets_en_passant_target_and_it_clears() {
    let mut pos = Position::load_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    pos.commit_move(chess_core::Move { from: "e2".parse_square(), to: "e4".parse_square(), promotion: None });
    assert_eq!(pos.en_passant_target, Some("e3".parse_square()));

    pos.commit_move(chess_core::Move { from: "e8".parse_square(), to: "e7".parse_square(), promotion: None });
    assert_eq!(pos.en_passant_target, None);
}

#[test]
fn queenside_castling_blocked_by_attacked_transit_square() {
    // Rook on c2 attacks c1 along the c-file, one of the three squares
    // (e1, d1, c1) the king must cross to castle queenside. The squares
    // between king and rook (b1, c1, d1) are all empty, so this exercises
    // "vacant but still attacked", not "blocked by occupancy".
    let mut pos = Position::load_fen("7k/8/8/8/8/8/2r5/R3K3 w Q - 0 1").unwrap();
    let moves = pos.legal_moves(false);
    assert!(
        !moves.iter().any(|m| m.from.to_string() == "e1" && m.to.to_string() == "c1"),
        "queenside castling must be illegal: rook on c2 attacks c1, a square the king crosses"
    );
}

trait ParseSquare {
    fn parse_square(&self) -> chess_core::Square;
}

impl ParseSquare for str {
    fn parse_square(&self) -> chess_core::Square {
        let bytes = self.as_bytes();
        chess_core::Square::new(bytes[1] - b'1', bytes[0] - b'a')
    }
}
