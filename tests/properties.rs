use chess_core::ordering::{order_moves, KillerMoves};
use chess_core::Position;
use proptest::prelude::*;

const SAMPLE_FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1",
];

fn fen_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SAMPLE_FENS)
}

proptest! {
    /// commit(m); unmake(true) is identity on every field the invariants
    /// in SPEC_FULL §8 care about.
    #[test]
    fn commit_then_unmake_is_identity(fen in fen_strategy(), move_index in 0usize..40) {
        let mut pos = Position::load_fen(fen).unwrap();
        let moves = pos.legal_moves(false);
        if moves.is_empty() {
            return Ok(());
        }
        let mv = moves.as_slice()[move_index % moves.len()];

        let before_fen = pos.fen();
        let before_zobrist = pos.zobrist;
        let before_in_check = pos.in_check;

        pos.commit_move(mv);
        pos.unmake_move(true);

        prop_assert_eq!(pos.fen(), before_fen);
        prop_assert_eq!(pos.zobrist, before_zobrist);
        prop_assert_eq!(pos.in_check, before_in_check);
    }

    /// Every move returned with `only_captures = true` is also present in
    /// the full legal move list and is in fact a capture (including
    /// en-passant, whose destination is empty but whose capture removes a
    /// piece on an adjacent square).
    #[test]
    fn captures_are_a_subset_of_all_legal_moves(fen in fen_strategy()) {
        let mut pos = Position::load_fen(fen).unwrap();
        let all = pos.legal_moves(false);
        let captures = pos.legal_moves(true);
        for &mv in captures.iter() {
            prop_assert!(all.iter().any(|&m| m == mv));
            let is_capture = pos.piece_at(mv.to).is_some() || Some(mv.to) == pos.en_passant_target;
            prop_assert!(is_capture);
        }
    }

    /// Ordering always places `first_move` at index 0 when it is a member
    /// of the move list.
    #[test]
    fn first_move_is_sorted_to_front(fen in fen_strategy(), move_index in 0usize..40) {
        let mut pos = Position::load_fen(fen).unwrap();
        let mut moves = pos.legal_moves(false);
        if moves.is_empty() {
            return Ok(());
        }
        let first = moves.as_slice()[move_index % moves.len()];
        let killers = KillerMoves::new();
        order_moves(&pos, &mut moves, &killers, Some(first));
        prop_assert_eq!(moves.as_slice()[0], first);
    }
}
