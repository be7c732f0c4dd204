use chess_core::Position;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "initial position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197_281)],
    },
    TestPosition {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039), (3, 97862)],
    },
];

#[test]
fn perft_matches_known_node_counts() {
    for case in POSITIONS {
        let mut pos = Position::load_fen(case.fen).expect("valid FEN");
        for &(depth, expected) in case.depths {
            let nodes = pos.perft(depth);
            assert_eq!(
                nodes, expected,
                "{}: perft({}) = {} (expected {})",
                case.name, depth, nodes, expected
            );
        }
    }
}
