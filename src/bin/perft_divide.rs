//! Perft-divide: prints the node count contributed by each legal move at
//! the root, for comparing against a reference engine when debugging the
//! move generator.

use std::env;

use chess_core::Position;

fn main() {
    let mut args = env::args().skip(1);
    let fen = args
        .next()
        .unwrap_or_else(|| "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string());
    let depth: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);

    let mut pos = Position::load_fen(&fen).expect("invalid FEN");
    let moves = pos.legal_moves(false);

    let mut total = 0u64;
    for &mv in moves.iter() {
        pos.commit_move(mv);
        let nodes = if depth == 0 { 1 } else { pos.perft(depth - 1) };
        pos.unmake_move(true);
        println!("{mv}: {nodes}");
        total += nodes;
    }
    println!("total: {total}");
}
