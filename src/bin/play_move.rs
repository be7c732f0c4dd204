//! Loads a position from a FEN (or the standard start position), searches
//! for a configurable number of seconds, and prints the chosen move. Not a
//! UCI engine — UCI protocol framing is out of scope for this crate.

use std::env;
use std::time::Duration;

use chess_core::{Position, Search, SearchLimits};

fn main() {
    let mut args = env::args().skip(1);
    let fen = args
        .next()
        .unwrap_or_else(|| "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string());
    let seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let mut pos = Position::load_fen(&fen).expect("invalid FEN");
    let mut search = Search::new();
    let limits = SearchLimits { deadline: Duration::from_secs(seconds), ..SearchLimits::default() };

    match search.search(&mut pos, limits) {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove (none) -- game is over: {:?}", pos.game_over),
    }
}
