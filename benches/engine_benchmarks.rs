use std::time::Duration;

use chess_core::{Position, Search, SearchLimits};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_movegen(c: &mut Criterion) {
    let mut pos =
        Position::load_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    c.bench_function("legal_moves kiwipete", |b| {
        b.iter(|| pos.legal_moves(false));
    });
}

fn bench_perft(c: &mut Criterion) {
    c.bench_function("perft startpos depth 3", |b| {
        b.iter(|| {
            let mut pos =
                Position::load_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
                    .unwrap();
            pos.perft(3)
        });
    });
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("search startpos 500ms", |b| {
        b.iter(|| {
            let mut pos =
                Position::load_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
                    .unwrap();
            let mut search = Search::new();
            let limits =
                SearchLimits { deadline: Duration::from_millis(500), ..SearchLimits::default() };
            search.search(&mut pos, limits)
        });
    });
}

criterion_group!(benches, bench_movegen, bench_perft, bench_search);
criterion_main!(benches);
