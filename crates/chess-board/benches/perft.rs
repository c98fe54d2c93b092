use chess_board::{perft, Board};
use criterion::{criterion_group, criterion_main, Criterion};

fn perft_startpos(c: &mut Criterion) {
    c.bench_function("perft 3 startpos", |b| {
        let mut board = Board::new();
        b.iter(|| perft(&mut board, 3));
    });
    c.bench_function("perft 4 startpos", |b| {
        let mut board = Board::new();
        b.iter(|| perft(&mut board, 4));
    });
}

fn perft_kiwipete(c: &mut Criterion) {
    c.bench_function("perft 3 kiwipete", |b| {
        let mut board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        b.iter(|| perft(&mut board, 3));
    });
}

criterion_group!(benches, perft_startpos, perft_kiwipete);
criterion_main!(benches);
