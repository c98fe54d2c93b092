//! Perft reference counts for the move generator.
//!
//! Deeper nodes are marked `#[ignore]`; run them with
//! `cargo test --release -- --ignored`.

use chess_board::{perft, Board};

fn perft_fen(fen: &str, depth: u32) -> u64 {
    let mut board = Board::from_fen(fen).unwrap();
    perft(&mut board, depth)
}

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn perft_startpos() {
    let mut board = Board::new();
    assert_eq!(perft(&mut board, 1), 20);
    assert_eq!(perft(&mut board, 2), 400);
    assert_eq!(perft(&mut board, 3), 8902);
    assert_eq!(perft(&mut board, 4), 197_281);
}

#[test]
#[ignore]
fn perft_startpos_depth_5() {
    let mut board = Board::new();
    assert_eq!(perft(&mut board, 5), 4_865_609);
}

#[test]
#[ignore]
fn perft_startpos_depth_6() {
    let mut board = Board::new();
    assert_eq!(perft(&mut board, 6), 119_060_324);
}

#[test]
fn perft_kiwipete() {
    assert_eq!(perft_fen(KIWIPETE, 1), 48);
    assert_eq!(perft_fen(KIWIPETE, 2), 2039);
    assert_eq!(perft_fen(KIWIPETE, 3), 97_862);
}

#[test]
#[ignore]
fn perft_kiwipete_depth_4() {
    assert_eq!(perft_fen(KIWIPETE, 4), 4_085_603);
}

#[test]
fn perft_position_3() {
    assert_eq!(perft_fen(POSITION_3, 1), 14);
    assert_eq!(perft_fen(POSITION_3, 2), 191);
    assert_eq!(perft_fen(POSITION_3, 3), 2812);
    assert_eq!(perft_fen(POSITION_3, 4), 43_238);
}

#[test]
#[ignore]
fn perft_position_3_deep() {
    assert_eq!(perft_fen(POSITION_3, 5), 674_624);
    assert_eq!(perft_fen(POSITION_3, 6), 11_030_083);
}

#[test]
fn perft_position_4() {
    assert_eq!(perft_fen(POSITION_4, 1), 6);
    assert_eq!(perft_fen(POSITION_4, 2), 264);
    assert_eq!(perft_fen(POSITION_4, 3), 9467);
}

#[test]
#[ignore]
fn perft_position_4_deep() {
    assert_eq!(perft_fen(POSITION_4, 4), 422_333);
    assert_eq!(perft_fen(POSITION_4, 5), 15_833_292);
}

#[test]
fn perft_position_5() {
    assert_eq!(perft_fen(POSITION_5, 1), 44);
    assert_eq!(perft_fen(POSITION_5, 2), 1486);
    assert_eq!(perft_fen(POSITION_5, 3), 62_379);
}
