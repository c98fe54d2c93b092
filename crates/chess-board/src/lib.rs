//! Bitboard chess board with full move generation and notation support.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit square sets with shifts, flips and iteration
//! - Attack lookups for every piece type, built on magic bitboards
//! - [`BaseBoard`] - piece placement with attack, pin and board-FEN
//!   queries, including Chess960 starting position handling
//! - [`Board`] - the full game state: turn, castling rights, en passant,
//!   move counters, a move stack with O(1) undo, legal move generation,
//!   draw and repetition detection, position validation, and
//!   FEN/EPD/SAN/UCI/XBoard notation
//! - [`perft`] for validating the generator against reference counts
//!
//! # Example
//!
//! ```
//! use chess_board::Board;
//!
//! let mut board = Board::new();
//! board.push_san("e4").unwrap();
//! board.push_san("e5").unwrap();
//! board.push_san("Nf3").unwrap();
//! assert_eq!(
//!     board.fen(),
//!     "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
//! );
//! board.pop();
//! assert_eq!(board.fullmove_number, 2);
//! ```

mod attacks;
mod baseboard;
mod bitboard;
mod board;
mod epd;
mod errors;
mod magics;
mod movegen;
mod perft;
mod san;

pub use attacks::{
    aligned, attacks_mask, between, bishop_attacks, diagonal_attacks, file_attacks, king_attacks,
    knight_attacks, pawn_attacks, queen_attacks, rank_attacks, ray, rook_attacks,
};
pub use baseboard::BaseBoard;
pub use bitboard::{Bitboard, BitboardIter, CarryRippler, RevBitboardIter};
pub use board::{
    Board, EnPassantMode, Outcome, Status, Termination, STARTING_BOARD_FEN, STARTING_FEN,
};
pub use epd::EpdOperand;
pub use errors::{EpdError, FenError, IllegalMoveError, SanError, UciError};
pub use movegen::MoveList;
pub use perft::{perft, perft_divide};

pub use chess_core::{Color, File, InvalidUciError, Move, Piece, PieceType, Rank, Square};
