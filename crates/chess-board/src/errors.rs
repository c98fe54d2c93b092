//! Error types for board construction, notation parsing and EPD.

use chess_core::InvalidUciError;
use thiserror::Error;

/// Errors that can occur when parsing FEN strings or board parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("empty fen")]
    Empty,

    #[error("expected 6 fields in fen, got {0}")]
    MissingParts(usize),

    #[error("fen string has more parts than expected: {0:?}")]
    TrailingParts(String),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("expected 'w' or 'b' for side to move, got {0:?}")]
    InvalidTurn(String),

    #[error("invalid castling field: {0:?}")]
    InvalidCastling(String),

    #[error("invalid en passant field: {0:?}")]
    InvalidEnPassant(String),

    #[error("invalid half-move clock: {0:?}")]
    InvalidHalfmoveClock(String),

    #[error("invalid full-move number: {0:?}")]
    InvalidFullmoveNumber(String),
}

/// Errors raised by SAN parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanError {
    /// The token does not match the SAN grammar.
    #[error("invalid san: {san:?}")]
    Invalid { san: String },

    /// The token is well-formed but matches no legal move.
    #[error("illegal san: {san:?} in {fen}")]
    Illegal { san: String, fen: String },

    /// The token matches more than one legal move.
    #[error("ambiguous san: {san:?} in {fen}")]
    Ambiguous { san: String, fen: String },
}

/// Errors raised when resolving a UCI move against a position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UciError {
    #[error(transparent)]
    Invalid(#[from] InvalidUciError),

    #[error("illegal uci: {uci:?} in {fen}")]
    Illegal { uci: String, fen: String },
}

/// Error returned by move lookups that found no matching legal move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no matching legal move for {uci} in {fen}")]
pub struct IllegalMoveError {
    pub uci: String,
    pub fen: String,
}

/// Errors raised when parsing EPD strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EpdError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error(transparent)]
    San(#[from] SanError),

    #[error("invalid operand for epd opcode {opcode:?}: {reason}")]
    InvalidOperand { opcode: String, reason: String },
}
