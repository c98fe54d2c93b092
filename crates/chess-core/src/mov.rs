//! Move representation.

use crate::{PieceType, Square};
use std::fmt;
use thiserror::Error;

/// Error returned when a UCI move string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid uci: {0:?}")]
pub struct InvalidUciError(pub String);

/// A chess move from one square to another, with an optional promotion
/// piece type and an optional drop piece type.
///
/// Drops are encoded with `from == to`. The null move has all fields
/// zero and is written `0000` in UCI.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
    pub drop: Option<PieceType>,
}

impl Move {
    /// The null move, used to pass the turn.
    pub const NULL: Move = Move {
        from: Square::A1,
        to: Square::A1,
        promotion: None,
        drop: None,
    };

    /// Creates a normal move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            drop: None,
        }
    }

    /// Creates a promotion move.
    #[inline]
    pub const fn promoting(from: Square, to: Square, promotion: PieceType) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
            drop: None,
        }
    }

    /// Creates a drop of the given piece type onto a square.
    #[inline]
    pub const fn dropping(kind: PieceType, to: Square) -> Self {
        Move {
            from: to,
            to,
            promotion: None,
            drop: Some(kind),
        }
    }

    /// Returns true if this is the null move.
    #[inline]
    pub fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// Returns the UCI string for this move: `0000` for the null move,
    /// `P@e4` style for drops, otherwise the two squares followed by an
    /// optional lower-case promotion letter.
    pub fn uci(self) -> String {
        if let Some(kind) = self.drop {
            format!("{}@{}", kind.to_upper_char(), self.to)
        } else if let Some(kind) = self.promotion {
            format!("{}{}{}", self.from, self.to, kind.to_char())
        } else if self.is_null() {
            "0000".to_string()
        } else {
            format!("{}{}", self.from, self.to)
        }
    }

    /// Parses a move from UCI notation.
    ///
    /// Accepts `0000` for the null move and `P@e4` style drops. Normal
    /// moves with `from == to` are rejected; the null move must be
    /// spelled `0000`.
    pub fn from_uci(s: &str) -> Result<Self, InvalidUciError> {
        let err = || InvalidUciError(s.to_string());

        if s == "0000" {
            return Ok(Move::NULL);
        }

        if s.len() == 4 && s.as_bytes()[1] == b'@' {
            let kind = s
                .chars()
                .next()
                .and_then(PieceType::from_char)
                .ok_or_else(err)?;
            let to = s
                .get(2..4)
                .and_then(Square::from_algebraic)
                .ok_or_else(err)?;
            return Ok(Move::dropping(kind, to));
        }

        if s.len() == 4 || s.len() == 5 {
            let from = s
                .get(0..2)
                .and_then(Square::from_algebraic)
                .ok_or_else(err)?;
            let to = s
                .get(2..4)
                .and_then(Square::from_algebraic)
                .ok_or_else(err)?;
            let promotion = match s.get(4..5) {
                None => None,
                Some(p) => {
                    let kind = p.chars().next().and_then(PieceType::from_char).ok_or_else(err)?;
                    if !matches!(
                        kind,
                        PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen
                    ) {
                        return Err(err());
                    }
                    Some(kind)
                }
            };
            if from == to {
                return Err(err());
            }
            return Ok(Move {
                from,
                to,
                promotion,
                drop: None,
            });
        }

        Err(err())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uci())
    }
}
