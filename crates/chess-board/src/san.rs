//! Standard Algebraic Notation, UCI and XBoard move handling.
//!
//! SAN parsing matches tokens against the legal moves of the position,
//! so a well-formed token can still be rejected as illegal or flagged
//! as ambiguous. Castling is translated between the standard
//! king-two-squares encoding and the king-captures-rook encoding used
//! in Chess960 mode.

use crate::board::Board;
use crate::errors::{IllegalMoveError, SanError, UciError};
use crate::movegen::MoveList;
use crate::Bitboard;
use chess_core::{File, Move, PieceType, Rank, Square};
use regex::Regex;
use std::sync::OnceLock;

static SAN_RE: OnceLock<Regex> = OnceLock::new();

fn san_regex() -> &'static Regex {
    SAN_RE.get_or_init(|| {
        Regex::new(r"^([NBKRQ])?([a-h])?([1-8])?[\-x]?([a-h][1-8])(=?[nbrqkNBRQK])?[\+#]?$")
            .expect("san grammar is valid")
    })
}

impl Board {
    /// Returns the SAN of a legal move, including `+`/`#` suffixes.
    pub fn san(&mut self, mv: Move) -> String {
        let san = self.algebraic_and_push(mv, false);
        self.pop();
        san
    }

    /// Returns the long algebraic notation of a legal move.
    pub fn lan(&mut self, mv: Move) -> String {
        let san = self.algebraic_and_push(mv, true);
        self.pop();
        san
    }

    /// Returns the SAN of the move and plays it.
    pub fn san_and_push(&mut self, mv: Move) -> String {
        self.algebraic_and_push(mv, false)
    }

    fn algebraic_and_push(&mut self, mv: Move, long: bool) -> String {
        let san = self.algebraic_without_suffix(mv, long);

        self.push(mv);
        let is_check = self.is_check();
        let is_checkmate = is_check && self.is_checkmate();

        if is_checkmate && !mv.is_null() {
            san + "#"
        } else if is_check && !mv.is_null() {
            san + "+"
        } else {
            san
        }
    }

    fn algebraic_without_suffix(&self, mv: Move, long: bool) -> String {
        if mv.is_null() {
            return "--".to_string();
        }

        if let Some(kind) = mv.drop {
            let mut san = String::new();
            if kind != PieceType::Pawn {
                san.push(kind.to_upper_char());
            }
            san.push('@');
            san.push_str(&mv.to.to_algebraic());
            return san;
        }

        if self.is_castling(mv) {
            return if mv.to.file() < mv.from.file() {
                "O-O-O".to_string()
            } else {
                "O-O".to_string()
            };
        }

        let piece_type = self
            .base
            .piece_type_at(mv.from)
            .expect("san expects a piece on the from square");
        let capture = self.is_capture(mv);

        let mut san = String::new();
        if piece_type != PieceType::Pawn {
            san.push(piece_type.to_upper_char());
        }

        if long {
            san.push_str(&mv.from.to_algebraic());
        } else if piece_type != PieceType::Pawn {
            // Collect other pieces of the same type that could reach
            // the destination, then disambiguate by file, rank, or
            // both.
            let from_mask =
                self.base.pieces_mask(piece_type, self.turn) & !Bitboard::from_square(mv.from);
            let to_mask = Bitboard::from_square(mv.to);
            let mut candidates = MoveList::new();
            self.generate_legal_moves(from_mask, to_mask, &mut candidates);

            let mut others = Bitboard::EMPTY;
            for candidate in &candidates {
                others |= Bitboard::from_square(candidate.from);
            }

            if others.is_not_empty() {
                let mut row = false;
                let mut column = false;
                if (others & Bitboard::from_rank(mv.from.rank())).is_not_empty() {
                    column = true;
                }
                if (others & Bitboard::from_file(mv.from.file())).is_not_empty() {
                    row = true;
                } else {
                    column = true;
                }
                if column {
                    san.push(mv.from.file().to_char());
                }
                if row {
                    san.push(mv.from.rank().to_char());
                }
            }
        } else if capture {
            san.push(mv.from.file().to_char());
        }

        if capture {
            san.push('x');
        } else if long {
            san.push('-');
        }

        san.push_str(&mv.to.to_algebraic());

        if let Some(promotion) = mv.promotion {
            san.push('=');
            san.push(promotion.to_upper_char());
        }

        san
    }

    /// Renders a sequence of moves as numbered movetext from the
    /// current position.
    pub fn variation_san(&self, variation: &[Move]) -> Result<String, IllegalMoveError> {
        let mut board = self.without_stack();
        let mut san = Vec::new();
        for &mv in variation {
            if !board.is_legal(mv) {
                return Err(IllegalMoveError {
                    uci: mv.uci(),
                    fen: board.fen(),
                });
            }
            if board.turn == chess_core::Color::White {
                let number = board.fullmove_number;
                san.push(format!("{}. {}", number, board.san_and_push(mv)));
            } else if san.is_empty() {
                let number = board.fullmove_number;
                san.push(format!("{}...{}", number, board.san_and_push(mv)));
            } else {
                san.push(board.san_and_push(mv));
            }
        }
        Ok(san.join(" "))
    }

    /// Parses SAN and returns the matching legal move.
    ///
    /// Accepts the castling spellings `O-O`/`0-0`/`O-O-O`/`0-0-0`, the
    /// null move aliases `--`, `Z0`, `0000` and `@@@@`, and fully
    /// specified moves such as `e2e4`.
    pub fn parse_san(&self, san: &str) -> Result<Move, SanError> {
        let illegal = || SanError::Illegal {
            san: san.to_string(),
            fen: self.fen(),
        };

        // Castling.
        match san {
            "O-O" | "O-O+" | "O-O#" | "0-0" | "0-0+" | "0-0#" => {
                let mut castles = MoveList::new();
                self.generate_castling_moves(Bitboard::FULL, Bitboard::FULL, &mut castles);
                return castles
                    .into_iter()
                    .find(|mv| self.is_kingside_castling(**mv))
                    .copied()
                    .ok_or_else(illegal);
            }
            "O-O-O" | "O-O-O+" | "O-O-O#" | "0-0-0" | "0-0-0+" | "0-0-0#" => {
                let mut castles = MoveList::new();
                self.generate_castling_moves(Bitboard::FULL, Bitboard::FULL, &mut castles);
                return castles
                    .into_iter()
                    .find(|mv| self.is_queenside_castling(**mv))
                    .copied()
                    .ok_or_else(illegal);
            }
            _ => {}
        }

        let captures = match san_regex().captures(san) {
            Some(captures) => captures,
            None => {
                return if matches!(san, "--" | "Z0" | "0000" | "@@@@") {
                    Ok(Move::NULL)
                } else {
                    Err(SanError::Invalid {
                        san: san.to_string(),
                    })
                };
            }
        };

        // Destination; own pieces are masked out so castling encodings
        // never match here.
        let to_square = captures
            .get(4)
            .and_then(|m| Square::from_algebraic(m.as_str()))
            .expect("the grammar guarantees a destination square");
        let to_mask = Bitboard::from_square(to_square) & !self.base.occupied_co(self.turn);

        let promotion = captures.get(5).and_then(|m| {
            m.as_str()
                .chars()
                .last()
                .and_then(PieceType::from_char)
        });

        let from_file = captures
            .get(2)
            .and_then(|m| m.as_str().chars().next())
            .and_then(File::from_char);
        let from_rank = captures
            .get(3)
            .and_then(|m| m.as_str().chars().next())
            .and_then(Rank::from_char);

        let mut from_mask = Bitboard::FULL;
        if let Some(file) = from_file {
            from_mask &= Bitboard::from_file(file);
        }
        if let Some(rank) = from_rank {
            from_mask &= Bitboard::from_rank(rank);
        }

        if let Some(piece_letter) = captures.get(1) {
            let piece_type = piece_letter
                .as_str()
                .chars()
                .next()
                .and_then(PieceType::from_char)
                .expect("the grammar restricts piece letters");
            from_mask &= self.base.pieces_mask(piece_type, self.turn);
        } else if let (Some(file), Some(rank)) = (from_file, from_rank) {
            // A fully specified move may be anything, including
            // castling in either encoding.
            let mv = self
                .find_move(Square::new(file, rank), to_square, promotion)
                .map_err(|_| illegal())?;
            return if mv.promotion == promotion {
                Ok(mv)
            } else {
                Err(illegal())
            };
        } else {
            from_mask &= self.base.pawns();
            if from_file.is_none() {
                // Pawn captures must name the source file.
                from_mask &= Bitboard::from_file(to_square.file());
            }
        }

        let mut candidates = MoveList::new();
        self.generate_legal_moves(from_mask, to_mask, &mut candidates);
        let mut matched = None;
        for mv in &candidates {
            if mv.promotion != promotion {
                continue;
            }
            if matched.is_some() {
                return Err(SanError::Ambiguous {
                    san: san.to_string(),
                    fen: self.fen(),
                });
            }
            matched = Some(*mv);
        }
        matched.ok_or_else(illegal)
    }

    /// Parses SAN and plays the move.
    pub fn push_san(&mut self, san: &str) -> Result<Move, SanError> {
        let mv = self.parse_san(san)?;
        self.push(mv);
        Ok(mv)
    }

    /// Finds a legal move by source and destination square. Pawn moves
    /// to the backrank default to queen promotions.
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<Move, IllegalMoveError> {
        let mut promotion = promotion;
        if promotion.is_none()
            && self.base.pawns().contains(from)
            && Bitboard::BACKRANKS.contains(to)
        {
            promotion = Some(PieceType::Queen);
        }

        let mv = self.from_chess960(self.chess960, from, to, promotion, None);
        if !self.is_legal(mv) {
            return Err(IllegalMoveError {
                uci: mv.uci(),
                fen: self.fen(),
            });
        }
        Ok(mv)
    }

    /// Returns the UCI of a move, using this board's castling
    /// convention.
    pub fn uci(&self, mv: Move) -> String {
        self.uci_with(mv, self.chess960)
    }

    /// Returns the UCI of a move with an explicit castling convention:
    /// king-to-rook when `chess960`, king-two-squares otherwise.
    pub fn uci_with(&self, mv: Move, chess960: bool) -> String {
        let mv = self.to_chess960(mv);
        let mv = self.from_chess960(chess960, mv.from, mv.to, mv.promotion, mv.drop);
        mv.uci()
    }

    /// Parses a UCI move and validates it against this position. The
    /// null move `0000` is accepted without validation.
    pub fn parse_uci(&self, uci: &str) -> Result<Move, UciError> {
        let mv = Move::from_uci(uci)?;
        if mv.is_null() {
            return Ok(mv);
        }
        let mv = self.to_chess960(mv);
        let mv = self.from_chess960(self.chess960, mv.from, mv.to, mv.promotion, mv.drop);
        if !self.is_legal(mv) {
            return Err(UciError::Illegal {
                uci: uci.to_string(),
                fen: self.fen(),
            });
        }
        Ok(mv)
    }

    /// Parses a UCI move and plays it.
    pub fn push_uci(&mut self, uci: &str) -> Result<Move, UciError> {
        let mv = self.parse_uci(uci)?;
        self.push(mv);
        Ok(mv)
    }

    /// Returns the XBoard notation of a move: UCI, except `@@@@` for
    /// the null move and `O-O`/`O-O-O` for castling in Chess960 mode.
    pub fn xboard(&self, mv: Move) -> String {
        if mv.is_null() {
            return "@@@@".to_string();
        }
        if !self.chess960 || !self.is_castling(mv) {
            self.uci(mv)
        } else if self.is_kingside_castling(mv) {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        }
    }

    /// Parses a move in XBoard notation, which shares the SAN grammar.
    pub fn parse_xboard(&self, s: &str) -> Result<Move, SanError> {
        self.parse_san(s)
    }
}
