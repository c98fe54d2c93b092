//! Extended Position Description reading and writing.
//!
//! An EPD line is the first four FEN fields followed by zero or more
//! `opcode operand;` operations. Operands may be absent, quoted strings
//! with escapes, integers, finite floats, a single SAN move, or SAN
//! move lists for `pv`, `am` and `bm`.

use crate::board::{Board, EnPassantMode};
use crate::errors::EpdError;
use chess_core::Move;

/// A parsed EPD operand.
#[derive(Debug, Clone, PartialEq)]
pub enum EpdOperand {
    /// Opcode without an operand.
    None,
    /// Quoted string.
    Str(String),
    Int(i64),
    Float(f64),
    /// A single move, e.g. for `sm`.
    Move(Move),
    /// A move list, e.g. for `pv`, `am` and `bm`.
    Moves(Vec<Move>),
}

#[derive(Clone, Copy)]
enum ScanState {
    Opcode,
    AfterOpcode,
    Numeric,
    Str,
    StrEscape,
    San,
}

impl Board {
    /// Returns the EPD of the current position without operations.
    pub fn epd(&self, shredder: bool, en_passant: EnPassantMode) -> String {
        self.epd_with(shredder, en_passant, false)
    }

    /// Returns the EPD of the current position without operations,
    /// optionally marking promoted pieces.
    pub fn epd_with(&self, shredder: bool, en_passant: EnPassantMode, promoted: bool) -> String {
        let ep = self.ep_square_for(en_passant);
        format!(
            "{} {} {} {}",
            self.board_fen(promoted),
            self.turn.to_char(),
            if shredder {
                self.castling_shredder_fen()
            } else {
                self.castling_xfen()
            },
            match ep {
                Some(sq) => sq.to_algebraic(),
                None => "-".to_string(),
            }
        )
    }

    /// Returns the EPD of the current position with operations
    /// appended.
    pub fn epd_with_operations(
        &self,
        shredder: bool,
        en_passant: EnPassantMode,
        promoted: bool,
        operations: &[(String, EpdOperand)],
    ) -> String {
        let mut epd = self.epd_with(shredder, en_passant, promoted);
        if !operations.is_empty() {
            epd.push(' ');
            epd.push_str(&self.epd_operations(operations));
        }
        epd
    }

    fn epd_operations(&self, operations: &[(String, EpdOperand)]) -> String {
        let mut out = String::new();
        let mut first = true;
        for (opcode, operand) in operations {
            debug_assert!(opcode != "-", "dash is not a valid epd opcode");
            debug_assert!(
                !opcode.contains([' ', '\t', '\r', '\n']),
                "whitespace in epd opcode"
            );
            if !first {
                out.push(' ');
            }
            first = false;
            out.push_str(opcode);

            match operand {
                EpdOperand::None => out.push(';'),
                EpdOperand::Int(value) => {
                    out.push_str(&format!(" {};", value));
                }
                EpdOperand::Float(value) => {
                    debug_assert!(value.is_finite(), "epd operands must be finite");
                    out.push_str(&format!(" {:?};", value));
                }
                EpdOperand::Str(value) => {
                    out.push_str(" \"");
                    for c in value.chars() {
                        match c {
                            '\\' => out.push_str("\\\\"),
                            '\t' => out.push_str("\\t"),
                            '\r' => out.push_str("\\r"),
                            '\n' => out.push_str("\\n"),
                            '"' => out.push_str("\\\""),
                            c => out.push(c),
                        }
                    }
                    out.push_str("\";");
                }
                EpdOperand::Move(mv) => {
                    let mut scratch = self.without_stack();
                    out.push(' ');
                    out.push_str(&scratch.san(*mv));
                    out.push(';');
                }
                EpdOperand::Moves(moves) => {
                    if opcode == "pv" {
                        // A variation is played out move by move.
                        let mut position = self.without_stack();
                        for mv in moves {
                            out.push(' ');
                            out.push_str(&position.san_and_push(*mv));
                        }
                    } else {
                        // Move sets are written in sorted SAN order.
                        let mut scratch = self.without_stack();
                        let mut sans: Vec<String> =
                            moves.iter().map(|mv| scratch.san(*mv)).collect();
                        sans.sort();
                        for san in sans {
                            out.push(' ');
                            out.push_str(&san);
                        }
                    }
                    out.push(';');
                }
            }
        }
        out
    }

    /// Parses an EPD line, sets the position, and returns the parsed
    /// operations in order. `hmvc` and `fmvn` operands, when present,
    /// set the clocks.
    pub fn set_epd(&mut self, epd: &str) -> Result<Vec<(String, EpdOperand)>, EpdError> {
        let trimmed = epd.trim().trim_end_matches(';');

        // Split off the first four whitespace-separated fields; the
        // remainder is the operations part.
        let mut fields: Vec<&str> = Vec::new();
        let mut rest = trimmed;
        while fields.len() < 4 {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }
            match rest.find(char::is_whitespace) {
                Some(idx) => {
                    fields.push(&rest[..idx]);
                    rest = &rest[idx..];
                }
                None => {
                    fields.push(rest);
                    rest = "";
                }
            }
        }
        let operations_part = rest.trim_start();

        if operations_part.is_empty() {
            self.set_fen(&format!("{} 0 1", fields.join(" ")))?;
            return Ok(Vec::new());
        }

        let base_fen = format!("{} 0 1", fields.join(" "));
        let operations = parse_epd_ops(operations_part, || {
            Board::from_fen(&base_fen).map_err(EpdError::from)
        })?;

        let halfmove_part = operand_counter(&operations, "hmvc", 0);
        let fullmove_part = operand_counter(&operations, "fmvn", 1);
        self.set_fen(&format!(
            "{} {} {}",
            fields.join(" "),
            halfmove_part,
            fullmove_part
        ))?;
        Ok(operations)
    }
}

fn operand_counter(operations: &[(String, EpdOperand)], opcode: &str, default: u32) -> String {
    for (op, operand) in operations {
        if op == opcode {
            if let EpdOperand::Int(value) = operand {
                return value.to_string();
            }
        }
    }
    default.to_string()
}

fn empty_operand(opcode: &str) -> EpdOperand {
    if matches!(opcode, "pv" | "am" | "bm") {
        EpdOperand::Moves(Vec::new())
    } else {
        EpdOperand::None
    }
}

fn parse_epd_ops<F>(
    operations_part: &str,
    make_board: F,
) -> Result<Vec<(String, EpdOperand)>, EpdError>
where
    F: Fn() -> Result<Board, EpdError>,
{
    let mut operations: Vec<(String, EpdOperand)> = Vec::new();
    let mut state = ScanState::Opcode;
    let mut opcode = String::new();
    let mut operand = String::new();
    let mut position: Option<Board> = None;

    // Feed a virtual end-of-input so every state can finalize.
    let stream = operations_part.chars().map(Some).chain(std::iter::once(None));

    for ch in stream {
        match state {
            ScanState::Opcode => match ch {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    if opcode == "-" {
                        opcode.clear();
                    } else if !opcode.is_empty() {
                        state = ScanState::AfterOpcode;
                    }
                }
                None | Some(';') => {
                    if opcode == "-" {
                        opcode.clear();
                    } else if !opcode.is_empty() {
                        let value = empty_operand(&opcode);
                        operations.push((std::mem::take(&mut opcode), value));
                    }
                }
                Some(c) => opcode.push(c),
            },
            ScanState::AfterOpcode => match ch {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {}
                Some('"') => state = ScanState::Str,
                None | Some(';') => {
                    if !opcode.is_empty() {
                        let value = empty_operand(&opcode);
                        operations.push((std::mem::take(&mut opcode), value));
                    }
                    state = ScanState::Opcode;
                }
                Some(c) if "+-.0123456789".contains(c) => {
                    operand.push(c);
                    state = ScanState::Numeric;
                }
                Some(c) => {
                    operand.push(c);
                    state = ScanState::San;
                }
            },
            ScanState::Numeric => match ch {
                None | Some(';') => {
                    let value = if operand.contains(['.', 'e', 'E']) {
                        let parsed: f64 = operand.parse().map_err(|_| EpdError::InvalidOperand {
                            opcode: opcode.clone(),
                            reason: format!("invalid numeric operand {operand:?}"),
                        })?;
                        if !parsed.is_finite() {
                            return Err(EpdError::InvalidOperand {
                                opcode: opcode.clone(),
                                reason: format!("non-finite operand {operand:?}"),
                            });
                        }
                        EpdOperand::Float(parsed)
                    } else {
                        EpdOperand::Int(operand.parse().map_err(|_| {
                            EpdError::InvalidOperand {
                                opcode: opcode.clone(),
                                reason: format!("invalid numeric operand {operand:?}"),
                            }
                        })?)
                    };
                    operations.push((std::mem::take(&mut opcode), value));
                    operand.clear();
                    state = ScanState::Opcode;
                }
                Some(c) => operand.push(c),
            },
            ScanState::Str => match ch {
                None | Some('"') => {
                    operations.push((
                        std::mem::take(&mut opcode),
                        EpdOperand::Str(std::mem::take(&mut operand)),
                    ));
                    state = ScanState::Opcode;
                }
                Some('\\') => state = ScanState::StrEscape,
                Some(c) => operand.push(c),
            },
            ScanState::StrEscape => match ch {
                None => {
                    operations.push((
                        std::mem::take(&mut opcode),
                        EpdOperand::Str(std::mem::take(&mut operand)),
                    ));
                    state = ScanState::Opcode;
                }
                Some('r') => {
                    operand.push('\r');
                    state = ScanState::Str;
                }
                Some('n') => {
                    operand.push('\n');
                    state = ScanState::Str;
                }
                Some('t') => {
                    operand.push('\t');
                    state = ScanState::Str;
                }
                Some(c) => {
                    operand.push(c);
                    state = ScanState::Str;
                }
            },
            ScanState::San => match ch {
                None | Some(';') => {
                    if position.is_none() {
                        position = Some(make_board()?);
                    }
                    let board = position.as_mut().expect("position was just created");

                    let value = if opcode == "pv" {
                        // Play the variation out to resolve each SAN in
                        // its own position, then rewind.
                        let mut variation = Vec::new();
                        for token in operand.split_whitespace() {
                            let mv = board.parse_xboard(token)?;
                            variation.push(mv);
                            board.push(mv);
                        }
                        while board.pop().is_some() {}
                        EpdOperand::Moves(variation)
                    } else if opcode == "am" || opcode == "bm" {
                        let mut moves = Vec::new();
                        for token in operand.split_whitespace() {
                            moves.push(board.parse_xboard(token)?);
                        }
                        EpdOperand::Moves(moves)
                    } else {
                        EpdOperand::Move(board.parse_xboard(operand.trim())?)
                    };
                    operations.push((std::mem::take(&mut opcode), value));
                    operand.clear();
                    state = ScanState::Opcode;
                }
                Some(c) => operand.push(c),
            },
        }
    }

    Ok(operations)
}
