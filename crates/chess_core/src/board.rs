use std::fmt;

use crate::{error::ChessError, movegen, types::*};

/// Reduced FEN of the standard initial arrangement.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An immutable chess position: 8x8 grid plus side to move.
///
/// There are no castling rights, en-passant target or move clocks. Every
/// change goes through [`Position::apply_move`], which returns a new value and
/// leaves `self` untouched, so search branches never observe each other.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    grid: [[Option<Piece>; 8]; 8],
    side_to_move: Color,
}

impl Position {
    /// A board with no pieces.
    pub fn empty(side_to_move: Color) -> Self {
        Position {
            grid: [[None; 8]; 8],
            side_to_move,
        }
    }

    pub fn start_position() -> Self {
        let mut p = Position::empty(Color::White);
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            p.grid[0][col] = Some(Piece::new(Color::Black, kind));
            p.grid[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.grid[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.grid[7][col] = Some(Piece::new(Color::White, kind));
        }
        p
    }

    /// Parses the board and side-to-move fields of a FEN string.
    ///
    /// Any further fields are ignored. A side token other than `w` selects
    /// Black. Piece counts and king presence are not validated.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(ChessError::FenFieldCount {
                fen: fen.to_string(),
            });
        }

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != 8 {
            return Err(ChessError::FenRowCount {
                fen: fen.to_string(),
                rows: rows.len(),
            });
        }

        let side_to_move = if parts[1] == "w" {
            Color::White
        } else {
            Color::Black
        };
        let mut p = Position::empty(side_to_move);

        for (row, row_str) in rows.iter().enumerate() {
            let mut cells = 0usize;
            for ch in row_str.chars() {
                if let Some(run) = ch.to_digit(10) {
                    cells += run as usize;
                    continue;
                }
                let piece = Piece::from_symbol(ch).ok_or(ChessError::InvalidPiece(ch))?;
                if cells < 8 {
                    p.grid[row][cells] = Some(piece);
                }
                cells += 1;
            }
            if cells != 8 {
                return Err(ChessError::FenRowWidth {
                    row: row_str.to_string(),
                    cells,
                });
            }
        }
        Ok(p)
    }

    pub fn to_fen(&self) -> String {
        let mut rows = Vec::with_capacity(8);
        for row in &self.grid {
            let mut out = String::new();
            let mut empty = 0;
            for cell in row {
                match cell {
                    None => empty += 1,
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.symbol());
                    }
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {}", rows.join("/"), side)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Piece on `sq`; off-board squares are empty.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.grid[sq.row as usize][sq.col as usize]
    }

    pub fn is_on_board(&self, sq: Square) -> bool {
        sq.is_on_board()
    }

    /// Returns the position after `mv`.
    ///
    /// The origin is cleared and the destination receives the moving piece,
    /// or the promotion piece in the mover's color. With `switch_turn` false
    /// the side to move is kept, which is how the legality filter probes a
    /// move without passing the turn. Both squares must be on the board.
    pub fn apply_move(&self, mv: Move, switch_turn: bool) -> Position {
        let mut next = self.clone();
        let moved = next.grid[mv.from.row as usize][mv.from.col as usize].take();
        let placed = moved.map(|pc| match mv.promotion {
            Some(kind) => Piece::new(pc.color, kind),
            None => pc,
        });
        next.grid[mv.to.row as usize][mv.to.col as usize] = placed;
        if switch_turn {
            next.side_to_move = self.side_to_move.opposite();
        }
        next
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        let king = Piece::new(c, PieceKind::King);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// True if any pseudo-legal move of the opponent lands on `c`'s king.
    ///
    /// A side without a king counts as being in check.
    pub fn is_in_check(&self, c: Color) -> bool {
        let Some(ksq) = self.king_square(c) else {
            return true;
        };
        let mut replies = Vec::with_capacity(64);
        movegen::pseudo_moves(self, c.opposite(), &mut replies);
        replies.iter().any(|mv| mv.to == ksq)
    }

    pub fn is_checkmate(&self, c: Color) -> bool {
        self.is_in_check(c) && movegen::generate_legal_moves(self, Some(c)).is_empty()
    }

    pub fn is_stalemate(&self, c: Color) -> bool {
        !self.is_in_check(c) && movegen::generate_legal_moves(self, Some(c)).is_empty()
    }

    /// Text grid: one line per rank, then a file footer.
    pub fn to_ascii(&self) -> String {
        let mut lines = Vec::with_capacity(9);
        for (row, cells) in self.grid.iter().enumerate() {
            let symbols: Vec<String> = cells
                .iter()
                .map(|cell| cell.map_or('.', Piece::symbol).to_string())
                .collect();
            lines.push(format!("{}  {}", 8 - row, symbols.join(" ")));
        }
        lines.push("   a b c d e f g h".to_string());
        lines.join("\n")
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start_position()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
