use crate::{board::Position, error::ChessError, movegen::legal_moves, types::*};

/// File letter plus rank digit. Off-board squares render as `(row,col)`.
pub fn square_to_str(sq: Square) -> String {
    if !sq.is_on_board() {
        return format!("({},{})", sq.row, sq.col);
    }
    let f = (b'a' + sq.col as u8) as char;
    let r = (b'8' - sq.row as u8) as char;
    format!("{f}{r}")
}

pub fn str_to_square(s: &str) -> Result<Square, ChessError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(f), Some(r), None) => {
            square_from_chars(f, r).ok_or_else(|| ChessError::InvalidSquare(s.to_string()))
        }
        _ => Err(ChessError::InvalidSquare(s.to_string())),
    }
}

fn square_from_chars(f: char, r: char) -> Option<Square> {
    if !('a'..='h').contains(&f) || !('1'..='8').contains(&r) {
        return None;
    }
    let col = f as u8 - b'a';
    let rank = r as u8 - b'0';
    Some(Square::new(8 - rank as i8, col as i8))
}

impl Move {
    /// `<from><to>[<promo>]`, promotion letter always uppercase.
    pub fn to_long_algebraic(&self) -> String {
        let mut s = String::with_capacity(5);
        s.push_str(&square_to_str(self.from));
        s.push_str(&square_to_str(self.to));
        if let Some(kind) = self.promotion {
            s.push(kind.letter());
        }
        s
    }

    /// Parses `e2e4` / `e7e8q` style text. Surrounding whitespace is ignored.
    ///
    /// Only the syntax is checked; whether the move is playable is decided by
    /// matching against the legal moves (see [`parse_move`]).
    pub fn from_long_algebraic(text: &str) -> Result<Move, ChessError> {
        let s = text.trim();
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 && chars.len() != 5 {
            return Err(ChessError::InvalidMoveText(s.to_string()));
        }

        let from = square_from_chars(chars[0], chars[1])
            .ok_or_else(|| ChessError::InvalidSquare(chars[0..2].iter().collect()))?;
        let to = square_from_chars(chars[2], chars[3])
            .ok_or_else(|| ChessError::InvalidSquare(chars[2..4].iter().collect()))?;

        let promotion = match chars.get(4) {
            None => None,
            Some(&ch) => match PieceKind::from_letter(ch) {
                Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
                _ => return Err(ChessError::InvalidPromotion(ch)),
            },
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}

/// Resolves move text against the legal moves of the side to move.
///
/// Matching uses origin and destination only. When the matched move promotes
/// and the text names no piece, the first generated choice (queen) is taken;
/// a piece named for a non-promoting move is ignored.
pub fn parse_move(pos: &Position, text: &str) -> Result<Move, ChessError> {
    let wanted = Move::from_long_algebraic(text)?;

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == wanted.from && m.to == wanted.to)
        .map(|m| match (m.promotion, wanted.promotion) {
            (Some(_), Some(kind)) => Move::with_promotion(m.from, m.to, kind),
            _ => m,
        })
        .ok_or_else(|| ChessError::IllegalMove(wanted.to_long_algebraic()))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
