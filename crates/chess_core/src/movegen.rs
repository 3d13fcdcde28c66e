use crate::{board::Position, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Legal moves for `color`, or for the side to move when `color` is `None`.
///
/// Order is deterministic: origins are scanned a8..h1, then each piece's
/// fixed direction order. Callers should still treat the result as a set.
pub fn generate_legal_moves(pos: &Position, color: Option<Color>) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(pos, color.unwrap_or(pos.side_to_move()), &mut out);
    out
}

/// Legal moves for the side to move.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    generate_legal_moves(pos, None)
}

/// Generate all legal moves for `color` into the provided buffer.
pub fn legal_moves_into(pos: &Position, color: Color, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, color, out);

    // Probe each move without passing the turn and drop the ones that leave
    // the mover's own king attacked.
    out.retain(|&mv| !pos.apply_move(mv, false).is_in_check(color));
}

/// Appends every pseudo-legal move of `color` to `out`.
///
/// Pseudo-legal moves follow piece movement and occupancy rules but may leave
/// the mover's king in check. Check detection is built on this function, so it
/// must never consult legality itself.
pub fn pseudo_moves(pos: &Position, color: Color, out: &mut Vec<Move>) {
    for from in Square::all() {
        let pc = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != color {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, color, out),
            PieceKind::Knight => gen_steps(pos, from, color, out, &KNIGHT_DELTAS),
            PieceKind::Bishop => gen_slider(pos, from, color, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(pos, from, color, out, &ORTHOGONALS),
            PieceKind::Queen => gen_slider(pos, from, color, out, &QUEEN_DIRS),
            PieceKind::King => gen_steps(pos, from, color, out, &KING_DELTAS),
        }
    }
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    // Row 0 is rank 8, so White moves towards lower rows.
    let (dir, start_row, promo_row): (i8, i8, i8) = match c {
        Color::White => (-1, 6, 0),
        Color::Black => (1, 1, 7),
    };

    // forward 1
    let one = from.offset(dir, 0);
    if one.is_on_board() && pos.piece_at(one).is_none() {
        push_pawn_move(from, one, promo_row, out);

        // forward 2 from start, through the empty square above
        if from.row == start_row {
            let two = from.offset(2 * dir, 0);
            if two.is_on_board() && pos.piece_at(two).is_none() {
                out.push(Move::new(from, two));
            }
        }
    }

    // captures, no en-passant
    for dc in [-1, 1] {
        let to = from.offset(dir, dc);
        if let Some(target) = pos.piece_at(to)
            && target.color != c
        {
            push_pawn_move(from, to, promo_row, out);
        }
    }
}

fn push_pawn_move(from: Square, to: Square, promo_row: i8, out: &mut Vec<Move>) {
    if to.row == promo_row {
        for kind in PieceKind::PROMOTIONS {
            out.push(Move::with_promotion(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_steps(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        let to = from.offset(dr, dc);
        if !to.is_on_board() {
            continue;
        }
        match pos.piece_at(to) {
            None => out.push(Move::new(from, to)),
            Some(pc) if pc.color != c => out.push(Move::new(from, to)),
            _ => {}
        }
    }
}

fn gen_slider(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut to = from.offset(dr, dc);
        while to.is_on_board() {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            to = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
