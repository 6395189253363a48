//! Checker movement rules
//!
//! Pure functions with no side effects: a piece goes in, the set of squares it
//! may move to comes out. Destination occupancy is deliberately not checked and
//! no jumps are generated.

use crate::game::components::Piece;
use crate::game::types::{Board, CandidateMoves, PieceColor, Square, BOARD_SIZE};

const RED_STEPS: [(i8, i8); 2] = [(1, 1), (1, -1)];
const BLACK_STEPS: [(i8, i8); 2] = [(-1, 1), (-1, -1)];
const KING_STEPS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Diagonal steps available to a piece. Men only go forward; kings go both ways.
pub fn step_directions(piece: &Piece) -> &'static [(i8, i8)] {
    if piece.is_king {
        &KING_STEPS
    } else {
        match piece.color {
            PieceColor::Red => &RED_STEPS,
            PieceColor::Black => &BLACK_STEPS,
        }
    }
}

/// Whether a piece may jump to the other board from where it stands
///
/// Kings always can. A man needs to be within two rows of the boundary: the
/// last two rows of the Lower board or the first two of the Upper board.
pub fn can_cross(piece: &Piece, bounds: u8) -> bool {
    if piece.is_king {
        return true;
    }
    match piece.position.board {
        Board::Lower => piece.position.row >= bounds.saturating_sub(2),
        Board::Upper => piece.position.row <= 1,
    }
}

/// Landing square of a crossing move, if it is a dark one
///
/// Lower pieces land on row 0 of Upper, Upper pieces on the last row of Lower.
/// The column never changes.
pub fn crossing_square(from: Square, bounds: u8) -> Option<Square> {
    let row = match from.board {
        Board::Lower => 0,
        Board::Upper => bounds.saturating_sub(1),
    };
    let target = Square::new(row, from.col, from.board.opposite());
    (target.in_bounds(bounds) && target.is_playable()).then_some(target)
}

/// Get all destinations for a piece on `bounds`×`bounds` boards
pub fn generate_moves(piece: &Piece, bounds: u8) -> CandidateMoves {
    let from = piece.position;

    let mut moves: CandidateMoves = step_directions(piece)
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col, bounds))
        .filter(|sq| sq.is_playable())
        .collect();

    if can_cross(piece, bounds) {
        moves.extend(crossing_square(from, bounds));
    }

    moves
}

/// [`generate_moves`] on the standard 8×8 boards
pub fn possible_moves(piece: &Piece) -> CandidateMoves {
    generate_moves(piece, BOARD_SIZE)
}

/// Check if a single destination is legal for a piece
pub fn is_valid_move(piece: &Piece, to: Square, bounds: u8) -> bool {
    generate_moves(piece, bounds).contains(&to)
}
