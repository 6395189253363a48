//! King promotion

use crate::game::components::Piece;
use crate::game::types::{Board, PieceColor, Square, BOARD_SIZE};

/// King flag after `piece` lands on `destination`
///
/// Red is crowned on the last row of the Upper board, Black on row 0 of the
/// Lower board. A king stays a king.
pub fn promote(piece: &Piece, destination: Square) -> bool {
    promote_with_bounds(piece, destination, BOARD_SIZE)
}

pub fn promote_with_bounds(piece: &Piece, destination: Square, bounds: u8) -> bool {
    piece.is_king || reaches_crowning_row(piece.color, destination, bounds)
}

/// Far edge of the opposite board for each color
pub fn reaches_crowning_row(color: PieceColor, destination: Square, bounds: u8) -> bool {
    match color {
        PieceColor::Red => {
            destination.board == Board::Upper && destination.row + 1 == bounds
        }
        PieceColor::Black => destination.board == Board::Lower && destination.row == 0,
    }
}
