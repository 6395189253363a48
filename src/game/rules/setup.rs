//! Initial piece layout

use std::collections::BTreeMap;

use crate::game::components::Piece;
use crate::game::types::{Board, PieceColor, PieceId, Square};

/// Rows each side fills at the start
pub const STARTING_ROWS: u8 = 3;

/// Red fills the dark squares of the first three Lower rows, Black the last
/// three Upper rows. Twelve pieces each on the standard board.
pub fn initial_pieces(board_size: u8) -> BTreeMap<PieceId, Piece> {
    let black_start = board_size.saturating_sub(STARTING_ROWS);

    let red = dark_squares(0..STARTING_ROWS.min(board_size), board_size, Board::Lower)
        .map(|sq| Piece::new(PieceId::for_start(PieceColor::Red, sq.row, sq.col), PieceColor::Red, sq));
    let black = dark_squares(black_start..board_size, board_size, Board::Upper)
        .map(|sq| Piece::new(PieceId::for_start(PieceColor::Black, sq.row, sq.col), PieceColor::Black, sq));

    red.chain(black).map(|piece| (piece.id.clone(), piece)).collect()
}

fn dark_squares(
    rows: std::ops::Range<u8>,
    board_size: u8,
    board: Board,
) -> impl Iterator<Item = Square> {
    rows.flat_map(move |row| (0..board_size).map(move |col| Square::new(row, col, board)))
        .filter(|sq| sq.is_playable())
}
