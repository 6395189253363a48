//! Board lookup tables
//!
//! Resolves board coordinates to squares and squares to the pieces standing on
//! them, so a front-end can turn whatever it picked into a [`PickEvent`]
//! without tagging its own scene objects.
//!
//! [`PickEvent`]: crate::game::events::PickEvent

use std::collections::HashMap;

use crate::game::components::{GameState, Piece};
use crate::game::error::{GameError, GameResult};
use crate::game::types::{Board, PieceId, Square};

/// Every cell of both boards, keyed by `(row, col, board)`
#[derive(Debug, Clone)]
pub struct BoardLookup {
    bounds: u8,
    squares: HashMap<(u8, u8, Board), Square>,
}

impl BoardLookup {
    pub fn new(bounds: u8) -> Self {
        let squares = [Board::Lower, Board::Upper]
            .into_iter()
            .flat_map(|board| {
                (0..bounds).flat_map(move |row| {
                    (0..bounds).map(move |col| ((row, col, board), Square::new(row, col, board)))
                })
            })
            .collect();
        Self { bounds, squares }
    }

    pub fn bounds(&self) -> u8 {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn square_at(&self, row: u8, col: u8, board: Board) -> Option<Square> {
        self.squares.get(&(row, col, board)).copied()
    }

    /// Like [`square_at`](Self::square_at) but with an error for typed input
    pub fn resolve(&self, row: u8, col: u8, board: Board) -> GameResult<Square> {
        self.square_at(row, col, board).ok_or(GameError::InvalidSquare {
            row,
            col,
            bounds: self.bounds,
        })
    }

    /// Dark squares of one board in row-major order
    pub fn playable_squares(&self, board: Board) -> Vec<Square> {
        let mut squares: Vec<Square> = self
            .squares
            .values()
            .filter(|sq| sq.board == board && sq.is_playable())
            .copied()
            .collect();
        squares.sort();
        squares
    }
}

/// Pieces standing on `square`. Occupancy is not exclusive, so this can hold
/// more than one piece.
pub fn pieces_on(state: &GameState, square: Square) -> Vec<&Piece> {
    state.pieces().filter(|p| p.position == square).collect()
}

pub fn is_empty(state: &GameState, square: Square) -> bool {
    !state.pieces().any(|p| p.position == square)
}

/// Look up a piece by id, with an error for typed input
pub fn find_piece<'a>(state: &'a GameState, id: &PieceId) -> GameResult<&'a Piece> {
    state.piece(id).ok_or_else(|| GameError::PieceNotFound {
        id: id.to_string(),
    })
}
