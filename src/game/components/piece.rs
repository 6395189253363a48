//! Piece record

use serde::{Deserialize, Serialize};

use crate::game::types::{PieceColor, PieceId, Square};

/// A checker owned by the game session
///
/// Only the move executor changes `position` and `is_king`. Pieces are never
/// removed during play; a reset replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub color: PieceColor,
    pub position: Square,
    pub is_king: bool,
}

impl Piece {
    pub fn new(id: impl Into<PieceId>, color: PieceColor, position: Square) -> Self {
        Self {
            id: id.into(),
            color,
            position,
            is_king: false,
        }
    }

    /// Same piece, already crowned
    pub fn crowned(mut self) -> Self {
        self.is_king = true;
        self
    }
}
