use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameMode};
use crate::game::components::MoveRecord;
use crate::game::types::{Board, CandidateMoves, PieceId, Square};

/// Something the presentation layer resolved a click to
#[derive(Message, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickEvent {
    Piece { id: PieceId },
    Square { square: Square },
    Empty,
}

impl PickEvent {
    pub fn piece(id: impl Into<PieceId>) -> Self {
        PickEvent::Piece { id: id.into() }
    }

    pub fn square(row: u8, col: u8, board: Board) -> Self {
        PickEvent::Square {
            square: Square::new(row, col, board),
        }
    }
}

/// UI controls outside the pick flow
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCommand {
    Reset,
    SetMode(GameMode),
    SetDifficulty(Difficulty),
}

#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct MoveApplied(pub MoveRecord);

/// Selection or highlight set changed; renderers redraw highlights from this
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub piece_id: Option<PieceId>,
    pub highlights: CandidateMoves,
}
