//! Game state components

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use crate::game::rules::setup::initial_pieces;
use crate::game::types::{CandidateMoves, PieceColor, PieceId, Square, BOARD_SIZE};

/// Where the click-driven selection currently stands
///
/// The candidate set lives next to the selected id so the two can never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected {
        piece_id: PieceId,
        candidates: CandidateMoves,
    },
}

impl SelectionState {
    pub fn piece_id(&self) -> Option<&PieceId> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Selected { piece_id, .. } => Some(piece_id),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionState::Selected { .. })
    }
}

/// One applied move, kept in [`GameState::history`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece_id: PieceId,
    pub color: PieceColor,
    pub from: Square,
    pub to: Square,
    pub promoted: bool,
    /// The move jumped between the Lower and Upper boards
    pub crossed_boards: bool,
}

/// Complete state of one game session
///
/// Fields are crate-private: the executor and the selection machine are the
/// only writers. Everything else goes through the accessors or a
/// [`GameSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) current_player: PieceColor,
    pub(crate) selection: SelectionState,
    pub(crate) pieces: BTreeMap<PieceId, Piece>,
    pub(crate) board_size: u8,
    pub(crate) game_started: bool,
    pub(crate) history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

impl GameState {
    /// Fresh game on `board_size`×`board_size` boards, Red to move
    pub fn new(board_size: u8) -> Self {
        Self::with_pieces(board_size, PieceColor::Red, initial_pieces(board_size).into_values())
    }

    /// Arbitrary position, used for puzzles and tests
    ///
    /// Pieces standing on light or out-of-range squares are dropped so the
    /// dark-square invariant holds from the start.
    pub fn with_pieces(
        board_size: u8,
        current_player: PieceColor,
        pieces: impl IntoIterator<Item = Piece>,
    ) -> Self {
        let pieces = pieces
            .into_iter()
            .filter(|p| p.position.in_bounds(board_size) && p.position.is_playable())
            .map(|p| (p.id.clone(), p))
            .collect();

        Self {
            current_player,
            selection: SelectionState::Idle,
            pieces,
            board_size,
            game_started: false,
            history: Vec::new(),
        }
    }

    /// Back to the initial layout with the same board size
    pub fn reset(&mut self) {
        *self = Self::new(self.board_size);
    }

    pub fn current_player(&self) -> PieceColor {
        self.current_player
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_piece_id(&self) -> Option<&PieceId> {
        self.selection.piece_id()
    }

    /// Squares to highlight for the current selection, empty when idle
    pub fn highlights(&self) -> CandidateMoves {
        match &self.selection {
            SelectionState::Idle => CandidateMoves::new(),
            SelectionState::Selected { candidates, .. } => candidates.clone(),
        }
    }

    pub fn piece(&self, id: &PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn game_started(&self) -> bool {
        self.game_started
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Read-only view handed to the presentation layer after each transition
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            current_player: self.current_player,
            selected_piece_id: self.selected_piece_id().cloned(),
            pieces: self.pieces.values().cloned().collect(),
            highlights: self.highlights().into_iter().collect(),
            game_started: self.game_started,
            move_count: self.history.len(),
        }
    }
}

/// Serializable state snapshot for renderers and the `json` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub current_player: PieceColor,
    pub selected_piece_id: Option<PieceId>,
    pub pieces: Vec<Piece>,
    pub highlights: Vec<Square>,
    pub game_started: bool,
    pub move_count: usize,
}
