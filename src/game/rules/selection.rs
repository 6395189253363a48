//! Click-driven selection state machine
//!
//! Consumes one [`PickEvent`] at a time and moves the session between `Idle`
//! and `Selected`:
//!
//! ```text
//! Idle ──own piece──▶ Selected(p, moves) ──candidate square──▶ Idle (move applied, turn flips)
//!                      │   ▲    │
//!                      │   └────┘ own piece: reselect
//!                      └──empty──▶ Idle (selection cleared, same player)
//! ```
//!
//! Everything else (opponent pieces, unknown ids, non-candidate squares) is
//! ignored and leaves the state exactly as it was.

use super::executor::{apply_move, MoveOutcome};
use super::piece_moves::generate_moves;
use crate::game::components::{GameState, MoveRecord, SelectionState};
use crate::game::events::PickEvent;
use crate::game::types::{CandidateMoves, PieceId, Square};

/// What a pick did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Nothing changed
    Ignored,
    /// A piece is now selected with these destinations
    Selected {
        piece_id: PieceId,
        candidates: CandidateMoves,
    },
    /// Selection cleared without a move
    Deselected,
    /// A move was applied and the turn passed
    Moved(MoveRecord),
}

impl PickOutcome {
    pub fn changed_state(&self) -> bool {
        !matches!(self, PickOutcome::Ignored)
    }
}

/// Feed one pick into the session
pub fn handle_pick(state: &mut GameState, event: &PickEvent) -> PickOutcome {
    match event {
        PickEvent::Piece { id } => select_piece(state, id),
        PickEvent::Square { square } => pick_square(state, *square),
        PickEvent::Empty => clear_selection(state),
    }
}

/// Select an own piece, replacing any earlier selection
pub fn select_piece(state: &mut GameState, id: &PieceId) -> PickOutcome {
    let Some(piece) = state.piece(id) else {
        return PickOutcome::Ignored;
    };
    if piece.color != state.current_player() {
        return PickOutcome::Ignored;
    }

    let candidates = generate_moves(piece, state.board_size());
    state.selection = SelectionState::Selected {
        piece_id: id.clone(),
        candidates: candidates.clone(),
    };

    PickOutcome::Selected {
        piece_id: id.clone(),
        candidates,
    }
}

fn pick_square(state: &mut GameState, square: Square) -> PickOutcome {
    let piece_id = match state.selection() {
        SelectionState::Selected { piece_id, candidates } if candidates.contains(&square) => {
            piece_id.clone()
        }
        _ => return PickOutcome::Ignored,
    };

    match apply_move(state, &piece_id, square) {
        MoveOutcome::Applied(record) => PickOutcome::Moved(record),
        MoveOutcome::Rejected(_) => PickOutcome::Ignored,
    }
}

/// Drop the current selection. Idle stays idle.
pub fn clear_selection(state: &mut GameState) -> PickOutcome {
    if !state.selection().is_selected() {
        return PickOutcome::Ignored;
    }
    state.selection = SelectionState::Idle;
    PickOutcome::Deselected
}
