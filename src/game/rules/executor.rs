//! Move execution
//!
//! Applies a move that the selection machine has already matched against the
//! candidate set, re-checking every precondition so direct callers get the
//! same guarantees. A rejected move leaves the state untouched.

use std::fmt;

use super::piece_moves::generate_moves;
use super::promotion::promote_with_bounds;
use crate::game::components::{GameState, MoveRecord, SelectionState};
use crate::game::types::{PieceId, Square};

/// Why a move was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The piece is not the current selection
    NotSelected,
    /// No piece carries this id
    UnknownPiece,
    /// The piece belongs to the player who is not on move
    WrongPlayer,
    /// The target is not among the piece's candidate squares
    NotACandidate,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::NotSelected => "piece is not selected",
            RejectReason::UnknownPiece => "unknown piece",
            RejectReason::WrongPlayer => "not this player's turn",
            RejectReason::NotACandidate => "square is not a legal destination",
        };
        f.write_str(text)
    }
}

/// Result of [`apply_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(MoveRecord),
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Move the selected piece to `target`, crown it if it earned it and pass the turn
pub fn apply_move(state: &mut GameState, piece_id: &PieceId, target: Square) -> MoveOutcome {
    if let Err(reason) = check_preconditions(state, piece_id, target) {
        return MoveOutcome::Rejected(reason);
    }

    let bounds = state.board_size;
    let Some(piece) = state.pieces.get_mut(piece_id) else {
        return MoveOutcome::Rejected(RejectReason::UnknownPiece);
    };

    let from = piece.position;
    let was_king = piece.is_king;
    piece.is_king = promote_with_bounds(piece, target, bounds);
    piece.position = target;

    let record = MoveRecord {
        piece_id: piece_id.clone(),
        color: piece.color,
        from,
        to: target,
        promoted: piece.is_king && !was_king,
        crossed_boards: from.board != target.board,
    };

    state.current_player = state.current_player.opposite();
    state.selection = SelectionState::Idle;
    state.game_started = true;
    state.history.push(record.clone());

    MoveOutcome::Applied(record)
}

fn check_preconditions(
    state: &GameState,
    piece_id: &PieceId,
    target: Square,
) -> Result<(), RejectReason> {
    if state.selected_piece_id() != Some(piece_id) {
        return Err(RejectReason::NotSelected);
    }
    let piece = state.piece(piece_id).ok_or(RejectReason::UnknownPiece)?;
    if piece.color != state.current_player {
        return Err(RejectReason::WrongPlayer);
    }
    if !generate_moves(piece, state.board_size).contains(&target) {
        return Err(RejectReason::NotACandidate);
    }
    Ok(())
}
