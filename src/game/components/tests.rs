//! Component module unit tests
//!
//! Components are pure data, so these tests check construction, defaults and
//! the derived views (selected id, highlights, snapshot) rather than rules.

use super::*;
use crate::game::types::{Board, CandidateMoves, PieceColor, PieceId, Square, BOARD_SIZE};

// ============================================================================
// GameState Construction Tests
// ============================================================================

#[test]
fn test_game_state_default() {
    //! A new session starts idle with Red to move and nothing played yet
    let state = GameState::default();

    assert_eq!(state.current_player(), PieceColor::Red, "Red should move first");
    assert_eq!(state.selected_piece_id(), None);
    assert_eq!(state.board_size(), BOARD_SIZE);
    assert!(!state.game_started());
    assert!(state.history().is_empty());
    assert_eq!(state.piece_count(), 24);
}

#[test]
fn test_with_pieces_drops_light_squares() {
    //! Custom positions must still respect the dark-square invariant
    let state = GameState::with_pieces(
        BOARD_SIZE,
        PieceColor::Black,
        vec![
            Piece::new("dark", PieceColor::Red, Square::new(2, 3, Board::Lower)),
            Piece::new("light", PieceColor::Red, Square::new(2, 2, Board::Lower)),
            Piece::new("outside", PieceColor::Red, Square::new(9, 0, Board::Upper)),
        ],
    );

    assert_eq!(state.piece_count(), 1);
    assert!(state.piece(&PieceId::from("dark")).is_some());
    assert_eq!(state.current_player(), PieceColor::Black);
}

// ============================================================================
// SelectionState Tests
// ============================================================================

#[test]
fn test_selection_state_default_is_idle() {
    let selection = SelectionState::default();
    assert_eq!(selection, SelectionState::Idle);
    assert!(!selection.is_selected());
    assert_eq!(selection.piece_id(), None);
}

#[test]
fn test_highlights_follow_selection() {
    //! The highlight set is exactly the candidate set of the selection
    let mut state = GameState::default();
    assert!(state.highlights().is_empty(), "Idle state has no highlights");

    let candidates: CandidateMoves = [Square::new(3, 2, Board::Lower)].into_iter().collect();
    state.selection = SelectionState::Selected {
        piece_id: PieceId::from("red_2_3"),
        candidates: candidates.clone(),
    };

    assert_eq!(state.highlights(), candidates);
    assert_eq!(state.selected_piece_id(), Some(&PieceId::from("red_2_3")));
}

// ============================================================================
// MoveRecord / Snapshot Tests
// ============================================================================

#[test]
fn test_move_record_serializes_crossing_flag() {
    //! History entries carry the crossing flag so JSON consumers see it
    let record = MoveRecord {
        piece_id: PieceId::from("red_6_1"),
        color: PieceColor::Red,
        from: Square::new(6, 1, Board::Lower),
        to: Square::new(0, 1, Board::Upper),
        promoted: false,
        crossed_boards: true,
    };

    let json = serde_json::to_string(&record).expect("record should serialize");
    assert!(json.contains("\"crossed_boards\":true"));

    let back: MoveRecord = serde_json::from_str(&json).expect("record should deserialize");
    assert!(back.crossed_boards);
}

#[test]
fn test_snapshot_matches_state() {
    let state = GameState::default();
    let snapshot = state.snapshot();

    assert_eq!(snapshot.current_player, PieceColor::Red);
    assert_eq!(snapshot.selected_piece_id, None);
    assert_eq!(snapshot.pieces.len(), 24);
    assert!(snapshot.highlights.is_empty());
    assert_eq!(snapshot.move_count, 0);
}

#[test]
fn test_snapshot_serializes_lowercase_enums() {
    let snapshot = GameState::default().snapshot();
    let json = serde_json::to_string(&snapshot).expect("snapshot should serialize");

    assert!(json.contains("\"current_player\":\"red\""));
    assert!(json.contains("\"board\":\"lower\""));
    assert!(json.contains("\"id\":\"red_0_1\""));
}

#[test]
fn test_piece_crowned() {
    let piece = Piece::new("red_0_1", PieceColor::Red, Square::new(0, 1, Board::Lower));
    assert!(!piece.is_king);
    assert!(piece.crowned().is_king);
}
