//! Turning a clicked square into a pick event
//!
//! A click on a square that holds a piece selects the piece, the same way a
//! 3D pick ray hits the piece mesh before the square under it. Own pieces win
//! when several share a square.

use crate::game::components::GameState;
use crate::game::events::PickEvent;
use crate::game::rules::board_state::pieces_on;
use crate::game::types::Square;

pub fn resolve_click(state: &GameState, square: Square) -> PickEvent {
    let occupants = pieces_on(state, square);
    let chosen = occupants
        .iter()
        .find(|p| p.color == state.current_player())
        .or_else(|| occupants.first());

    match chosen {
        Some(piece) => PickEvent::Piece {
            id: piece.id.clone(),
        },
        None => PickEvent::Square { square },
    }
}
