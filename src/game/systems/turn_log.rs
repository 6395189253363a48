use bevy::prelude::*;
use tracing::info;

use crate::game::events::MoveApplied;
use crate::game::resources::TurnEngine;
use crate::game::types::PieceColor;

/// Log applied moves and every hand-over of the turn
pub fn announce_turn_changes(
    mut moves: MessageReader<MoveApplied>,
    engine: Res<TurnEngine>,
    mut last_player: Local<Option<PieceColor>>,
) {
    for MoveApplied(record) in moves.read() {
        info!(
            "[TURN] {} {} {} -> {}{}",
            record.color,
            record.piece_id,
            record.from,
            record.to,
            if record.promoted { ", crowned" } else { "" }
        );
    }

    let current = engine.state().current_player();
    if *last_player != Some(current) {
        info!("[TURN] {} to move", current);
        *last_player = Some(current);
    }
}
