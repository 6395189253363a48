use bevy::prelude::*;
use tracing::debug;

use crate::game::events::{MoveApplied, PickEvent, SelectionChanged};
use crate::game::resources::TurnEngine;
use crate::game::rules::PickOutcome;

/// Drain pick events in arrival order and run each through the state machine
///
/// Emits [`SelectionChanged`] whenever the highlight set changes and
/// [`MoveApplied`] for every applied move. Ignored picks produce nothing.
pub fn process_pick_events(
    mut picks: MessageReader<PickEvent>,
    mut engine: ResMut<TurnEngine>,
    mut moves: MessageWriter<MoveApplied>,
    mut selection_changes: MessageWriter<SelectionChanged>,
) {
    for pick in picks.read() {
        let outcome = engine.handle_pick(pick);

        match outcome {
            PickOutcome::Ignored => {
                debug!("[INPUT] Ignored pick {:?}", pick);
            }
            PickOutcome::Selected {
                piece_id,
                candidates,
            } => {
                debug!(
                    "[INPUT] Selected {} with {} candidate moves",
                    piece_id,
                    candidates.len()
                );
                selection_changes.write(SelectionChanged {
                    piece_id: Some(piece_id),
                    highlights: candidates,
                });
            }
            PickOutcome::Deselected => {
                debug!("[INPUT] Selection cleared");
                selection_changes.write(SelectionChanged {
                    piece_id: None,
                    highlights: Default::default(),
                });
            }
            PickOutcome::Moved(record) => {
                debug!(
                    "[INPUT] {} moved {} -> {}{}",
                    record.piece_id,
                    record.from,
                    record.to,
                    if record.promoted { " (crowned)" } else { "" }
                );
                selection_changes.write(SelectionChanged {
                    piece_id: None,
                    highlights: Default::default(),
                });
                moves.write(MoveApplied(record));
            }
        }
    }
}
