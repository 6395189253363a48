//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Commands** - Reset, mode and difficulty changes
//! 2. **Picking** - Pick events through the selection state machine
//! 3. **Publish** - Logging and other read-only consumers
//!
//! Commands run first so a reset queued alongside picks clears the board before
//! those picks are evaluated.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum CheckersSystems {
    /// UI commands
    Commands,

    /// Pick handling; the only set that moves pieces
    Picking,

    /// Read-only consumers of the new state
    Publish,
}
