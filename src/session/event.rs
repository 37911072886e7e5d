//! Abstract input events produced by the hit-testing layer.

use serde::{Deserialize, Serialize};

/// What the pointer went down on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// A card in the hand, by hand index.
    HandCard(i32),
    /// A board slot.
    Slot { row: i32, col: i32 },
    /// Anywhere else.
    Elsewhere,
}
