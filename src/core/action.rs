//! Player actions and their history records.
//!
//! Actions are already resolved to abstract indices: the input layer has
//! turned pointer coordinates into a hand index or a board position.
//! Indices are signed because a hit-test miss may report `-1`.

use serde::{Deserialize, Serialize};

use crate::board::Position;

/// A placement-protocol action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Select the hand card at `hand_index`.
    Select { hand_index: i32 },
    /// Drop the current selection.
    Deselect,
    /// Play the selected card onto `position`.
    Play { position: Position },
}

impl Action {
    /// Shorthand for `Action::Select`.
    #[must_use]
    pub const fn select(hand_index: i32) -> Self {
        Self::Select { hand_index }
    }

    /// Shorthand for `Action::Play` at `(row, col)`.
    #[must_use]
    pub const fn play(row: i32, col: i32) -> Self {
        Self::Play {
            position: Position::new(row, col),
        }
    }
}

/// An applied action with its position in the session history.
///
/// Used for:
/// - Undo bookkeeping
/// - Replay/debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position of this action in the session's applied sequence (starts at 0).
    ///
    /// Undo hands the number back, so the live history never has gaps.
    pub sequence: u32,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(sequence: u32, action: Action) -> Self {
        Self { sequence, action }
    }
}
