//! Typed failures for every core transition.
//!
//! Two kinds of failure share this enum:
//! - **Non-events**: the player clicked something that does nothing
//!   (`SlotOccupied`, `NoCardSelected`). Callers normally ignore these.
//! - **Caller bugs**: indices that well-formed input never produces
//!   (`InvalidIndex`, `OutOfBounds`). Callers should log these.

use thiserror::Error;

use crate::board::Position;

/// Failure of a core operation. The input state is never modified.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Hand index outside `[0, len)`.
    #[error("hand index {index} out of range for a hand of {len}")]
    InvalidIndex { index: i32, len: usize },

    /// Board position outside `[0, size)` on either axis.
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    /// Play attempted with nothing selected.
    #[error("no card selected")]
    NoCardSelected,

    /// Play attempted on a slot that already holds a card.
    #[error("slot {position} already holds a card")]
    SlotOccupied { position: Position },

    /// Deal asked for more cards than the deck holds.
    #[error("deck exhausted: requested {requested}, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },

    /// Rejected `GameConfig`.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl GameError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// True for failures that are ordinary player clicks with no effect.
    #[must_use]
    pub fn is_non_event(&self) -> bool {
        matches!(self, Self::SlotOccupied { .. } | Self::NoCardSelected)
    }
}

/// Result alias for core operations.
pub type GameResult<T> = Result<T, GameError>;
