//! Rules trait: legal actions and how they apply.
//!
//! A rules implementation sits between the session and `GameState`. It
//! decides which actions are legal in the current phase and turns
//! "legal but pointless" attempts into `Step::Ignored` instead of errors.

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::error::GameResult;
use crate::core::state::GameState;

/// Why an attempted action left the state unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Select while a card is already selected.
    AlreadySelected,
    /// Play onto a slot that already holds a card.
    SlotOccupied,
    /// Play or deselect with nothing selected.
    NothingSelected,
}

/// Outcome of applying an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The action produced a new snapshot.
    Advanced(GameState),
    /// The action was a non-event; keep the current snapshot.
    Ignored(IgnoreReason),
}

impl Step {
    /// The new snapshot, if any.
    #[must_use]
    pub fn into_state(self) -> Option<GameState> {
        match self {
            Step::Advanced(state) => Some(state),
            Step::Ignored(_) => None,
        }
    }
}

/// Rules trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: every action that would produce `Step::Advanced`
/// - `apply`: must not mutate `state`; errors are reserved for caller bugs
pub trait Rules {
    /// Enumerate all legal actions in `state`.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action.
    fn apply(&self, state: &GameState, action: &Action) -> GameResult<Step>;

    /// Check whether `action` is legal in `state`.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.legal_actions(state).contains(action)
    }
}
