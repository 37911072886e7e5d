//! Placement protocol: the select / deselect / play state machine.
//!
//! ```text
//!   Idle --select(i)--> CardSelected
//!   CardSelected --deselect--> Idle
//!   CardSelected --play(pos)--> Idle      (empty slot)
//!   CardSelected --play(pos)--> CardSelected   (occupied: ignored)
//!   CardSelected --select(i)--> CardSelected   (ignored)
//! ```

use serde::{Deserialize, Serialize};

use super::engine::{IgnoreReason, Rules, Step};
use crate::core::action::Action;
use crate::core::error::{GameError, GameResult};
use crate::core::state::GameState;

/// Protocol phase, derived from the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing selected.
    Idle,
    /// One hand card held, waiting for a target.
    CardSelected,
}

impl Phase {
    /// Phase of `state`.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        if state.selected_id().is_some() {
            Phase::CardSelected
        } else {
            Phase::Idle
        }
    }
}

/// The single-player placement rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlacementRules;

impl Rules for PlacementRules {
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        match Phase::of(state) {
            Phase::Idle => (0..state.hand().len() as i32).map(Action::select).collect(),
            Phase::CardSelected => std::iter::once(Action::Deselect)
                .chain(
                    state
                        .board()
                        .empty_positions()
                        .into_iter()
                        .map(|position| Action::Play { position }),
                )
                .collect(),
        }
    }

    fn apply(&self, state: &GameState, action: &Action) -> GameResult<Step> {
        let phase = Phase::of(state);

        match *action {
            Action::Select { .. } if phase == Phase::CardSelected => {
                Ok(Step::Ignored(IgnoreReason::AlreadySelected))
            }
            Action::Select { hand_index } => state.select_card(hand_index).map(Step::Advanced),
            Action::Deselect if phase == Phase::Idle => {
                Ok(Step::Ignored(IgnoreReason::NothingSelected))
            }
            Action::Deselect => Ok(Step::Advanced(state.deselect_card())),
            Action::Play { position } => match state.play_card(position) {
                Ok(next) => Ok(Step::Advanced(next)),
                Err(GameError::SlotOccupied { .. }) => Ok(Step::Ignored(IgnoreReason::SlotOccupied)),
                Err(GameError::NoCardSelected) => Ok(Step::Ignored(IgnoreReason::NothingSelected)),
                Err(err) => Err(err),
            },
        }
    }
}
