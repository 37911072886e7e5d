//! Read-only snapshots handed to the renderer.
//!
//! A `GameView` is plain owned data: the renderer can keep it, diff it or
//! serialize it across a boundary without touching `GameState`.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::cards::Card;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::rules::Phase;

/// One hand card as drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCardView {
    pub card: Card,
    pub selected: bool,
}

/// One board slot as drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub position: Position,
    pub owner: PlayerId,
    pub card: Option<Card>,
    /// Empty slot while a card is selected: a legal drop target.
    pub highlighted: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub phase: Phase,
    pub deck_size: usize,
    pub hand: Vec<HandCardView>,
    /// Rows top to bottom, each left to right.
    pub board: Vec<Vec<SlotView>>,
    pub selected: Option<Card>,
}

impl GameView {
    /// Snapshot `state`.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let phase = Phase::of(state);
        let selected_id = state.selected_id();
        let targeting = phase == Phase::CardSelected;

        let hand: Vec<HandCardView> = state
            .hand()
            .iter()
            .map(|card| HandCardView {
                card: card.clone(),
                selected: Some(card.id) == selected_id,
            })
            .collect();

        let board = state.board();
        let rows: Vec<Vec<SlotView>> = (0..board.size())
            .map(|row| {
                board
                    .row(row)
                    .map(|slot| SlotView {
                        position: slot.position,
                        owner: slot.owner,
                        card: slot.card.clone(),
                        highlighted: targeting && slot.is_empty(),
                    })
                    .collect()
            })
            .collect();

        Self {
            phase,
            deck_size: state.deck_size(),
            hand,
            board: rows,
            selected: state.selected_card().cloned(),
        }
    }

    /// Number of highlighted slots.
    #[must_use]
    pub fn highlighted_count(&self) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|slot| slot.highlighted)
            .count()
    }
}
