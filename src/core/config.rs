//! Game configuration.
//!
//! The three tunables (deck size, hand size, board size) plus the RNG seed
//! and the policy for dealing more cards than the deck holds.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Largest supported board edge. Tabletop layouts use 3 to 5.
pub const MAX_BOARD_SIZE: usize = 8;

/// Default number of undoable actions a session keeps.
pub const DEFAULT_MAX_UNDO: usize = 64;

fn default_max_undo() -> usize {
    DEFAULT_MAX_UNDO
}

/// What dealing does when the deck holds fewer cards than requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealPolicy {
    /// Refuse the deal with `GameError::DeckExhausted`.
    #[default]
    Strict,
    /// Deal whatever remains and leave the hand short.
    ShortHand,
}

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards generated into the deck at game start.
    pub deck_size: usize,

    /// Cards dealt from the deck front into the opening hand.
    pub hand_size: usize,

    /// Board edge length; the board has `board_size * board_size` slots.
    pub board_size: usize,

    /// Seed for card generation.
    /// Same seed produces the same deck.
    pub seed: u64,

    /// Behaviour when `hand_size` exceeds the cards left in the deck.
    #[serde(default)]
    pub deal_policy: DealPolicy,

    /// Undoable actions kept by a session; older ones are dropped.
    /// Zero disables undo.
    #[serde(default = "default_max_undo")]
    pub max_undo: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck_size: 10,
            hand_size: 4,
            board_size: 3,
            seed: 42,
            deal_policy: DealPolicy::Strict,
            max_undo: DEFAULT_MAX_UNDO,
        }
    }
}

impl GameConfig {
    /// Set the deck size.
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the board edge length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the generation seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the deal policy.
    #[must_use]
    pub fn with_deal_policy(mut self, policy: DealPolicy) -> Self {
        self.deal_policy = policy;
        self
    }

    /// Set how many actions a session can undo.
    #[must_use]
    pub fn with_max_undo(mut self, max_undo: usize) -> Self {
        self.max_undo = max_undo;
        self
    }

    /// Check that every size is positive and the board is small enough.
    ///
    /// `hand_size > deck_size` is not a config error; dealing reports it
    /// according to `deal_policy`.
    pub fn validate(&self) -> GameResult<()> {
        if self.deck_size == 0 {
            return Err(GameError::invalid_config("deck size must be positive"));
        }
        if self.hand_size == 0 {
            return Err(GameError::invalid_config("hand size must be positive"));
        }
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::invalid_config(format!(
                "board size must be in 1..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        Ok(())
    }
}
