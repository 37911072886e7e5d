//! # card-slots
//!
//! Headless core of a single-player card placement game: a deck is
//! generated, a hand is dealt, and the player selects cards and places
//! them onto an N x N board.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: Every transition returns a new
//!    `GameState`. Failures return `Err` and leave the old snapshot as is.
//!
//! 2. **Identity by id**: Cards carry a generated `CardId`; titles may
//!    repeat and are never used for lookup.
//!
//! 3. **No rendering coupling**: The host resolves pointer hits into
//!    `InputEvent`s and draws `GameView`s. The core never sees pixels.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `im` vectors make snapshots O(1) to
//!   clone, so the session keeps every prior state for undo.
//!
//! - **Deterministic Generation**: Decks come from a seeded ChaCha8 RNG
//!   behind the `RandomSource` trait.
//!
//! ## Modules
//!
//! - `core`: State, actions, errors, RNG, configuration
//! - `cards`: Card records and generation
//! - `board`: Slot grid and addressing
//! - `rules`: Placement protocol
//! - `session`: Input mapping, undo, renderer views

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, DealPolicy, GameConfig, GameError, GameResult, GameRng, GameState,
    PlayerId, RandomSource,
};

pub use crate::board::{build_board, Board, Position, Slot};

pub use crate::cards::{Card, CardGenerator, CardId, Deck, Power, Rarity};

pub use crate::rules::{IgnoreReason, Phase, PlacementRules, Rules, Step};

pub use crate::session::{GameView, InputEvent, Session, Update};
