//! Core engine types: state, actions, errors, RNG, configuration.
//!
//! This module holds the transition engine. Everything here is pure and
//! synchronous; the session layer decides what to log and what to show.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{DealPolicy, GameConfig, DEFAULT_MAX_UNDO, MAX_BOARD_SIZE};
pub use error::{GameError, GameResult};
pub use player::PlayerId;
pub use rng::{GameRng, RandomSource};
pub use state::GameState;
