//! Board layout: the N x N slot grid.
//!
//! ## Key Types
//!
//! - `Position`: `(row, col)` address
//! - `Slot`: Position, owner tag and optional card
//! - `Board`: Passive grid factory with bounds-checked addressing
//!
//! The board never mutates itself; `GameState` produces new boards when a
//! card is played.

pub mod layout;

pub use layout::{build_board, Board, Position, Slot};
