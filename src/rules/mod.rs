//! Rules layer over `GameState`.
//!
//! `Rules` defines:
//! - Legal actions for each state
//! - Which attempts are ignored and which are errors
//!
//! `PlacementRules` is the select / deselect / play protocol.

pub mod engine;
pub mod placement;

pub use engine::{IgnoreReason, Rules, Step};
pub use placement::{Phase, PlacementRules};
