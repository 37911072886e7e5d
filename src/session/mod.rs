//! Session layer: the boundary between the core and the host.
//!
//! ## Key Types
//!
//! - `InputEvent`: What the pointer hit, already resolved to indices
//! - `Session`: Owns the current `GameState`, history and undo
//! - `GameView`: Read-only snapshot for the renderer
//! - `Update`: Redraw with a new view, or nothing happened

pub mod controller;
pub mod event;
pub mod view;

pub use controller::{Session, Update};
pub use event::InputEvent;
pub use view::{GameView, HandCardView, SlotView};
