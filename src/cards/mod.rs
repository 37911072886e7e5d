//! Card system: records and procedural generation.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque identity assigned at generation
//! - `Card`: Title, rarity and four-sided power
//! - `CardGenerator`: Builds cards and decks from a `RandomSource`
//!
//! ## Duplicate Titles
//!
//! Titles are random words and can collide. Nothing looks cards up by
//! title; hand removal and selection go through `CardId`.

pub mod card;
pub mod generator;

pub use card::{Card, CardId, Power, Rarity};
pub use generator::{CardGenerator, Deck, MAX_POWER, MIN_POWER};
