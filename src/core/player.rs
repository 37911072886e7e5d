//! Slot ownership tag.
//!
//! `PlayerId(0)` means unclaimed. The local player is `PlayerId(1)`.
//! Other values are reserved for an opponent that nothing populates yet.

use serde::{Deserialize, Serialize};

/// Player identifier used as a slot owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// No player controls the slot.
    pub const UNCLAIMED: Self = Self(0);

    /// The single human player.
    pub const LOCAL: Self = Self(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Check whether this is the unclaimed tag.
    #[must_use]
    pub const fn is_unclaimed(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unclaimed() {
            write!(f, "Unclaimed")
        } else {
            write!(f, "Player {}", self.0)
        }
    }
}
