//! Card records.
//!
//! A `Card` is immutable once generated. Identity is the `CardId` assigned
//! at generation time; titles are display text and may repeat.

use serde::{Deserialize, Serialize};

/// Unique identifier for a generated card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card rarity, ordered from most to least common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// All rarities by index.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    /// Rarity for index 0..=3.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Numeric rarity (0..=3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Symbol printed in the card corner.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Rarity::Common => '●',
            Rarity::Uncommon => '■',
            Rarity::Rare => '⯁',
            Rarity::Legendary => '★',
        }
    }
}

/// Four directional power values, each 1..=9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Power(pub [u8; 4]);

impl Power {
    /// Create a power diamond from its four sides.
    #[must_use]
    pub const fn new(top: u8, right: u8, bottom: u8, left: u8) -> Self {
        Self([top, right, bottom, left])
    }

    #[must_use]
    pub const fn top(self) -> u8 {
        self.0[0]
    }

    #[must_use]
    pub const fn right(self) -> u8 {
        self.0[1]
    }

    #[must_use]
    pub const fn bottom(self) -> u8 {
        self.0[2]
    }

    #[must_use]
    pub const fn left(self) -> u8 {
        self.0[3]
    }
}

/// A generated card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity, used for every lookup and removal.
    pub id: CardId,

    /// Capitalized pseudo-word. Not unique.
    pub title: String,

    pub rarity: Rarity,

    pub power: Power,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(id: CardId, title: impl Into<String>, rarity: Rarity, power: Power) -> Self {
        Self {
            id,
            title: title.into(),
            rarity,
            power,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [top, right, bottom, left] = self.power.0;
        write!(
            f,
            "{} {} [{top} {right} {bottom} {left}]",
            self.rarity.symbol(),
            self.title
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Card(5)");
    }

    #[test]
    fn test_rarity_index_round_trip() {
        for (i, rarity) in Rarity::ALL.iter().enumerate() {
            assert_eq!(rarity.index() as usize, i);
            assert_eq!(Rarity::from_index(i as u8), Some(*rarity));
        }
        assert_eq!(Rarity::from_index(4), None);
    }

    #[test]
    fn test_rarity_symbols() {
        assert_eq!(Rarity::Common.symbol(), '●');
        assert_eq!(Rarity::Legendary.symbol(), '★');
    }

    #[test]
    fn test_power_sides() {
        let power = Power::new(1, 2, 3, 4);
        assert_eq!(power.top(), 1);
        assert_eq!(power.right(), 2);
        assert_eq!(power.bottom(), 3);
        assert_eq!(power.left(), 4);
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardId::new(1), "Vekto", Rarity::Rare, Power::new(9, 1, 5, 3));
        assert_eq!(format!("{}", card), "⯁ Vekto [9 1 5 3]");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId::new(1), "Ba", Rarity::Common, Power::new(1, 1, 1, 1));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
