//! Procedural card and deck generation.

use im::Vector;

use super::card::{Card, CardId, Power, Rarity};
use crate::core::rng::{GameRng, RandomSource};

/// Lowest power on any side.
pub const MIN_POWER: u8 = 1;

/// Highest power on any side.
pub const MAX_POWER: u8 = 9;

/// Ordered cards, drawn from the front.
pub type Deck = Vector<Card>;

/// Generates cards with fresh ids from a random source.
///
/// Ids start at 0 and are never reused by the same generator, so every
/// card in a deck is distinct even when titles collide.
#[derive(Clone, Debug)]
pub struct CardGenerator<R = GameRng> {
    source: R,
    next_id: u32,
}

impl<R: RandomSource> CardGenerator<R> {
    /// Create a generator drawing from `source`.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self { source, next_id: 0 }
    }

    /// Generate one card.
    pub fn generate_card(&mut self) -> Card {
        let id = CardId::new(self.next_id);
        self.next_id += 1;

        let title = self.source.capitalized_word();
        let roll = self.source.int_in(0..=3);
        debug_assert!(roll <= 3, "random source returned rarity {roll} outside 0..=3");
        let rarity = Rarity::from_index(roll.min(3) as u8).unwrap_or(Rarity::Common);
        let mut sides = [0u8; 4];
        for side in &mut sides {
            *side = self.source.int_in(MIN_POWER as u32..=MAX_POWER as u32) as u8;
        }

        Card::new(id, title, rarity, Power(sides))
    }

    /// Generate `size` independent cards.
    pub fn generate_deck(&mut self, size: usize) -> Deck {
        (0..size).map(|_| self.generate_card()).collect()
    }

    /// Number of cards generated so far.
    #[must_use]
    pub fn generated(&self) -> u32 {
        self.next_id
    }
}
