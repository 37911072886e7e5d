//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use card_slots::{Board, Card, CardId, DealPolicy, Deck, GameState, Power, Rarity};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A card with a fixed power diamond.
pub fn card(id: u32, title: &str) -> Card {
    Card::new(CardId::new(id), title, Rarity::Uncommon, Power::new(5, 5, 5, 5))
}

/// A dealt state from explicit titles; ids follow title order.
pub fn dealt(titles: &[&str], hand: usize, board: usize) -> GameState {
    let deck: Deck = titles
        .iter()
        .enumerate()
        .map(|(i, title)| card(i as u32, title))
        .collect();

    GameState::new(deck, Board::build(board))
        .deal(hand, DealPolicy::Strict)
        .unwrap()
}
