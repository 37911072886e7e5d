//! Game state: the authoritative snapshot.
//!
//! ## GameState
//!
//! - Deck (drawn from the front)
//! - Hand (ordered)
//! - Board (N x N slots)
//! - Selected card (by id, always a hand card)
//!
//! Every transition takes `&self` and returns a new `GameState`. The
//! containers are `im` persistent structures, so a new snapshot shares
//! everything it did not change and old snapshots stay valid for undo.
//! A failed transition returns `Err` and the caller still holds the
//! untouched previous snapshot.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::Action;
use super::config::{DealPolicy, GameConfig};
use super::error::{GameError, GameResult};
use super::player::PlayerId;
use super::rng::RandomSource;
use crate::board::{Board, Position, Slot};
use crate::cards::{Card, CardGenerator, CardId, Deck};

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    deck: Deck,
    hand: Vector<Card>,
    board: Board,
    selected: Option<CardId>,

    /// Cards in play at creation; conserved by every transition.
    initial_cards: usize,
}

impl GameState {
    /// Create an undealt state from an explicit deck and board.
    ///
    /// Cards already on the board count towards the conserved total.
    #[must_use]
    pub fn new(deck: Deck, board: Board) -> Self {
        let initial_cards = deck.len() + board.occupied_count();
        Self {
            deck,
            hand: Vector::new(),
            board,
            selected: None,
            initial_cards,
        }
    }

    /// Build the opening state: empty board, generated deck, dealt hand.
    pub fn initialize<R: RandomSource>(
        config: &GameConfig,
        generator: &mut CardGenerator<R>,
    ) -> GameResult<Self> {
        config.validate()?;

        let board = Board::build(config.board_size);
        let deck = generator.generate_deck(config.deck_size);

        Self::new(deck, board).deal(config.hand_size, config.deal_policy)
    }

    // === Accessors ===

    /// Remaining deck, front first.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Hand in order.
    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Id of the selected card.
    #[must_use]
    pub fn selected_id(&self) -> Option<CardId> {
        self.selected
    }

    /// The selected card.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        let index = self.selected_index()?;
        self.hand.get(index)
    }

    /// Hand index of the selected card.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.hand.iter().position(|card| card.id == id)
    }

    /// Cards conserved across every transition.
    #[must_use]
    pub fn initial_cards(&self) -> usize {
        self.initial_cards
    }

    /// Cards in deck + hand + board.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.board.occupied_count()
    }

    /// Check the structural invariants.
    ///
    /// - Card count equals the initial count
    /// - No card id appears twice across deck, hand and board
    /// - A selected id refers to a hand card
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.total_cards() != self.initial_cards {
            return false;
        }

        let mut seen = FxHashSet::default();
        let placed = self.board.slots().filter_map(|slot| slot.card.as_ref());
        let all_unique = self
            .deck
            .iter()
            .chain(self.hand.iter())
            .chain(placed)
            .all(|card| seen.insert(card.id));

        all_unique && (self.selected.is_none() || self.selected_index().is_some())
    }

    // === Transitions ===

    /// Move `count` cards from the deck front to the hand end.
    pub fn deal(&self, count: usize, policy: DealPolicy) -> GameResult<Self> {
        let remaining = self.deck.len();
        let take = match policy {
            DealPolicy::Strict if count > remaining => {
                return Err(GameError::DeckExhausted {
                    requested: count,
                    remaining,
                });
            }
            DealPolicy::ShortHand if count > remaining => {
                debug!(requested = count, remaining, "dealing short hand");
                remaining
            }
            _ => count,
        };

        let mut dealt = self.deck.clone();
        let deck = dealt.split_off(take);
        let mut hand = self.hand.clone();
        hand.append(dealt);

        Ok(Self {
            deck,
            hand,
            ..self.clone()
        })
    }

    /// Select the hand card at `hand_index`.
    ///
    /// Replaces any current selection; refusing re-selection is the
    /// placement protocol's job.
    pub fn select_card(&self, hand_index: i32) -> GameResult<Self> {
        let index = self.hand_index(hand_index)?;
        let id = self.hand[index].id;

        Ok(Self {
            selected: Some(id),
            ..self.clone()
        })
    }

    /// Clear the selection. Idempotent.
    #[must_use]
    pub fn deselect_card(&self) -> Self {
        Self {
            selected: None,
            ..self.clone()
        }
    }

    /// Play the selected card onto `position`.
    ///
    /// The slot is claimed by the local player, the card leaves the hand
    /// and the selection clears.
    pub fn play_card(&self, position: Position) -> GameResult<Self> {
        let hand_index = self.selected_index().ok_or(GameError::NoCardSelected)?;

        let slot = self.board.slot(position)?;
        if !slot.is_empty() {
            return Err(GameError::SlotOccupied { position });
        }

        let mut hand = self.hand.clone();
        let card = hand.remove(hand_index);
        let board = self.board.with_slot(Slot {
            position,
            owner: PlayerId::LOCAL,
            card: Some(card),
        })?;

        Ok(Self {
            deck: self.deck.clone(),
            hand,
            board,
            selected: None,
            initial_cards: self.initial_cards,
        })
    }

    /// Apply `action` with no protocol checks.
    pub fn apply(&self, action: &Action) -> GameResult<Self> {
        match *action {
            Action::Select { hand_index } => self.select_card(hand_index),
            Action::Deselect => Ok(self.deselect_card()),
            Action::Play { position } => self.play_card(position),
        }
    }

    fn hand_index(&self, index: i32) -> GameResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.hand.len())
            .ok_or(GameError::InvalidIndex {
                index,
                len: self.hand.len(),
            })
    }
}
