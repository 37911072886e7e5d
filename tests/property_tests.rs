//! Invariants under arbitrary action sequences.
//!
//! - Card conservation
//! - At most one selection, always a hand card
//! - Ignored or failed actions leave the state untouched
//! - Deselect is idempotent

mod common;

use card_slots::{Action, GameConfig, GameError, Position, Session, Update};
use proptest::prelude::*;

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (-2i32..8).prop_map(Action::select),
        Just(Action::Deselect),
        (-1i32..5, -1i32..5).prop_map(|(row, col)| Action::play(row, col)),
    ]
}

fn config_strategy() -> impl Strategy<Value = GameConfig> {
    (any::<u64>(), 1usize..16, 1usize..6, 1usize..5).prop_map(|(seed, deck, hand, board)| {
        GameConfig::default()
            .with_seed(seed)
            .with_deck_size(deck.max(hand))
            .with_hand_size(hand)
            .with_board_size(board)
    })
}

proptest! {
    #[test]
    fn prop_invariants_hold(
        config in config_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..40),
    ) {
        common::init_logging();
        let mut session = Session::new(config.clone()).unwrap();

        for action in actions {
            let before = session.state().clone();

            match session.dispatch(action) {
                Ok(Update::Redraw(view)) => {
                    prop_assert_eq!(view.deck_size, session.state().deck_size());
                }
                Ok(Update::Unchanged(_)) | Err(_) => {
                    prop_assert_eq!(session.state(), &before);
                }
            }

            let state = session.state();
            prop_assert_eq!(state.total_cards(), config.deck_size);
            prop_assert!(state.is_consistent());

            let selected_in_hand = state
                .hand()
                .iter()
                .filter(|card| Some(card.id) == state.selected_id())
                .count();
            prop_assert_eq!(selected_in_hand, usize::from(state.selected_id().is_some()));
        }
    }

    #[test]
    fn prop_deselect_idempotent(
        config in config_strategy(),
        index in 0i32..6,
    ) {
        let session = Session::new(config).unwrap();
        let state = session.state();
        let start = state.select_card(index).unwrap_or_else(|_| state.clone());

        let once = start.deselect_card();
        let twice = once.deselect_card();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_occupied_play_is_atomic(
        seed in any::<u64>(),
        row in 0i32..3,
        col in 0i32..3,
    ) {
        let config = GameConfig::default().with_seed(seed).with_deck_size(10).with_hand_size(4);
        let session = Session::new(config).unwrap();
        let position = Position::new(row, col);

        let occupied = session
            .state()
            .select_card(0)
            .unwrap()
            .play_card(position)
            .unwrap()
            .select_card(0)
            .unwrap();

        let before = occupied.clone();

        let result = occupied.play_card(position);
        prop_assert_eq!(result, Err(GameError::SlotOccupied { position }));
        prop_assert_eq!(&occupied, &before);
        prop_assert_eq!(occupied.selected_index(), Some(0));
        prop_assert_eq!(occupied.hand().len(), 3);
    }
}
