//! Placement scenarios.
//!
//! These tests drive `GameState` and `PlacementRules` end to end:
//! - Opening deal
//! - Select then play
//! - Occupied slots
//! - Duplicate titles

mod common;

use card_slots::{
    Action, CardGenerator, CardId, DealPolicy, GameConfig, GameError, GameRng, GameState,
    IgnoreReason, Phase, PlacementRules, PlayerId, Position, Rules, Step,
};

fn initialize(deck_size: usize, board_size: usize, hand_size: usize) -> InitResult {
    let config = GameConfig::default()
        .with_deck_size(deck_size)
        .with_board_size(board_size)
        .with_hand_size(hand_size);
    GameState::initialize(&config, &mut CardGenerator::new(GameRng::new(config.seed)))
}

type InitResult = Result<GameState, GameError>;

/// Initialize(10, 3, 4): hand 4, deck 6, empty 3x3 board, nothing selected.
#[test]
fn test_opening_deal() {
    let state = initialize(10, 3, 4).unwrap();

    assert_eq!(state.hand().len(), 4);
    assert_eq!(state.deck_size(), 6);
    assert_eq!(state.board().size(), 3);
    for row in 0..3 {
        for col in 0..3 {
            let slot = state.board().address_of(row, col).unwrap();
            assert!(slot.is_empty());
            assert_eq!(slot.owner, PlayerId::UNCLAIMED);
        }
    }
    assert_eq!(state.selected_id(), None);
}

/// Select(0) then Play((1,1)).
#[test]
fn test_select_then_play() {
    let state = initialize(10, 3, 4).unwrap();
    let first = state.hand()[0].clone();

    let next = state
        .select_card(0)
        .unwrap()
        .play_card(Position::new(1, 1))
        .unwrap();

    assert_eq!(next.board().address_of(1, 1).unwrap().card.as_ref(), Some(&first));
    assert_eq!(next.hand().len(), 3);
    assert_eq!(next.selected_id(), None);
    assert!(next.hand().iter().all(|c| c.id != first.id));
}

/// Second play onto (0,0) with a different card fails and keeps the first.
#[test]
fn test_second_play_on_same_slot() {
    let state = initialize(10, 3, 4).unwrap();
    let first = state.hand()[0].clone();

    let after_first = state
        .select_card(0)
        .unwrap()
        .play_card(Position::new(0, 0))
        .unwrap();
    let reselected = after_first.select_card(0).unwrap();
    assert_ne!(reselected.selected_id(), Some(first.id));

    let result = reselected.play_card(Position::new(0, 0));

    assert_eq!(
        result,
        Err(GameError::SlotOccupied {
            position: Position::new(0, 0)
        })
    );
    assert_eq!(
        reselected.board().address_of(0, 0).unwrap().card.as_ref(),
        Some(&first)
    );
}

/// A failed play leaves board, hand and selection exactly as they were.
#[test]
fn test_failed_play_is_atomic() {
    let state = common::dealt(&["A", "B", "C"], 3, 3)
        .select_card(0)
        .unwrap()
        .play_card(Position::new(2, 0))
        .unwrap()
        .select_card(1)
        .unwrap();
    let before = state.clone();

    assert!(state.play_card(Position::new(2, 0)).is_err());
    assert!(state.play_card(Position::new(5, 5)).is_err());

    assert_eq!(state, before);
    assert_eq!(state.board(), before.board());
    assert_eq!(state.hand(), before.hand());
    assert_eq!(state.selected_id(), before.selected_id());
}

#[test]
fn test_bounds_checking() {
    let state = initialize(10, 3, 4).unwrap();
    let len = state.hand().len();

    assert!(matches!(state.select_card(-1), Err(GameError::InvalidIndex { .. })));
    assert!(matches!(
        state.select_card(len as i32),
        Err(GameError::InvalidIndex { .. })
    ));
    assert!(matches!(
        state.board().address_of(-1, 0),
        Err(GameError::OutOfBounds { .. })
    ));
}

/// Two hand cards share a title; playing the second removes only that one.
#[test]
fn test_duplicate_titles() {
    let state = common::dealt(&["Echo", "Echo", "Solo"], 3, 3);

    let next = state
        .select_card(1)
        .unwrap()
        .play_card(Position::new(0, 2))
        .unwrap();

    let remaining: Vec<_> = next.hand().iter().map(|c| c.id).collect();
    assert_eq!(remaining, vec![CardId::new(0), CardId::new(2)]);
    assert_eq!(
        next.board().address_of(0, 2).unwrap().card.as_ref().map(|c| c.id),
        Some(CardId::new(1))
    );
}

#[test]
fn test_hand_larger_than_deck() {
    assert_eq!(
        initialize(3, 3, 5).err(),
        Some(GameError::DeckExhausted {
            requested: 5,
            remaining: 3
        })
    );

    let config = GameConfig::default()
        .with_deck_size(3)
        .with_hand_size(5)
        .with_deal_policy(DealPolicy::ShortHand);
    let state =
        GameState::initialize(&config, &mut CardGenerator::new(GameRng::new(1))).unwrap();
    assert_eq!(state.hand().len(), 3);
    assert_eq!(state.deck_size(), 0);
}

/// Fill a 2x2 board through the protocol using only legal actions.
#[test]
fn test_fill_board_with_legal_actions() {
    let rules = PlacementRules;
    let mut state = common::dealt(&["A", "B", "C", "D", "E"], 5, 2);

    while !state.board().empty_positions().is_empty() {
        assert_eq!(Phase::of(&state), Phase::Idle);
        let select = rules.legal_actions(&state)[0];
        state = rules.apply(&state, &select).unwrap().into_state().unwrap();

        let play = rules
            .legal_actions(&state)
            .into_iter()
            .find(|a| matches!(a, Action::Play { .. }))
            .unwrap();
        state = rules.apply(&state, &play).unwrap().into_state().unwrap();
    }

    assert_eq!(state.board().occupied_count(), 4);
    assert_eq!(state.hand().len(), 1);
    assert!(state.is_consistent());

    // Nowhere left to play
    let selected = rules
        .apply(&state, &Action::select(0))
        .unwrap()
        .into_state()
        .unwrap();
    assert_eq!(rules.legal_actions(&selected), vec![Action::Deselect]);
    assert_eq!(
        rules.apply(&selected, &Action::play(1, 1)).unwrap(),
        Step::Ignored(IgnoreReason::SlotOccupied)
    );
}
