//! Session controller: owns the live `GameState`.
//!
//! The controller is the only thing that replaces the current snapshot.
//! It maps input events to actions, runs them through the rules, keeps
//! the last `max_undo` snapshots for undo, and decides what gets logged:
//!
//! - applied actions and ignored attempts at `debug`
//! - caller bugs (`InvalidIndex`, `OutOfBounds`) at `warn`

use im::Vector;
use tracing::{debug, info, warn};

use super::event::InputEvent;
use super::view::GameView;
use crate::board::Position;
use crate::cards::CardGenerator;
use crate::core::action::{Action, ActionRecord};
use crate::core::config::GameConfig;
use crate::core::error::GameResult;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::{IgnoreReason, Phase, PlacementRules, Rules, Step};

/// What the renderer should do after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Update {
    /// State changed; draw this snapshot.
    Redraw(GameView),
    /// Nothing happened.
    Unchanged(IgnoreReason),
}

/// A single-player game session.
///
/// ```
/// use card_slots::core::GameConfig;
/// use card_slots::session::{InputEvent, Session, Update};
///
/// let mut session = Session::new(GameConfig::default()).unwrap();
///
/// session.handle(InputEvent::HandCard(0)).unwrap();
/// let update = session.handle(InputEvent::Slot { row: 1, col: 1 }).unwrap();
///
/// assert!(matches!(update, Update::Redraw(_)));
/// assert_eq!(session.state().board().occupied_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Session<R = PlacementRules> {
    config: GameConfig,
    rules: R,
    state: GameState,

    /// Parent of every dealt game; each game draws from a fresh fork.
    rng: GameRng,

    /// Snapshots before each applied action, oldest first.
    /// Holds at most `config.max_undo` entries.
    undo_stack: Vector<GameState>,

    /// Applied actions, parallel to `undo_stack`.
    history: Vector<ActionRecord>,

    next_sequence: u32,
}

impl Session<PlacementRules> {
    /// Start a new game with the placement rules.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        Self::with_rules(config, PlacementRules)
    }
}

impl<R: Rules> Session<R> {
    /// Start a new game with custom rules.
    pub fn with_rules(config: GameConfig, rules: R) -> GameResult<Self> {
        let mut rng = GameRng::new(config.seed);
        let state = deal_new_game(&config, &mut rng)?;

        Ok(Self {
            rng,
            ..Self::from_state(config, rules, state)
        })
    }

    /// Wrap an existing state, e.g. one built from a fixed deck.
    #[must_use]
    pub fn from_state(config: GameConfig, rules: R, state: GameState) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rules,
            state,
            rng,
            undo_stack: Vector::new(),
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    /// Throw the current game away and deal a new one.
    ///
    /// The new deck comes from the next fork of the session RNG, so a
    /// session replays the same series of games for the same seed.
    /// History and undo start over.
    pub fn restart(&mut self) -> GameResult<GameView> {
        let state = deal_new_game(&self.config, &mut self.rng)?;

        self.state = state;
        self.undo_stack.clear();
        self.history.clear();
        self.next_sequence = 0;

        Ok(self.view())
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::of(&self.state)
    }

    /// Renderer snapshot of the current state.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.state)
    }

    /// Applied actions, oldest first. Undone actions are removed.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Legal actions in the current state.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state)
    }

    // === Input ===

    /// Map an input event to an action for the current phase.
    ///
    /// A hand click while a card is held drops the selection instead of
    /// switching it.
    #[must_use]
    pub fn resolve(&self, event: InputEvent) -> Action {
        match (event, self.phase()) {
            (InputEvent::HandCard(_), Phase::CardSelected) => Action::Deselect,
            (InputEvent::HandCard(hand_index), Phase::Idle) => Action::Select { hand_index },
            (InputEvent::Slot { row, col }, _) => Action::Play {
                position: Position::new(row, col),
            },
            (InputEvent::Elsewhere, _) => Action::Deselect,
        }
    }

    /// Handle one input event.
    pub fn handle(&mut self, event: InputEvent) -> GameResult<Update> {
        let action = self.resolve(event);
        self.dispatch(action)
    }

    /// Apply an already-resolved action.
    ///
    /// On `Err` and on `Update::Unchanged` the current state is untouched.
    pub fn dispatch(&mut self, action: Action) -> GameResult<Update> {
        match self.rules.apply(&self.state, &action) {
            Ok(Step::Advanced(next)) => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;

                let prior = std::mem::replace(&mut self.state, next);
                self.undo_stack.push_back(prior);
                self.history.push_back(ActionRecord::new(sequence, action));
                while self.undo_stack.len() > self.config.max_undo {
                    self.undo_stack.pop_front();
                    self.history.pop_front();
                }

                debug_assert!(self.state.is_consistent());
                debug!(sequence, ?action, hand = self.state.hand().len(), "applied action");

                Ok(Update::Redraw(self.view()))
            }
            Ok(Step::Ignored(reason)) => {
                debug!(?action, ?reason, "ignored action");
                Ok(Update::Unchanged(reason))
            }
            Err(err) => {
                if err.is_non_event() {
                    debug!(?action, %err, "rejected action");
                } else {
                    warn!(?action, %err, "rejected action");
                }
                Err(err)
            }
        }
    }

    // === Undo ===

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Restore the snapshot before the last applied action.
    ///
    /// Returns the undone action, or `None` at the start of the game.
    pub fn undo(&mut self) -> Option<Action> {
        let prior = self.undo_stack.pop_back()?;
        let record = self.history.pop_back()?;
        self.state = prior;
        self.next_sequence = record.sequence;

        debug!(sequence = record.sequence, action = ?record.action, "undid action");
        Some(record.action)
    }
}

fn deal_new_game(config: &GameConfig, rng: &mut GameRng) -> GameResult<GameState> {
    info!(
        deck_size = config.deck_size,
        hand_size = config.hand_size,
        board_size = config.board_size,
        seed = config.seed,
        "Initializing new game."
    );

    let mut generator = CardGenerator::new(rng.fork());
    GameState::initialize(config, &mut generator)
}
