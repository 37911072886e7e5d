//! Board grid: slot addressing and structural updates.
//!
//! The board is a fixed `size x size` grid stored row-major in an
//! `im::Vector`, so replacing a slot shares every other slot with the
//! previous board.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::error::{GameError, GameResult};
use crate::core::player::PlayerId;

/// A `(row, col)` board address.
///
/// Signed so that hit-test misses (`-1`) can be passed through and
/// rejected with `OutOfBounds` rather than wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One board cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub position: Position,

    /// Controlling player; `PlayerId::UNCLAIMED` until a card lands here.
    pub owner: PlayerId,

    pub card: Option<Card>,
}

impl Slot {
    /// An unclaimed, empty slot.
    #[must_use]
    pub fn empty(position: Position) -> Self {
        Self {
            position,
            owner: PlayerId::UNCLAIMED,
            card: None,
        }
    }

    /// Check whether the slot holds no card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }
}

/// Fixed N x N grid of slots.
///
/// ```
/// use card_slots::board::Board;
///
/// let board = Board::build(3);
/// assert_eq!(board.size(), 3);
/// assert!(board.address_of(1, 1).unwrap().is_empty());
/// assert!(board.address_of(-1, 0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    slots: Vector<Slot>,
}

impl Board {
    /// Build an empty `size x size` board.
    #[must_use]
    pub fn build(size: usize) -> Self {
        let slots = (0..size * size)
            .map(|i| Slot::empty(Position::new((i / size) as i32, (i % size) as i32)))
            .collect();

        Self { size, slots }
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bounds-checked lookup by row and column.
    pub fn address_of(&self, row: i32, col: i32) -> GameResult<&Slot> {
        self.slot(Position::new(row, col))
    }

    /// Bounds-checked lookup by position.
    pub fn slot(&self, position: Position) -> GameResult<&Slot> {
        let index = self.index_of(position)?;
        Ok(&self.slots[index])
    }

    /// Slots in row-major order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Slots of one row, left to right. Empty for rows outside the board.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Slot> {
        let start = if row < self.size { row * self.size } else { self.slots.len() };
        self.slots.iter().skip(start).take(self.size)
    }

    /// Unoccupied positions in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> SmallVec<[Position; 9]> {
        self.slots
            .iter()
            .filter(|slot| slot.is_empty())
            .map(|slot| slot.position)
            .collect()
    }

    /// Number of slots holding a card.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Return a new board with `slot` stored at its own position.
    pub(crate) fn with_slot(&self, slot: Slot) -> GameResult<Self> {
        let index = self.index_of(slot.position)?;
        let mut slots = self.slots.clone();
        slots.set(index, slot);
        Ok(Self {
            size: self.size,
            slots,
        })
    }

    fn index_of(&self, position: Position) -> GameResult<usize> {
        let in_range = |v: i32| usize::try_from(v).ok().filter(|&v| v < self.size);

        match (in_range(position.row), in_range(position.col)) {
            (Some(row), Some(col)) => Ok(row * self.size + col),
            _ => Err(GameError::OutOfBounds {
                row: position.row,
                col: position.col,
                size: self.size,
            }),
        }
    }
}

/// Build an empty `n x n` board.
#[must_use]
pub fn build_board(n: usize) -> Board {
    Board::build(n)
}
