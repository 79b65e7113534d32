use serde::{Deserialize, Serialize};
use std::fmt;

pub const FIELD_SIZE: usize = 9;

/// A cell address on the 9x9 field, 0-based, identity by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_valid(self) -> bool {
        self.row < FIELD_SIZE && self.col < FIELD_SIZE
    }

    /// Moves by one step in each axis, wrapping around the field edges.
    pub fn moved(self, dx: i32, dy: i32) -> Self {
        let wrap = |value: usize, delta: i32| {
            (value as i32 + delta).rem_euclid(FIELD_SIZE as i32) as usize
        };
        Self {
            row: wrap(self.row, dy),
            col: wrap(self.col, dx),
        }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}

/// Ordered set of cell positions. The most recently added position is
/// distinguished: it renders as the primary selection highlight and is the
/// origin for arrow-key movement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSet {
    items: Vec<CellPosition>,
}

impl PositionSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_positions(positions: &[CellPosition]) -> Self {
        let mut set = Self::new();
        for &pos in positions {
            set.add(pos);
        }
        set
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, pos: CellPosition) -> bool {
        self.items.contains(&pos)
    }

    pub fn last(&self) -> Option<CellPosition> {
        self.items.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = CellPosition> + '_ {
        self.items.iter().copied()
    }

    /// Adds a position, making it the last one. Re-adding an already present
    /// position moves it to the end.
    pub fn add(&mut self, pos: CellPosition) {
        self.items.retain(|item| *item != pos);
        self.items.push(pos);
    }

    pub fn remove(&mut self, pos: CellPosition) {
        self.items.retain(|item| *item != pos);
    }

    /// Toggles membership, or forces it when `force` is given. Enabling
    /// always updates the last-added pointer.
    pub fn toggle(&mut self, pos: CellPosition, force: Option<bool>) {
        let enable = force.unwrap_or(!self.contains(pos));
        if enable {
            self.add(pos);
        } else {
            self.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn select_all() -> Self {
        let mut items = Vec::with_capacity(FIELD_SIZE * FIELD_SIZE);
        for row in 0..FIELD_SIZE {
            for col in 0..FIELD_SIZE {
                items.push(CellPosition::new(row, col));
            }
        }
        Self { items }
    }
}
