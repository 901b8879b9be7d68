//! Board module - the shuffled pairs layout
//!
//! The board is an `N x N` grid of card values where `N = 2 * level`. Each
//! value in `1..=N*N/2` appears on exactly two cells. Storage is a flat
//! row-major `Vec` (board sizes vary per level, so no fixed array).
//! The board itself is immutable after generation; which cards are face up
//! lives in the session, not here.

use memory_match_types::{board_size, CardValue, Cell};

use crate::rng::SimpleRng;

/// A generated pairs layout. Owned exclusively by the session and rebuilt on
/// each level start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    /// Flat card values, row-major (`row * size + col`).
    values: Vec<CardValue>,
}

impl Board {
    /// Generate a shuffled board for a level.
    ///
    /// Builds the multiset `{1,1,2,2,...,pairs,pairs}`, applies a
    /// Fisher-Yates shuffle, and assigns values row-major. `level >= 1` is a
    /// caller contract; it is asserted only in debug builds.
    pub fn generate(level: u8, rng: &mut SimpleRng) -> Self {
        debug_assert!(level >= 1, "level must be at least 1");
        let size = board_size(level);
        let total = size as usize * size as usize;

        let mut values: Vec<CardValue> = Vec::with_capacity(total);
        for v in 1..=(total / 2) as CardValue {
            values.push(v);
            values.push(v);
        }
        rng.shuffle(&mut values);

        Self { size, values }
    }

    /// Build a board from explicit values, row-major.
    ///
    /// Deterministic fixture for tests and scripted demos; panics if the
    /// value count does not fill an `size x size` grid.
    pub fn from_values(size: u8, values: Vec<CardValue>) -> Self {
        assert_eq!(
            values.len(),
            size as usize * size as usize,
            "value count must fill the grid"
        );
        Self { size, values }
    }

    /// Side length of the board.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.values.len()
    }

    /// Number of distinct pairs on the board.
    pub fn pair_count(&self) -> usize {
        self.values.len() / 2
    }

    /// Flat index for a cell, or `None` when out of bounds.
    #[inline]
    pub(crate) fn index(&self, cell: Cell) -> Option<usize> {
        if cell.row < 0
            || cell.row >= self.size as i16
            || cell.col < 0
            || cell.col >= self.size as i16
        {
            return None;
        }
        Some(cell.row as usize * self.size as usize + cell.col as usize)
    }

    /// Whether a cell lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Card value at a cell, or `None` when out of bounds.
    pub fn value(&self, cell: Cell) -> Option<CardValue> {
        self.index(cell).map(|idx| self.values[idx])
    }

    /// Iterate all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size as i16;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }
}
