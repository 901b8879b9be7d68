//! Core types shared across the application
//!
//! This crate contains pure data types with no external dependencies:
//! cell coordinates, card values, console selections, and the
//! configuration constants for levels and timing.

/// Number of selectable levels.
///
/// Level `L` plays on a `2L x 2L` board, so level 8 is 16x16 (128 pairs).
pub const MAX_LEVELS: u8 = 8;

/// How long a mismatched pair stays revealed before it is concealed again.
///
/// This pause lives entirely in the interactive runner; the engine exposes
/// the reveal window as a phase so tests never wait on the wall clock.
pub const MISMATCH_PAUSE_MS: u64 = 1000;

/// Sentinel pair the console reserves for a hint request.
pub const HINT_SENTINEL: (i16, i16) = (-1, -1);

/// Sentinel pair the console reserves for quitting back to the menu.
pub const QUIT_SENTINEL: (i16, i16) = (-9, -9);

/// Board side length for a level.
pub fn board_size(level: u8) -> u8 {
    2 * level
}

/// A card value. Values run `1..=pairs` and each appears on exactly two cells.
pub type CardValue = u16;

/// A board coordinate, 0-indexed, row-major.
///
/// Fields are signed so raw console input that lands outside the board can
/// still be represented and rejected by the validator instead of being
/// clamped (or panicking) at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i16,
    pub col: i16,
}

impl Cell {
    pub fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Orthogonal neighbors (up, down, left, right), unchecked against bounds.
    pub fn neighbors(&self) -> [Cell; 4] {
        [
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row + 1, self.col),
            Cell::new(self.row, self.col - 1),
            Cell::new(self.row, self.col + 1),
        ]
    }
}

/// One console request to the engine.
///
/// The input layer translates the reserved out-of-range pairs into the
/// `Hint`/`Quit` markers before the engine ever sees them; everything else
/// arrives as a 0-indexed `Cell` (which may still be out of bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Cell(Cell),
    Hint,
    Quit,
}

/// Why the validator refused a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Outside `[0, N) x [0, N)`.
    OutOfBounds,
    /// Equal to the immediately preceding pick of this turn.
    RepeatsPrevious,
    /// Currently face up awaiting resolution.
    AlreadyFlipped,
    /// Permanently revealed (its pair was found).
    AlreadyMatched,
}

impl RejectReason {
    /// Short human-readable description for console messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::OutOfBounds => "outside the board",
            RejectReason::RepeatsPrevious => "same card as your last pick",
            RejectReason::AlreadyFlipped => "card is already face up",
            RejectReason::AlreadyMatched => "card is already matched",
        }
    }
}

/// Where the session is inside the two-pick turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// No card flipped yet this turn.
    AwaitingFirst,
    /// One card face up, waiting for its candidate partner.
    AwaitingSecond,
    /// A mismatched pair is face up inside the reveal window; the caller
    /// closes it with `conceal_mismatch`.
    Revealing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_per_level() {
        assert_eq!(board_size(1), 2);
        assert_eq!(board_size(4), 8);
        assert_eq!(board_size(MAX_LEVELS), 16);
    }

    #[test]
    fn test_cell_neighbors() {
        let c = Cell::new(0, 0);
        let n = c.neighbors();
        assert!(n.contains(&Cell::new(-1, 0)));
        assert!(n.contains(&Cell::new(1, 0)));
        assert!(n.contains(&Cell::new(0, -1)));
        assert!(n.contains(&Cell::new(0, 1)));
    }

    #[test]
    fn test_sentinels_are_distinct_and_out_of_range() {
        assert_ne!(HINT_SENTINEL, QUIT_SENTINEL);
        assert!(HINT_SENTINEL.0 < 0 && QUIT_SENTINEL.0 < 0);
    }
}
