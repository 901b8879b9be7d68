//! Read-only session views for rendering
//!
//! The renderer never touches `GameSession` internals; it consumes a
//! `SessionSnapshot` taken after each mutation.

use memory_match_types::{CardValue, Cell, TurnPhase};

use crate::session::GameSession;

/// What the player may see on one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// Face down, value concealed.
    Hidden,
    /// Face up (flipped this turn or permanently matched).
    Up(CardValue),
}

/// Immutable view of a session for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub size: u8,
    /// Per-cell faces, row-major.
    pub cards: Vec<CardFace>,
    pub level: u8,
    pub turns: u32,
    pub moves: u32,
    pub hints_remaining: u8,
    pub hints_used: u8,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    /// Matched cells in row-major order, for the statistics block.
    pub matched_cells: Vec<Cell>,
    pub phase: TurnPhase,
}

impl SessionSnapshot {
    /// Face at a 0-indexed coordinate; hidden when out of bounds.
    pub fn card(&self, row: i16, col: i16) -> CardFace {
        if row < 0 || col < 0 || row >= self.size as i16 || col >= self.size as i16 {
            return CardFace::Hidden;
        }
        self.cards[row as usize * self.size as usize + col as usize]
    }

    pub fn complete(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }
}

impl GameSession {
    /// Capture everything the rendering side is allowed to observe.
    pub fn snapshot(&self) -> SessionSnapshot {
        let board = self.board();
        let cards = board
            .cells()
            .map(|cell| {
                if self.is_revealed(cell) {
                    CardFace::Up(board.value(cell).unwrap_or(0))
                } else {
                    CardFace::Hidden
                }
            })
            .collect();
        let matched_cells = board.cells().filter(|&c| self.is_matched(c)).collect();

        SessionSnapshot {
            size: board.size(),
            cards,
            level: self.level(),
            turns: self.turns(),
            moves: self.moves(),
            hints_remaining: self.hints_remaining(),
            hints_used: self.level() - self.hints_remaining(),
            matched_pairs: self.matched_count() / 2,
            total_pairs: board.pair_count(),
            matched_cells,
            phase: self.phase(),
        }
    }
}
