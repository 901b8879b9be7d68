//! Score ledger module - best turn counts per level
//!
//! Session-lifetime state: records the minimum number of turns a level was
//! completed in, keyed by level number. An ordered map keeps menu display
//! sorted by level without any extra bookkeeping.

use std::collections::BTreeMap;

/// Best (minimum) completed-turn counts per level for this process run.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    best: BTreeMap<u8, u32>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed level; keeps the lower of the stored and new turn
    /// counts. Returns `true` when this run became the new best.
    pub fn record(&mut self, level: u8, turns: u32) -> bool {
        match self.best.get(&level) {
            Some(&prev) if prev <= turns => false,
            _ => {
                self.best.insert(level, turns);
                true
            }
        }
    }

    /// Best turn count for a level, if any run completed it.
    pub fn best(&self, level: u8) -> Option<u32> {
        self.best.get(&level).copied()
    }

    /// All recorded bests, ascending by level.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.best.iter().map(|(&level, &turns)| (level, turns))
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
