//! Game session module - manages the complete per-level state
//!
//! This module ties together the board, the flip/match bookkeeping, the
//! turn state machine, hint budget, and counters. It handles selection
//! validation, turn resolution, rollback on abandoned turns, and level
//! completion detection.

use arrayvec::ArrayVec;

use memory_match_types::{CardValue, Cell, RejectReason, Selection, TurnPhase};

use crate::board::Board;
use crate::hint::find_hint;
use crate::rng::SimpleRng;

/// Result of a hint request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// A concealed card known to be part of an unresolved pair.
    Suggestion { cell: Cell, remaining: u8 },
    /// Hint budget is spent; nothing changed.
    Exhausted,
    /// No eligible pair among concealed cards (only possible when the
    /// partner of the last concealed card is currently face up).
    NoMoves,
}

/// Result of feeding one [`Selection`] to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First pick accepted; waiting for its candidate partner.
    Flipped { cell: Cell, value: CardValue },
    /// First pick refused; ask again for the same slot.
    Rejected(RejectReason),
    /// Second pick refused; the first pick was rolled back and the turn is
    /// abandoned. Distinct from [`SelectOutcome::Quit`]: play continues with
    /// a fresh turn.
    TurnAbandoned { first: Cell, reason: RejectReason },
    /// Both picks shared a value; they are now permanently revealed.
    Match {
        cells: [Cell; 2],
        value: CardValue,
        level_complete: bool,
    },
    /// The picks differ. Both stay face up inside the reveal window until
    /// the caller invokes [`GameSession::conceal_mismatch`].
    NoMatch {
        cells: [Cell; 2],
        values: [CardValue; 2],
    },
    /// Hint sentinel handled; no turn state changed.
    Hint(HintOutcome),
    /// Quit sentinel handled; any in-progress pick was rolled back. The
    /// caller is expected to drop the session.
    Quit,
}

/// Complete state of one level in play.
///
/// All mutation flows through [`GameSession::select`] and
/// [`GameSession::conceal_mismatch`]; the board itself never changes after
/// generation. Outside an in-progress turn the flipped set is empty, and the
/// flipped and matched sets are always disjoint subsets of the board.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    level: u8,
    /// Cards currently face up but not yet resolved (at most the two picks
    /// of the current turn).
    flipped: ArrayVec<Cell, 2>,
    /// Flat matched mask, row-major, parallel to the board.
    matched: Vec<bool>,
    matched_count: usize,
    /// Picks of the current turn, in selection order. Only the tail is
    /// consulted (repeat-selection rule); cleared when the turn resolves.
    history: Vec<Cell>,
    hints_remaining: u8,
    turns: u32,
    moves: u32,
    phase: TurnPhase,
}

impl GameSession {
    /// Start a level on a freshly shuffled board.
    ///
    /// The hint budget equals the level number. Pass a seed drawn from OS
    /// entropy for real play; tests pass a constant.
    pub fn new(level: u8, seed: u64) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self::with_board(Board::generate(level, &mut rng), level)
    }

    /// Start a level on an explicit board (deterministic fixture path).
    pub fn with_board(board: Board, level: u8) -> Self {
        let cell_count = board.cell_count();
        Self {
            board,
            level,
            flipped: ArrayVec::new(),
            matched: vec![false; cell_count],
            matched_count: 0,
            history: Vec::with_capacity(2),
            hints_remaining: level,
            turns: 0,
            moves: 0,
            phase: TurnPhase::AwaitingFirst,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Completed turns (two resolved selections each).
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Accepted raw selections, net of rollbacks.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    /// Matched cells so far; always even.
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    pub fn is_matched(&self, cell: Cell) -> bool {
        self.board
            .index(cell)
            .map(|idx| self.matched[idx])
            .unwrap_or(false)
    }

    pub fn is_flipped(&self, cell: Cell) -> bool {
        self.flipped.contains(&cell)
    }

    /// Face down and still in play: neither flipped nor matched.
    pub fn is_concealed(&self, cell: Cell) -> bool {
        self.board.contains(cell) && !self.is_flipped(cell) && !self.is_matched(cell)
    }

    /// Face up for display purposes: flipped or matched.
    pub fn is_revealed(&self, cell: Cell) -> bool {
        self.is_flipped(cell) || self.is_matched(cell)
    }

    /// Cells currently flipped, in selection order.
    pub fn flipped_cells(&self) -> &[Cell] {
        &self.flipped
    }

    pub fn level_complete(&self) -> bool {
        self.matched_count == self.board.cell_count()
    }

    /// Pure selection predicate.
    ///
    /// A cell is acceptable iff it is on the board, does not repeat the
    /// immediately preceding pick (only when `check_previous` is set), and
    /// is neither face up nor already matched. The repeat check consults the
    /// move history tail and is ordered before the flipped-set check, so a
    /// same-cell second pick reports [`RejectReason::RepeatsPrevious`].
    pub fn validate(&self, cell: Cell, check_previous: bool) -> Result<(), RejectReason> {
        let idx = self.board.index(cell).ok_or(RejectReason::OutOfBounds)?;
        if check_previous && self.history.last() == Some(&cell) {
            return Err(RejectReason::RepeatsPrevious);
        }
        if self.flipped.contains(&cell) {
            return Err(RejectReason::AlreadyFlipped);
        }
        if self.matched[idx] {
            return Err(RejectReason::AlreadyMatched);
        }
        Ok(())
    }

    /// Boolean form of [`GameSession::validate`].
    pub fn is_valid_selection(&self, cell: Cell, check_previous: bool) -> bool {
        self.validate(cell, check_previous).is_ok()
    }

    /// Feed one selection to the turn state machine.
    ///
    /// Sentinels are recognized before any validation. If a mismatch reveal
    /// window is still open when a new selection arrives, it is closed
    /// first, exactly as the runner would have done.
    pub fn select(&mut self, selection: Selection) -> SelectOutcome {
        if self.phase == TurnPhase::Revealing {
            self.conceal_mismatch();
        }

        match selection {
            Selection::Hint => SelectOutcome::Hint(self.request_hint()),
            Selection::Quit => {
                if self.phase == TurnPhase::AwaitingSecond {
                    self.rollback_first();
                }
                self.phase = TurnPhase::AwaitingFirst;
                SelectOutcome::Quit
            }
            Selection::Cell(cell) => match self.phase {
                TurnPhase::AwaitingFirst => self.select_first(cell),
                TurnPhase::AwaitingSecond => self.select_second(cell),
                // Closed above.
                TurnPhase::Revealing => unreachable!("reveal window closed on entry"),
            },
        }
    }

    /// Close the mismatch reveal window, concealing both cards again.
    ///
    /// Returns `false` when no window was open.
    pub fn conceal_mismatch(&mut self) -> bool {
        if self.phase != TurnPhase::Revealing {
            return false;
        }
        self.flipped.clear();
        self.phase = TurnPhase::AwaitingFirst;
        true
    }

    fn select_first(&mut self, cell: Cell) -> SelectOutcome {
        if let Err(reason) = self.validate(cell, true) {
            return SelectOutcome::Rejected(reason);
        }

        let value = self.value_of(cell);
        self.flip(cell);
        self.phase = TurnPhase::AwaitingSecond;
        SelectOutcome::Flipped { cell, value }
    }

    fn select_second(&mut self, cell: Cell) -> SelectOutcome {
        if let Err(reason) = self.validate(cell, true) {
            // Abandon the whole turn rather than re-prompting forever on the
            // second slot: roll the first pick back and start fresh.
            let first = self.rollback_first();
            self.phase = TurnPhase::AwaitingFirst;
            return SelectOutcome::TurnAbandoned { first, reason };
        }

        self.flip(cell);
        self.resolve_turn()
    }

    /// Compare the two face-up cards and settle the turn.
    fn resolve_turn(&mut self) -> SelectOutcome {
        debug_assert_eq!(self.flipped.len(), 2);
        let first = self.flipped[0];
        let second = self.flipped[1];
        let v1 = self.value_of(first);
        let v2 = self.value_of(second);

        self.turns += 1;
        self.history.clear();

        if v1 == v2 {
            self.mark_matched(first);
            self.mark_matched(second);
            self.flipped.clear();
            self.phase = TurnPhase::AwaitingFirst;
            SelectOutcome::Match {
                cells: [first, second],
                value: v1,
                level_complete: self.level_complete(),
            }
        } else {
            // Leave both face up so the player can observe them; the caller
            // closes the window via conceal_mismatch.
            self.phase = TurnPhase::Revealing;
            SelectOutcome::NoMatch {
                cells: [first, second],
                values: [v1, v2],
            }
        }
    }

    fn request_hint(&mut self) -> HintOutcome {
        if self.hints_remaining == 0 {
            return HintOutcome::Exhausted;
        }
        match find_hint(self) {
            Some(cell) => {
                self.hints_remaining -= 1;
                HintOutcome::Suggestion {
                    cell,
                    remaining: self.hints_remaining,
                }
            }
            None => HintOutcome::NoMoves,
        }
    }

    fn flip(&mut self, cell: Cell) {
        self.flipped.push(cell);
        self.history.push(cell);
        self.moves += 1;
    }

    /// Revert the pending first pick (quit or abandoned turn).
    fn rollback_first(&mut self) -> Cell {
        debug_assert_eq!(self.flipped.len(), 1);
        let cell = self.flipped.pop().unwrap_or(Cell::new(0, 0));
        self.history.pop();
        self.moves = self.moves.saturating_sub(1);
        cell
    }

    fn mark_matched(&mut self, cell: Cell) {
        if let Some(idx) = self.board.index(cell) {
            if !self.matched[idx] {
                self.matched[idx] = true;
                self.matched_count += 1;
            }
        }
    }

    fn value_of(&self, cell: Cell) -> CardValue {
        // Only called for cells that already passed validation.
        self.board.value(cell).unwrap_or(0)
    }
}
