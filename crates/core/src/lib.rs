//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the complete memory-match engine: board generation,
//! selection validation, the two-pick turn state machine, hint search, and
//! the per-session score ledger. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: a seed fully determines the board layout
//! - **Testable**: every rule is exercised without a terminal
//! - **Synchronous**: one blocking request/response cycle, no reentrancy
//!
//! # Module Structure
//!
//! - [`board`]: shuffled `N x N` pairs layout (`N = 2 * level`)
//! - [`session`]: per-level state, validation, and turn resolution
//! - [`hint`]: breadth-first partner search with a per-level budget
//! - [`scores`]: best (minimum) turn counts per level
//! - [`rng`]: seedable Fisher-Yates shuffling
//! - [`snapshot`]: read-only views for the renderer
//!
//! # Example
//!
//! ```
//! use memory_match_core::{Board, GameSession, SelectOutcome};
//! use memory_match_types::{Cell, Selection};
//!
//! // A deterministic 2x2 level: [[1,2],[2,1]].
//! let board = Board::from_values(2, vec![1, 2, 2, 1]);
//! let mut session = GameSession::with_board(board, 1);
//!
//! session.select(Selection::Cell(Cell::new(0, 0)));
//! let outcome = session.select(Selection::Cell(Cell::new(1, 1)));
//!
//! assert!(matches!(outcome, SelectOutcome::Match { .. }));
//! assert_eq!(session.turns(), 1);
//! ```
//!
//! # Turn cycle
//!
//! `AwaitingFirst -> AwaitingSecond -> (match | reveal window) -> AwaitingFirst`,
//! ending when every pair is matched. Mismatches keep both cards face up in
//! a reveal window the caller closes with
//! [`GameSession::conceal_mismatch`], so interactive front ends can pause
//! while tests proceed immediately.

pub mod board;
pub mod hint;
pub mod rng;
pub mod scores;
pub mod session;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use rng::SimpleRng;
pub use scores::ScoreBoard;
pub use session::{GameSession, HintOutcome, SelectOutcome};
pub use snapshot::{CardFace, SessionSnapshot};
