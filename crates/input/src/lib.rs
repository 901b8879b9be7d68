//! Input crate - console token parsing.
//!
//! Pure string-to-selection mapping; reading lines from stdin stays in the
//! binary so this crate needs no I/O.

pub use memory_match_types as types;

pub mod map;

pub use map::{parse_menu_choice, parse_selection, MenuChoice};
