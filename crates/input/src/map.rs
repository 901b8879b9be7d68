//! Token mapping from console lines to engine selections.
//!
//! The console protocol is line-oriented: a cell is a 1-based `row col`
//! pair, and two reserved out-of-range pairs act as sentinels (hint and
//! quit). Malformed lines map to `None` so the caller re-prompts without
//! touching the engine; numeric but out-of-range pairs still become cells,
//! because rejecting those is the validator's job.

use memory_match_types::{Cell, Selection, HINT_SENTINEL, QUIT_SENTINEL};

/// Parse one console line into a selection.
///
/// Expects exactly two integer tokens. The 1-based pair is translated to
/// 0-based coordinates unless it is one of the reserved sentinel pairs.
pub fn parse_selection(line: &str) -> Option<Selection> {
    let mut tokens = line.split_whitespace();
    let row: i16 = tokens.next()?.parse().ok()?;
    let col: i16 = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }

    if (row, col) == HINT_SENTINEL {
        return Some(Selection::Hint);
    }
    if (row, col) == QUIT_SENTINEL {
        return Some(Selection::Quit);
    }
    Some(Selection::Cell(Cell::new(row - 1, col - 1)))
}

/// One menu entry choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Play the given level, `1..=max_levels`.
    Level(u8),
    /// Leave the program (`max_levels + 1` entry).
    Quit,
}

/// Parse a menu line into a choice.
///
/// Returns `None` for non-numeric input or numbers outside the menu.
pub fn parse_menu_choice(line: &str, max_levels: u8) -> Option<MenuChoice> {
    let choice: u8 = line.trim().parse().ok()?;
    if (1..=max_levels).contains(&choice) {
        Some(MenuChoice::Level(choice))
    } else if choice == max_levels + 1 {
        Some(MenuChoice::Quit)
    } else {
        None
    }
}
