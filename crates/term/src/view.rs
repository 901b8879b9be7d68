//! View module: maps session snapshots into display strings.
//!
//! This module is pure (no I/O). It can be unit-tested.

use memory_match_core::{CardFace, ScoreBoard, SessionSnapshot};
use memory_match_types::board_size;

/// Wrap a message in the bordered box used for prompts and notices.
pub fn bordered(text: &str) -> String {
    let border = "-".repeat(text.chars().count() + 4);
    format!("{border}\n| {text} |\n{border}\n")
}

/// Render the board grid with 1-based row/column headers.
///
/// Hidden cards show as `-`; face-up cards show their value. Column widths
/// grow with the largest value so 16x16 boards stay aligned.
pub fn render_board(snap: &SessionSnapshot) -> String {
    let vw = snap.total_pairs.max(1).to_string().len();
    let rw = snap.size.max(1).to_string().len();
    let size = snap.size as i16;

    let mut out = String::new();

    // Column header.
    out.push_str(&" ".repeat(rw + 2));
    for col in 1..=size {
        out.push_str(&format!("{col:>vw$} "));
    }
    out.push('\n');

    let inner = (vw + 1) * size as usize + 1;
    out.push_str(&" ".repeat(rw + 1));
    out.push_str(&"_".repeat(inner));
    out.push('\n');

    for row in 0..size {
        out.push_str(&format!("{:>rw$} |", row + 1));
        for col in 0..size {
            match snap.card(row, col) {
                CardFace::Up(value) => out.push_str(&format!("{value:>vw$} ")),
                CardFace::Hidden => out.push_str(&format!("{:>vw$} ", "-")),
            }
        }
        out.push_str("|\n");
    }

    out.push_str(&" ".repeat(rw + 1));
    out.push_str(&"-".repeat(inner));
    out.push('\n');
    out
}

/// Render the level menu with recorded best scores.
///
/// The quit entry always follows the last level, so the menu adapts to the
/// configured level count.
pub fn render_menu(scores: &ScoreBoard, max_levels: u8) -> String {
    let mut out = String::from("==== Memory Match Game ====\n");
    for level in 1..=max_levels {
        let n = board_size(level);
        out.push_str(&format!("{level}. Level {level} ({n}x{n})"));
        if let Some(best) = scores.best(level) {
            out.push_str(&format!(" (Best: {best} turns)"));
        }
        out.push('\n');
    }
    out.push_str(&format!("{}. Quit\n", max_levels + 1));
    out.push_str("===========================\n");
    out
}

/// Prompt text for the next card selection.
pub fn render_prompt(snap: &SessionSnapshot, first: bool) -> String {
    let slot = if first { "first" } else { "second" };
    format!(
        "Enter {slot} card (row col 1-{}) or -1 -1 for hint ({} left), -9 -9 to quit: ",
        snap.size, snap.hints_remaining
    )
}

/// End-of-level statistics block.
pub fn render_stats(snap: &SessionSnapshot) -> String {
    let mut out = String::from("Game Statistics:\n");
    out.push_str(&format!("Total Turns: {}\n", snap.turns));
    out.push_str(&format!("Total Moves: {}\n", snap.moves));
    out.push_str(&format!("Matches Found: {}\n", snap.matched_pairs));
    out.push_str(&format!("Hints Used: {}\n", snap.hints_used));
    out.push_str("Matched Positions:\n");
    for cell in &snap.matched_cells {
        out.push_str(&format!("(Row {}, Col {})\n", cell.row + 1, cell.col + 1));
    }
    out.push_str("----------------\n");
    out
}
