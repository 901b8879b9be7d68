//! Hint module - suggests a concealed card with a findable partner
//!
//! The scan is deterministic for a fixed session state: the origin is the
//! first concealed cell in row-major order, and its partner is located with
//! an explicit queue-based breadth-first walk over orthogonally adjacent
//! concealed cells (no recursion, bounded by the visited mask). If the
//! partner sits in a region the walk cannot reach, a row-major sweep finds
//! it instead, so a hint is produced whenever an eligible pair exists.

use std::collections::VecDeque;

use memory_match_types::Cell;

use crate::session::GameSession;

/// Find the partner of the first concealed cell, if any.
///
/// Returns `None` only when no concealed cell shares the origin's value,
/// which can happen solely when the origin's partner is currently face up.
pub(crate) fn find_hint(session: &GameSession) -> Option<Cell> {
    let board = session.board();
    let origin = board.cells().find(|&c| session.is_concealed(c))?;
    let value = board.value(origin)?;

    let mut visited = vec![false; board.cell_count()];
    let mut queue = VecDeque::new();

    if let Some(idx) = board.index(origin) {
        visited[idx] = true;
    }
    queue.push_back(origin);

    while let Some(cell) = queue.pop_front() {
        if cell != origin && board.value(cell) == Some(value) {
            return Some(cell);
        }
        for next in cell.neighbors() {
            let Some(idx) = board.index(next) else {
                continue;
            };
            if visited[idx] || !session.is_concealed(next) {
                continue;
            }
            visited[idx] = true;
            queue.push_back(next);
        }
    }

    // Partner not reachable through adjacent concealed cells.
    board
        .cells()
        .find(|&c| c != origin && session.is_concealed(c) && board.value(c) == Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use memory_match_types::Selection;

    #[test]
    fn test_hint_is_deterministic() {
        let board = Board::from_values(2, vec![1, 2, 2, 1]);
        let a = GameSession::with_board(board.clone(), 1);
        let b = GameSession::with_board(board, 1);
        assert_eq!(find_hint(&a), find_hint(&b));
    }

    #[test]
    fn test_hint_finds_partner_of_first_concealed() {
        let session = GameSession::with_board(Board::from_values(2, vec![1, 2, 2, 1]), 1);
        // Origin is (0,0) with value 1; its partner sits at (1,1).
        assert_eq!(find_hint(&session), Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_hint_skips_matched_cards() {
        let mut session = GameSession::with_board(
            Board::from_values(2, vec![1, 1, 2, 2]),
            2,
        );
        session.select(Selection::Cell(Cell::new(0, 0)));
        session.select(Selection::Cell(Cell::new(0, 1)));
        // Pair 1 is matched; the hint must point at pair 2.
        assert_eq!(find_hint(&session), Some(Cell::new(1, 1)));
    }

    #[test]
    fn test_hint_reaches_distant_partner() {
        // Value 1 sits in opposite corners of a 4x4 board; the walk has to
        // cross the whole grid to find it.
        let values = vec![
            1, 2, 2, 3, //
            4, 5, 5, 3, //
            4, 6, 6, 7, //
            8, 8, 7, 1, //
        ];
        let session = GameSession::with_board(Board::from_values(4, values), 4);
        assert_eq!(find_hint(&session), Some(Cell::new(3, 3)));
    }

    #[test]
    fn test_hint_fallback_when_walk_is_cut_off() {
        // Match the two pairs around the top-left corner so the concealed
        // region containing (0,0)'s partner is disconnected from it.
        //   1 2 | 2 is matched away along with 3, isolating (0,0).
        let values = vec![
            1, 2, 3, 4, //
            2, 3, 5, 4, //
            6, 7, 5, 8, //
            6, 7, 8, 1, //
        ];
        let mut session = GameSession::with_board(Board::from_values(4, values), 4);
        session.select(Selection::Cell(Cell::new(0, 1)));
        session.select(Selection::Cell(Cell::new(1, 0)));
        session.select(Selection::Cell(Cell::new(0, 2)));
        session.select(Selection::Cell(Cell::new(1, 1)));
        assert!(session.is_matched(Cell::new(0, 1)));
        assert!(session.is_matched(Cell::new(1, 0)));

        // Origin (0,0) has no concealed orthogonal neighbors left, yet the
        // sweep still locates its partner at (3,3).
        assert_eq!(find_hint(&session), Some(Cell::new(3, 3)));
    }

    #[test]
    fn test_hint_none_when_partner_is_face_up() {
        let mut session = GameSession::with_board(Board::from_values(2, vec![1, 1, 2, 2]), 2);
        // Match pair 2 away, then flip one card of pair 1.
        session.select(Selection::Cell(Cell::new(1, 0)));
        session.select(Selection::Cell(Cell::new(1, 1)));
        session.select(Selection::Cell(Cell::new(0, 0)));
        // Only (0,1) is concealed and its partner is the flipped card.
        assert_eq!(find_hint(&session), None);
    }
}
