//! Turn processing and validation, including the three end-to-end scenarios
//! on the deterministic [[1,2],[2,1]] fixture.

use memory_match::core::{Board, GameSession, HintOutcome, SelectOutcome};
use memory_match::types::{Cell, RejectReason, Selection, TurnPhase};

fn fixture(level: u8) -> GameSession {
    GameSession::with_board(Board::from_values(2, vec![1, 2, 2, 1]), level)
}

fn pick(session: &mut GameSession, row: i16, col: i16) -> SelectOutcome {
    session.select(Selection::Cell(Cell::new(row, col)))
}

// Scenario A: mismatch, then two matches complete the level in 3 turns.
#[test]
fn test_scenario_a_full_level() {
    let mut session = fixture(1);

    // (1,1) then (1,2): values 1 and 2.
    pick(&mut session, 0, 0);
    let outcome = pick(&mut session, 0, 1);
    assert!(matches!(outcome, SelectOutcome::NoMatch { values: [1, 2], .. }));
    assert_eq!(session.turns(), 1);
    assert_eq!(session.matched_count(), 0);
    session.conceal_mismatch();

    // (1,1) then (2,2): values 1 and 1.
    pick(&mut session, 0, 0);
    let outcome = pick(&mut session, 1, 1);
    assert!(matches!(
        outcome,
        SelectOutcome::Match {
            value: 1,
            level_complete: false,
            ..
        }
    ));
    assert!(session.is_matched(Cell::new(0, 0)));
    assert!(session.is_matched(Cell::new(1, 1)));
    assert_eq!(session.matched_count(), 2);

    // (1,2) then (2,1): values 2 and 2, completing the board.
    pick(&mut session, 0, 1);
    let outcome = pick(&mut session, 1, 0);
    assert!(matches!(
        outcome,
        SelectOutcome::Match {
            value: 2,
            level_complete: true,
            ..
        }
    ));
    assert!(session.level_complete());
    assert_eq!(session.turns(), 3);
    assert_eq!(session.matched_count(), 4);
}

// Scenario B: repeating the first pick as the second pick trips the
// history-based repeat rule, not just flipped-set membership.
#[test]
fn test_scenario_b_repeat_selection() {
    let mut session = fixture(1);

    pick(&mut session, 0, 0);
    let outcome = pick(&mut session, 0, 0);
    assert_eq!(
        outcome,
        SelectOutcome::TurnAbandoned {
            first: Cell::new(0, 0),
            reason: RejectReason::RepeatsPrevious,
        }
    );

    // Rolled back completely: cell concealed again, nothing counted.
    assert!(!session.is_flipped(Cell::new(0, 0)));
    assert_eq!(session.moves(), 0);
    assert_eq!(session.turns(), 0);
}

// Scenario C: hint with an empty budget changes nothing.
#[test]
fn test_scenario_c_hint_exhaustion() {
    let mut session = fixture(1);
    assert!(matches!(
        session.select(Selection::Hint),
        SelectOutcome::Hint(HintOutcome::Suggestion { .. })
    ));
    assert_eq!(session.hints_remaining(), 0);

    let outcome = session.select(Selection::Hint);
    assert_eq!(outcome, SelectOutcome::Hint(HintOutcome::Exhausted));
    assert_eq!(session.hints_remaining(), 0);
    assert_eq!(session.moves(), 0);
    assert_eq!(session.turns(), 0);
    assert_eq!(session.matched_count(), 0);
    assert!(session.flipped_cells().is_empty());
}

#[test]
fn test_validator_bounds_and_membership() {
    let mut session = fixture(1);

    assert!(!session.is_valid_selection(Cell::new(-1, 0), false));
    assert!(!session.is_valid_selection(Cell::new(0, -1), false));
    assert!(!session.is_valid_selection(Cell::new(2, 0), false));
    assert!(!session.is_valid_selection(Cell::new(0, 2), false));

    pick(&mut session, 0, 0);
    // Flipped cell is invalid with or without the repeat rule.
    assert!(!session.is_valid_selection(Cell::new(0, 0), false));
    assert!(!session.is_valid_selection(Cell::new(0, 0), true));
    assert!(session.is_valid_selection(Cell::new(1, 1), true));

    pick(&mut session, 1, 1); // match
    assert!(!session.is_valid_selection(Cell::new(1, 1), false));
    assert_eq!(
        session.validate(Cell::new(1, 1), false),
        Err(RejectReason::AlreadyMatched)
    );
}

#[test]
fn test_turn_counter_only_on_resolved_turns() {
    let mut session = fixture(1);

    // Rejected first pick: no turn.
    pick(&mut session, 9, 9);
    assert_eq!(session.turns(), 0);

    // Abandoned turn: no turn.
    pick(&mut session, 0, 0);
    pick(&mut session, 0, 0);
    assert_eq!(session.turns(), 0);

    // Quit mid-turn: no turn.
    pick(&mut session, 0, 0);
    session.select(Selection::Quit);
    assert_eq!(session.turns(), 0);

    // Mismatch and match each count exactly one.
    pick(&mut session, 0, 0);
    pick(&mut session, 0, 1);
    assert_eq!(session.turns(), 1);
    session.conceal_mismatch();
    pick(&mut session, 0, 0);
    pick(&mut session, 1, 1);
    assert_eq!(session.turns(), 2);
}

#[test]
fn test_no_match_leaves_matched_set_unchanged() {
    let mut session = fixture(1);
    pick(&mut session, 0, 0);
    pick(&mut session, 0, 1);
    assert_eq!(session.matched_count(), 0);
    session.conceal_mismatch();
    assert_eq!(session.matched_count(), 0);
    assert!(session.flipped_cells().is_empty());
}

#[test]
fn test_flipped_set_empty_between_turns() {
    let mut session = fixture(1);
    assert!(session.flipped_cells().is_empty());

    pick(&mut session, 0, 0);
    pick(&mut session, 1, 1);
    assert!(session.flipped_cells().is_empty());

    pick(&mut session, 0, 1);
    pick(&mut session, 1, 0);
    assert!(session.flipped_cells().is_empty());
    assert!(session.level_complete());
}

#[test]
fn test_quit_rolls_back_pending_first_pick() {
    let mut session = fixture(1);
    pick(&mut session, 0, 0);
    assert_eq!(session.moves(), 1);
    assert_eq!(session.phase(), TurnPhase::AwaitingSecond);

    assert_eq!(session.select(Selection::Quit), SelectOutcome::Quit);
    assert_eq!(session.moves(), 0);
    assert!(session.flipped_cells().is_empty());
    assert_eq!(session.phase(), TurnPhase::AwaitingFirst);
}

#[test]
fn test_hint_budget_floor_and_decrement() {
    let mut session = fixture(3);
    assert_eq!(session.hints_remaining(), 3);

    for expected in (0..3u8).rev() {
        match session.select(Selection::Hint) {
            SelectOutcome::Hint(HintOutcome::Suggestion { remaining, .. }) => {
                assert_eq!(remaining, expected);
            }
            other => panic!("expected a suggestion, got {other:?}"),
        }
    }
    // Floor at zero; further requests are exhausted, never negative.
    assert_eq!(
        session.select(Selection::Hint),
        SelectOutcome::Hint(HintOutcome::Exhausted)
    );
    assert_eq!(session.hints_remaining(), 0);
}

#[test]
fn test_random_session_perfect_play() {
    // Play a seeded 4x4 session with full knowledge of the board: pair up
    // the first concealed cell with its partner every turn.
    let mut session = GameSession::new(2, 999);
    let cells: Vec<Cell> = session.board().cells().collect();

    while !session.level_complete() {
        let first = cells
            .iter()
            .copied()
            .find(|&c| session.is_concealed(c))
            .expect("incomplete level must have concealed cells");
        let value = session.board().value(first);
        let partner = cells
            .iter()
            .copied()
            .find(|&c| c != first && session.is_concealed(c) && session.board().value(c) == value)
            .expect("concealed cell must have a concealed partner");

        session.select(Selection::Cell(first));
        let outcome = session.select(Selection::Cell(partner));
        assert!(matches!(outcome, SelectOutcome::Match { .. }));
    }

    assert_eq!(session.matched_count(), 16);
    assert_eq!(session.turns(), 8);
    assert_eq!(session.moves(), 16);
}
