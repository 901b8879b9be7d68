//! Terminal memory-match runner (default binary).
//!
//! Menu loop plus per-level play loop. Input is line-oriented (`row col`
//! token pairs); all engine state lives in `memory_match::core` and the
//! runner only wires prompts, parsing, rendering, and the mismatch pause
//! together.

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use memory_match::core::{GameSession, HintOutcome, ScoreBoard, SelectOutcome};
use memory_match::input::{parse_menu_choice, parse_selection, MenuChoice};
use memory_match::term::{background, view, Console};
use memory_match::types::{TurnPhase, MAX_LEVELS, MISMATCH_PAUSE_MS};

type InputLines = io::Lines<io::StdinLock<'static>>;

fn main() -> Result<()> {
    let mut lines = io::stdin().lock().lines();
    let mut console = Console::new();
    let mut scores = ScoreBoard::new();

    loop {
        console.plain(&view::render_menu(&scores, MAX_LEVELS))?;
        console.info("Select a level: ")?;

        let Some(line) = next_line(&mut lines)? else {
            break;
        };
        match parse_menu_choice(&line, MAX_LEVELS) {
            Some(MenuChoice::Level(level)) => {
                run_level(level, &mut scores, &mut console, &mut lines)?;
            }
            Some(MenuChoice::Quit) => break,
            None => console.warn("Invalid choice!")?,
        }
    }

    console.plain("Thanks for playing!\n")?;
    Ok(())
}

fn next_line(lines: &mut InputLines) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Play one level to completion, quit, or end of input.
fn run_level(
    level: u8,
    scores: &mut ScoreBoard,
    console: &mut Console,
    lines: &mut InputLines,
) -> Result<()> {
    let mut session = GameSession::new(level, rand::random::<u64>());
    console.plain(background(level))?;
    console.board(&session.snapshot())?;

    loop {
        let first = session.phase() == TurnPhase::AwaitingFirst;
        console.prompt(&session.snapshot(), first)?;

        let Some(line) = next_line(lines)? else {
            // Input closed; treat like quitting to the menu.
            return Ok(());
        };
        let Some(selection) = parse_selection(&line) else {
            console.warn("Invalid input! Please enter two numbers.")?;
            console.board(&session.snapshot())?;
            continue;
        };

        match session.select(selection) {
            SelectOutcome::Quit => {
                console.info("Quitting to menu...")?;
                return Ok(());
            }
            SelectOutcome::Flipped { .. } => {
                console.board(&session.snapshot())?;
            }
            SelectOutcome::Rejected(reason) => {
                console.warn(&format!("Invalid move ({}). Try again.", reason.as_str()))?;
                console.board(&session.snapshot())?;
            }
            SelectOutcome::TurnAbandoned { reason, .. } => {
                console.warn(&format!(
                    "Invalid move ({}). Turn abandoned.",
                    reason.as_str()
                ))?;
                console.board(&session.snapshot())?;
            }
            SelectOutcome::Hint(outcome) => {
                report_hint(console, outcome)?;
                console.board(&session.snapshot())?;
            }
            SelectOutcome::Match { level_complete, .. } => {
                console.board(&session.snapshot())?;
                console.success("Match found!")?;
                if level_complete {
                    finish_level(&session, scores, console)?;
                    return Ok(());
                }
            }
            SelectOutcome::NoMatch { .. } => {
                console.board(&session.snapshot())?;
                console.info("No match. Flipping back...")?;
                thread::sleep(Duration::from_millis(MISMATCH_PAUSE_MS));
                session.conceal_mismatch();
                console.board(&session.snapshot())?;
            }
        }
    }
}

fn report_hint(console: &mut Console, outcome: HintOutcome) -> Result<()> {
    match outcome {
        HintOutcome::Suggestion { cell, remaining } => console.info(&format!(
            "Hint: Try card at row {}, col {} ({remaining} hints left)",
            cell.row + 1,
            cell.col + 1
        )),
        HintOutcome::Exhausted => console.warn("No hints remaining!"),
        HintOutcome::NoMoves => console.warn("No valid moves available"),
    }
}

fn finish_level(session: &GameSession, scores: &mut ScoreBoard, console: &mut Console) -> Result<()> {
    let level = session.level();
    let turns = session.turns();
    console.success(&format!(
        "Congratulations! You won Level {level} in {turns} turns"
    ))?;

    scores.record(level, turns);
    if let Some(best) = scores.best(level) {
        console.plain(&format!("Best score for Level {level}: {best} turns\n"))?;
    }
    console.plain(&view::render_stats(&session.snapshot()))?;
    Ok(())
}
