//! Console: writes game output to a real terminal.
//!
//! Output is line-oriented (no raw mode, no alternate screen) because input
//! is typed `row col` pairs. Styling goes through crossterm's command queue
//! so everything is flushed in one write per call.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use memory_match_core::SessionSnapshot;

use crate::view;

pub struct Console {
    stdout: io::Stdout,
}

impl Console {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Print a block of text as-is.
    pub fn plain(&mut self, text: &str) -> Result<()> {
        self.stdout.queue(Print(text))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Print a bordered notice in the given color.
    pub fn notice(&mut self, text: &str, color: Color) -> Result<()> {
        self.stdout.queue(SetForegroundColor(color))?;
        self.stdout.queue(Print(view::bordered(text)))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Informational bordered message (cyan).
    pub fn info(&mut self, text: &str) -> Result<()> {
        self.notice(text, Color::Cyan)
    }

    /// Positive bordered message (green).
    pub fn success(&mut self, text: &str) -> Result<()> {
        self.notice(text, Color::Green)
    }

    /// Problem bordered message (yellow).
    pub fn warn(&mut self, text: &str) -> Result<()> {
        self.notice(text, Color::Yellow)
    }

    /// Print the board grid.
    pub fn board(&mut self, snap: &SessionSnapshot) -> Result<()> {
        self.plain(&view::render_board(snap))
    }

    /// Print the selection prompt without a trailing newline.
    pub fn prompt(&mut self, snap: &SessionSnapshot, first: bool) -> Result<()> {
        self.stdout.queue(SetForegroundColor(Color::Cyan))?;
        self.stdout.queue(Print(view::render_prompt(snap, first)))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
