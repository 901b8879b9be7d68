//! Terminal crate - display side of the game.
//!
//! `view` is pure string rendering (testable without a terminal);
//! `console` flushes those strings to stdout with crossterm styling;
//! `backgrounds` holds the decorative level backdrops.

pub use memory_match_core as core;
pub use memory_match_types as types;

pub mod backgrounds;
pub mod console;
pub mod view;

pub use backgrounds::background;
pub use console::Console;
