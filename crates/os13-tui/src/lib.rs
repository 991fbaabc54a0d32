//! # os13-tui
//!
//! Full-screen surface for the OS13 terminal.
//!
//! This crate provides:
//! - `App`, the event loop that feeds keystrokes and submissions into a
//!   `Session` and fires its deferred effects on time
//! - `TuiState`, the scrollback and prompt line built from engine `Output`s
//! - Key mapping and the header, content, footer and suggestion widgets

mod app;
mod input;
mod state;
mod widgets;

pub use app::{App, dispatch_action};
pub use input::{Action, map_key};
pub use state::{Segment, TuiState};
