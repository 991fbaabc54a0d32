//! Operations a rendering surface performs on behalf of the engine.

use crate::StyledLine;
use serde::{Deserialize, Serialize};

/// A single instruction to the rendering surface.
///
/// The engine never touches the surface directly; it returns these in the
/// order they must be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Append a line (and a trailing newline).
    Line(StyledLine),
    /// Append text without a trailing newline, ahead of the next prompt.
    Inline(StyledLine),
    /// Wipe everything shown so far.
    Clear,
    /// Show the prompt and wait for input.
    Prompt(String),
    /// Swap foreground and background of the whole surface on or off.
    Invert(bool),
    /// Turn the "being watched" indicator on or off.
    Indicator(bool),
    /// Tear the surface down. Nothing follows this.
    Close,
}

impl Output {
    /// Returns the appended line, if this output appends one.
    pub fn as_line(&self) -> Option<&StyledLine> {
        match self {
            Output::Line(line) | Output::Inline(line) => Some(line),
            _ => None,
        }
    }
}
