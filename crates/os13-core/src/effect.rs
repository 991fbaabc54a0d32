//! Deferred effects and handler responses.
//!
//! Handlers never mutate the surface or schedule timers directly. They return
//! a [`Response`]: what to show now, and which [`Effect`]s to run later. The
//! session feeds the deferred half into the sequencer.

use os13_proto::{Output, StyledLine};

/// A deferred action, stored as data in the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a line.
    Emit(StyledLine),
    /// Swap or restore surface colours.
    Invert(bool),
    /// Try to switch the watch indicator on.
    WatchOn,
    /// Switch the watch indicator off.
    WatchOff,
    /// Flicker an obfuscated escape hint.
    EscapeHint,
    /// Show the first security question and start capturing answers.
    EscapeQuestions,
    /// Finish the escape protocol.
    EscapeGranted,
    /// End the session.
    Close,
}

/// Immediate output plus deferred effects, both in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub outputs: Vec<Output>,
    /// `(delay_ms, effect)` pairs, delays relative to when the handler ran.
    pub scheduled: Vec<(u64, Effect)>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: StyledLine) {
        self.outputs.push(Output::Line(line));
    }

    pub fn lines(&mut self, lines: impl IntoIterator<Item = StyledLine>) {
        self.outputs.extend(lines.into_iter().map(Output::Line));
    }

    pub fn push(&mut self, output: Output) {
        self.outputs.push(output);
    }

    pub fn after(&mut self, delay: u64, effect: Effect) {
        self.scheduled.push((delay, effect));
    }

    /// Queues a rendered timed script, shifted by `base` milliseconds.
    ///
    /// Lines at offset zero with no base are shown immediately.
    pub fn timed(&mut self, base: u64, lines: Vec<(u64, StyledLine)>) {
        for (offset, line) in lines {
            if base == 0 && offset == 0 {
                self.line(line);
            } else {
                self.after(base + offset, Effect::Emit(line));
            }
        }
    }

    /// Appends everything from `other` after this response's content.
    pub fn merge(&mut self, other: Response) {
        self.outputs.extend(other.outputs);
        self.scheduled.extend(other.scheduled);
    }

    /// Returns the text of every immediate line, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.outputs
            .iter()
            .filter_map(Output::as_line)
            .map(|line| line.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use os13_proto::StyleTag;

    #[test]
    fn test_timed_splits_immediate_and_deferred() {
        let mut response = Response::new();
        response.timed(
            0,
            vec![
                (0, StyledLine::plain("now")),
                (1000, StyledLine::plain("later")),
            ],
        );
        assert_eq!(response.texts(), vec!["now"]);
        assert_eq!(
            response.scheduled,
            vec![(1000, Effect::Emit(StyledLine::plain("later")))]
        );
    }

    #[test]
    fn test_timed_with_base_defers_everything() {
        let mut response = Response::new();
        response.timed(2000, vec![(0, StyledLine::blank(StyleTag::Ghost))]);
        assert!(response.outputs.is_empty());
        assert_eq!(response.scheduled[0].0, 2000);
    }
}
