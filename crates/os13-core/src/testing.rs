//! Deterministic stand-ins for tests and replays.

use crate::entropy::Entropy;
use std::collections::VecDeque;

/// Replays queued answers instead of rolling dice.
///
/// Each method draws from its own queue. When a queue runs dry the defaults
/// apply: `below` returns 0, `chance` returns false, `between` returns `low`.
/// Queued picks are reduced modulo the bound so they always stay in range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEntropy {
    picks: VecDeque<usize>,
    chances: VecDeque<bool>,
    spans: VecDeque<u64>,
}

impl ScriptedEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    #[must_use]
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    #[must_use]
    pub fn with_spans(mut self, spans: impl IntoIterator<Item = u64>) -> Self {
        self.spans.extend(spans);
        self
    }
}

impl Entropy for ScriptedEntropy {
    fn below(&mut self, bound: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % bound.max(1)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn between(&mut self, low: u64, high: u64) -> u64 {
        self.spans
            .pop_front()
            .map_or(low, |value| value.clamp(low, high.max(low)))
    }
}
