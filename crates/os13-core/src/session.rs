//! The session: one owned record, three entry points.
//!
//! Surfaces call [`Session::on_submit`] for every entered line,
//! [`Session::on_keystroke`] while the user types, and [`Session::tick`]
//! whenever [`Session::next_deadline`] has passed. All three take `now_ms`,
//! milliseconds since the session started, and return what to render.

use crate::catalog::{ContentCatalog, Vars, tables};
use crate::clock::{Clock, SystemClock};
use crate::command::Command;
use crate::config::{EffectsConfig, Os13Config};
use crate::effect::{Effect, Response};
use crate::entropy::{Entropy, SeededEntropy};
use crate::environment;
use crate::escape::{self, EscapeProtocol};
use crate::glitch;
use crate::indicator::IndicatorFlicker;
use crate::interpreter::Interpreter;
use crate::sequencer::EventSequencer;
use crate::state::{EscalationState, EscapeStage};
use crate::suggest::SuggestionEngine;
use os13_proto::{EnvironmentFacts, Output};
use tracing::{debug, info};

/// Delay between the milestone command and its announcement.
const MILESTONE_DELAY: u64 = 2000;

pub struct Session {
    catalog: ContentCatalog,
    suggestions: SuggestionEngine,
    state: EscalationState,
    escape: EscapeProtocol,
    indicator: IndicatorFlicker,
    sequencer: EventSequencer<Effect>,
    entropy: Box<dyn Entropy + Send>,
    clock: Box<dyn Clock + Send>,
    effects: EffectsConfig,
    last_keystroke: Option<u64>,
    closed: bool,
}

impl Session {
    pub fn new(
        facts: EnvironmentFacts,
        entropy: Box<dyn Entropy + Send>,
        clock: Box<dyn Clock + Send>,
    ) -> Self {
        let catalog = ContentCatalog::new(facts);
        let suggestions = SuggestionEngine::new(&catalog);
        let effects = EffectsConfig::default();
        Self {
            catalog,
            suggestions,
            state: EscalationState::new(),
            escape: EscapeProtocol::new(),
            indicator: IndicatorFlicker::new(effects.indicator),
            sequencer: EventSequencer::new(),
            entropy,
            clock,
            effects,
            last_keystroke: None,
            closed: false,
        }
    }

    /// Builds a session from config: captured facts with overrides applied,
    /// the configured seed (or OS entropy), and the system clock.
    pub fn from_config(config: &Os13Config) -> Self {
        let facts = environment::capture(&config.identity);
        let entropy = config
            .seed
            .map_or_else(SeededEntropy::from_os, SeededEntropy::from_seed);
        info!(
            user = %facts.username,
            host = %facts.hostname,
            seeded = config.seed.is_some(),
            "Starting session"
        );
        Self::new(facts, Box::new(entropy), Box::new(SystemClock)).with_effects(config.effects)
    }

    #[must_use]
    pub fn with_effects(mut self, effects: EffectsConfig) -> Self {
        self.effects = effects;
        self.indicator = IndicatorFlicker::new(effects.indicator);
        self
    }

    pub fn facts(&self) -> &EnvironmentFacts {
        self.catalog.facts()
    }

    pub fn state(&self) -> &EscalationState {
        &self.state
    }

    pub fn escape_phase(&self) -> escape::EscapePhase {
        self.escape.phase()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn prompt(&self) -> String {
        self.catalog.render(tables::PROMPT, &Vars::new())
    }

    /// The boot banner followed by the first prompt.
    pub fn boot(&self) -> Vec<Output> {
        let mut outputs: Vec<Output> = self
            .catalog
            .script(tables::BOOT, &Vars::new())
            .into_iter()
            .map(Output::Line)
            .collect();
        outputs.push(Output::Prompt(self.prompt()));
        outputs
    }

    /// Handles one submitted line.
    ///
    /// While a security question is pending the line is an answer and is
    /// neither classified nor counted. Otherwise it is recorded first and
    /// then interpreted. Empty input only redisplays the prompt.
    pub fn on_submit(&mut self, raw: &str, now: u64) -> Vec<Output> {
        if self.closed || self.escape.is_granted() {
            return Vec::new();
        }

        let typed = raw.trim();
        if typed.is_empty() {
            return vec![Output::Prompt(self.prompt())];
        }

        let response = if self.state.escape_stage() == EscapeStage::Idle {
            self.run_command(typed)
        } else {
            debug!(stage = ?self.state.escape_stage(), "Capturing escape answer");
            self.escape.answer(typed, &mut self.state, &self.catalog)
        };

        let mut outputs = self.enqueue(now, response);
        if !self.closed {
            outputs.push(Output::Prompt(self.prompt()));
        }
        outputs
    }

    fn run_command(&mut self, typed: &str) -> Response {
        let milestones = self.state.record_command(typed);
        let command = Command::classify(typed);

        let mut response = Interpreter {
            state: &mut self.state,
            catalog: &self.catalog,
            escape: &mut self.escape,
            entropy: self.entropy.as_mut(),
            clock: self.clock.as_ref(),
        }
        .run(&command);

        if self.effects.glitches {
            response.merge(glitch::roll(
                &mut self.state,
                &self.catalog,
                self.entropy.as_mut(),
            ));
        }

        if let Some((delay, effect)) = self.indicator.arm(&self.state, self.entropy.as_mut()) {
            response.after(delay, effect);
        }

        if milestones.fifth_wall {
            info!("Fifth wall breaking");
            response.timed(
                MILESTONE_DELAY,
                self.catalog.timed(tables::FIFTH_WALL, &Vars::new()),
            );
        }

        if milestones.escape_unlocked {
            response.timed(
                MILESTONE_DELAY,
                self.catalog.timed(tables::ESCAPE_UNLOCK, &Vars::new()),
            );
            for offset in tables::ESCAPE_UNLOCK_HINTS {
                response.after(MILESTONE_DELAY + offset, Effect::EscapeHint);
            }
        }

        response
    }

    /// Records keystroke timing and returns the suggestions for `partial`.
    pub fn on_keystroke(&mut self, partial: &str, now: u64) -> Vec<String> {
        if self.closed {
            return Vec::new();
        }
        if let Some(previous) = self.last_keystroke {
            self.state
                .record_keystroke_interval(now.saturating_sub(previous));
        }
        self.last_keystroke = Some(now);
        self.suggestions.suggest(partial, self.state.anomaly_level())
    }

    /// Suggestions for `partial` without recording a keystroke.
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        self.suggestions.suggest(partial, self.state.anomaly_level())
    }

    /// When the next deferred effect is due.
    pub fn next_deadline(&self) -> Option<u64> {
        self.sequencer.next_deadline()
    }

    /// Runs every deferred effect due at or before `now`.
    ///
    /// Effects scheduled by a firing effect count from its fire time, so a
    /// late tick still produces the same sequence.
    pub fn tick(&mut self, now: u64) -> Vec<Output> {
        let mut outputs = Vec::new();
        while let Some((fired_at, effect)) = self.sequencer.pop_due(now) {
            let response = self.apply(effect);
            outputs.extend(self.enqueue(fired_at, response));
            if self.closed {
                break;
            }
        }
        outputs
    }

    fn apply(&mut self, effect: Effect) -> Response {
        let mut response = Response::new();
        match effect {
            Effect::Emit(line) => response.line(line),
            Effect::Invert(on) => response.push(Output::Invert(on)),
            Effect::WatchOn => {
                response = self
                    .indicator
                    .switch_on(&mut self.state, self.entropy.as_mut());
            }
            Effect::WatchOff => {
                response = self
                    .indicator
                    .switch_off(&mut self.state, self.entropy.as_mut());
            }
            Effect::EscapeHint => {
                response =
                    escape::flicker_hint(&mut self.state, &self.catalog, self.entropy.as_mut());
            }
            Effect::EscapeQuestions => {
                response = self.escape.open_questions(&mut self.state, &self.catalog);
            }
            Effect::EscapeGranted => {
                response = self
                    .escape
                    .grant(&self.state, &self.catalog, self.entropy.as_mut());
            }
            Effect::Close => {
                info!(commands = self.state.command_count(), "Session closed");
                self.closed = true;
                self.sequencer.shutdown();
                response.push(Output::Close);
            }
        }
        response
    }

    /// Queues the deferred half of a response and returns the immediate half,
    /// both filtered by the effect switches.
    fn enqueue(&mut self, now: u64, response: Response) -> Vec<Output> {
        for (delay, effect) in response.scheduled {
            match effect {
                Effect::Invert(_) if !self.effects.flashes => continue,
                Effect::WatchOn if !self.indicator.enabled() => continue,
                Effect::WatchOn => self.indicator.note_scheduled(),
                _ => {}
            }
            self.sequencer.schedule(now, delay, effect);
        }

        let flashes = self.effects.flashes;
        response
            .outputs
            .into_iter()
            .filter(|output| flashes || !matches!(output, Output::Invert(_)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::testing::ScriptedEntropy;

    fn session(entropy: ScriptedEntropy) -> Session {
        Session::new(
            EnvironmentFacts::new("alice", "box", "Linux", "/home/alice"),
            Box::new(entropy),
            Box::new(FixedClock::at(2024, 3, 9, 14, 5, 6)),
        )
    }

    #[test]
    fn test_boot_ends_with_prompt() {
        let outputs = session(ScriptedEntropy::new()).boot();
        assert_eq!(
            outputs.first(),
            Some(&Output::Line(os13_proto::StyledLine::plain("OS13 v0.13.13")))
        );
        assert_eq!(
            outputs.last(),
            Some(&Output::Prompt("alice@OS13:~$ ".to_string()))
        );
    }

    #[test]
    fn test_empty_submit_is_a_no_op() {
        let mut session = session(ScriptedEntropy::new());
        let outputs = session.on_submit("   ", 0);
        assert_eq!(outputs, vec![Output::Prompt(session.prompt())]);
        assert_eq!(session.state().command_count(), 0);
        assert!(session.state().history().is_empty());
    }

    #[test]
    fn test_deferred_lines_arrive_on_tick() {
        let mut session = session(ScriptedEntropy::new());
        session.on_submit("shutdown", 0);
        assert_eq!(session.next_deadline(), Some(1000));
        assert!(session.tick(999).is_empty());

        let fired = session.tick(1500);
        let texts: Vec<_> = fired
            .iter()
            .filter_map(Output::as_line)
            .map(|line| line.text.clone())
            .collect();
        assert_eq!(texts, vec!["System halt failed.", "Error: alice cannot leave."]);
    }

    #[test]
    fn test_exit_closes_and_drops_the_queue() {
        let mut session = session(ScriptedEntropy::new());
        session.on_submit("shutdown", 0);
        session.on_submit("exit", 100);

        let fired = session.tick(10_000);
        assert_eq!(fired.last(), Some(&Output::Close));
        assert!(session.is_closed());
        assert_eq!(session.next_deadline(), None);
        assert!(session.on_submit("ls", 10_001).is_empty());
    }

    #[test]
    fn test_flashes_disabled_drops_inversions() {
        let mut session = session(ScriptedEntropy::new().with_chances([true]).with_picks([3]))
            .with_effects(EffectsConfig {
                flashes: false,
                ..EffectsConfig::default()
            });
        for _ in 0..8 {
            session.on_submit("pwd", 0);
        }
        // Ninth command reaches level 3; the glitch roll picks the flash.
        let outputs = session.on_submit("pwd", 0);
        assert!(!outputs.iter().any(|o| matches!(o, Output::Invert(_))));
    }

    #[test]
    fn test_keystrokes_feed_typing_speed() {
        let mut session = session(ScriptedEntropy::new());
        for n in 0..=21u64 {
            session.on_keystroke("l", n * 250);
        }
        assert!((session.state().average_keystroke_seconds() - 0.25).abs() < 1e-9);
    }
}
