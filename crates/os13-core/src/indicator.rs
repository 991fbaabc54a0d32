//! The fake "being watched" light.
//!
//! Once the level reaches 3 the light switches itself on and off on random
//! timers. From level 4 each switch-off may schedule the next switch-on,
//! so the cycle keeps going without any input.

use crate::effect::{Effect, Response};
use crate::entropy::Entropy;
use crate::state::EscalationState;
use os13_proto::Output;
use tracing::debug;

/// Level from which the light may switch on.
pub const WATCH_LEVEL: u8 = 3;

/// Level from which a switch-off may re-arm the cycle.
pub const RECURRING_LEVEL: u8 = 4;

const ON_DELAY: (u64, u64) = (2000, 8000);
const OFF_DELAY: (u64, u64) = (2000, 8000);
const RECUR_DELAY: (u64, u64) = (3000, 10_000);
const RECUR_CHANCE: f64 = 0.4;

/// Bookkeeping for the indicator cycle.
///
/// The on/off flag itself lives in [`EscalationState`]; this tracks how many
/// switch-on attempts are queued so the post-command trigger does not stack
/// timers.
#[derive(Debug, Clone)]
pub struct IndicatorFlicker {
    enabled: bool,
    pending: u32,
}

impl IndicatorFlicker {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pending: 0,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }

    /// Notes that a switch-on has been queued.
    pub fn note_scheduled(&mut self) {
        self.pending += 1;
    }

    /// Post-command trigger: queue a switch-on if the level allows it and
    /// nothing is lit or queued.
    pub fn arm(&self, state: &EscalationState, entropy: &mut dyn Entropy) -> Option<(u64, Effect)> {
        if !self.enabled
            || state.anomaly_level() < WATCH_LEVEL
            || state.webcam_active()
            || self.pending > 0
        {
            return None;
        }
        let delay = entropy.between(ON_DELAY.0, ON_DELAY.1);
        debug!(delay, "Arming watch indicator");
        Some((delay, Effect::WatchOn))
    }

    /// Runs a queued switch-on.
    pub fn switch_on(
        &mut self,
        state: &mut EscalationState,
        entropy: &mut dyn Entropy,
    ) -> Response {
        self.pending = self.pending.saturating_sub(1);
        let mut response = Response::new();
        if !self.enabled || state.webcam_active() || state.anomaly_level() < WATCH_LEVEL {
            return response;
        }
        state.set_webcam_active(true);
        response.push(Output::Indicator(true));
        response.after(entropy.between(OFF_DELAY.0, OFF_DELAY.1), Effect::WatchOff);
        response
    }

    /// Runs a queued switch-off, possibly re-arming the cycle.
    pub fn switch_off(
        &mut self,
        state: &mut EscalationState,
        entropy: &mut dyn Entropy,
    ) -> Response {
        let mut response = Response::new();
        if !state.webcam_active() {
            return response;
        }
        state.set_webcam_active(false);
        response.push(Output::Indicator(false));
        if state.anomaly_level() >= RECURRING_LEVEL && entropy.chance(RECUR_CHANCE) {
            response.after(entropy.between(RECUR_DELAY.0, RECUR_DELAY.1), Effect::WatchOn);
        }
        response
    }
}

/// Asks for a switch-on after a fixed delay, unless the light is already on.
pub fn request(response: &mut Response, state: &EscalationState, delay: u64) {
    if !state.webcam_active() {
        response.after(delay, Effect::WatchOn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedEntropy;

    fn state_at_level(level: u8) -> EscalationState {
        let mut state = EscalationState::new();
        for _ in 0..u32::from(level) * 3 {
            state.record_command("ls");
        }
        state
    }

    #[test]
    fn test_arm_requires_level_three() {
        let flicker = IndicatorFlicker::new(true);
        let mut entropy = ScriptedEntropy::new().with_spans([5000]);
        assert!(flicker.arm(&state_at_level(2), &mut entropy).is_none());
        assert_eq!(
            flicker.arm(&state_at_level(3), &mut entropy),
            Some((5000, Effect::WatchOn))
        );
    }

    #[test]
    fn test_arm_skips_when_already_pending() {
        let mut flicker = IndicatorFlicker::new(true);
        flicker.note_scheduled();
        let mut entropy = ScriptedEntropy::new();
        assert!(flicker.arm(&state_at_level(4), &mut entropy).is_none());
    }

    #[test]
    fn test_disabled_never_lights() {
        let mut flicker = IndicatorFlicker::new(false);
        let mut state = state_at_level(5);
        let mut entropy = ScriptedEntropy::new();
        assert!(flicker.arm(&state, &mut entropy).is_none());
        assert!(flicker.switch_on(&mut state, &mut entropy).outputs.is_empty());
        assert!(!state.webcam_active());
    }

    #[test]
    fn test_on_then_off_cycle() {
        let mut flicker = IndicatorFlicker::new(true);
        let mut state = state_at_level(4);
        let mut entropy = ScriptedEntropy::new()
            .with_spans([3000, 7000])
            .with_chances([true]);

        flicker.note_scheduled();
        let on = flicker.switch_on(&mut state, &mut entropy);
        assert_eq!(on.outputs, vec![Output::Indicator(true)]);
        assert_eq!(on.scheduled, vec![(3000, Effect::WatchOff)]);
        assert!(state.webcam_active());
        assert_eq!(flicker.pending(), 0);

        let off = flicker.switch_off(&mut state, &mut entropy);
        assert_eq!(off.outputs, vec![Output::Indicator(false)]);
        assert_eq!(off.scheduled, vec![(7000, Effect::WatchOn)]);
        assert!(!state.webcam_active());
    }

    #[test]
    fn test_off_at_level_three_does_not_recur() {
        let mut flicker = IndicatorFlicker::new(true);
        let mut state = state_at_level(3);
        let mut entropy = ScriptedEntropy::new().with_chances([true]);
        flicker.switch_on(&mut state, &mut entropy);
        let off = flicker.switch_off(&mut state, &mut entropy);
        assert!(off.scheduled.is_empty());
    }

    #[test]
    fn test_second_switch_on_while_lit_is_ignored() {
        let mut flicker = IndicatorFlicker::new(true);
        let mut state = state_at_level(3);
        let mut entropy = ScriptedEntropy::new();
        flicker.switch_on(&mut state, &mut entropy);
        assert!(flicker.switch_on(&mut state, &mut entropy).outputs.is_empty());
    }

    #[test]
    fn test_request_respects_active_light() {
        let mut state = state_at_level(3);
        let mut response = Response::new();
        request(&mut response, &state, 500);
        assert_eq!(response.scheduled, vec![(500, Effect::WatchOn)]);

        state.set_webcam_active(true);
        let mut response = Response::new();
        request(&mut response, &state, 500);
        assert!(response.scheduled.is_empty());
    }
}
