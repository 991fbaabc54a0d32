//! The escape protocol: three questions, a progress bar, and the way out.
//!
//! While a question is pending the session routes every submitted line here
//! instead of the command interpreter. The routing switch is
//! [`EscapeStage`] in the shared state.

use crate::catalog::{ContentCatalog, Vars, tables};
use crate::effect::{Effect, Response};
use crate::entropy::Entropy;
use crate::state::{EscalationState, EscapeStage};
use os13_proto::{Output, StyleTag, StyledLine};
use tracing::info;

const DETECTED_CHANCE: f64 = 0.3;
const DETECTED_LEVEL: u8 = 4;
const NOTIFIED_CHANCE: f64 = 0.5;
const RESTORE_AFTER: u64 = 50;
const DETECTED_AFTER: u64 = 60;
const NOTIFIED_AFTER: u64 = 100;
const CLOSE_AFTER: u64 = 2000;

/// Where the protocol is, beyond the per-question stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapePhase {
    /// `freedom` has not been accepted yet.
    #[default]
    Dormant,
    /// The identity-verification preamble is playing.
    Verifying,
    /// A question is waiting for its answer.
    Questioning,
    /// Answers are being "processed".
    Processing,
    /// The session is ending. Input is ignored.
    Granted,
}

#[derive(Debug, Clone, Default)]
pub struct EscapeProtocol {
    phase: EscapePhase,
}

impl EscapeProtocol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EscapePhase {
        self.phase
    }

    pub fn is_granted(&self) -> bool {
        self.phase == EscapePhase::Granted
    }

    /// Handles the `freedom` command.
    pub fn begin(&mut self, state: &EscalationState, catalog: &ContentCatalog) -> Response {
        let mut response = Response::new();
        if !state.escape_unlocked() {
            response.lines(catalog.script(tables::NOT_YET, &Vars::new().with("name", "freedom")));
            return response;
        }

        match self.phase {
            EscapePhase::Dormant => {
                info!("Escape protocol initiated");
                self.phase = EscapePhase::Verifying;
                response.timed(0, catalog.timed(tables::ESCAPE_PREAMBLE, &Vars::new()));
                response.after(tables::ESCAPE_QUESTIONS_AT, Effect::EscapeQuestions);
            }
            EscapePhase::Verifying | EscapePhase::Processing => {
                response.line(StyledLine::new(
                    tables::ESCAPE_ALREADY_RUNNING,
                    StyleTag::System,
                ));
            }
            EscapePhase::Questioning | EscapePhase::Granted => {}
        }
        response
    }

    /// Shows the first question and starts capturing answers.
    pub fn open_questions(
        &mut self,
        state: &mut EscalationState,
        catalog: &ContentCatalog,
    ) -> Response {
        let mut response = Response::new();
        if self.phase != EscapePhase::Verifying {
            return response;
        }
        self.phase = EscapePhase::Questioning;
        state.set_escape_stage(EscapeStage::Q1Pending);
        response.lines(catalog.script(tables::ESCAPE_QUESTION_1, &Vars::new()));
        response
    }

    /// Consumes one answer. Never classified, never counted.
    pub fn answer(
        &mut self,
        answer: &str,
        state: &mut EscalationState,
        catalog: &ContentCatalog,
    ) -> Response {
        let mut response = Response::new();
        let vars = Vars::new();
        match state.escape_stage() {
            EscapeStage::Idle => {}
            EscapeStage::Q1Pending => {
                state.set_escape_answer(0, answer);
                state.set_escape_stage(EscapeStage::Q2Pending);
                response.lines(catalog.script(tables::ESCAPE_QUESTION_2, &vars));
            }
            EscapeStage::Q2Pending => {
                state.set_escape_answer(1, answer);
                state.set_escape_stage(EscapeStage::Q3Pending);
                response.lines(catalog.script(tables::ESCAPE_QUESTION_3, &vars));
            }
            EscapeStage::Q3Pending => {
                state.set_escape_answer(2, answer);
                state.set_escape_stage(EscapeStage::Idle);
                self.phase = EscapePhase::Processing;
                response.timed(0, catalog.timed(tables::ESCAPE_PROCESSING, &vars));
                response.after(tables::ESCAPE_GRANTED_AT, Effect::EscapeGranted);
            }
        }
        response
    }

    /// Plays the farewell and schedules the end of the session.
    pub fn grant(
        &mut self,
        state: &EscalationState,
        catalog: &ContentCatalog,
        entropy: &mut dyn Entropy,
    ) -> Response {
        let mut response = Response::new();
        if self.phase != EscapePhase::Processing {
            return response;
        }
        self.phase = EscapePhase::Granted;
        info!("Escape granted");

        let vars = Vars::new().with("answer", &state.escape_answers()[0]);
        response.lines(catalog.script(tables::ESCAPE_GRANTED, &vars));
        response.after(CLOSE_AFTER, Effect::Close);
        response.push(Output::Invert(true));
        response.after(RESTORE_AFTER, Effect::Invert(false));

        if state.anomaly_level() >= DETECTED_LEVEL && entropy.chance(DETECTED_CHANCE) {
            let detected = catalog.line(StyleTag::Error, tables::ESCAPE_DETECTED, &vars);
            response.after(DETECTED_AFTER, Effect::Emit(detected));
            if state.meta_unlocked() && entropy.chance(NOTIFIED_CHANCE) {
                let notified = catalog.line(StyleTag::Meta, tables::ESCAPE_NOTIFIED, &vars);
                response.after(NOTIFIED_AFTER, Effect::Emit(notified));
            }
        }
        response
    }
}

/// Flickers one obfuscated spelling of the way out. No-op while locked.
pub fn flicker_hint(
    state: &mut EscalationState,
    catalog: &ContentCatalog,
    entropy: &mut dyn Entropy,
) -> Response {
    let mut response = Response::new();
    if !state.escape_unlocked() {
        return response;
    }
    let vars = Vars::new();
    let hint = catalog.pick(tables::ESCAPE_HINTS, &vars, entropy);
    response.line(StyledLine::blank(StyleTag::Ghost));
    response.line(StyledLine::new(hint, StyleTag::Ghost));
    if state.note_escape_hint() >= 3 {
        response.lines(catalog.script(tables::ESCAPE_HINT_NUDGE, &vars));
    }
    response
}
