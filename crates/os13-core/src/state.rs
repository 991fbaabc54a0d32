//! Mutable session state: counters, unlock flags, history, dialogue progress.

use tracing::info;

/// Highest anomaly level.
pub const MAX_ANOMALY_LEVEL: u8 = 7;

/// Commands per anomaly level step.
pub const COMMANDS_PER_LEVEL: u32 = 3;

/// Level at which the meta layer unlocks for good.
pub const META_UNLOCK_LEVEL: u8 = 5;

/// Command count that schedules the fifth-wall disclosure.
pub const FIFTH_WALL_AT: u32 = 30;

/// Command count that unlocks the escape protocol.
pub const ESCAPE_UNLOCK_AT: u32 = 50;

/// Number of keystroke intervals kept for the typing-speed readout.
const TYPING_LOG_LIMIT: usize = 256;

/// Progress through the three security questions.
///
/// While not `Idle`, every submitted line is an answer, never a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeStage {
    #[default]
    Idle,
    Q1Pending,
    Q2Pending,
    Q3Pending,
}

/// What changed while recording one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Milestones {
    pub level_raised: bool,
    pub meta_unlocked: bool,
    /// The fifth-wall disclosure is due (fires once per session).
    pub fifth_wall: bool,
    /// The escape protocol just unlocked (fires once per session).
    pub escape_unlocked: bool,
}

/// The single owned record of everything the session remembers.
#[derive(Debug, Clone, Default)]
pub struct EscalationState {
    command_count: u32,
    anomaly_level: u8,
    history: Vec<String>,
    meta_unlocked: bool,
    escape_unlocked: bool,
    escape_hint_count: u32,
    escape_stage: EscapeStage,
    escape_answers: [String; 3],
    webcam_active: bool,
    fifth_wall_broken: bool,
    system_compromised: bool,
    typing_intervals: Vec<u64>,
}

impl EscalationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command to history and advances every counter it drives.
    ///
    /// The level rises by one each time the count reaches a multiple of
    /// [`COMMANDS_PER_LEVEL`], capped at [`MAX_ANOMALY_LEVEL`].
    pub fn record_command(&mut self, raw: &str) -> Milestones {
        let mut milestones = Milestones::default();

        self.history.push(raw.to_string());
        self.command_count += 1;

        if self.command_count % COMMANDS_PER_LEVEL == 0 && self.anomaly_level < MAX_ANOMALY_LEVEL {
            self.anomaly_level += 1;
            milestones.level_raised = true;
            info!(
                level = self.anomaly_level,
                commands = self.command_count,
                "Anomaly level raised"
            );
        }

        if self.anomaly_level >= META_UNLOCK_LEVEL && !self.meta_unlocked {
            self.meta_unlocked = true;
            milestones.meta_unlocked = true;
            info!("Meta layer unlocked");
        }

        if self.command_count == FIFTH_WALL_AT && !self.fifth_wall_broken {
            self.fifth_wall_broken = true;
            milestones.fifth_wall = true;
        }

        if self.command_count == ESCAPE_UNLOCK_AT && !self.escape_unlocked {
            self.escape_unlocked = true;
            milestones.escape_unlocked = true;
            info!("Escape protocol unlocked");
        }

        milestones
    }

    pub fn command_count(&self) -> u32 {
        self.command_count
    }

    pub fn anomaly_level(&self) -> u8 {
        self.anomaly_level
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Counts history entries containing any of `needles`, ignoring case.
    pub fn history_mentions(&self, needles: &[&str]) -> usize {
        self.history
            .iter()
            .filter(|entry| {
                let entry = entry.to_lowercase();
                needles.iter().any(|needle| entry.contains(needle))
            })
            .count()
    }

    pub fn meta_unlocked(&self) -> bool {
        self.meta_unlocked
    }

    pub fn escape_unlocked(&self) -> bool {
        self.escape_unlocked
    }

    pub fn escape_hint_count(&self) -> u32 {
        self.escape_hint_count
    }

    /// Records one more escape hint shown and returns the new total.
    pub fn note_escape_hint(&mut self) -> u32 {
        self.escape_hint_count += 1;
        self.escape_hint_count
    }

    pub fn escape_stage(&self) -> EscapeStage {
        self.escape_stage
    }

    pub fn set_escape_stage(&mut self, stage: EscapeStage) {
        self.escape_stage = stage;
    }

    pub fn escape_answers(&self) -> &[String; 3] {
        &self.escape_answers
    }

    /// Stores the answer to question `index` (0-based).
    pub fn set_escape_answer(&mut self, index: usize, answer: &str) {
        if let Some(slot) = self.escape_answers.get_mut(index) {
            *slot = answer.to_string();
        }
    }

    pub fn webcam_active(&self) -> bool {
        self.webcam_active
    }

    pub fn set_webcam_active(&mut self, active: bool) {
        self.webcam_active = active;
    }

    pub fn fifth_wall_broken(&self) -> bool {
        self.fifth_wall_broken
    }

    pub fn system_compromised(&self) -> bool {
        self.system_compromised
    }

    pub fn mark_compromised(&mut self) {
        self.system_compromised = true;
    }

    /// Records the gap between two keystrokes.
    pub fn record_keystroke_interval(&mut self, millis: u64) {
        if self.typing_intervals.len() == TYPING_LOG_LIMIT {
            self.typing_intervals.remove(0);
        }
        self.typing_intervals.push(millis);
    }

    /// Average seconds per keystroke over the last 20 intervals.
    ///
    /// Reports 0.1 until more than 20 intervals have been seen.
    pub fn average_keystroke_seconds(&self) -> f64 {
        const WINDOW: usize = 20;
        if self.typing_intervals.len() <= WINDOW {
            return 0.1;
        }
        let recent = &self.typing_intervals[self.typing_intervals.len() - WINDOW..];
        let total: u64 = recent.iter().sum();
        total as f64 / WINDOW as f64 / 1000.0
    }
}
