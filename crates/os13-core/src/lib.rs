//! # os13-core
//!
//! The narrative engine behind the OS13 terminal.
//!
//! This crate provides:
//! - The escalation state and the command interpreter that reads it
//! - The content catalog and its template renderer
//! - A virtual-time event sequencer for delayed output
//! - The escape protocol, the watch indicator and post-command glitches
//! - Level-aware autocomplete suggestions
//! - Configuration loading and environment capture
//!
//! Surfaces talk to a [`Session`]: they feed it submitted lines, keystrokes
//! and clock ticks, and render the [`os13_proto::Output`]s it returns.

pub mod catalog;
pub mod clock;
mod command;
mod config;
mod effect;
pub mod entropy;
pub mod environment;
mod escape;
pub mod glitch;
pub mod indicator;
mod interpreter;
mod sequencer;
mod session;
mod state;
mod suggest;
pub mod testing;

pub use catalog::{Bands, ContentCatalog, Vars};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{Command, SystemAction};
pub use config::{ConfigError, DEFAULT_CONFIG_FILES, EffectsConfig, IdentityOverrides, Os13Config};
pub use effect::{Effect, Response};
pub use entropy::{Entropy, SeededEntropy};
pub use escape::{EscapePhase, EscapeProtocol, flicker_hint};
pub use indicator::IndicatorFlicker;
pub use interpreter::Interpreter;
pub use sequencer::EventSequencer;
pub use session::Session;
pub use state::{
    COMMANDS_PER_LEVEL, ESCAPE_UNLOCK_AT, EscalationState, EscapeStage, FIFTH_WALL_AT,
    MAX_ANOMALY_LEVEL, META_UNLOCK_LEVEL, Milestones,
};
pub use suggest::{MAX_SUGGESTIONS, SuggestionEngine};
