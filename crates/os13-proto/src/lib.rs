//! # os13-proto
//!
//! Shared types for the OS13 terminal.
//!
//! This crate provides the vocabulary exchanged between the narrative engine
//! and whatever surface renders it:
//! - `StyleTag` and `StyledLine` for classified output text
//! - `EnvironmentFacts`, the read-only snapshot of who is sitting at the keyboard
//! - `Output`, the operations a surface must be able to perform

mod facts;
mod output;
mod style;

pub use facts::EnvironmentFacts;
pub use output::Output;
pub use style::{StyleTag, StyledLine};
