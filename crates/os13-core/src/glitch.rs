//! Post-command glitches.

use crate::catalog::{ContentCatalog, Vars, tables};
use crate::effect::{Effect, Response};
use crate::entropy::Entropy;
use crate::escape;
use crate::state::EscalationState;
use os13_proto::{Output, StyleTag, StyledLine};
use tracing::debug;

/// Chance of a glitch after each command once the level is above 2.
pub const GLITCH_CHANCE: f64 = 0.15;

const FLASH_MS: u64 = 100;

/// Rolls for a glitch after a command.
pub fn roll(
    state: &mut EscalationState,
    catalog: &ContentCatalog,
    entropy: &mut dyn Entropy,
) -> Response {
    if state.anomaly_level() > 2 && entropy.chance(GLITCH_CHANCE) {
        trigger(state, catalog, entropy)
    } else {
        Response::new()
    }
}

/// Plays one glitch chosen uniformly from what the state allows.
pub fn trigger(
    state: &mut EscalationState,
    catalog: &ContentCatalog,
    entropy: &mut dyn Entropy,
) -> Response {
    let mut response = Response::new();
    let choices = if state.escape_unlocked() { 6 } else { 5 };
    let choice = entropy.below(choices);
    debug!(choice, "Glitch");

    match choice {
        0 => response.line(StyledLine::blank(StyleTag::Ghost)),
        1 => {
            let width = entropy.between(5, 40) as usize;
            response.line(StyledLine::new("█".repeat(width), StyleTag::Glitch));
        }
        2 => {
            let vars = Vars::new().with("watchers", entropy.between(2, 99));
            let whisper = catalog.pick(tables::GLITCH_WHISPERS, &vars, entropy);
            response.line(StyledLine::new(whisper, StyleTag::Ghost));
        }
        3 => {
            response.push(Output::Invert(true));
            response.after(FLASH_MS, Effect::Invert(false));
        }
        4 => {
            if state.anomaly_level() >= 4 {
                response.push(Output::Inline(ghost_typing(state, catalog, entropy)));
            }
        }
        _ => response.merge(escape::flicker_hint(state, catalog, entropy)),
    }
    response
}

/// Text that "types itself" ahead of the next prompt.
fn ghost_typing(
    state: &EscalationState,
    catalog: &ContentCatalog,
    entropy: &mut dyn Entropy,
) -> StyledLine {
    let mut pool: Vec<&str> = tables::GHOST_WORDS.to_vec();
    if state.meta_unlocked() {
        pool.extend_from_slice(tables::GHOST_WORDS_META);
    }
    StyledLine::new(catalog.pick(&pool, &Vars::new(), entropy), StyleTag::Ghost)
}
