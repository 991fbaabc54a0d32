//! Content catalog: leveled response tables and the template renderer.
//!
//! The catalog is built once per session from the environment facts and is
//! read-only afterwards. Tables live in [`tables`]; this module knows how to
//! turn a template into text and which tier an anomaly level falls into.

pub mod tables;

use crate::entropy::Entropy;
use os13_proto::{EnvironmentFacts, StyleTag, StyledLine};

/// A fixed sequence of styled templates emitted together.
pub type Script = &'static [(StyleTag, &'static str)];

/// A sequence of styled templates with millisecond offsets from its start.
pub type TimedScript = &'static [(u64, StyleTag, &'static str)];

/// Contiguous anomaly-level bands sharing one content table.
///
/// Holds the ascending lower bound of each band; the first bound is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bands(&'static [u8]);

impl Bands {
    /// Returns the index of the band containing `level`.
    pub fn tier(self, level: u8) -> usize {
        self.0.iter().rposition(|&low| level >= low).unwrap_or(0)
    }
}

/// Band boundaries per command category.
pub mod bands {
    use super::Bands;

    pub const HELP: Bands = Bands(&[0, 1, 4]);
    pub const LS: Bands = Bands(&[0, 1, 2, 3, 4]);
    pub const WHOAMI: Bands = Bands(&[0, 1, 3, 5]);
    pub const DATE: Bands = Bands(&[0, 1, 3]);
    pub const CLEAR: Bands = Bands(&[0, 4]);
    pub const CAT: Bands = Bands(&[0, 2, 3]);
    pub const ECHO: Bands = Bands(&[0, 3]);
    pub const HISTORY: Bands = Bands(&[0, 3]);
    pub const EXIT: Bands = Bands(&[0, 2, 4]);
    pub const RM: Bands = Bands(&[0, 3]);
    pub const SUDO: Bands = Bands(&[0, 3]);
    pub const UNKNOWN: Bands = Bands(&[0, 2]);
    pub const SUGGEST: Bands = Bands(&[0, 1, 3, 5]);
}

/// Per-call placeholder values (counters, the command text, timestamps).
#[derive(Debug, Clone, Default)]
pub struct Vars {
    values: Vec<(&'static str, String)>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a placeholder value, replacing any earlier value for the key.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &'static str, value: impl ToString) {
        let value = value.to_string();
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.values.push((key, value)),
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Read-only store of every response template, bound to one set of facts.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    facts: EnvironmentFacts,
}

impl ContentCatalog {
    pub fn new(facts: EnvironmentFacts) -> Self {
        Self { facts }
    }

    pub fn facts(&self) -> &EnvironmentFacts {
        &self.facts
    }

    /// Fills `{placeholders}` in `template`.
    ///
    /// Substituted values are never rescanned, so user-typed text containing
    /// braces comes out verbatim. Unknown placeholders are left as written.
    pub fn render(&self, template: &str, vars: &Vars) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match self.lookup(key, vars) {
                        Some(value) => out.push_str(&value),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn lookup(&self, key: &str, vars: &Vars) -> Option<String> {
        let fact = match key {
            "user" => Some(self.facts.username.clone()),
            "USER" => Some(self.facts.username.to_uppercase()),
            "host" => Some(self.facts.hostname.clone()),
            "os" => Some(self.facts.os_name.clone()),
            "home" => Some(self.facts.home_path.clone()),
            _ => None,
        };
        fact.or_else(|| vars.get(key).map(str::to_string))
    }

    /// Renders a single template into a styled line.
    pub fn line(&self, style: StyleTag, template: &str, vars: &Vars) -> StyledLine {
        StyledLine::new(self.render(template, vars), style)
    }

    /// Renders every line of a script.
    pub fn script(&self, script: Script, vars: &Vars) -> Vec<StyledLine> {
        script
            .iter()
            .map(|(style, template)| self.line(*style, template, vars))
            .collect()
    }

    /// Renders every line of a timed script, keeping the offsets.
    pub fn timed(&self, script: TimedScript, vars: &Vars) -> Vec<(u64, StyledLine)> {
        script
            .iter()
            .map(|(at, style, template)| (*at, self.line(*style, template, vars)))
            .collect()
    }

    /// Uniformly picks one template from a pool and renders it.
    pub fn pick(&self, pool: &[&str], vars: &Vars, entropy: &mut dyn Entropy) -> String {
        let index = entropy.below(pool.len());
        self.render(pool[index], vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedEntropy;

    fn catalog() -> ContentCatalog {
        ContentCatalog::new(EnvironmentFacts::new(
            "alice",
            "box",
            "Linux",
            "/home/alice",
        ))
    }

    #[test]
    fn test_render_fills_facts_and_vars() {
        let vars = Vars::new().with("count", 12);
        let text = catalog().render("{user}@{host} ({os}) {home} #{count} {USER}", &vars);
        assert_eq!(text, "alice@box (Linux) /home/alice #12 ALICE");
    }

    #[test]
    fn test_render_does_not_rescan_substituted_text() {
        let vars = Vars::new().with("cmd", "{user}");
        assert_eq!(catalog().render("bash: {cmd}", &vars), "bash: {user}");
    }

    #[test]
    fn test_render_leaves_unknown_and_unclosed_braces() {
        let text = catalog().render("{nope} and {user", &Vars::new());
        assert_eq!(text, "{nope} and {user");
    }

    #[test]
    fn test_band_cut_points() {
        let whoami: Vec<_> = (0..=7).map(|l| bands::WHOAMI.tier(l)).collect();
        assert_eq!(whoami, vec![0, 1, 1, 2, 2, 3, 3, 3]);

        let help: Vec<_> = (0..=7).map(|l| bands::HELP.tier(l)).collect();
        assert_eq!(help, vec![0, 1, 1, 1, 2, 2, 2, 2]);

        let ls: Vec<_> = (0..=7).map(|l| bands::LS.tier(l)).collect();
        assert_eq!(ls, vec![0, 1, 2, 3, 4, 4, 4, 4]);

        let date: Vec<_> = (0..=7).map(|l| bands::DATE.tier(l)).collect();
        assert_eq!(date, vec![0, 1, 1, 2, 2, 2, 2, 2]);

        let exit: Vec<_> = (0..=7).map(|l| bands::EXIT.tier(l)).collect();
        assert_eq!(exit, vec![0, 0, 1, 1, 2, 2, 2, 2]);
    }

    #[test]
    fn test_pick_uses_entropy_index() {
        let mut entropy = ScriptedEntropy::new().with_picks([2]);
        let text = catalog().pick(tables::WHOAMI_LOST, &Vars::new(), &mut entropy);
        assert_eq!(text, "the system knows alice better than you know yourself");
    }

    #[test]
    fn test_every_meta_monologue_is_non_empty() {
        assert_eq!(tables::META_MONOLOGUES.len(), 4);
        assert!(tables::META_MONOLOGUES.iter().all(|script| !script.is_empty()));
    }
}
