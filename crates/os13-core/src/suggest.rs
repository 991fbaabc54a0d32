//! Autocomplete that gets worse with the level.

use crate::catalog::tables::{self, SuggestionTable};
use crate::catalog::{ContentCatalog, Vars, bands};

/// Most suggestions ever shown at once.
pub const MAX_SUGGESTIONS: usize = 5;

type Rendered = Vec<(char, Vec<String>)>;

/// Suggestion tables rendered once against the environment facts.
///
/// Suggestions are advisory: asking for them never touches session state.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    normal: Rendered,
    weird: Rendered,
    disturbing: Rendered,
    personal: Rendered,
    last_resort: String,
}

impl SuggestionEngine {
    pub fn new(catalog: &ContentCatalog) -> Self {
        let render = |table: SuggestionTable| -> Rendered {
            table
                .iter()
                .map(|(key, entries)| {
                    let entries = entries
                        .iter()
                        .map(|entry| catalog.render(entry, &Vars::new()))
                        .collect();
                    (*key, entries)
                })
                .collect()
        };

        Self {
            normal: render(tables::SUGGEST_NORMAL),
            weird: render(tables::SUGGEST_WEIRD),
            disturbing: render(tables::SUGGEST_DISTURBING),
            personal: render(tables::SUGGEST_PERSONAL),
            last_resort: catalog.render(tables::SUGGEST_LAST_RESORT, &Vars::new()),
        }
    }

    /// Returns up to [`MAX_SUGGESTIONS`] completions for `partial`.
    ///
    /// Empty when `partial` is blank or the level is 0.
    pub fn suggest(&self, partial: &str, level: u8) -> Vec<String> {
        let Some(first) = partial.trim().chars().next() else {
            return Vec::new();
        };
        let key = first.to_lowercase().next().unwrap_or(first);

        let mut found = match bands::SUGGEST.tier(level) {
            0 => Vec::new(),
            1 => fallback(&self.weird, &self.normal, key),
            2 => fallback(&self.disturbing, &self.weird, key),
            _ => {
                let mut combined = lookup(&self.disturbing, key);
                combined.extend(lookup(&self.personal, key));
                if combined.is_empty() {
                    combined.push(self.last_resort.clone());
                }
                combined
            }
        };
        found.truncate(MAX_SUGGESTIONS);
        found
    }
}

fn lookup(table: &Rendered, key: char) -> Vec<String> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, entries)| entries.clone())
        .unwrap_or_default()
}

fn fallback(primary: &Rendered, milder: &Rendered, key: char) -> Vec<String> {
    let found = lookup(primary, key);
    if found.is_empty() {
        lookup(milder, key)
    } else {
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use os13_proto::EnvironmentFacts;

    fn engine() -> SuggestionEngine {
        SuggestionEngine::new(&ContentCatalog::new(EnvironmentFacts::new(
            "alice",
            "box",
            "Linux",
            "/home/alice",
        )))
    }

    #[test]
    fn test_hidden_at_level_zero_or_blank_input() {
        let engine = engine();
        assert!(engine.suggest("h", 0).is_empty());
        assert!(engine.suggest("", 4).is_empty());
        assert!(engine.suggest("   ", 4).is_empty());
    }

    #[test]
    fn test_weird_tier_for_h() {
        assert_eq!(engine().suggest("H", 1), vec!["help", "help_me", "hear_them"]);
    }

    #[test]
    fn test_weird_tier_falls_back_to_normal() {
        // No weird entries start with 's'; neither do normal ones.
        assert!(engine().suggest("s", 2).is_empty());
        assert_eq!(engine().suggest("c", 2)[1], "cat alice_profile.dat");
    }

    #[test]
    fn test_disturbing_tier_falls_back_to_weird() {
        let engine = engine();
        assert_eq!(
            engine.suggest("r", 3),
            vec!["run_while_you_can", "rm -rf /home/alice/*"]
        );
        assert!(engine.suggest("i", 4).is_empty());
    }

    #[test]
    fn test_top_tier_combines_and_never_shows_normal_only() {
        let engine = engine();
        let found = engine.suggest("h", 6);
        assert_eq!(
            found,
            vec!["help_alice_is_trapped", "how_long_have_you_been_here?"]
        );
        assert!(!found.contains(&"history".to_string()));

        let combined = engine.suggest("l", 7);
        assert_eq!(combined.len(), MAX_SUGGESTIONS);
        assert_eq!(combined[3], "list_users_named_alice");
    }

    #[test]
    fn test_top_tier_last_resort() {
        assert_eq!(engine().suggest("z", 5), vec!["...alice..."]);
    }
}
