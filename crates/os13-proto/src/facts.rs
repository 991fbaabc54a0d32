//! Environment facts captured once at startup.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the person and machine running the terminal.
///
/// Captured once before the session starts; every content generator reads it
/// and nothing ever writes it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentFacts {
    pub username: String,
    pub hostname: String,
    pub os_name: String,
    pub home_path: String,
}

impl EnvironmentFacts {
    /// Creates a snapshot from explicit values.
    pub fn new(
        username: impl Into<String>,
        hostname: impl Into<String>,
        os_name: impl Into<String>,
        home_path: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            hostname: hostname.into(),
            os_name: os_name.into(),
            home_path: home_path.into(),
        }
    }

    /// Returns true if `text` mentions the username or hostname, ignoring case.
    ///
    /// Empty facts never match.
    pub fn mentioned_in(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        [&self.username, &self.hostname]
            .into_iter()
            .filter(|needle| !needle.is_empty())
            .any(|needle| haystack.contains(&needle.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentioned_in_is_case_insensitive() {
        let facts = EnvironmentFacts::new("Alice", "Box", "Linux", "/home/alice");
        assert!(facts.mentioned_in("ALICE_diary.txt"));
        assert!(facts.mentioned_in("box.dat"));
        assert!(!facts.mentioned_in("notes.md"));
    }

    #[test]
    fn test_empty_facts_never_match() {
        let facts = EnvironmentFacts::new("", "", "Linux", "/");
        assert!(!facts.mentioned_in("anything"));
    }
}
