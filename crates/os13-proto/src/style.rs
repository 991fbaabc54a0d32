//! Style tags and styled lines.

use serde::{Deserialize, Serialize};

/// Presentation class of a line of output.
///
/// Tags carry no semantics beyond how a surface colours the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    /// Untagged terminal text.
    #[default]
    Plain,
    Error,
    Warning,
    Ghost,
    Glitch,
    Whisper,
    System,
    Meta,
    Programmer,
}

impl StyleTag {
    /// Returns the tag name as used in transcripts and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleTag::Plain => "plain",
            StyleTag::Error => "error",
            StyleTag::Warning => "warning",
            StyleTag::Ghost => "ghost",
            StyleTag::Glitch => "glitch",
            StyleTag::Whisper => "whisper",
            StyleTag::System => "system",
            StyleTag::Meta => "meta",
            StyleTag::Programmer => "programmer",
        }
    }
}

impl std::fmt::Display for StyleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of output text with its style.
///
/// The text may contain embedded newlines; surfaces split it into rows and
/// apply the same style to every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledLine {
    pub text: String,
    pub style: StyleTag,
}

impl StyledLine {
    /// Creates a line with an explicit style.
    pub fn new(text: impl Into<String>, style: StyleTag) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Creates an untagged line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleTag::Plain)
    }

    /// Creates an empty line carrying a style.
    pub fn blank(style: StyleTag) -> Self {
        Self::new(String::new(), style)
    }

    /// Returns the rows of this line as the surface will show them.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_split_on_embedded_newlines() {
        let line = StyledLine::new("User: alice\nStatus: OBSERVED", StyleTag::Warning);
        let rows: Vec<_> = line.rows().collect();
        assert_eq!(rows, vec!["User: alice", "Status: OBSERVED"]);
    }

    #[test]
    fn test_blank_line_has_single_empty_row() {
        let line = StyledLine::blank(StyleTag::Ghost);
        assert_eq!(line.rows().count(), 1);
        assert_eq!(line.style, StyleTag::Ghost);
    }

    #[test]
    fn test_style_tag_yaml_names() {
        let tag: StyleTag = serde_yaml::from_str("whisper").unwrap();
        assert_eq!(tag, StyleTag::Whisper);
        assert_eq!(StyleTag::Programmer.to_string(), "programmer");
    }
}
