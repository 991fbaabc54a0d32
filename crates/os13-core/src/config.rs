//! YAML configuration.
//!
//! Every field is optional; a missing file means defaults.
//!
//! ```yaml
//! identity:
//!   username: alice
//!   hostname: box
//! seed: 42
//! effects:
//!   glitches: true
//!   indicator: true
//!   flashes: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Files looked for in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["os13.yml", "os13.yaml"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Overrides for the captured environment facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityOverrides {
    pub username: Option<String>,
    pub hostname: Option<String>,
    pub os_name: Option<String>,
    pub home_path: Option<String>,
}

/// Switches for the purely cosmetic effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Post-command glitch roll.
    pub glitches: bool,
    /// The "being watched" indicator cycle.
    pub indicator: bool,
    /// Whole-surface inversion flashes.
    pub flashes: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            glitches: true,
            indicator: true,
            flashes: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Os13Config {
    pub identity: IdentityOverrides,
    /// Fixes the randomness source. Absent means OS entropy.
    pub seed: Option<u64>,
    pub effects: EffectsConfig,
}

impl Os13Config {
    /// Loads and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Loads the first default config file found in `dir`, or defaults.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
            .map_or_else(|| Ok(Self::default()), |path| Self::from_file(&path))
    }

    /// Rejects overrides that would leave the terminal without a name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let blank = |value: &Option<String>| value.as_deref().is_some_and(|v| v.trim().is_empty());
        if blank(&self.identity.username) {
            return Err(ConfigError::Invalid("identity.username must not be empty".into()));
        }
        if blank(&self.identity.hostname) {
            return Err(ConfigError::Invalid("identity.hostname must not be empty".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.identity.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.identity.hostname = Some(hostname.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_is_defaults() {
        let config: Os13Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Os13Config::default());
        assert!(config.effects.glitches);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_effects_keep_other_defaults() {
        let yaml = r"
seed: 42
effects:
  flashes: false
";
        let config: Os13Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(!config.effects.flashes);
        assert!(config.effects.indicator);
    }

    #[test]
    fn test_from_file_reads_identity() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "identity:\n  username: alice\n  hostname: box").unwrap();

        let config = Os13Config::from_file(file.path()).unwrap();
        assert_eq!(config.identity.username.as_deref(), Some("alice"));
        assert_eq!(config.identity.hostname.as_deref(), Some("box"));
    }

    #[test]
    fn test_from_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed: [not a number").unwrap();

        let err = Os13Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Os13Config::from_file(&dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_blank_username_is_rejected() {
        let config = Os13Config::default().with_username("  ");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_discover_prefers_yml_and_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Os13Config::discover(dir.path()).unwrap(), Os13Config::default());

        std::fs::write(dir.path().join("os13.yaml"), "seed: 2").unwrap();
        std::fs::write(dir.path().join("os13.yml"), "seed: 1").unwrap();
        assert_eq!(Os13Config::discover(dir.path()).unwrap().seed, Some(1));
    }
}
