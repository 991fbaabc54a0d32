//! Captures the environment facts once at startup.

use crate::config::IdentityOverrides;
use os13_proto::EnvironmentFacts;
use std::env;
use sysinfo::System;
use tracing::debug;

/// Reads the facts from the host, then applies overrides.
///
/// The hostname comes from the OS and the home path from the platform's
/// user directory. Environment variables fill in whatever the host leaves
/// unanswered.
pub fn capture(overrides: &IdentityOverrides) -> EnvironmentFacts {
    let facts = EnvironmentFacts::new(
        var(&["USER", "USERNAME", "LOGNAME"]).unwrap_or_else(|| "user".to_string()),
        hostname(),
        os_name(),
        home_path(),
    );
    debug!(
        user = %facts.username,
        host = %facts.hostname,
        os = %facts.os_name,
        "Captured host facts"
    );
    apply(facts, overrides)
}

/// Replaces each fact that has an override.
pub fn apply(mut facts: EnvironmentFacts, overrides: &IdentityOverrides) -> EnvironmentFacts {
    if let Some(username) = &overrides.username {
        facts.username.clone_from(username);
    }
    if let Some(hostname) = &overrides.hostname {
        facts.hostname.clone_from(hostname);
    }
    if let Some(os_name) = &overrides.os_name {
        facts.os_name.clone_from(os_name);
    }
    if let Some(home_path) = &overrides.home_path {
        facts.home_path.clone_from(home_path);
    }
    facts
}

fn var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.is_empty()))
}

fn hostname() -> String {
    System::host_name()
        .filter(|name| !name.trim().is_empty())
        .or_else(|| var(&["HOSTNAME", "COMPUTERNAME"]))
        .unwrap_or_else(|| "localhost".to_string())
}

fn home_path() -> String {
    dirs::home_dir()
        .map(|path| path.display().to_string())
        .filter(|path| !path.is_empty())
        .or_else(|| var(&["HOME", "USERPROFILE"]))
        .unwrap_or_else(|| "/".to_string())
}

/// The kernel name as `uname -s` would report it.
fn os_name() -> String {
    match env::consts::OS {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        other => System::name()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let facts = EnvironmentFacts::new("real", "realbox", "Linux", "/home/real");
        let overrides = IdentityOverrides {
            username: Some("alice".into()),
            home_path: Some("/home/alice".into()),
            ..IdentityOverrides::default()
        };
        let facts = apply(facts, &overrides);
        assert_eq!(facts.username, "alice");
        assert_eq!(facts.hostname, "realbox");
        assert_eq!(facts.home_path, "/home/alice");
    }

    #[test]
    fn test_capture_never_leaves_blanks() {
        let facts = capture(&IdentityOverrides::default());
        assert!(!facts.username.is_empty());
        assert!(!facts.hostname.is_empty());
        assert!(!facts.os_name.is_empty());
        assert!(!facts.home_path.is_empty());
    }

    #[test]
    fn test_hostname_is_the_one_the_os_reports() {
        let facts = capture(&IdentityOverrides::default());
        if let Some(reported) = System::host_name().filter(|name| !name.trim().is_empty()) {
            assert_eq!(facts.hostname, reported);
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_hostname_matches_the_kernel() {
        let Ok(kernel) = std::fs::read_to_string("/proc/sys/kernel/hostname") else {
            return;
        };
        let kernel = kernel.trim();
        if !kernel.is_empty() {
            assert_eq!(capture(&IdentityOverrides::default()).hostname, kernel);
        }
    }

    #[test]
    fn test_home_path_comes_from_the_user_directory() {
        let facts = capture(&IdentityOverrides::default());
        if let Some(home) = dirs::home_dir() {
            assert_eq!(facts.home_path, home.display().to_string());
        }
    }

    #[test]
    fn test_override_beats_the_host() {
        let overrides = IdentityOverrides {
            hostname: Some("box".into()),
            ..IdentityOverrides::default()
        };
        assert_eq!(capture(&overrides).hostname, "box");
    }
}
