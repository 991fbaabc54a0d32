//! End-to-end scenarios driven through the public `Session` API.

use os13_core::testing::ScriptedEntropy;
use os13_core::{EscapePhase, EscapeStage, FixedClock, SeededEntropy, Session};
use os13_proto::{EnvironmentFacts, Output, StyleTag};

fn facts() -> EnvironmentFacts {
    EnvironmentFacts::new("alice", "box", "Linux", "/home/alice")
}

fn scripted(entropy: ScriptedEntropy) -> Session {
    Session::new(
        facts(),
        Box::new(entropy),
        Box::new(FixedClock::at(2024, 3, 9, 14, 5, 6)),
    )
}

fn seeded(seed: u64) -> Session {
    Session::new(
        facts(),
        Box::new(SeededEntropy::from_seed(seed)),
        Box::new(FixedClock::at(2024, 3, 9, 14, 5, 6)),
    )
}

fn texts(outputs: &[Output]) -> Vec<String> {
    outputs
        .iter()
        .filter_map(Output::as_line)
        .map(|line| line.text.clone())
        .collect()
}

/// Submits a line and lets every effect it started play out.
struct Driver {
    session: Session,
    now: u64,
    transcript: Vec<Output>,
}

impl Driver {
    fn new(session: Session) -> Self {
        Self {
            session,
            now: 0,
            transcript: Vec::new(),
        }
    }

    fn submit(&mut self, line: &str) -> Vec<Output> {
        let outputs = self.session.on_submit(line, self.now);
        self.transcript.extend(outputs.iter().cloned());
        outputs
    }

    fn advance(&mut self, millis: u64) -> Vec<Output> {
        self.now += millis;
        let outputs = self.session.tick(self.now);
        self.transcript.extend(outputs.iter().cloned());
        outputs
    }

    fn run(&mut self, line: &str) -> Vec<Output> {
        let mut outputs = self.submit(line);
        outputs.extend(self.advance(15_000));
        outputs
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Escalation counters
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_count_and_level_follow_submissions() {
    let commands = [
        "ls", "whoami", "date", "pwd", "cat x", "echo hi", "history", "help", "meta", "freedom",
        "sudo ls", "rm a", "format", "nonsense", "clear",
    ];
    for seed in 0..4 {
        let mut session = seeded(seed);
        for n in 1..=60u32 {
            let command = commands[(n as usize + seed as usize) % commands.len()];
            session.on_submit(command, u64::from(n) * 100);
            assert_eq!(session.state().command_count(), n);
            assert_eq!(u32::from(session.state().anomaly_level()), (n / 3).min(7));
        }
    }
}

#[test]
fn test_third_command_raises_level_to_one() {
    let mut session = scripted(ScriptedEntropy::new());
    session.on_submit("ls", 0);
    session.on_submit("ls", 0);
    assert_eq!(session.state().anomaly_level(), 0);
    session.on_submit("ls", 0);
    assert_eq!(session.state().anomaly_level(), 1);
}

#[test]
fn test_meta_unlock_is_monotonic() {
    let mut driver = Driver::new(seeded(11));
    let mut seen = false;
    for _ in 0..45 {
        driver.run("pwd");
        if seen {
            assert!(driver.session.state().meta_unlocked());
        }
        seen |= driver.session.state().meta_unlocked();
    }
    assert!(seen);
}

// ─────────────────────────────────────────────────────────────────────────────
// Level-specific responses
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_whoami_at_level_zero_is_exactly_the_username() {
    let mut session = scripted(ScriptedEntropy::new());
    let outputs = session.on_submit("whoami", 0);
    let lines: Vec<_> = outputs.iter().filter_map(Output::as_line).collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "alice");
    assert_eq!(lines[0].style, StyleTag::Plain);
}

#[test]
fn test_cat_hostname_file_is_always_surveillance() {
    let mut driver = Driver::new(seeded(5));
    for _ in 0..30 {
        let outputs = driver.run("cat box.dat");
        let first = texts(&outputs).into_iter().next().unwrap_or_default();
        assert!(first.contains("box"), "{first}");
        assert!(!first.contains("No such file"), "{first}");
    }
}

#[test]
fn test_suggestions_follow_level() {
    let mut session = scripted(ScriptedEntropy::new());
    assert!(session.suggest("h").is_empty());

    for _ in 0..18 {
        session.on_submit("ls", 0);
    }
    let found = session.suggest("h");
    assert!(!found.is_empty());
    assert!(!found.iter().any(|s| s == "help" || s == "history"));
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot milestones
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_fifth_wall_plays_exactly_once() {
    let mut driver = Driver::new(scripted(ScriptedEntropy::new()));
    for _ in 0..80 {
        driver.run("pwd");
    }
    let made = texts(&driver.transcript)
        .iter()
        .filter(|text| *text == "Someone MADE this.")
        .count();
    assert_eq!(made, 1);
    assert!(driver.session.state().fifth_wall_broken());
}

#[test]
fn test_escape_unlock_announces_and_flickers_hints() {
    let mut driver = Driver::new(scripted(ScriptedEntropy::new()));
    for _ in 0..49 {
        driver.run("pwd");
    }
    assert!(!driver.session.state().escape_unlocked());

    driver.submit("pwd");
    assert!(driver.session.state().escape_unlocked());

    let later = texts(&driver.advance(10_000));
    assert!(later.contains(&"A way out appeared.".to_string()));
    assert!(later.contains(&"press enter and then...type it...".to_string()));
    assert_eq!(driver.session.state().escape_hint_count(), 3);
}

// ─────────────────────────────────────────────────────────────────────────────
// Escape protocol
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_freedom_before_unlock_stays_idle() {
    let mut session = scripted(ScriptedEntropy::new());
    let outputs = session.on_submit("freedom", 0);
    assert_eq!(
        texts(&outputs),
        vec!["freedom: command not found", "(not yet)"]
    );
    assert_eq!(session.state().escape_stage(), EscapeStage::Idle);
    assert_eq!(session.escape_phase(), EscapePhase::Dormant);
    assert_eq!(session.next_deadline(), None);
}

#[test]
fn test_escape_dialogue_reaches_granted() {
    let mut driver = Driver::new(scripted(ScriptedEntropy::new()));
    for _ in 0..50 {
        driver.run("pwd");
    }

    driver.submit("freedom");
    assert_eq!(driver.session.escape_phase(), EscapePhase::Verifying);
    driver.advance(3000);
    assert_eq!(driver.session.state().escape_stage(), EscapeStage::Q1Pending);
    let counted = driver.session.state().command_count();

    // Answers are captured verbatim, even when they look like commands.
    let first = driver.submit("exit");
    assert!(!texts(&first).contains(&"Goodbye, alice.".to_string()));
    assert_eq!(driver.session.state().escape_stage(), EscapeStage::Q2Pending);
    driver.submit("no");
    driver.submit("meta");
    assert_eq!(driver.session.state().escape_stage(), EscapeStage::Idle);
    assert_eq!(driver.session.state().command_count(), counted);
    assert_eq!(driver.session.escape_phase(), EscapePhase::Processing);

    let granted = driver.advance(6000);
    assert!(texts(&granted).contains(&"Goodbye, exit.".to_string()));
    assert!(granted.contains(&Output::Invert(true)));
    assert_eq!(driver.session.escape_phase(), EscapePhase::Granted);

    assert!(driver.submit("ls").is_empty());
    let closing = driver.advance(2000);
    assert_eq!(closing.last(), Some(&Output::Close));
    assert!(driver.session.is_closed());
}

#[test]
fn test_empty_answer_does_not_advance_dialogue() {
    let mut driver = Driver::new(scripted(ScriptedEntropy::new()));
    for _ in 0..50 {
        driver.run("pwd");
    }
    driver.submit("freedom");
    driver.advance(3000);
    driver.submit("   ");
    assert_eq!(driver.session.state().escape_stage(), EscapeStage::Q1Pending);
}

// ─────────────────────────────────────────────────────────────────────────────
// Sequencing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_overlapping_sequences_interleave_by_fire_time() {
    let mut session = scripted(ScriptedEntropy::new());
    session.on_submit("shutdown", 0);
    session.on_submit("format", 600);

    let fired = texts(&session.tick(5000));
    assert_eq!(
        fired,
        vec![
            "System halt failed.",           // 1000
            "Error: alice cannot leave.",    // 1500
            "[████████████████████] 100%",   // 1600
            "The machine won't let you go.", // 2000
            "Format complete.",              // 2600
            "",                              // 3100
            "...but alice is still here...", // 3200
            "You can't delete yourself.",    // 3600
        ]
    );
}
