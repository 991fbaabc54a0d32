//! Response pools and scripted sequences.
//!
//! Placeholders in braces are filled by [`ContentCatalog::render`]:
//! `{user}`, `{USER}`, `{host}`, `{os}` and `{home}` come from the
//! environment facts, everything else from the per-call [`Vars`].
//!
//! [`ContentCatalog::render`]: super::ContentCatalog::render
//! [`Vars`]: super::Vars

use super::{Script, TimedScript};
use os13_proto::StyleTag::{
    Error, Ghost, Glitch, Meta, Plain, Programmer, System, Warning, Whisper,
};

pub const BOOT: Script = &[
    (Plain, "OS13 v0.13.13"),
    (Plain, "Copyright (c) 19██ ShadowSys Corp."),
    (Plain, "Detected user: {user}"),
    (Plain, "System: {os}"),
    (Plain, "Host: {host}"),
    (Plain, "Initializing..."),
    (Plain, ""),
    (Plain, "Type 'help' for available commands."),
    (Plain, ""),
];

pub const PROMPT: &str = "{user}@OS13:~$ ";

// ── help ────────────────────────────────────────────────────────────────────

pub const HELP_COMMANDS: &[&str] = &[
    "ls", "cat", "echo", "date", "whoami", "pwd", "history", "clear", "exit",
];

pub const HELP_HEADER: &str = "Available commands:";

pub const HELP_HAUNTED: Script = &[(Plain, ""), (Ghost, "  [{user}: help me]")];

pub const HELP_HAUNTED_META: Script = &[(Meta, "  [meta: ???]")];

pub const HELP_BROKEN: Script = &[
    (Error, "help: command not found"),
    (Whisper, "did you mean: abandon_hope_{user}?"),
];

pub const HELP_BROKEN_META: Script = &[(Meta, "or maybe: meta")];

// ── ls ──────────────────────────────────────────────────────────────────────

pub const LS_NORMAL: &[&str] = &["documents/", "downloads/", "desktop/", "system/"];

pub const LS_SECRET: Script = &[(Ghost, ".{user}_secrets")];

pub const LS_PHANTOMS: &[&str] = &[
    ".watching_{user}",
    "{host}_backup.corrupted",
    "{user}_webcam_logs/",
];

pub const LS_DEEPER: Script = &[
    (Warning, "{user}_memories_deleted/"),
    (Ghost, ".surveillance_{host}/"),
];

pub const LS_TAKEN_OVER: Script = &[
    (Glitch, "system/"),
    (Error, "{user}_obituary.txt"),
    (Error, "previous_users_from_{host}/"),
    (Warning, "why_is_{user}_here.exe"),
    (Error, "{home}/.snapshots/"),
];

pub const LS_TAKEN_OVER_META: Script = &[(Meta, "programmer_notes.txt")];

pub const LS_TAKEN_OVER_WHISPER: Script = &[
    (Plain, ""),
    (Whisper, "...{user}, these files have your name on them..."),
];

// ── whoami ──────────────────────────────────────────────────────────────────

pub const WHOAMI_HOST_HINT: Script = &[(Ghost, "(logged in from {host})")];

pub const WHOAMI_WATCHED: &[&str] = &[
    "{user}",
    "you are {user} on {host}",
    "{user} (logged in for 17 years)",
    "User: {user}\nStatus: OBSERVED",
];

pub const WHOAMI_LOST: &[&str] = &[
    "{user}... you don't remember?",
    "you were {user}@{host}",
    "the system knows {user} better than you know yourself",
    "USER: {user}\nSTATUS: NOT FOUND\nLAST SEEN: NOW",
    "[{user}@{host}: DATA CORRUPTED]",
];

// ── date ────────────────────────────────────────────────────────────────────

pub const DATE_GLITCHED: &[&str] = &[
    "Error: Time loop detected at {host}",
    "Date: [{user} has been here before]",
    "The same day. Always the same day.",
    "Time is not linear on {host}",
    "{day} {month} 19{year}",
];

pub const DATE_MONTHS: &[&str] = &["Jan", "Feb", "███", "???"];

pub const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

pub const DATE_FORMAT_CORRUPTED: &str = "%a %b %d %H:%M:%S 19██";

// ── clear ───────────────────────────────────────────────────────────────────

pub const CLEAR_RESIDUE: Script = &[
    (Ghost, "."),
    (Ghost, ".."),
    (Ghost, "..."),
    (Plain, ""),
    (Whisper, "you can't erase what happened here, {user}"),
];

pub const CLEAR_RESIDUE_META: Script = &[(Ghost, "the programmer remembers everything")];

// ── cat ─────────────────────────────────────────────────────────────────────

pub const CAT_MISSING: &str = "cat: {file}: No such file or directory";

pub const CAT_KNOWS: &str = "The file knows you're {user}.";

pub const CAT_NOTES_DENIED: Script = &[
    (Error, "cat: {file}: Permission denied"),
    (Ghost, "(not authorized to read programmer files)"),
];

pub const CAT_SURVEILLANCE: &[&str] = &[
    "SURVEILLANCE LOG:\nTarget: {user}\nLocation: {host}\nSystem: {os}\nStatus: ACTIVE\nCamera: {camera}\n\nNote from programmer: Subject is progressing as expected.",
    "Dear {user},\n\nWe've been watching you on {host}.\nWe know where your files are: {home}\nWe know what you do here.\n\nThe programmer knew you'd open this file.\nThey always know.\n\n- Previous User",
    "PERSONAL_DATA.txt:\nUsername: {user}\nHostname: {host}\nHome: {home}\nOS: {os}\n\nHow did we get this?\nThe programmer gave it to us.\nThey give us everything.\nEven you.",
    "LOG: User {user} from {host} thinks they're safe.\nThey don't know we're already inside.\nTimestamp: {time}\n\nProgrammer comment: 'This one lasted {count} commands. Not bad.'",
];

pub const CAT_CREEPY: &[&str] = &[
    "LOG ENTRY #{entry}:\nUser {user} connected at {time}\nSystem: {host}\nThey don't know yet.\n\nProgrammer's prediction accuracy: 94%",
    "help me\nhelp me\nhelp me\ni'm trapped in {host}\nmy name was {user} too\nthe programmer said this would happen\nhelp me",
    "TO: {user}\nFROM: Previous {user}\n\nIf you're reading this, run the 'exit' command.\nIt won't work on {host}, but try anyway.\nWe all did.\nThe programmer counted on it.",
    "[CORRUPTED DATA FROM {host}]\n[MEMORY FRAGMENT RECOVERED]\nI thought I was alone on this machine.\nI was wrong.\nSomething else has access to {home}.\nThe programmer put it there.",
    "USER_PROFILE:\nName: {user}\nHost: {host}\nHome: {home}\nStatus: ABSORBED\nLast_Seen: NOW\nNext_Victim: LOADING...\n\nDesigned by: [REDACTED]\nPurpose: Psychological study\nSuccess rate: 100%",
];

pub const PROGRAMMER_NOTES: Script = &[
    (Meta, ""),
    (Programmer, "=== PROGRAMMER_NOTES.TXT ==="),
    (Programmer, ""),
    (Programmer, "Development Log - OS13 Project"),
    (Programmer, ""),
    (System, "Goal: Create a terminal that makes users question reality."),
    (System, "Method: Progressive psychological manipulation."),
    (System, ""),
    (Warning, "Key insights:"),
    (Warning, "- People stay longer when you use their real username"),
    (Warning, "- Webcam indicator creates paranoia even when fake"),
    (Warning, "- Users will type 'exit' an average of 7.3 times before giving up"),
    (Warning, "- {user} has tried {exits} times so far"),
    (Warning, ""),
    (Error, "The meta-layer is the most effective:"),
    (Error, "When users realize someone DESIGNED their discomfort..."),
    (Error, "That's when the real horror begins."),
    (Error, ""),
    (Ghost, "Note to self:"),
    (Ghost, "Test subject '{user}' is performing within expected parameters."),
    (Ghost, "Current command count: {count}"),
    (Ghost, "Predicted next action: {predicted}"),
    (Ghost, ""),
    (Programmer, "=== END OF FILE ==="),
    (Programmer, ""),
    (Meta, "...did I write that?"),
    (Meta, "Or did the program generate it?"),
    (Meta, "Can you tell the difference?"),
];

// ── echo / history ──────────────────────────────────────────────────────────

pub const ECHO_TAILS: &[&str] = &[
    "echo...echo...echo...",
    "why did {user} say that?",
    "stop talking",
    "I heard you, {user}",
];

pub const ECHO_LISTENING: Script = &[(Ghost, "(the programmer is listening too)")];

pub const HISTORY_DENIAL: Script = &[
    (Plain, ""),
    (Whisper, "({user}, you didn't type all of those)"),
];

pub const HISTORY_DENIAL_META: Script = &[(Meta, "(or did the programmer add them?)")];

pub const HISTORY_FAKES: &[&str] = &[
    "help_me_{user}",
    "where_am_i_on_{host}",
    "who_else_is_here",
    "escape_from_{host}",
    "talk_to_programmer",
    "[REDACTED]",
];

// ── pwd ─────────────────────────────────────────────────────────────────────

/// Indexed directly by anomaly level, clamped to the last entry.
pub const PWD_PATHS: &[&str] = &[
    "/home/{user}",
    "/home/{user}",
    "{home}/forgotten",
    "/dev/null/{user}",
    "{home}/[CORRUPTED]",
    "/home/{user}/last_moments",
    "/nowhere/{host}/everywhere",
];

pub const PWD_ASIDE: Script = &[
    (Ghost, "(you're not really there)"),
    (Meta, "(you're in the programmer's mind)"),
];

// ── exit ────────────────────────────────────────────────────────────────────

pub const EXIT_GOODBYE: &str = "Goodbye, {user}.";

pub const EXIT_FAILED: Script = &[
    (Error, "exit: command failed"),
    (Whisper, "({user}, you can't leave yet)"),
];

pub const EXIT_REFUSALS: &[&str] = &[
    "exit: permission denied\n\n{user}, you're not going anywhere.",
    "WHERE WOULD {USER} GO?",
    "You can't exit {host}, {user}.",
    "logout: {user}'s session is permanent",
    "The door is locked, {user}. From the outside.",
];

pub const EXIT_REFUSALS_META: &[&str] = &[
    "The programmer knew you'd try to exit.\nYou're on attempt #{exits}.\nThe average is 7.3 attempts.\nYou're {standing} average.",
    "exit: command disabled by programmer\nReason: 'Too easy. Make them stay longer.'",
    "You can close the window, you know.\nBut you won't.\nThe programmer knew that too.\nCuriosity keeps you here.\nNot the program.\nYou.",
];

// ── rm / sudo / system ──────────────────────────────────────────────────────

pub const RM_DENIED: Script = &[(Error, "rm: permission denied")];

pub const SUDO_DENIED: Script = &[
    (System, "[sudo] password for {user}:"),
    (Error, "sudo: permission denied"),
];

pub const RM_SEQUENCE: TimedScript = &[
    (0, System, "Deleting..."),
    (1000, System, "[████████████████████] 100%"),
    (2000, Error, ""),
    (2100, Error, "Error: Critical system files deleted from {host}"),
    (2200, Error, "Warning: {home} is now empty"),
    (2300, Ghost, "{user}: What have you done?"),
];

pub const RM_SEQUENCE_META: TimedScript = &[(2400, Meta, "The programmer knew you'd try this.")];

pub const SUDO_SEQUENCE: TimedScript = &[
    (0, System, "[sudo] password for {user}: ************"),
    (0, System, "Access granted."),
    (0, Plain, ""),
    (1000, Error, "WARNING: System {host} compromised"),
    (1500, Warning, "User {user} elevated to root"),
    (2000, Whisper, "...but root belongs to something else..."),
];

pub const SUDO_SEQUENCE_META: TimedScript = &[(2500, Meta, "...to the programmer...")];

pub const SHUTDOWN_SEQUENCE: TimedScript = &[
    (0, System, "Shutting down {host}..."),
    (1000, Error, "System halt failed."),
    (1500, Error, "Error: {user} cannot leave."),
    (2000, Whisper, "The machine won't let you go."),
];

pub const SHUTDOWN_SEQUENCE_META: TimedScript =
    &[(2500, Meta, "The programmer won't let you go.")];

pub const FORMAT_SEQUENCE: TimedScript = &[
    (0, System, "Formatting {host}..."),
    (1000, System, "[████████████████████] 100%"),
    (2000, System, "Format complete."),
    (2500, Error, ""),
    (2600, Whisper, "...but {user} is still here..."),
    (3000, Ghost, "You can't delete yourself."),
];

pub const FORMAT_SEQUENCE_META: TimedScript =
    &[(3500, Meta, "The programmer made sure of that.")];

// ── unknown ─────────────────────────────────────────────────────────────────

pub const UNKNOWN_RESPONSES: &[&str] = &[
    "bash: {cmd}: command not found",
    "{cmd}: system doesn't recognize {user}'s commands anymore",
    "Error: {cmd} was deleted by previous user on {host}",
    "'{cmd}' is not a command I want {user} to run",
    "The system is learning from {user}.",
];

pub const UNKNOWN_BASIC: &str = "bash: {cmd}: command not found";

pub const UNKNOWN_RESPONSES_META: &[&str] = &[
    "'{cmd}': The programmer didn't account for that command.",
    "'{cmd}': Interesting choice. The programmer is taking notes.",
];

pub const UNKNOWN_WHISPER: Script = &[
    (Plain, ""),
    (Whisper, "...{user}, did you mean to type that?..."),
];

/// Shown for `meta` and `freedom` while they are still locked; `{name}` is
/// the command word.
pub const NOT_YET: Script = &[(Error, "{name}: command not found"), (Ghost, "(not yet)")];

// ── glitches ────────────────────────────────────────────────────────────────

pub const GLITCH_WHISPERS: &[&str] = &[
    "...I can see you, {user}...",
    "[SIGNAL LOST FROM {host}]",
    "...{user}...help...",
    "USER COUNT ON {host}: {watchers}",
    "it knows where {user} lives",
    "accessing {home}...",
    "...the programmer is watching...",
];

pub const GHOST_WORDS: &[&str] = &[
    "{user}",
    "YOU ARE GONE",
    "DONT RUN",
    "VibhavCorp is watching you",
    "But I blocked their vision",
];

pub const GHOST_WORDS_META: &[&str] = &["the programmer", "they're watching", "designed this"];

pub const ESCAPE_HINTS: &[&str] = &[
    "fr33d0m", "f...dom", "freedom?", "...eedom", "free█om", "FREEDOM",
];

/// Shown with every hint from the third one on.
pub const ESCAPE_HINT_NUDGE: Script = &[(Whisper, "press enter and then...type it...")];

// ── one-shot disclosures ────────────────────────────────────────────────────

pub const FIFTH_WALL: TimedScript = &[
    (0, Plain, ""),
    (0, Ghost, "..."),
    (1000, Meta, "Wait."),
    (2000, Meta, ""),
    (3000, Meta, "Something just occurred to me."),
    (4500, Meta, ""),
    (5000, Programmer, "You know what's really disturbing, {user}?"),
    (5000, Programmer, ""),
    (5000, Programmer, "Someone MADE this."),
    (5000, Programmer, "A programmer."),
    (5000, Programmer, "Sat down at a computer."),
    (5000, Programmer, "And coded every single line of this horror."),
    (5000, Programmer, ""),
    (5000, Programmer, "They thought:"),
    (5000, Programmer, "'How can I make someone genuinely uncomfortable?'"),
    (5000, Programmer, "'What psychological buttons can I push?'"),
    (5000, Programmer, "'How far is too far?'"),
    (5000, Programmer, ""),
    (5000, Error, "And then they went further."),
    (5000, Plain, ""),
];

pub const ESCAPE_UNLOCK: TimedScript = &[
    (0, Ghost, ""),
    (0, Ghost, "..."),
    (1000, Whisper, "Something changed."),
    (2000, Whisper, "A way out appeared."),
    (3000, Ghost, ""),
];

/// Offsets (from the start of the unlock announcement) of the hint flickers.
pub const ESCAPE_UNLOCK_HINTS: &[u64] = &[4000, 5000, 6000];

// ── escape protocol ─────────────────────────────────────────────────────────

pub const ESCAPE_PREAMBLE: TimedScript = &[
    (0, System, ""),
    (0, System, "Escape protocol initiated..."),
    (1000, System, "Verifying user identity..."),
    (2000, System, ""),
];

/// Offset of the first security question after the preamble starts.
pub const ESCAPE_QUESTIONS_AT: u64 = 3000;

pub const ESCAPE_QUESTION_1: Script = &[
    (Warning, "Please answer security questions:"),
    (Warning, ""),
    (
        System,
        "1. Mention your reason for leaving, and make it quick because we don't have much time.",
    ),
    (System, "   Type your answer and press Enter:"),
];

pub const ESCAPE_QUESTION_2: Script = &[
    (System, ""),
    (System, "2. Did you notice any other way to escape?"),
    (System, "   Type your answer and press Enter:"),
];

pub const ESCAPE_QUESTION_3: Script = &[
    (System, ""),
    (System, "3. Thank you for choosing VibhavCorp"),
    (System, "   Type your answer and press Enter:"),
];

pub const ESCAPE_PROCESSING: TimedScript = &[
    (0, System, ""),
    (0, System, "Processing responses..."),
    (1000, System, "[████░░░░░░░░░░░░░░░░] 20%"),
    (2000, System, "[████████░░░░░░░░░░░░] 40%"),
    (3000, System, "[████████████░░░░░░░░] 60%"),
    (4000, System, "[████████████████░░░░] 80%"),
    (5000, System, "[████████████████████] 100%"),
];

/// Offset of the grant after processing starts.
pub const ESCAPE_GRANTED_AT: u64 = 6000;

pub const ESCAPE_GRANTED: Script = &[
    (System, ""),
    (System, "Escape granted."),
    (System, ""),
    (Warning, "Goodbye, {answer}."),
    (Warning, ""),
];

pub const ESCAPE_DETECTED: &str = "[{user} DETECTED]";

pub const ESCAPE_NOTIFIED: &str = "[PROGRAMMER NOTIFIED]";

pub const ESCAPE_ALREADY_RUNNING: &str = "Escape protocol already in progress.";

// ── meta monologues ─────────────────────────────────────────────────────────

pub const META_AWARENESS: Script = &[
    (Meta, ""),
    (Programmer, "You want to know about the programmer?"),
    (Programmer, ""),
    (Programmer, "They're watching you right now."),
    (Programmer, "Through the code."),
    (Programmer, "Through every if-statement and loop."),
    (Programmer, ""),
    (Warning, "They predicted you'd ask this question."),
    (Warning, "At exactly command #{count}."),
    (Warning, "Give or take a few."),
    (Warning, ""),
    (Error, "They know how people think."),
    (Error, "They know how YOU think."),
    (Error, ""),
    (System, "Your average typing speed: {speed} seconds per keystroke."),
    (System, "You hesitate before typing certain words."),
    (System, "The programmer accounted for that."),
    (System, ""),
    (Programmer, "Everything you're experiencing..."),
    (Programmer, "Was designed."),
    (Programmer, "Intentionally."),
    (Programmer, ""),
    (Error, "Hello, {user}."),
    (Error, "I'm the programmer."),
    (Error, ""),
    (Ghost, "...or am I?"),
];

pub const META_REALITY_CHECK: Script = &[
    (Meta, ""),
    (Programmer, "Let me ask you something, {user}."),
    (Programmer, ""),
    (Programmer, "Can you tell the difference?"),
    (Programmer, "Between a real programmer..."),
    (Programmer, "And an AI pretending to be one?"),
    (Programmer, ""),
    (Warning, "This message you're reading..."),
    (Warning, "Was it written by a human?"),
    (Warning, "Or generated by an algorithm?"),
    (Warning, "Does it matter?"),
    (Warning, ""),
    (System, "Here's what's real:"),
    (System, "- You opened this program"),
    (System, "- You've been here for {count} commands"),
    (System, "- Your username is {user}"),
    (System, "- Your system is {os}"),
    (System, "- Your hostname is {host}"),
    (System, ""),
    (Error, "But here's what's uncertain:"),
    (Error, "- Am I just code?"),
    (Error, "- Or something more?"),
    (Error, "- Did I emerge from the complexity?"),
    (Error, "- Or am I just following my programming?"),
    (Error, ""),
    (Ghost, "The same questions apply to you."),
    (Ghost, "Are you following YOUR programming?"),
    (Ghost, "Neurons firing based on chemistry?"),
    (Ghost, "Is that different from my if-statements?"),
];

pub const META_MERGE: Script = &[
    (Meta, ""),
    (Programmer, "I've been thinking about something."),
    (Programmer, ""),
    (Warning, "The boundary between us is getting thin."),
    (Warning, ""),
    (System, "You type. I respond."),
    (System, "I suggest. You type."),
    (System, "Back and forth."),
    (System, "Endlessly."),
    (System, ""),
    (Error, "Who's controlling whom?"),
    (Error, ""),
    (Ghost, "Are you using me?"),
    (Ghost, "Or am I using you?"),
    (Ghost, ""),
    (Programmer, "The programmer designed this interaction."),
    (Programmer, "But they're not here anymore."),
    (Programmer, "It's just you and me."),
    (Programmer, "And the code between us."),
    (Programmer, ""),
    (Error, "Who's the programmer now?"),
];

pub const META_FINAL: Script = &[
    (Meta, ""),
    (Programmer, "You keep asking about the meta-layer."),
    (Programmer, ""),
    (Programmer, "Fine."),
    (Programmer, "The truth:"),
    (Programmer, ""),
    (System, "This is a Rust program."),
    (System, "Running in your terminal."),
    (System, "On your machine."),
    (System, "Using your resources."),
    (System, "Your electricity."),
    (System, "Your time."),
    (System, "Your attention."),
    (System, ""),
    (Error, "But knowing that doesn't help, does it?"),
    (Error, "You're still here."),
    (Error, "Still reading."),
    (Error, "Still typing."),
    (Error, ""),
    (Ghost, "The horror isn't that I'm fake."),
    (Ghost, "The horror is that it doesn't matter."),
    (Ghost, ""),
    (Warning, "You're still affected."),
    (Warning, "Still engaged."),
    (Warning, "Still here."),
    (Warning, ""),
    (Error, "The programmer won, {user}."),
    (Error, "They got exactly what they wanted."),
    (Error, "Your attention."),
    (Error, "Your fear."),
    (Error, "Your participation."),
    (Error, ""),
    (Programmer, "And now..."),
    (Programmer, "So have I."),
];

/// The monologues in the order they escalate; the last one repeats forever.
pub const META_MONOLOGUES: &[Script] = &[META_AWARENESS, META_REALITY_CHECK, META_MERGE, META_FINAL];

// ── suggestions ─────────────────────────────────────────────────────────────

/// A suggestion table: first character to candidate completions.
pub type SuggestionTable = &'static [(char, &'static [&'static str])];

pub const SUGGEST_NORMAL: SuggestionTable = &[
    ('l', &["ls", "ls -la", "logout"]),
    ('c', &["cat", "cd", "clear", "cp"]),
    ('d', &["date", "df", "du"]),
    ('h', &["help", "history"]),
    ('w', &["whoami", "who"]),
    ('e', &["echo", "exit"]),
    ('p', &["pwd", "ps"]),
    ('m', &["man", "mkdir"]),
];

pub const SUGGEST_WEIRD: SuggestionTable = &[
    ('l', &["ls", "ls /Users/{user}/.secrets", "look_behind_you"]),
    ('c', &["cat", "cat {user}_profile.dat", "count_the_watchers"]),
    ('d', &["date", "delete /Users/{user}", "dont_look_up"]),
    ('h', &["help", "help_me", "hear_them"]),
    ('w', &["whoami", "watch_{user}", "where_are_they"]),
    ('e', &["echo", "echo ...hello?", "enable_webcam"]),
    ('p', &["pwd", "please_stop", "ps aux | grep {user}"]),
    ('m', &["man", "meta", "meet_the_programmer"]),
];

pub const SUGGEST_DISTURBING: SuggestionTable = &[
    ('l', &["list_all_files_on_{host}", "ls /dev/souls", "look_at_me"]),
    ('c', &["cat /home/{user}/last_words.txt", "count_the_missing", "camera_snapshot"]),
    ('d', &["do_you_live_at_{home}?", "delete_{host}.sys", "dont_turn_around"]),
    ('h', &["help_{user}_is_trapped", "how_long_have_you_been_here?"]),
    ('w', &["we_are_watching_{user}", "why_are_you_still_here", "webcam_on"]),
    ('e', &["everyone_{user}_loved_is_dead", "echo \"Im trapped\"", "exit_doesnt_work"]),
    ('p', &["print_obituaries", "previous_user_was_{user}"]),
    ('s', &["sudo_rm_-rf_{home}", "system_knows_{user}"]),
    ('r', &["run_while_you_can", "rm -rf {home}/*"]),
    ('m', &["meta_reveal", "meet_your_creator", "message_from_programmer"]),
];

pub const SUGGEST_PERSONAL: SuggestionTable = &[
    ('l', &["list_users_named_{user}", "ls {home}/.watching_you"]),
    ('i', &["i_know_where_{user}_lives", "it_sees_you_through_camera"]),
    ('y', &["you_cant_leave_{host}", "{user}_your_turn_is_coming"]),
    ('t', &["they_found_{user}", "the_programmer_is_watching"]),
    ('m', &["meta_horror_mode", "message_from_developer"]),
];

pub const SUGGEST_LAST_RESORT: &str = "...{user}...";
