//! Command classification.
//!
//! Matching is case-insensitive on the trimmed input; arguments keep the
//! case they were typed in.

/// Which of the two system-refusal sequences a command triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
    /// `shutdown` or `reboot` anywhere in the input.
    Shutdown,
    /// `format` anywhere in the input.
    Format,
}

/// A classified line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Freedom,
    Meta,
    Help,
    Ls,
    Whoami,
    Date,
    Clear,
    Cat(String),
    Echo(String),
    History,
    Exit,
    Pwd,
    Rm,
    Sudo,
    System(SystemAction),
    Unknown(String),
}

const META_WORDS: &[&str] = &["meta", "programmer", "developer", "creator"];

impl Command {
    /// Classifies a raw input line. First match wins.
    pub fn classify(raw: &str) -> Self {
        let typed = raw.trim();
        let lower = typed.to_lowercase();
        let argument = |skip: usize| typed.get(skip..).unwrap_or_default().to_string();

        if lower == "freedom" {
            return Command::Freedom;
        }
        if META_WORDS.iter().any(|word| lower.contains(word)) {
            return Command::Meta;
        }

        match lower.as_str() {
            "help" => Command::Help,
            "whoami" => Command::Whoami,
            "date" => Command::Date,
            "clear" => Command::Clear,
            "history" => Command::History,
            "exit" | "logout" => Command::Exit,
            "pwd" => Command::Pwd,
            "ls" => Command::Ls,
            _ if lower.starts_with("ls ") => Command::Ls,
            _ if lower.starts_with("cat ") => Command::Cat(argument(4).trim().to_string()),
            _ if lower.starts_with("echo ") => Command::Echo(argument(5)),
            _ if lower.starts_with("rm ") || lower.starts_with("del ") => Command::Rm,
            _ if lower.starts_with("sudo ") => Command::Sudo,
            _ if lower.contains("shutdown") || lower.contains("reboot") => {
                Command::System(SystemAction::Shutdown)
            }
            _ if lower.contains("format") => Command::System(SystemAction::Format),
            _ => Command::Unknown(typed.to_string()),
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Freedom => "freedom",
            Command::Meta => "meta",
            Command::Help => "help",
            Command::Ls => "ls",
            Command::Whoami => "whoami",
            Command::Date => "date",
            Command::Clear => "clear",
            Command::Cat(_) => "cat",
            Command::Echo(_) => "echo",
            Command::History => "history",
            Command::Exit => "exit",
            Command::Pwd => "pwd",
            Command::Rm => "rm",
            Command::Sudo => "sudo",
            Command::System(_) => "system",
            Command::Unknown(_) => "unknown",
        }
    }
}
