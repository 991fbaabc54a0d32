//! # os13
//!
//! A terminal that gets worse the longer you use it.
//!
//! Runs full-screen when both ends of the terminal are interactive, and as a
//! plain line-mode shell otherwise (or with `--plain`).

mod line_mode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use os13_core::{Os13Config, Session};
use os13_tui::App;
use std::fs::File;
use std::io::{IsTerminal, stdin, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a panic hook that restores terminal state before printing panic info.
///
/// A panic inside the full-screen surface would otherwise leave the terminal
/// in raw mode on the alternate screen, hiding the message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        default_hook(panic_info);
    }));
}

/// Color output mode for line mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Colour when stdout is a TTY
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    fn should_use_colors(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => stdout().is_terminal(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "os13",
    version,
    about = "OS13 - a terminal that gets worse the longer you use it"
)]
struct Cli {
    /// Config file (defaults to os13.yml or os13.yaml in the working directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fix the randomness source
    #[arg(long)]
    seed: Option<u64>,

    /// Pretend to be this user
    #[arg(long, value_name = "NAME")]
    user: Option<String>,

    /// Pretend to be on this host
    #[arg(long, value_name = "NAME")]
    host: Option<String>,

    /// Plain line mode instead of the full-screen surface
    #[arg(long)]
    plain: bool,

    /// Color output mode in line mode (auto, always, never)
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    // ─────────────────────────────────────────────────────────────────────────
    // Logging
    // ─────────────────────────────────────────────────────────────────────────
    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `os13_core=trace` (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn filter(&self) -> EnvFilter {
        let fallback = if self.verbose { "debug" } else { "info" };
        match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        }
    }

    /// Loads the config file and layers the identity and seed flags on top.
    fn load_config(&self) -> Result<Os13Config> {
        let mut config = match &self.config {
            Some(path) => Os13Config::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => {
                let cwd = std::env::current_dir().context("Failed to read working directory")?;
                Os13Config::discover(&cwd)?
            }
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(user) = &self.user {
            config = config.with_username(user.clone());
        }
        if let Some(host) = &self.host {
            config = config.with_hostname(host.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

/// The full-screen surface owns the terminal, so logs only ever go to a
/// file there. Line mode may log to stderr when asked to be verbose.
fn init_logging(cli: &Cli, full_screen: bool) -> Result<()> {
    let filter = cli.filter();
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if !full_screen && cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    install_panic_hook();

    let cli = Cli::parse();
    let full_screen = !cli.plain && stdout().is_terminal() && stdin().is_terminal();
    init_logging(&cli, full_screen)?;

    let colors = cli.color.should_use_colors();
    colored::control::set_override(colors);

    let config = cli.load_config()?;
    let session = Session::from_config(&config);

    if full_screen {
        info!("Starting full-screen surface");
        App::new(session).run().await
    } else {
        info!(colors, "Starting line mode");
        line_mode::run(session, colors, !stdin().is_terminal()).await
    }
}
