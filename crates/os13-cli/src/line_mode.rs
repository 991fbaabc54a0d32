//! Plain line-mode surface: stdin in, coloured stdout out.
//!
//! Used with `--plain` or whenever stdout is not a terminal. There is no
//! popup, so suggestions are never shown, and inversion and the indicator
//! have nothing to draw on.

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use os13_core::Session;
use os13_proto::{Output, StyleTag, StyledLine};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Duration, Instant, sleep_until};
use tracing::debug;

/// How long deferred output keeps arriving after stdin closes.
const DRAIN_GRACE_MS: u64 = 10_000;

pub fn paint(text: &str, style: StyleTag) -> ColoredString {
    match style {
        StyleTag::Plain => text.green(),
        StyleTag::Error => text.red(),
        StyleTag::Warning => text.truecolor(0xff, 0xaa, 0x00),
        StyleTag::Ghost => text.bright_black(),
        StyleTag::Glitch => text.magenta(),
        StyleTag::Whisper => text.truecolor(0x00, 0x66, 0x00),
        StyleTag::System => text.truecolor(0x00, 0xaa, 0xff),
        StyleTag::Meta => text.magenta().italic(),
        StyleTag::Programmer => text.yellow(),
    }
}

/// Writes engine outputs to a line-oriented stream.
pub struct Printer<W: Write> {
    out: W,
    /// Emit an ANSI clear for `Output::Clear`.
    clear_screen: bool,
    /// The cursor sits after text that has no newline yet.
    mid_line: bool,
    /// Show typed input after the prompt; stdin is not echoed when piped.
    echo_input: bool,
    prompt: Option<String>,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, clear_screen: bool, echo_input: bool) -> Self {
        Self {
            out,
            clear_screen,
            mid_line: false,
            echo_input,
            prompt: None,
        }
    }

    /// Writes one output. Returns `true` on `Output::Close`.
    pub fn emit(&mut self, output: Output) -> std::io::Result<bool> {
        match output {
            Output::Line(line) => {
                self.break_line()?;
                self.write_line(&line)?;
            }
            Output::Inline(line) => {
                self.break_line()?;
                write!(self.out, "{}", paint(&line.text, line.style))?;
                self.mid_line = true;
            }
            Output::Clear => {
                self.break_line()?;
                if self.clear_screen {
                    write!(self.out, "\x1b[2J\x1b[H")?;
                }
            }
            Output::Prompt(prompt) => {
                write!(self.out, "{}", paint(&prompt, StyleTag::Plain))?;
                self.mid_line = true;
                self.prompt = Some(prompt);
            }
            Output::Invert(_) | Output::Indicator(_) => {}
            Output::Close => {
                self.break_line()?;
                self.prompt = None;
                self.out.flush()?;
                return Ok(true);
            }
        }
        self.out.flush()?;
        Ok(false)
    }

    /// Writes a batch of outputs. With `reprompt`, the last prompt is shown
    /// again if the batch left the cursor on a fresh line.
    pub fn emit_all(&mut self, outputs: Vec<Output>, reprompt: bool) -> std::io::Result<bool> {
        let printed = !outputs.is_empty();
        for output in outputs {
            if self.emit(output)? {
                return Ok(true);
            }
        }
        if reprompt
            && printed
            && !self.mid_line
            && let Some(prompt) = self.prompt.clone()
        {
            self.emit(Output::Prompt(prompt))?;
        }
        Ok(false)
    }

    /// Records a submitted line, echoing it when stdin does not.
    pub fn submitted(&mut self, typed: &str) -> std::io::Result<()> {
        if self.echo_input {
            writeln!(self.out, "{}", paint(typed, StyleTag::Plain))?;
        }
        self.mid_line = false;
        self.out.flush()
    }

    fn write_line(&mut self, line: &StyledLine) -> std::io::Result<()> {
        for row in line.rows() {
            writeln!(self.out, "{}", paint(row, line.style))?;
        }
        self.mid_line = false;
        Ok(())
    }

    fn break_line(&mut self) -> std::io::Result<()> {
        if self.mid_line {
            writeln!(self.out)?;
            self.mid_line = false;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Runs the session over stdin and stdout until it closes or input ends.
pub async fn run(mut session: Session, clear_screen: bool, echo_input: bool) -> Result<()> {
    let start = Instant::now();
    let mut printer = Printer::new(std::io::stdout(), clear_screen, echo_input);
    printer.emit_all(session.boot(), false)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;
    let mut drain_until: Option<u64> = None;

    loop {
        let next = session.next_deadline();
        if let Some(limit) = drain_until
            && next.is_none_or(|at| at > limit)
        {
            break;
        }
        let deadline = next.map(|ms| start + Duration::from_millis(ms));

        tokio::select! {
            biased;

            line = lines.next_line(), if input_open => {
                let now = elapsed_ms(start);
                match line.context("Failed to read stdin")? {
                    Some(line) => {
                        printer.submitted(&line)?;
                        if printer.emit_all(session.on_submit(&line, now), false)? {
                            break;
                        }
                    }
                    None => {
                        debug!(now, "stdin closed, draining deferred output");
                        input_open = false;
                        drain_until = Some(now + DRAIN_GRACE_MS);
                    }
                }
            }

            _ = sleep_until(deadline.unwrap_or(start)), if deadline.is_some() => {
                if printer.emit_all(session.tick(elapsed_ms(start)), true)? {
                    break;
                }
            }

            else => break,
        }

        if session.is_closed() {
            break;
        }
    }

    let mut out = printer.into_inner();
    writeln!(out).context("Failed to write to stdout")?;
    Ok(())
}
