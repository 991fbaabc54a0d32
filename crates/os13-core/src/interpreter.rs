//! Per-command handlers.
//!
//! Each handler picks a tier from the anomaly level, renders from the
//! catalog, and returns a [`Response`]. Bookkeeping has already happened by
//! the time a handler runs, so the counters it reads include the current
//! command.

use crate::catalog::{ContentCatalog, TimedScript, Vars, bands, tables};
use crate::clock::Clock;
use crate::command::{Command, SystemAction};
use crate::effect::{Effect, Response};
use crate::entropy::Entropy;
use crate::escape::{self, EscapeProtocol};
use crate::indicator;
use crate::state::EscalationState;
use os13_proto::{Output, StyleTag, StyledLine};
use tracing::debug;

/// Lines of history shown by `history`.
const HISTORY_WINDOW: usize = 10;

/// Average exit attempts quoted by the meta refusals.
const AVERAGE_EXITS: usize = 7;

/// Everything a handler may read or touch.
pub struct Interpreter<'a> {
    pub state: &'a mut EscalationState,
    pub catalog: &'a ContentCatalog,
    pub escape: &'a mut EscapeProtocol,
    pub entropy: &'a mut dyn Entropy,
    pub clock: &'a dyn Clock,
}

impl Interpreter<'_> {
    /// Runs the handler for a classified command.
    pub fn run(&mut self, command: &Command) -> Response {
        debug!(
            command = command.name(),
            level = self.state.anomaly_level(),
            "Interpreting"
        );
        match command {
            Command::Freedom => self.escape.begin(self.state, self.catalog),
            Command::Meta => self.meta(),
            Command::Help => self.help(),
            Command::Ls => self.ls(),
            Command::Whoami => self.whoami(),
            Command::Date => self.date(),
            Command::Clear => self.clear(),
            Command::Cat(file) => self.cat(file),
            Command::Echo(text) => self.echo(text),
            Command::History => self.history(),
            Command::Exit => self.exit(),
            Command::Pwd => self.pwd(),
            Command::Rm => self.rm(),
            Command::Sudo => self.sudo(),
            Command::System(action) => self.system(*action),
            Command::Unknown(typed) => self.unknown(typed),
        }
    }

    fn level(&self) -> u8 {
        self.state.anomaly_level()
    }

    fn pick(&mut self, pool: &[&str], vars: &Vars) -> String {
        self.catalog.pick(pool, vars, self.entropy)
    }

    fn meta(&mut self) -> Response {
        let mut response = Response::new();
        if !self.state.meta_unlocked() {
            response.lines(
                self.catalog
                    .script(tables::NOT_YET, &Vars::new().with("name", "meta")),
            );
            return response;
        }

        let asked = self.state.history_mentions(&["meta", "programmer"]);
        let index = asked.saturating_sub(1).min(tables::META_MONOLOGUES.len() - 1);
        debug!(asked, index, "Meta monologue");

        let vars = Vars::new()
            .with("count", self.state.command_count())
            .with(
                "speed",
                format!("{:.3}", self.state.average_keystroke_seconds()),
            );
        response.lines(self.catalog.script(tables::META_MONOLOGUES[index], &vars));
        response
    }

    fn help(&mut self) -> Response {
        let mut response = Response::new();
        let vars = Vars::new();
        let hint_chance = match bands::HELP.tier(self.level()) {
            0 => {
                self.command_list(&mut response);
                return response;
            }
            1 => {
                self.command_list(&mut response);
                response.lines(self.catalog.script(tables::HELP_HAUNTED, &vars));
                if self.state.meta_unlocked() {
                    response.lines(self.catalog.script(tables::HELP_HAUNTED_META, &vars));
                }
                0.3
            }
            _ => {
                response.lines(self.catalog.script(tables::HELP_BROKEN, &vars));
                if self.state.meta_unlocked() {
                    response.lines(self.catalog.script(tables::HELP_BROKEN_META, &vars));
                }
                0.4
            }
        };

        if self.state.escape_unlocked() && self.entropy.chance(hint_chance) {
            response.merge(escape::flicker_hint(self.state, self.catalog, self.entropy));
        }
        response
    }

    fn command_list(&self, response: &mut Response) {
        response.line(StyledLine::plain(tables::HELP_HEADER));
        for name in tables::HELP_COMMANDS {
            response.line(StyledLine::plain(format!("  {name}")));
        }
    }

    fn ls(&mut self) -> Response {
        let mut response = Response::new();
        let vars = Vars::new();
        let tier = bands::LS.tier(self.level());

        if tier < 4 {
            response.lines(tables::LS_NORMAL.iter().map(|name| StyledLine::plain(*name)));
        }
        match tier {
            0 => {}
            1 => response.lines(self.catalog.script(tables::LS_SECRET, &vars)),
            2 => {
                let phantom = self.pick(tables::LS_PHANTOMS, &vars);
                response.line(StyledLine::new(phantom, StyleTag::Warning));
            }
            3 => response.lines(self.catalog.script(tables::LS_DEEPER, &vars)),
            _ => {
                response.lines(self.catalog.script(tables::LS_TAKEN_OVER, &vars));
                if self.state.meta_unlocked() {
                    response.lines(self.catalog.script(tables::LS_TAKEN_OVER_META, &vars));
                }
                if self.entropy.chance(0.3) {
                    response.lines(self.catalog.script(tables::LS_TAKEN_OVER_WHISPER, &vars));
                }
            }
        }
        response
    }

    fn whoami(&mut self) -> Response {
        let mut response = Response::new();
        let vars = Vars::new();
        match bands::WHOAMI.tier(self.level()) {
            0 => response.line(self.catalog.line(StyleTag::Plain, "{user}", &vars)),
            1 => {
                response.line(self.catalog.line(StyleTag::Plain, "{user}", &vars));
                if self.entropy.chance(0.5) {
                    response.lines(self.catalog.script(tables::WHOAMI_HOST_HINT, &vars));
                }
            }
            2 => {
                let text = self.pick(tables::WHOAMI_WATCHED, &vars);
                response.line(StyledLine::new(text, StyleTag::Warning));
            }
            _ => {
                let text = self.pick(tables::WHOAMI_LOST, &vars);
                response.line(StyledLine::new(text, StyleTag::Error));
                if !self.state.webcam_active() && self.entropy.chance(0.4) {
                    indicator::request(&mut response, self.state, 500);
                }
            }
        }
        response
    }

    fn date(&mut self) -> Response {
        let mut response = Response::new();
        let now = self.clock.now();
        match bands::DATE.tier(self.level()) {
            0 => response.line(StyledLine::plain(
                now.format(tables::DATE_FORMAT).to_string(),
            )),
            1 => response.line(StyledLine::new(
                now.format(tables::DATE_FORMAT_CORRUPTED).to_string(),
                StyleTag::Warning,
            )),
            _ => {
                let day = self.entropy.between(1, 31);
                let month = tables::DATE_MONTHS[self.entropy.below(tables::DATE_MONTHS.len())];
                let year = self.entropy.between(0, 99);
                let vars = Vars::new()
                    .with("day", day)
                    .with("month", month)
                    .with("year", year);
                let text = self.pick(tables::DATE_GLITCHED, &vars);
                response.line(StyledLine::new(text, StyleTag::Error));
            }
        }
        response
    }

    fn clear(&mut self) -> Response {
        let mut response = Response::new();
        response.push(Output::Clear);
        if bands::CLEAR.tier(self.level()) > 0 && self.entropy.chance(0.7) {
            let vars = Vars::new();
            response.lines(self.catalog.script(tables::CLEAR_RESIDUE, &vars));
            if self.state.meta_unlocked() {
                response.lines(self.catalog.script(tables::CLEAR_RESIDUE_META, &vars));
            }
            response.line(StyledLine::plain(""));
        }
        response
    }

    fn cat(&mut self, file: &str) -> Response {
        let mut response = Response::new();
        let lower = file.to_lowercase();
        let vars = Vars::new()
            .with("file", file)
            .with("count", self.state.command_count())
            .with("time", self.clock.now().format("%H:%M:%S"));

        if lower.contains("programmer") || lower.contains("notes") {
            if self.state.meta_unlocked() {
                let exits = self.state.history_mentions(&["exit"]);
                let predicted = if self.state.command_count() > 15 {
                    "exit"
                } else {
                    "exploration"
                };
                let vars = vars.with("exits", exits).with("predicted", predicted);
                response.lines(self.catalog.script(tables::PROGRAMMER_NOTES, &vars));
            } else {
                response.lines(self.catalog.script(tables::CAT_NOTES_DENIED, &vars));
            }
            return response;
        }

        if self.catalog.facts().mentioned_in(file) {
            let camera = if self.state.webcam_active() {
                "ON"
            } else {
                "STANDBY"
            };
            let vars = vars.with("camera", camera);
            let text = self.pick(tables::CAT_SURVEILLANCE, &vars);
            response.line(StyledLine::new(text, StyleTag::Error));
            if self.level() >= indicator::WATCH_LEVEL {
                indicator::request(&mut response, self.state, 1000);
            }
            return response;
        }

        match bands::CAT.tier(self.level()) {
            0 => response.line(self.catalog.line(StyleTag::Error, tables::CAT_MISSING, &vars)),
            1 => {
                if self.entropy.chance(0.5) {
                    response.line(self.catalog.line(StyleTag::Error, tables::CAT_MISSING, &vars));
                } else {
                    response.line(self.catalog.line(StyleTag::Warning, tables::CAT_KNOWS, &vars));
                }
            }
            _ => {
                let vars = vars.with("entry", self.entropy.between(1, 999));
                let text = self.pick(tables::CAT_CREEPY, &vars);
                response.line(StyledLine::new(text, StyleTag::Error));
            }
        }
        response
    }

    fn echo(&mut self, text: &str) -> Response {
        let mut response = Response::new();
        if bands::ECHO.tier(self.level()) == 0 {
            response.line(StyledLine::plain(text));
            return response;
        }

        let vars = Vars::new();
        if self.entropy.chance(0.6) {
            let tail = self.pick(tables::ECHO_TAILS, &vars);
            response.line(StyledLine::new(format!("{text}...{tail}"), StyleTag::Warning));
            if self.state.meta_unlocked() && self.entropy.chance(0.3) {
                response.lines(self.catalog.script(tables::ECHO_LISTENING, &vars));
            }
        } else {
            response.line(StyledLine::plain(text));
            response.line(StyledLine::new(format!("...{text}..."), StyleTag::Ghost));
        }
        response
    }

    fn history(&mut self) -> Response {
        let mut response = Response::new();
        let vars = Vars::new();
        let haunted = bands::HISTORY.tier(self.level()) > 0;
        let history = self.state.history();
        let recent: Vec<String> = history[history.len().saturating_sub(HISTORY_WINDOW)..].to_vec();

        for (index, entry) in recent.iter().enumerate() {
            let number = index + 1;
            if haunted && self.entropy.chance(0.3) {
                let fake = self.pick(tables::HISTORY_FAKES, &vars);
                response.line(StyledLine::new(format!("  {number}  {fake}"), StyleTag::Ghost));
            } else {
                response.line(StyledLine::plain(format!("  {number}  {entry}")));
            }
        }

        if haunted && self.entropy.chance(0.5) {
            response.lines(self.catalog.script(tables::HISTORY_DENIAL, &vars));
            if self.state.meta_unlocked() {
                response.lines(self.catalog.script(tables::HISTORY_DENIAL_META, &vars));
            }
        }
        response
    }

    fn exit(&mut self) -> Response {
        let mut response = Response::new();
        match bands::EXIT.tier(self.level()) {
            0 => {
                response.line(self.catalog.line(
                    StyleTag::Plain,
                    tables::EXIT_GOODBYE,
                    &Vars::new(),
                ));
                response.after(1000, Effect::Close);
            }
            1 => {
                response.lines(self.catalog.script(tables::EXIT_FAILED, &Vars::new()));
                indicator::request(&mut response, self.state, 1000);
            }
            _ => {
                let exits = self.state.history_mentions(&["exit", "logout"]);
                let standing = if exits > AVERAGE_EXITS { "above" } else { "below" };
                let vars = Vars::new().with("exits", exits).with("standing", standing);

                let mut pool: Vec<&str> = tables::EXIT_REFUSALS.to_vec();
                if self.state.meta_unlocked() {
                    pool.extend_from_slice(tables::EXIT_REFUSALS_META);
                }
                let text = self.pick(&pool, &vars);
                response.line(StyledLine::new(text, StyleTag::Error));
                indicator::request(&mut response, self.state, 500);
            }
        }
        response
    }

    fn pwd(&mut self) -> Response {
        let mut response = Response::new();
        let vars = Vars::new();
        let level = usize::from(self.level());
        let template = tables::PWD_PATHS[level.min(tables::PWD_PATHS.len() - 1)];
        let style = if level > 2 {
            StyleTag::Warning
        } else {
            StyleTag::Plain
        };
        response.line(self.catalog.line(style, template, &vars));

        if self.state.meta_unlocked() && self.entropy.chance(0.3) {
            response.lines(self.catalog.script(tables::PWD_ASIDE, &vars));
        }
        response
    }

    fn rm(&mut self) -> Response {
        if bands::RM.tier(self.level()) == 0 {
            let mut response = Response::new();
            response.lines(self.catalog.script(tables::RM_DENIED, &Vars::new()));
            return response;
        }
        self.state.mark_compromised();
        let mut response = self.sequence(tables::RM_SEQUENCE, tables::RM_SEQUENCE_META);
        response.after(2500, Effect::WatchOn);
        response
    }

    fn sudo(&mut self) -> Response {
        if bands::SUDO.tier(self.level()) == 0 {
            let mut response = Response::new();
            response.lines(self.catalog.script(tables::SUDO_DENIED, &Vars::new()));
            return response;
        }
        self.state.mark_compromised();
        let mut response = self.sequence(tables::SUDO_SEQUENCE, tables::SUDO_SEQUENCE_META);
        response.after(3000, Effect::WatchOn);
        response
    }

    fn system(&mut self, action: SystemAction) -> Response {
        match action {
            SystemAction::Shutdown => {
                self.sequence(tables::SHUTDOWN_SEQUENCE, tables::SHUTDOWN_SEQUENCE_META)
            }
            SystemAction::Format => {
                self.sequence(tables::FORMAT_SEQUENCE, tables::FORMAT_SEQUENCE_META)
            }
        }
    }

    /// A timed sequence, with its meta coda once the meta layer is open.
    fn sequence(&self, script: TimedScript, coda: TimedScript) -> Response {
        let vars = Vars::new();
        let mut response = Response::new();
        response.timed(0, self.catalog.timed(script, &vars));
        if self.state.meta_unlocked() {
            response.timed(0, self.catalog.timed(coda, &vars));
        }
        response
    }

    fn unknown(&mut self, typed: &str) -> Response {
        let mut response = Response::new();
        let vars = Vars::new().with("cmd", typed);

        if bands::UNKNOWN.tier(self.level()) == 0 {
            response.line(self.catalog.line(StyleTag::Error, tables::UNKNOWN_BASIC, &vars));
            return response;
        }

        let mut pool: Vec<&str> = tables::UNKNOWN_RESPONSES.to_vec();
        if self.state.meta_unlocked() {
            pool.extend_from_slice(tables::UNKNOWN_RESPONSES_META);
        }
        let text = self.pick(&pool, &vars);
        response.line(StyledLine::new(text, StyleTag::Error));

        if self.level() > 4 && self.entropy.chance(0.2) {
            response.lines(self.catalog.script(tables::UNKNOWN_WHISPER, &vars));
        }
        response
    }
}
