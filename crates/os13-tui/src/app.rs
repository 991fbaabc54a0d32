//! Main application loop for the TUI.
//!
//! The loop owns the [`Session`] and is its only caller: key presses become
//! keystrokes and submissions, and the session's next deadline wakes the
//! loop to fire deferred effects. Milliseconds since the loop started are
//! the session's clock.

use crate::input::{Action, map_key};
use crate::state::TuiState;
use crate::widgets::{content::ContentPane, footer, header, suggestions};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use os13_core::Session;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
};
use scopeguard::defer;
use std::io;
use tokio::time::{Duration, Instant, interval, sleep_until};
use tracing::{debug, info};

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: usize = 3;

/// Dispatches an action to the session and the display state.
///
/// Returns `true` when the loop should stop: on quit, or once the session
/// has closed itself.
pub fn dispatch_action(
    action: Action,
    state: &mut TuiState,
    session: &mut Session,
    now: u64,
    viewport_height: usize,
) -> bool {
    match action {
        Action::Quit => return true,
        Action::Type(c) => {
            state.input.push(c);
            state.suggestions = session.on_keystroke(&state.input, now);
        }
        Action::Backspace => {
            state.input.pop();
            state.suggestions = session.on_keystroke(&state.input, now);
        }
        Action::AcceptSuggestion => {
            if state.accept_suggestion() {
                state.suggestions = session.suggest(&state.input);
            }
        }
        Action::Submit => {
            if !state.has_prompt() {
                return state.closed;
            }
            let typed = state.take_submission();
            state.apply_all(session.on_submit(&typed, now));
            state.level = session.state().anomaly_level();
        }
        Action::ScrollUp => state.scroll_up(1, viewport_height),
        Action::ScrollDown => state.scroll_down(1),
        Action::PageUp => state.scroll_up(viewport_height.max(1), viewport_height),
        Action::PageDown => state.scroll_down(viewport_height.max(1)),
        Action::None => {}
    }
    state.closed
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Full-screen OS13 terminal.
pub struct App {
    session: Session,
    state: TuiState,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            state: TuiState::new(),
        }
    }

    /// Runs the event loop until the user quits or the session closes.
    pub async fn run(mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Restore the terminal on every exit path, panics and task aborts included.
        defer! {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
        }

        let start = Instant::now();
        self.state.apply_all(self.session.boot());

        let mut events = EventStream::new();
        let mut render_tick = interval(Duration::from_millis(16));
        let mut viewport_height: usize = 24;

        loop {
            let deadline = self
                .session
                .next_deadline()
                .map(|ms| start + Duration::from_millis(ms));

            tokio::select! {
                biased;

                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            let now = elapsed_ms(start);
                            match event {
                                // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
                                Event::Key(key) if key.kind == KeyEventKind::Press
                                    && key.code == KeyCode::Char('c')
                                    && key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    info!("Ctrl+C detected, leaving");
                                    break;
                                }
                                Event::Mouse(mouse) => match mouse.kind {
                                    MouseEventKind::ScrollUp => {
                                        self.state.scroll_up(WHEEL_ROWS, viewport_height);
                                    }
                                    MouseEventKind::ScrollDown => {
                                        self.state.scroll_down(WHEEL_ROWS);
                                    }
                                    _ => {}
                                },
                                Event::Key(key) if key.kind == KeyEventKind::Press => {
                                    let action = map_key(key);
                                    if dispatch_action(
                                        action,
                                        &mut self.state,
                                        &mut self.session,
                                        now,
                                        viewport_height,
                                    ) {
                                        break;
                                    }
                                }
                                _ => {}
                            }
                        }
                        Some(Err(e)) => {
                            tracing::warn!("Event stream error: {}", e);
                        }
                        None => break,
                    }
                }

                _ = sleep_until(deadline.unwrap_or(start)), if deadline.is_some() => {
                    let now = elapsed_ms(start);
                    let fired = self.session.tick(now);
                    debug!(now, fired = fired.len(), "Deferred effects fired");
                    self.state.apply_all(fired);
                    self.state.level = self.session.state().anomaly_level();
                    if self.state.closed {
                        break;
                    }
                }

                _ = render_tick.tick() => {
                    let size = terminal.size()?;
                    let chunks = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Length(2),
                            Constraint::Min(0),
                            Constraint::Length(2),
                        ])
                        .split(Rect::new(0, 0, size.width, size.height));
                    let content_area = chunks[1];
                    viewport_height = content_area.height as usize;

                    let state = &self.state;
                    let facts = self.session.facts();
                    terminal.draw(|f| {
                        f.render_widget(header::render(state, facts, chunks[0].width), chunks[0]);
                        f.render_widget(ContentPane::new(state), content_area);
                        f.render_widget(footer::render(state), chunks[2]);
                        suggestions::render(f, state, content_area);

                        if let Some(row) = state.cursor_row(viewport_height) {
                            let column = state.cursor_column().min(content_area.width as usize);
                            f.set_cursor_position((
                                content_area.x + column as u16,
                                content_area.y + row as u16,
                            ));
                        }

                        if state.inverted {
                            let area = f.area();
                            f.buffer_mut()
                                .set_style(area, Style::default().add_modifier(Modifier::REVERSED));
                        }
                    })?;
                }
            }
        }

        info!(
            commands = self.session.state().command_count(),
            closed = self.state.closed,
            "Leaving full-screen surface"
        );
        Ok(())
    }
}
