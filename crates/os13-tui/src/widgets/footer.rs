use super::content::BACKGROUND;
use crate::state::TuiState;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HINTS: &str = "Tab complete  PgUp/PgDn scroll  Ctrl+C quit";

pub fn render(state: &TuiState) -> Paragraph<'static> {
    let dim = Style::default().fg(Color::Rgb(0x44, 0x44, 0x44));
    let mut spans = vec![Span::styled(HINTS, dim)];
    if state.scroll_back > 0 {
        spans.push(Span::styled(
            format!("  [{} rows up]", state.scroll_back),
            Style::default().fg(Color::Rgb(0xff, 0xaa, 0x00)),
        ));
    }

    Paragraph::new(Line::from(spans))
        .style(Style::default().bg(BACKGROUND))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::Rgb(0x1a, 0x1a, 0x1a))),
        )
}
