use super::content::{BACKGROUND, FOREGROUND};
use crate::state::TuiState;
use os13_proto::EnvironmentFacts;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The indicator glyph; invisible against the background until it lights.
pub const INDICATOR: &str = "●";

pub fn indicator_style(on: bool) -> Style {
    let fg = if on { Color::Rgb(0xff, 0x00, 0x00) } else { BACKGROUND };
    Style::default()
        .fg(fg)
        .bg(BACKGROUND)
        .add_modifier(Modifier::BOLD)
}

pub fn render(state: &TuiState, facts: &EnvironmentFacts, width: u16) -> Paragraph<'static> {
    let title = format!("OS13  {}@{}", facts.username, facts.hostname);
    let used = INDICATOR.chars().count() + 1 + title.chars().count();
    let pad = (width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(INDICATOR, indicator_style(state.indicator)),
        Span::raw(" "),
        Span::styled(title, Style::default().fg(FOREGROUND)),
        Span::raw(" ".repeat(pad)),
    ]);

    Paragraph::new(line)
        .style(Style::default().bg(BACKGROUND))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::Rgb(0x1a, 0x1a, 0x1a))),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_lights_red_only_when_active() {
        assert_eq!(indicator_style(true).fg, Some(Color::Rgb(0xff, 0x00, 0x00)));
        assert_eq!(indicator_style(false).fg, Some(BACKGROUND));
    }
}
