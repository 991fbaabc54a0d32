//! The autocomplete popup.

use crate::state::TuiState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Popup colour for the current level.
pub fn colour_for(level: u8) -> Color {
    match level {
        0..=2 => Color::Rgb(0x00, 0xff, 0x00),
        3..=4 => Color::Rgb(0xff, 0xaa, 0x00),
        _ => Color::Rgb(0xff, 0x00, 0x00),
    }
}

/// Where the popup goes: just above the prompt row, starting at the cursor
/// and pulled left if it would run off the pane.
pub fn placement(state: &TuiState, content: Rect) -> Option<Rect> {
    if state.suggestions.is_empty() || state.scroll_back > 0 {
        return None;
    }
    let widest = state
        .suggestions
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);
    let width = (widest as u16 + 2).min(content.width);
    let height = (state.suggestions.len() as u16 + 2).min(content.height.saturating_sub(1));
    if width < 3 || height < 3 {
        return None;
    }

    let prompt_row = (state.row_count().min(content.height as usize) as u16).saturating_sub(1);
    let y = if prompt_row >= height {
        content.y + prompt_row - height
    } else {
        content.y + prompt_row + 1
    };
    if y + height > content.bottom() {
        return None;
    }
    let column = (state.cursor_column() as u16).min(content.width - width);
    Some(Rect::new(content.x + column, y, width, height))
}

pub fn render(f: &mut Frame<'_>, state: &TuiState, content: Rect) {
    let Some(area) = placement(state, content) else {
        return;
    };
    let colour = Style::default()
        .fg(colour_for(state.level))
        .bg(Color::Rgb(0x1a, 0x1a, 0x1a));
    let lines: Vec<Line<'_>> = state
        .suggestions
        .iter()
        .map(|s| Line::from(s.as_str()))
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .style(colour)
            .block(Block::default().borders(Borders::ALL).border_style(colour)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use os13_proto::Output;

    #[test]
    fn test_colour_tracks_level() {
        assert_eq!(colour_for(0), Color::Rgb(0x00, 0xff, 0x00));
        assert_eq!(colour_for(2), Color::Rgb(0x00, 0xff, 0x00));
        assert_eq!(colour_for(3), Color::Rgb(0xff, 0xaa, 0x00));
        assert_eq!(colour_for(4), Color::Rgb(0xff, 0xaa, 0x00));
        assert_eq!(colour_for(5), Color::Rgb(0xff, 0x00, 0x00));
        assert_eq!(colour_for(7), Color::Rgb(0xff, 0x00, 0x00));
    }

    #[test]
    fn test_hidden_without_suggestions() {
        let state = TuiState::new();
        assert_eq!(placement(&state, Rect::new(0, 2, 80, 20)), None);
    }

    #[test]
    fn test_sits_above_the_prompt_row() {
        let mut state = TuiState::new();
        for _ in 0..10 {
            state.apply(Output::Line(os13_proto::StyledLine::plain("x")));
        }
        state.apply(Output::Prompt("$ ".to_string()));
        state.input.push('h');
        state.suggestions = vec!["help".to_string(), "help_me".to_string()];

        // Prompt is the eleventh row, so row 10 of the pane.
        let area = placement(&state, Rect::new(0, 2, 80, 20)).unwrap();
        assert_eq!(area, Rect::new(3, 8, 9, 4));
    }

    #[test]
    fn test_drops_below_when_there_is_no_room_above() {
        let mut state = TuiState::new();
        state.apply(Output::Prompt("$ ".to_string()));
        state.suggestions = vec!["help".to_string()];
        let area = placement(&state, Rect::new(0, 2, 80, 20)).unwrap();
        assert_eq!(area.y, 3);
    }
}
