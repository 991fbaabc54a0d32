//! The scrollback pane.

use crate::state::TuiState;
use os13_proto::StyleTag;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Terminal green on near-black.
pub const FOREGROUND: Color = Color::Rgb(0x00, 0xff, 0x00);
pub const BACKGROUND: Color = Color::Rgb(0x0a, 0x0a, 0x0a);

/// Maps a style tag to its colours.
pub fn style_for(tag: StyleTag) -> Style {
    let base = Style::default().bg(BACKGROUND);
    match tag {
        StyleTag::Plain => base.fg(FOREGROUND),
        StyleTag::Error => base.fg(Color::Rgb(0xff, 0x00, 0x00)),
        StyleTag::Warning => base.fg(Color::Rgb(0xff, 0xaa, 0x00)),
        StyleTag::Ghost => base.fg(Color::Rgb(0x44, 0x44, 0x44)),
        StyleTag::Glitch => base.fg(Color::Rgb(0xff, 0x00, 0xff)),
        StyleTag::Whisper => base.fg(Color::Rgb(0x00, 0x66, 0x00)),
        StyleTag::System => base.fg(Color::Rgb(0x00, 0xaa, 0xff)),
        StyleTag::Meta => base
            .fg(Color::Rgb(0xff, 0x00, 0xff))
            .add_modifier(Modifier::ITALIC),
        StyleTag::Programmer => base.fg(Color::Rgb(0xff, 0xff, 0x00)),
    }
}

pub struct ContentPane<'a> {
    state: &'a TuiState,
}

impl<'a> ContentPane<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for ContentPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let viewport = area.height as usize;
        let top = self.state.top_row(viewport);
        let lines: Vec<Line<'_>> = self
            .state
            .display_rows()
            .into_iter()
            .skip(top)
            .take(viewport)
            .map(|row| {
                Line::from(
                    row.into_iter()
                        .map(|segment| Span::styled(segment.text, style_for(segment.style)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines)
            .style(style_for(StyleTag::Plain))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use os13_proto::{Output, StyledLine};

    fn rendered(state: &TuiState, width: u16, height: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        ContentPane::new(state).render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_follows_the_bottom() {
        let mut state = TuiState::new();
        for n in 0..5 {
            state.apply(Output::Line(StyledLine::plain(format!("line {n}"))));
        }
        assert_eq!(rendered(&state, 10, 2), vec!["line 3", "line 4"]);
    }

    #[test]
    fn test_scrolled_back_view() {
        let mut state = TuiState::new();
        for n in 0..5 {
            state.apply(Output::Line(StyledLine::plain(format!("line {n}"))));
        }
        state.scroll_up(2, 2);
        assert_eq!(rendered(&state, 10, 2), vec!["line 1", "line 2"]);
    }

    #[test]
    fn test_tags_have_distinct_colours() {
        assert_ne!(style_for(StyleTag::Error), style_for(StyleTag::Warning));
        assert_eq!(
            style_for(StyleTag::Meta).fg,
            style_for(StyleTag::Glitch).fg
        );
        assert!(
            style_for(StyleTag::Meta)
                .add_modifier
                .contains(Modifier::ITALIC)
        );
    }
}
