//! Key mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the surface to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Type(char),
    Backspace,
    Submit,
    AcceptSuggestion,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    None,
}

/// Maps a key event to an action.
///
/// Everything printable goes to the input line, so scrolling lives on the
/// page keys and the arrows rather than on letters.
pub fn map_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'd') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Tab => Action::AcceptSuggestion,
        KeyCode::Up => Action::ScrollUp,
        KeyCode::Down => Action::ScrollDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Char(c) => Action::Type(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_printable_keys_type() {
        assert_eq!(map_key(press(KeyCode::Char('j'))), Action::Type('j'));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT)),
            Action::Type('L')
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Action::Quit);
    }

    #[test]
    fn test_other_control_chords_are_ignored() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Action::None);
    }

    #[test]
    fn test_editing_and_scrolling_keys() {
        assert_eq!(map_key(press(KeyCode::Enter)), Action::Submit);
        assert_eq!(map_key(press(KeyCode::Backspace)), Action::Backspace);
        assert_eq!(map_key(press(KeyCode::Tab)), Action::AcceptSuggestion);
        assert_eq!(map_key(press(KeyCode::PageUp)), Action::PageUp);
        assert_eq!(map_key(press(KeyCode::Down)), Action::ScrollDown);
        assert_eq!(map_key(press(KeyCode::F(1))), Action::None);
    }
}
