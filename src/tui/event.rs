use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use crate::core::key::Key;

/// Block until a key press arrives that maps to a [`Key`].
///
/// Resizes, mouse events, key releases and unmapped keys are skipped.
pub fn read_key() -> io::Result<Key> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            if let Some(key) = map_key_event(&key_event) {
                return Ok(key);
            }
        }
    }
}

/// Translate a crossterm key event into the console key-code scheme.
///
/// Character keys held with Ctrl or Alt have no console code and are
/// dropped, so Ctrl+Q does not quit and Alt+1 is not a shortcut. Shift is
/// already folded into the character.
pub fn map_key_event(key_event: &KeyEvent) -> Option<Key> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    let chord = key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key_event.code {
        KeyCode::Up => Some(Key::UP),
        KeyCode::Down => Some(Key::DOWN),
        KeyCode::Left => Some(Key::LEFT),
        KeyCode::Right => Some(Key::RIGHT),
        KeyCode::Enter => Some(Key::ENTER),
        KeyCode::Esc => Some(Key::ESCAPE),
        KeyCode::Backspace => Some(Key::BACKSPACE),
        KeyCode::Tab => Some(Key::TAB),
        KeyCode::Char(_) if chord => None,
        KeyCode::Char(c) => Some(Key::from(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_map_to_extended_codes() {
        assert_eq!(map_key_event(&press(KeyCode::Up)), Some(Key::UP));
        assert_eq!(map_key_event(&press(KeyCode::Down)), Some(Key::DOWN));
        assert_eq!(map_key_event(&press(KeyCode::Left)).map(Key::code), Some(75));
        assert_eq!(map_key_event(&press(KeyCode::Right)).map(Key::code), Some(77));
    }

    #[test]
    fn test_enter_and_chars() {
        assert_eq!(map_key_event(&press(KeyCode::Enter)).map(Key::code), Some(13));
        assert_eq!(map_key_event(&press(KeyCode::Char('q'))), Some(Key::from('q')));
        assert_eq!(map_key_event(&press(KeyCode::Char('3'))).and_then(Key::shortcut_index), Some(2));
    }

    #[test]
    fn test_release_and_unmapped_are_skipped() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(&release), None);
        assert_eq!(map_key_event(&press(KeyCode::F(5))), None);
    }

    #[test]
    fn test_ctrl_and_alt_chords_are_skipped() {
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let alt_1 = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT);
        assert_eq!(map_key_event(&ctrl_q), None);
        assert_eq!(map_key_event(&alt_1), None);

        let shifted = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(map_key_event(&shifted), Some(Key::from('Q')));
        let ctrl_up = KeyEvent::new(KeyCode::Up, KeyModifiers::CONTROL);
        assert_eq!(map_key_event(&ctrl_up), Some(Key::UP));
    }
}
