//! Terminal input for the game screen.
//!
//! Maps crossterm key events onto [`GameInput`] and drains everything that
//! arrived since the previous frame in a single poll.

use crate::game::GameInput;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Decode one key press.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind == KeyEventKind::Release {
        return GameInput::Other;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Activate,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => GameInput::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Collect every pending input without blocking.
pub fn drain_events() -> io::Result<Vec<GameInput>> {
    let mut inputs = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            match map_key(key) {
                GameInput::Other => {}
                input => inputs.push(input),
            }
        }
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_activate_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), GameInput::Activate);
        assert_eq!(map_key(press(KeyCode::Up)), GameInput::Activate);
        assert_eq!(map_key(press(KeyCode::Enter)), GameInput::Activate);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), GameInput::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), GameInput::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            GameInput::Quit
        );
    }

    #[test]
    fn test_plain_c_is_not_quit() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), GameInput::Other);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), GameInput::Other);
    }
}
