//! Key mapping from terminal events to engine commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press (or auto-repeat) to a command.
///
/// The soft drop key is not mapped here; it goes through
/// [`crate::SoftDropLatch`] because it is held rather than tapped.
pub fn map_key_press(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Command::MoveRight),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::Rotate),

        // Lifecycle
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::PauseToggle),
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),

        _ => None,
    }
}

/// Keys that hold soft drop while pressed.
pub fn is_soft_drop_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Down
            | KeyCode::Char('j')
            | KeyCode::Char('J')
            | KeyCode::Char('s')
            | KeyCode::Char('S')
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key_press(KeyEvent::from(KeyCode::Left)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_key_press(KeyEvent::from(KeyCode::Right)),
            Some(Command::MoveRight)
        );
        assert_eq!(
            map_key_press(KeyEvent::from(KeyCode::Char('H'))),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_key_press(KeyEvent::from(KeyCode::Char('d'))),
            Some(Command::MoveRight)
        );
    }

    #[test]
    fn test_rotation_and_lifecycle_keys() {
        assert_eq!(map_key_press(KeyEvent::from(KeyCode::Up)), Some(Command::Rotate));
        assert_eq!(
            map_key_press(KeyEvent::from(KeyCode::Char('W'))),
            Some(Command::Rotate)
        );
        assert_eq!(
            map_key_press(KeyEvent::from(KeyCode::Esc)),
            Some(Command::PauseToggle)
        );
        assert_eq!(
            map_key_press(KeyEvent::from(KeyCode::Enter)),
            Some(Command::Reset)
        );
    }

    #[test]
    fn test_soft_drop_keys_are_not_commands() {
        assert!(is_soft_drop_key(KeyCode::Down));
        assert!(is_soft_drop_key(KeyCode::Char('s')));
        assert_eq!(map_key_press(KeyEvent::from(KeyCode::Down)), None);
        assert!(!is_soft_drop_key(KeyCode::Up));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(map_key_press(KeyEvent::from(KeyCode::Char('x'))), None);
    }
}
