//! Key mapping from terminal events to session intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameIntent;

/// Lifecycle controls outside the intent vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Start a new game (also restarts after game over).
    Start,
    /// Stop the current game, retaining board and score.
    Stop,
    /// Switch between the dark and light palettes.
    ToggleTheme,
}

/// Map keyboard input to session intents. Unrecognized keys map to nothing.
pub fn intent_for_key(key: KeyEvent) -> Option<GameIntent> {
    match key.code {
        KeyCode::Left => Some(GameIntent::MoveLeft),
        KeyCode::Right => Some(GameIntent::MoveRight),
        KeyCode::Down => Some(GameIntent::MoveDown),
        KeyCode::Up => Some(GameIntent::Rotate),
        KeyCode::Char(' ') => Some(GameIntent::HardDrop),
        _ => None,
    }
}

/// Map keyboard input to lifecycle controls.
pub fn control_for_key(key: KeyEvent) -> Option<ControlEvent> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(ControlEvent::Start),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(ControlEvent::Stop),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(ControlEvent::ToggleTheme),
        _ => None,
    }
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
    fn test_intent_keys() {
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Left)),
            Some(GameIntent::MoveLeft)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Right)),
            Some(GameIntent::MoveRight)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Down)),
            Some(GameIntent::MoveDown)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Up)),
            Some(GameIntent::Rotate)
        );
        assert_eq!(
            intent_for_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameIntent::HardDrop)
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            control_for_key(KeyEvent::from(KeyCode::Enter)),
            Some(ControlEvent::Start)
        );
        assert_eq!(
            control_for_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(ControlEvent::Stop)
        );
        assert_eq!(
            control_for_key(KeyEvent::from(KeyCode::Char('t'))),
            Some(ControlEvent::ToggleTheme)
        );
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        assert_eq!(intent_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(control_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(intent_for_key(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
