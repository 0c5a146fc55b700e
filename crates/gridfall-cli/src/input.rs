use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A symbolic game action resolved from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
    HardDrop,
    /// Esc: pauses a running game; exits once the game is paused or over.
    Pause,
    /// Enter: resumes a paused game.
    Resume,
    /// Unconditional exit.
    Quit,
}

/// Maps a key event to a game action.
///
/// A pure mapping with no internal state; unmapped keys yield `None` and are
/// ignored by the caller.
pub(crate) fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameAction::Quit);
    }
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Up => Some(GameAction::RotateCw),
        KeyCode::Down => Some(GameAction::RotateCcw),
        KeyCode::Char('s' | 'S') => Some(GameAction::SoftDrop),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Esc => Some(GameAction::Pause),
        KeyCode::Enter => Some(GameAction::Resume),
        KeyCode::Char('q' | 'Q') => Some(GameAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameAction::SoftDrop)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::HardDrop)
        );
    }

    #[test]
    fn test_arrow_rotation_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::RotateCw)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::RotateCcw)
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(GameAction::Pause));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Resume)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('q'))),
            Some(GameAction::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameAction::Quit)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(1))), None);
        // plain 'c' is not the interrupt chord
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('c'))), None);
    }
}
