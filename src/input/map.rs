//! Key mapping from captured keys to game actions.

use crate::input::listener::Key;
use crate::types::GameAction;

/// Map a captured key to a game action (case-insensitive).
/// Unrecognized keys map to nothing and are silently ignored.
pub fn action_for(key: Key) -> Option<GameAction> {
    match key {
        Key::Left => Some(GameAction::MoveLeft),
        Key::Right => Some(GameAction::MoveRight),
        Key::Up => Some(GameAction::Jump),
        Key::CtrlC => Some(GameAction::Quit),
        Key::Char(c) => match c.to_ascii_lowercase() {
            'a' => Some(GameAction::MoveLeft),
            'd' => Some(GameAction::MoveRight),
            'w' | ' ' => Some(GameAction::Jump),
            'q' => Some(GameAction::Quit),
            _ => None,
        },
    }
}
