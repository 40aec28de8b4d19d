use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{BoardPolicy, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    Quit,
    None,
}

/// Name a terminal key the way `KeyboardEvent.code` does ("ArrowUp", "KeyW", ...)
pub fn key_identifier(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Up => Some("ArrowUp".to_string()),
        KeyCode::Down => Some("ArrowDown".to_string()),
        KeyCode::Left => Some("ArrowLeft".to_string()),
        KeyCode::Right => Some("ArrowRight".to_string()),
        KeyCode::Esc => Some("Escape".to_string()),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(format!("Key{}", c.to_ascii_uppercase()))
        }
        _ => None,
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        let Some(id) = key_identifier(key.code) else {
            return KeyAction::None;
        };

        if let Some(direction) = BoardPolicy::direction_for_key(&id) {
            return KeyAction::Steer(direction);
        }

        match id.as_str() {
            "KeyQ" | "Escape" => KeyAction::Quit,
            "KeyR" => KeyAction::Restart,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
