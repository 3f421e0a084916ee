//! Key-to-action maps. Panes look up an action name for a key press and
//! decide what `Action` it becomes; the same map feeds the help overlay.

use super::{InputEvent, KeyCode};

/// What a binding matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPattern {
    Char(char),
    Key(KeyCode),
    Ctrl(char),
}

impl KeyPattern {
    fn matches(&self, event: &InputEvent) -> bool {
        match (self, event.ctrl) {
            (KeyPattern::Ctrl(c), true) => event.key == KeyCode::Char(*c),
            (KeyPattern::Char(c), false) => event.key == KeyCode::Char(*c),
            (KeyPattern::Key(k), false) => event.key == *k,
            _ => false,
        }
    }

    /// Human-readable key name for the help overlay.
    pub fn display(&self) -> String {
        match self {
            KeyPattern::Char(c) => c.to_string(),
            KeyPattern::Ctrl(c) => format!("Ctrl+{}", c),
            KeyPattern::Key(k) => match k {
                KeyCode::Up => "Up".to_string(),
                KeyCode::Down => "Down".to_string(),
                KeyCode::Enter => "Enter".to_string(),
                KeyCode::Esc => "Esc".to_string(),
                KeyCode::Home => "Home".to_string(),
                KeyCode::End => "End".to_string(),
                KeyCode::Tab => "Tab".to_string(),
                KeyCode::F(n) => format!("F{}", n),
                KeyCode::Char(c) => c.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub pattern: KeyPattern,
    pub action: &'static str,
    pub description: &'static str,
}

/// Ordered set of bindings for one pane. First match wins.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, pattern: KeyPattern, action: &'static str, description: &'static str) -> Self {
        self.bindings.push(KeyBinding {
            pattern,
            action,
            description,
        });
        self
    }

    pub fn bind_key(self, key: KeyCode, action: &'static str, description: &'static str) -> Self {
        self.bind(KeyPattern::Key(key), action, description)
    }

    pub fn bind_char(self, c: char, action: &'static str, description: &'static str) -> Self {
        self.bind(KeyPattern::Char(c), action, description)
    }

    pub fn lookup(&self, event: &InputEvent) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|b| b.pattern.matches(event))
            .map(|b| b.action)
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}
