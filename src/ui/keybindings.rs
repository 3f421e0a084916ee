//! Keybinding config: an embedded TOML file parsed into per-pane keymaps.

use std::collections::HashMap;

use serde::Deserialize;

use super::keymap::{KeyPattern, Keymap};
use super::KeyCode;

const DEFAULT_KEYBINDINGS: &str = include_str!("../../keybindings.toml");

/// Raw TOML structure of the keybindings file.
#[derive(Deserialize)]
struct KeybindingConfig {
    #[allow(dead_code)]
    version: u32,
    panes: HashMap<String, PaneConfig>,
}

#[derive(Deserialize)]
struct PaneConfig {
    bindings: Vec<RawBinding>,
}

/// A single binding entry from TOML.
#[derive(Deserialize)]
struct RawBinding {
    key: String,
    action: String,
    description: String,
}

/// Intern a String into a &'static str.
/// Bindings are loaded once at startup and never freed.
fn intern(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

/// Parse a key notation string into a KeyPattern.
///
/// Supported formats:
/// - `"q"` → Char('q')
/// - `"Up"` → Key(KeyCode::Up)
/// - `"Ctrl+q"` → Ctrl('q')
/// - `"F1"` → Key(KeyCode::F(1))
fn parse_key(s: &str) -> KeyPattern {
    if let Some(rest) = s.strip_prefix("Ctrl+") {
        if rest.chars().count() == 1 {
            return KeyPattern::Ctrl(rest.chars().next().unwrap());
        }
    }
    if s.chars().count() == 1 {
        return KeyPattern::Char(s.chars().next().unwrap());
    }
    KeyPattern::Key(parse_named_key(s))
}

fn parse_named_key(s: &str) -> KeyCode {
    match s {
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Enter" => KeyCode::Enter,
        "Esc" => KeyCode::Esc,
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "Tab" => KeyCode::Tab,
        other => {
            if let Some(n) = other.strip_prefix('F').and_then(|n| n.parse().ok()) {
                KeyCode::F(n)
            } else {
                // Unknown names bind to nothing anyone can press.
                KeyCode::F(255)
            }
        }
    }
}

fn build_keymap(pane: PaneConfig) -> Keymap {
    let mut keymap = Keymap::new();
    for binding in pane.bindings {
        keymap = keymap.bind(
            parse_key(&binding.key),
            intern(binding.action),
            intern(binding.description),
        );
    }
    keymap
}

/// Load the embedded keybindings into per-pane keymaps.
pub fn load_keymaps() -> HashMap<String, Keymap> {
    let config: KeybindingConfig =
        toml::from_str(DEFAULT_KEYBINDINGS).expect("embedded keybindings.toml must parse");
    config
        .panes
        .into_iter()
        .map(|(id, pane)| (id, build_keymap(pane)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::InputEvent;

    #[test]
    fn embedded_bindings_parse_and_cover_both_panes() {
        let keymaps = load_keymaps();
        assert!(keymaps.contains_key("effect_list"));
        assert!(keymaps.contains_key("help"));
    }

    #[test]
    fn effect_list_has_the_core_bindings() {
        let keymaps = load_keymaps();
        let keymap = &keymaps["effect_list"];

        let enter = InputEvent {
            key: KeyCode::Enter,
            ctrl: false,
        };
        assert_eq!(keymap.lookup(&enter), Some("activate"));

        let ctrl_q = InputEvent {
            key: KeyCode::Char('q'),
            ctrl: true,
        };
        assert_eq!(keymap.lookup(&ctrl_q), Some("quit"));
    }

    #[test]
    fn key_notation_parses() {
        assert_eq!(parse_key("q"), KeyPattern::Char('q'));
        assert_eq!(parse_key("Up"), KeyPattern::Key(KeyCode::Up));
        assert_eq!(parse_key("Ctrl+x"), KeyPattern::Ctrl('x'));
        assert_eq!(parse_key("F3"), KeyPattern::Key(KeyCode::F(3)));
    }
}
