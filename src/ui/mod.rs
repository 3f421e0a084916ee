//! UI plumbing: input wrappers over crossterm, the pane trait, keymaps,
//! and layout helpers. Catalog semantics live in `haptica-core`; nothing
//! here touches a generator directly.

pub mod keybindings;
pub mod keymap;

pub use keymap::{KeyBinding, KeyPattern, Keymap};

use haptica_core::{Action, AppState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Key identity, independent of the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Up,
    Down,
    Enter,
    Esc,
    Home,
    End,
    Tab,
    F(u8),
}

/// One decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: KeyCode,
    pub ctrl: bool,
}

impl InputEvent {
    /// Decode a crossterm key event. Returns `None` for keys the app has no
    /// use for (releases are filtered by the caller).
    pub fn from_crossterm(event: crossterm::event::KeyEvent) -> Option<Self> {
        use crossterm::event::KeyCode as Ck;
        let key = match event.code {
            Ck::Char(c) => KeyCode::Char(c),
            Ck::Up => KeyCode::Up,
            Ck::Down => KeyCode::Down,
            Ck::Enter => KeyCode::Enter,
            Ck::Esc => KeyCode::Esc,
            Ck::Home => KeyCode::Home,
            Ck::End => KeyCode::End,
            Ck::Tab => KeyCode::Tab,
            Ck::F(n) => KeyCode::F(n),
            _ => return None,
        };
        Some(Self {
            key,
            ctrl: event
                .modifiers
                .contains(crossterm::event::KeyModifiers::CONTROL),
        })
    }
}

/// A screen the app can show. Panes translate input into `Action`s and
/// render themselves into the frame buffer; they never mutate `AppState`.
pub trait Pane {
    fn id(&self) -> &'static str;

    fn keymap(&self) -> &Keymap;

    /// Keymap lookup, then the pane's own action handling.
    fn handle_input(&mut self, event: &InputEvent, state: &AppState) -> Action {
        match self.keymap().lookup(event) {
            Some(action) => self.handle_action(action, event, state),
            None => Action::None,
        }
    }

    fn handle_action(&mut self, action: &str, event: &InputEvent, state: &AppState) -> Action;

    fn render(&mut self, area: Rect, buf: &mut Buffer, state: &AppState);
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = center_rect(area, 100, 100);
        assert_eq!(rect, area);

        let rect = center_rect(area, 10, 4);
        assert_eq!(rect, Rect::new(5, 3, 10, 4));
    }

    #[test]
    fn decodes_ctrl_modifier() {
        use crossterm::event::{KeyCode as Ck, KeyEvent, KeyModifiers};
        let event = KeyEvent::new(Ck::Char('q'), KeyModifiers::CONTROL);
        let input = InputEvent::from_crossterm(event).unwrap();
        assert_eq!(input.key, KeyCode::Char('q'));
        assert!(input.ctrl);
    }
}
