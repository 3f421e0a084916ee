//! Help overlay listing the effect-list keybindings.

use haptica_core::{Action, AppState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::ui::{center_rect, InputEvent, Keymap, Pane};

pub struct HelpPane {
    keymap: Keymap,
    /// (key, description) rows, derived from the list pane's keymap.
    entries: Vec<(String, &'static str)>,
}

impl HelpPane {
    pub fn new(keymap: Keymap, list_keymap: &Keymap) -> Self {
        let entries = list_keymap
            .bindings()
            .iter()
            .map(|b| (b.pattern.display(), b.description))
            .collect();
        Self { keymap, entries }
    }
}

impl Pane for HelpPane {
    fn id(&self) -> &'static str {
        "help"
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn handle_action(&mut self, action: &str, _event: &InputEvent, _state: &AppState) -> Action {
        match action {
            "close" => Action::SwitchPane("effect_list"),
            _ => Action::None,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, _state: &AppState) {
        let height = (self.entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let rect = center_rect(area, 40_u16.min(area.width), height);

        Clear.render(rect, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Keys ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(rect);
        block.render(rect, buf);

        for (i, (key, description)) in self.entries.iter().enumerate() {
            let y = inner.y + 1 + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let line = Line::from(vec![
                Span::styled(format!(" {:>7}  ", key), Style::default().fg(Color::Yellow)),
                Span::styled(*description, Style::default().fg(Color::White)),
            ]);
            Paragraph::new(line).render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}
