//! The effect table: nine rows, a selection cursor, Enter fires.

use haptica_core::{Action, AppState, NavAction, Phase};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::ui::{center_rect, InputEvent, Keymap, Pane};

pub struct EffectListPane {
    keymap: Keymap,
}

impl EffectListPane {
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap }
    }

    fn phase_marker(phase: Phase) -> &'static str {
        match phase {
            Phase::Bound => "",
            Phase::Armed => "armed",
            Phase::Fired => "fired",
        }
    }
}

impl Pane for EffectListPane {
    fn id(&self) -> &'static str {
        "effect_list"
    }

    fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    fn handle_action(&mut self, action: &str, _event: &InputEvent, state: &AppState) -> Action {
        match action {
            "up" => Action::Nav(NavAction::Up),
            "down" => Action::Nav(NavAction::Down),
            "first" => Action::Nav(NavAction::First),
            "last" => Action::Nav(NavAction::Last),
            "activate" => Action::ActivateRow(state.selected),
            "prepare" => Action::PrepareSelected,
            "toggle_rearm" => Action::TogglePrepareAfter,
            "help" => Action::SwitchPane("help"),
            "quit" => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, state: &AppState) {
        let rows = state.catalog.row_count() as u16;
        let width = 44_u16.min(area.width.saturating_sub(2));
        let height = (rows + 6).min(area.height.saturating_sub(2));
        let rect = center_rect(area, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Haptics ")
            .border_style(Style::default().fg(Color::Cyan))
            .title_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let header_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);
        Paragraph::new(Line::from(Span::styled(
            "Select an effect, Enter fires it",
            Style::default().fg(Color::DarkGray),
        )))
        .render(header_area, buf);

        for (i, effect) in state.catalog.effects().iter().enumerate() {
            let y = inner.y + 2 + i as u16;
            if y >= inner.y + inner.height.saturating_sub(2) {
                break;
            }

            let is_selected = i == state.selected;
            let (cursor_style, label_style, marker_style) = if is_selected {
                (
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                )
            } else {
                (
                    Style::default().fg(Color::DarkGray),
                    Style::default().fg(Color::White),
                    Style::default().fg(Color::DarkGray),
                )
            };

            let marker = Self::phase_marker(effect.phase());
            let label_width = inner.width.saturating_sub(12) as usize;
            let line = Line::from(vec![
                Span::styled(if is_selected { " > " } else { "   " }, cursor_style),
                Span::styled(format!("{:<width$}", effect.label(), width = label_width), label_style),
                Span::styled(format!("{:>5} ", marker), marker_style),
            ]);
            Paragraph::new(line).render(Rect::new(inner.x, y, inner.width, 1), buf);
        }

        // Footer: status line, then the standing hints.
        let footer_y = rect.y + rect.height.saturating_sub(2);
        if let Some(status) = &state.status {
            let status_area = Rect::new(inner.x + 1, footer_y.saturating_sub(1), inner.width.saturating_sub(2), 1);
            Paragraph::new(Line::from(Span::styled(
                status.as_str(),
                Style::default().fg(Color::Yellow),
            )))
            .render(status_area, buf);
        }
        let hints = format!(
            "j/k move  Enter fire  r re-arm:{}  ? help  q quit",
            if state.prepare_after { "on" } else { "off" }
        );
        let hints_area = Rect::new(inner.x + 1, footer_y, inner.width.saturating_sub(2), 1);
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        )))
        .render(hints_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::keybindings::load_keymaps;
    use crate::ui::KeyCode;
    use haptica_core::{Catalog, Config, TestBackend};

    fn pane() -> EffectListPane {
        let mut keymaps = load_keymaps();
        EffectListPane::new(keymaps.remove("effect_list").unwrap())
    }

    fn state() -> AppState {
        let backend = TestBackend::new();
        AppState::new(Catalog::build(&backend).unwrap(), &Config::default())
    }

    fn press(key: KeyCode) -> InputEvent {
        InputEvent { key, ctrl: false }
    }

    #[test]
    fn enter_activates_the_selected_row() {
        let mut pane = pane();
        let mut state = state();
        state.selected = 3;
        let action = pane.handle_input(&press(KeyCode::Enter), &state);
        assert_eq!(action, Action::ActivateRow(3));
    }

    #[test]
    fn navigation_keys_produce_nav_actions() {
        let mut pane = pane();
        let state = state();
        assert_eq!(
            pane.handle_input(&press(KeyCode::Char('j')), &state),
            Action::Nav(NavAction::Down)
        );
        assert_eq!(
            pane.handle_input(&press(KeyCode::Char('G')), &state),
            Action::Nav(NavAction::Last)
        );
    }

    #[test]
    fn unbound_keys_are_ignored(){
        let mut pane = pane();
        let state = state();
        assert_eq!(
            pane.handle_input(&press(KeyCode::Char('z')), &state),
            Action::None
        );
    }

    #[test]
    fn renders_all_nine_labels() {
        let mut pane = pane();
        let state = state();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        pane.render(area, &mut buf, &state);

        let screen: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
                    .collect::<String>()
                    + "\n"
            })
            .collect();
        for label in ["Selection", "Impact heavy", "Notification success"] {
            assert!(screen.contains(label), "missing {:?} in:\n{}", label, screen);
        }
    }
}
