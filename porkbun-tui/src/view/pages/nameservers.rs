//! 名称服务器页面：查看、编辑、套用预设

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::error_lines;
use crate::event::keymap::DefaultKeymap;
use crate::message::ScreenCommand;
use crate::model::state::{NameserverState, NsMode, ViewError, NS_PRESETS};
use crate::view::screen::Screen;
use crate::view::theme::Styles;

impl NameserverState {
    fn handle_view_keys(&mut self, key: &KeyEvent) -> ScreenCommand {
        if self.saving {
            return ScreenCommand::None;
        }
        if DefaultKeymap::NS_EDIT.matches(key) && !self.loading {
            self.enter_edit();
        } else if DefaultKeymap::NS_PRESETS.matches(key) && !self.loading {
            self.enter_presets();
        } else if DefaultKeymap::BACK.matches(key) {
            return ScreenCommand::Back;
        }
        ScreenCommand::None
    }

    fn handle_edit_keys(&mut self, key: &KeyEvent) -> ScreenCommand {
        if self.saving {
            return ScreenCommand::None;
        }
        if DefaultKeymap::NS_SAVE.matches(key) {
            let values = self.values();
            if values.is_empty() {
                self.error = Some(ViewError::local("At least one nameserver is required"));
                return ScreenCommand::None;
            }
            return ScreenCommand::SaveNameservers(values);
        }
        if DefaultKeymap::NEXT_FIELD.matches(key) || DefaultKeymap::is_arrow_down(key) {
            self.next_field();
        } else if DefaultKeymap::is_prev_field(key) || DefaultKeymap::is_arrow_up(key) {
            self.prev_field();
        } else if DefaultKeymap::BACK.matches(key) {
            self.back_to_view();
        } else if key.code == KeyCode::Backspace {
            self.pop_char();
        } else if let Some(c) = DefaultKeymap::text_input(key) {
            self.push_char(c);
        }
        ScreenCommand::None
    }

    fn handle_preset_keys(&mut self, key: &KeyEvent) -> ScreenCommand {
        if DefaultKeymap::is_up(key) {
            self.preset_up();
        } else if DefaultKeymap::is_down(key) {
            self.preset_down();
        } else if DefaultKeymap::NAV_CONFIRM.matches(key) {
            self.apply_preset();
        } else if DefaultKeymap::BACK.matches(key) {
            self.back_to_view();
        }
        ScreenCommand::None
    }

    fn preset_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::raw("  Select a preset:"), Line::default()];
        for (i, preset) in NS_PRESETS.iter().enumerate() {
            if i == self.preset_cursor() {
                lines.push(Line::styled(format!("> {}", preset.name), Styles::selected()));
            } else {
                lines.push(Line::raw(format!("  {}", preset.name)));
            }
        }
        lines.push(Line::default());
        lines.push(Line::styled("  enter to apply, esc to cancel", Styles::label()));
        lines
    }

    fn edit_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::raw("  Edit nameservers:"), Line::default()];
        for (i, input) in self.inputs().iter().enumerate() {
            let label = Span::styled(format!("  NS{}: ", i + 1), Styles::label());
            let value = if i == self.focus() {
                Span::styled(format!("{input}█"), Styles::input())
            } else {
                Span::raw(input.clone())
            };
            lines.push(Line::from(vec![label, value]));
        }
        lines.push(Line::default());
        if self.saving {
            lines.push(Line::styled("  Saving...", Styles::pending()));
        } else {
            lines.push(Line::styled(
                "  tab/↑↓ to navigate, ctrl+s to save, esc to cancel",
                Styles::label(),
            ));
        }
        lines
    }

    fn current_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::raw("  Current nameservers:"), Line::default()];
        if self.nameservers().is_empty() {
            lines.push(Line::raw("  No nameservers configured."));
        } else {
            for (i, ns) in self.nameservers().iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::raw(format!("  {}. ", i + 1)),
                    Span::styled(ns.clone(), Styles::value()),
                ]));
            }
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "  e to edit, p for presets, esc to go back",
            Styles::label(),
        ));
        lines
    }
}

impl Screen for NameserverState {
    fn handle_input(&mut self, key: KeyEvent) -> ScreenCommand {
        match self.mode() {
            NsMode::View => self.handle_view_keys(&key),
            NsMode::Edit => self.handle_edit_keys(&key),
            NsMode::Preset => self.handle_preset_keys(&key),
        }
    }

    fn resize(&mut self, _rows: u16) {}

    fn render(&self, frame: &mut Frame, area: Rect) {
        if self.loading {
            frame.render_widget(Paragraph::new("  Loading nameservers..."), area);
            return;
        }

        let mut lines = Vec::new();
        if let Some(err) = &self.error {
            lines.extend(error_lines(err, self.domain()));
            lines.push(Line::default());
        }
        if let Some(msg) = &self.success {
            lines.push(Line::styled(format!("  {msg}"), Styles::success()));
            lines.push(Line::default());
        }
        lines.extend(match self.mode() {
            NsMode::Preset => self.preset_lines(),
            NsMode::Edit => self.edit_lines(),
            NsMode::View => self.current_lines(),
        });

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn status_text(&self) -> String {
        format!("{} nameservers", self.nameservers().len())
    }

    fn help_text(&self) -> Vec<(&'static str, &'static str)> {
        match self.mode() {
            NsMode::Edit => vec![("tab/↑↓", "navigate"), ("ctrl+s", "save"), ("esc", "cancel")],
            NsMode::Preset => vec![("j/k", "navigate"), ("enter", "apply"), ("esc", "cancel")],
            NsMode::View => vec![("e", "edit"), ("p", "presets"), ("esc", "back"), ("q", "quit")],
        }
    }

    fn captures_text(&self) -> bool {
        self.mode() == NsMode::Edit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded() -> NameserverState {
        let mut state = NameserverState::default();
        state.set_domain("example.com");
        state.set_nameservers(vec!["ns1.old.net".into(), "ns2.old.net".into()]);
        state
    }

    fn type_text(state: &mut NameserverState, text: &str) {
        for c in text.chars() {
            state.handle_input(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn edit_then_save_emits_trimmed_values() {
        let mut state = loaded();
        state.handle_input(press(KeyCode::Char('e')));
        assert!(state.captures_text());

        // 编辑模式下 q、p 都是普通字符
        while !state.inputs()[0].is_empty() {
            state.handle_input(press(KeyCode::Backspace));
        }
        type_text(&mut state, "ns1.qp.net");
        state.handle_input(press(KeyCode::Tab));
        state.handle_input(press(KeyCode::Tab));
        type_text(&mut state, "  ");

        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            state.handle_input(save),
            ScreenCommand::SaveNameservers(vec!["ns1.qp.net".into(), "ns2.old.net".into()])
        );
    }

    #[test]
    fn saving_nothing_is_a_local_error() {
        let mut state = NameserverState::default();
        state.set_domain("example.com");
        state.set_nameservers(Vec::new());
        state.handle_input(press(KeyCode::Char('e')));

        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(state.handle_input(save), ScreenCommand::None);
        assert!(state.error.is_some());
    }

    #[test]
    fn preset_fills_inputs_and_switches_to_edit() {
        let mut state = loaded();
        state.handle_input(press(KeyCode::Char('p')));
        assert_eq!(state.mode(), NsMode::Preset);
        state.handle_input(press(KeyCode::Char('j')));
        state.handle_input(press(KeyCode::Enter));
        assert_eq!(state.mode(), NsMode::Edit);
        assert_eq!(state.values(), vec!["ns1.cloudflare.com", "ns2.cloudflare.com"]);
    }

    #[test]
    fn esc_steps_back_one_level() {
        let mut state = loaded();
        state.handle_input(press(KeyCode::Char('e')));
        assert_eq!(state.handle_input(press(KeyCode::Esc)), ScreenCommand::None);
        assert_eq!(state.mode(), NsMode::View);
        assert_eq!(state.handle_input(press(KeyCode::Esc)), ScreenCommand::Back);
    }

    #[test]
    fn keys_are_ignored_while_saving() {
        let mut state = loaded();
        state.start_saving();
        assert_eq!(state.handle_input(press(KeyCode::Esc)), ScreenCommand::None);
        assert_eq!(state.handle_input(press(KeyCode::Char('e'))), ScreenCommand::None);
        assert_eq!(state.mode(), NsMode::View);
    }
}
