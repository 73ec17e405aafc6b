//! 可用性查询页面

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::ScreenCommand;
use crate::model::state::AvailabilityState;
use crate::view::components::text::pad;
use crate::view::screen::Screen;
use crate::view::theme::Styles;

const DOMAIN_WIDTH: usize = 30;

impl Screen for AvailabilityState {
    fn handle_input(&mut self, key: KeyEvent) -> ScreenCommand {
        if DefaultKeymap::NAV_CONFIRM.matches(&key) {
            return self
                .submit()
                .map_or(ScreenCommand::None, ScreenCommand::CheckAvailability);
        }
        if DefaultKeymap::BACK.matches(&key) {
            return ScreenCommand::Back;
        }
        if key.code == KeyCode::Backspace {
            self.pop_char();
        } else if let Some(c) = DefaultKeymap::text_input(&key) {
            self.push_char(c);
        }
        ScreenCommand::None
    }

    fn resize(&mut self, _rows: u16) {}

    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::raw("  Enter domain to check:"),
            Line::default(),
            Line::from(vec![
                Span::raw("  > "),
                Span::styled(format!("{}█", self.input()), Styles::input()),
            ]),
            Line::default(),
        ];

        if self.checking {
            lines.push(Line::styled("  Checking availability...", Styles::pending()));
            lines.push(Line::default());
        }
        if let Some(err) = &self.error {
            lines.push(Line::styled(format!("  Error: {}", err.message), Styles::error()));
            lines.push(Line::default());
        }

        let mut history = self.history().peekable();
        if history.peek().is_some() {
            lines.push(Line::raw("  Recent checks:"));
            lines.push(Line::default());
        }
        for result in history {
            let mut spans = vec![Span::raw(format!("  {}  ", pad(&result.domain, DOMAIN_WIDTH)))];
            if result.available {
                spans.push(Span::styled("AVAILABLE", Styles::success()));
                if !result.price.is_empty() {
                    let mut price = result.price.clone();
                    if result.premium {
                        price.push_str(" (premium)");
                    }
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(price, Styles::label()));
                }
            } else {
                spans.push(Span::styled("TAKEN", Styles::error()));
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn status_text(&self) -> String {
        "Domain availability checker".to_string()
    }

    fn help_text(&self) -> Vec<(&'static str, &'static str)> {
        vec![("enter", "check"), ("esc", "back"), ("ctrl+c", "quit")]
    }

    fn captures_text(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_submits_trimmed_domain_once() {
        let mut state = AvailabilityState::default();
        for c in " qux.dev ".chars() {
            state.handle_input(press(KeyCode::Char(c)));
        }
        assert_eq!(
            state.handle_input(press(KeyCode::Enter)),
            ScreenCommand::CheckAvailability("qux.dev".into())
        );
        assert_eq!(state.input(), "");
        assert!(state.checking);

        for c in "other.dev".chars() {
            state.handle_input(press(KeyCode::Char(c)));
        }
        assert_eq!(state.handle_input(press(KeyCode::Enter)), ScreenCommand::None);
    }

    #[test]
    fn blank_input_is_not_submitted() {
        let mut state = AvailabilityState::default();
        state.handle_input(press(KeyCode::Char(' ')));
        assert_eq!(state.handle_input(press(KeyCode::Enter)), ScreenCommand::None);
        assert!(!state.checking);
    }

    #[test]
    fn backspace_and_esc() {
        let mut state = AvailabilityState::default();
        state.handle_input(press(KeyCode::Char('a')));
        state.handle_input(press(KeyCode::Char('b')));
        state.handle_input(press(KeyCode::Backspace));
        assert_eq!(state.input(), "a");
        assert_eq!(state.handle_input(press(KeyCode::Esc)), ScreenCommand::Back);
    }
}
