//! 到期日历页面

use chrono::Utc;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use super::{grouped_input, scroll_line};
use crate::message::ScreenCommand;
use crate::model::state::{CalendarState, GroupRow};
use crate::view::components::text::pad;
use crate::view::screen::Screen;
use crate::view::theme::{expiration_style, Styles};

impl Screen for CalendarState {
    fn handle_input(&mut self, key: KeyEvent) -> ScreenCommand {
        grouped_input(self, &key)
    }

    fn resize(&mut self, rows: u16) {
        // 最后一行留给滚动提示
        self.set_height(usize::from(rows.saturating_sub(1)));
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        if self.is_empty() {
            frame.render_widget(Paragraph::new("  No domains to display."), area);
            return;
        }

        let now = Utc::now();
        let view = self.visible_rows();
        let mut lines: Vec<Line> = view
            .rows
            .iter()
            .map(|row| match row {
                GroupRow::Header { group, selected, .. } => {
                    let arrow = if group.expanded { "▼" } else { "▶" };
                    let text = format!(
                        "{arrow} {} {} ({} domains)",
                        group.key.month_name(),
                        group.key.year,
                        group.members.len()
                    );
                    if *selected {
                        Line::styled(format!("  {text}"), Styles::selected())
                    } else {
                        let days = group
                            .members
                            .first()
                            .map_or(0, |d| d.days_until_expiry(now));
                        Line::styled(format!("  {text}"), expiration_style(days))
                    }
                }
                GroupRow::Item { domain, .. } => {
                    let days = domain.days_until_expiry(now);
                    let left = if days < 0 {
                        "EXPIRED".to_string()
                    } else {
                        format!("{days} days")
                    };
                    Line::styled(
                        format!(
                            "      {}  {}  {left}",
                            pad(&domain.name, 30),
                            domain.expire_date.format("%b %d")
                        ),
                        expiration_style(days),
                    )
                }
            })
            .collect();

        if view.total > self.height() {
            lines.push(scroll_line(view.start, view.end, view.total));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn status_text(&self) -> String {
        format!("{} months, {} domains", self.len(), self.member_count())
    }

    fn help_text(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("j/k", "navigate"),
            ("enter", "expand"),
            ("esc", "back"),
            ("q", "quit"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::domain_expiring;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keys_drive_the_grouped_list() {
        let now = Utc::now();
        let mut state = CalendarState::default();
        state.regroup(&[
            domain_expiring("a.com", now, 10),
            domain_expiring("b.com", now, 100),
            domain_expiring("c.com", now, 200),
        ]);
        state.resize(20);
        let months = state.len();
        assert!(months >= 2);
        assert!(state.groups()[0].expanded);

        state.handle_input(press(KeyCode::Enter));
        assert!(!state.groups()[0].expanded);

        state.handle_input(press(KeyCode::Char('j')));
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.status_text(), format!("{months} months, 3 domains"));
        assert_eq!(state.handle_input(press(KeyCode::Esc)), ScreenCommand::Back);
    }
}
