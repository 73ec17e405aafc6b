//! DNS 记录页面（只读）

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{error_lines, label_line};
use crate::event::keymap::DefaultKeymap;
use crate::message::ScreenCommand;
use crate::model::state::DnsState;
use crate::view::components::text::pad;
use crate::view::screen::Screen;
use crate::view::theme::Styles;

const TYPE_WIDTH: usize = 8;
const NAME_WIDTH: usize = 30;
const CONTENT_WIDTH: usize = 40;
const TTL_WIDTH: usize = 8;

/// 选中记录的详情框：最多 7 行 + 上下边框
const DETAIL_ROWS: u16 = 9;

impl Screen for DnsState {
    fn handle_input(&mut self, key: KeyEvent) -> ScreenCommand {
        if DefaultKeymap::is_up(&key) {
            self.move_up();
        } else if DefaultKeymap::is_down(&key) {
            self.move_down();
        } else if DefaultKeymap::BACK.matches(&key) {
            return ScreenCommand::Back;
        }
        ScreenCommand::None
    }

    fn resize(&mut self, rows: u16) {
        // 表头占一行
        self.set_height(usize::from(rows.saturating_sub(DETAIL_ROWS + 1)));
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        if self.loading {
            frame.render_widget(Paragraph::new("  Loading DNS records..."), area);
            return;
        }
        if let Some(err) = &self.error {
            frame.render_widget(Paragraph::new(error_lines(err, self.domain())), area);
            return;
        }
        let records = self.records();
        if records.is_empty() {
            frame.render_widget(Paragraph::new("  No DNS records found."), area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(2), Constraint::Length(DETAIL_ROWS)])
            .split(area);

        let header = format!(
            "  {}  {}  {}  {}",
            pad("Type", TYPE_WIDTH),
            pad("Name", NAME_WIDTH),
            pad("Content", CONTENT_WIDTH),
            pad("TTL", TTL_WIDTH),
        );
        let mut lines = vec![Line::styled(header, Styles::table_header())];

        let range = self.viewport.visible_range(records.len());
        for (i, r) in records.iter().enumerate().skip(range.start).take(range.len()) {
            let row = format!(
                "  {}  {}  {}  {}",
                pad(&r.record_type, TYPE_WIDTH),
                pad(&r.name, NAME_WIDTH),
                pad(&r.content, CONTENT_WIDTH),
                pad(&r.ttl, TTL_WIDTH),
            );
            let line = if i == self.viewport.cursor {
                Line::styled(row, Styles::selected())
            } else {
                Line::raw(row)
            };
            lines.push(line);
        }
        frame.render_widget(Paragraph::new(lines), chunks[0]);

        if let Some(r) = self.selected() {
            let mut detail = vec![
                label_line("ID", r.id.clone(), Styles::value()),
                label_line("Type", r.record_type.clone(), Styles::value()),
                label_line("Name", r.name.clone(), Styles::value()),
                label_line("Content", r.content.clone(), Styles::value()),
                label_line("TTL", r.ttl.clone(), Styles::value()),
            ];
            if !r.priority.is_empty() && r.priority != "0" {
                detail.push(label_line("Priority", r.priority.clone(), Styles::value()));
            }
            if !r.notes.is_empty() {
                detail.push(label_line("Notes", r.notes.clone(), Styles::value()));
            }
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border());
            frame.render_widget(Paragraph::new(detail).block(block), chunks[1]);
        }
    }

    fn status_text(&self) -> String {
        format!("{} records", self.records().len())
    }

    fn help_text(&self) -> Vec<(&'static str, &'static str)> {
        vec![("j/k", "navigate"), ("esc", "back"), ("q", "quit")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use porkbun_provider::DnsRecord;

    fn record(id: &str) -> DnsRecord {
        DnsRecord {
            id: id.to_string(),
            name: "example.com".into(),
            record_type: "A".into(),
            content: "192.0.2.1".into(),
            ttl: "600".into(),
            priority: String::new(),
            notes: String::new(),
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn navigates_records_and_goes_back() {
        let mut state = DnsState::default();
        state.set_domain("example.com");
        state.set_records(vec![record("1"), record("2"), record("3")]);
        state.resize(20);

        state.handle_input(press(KeyCode::Char('j')));
        state.handle_input(press(KeyCode::Down));
        state.handle_input(press(KeyCode::Down));
        assert_eq!(state.selected().map(|r| r.id.as_str()), Some("3"));
        assert_eq!(state.status_text(), "3 records");
        assert_eq!(state.handle_input(press(KeyCode::Esc)), ScreenCommand::Back);
    }

    #[test]
    fn resize_leaves_room_for_detail_box() {
        let mut state = DnsState::default();
        state.resize(20);
        assert_eq!(state.viewport.height, 10);
        state.resize(5);
        assert_eq!(state.viewport.height, 1);
    }
}
