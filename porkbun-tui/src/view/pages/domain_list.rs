//! 域名列表页面

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::ScreenCommand;
use crate::model::state::{DomainListState, SortField};
use crate::view::components::text::pad;
use crate::view::screen::Screen;
use crate::view::theme::{days_label, expiration_style, Styles};

const NAME_WIDTH: usize = 35;
const EXPIRES_WIDTH: usize = 12;
const DAYS_WIDTH: usize = 8;
const AUTO_RENEW_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 10;

/// 过滤行 + 表头 + 滚动提示
const CHROME_ROWS: u16 = 3;

impl Screen for DomainListState {
    fn handle_input(&mut self, key: KeyEvent) -> ScreenCommand {
        if self.is_searching() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.stop_search(),
                KeyCode::Up => self.move_up(),
                KeyCode::Down => self.move_down(),
                KeyCode::Backspace => self.pop_char(),
                _ => {
                    if let Some(c) = DefaultKeymap::text_input(&key) {
                        self.push_char(c);
                    }
                }
            }
            return ScreenCommand::None;
        }

        if DefaultKeymap::is_up(&key) {
            self.move_up();
        } else if DefaultKeymap::is_down(&key) {
            self.move_down();
        } else if DefaultKeymap::NAV_CONFIRM.matches(&key) {
            if self.selected().is_some() {
                return ScreenCommand::OpenDetail;
            }
        } else if DefaultKeymap::SEARCH.matches(&key) {
            self.start_search();
        } else if DefaultKeymap::BACK.matches(&key) {
            self.clear_filter();
        } else if DefaultKeymap::SORT_NAME.matches(&key) {
            self.toggle_sort(SortField::Name);
        } else if DefaultKeymap::SORT_EXPIRATION.matches(&key) {
            self.toggle_sort(SortField::Expiration);
        } else if DefaultKeymap::OPEN_DNS.matches(&key) {
            return ScreenCommand::OpenDns;
        } else if DefaultKeymap::OPEN_NAMESERVERS.matches(&key) {
            return ScreenCommand::OpenNameservers;
        } else if DefaultKeymap::OPEN_AVAILABILITY.matches(&key) {
            return ScreenCommand::OpenAvailability;
        } else if DefaultKeymap::OPEN_COST.matches(&key) {
            return ScreenCommand::OpenCostBreakdown;
        } else if DefaultKeymap::OPEN_CALENDAR.matches(&key) {
            return ScreenCommand::OpenCalendar;
        } else if DefaultKeymap::REFRESH.matches(&key) {
            return ScreenCommand::Refresh;
        }
        ScreenCommand::None
    }

    fn resize(&mut self, rows: u16) {
        self.set_height(usize::from(rows.saturating_sub(CHROME_ROWS).max(1)));
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let now = Utc::now();
        let mut lines = Vec::new();

        // 第一行：搜索框或当前过滤条件
        if self.is_searching() {
            lines.push(Line::from(vec![
                Span::raw("  Search: "),
                Span::styled(format!("{}█", self.query()), Styles::input()),
            ]));
        } else if !self.query().is_empty() {
            lines.push(Line::styled(
                format!("  Filter: \"{}\" (/ to edit, esc to clear)", self.query()),
                Styles::label(),
            ));
        } else {
            lines.push(Line::default());
        }

        let len = self.visible_len();
        if len == 0 {
            let text = if self.query().is_empty() {
                "  No domains found."
            } else {
                "  No domains match your search."
            };
            lines.push(Line::raw(text));
            frame.render_widget(Paragraph::new(lines), area);
            return;
        }

        let (field, ascending) = self.sort();
        let header = format!(
            "  {}  {}  {}  {}  {}",
            pad(&sort_label("Domain", SortField::Name, field, ascending), NAME_WIDTH),
            pad(&sort_label("Expires", SortField::Expiration, field, ascending), EXPIRES_WIDTH),
            pad("Days", DAYS_WIDTH),
            pad("AutoRenew", AUTO_RENEW_WIDTH),
            pad("Status", STATUS_WIDTH),
        );
        lines.push(Line::styled(header, Styles::table_header()));

        let range = self.viewport.visible_range(len);
        for (i, domain) in self
            .visible()
            .enumerate()
            .skip(range.start)
            .take(range.len())
        {
            let days = domain.days_until_expiry(now);
            let status = if domain.status.is_empty() {
                "Active"
            } else {
                domain.status.as_str()
            };
            let auto_renew = if domain.auto_renew { "Yes" } else { "No" };

            let mut row = Line::from(vec![
                Span::raw(format!("  {}  ", pad(&domain.name, NAME_WIDTH))),
                Span::raw(format!(
                    "{}  ",
                    pad(&domain.expire_date.format("%Y-%m-%d").to_string(), EXPIRES_WIDTH)
                )),
                Span::styled(pad(&days_label(days), DAYS_WIDTH), expiration_style(days)),
                Span::raw("  "),
                Span::styled(
                    pad(auto_renew, AUTO_RENEW_WIDTH),
                    Styles::toggle(domain.auto_renew),
                ),
                Span::raw(format!("  {}", pad(status, STATUS_WIDTH))),
            ]);
            if i == self.viewport.cursor {
                row = row.style(Styles::selected());
            }
            lines.push(row);
        }

        if len > self.viewport.height {
            lines.push(Line::styled(
                format!(" {}-{} of {} ", range.start + 1, range.end, len),
                Styles::label(),
            ));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn status_text(&self) -> String {
        if self.query().is_empty() {
            format!("{} domains", self.items().len())
        } else {
            format!("{}/{} domains", self.visible_len(), self.items().len())
        }
    }

    fn help_text(&self) -> Vec<(&'static str, &'static str)> {
        if self.is_searching() {
            return vec![("enter", "apply"), ("esc", "done"), ("↑↓", "navigate")];
        }
        vec![
            ("j/k", "navigate"),
            ("enter", "details"),
            ("/", "search"),
            ("d", "dns"),
            ("n", "ns"),
            ("a", "avail"),
            ("t", "tld"),
            ("c", "cal"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }

    fn captures_text(&self) -> bool {
        self.is_searching()
    }
}

fn sort_label(label: &str, column: SortField, field: SortField, ascending: bool) -> String {
    if column != field {
        return label.to_string();
    }
    let arrow = if ascending { "▲" } else { "▼" };
    format!("{label} {arrow}")
}
