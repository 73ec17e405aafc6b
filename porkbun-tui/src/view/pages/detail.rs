//! 域名详情页面

use chrono::Utc;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use super::label_line;
use crate::event::keymap::DefaultKeymap;
use crate::message::ScreenCommand;
use crate::model::state::DetailState;
use crate::view::screen::Screen;
use crate::view::theme::{expiration_style, Styles};

impl Screen for DetailState {
    fn handle_input(&mut self, key: KeyEvent) -> ScreenCommand {
        if DefaultKeymap::is_up(&key) {
            ScreenCommand::SelectPrevious
        } else if DefaultKeymap::is_down(&key) {
            ScreenCommand::SelectNext
        } else if DefaultKeymap::OPEN_DNS.matches(&key) {
            ScreenCommand::OpenDns
        } else if DefaultKeymap::OPEN_NAMESERVERS.matches(&key) {
            ScreenCommand::OpenNameservers
        } else if DefaultKeymap::BACK.matches(&key) {
            ScreenCommand::Back
        } else {
            ScreenCommand::None
        }
    }

    fn resize(&mut self, _rows: u16) {}

    fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(d) = self.domain() else {
            frame.render_widget(Paragraph::new("  No domain selected"), area);
            return;
        };

        let days = d.days_until_expiry(Utc::now());

        let mut lines = vec![
            Line::styled(format!(" {} ", d.name), Styles::title()),
            Line::default(),
            label_line("TLD", d.tld.clone(), Styles::value()),
            label_line("Status", d.status.clone(), Styles::value()),
            label_line(
                "Created",
                d.create_date.format("%Y-%m-%d").to_string(),
                Styles::value(),
            ),
            label_line(
                "Expires",
                d.expire_date.format("%Y-%m-%d").to_string(),
                expiration_style(days),
            ),
            label_line("Days Left", days.to_string(), expiration_style(days)),
            label_line("Auto-Renew", yes_no(d.auto_renew), Styles::toggle(d.auto_renew)),
            label_line(
                "Security Lock",
                yes_no(d.security_lock),
                Styles::toggle(d.security_lock),
            ),
            label_line(
                "WHOIS Privacy",
                yes_no(d.whois_privacy),
                Styles::toggle(d.whois_privacy),
            ),
        ];
        if !d.labels.is_empty() {
            lines.push(label_line("Labels", d.labels.join(", "), Styles::value()));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn status_text(&self) -> String {
        self.domain().map(|d| d.name.clone()).unwrap_or_default()
    }

    fn help_text(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("j/k", "prev/next domain"),
            ("d", "DNS"),
            ("n", "nameservers"),
            ("esc", "back"),
            ("q", "quit"),
        ]
    }
}

fn yes_no(on: bool) -> String {
    let text = if on { "Yes" } else { "No" };
    text.to_string()
}
