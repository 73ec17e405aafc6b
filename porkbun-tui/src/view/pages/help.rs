//! 帮助页面

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::ScreenCommand;
use crate::model::state::HelpState;
use crate::view::screen::Screen;
use crate::view::theme::Styles;

const KEY_WIDTH: usize = 20;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j / k / Up / Down", "Move up/down in lists"),
            ("Enter", "Select / open details"),
            ("Esc", "Go back / cancel"),
            ("Tab", "Next field (in forms)"),
        ],
    ),
    (
        "Domain List",
        &[
            ("/", "Search/filter domains"),
            ("1", "Sort by name"),
            ("2", "Sort by expiration date"),
            ("r", "Refresh domain list"),
        ],
    ),
    (
        "Views",
        &[
            ("d", "View DNS records"),
            ("n", "View/edit nameservers"),
            ("a", "Domain availability checker"),
            ("t", "TLD breakdown (costs by TLD)"),
            ("c", "Calendar view (by expiration)"),
        ],
    ),
    (
        "Nameserver Edit",
        &[
            ("e", "Edit nameservers"),
            ("p", "Apply preset (Cloudflare, etc.)"),
            ("Ctrl+S", "Save changes"),
        ],
    ),
    (
        "General",
        &[("?", "Toggle this help"), ("q / Ctrl+C", "Quit")],
    ),
];

impl Screen for HelpState {
    fn handle_input(&mut self, key: KeyEvent) -> ScreenCommand {
        if DefaultKeymap::BACK.matches(&key) {
            ScreenCommand::Back
        } else {
            ScreenCommand::None
        }
    }

    fn resize(&mut self, _rows: u16) {}

    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for (title, items) in SECTIONS {
            lines.push(Line::styled(format!(" {title} "), Styles::table_header()));
            for (key, desc) in *items {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{key:<KEY_WIDTH$}"), Styles::label()),
                    Span::raw(" "),
                    Span::styled(*desc, Styles::value()),
                ]));
            }
            lines.push(Line::default());
        }
        lines.push(Line::styled("  Press ? or Esc to close", Styles::label()));

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn status_text(&self) -> String {
        "Help".to_string()
    }

    fn help_text(&self) -> Vec<(&'static str, &'static str)> {
        vec![("? or esc", "to close")]
    }
}
