//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Page};

use super::components::statusbar;
use super::screen::screen;
use super::theme::Styles;

/// 标题栏、状态栏、提示栏各一行，加上内容区上下边框
pub const CHROME_ROWS: u16 = 5;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 内容区
            Constraint::Length(1), // 状态栏
            Constraint::Length(1), // 提示栏
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0]);
    render_content(app, frame, chunks[1]);
    statusbar::render_status(app, frame, chunks[2]);
    statusbar::render_hints(app, frame, chunks[3]);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    frame.render_widget(Paragraph::new(" Porkbun TUI ").style(Styles::title_bar()), area);
}

/// 内容区：带标题的边框 + 当前页面
fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", content_title(app)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.loading && app.current_page == Page::DomainList {
        frame.render_widget(
            Paragraph::new("  Loading domains...").style(Styles::pending()),
            inner,
        );
        return;
    }

    screen(app, app.current_page).render(frame, inner);
}

fn content_title(app: &App) -> String {
    let page = app.current_page;
    match page {
        Page::Dns => format!("{}: {}", page.title(), app.dns.domain()),
        Page::Nameservers => format!("{}: {}", page.title(), app.nameservers.domain()),
        _ => page.title().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::domain_expiring;
    use chrono::Utc;
    use porkbun_provider::PricingTable;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> Vec<String> {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn loading_screen_before_first_fetch() {
        let app = App::new(Vec::new(), PricingTable::new());
        let screen = draw(&app);
        assert!(screen[0].contains("Porkbun TUI"));
        assert!(screen.iter().any(|l| l.contains("Loading domains...")));
        assert!(screen[18].contains("↻ 0 domains"));
    }

    #[test]
    fn error_replaces_status_text() {
        let mut app = App::new(Vec::new(), PricingTable::new());
        app.refreshing = false;
        app.error = Some("[porkbun] Network error: offline".into());
        let screen = draw(&app);
        assert!(screen[18].contains("Error: [porkbun] Network error: offline"));
    }

    #[test]
    fn domain_rows_and_hints_render() {
        let now = Utc::now();
        let mut app = App::new(
            vec![domain_expiring("example.com", now, 40)],
            PricingTable::new(),
        );
        app.loading = false;
        app.refreshing = false;
        let screen = draw(&app);
        assert!(screen.iter().any(|l| l.contains("example.com")));
        assert!(screen[18].contains("1 domains"));
        assert!(screen[19].contains("navigate"));
    }

    #[test]
    fn help_page_shows_close_hint() {
        let mut app = App::new(Vec::new(), PricingTable::new());
        app.current_page = Page::Help;
        let screen = draw(&app);
        assert!(screen[19].contains("? or esc"));
        assert!(screen.iter().any(|l| l.contains("Keyboard") || l.contains("Navigation")));
    }
}
