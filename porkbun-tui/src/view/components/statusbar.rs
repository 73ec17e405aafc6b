//! 底部状态栏与快捷键提示栏

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::screen::screen;
use crate::view::theme::Styles;

/// 渲染状态栏：错误优先，否则是当前视图的状态文字
pub fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let line = match &app.error {
        Some(err) => Line::from(Span::styled(format!(" Error: {err}"), Styles::error())),
        None => {
            let mut text = String::from(" ");
            if app.refreshing {
                text.push_str("↻ ");
            }
            text.push_str(&screen(app, app.current_page).status_text());
            Line::from(text)
        }
    };
    frame.render_widget(Paragraph::new(line).style(Styles::statusbar()), area);
}

/// 渲染快捷键提示栏
pub fn render_hints(app: &App, frame: &mut Frame, area: Rect) {
    let hints = screen(app, app.current_page).help_text();

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
