//! 各页面的 `Screen` 实现

mod availability;
mod calendar;
mod cost;
mod detail;
mod dns;
mod domain_list;
mod help;
mod nameservers;

use crossterm::event::KeyEvent;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::event::keymap::DefaultKeymap;
use crate::message::ScreenCommand;
use crate::model::state::{GroupPolicy, GroupedList, ViewError};
use crate::view::theme::Styles;

/// 标签列宽度（"WHOIS Privacy:" 需要 16 列）
pub(crate) const LABEL_WIDTH: usize = 16;

/// `  标签:          值` 形式的一行
pub(crate) fn label_line<'a>(label: &str, value: String, style: Style) -> Line<'a> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH),
            Styles::label(),
        ),
        Span::raw(" "),
        Span::styled(value, style),
    ])
}

/// 错误信息；需要开启 API 访问时附带操作指引
pub(crate) fn error_lines(error: &ViewError, domain: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(format!("  Error: {}", error.message), Styles::error())];
    if error.needs_api_access {
        lines.push(Line::default());
        lines.push(Line::styled("  This domain needs API access enabled.", Styles::label()));
        lines.push(Line::styled(
            format!("  Go to porkbun.com → Domain Management → {domain} → API Access → ON"),
            Styles::label(),
        ));
    }
    lines
}

/// 分组视图共用的按键：上下移动、回车展开/折叠、Esc 返回
pub(crate) fn grouped_input<P: GroupPolicy>(
    list: &mut GroupedList<P>,
    key: &KeyEvent,
) -> ScreenCommand {
    if DefaultKeymap::is_up(key) {
        list.move_up();
    } else if DefaultKeymap::is_down(key) {
        list.move_down();
    } else if DefaultKeymap::NAV_CONFIRM.matches(key) {
        list.toggle();
    } else if DefaultKeymap::BACK.matches(key) {
        return ScreenCommand::Back;
    }
    ScreenCommand::None
}

/// 分组视图的滚动提示
pub(crate) fn scroll_line(start: usize, end: usize, total: usize) -> Line<'static> {
    Line::styled(format!(" {}-{} of {} lines ", start + 1, end, total), Styles::label())
}
