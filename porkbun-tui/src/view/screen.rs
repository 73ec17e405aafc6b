//! 视图的统一接口
//!
//! 每个页面状态实现 `Screen`：把按键翻译成 `ScreenCommand`，
//! 自行渲染内容区，并提供状态栏与提示栏的文字。
//! 页面之间的切换与后台任务由 Update 层根据 `ScreenCommand` 完成。

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::message::ScreenCommand;
use crate::model::{App, Page};

pub trait Screen {
    /// 处理按键，只修改自身状态
    fn handle_input(&mut self, key: KeyEvent) -> ScreenCommand;

    /// 内容区可用的行数（不含边框）变化
    fn resize(&mut self, rows: u16);

    /// 渲染到内容区
    fn render(&self, frame: &mut Frame, area: Rect);

    /// 状态栏文字
    fn status_text(&self) -> String;

    /// 提示栏的 (按键, 说明)
    fn help_text(&self) -> Vec<(&'static str, &'static str)>;

    /// 是否正在输入文本（此时 q 和 ? 不作为全局快捷键）
    fn captures_text(&self) -> bool {
        false
    }
}

/// 页面对应的视图
pub fn screen(app: &App, page: Page) -> &dyn Screen {
    match page {
        Page::DomainList => &app.domain_list,
        Page::Detail => &app.detail,
        Page::Dns => &app.dns,
        Page::Nameservers => &app.nameservers,
        Page::Availability => &app.availability,
        Page::CostBreakdown => &app.cost,
        Page::Calendar => &app.calendar,
        Page::Help => &app.help,
    }
}

pub fn screen_mut(app: &mut App, page: Page) -> &mut dyn Screen {
    match page {
        Page::DomainList => &mut app.domain_list,
        Page::Detail => &mut app.detail,
        Page::Dns => &mut app.dns,
        Page::Nameservers => &mut app.nameservers,
        Page::Availability => &mut app.availability,
        Page::CostBreakdown => &mut app.cost,
        Page::Calendar => &mut app.calendar,
        Page::Help => &mut app.help,
    }
}

/// 所有页面
pub const ALL_PAGES: [Page; 8] = [
    Page::DomainList,
    Page::Detail,
    Page::Dns,
    Page::Nameservers,
    Page::Availability,
    Page::CostBreakdown,
    Page::Calendar,
    Page::Help,
];
