//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;
use crate::model::{App, Page};
use crate::view;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, height) => AppMessage::Resize { width, height },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 文本输入中，q 和 ? 是普通字符
    if !view::screen(app, app.current_page).captures_text() {
        if DefaultKeymap::QUIT.matches(&key) {
            return if app.current_page == Page::Help {
                AppMessage::ToggleHelp
            } else {
                AppMessage::Quit
            };
        }
        if DefaultKeymap::HELP.matches(&key) {
            return AppMessage::ToggleHelp;
        }
    }

    AppMessage::Key(key)
}
