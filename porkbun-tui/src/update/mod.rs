//!
//! src/update/mod.rs
//! Update 层：唯一修改 App 的地方
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;     // 执行 Screen 返回的 ScreenCommand（页面切换、派发任务）
//!         mod task;           // 合并后台任务的结果
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 消息的处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     AppMessage::Quit            → should_quit = true
//!     AppMessage::ToggleHelp      → 进入帮助并记住之前的页面；在帮助中则返回
//!     AppMessage::Resize          → 记录尺寸，内容区行数分发给每个 Screen
//!     AppMessage::Key(key)        → screen_mut(当前页).handle_input(key)
//!                                     └─▶ ScreenCommand ─▶ navigation::execute()
//!     AppMessage::Task(msg)       → task::merge()
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 后台任务的结果（task.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     任务完成顺序不确定，合并时只看消息本身：
//!         · 域名 / 价格：最后到达的覆盖之前的，成功后写快照
//!         · DNS / 名称服务器：结果带着请求时的域名，
//!           与当前视图显示的域名不一致时直接丢弃
//!

mod navigation;
mod task;

use crate::message::AppMessage;
use crate::model::{App, Page};
use crate::view::{screen_mut, ALL_PAGES, CHROME_ROWS};

/// 启动时的首次拉取：域名与价格并发
pub fn start(app: &mut App) {
    if let Some(tasks) = app.tasks() {
        log::info!("Fetching domains and pricing");
        tasks.fetch_domains();
        tasks.fetch_pricing();
    }
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleHelp => {
            if app.current_page == Page::Help {
                app.current_page = app.previous_page;
            } else {
                app.previous_page = app.current_page;
                app.current_page = Page::Help;
            }
        }

        AppMessage::Resize { width, height } => {
            app.width = width;
            app.height = height;
            let rows = height.saturating_sub(CHROME_ROWS);
            for page in ALL_PAGES {
                screen_mut(app, page).resize(rows);
            }
        }

        AppMessage::Key(key) => {
            let command = screen_mut(app, app.current_page).handle_input(key);
            navigation::execute(app, command);
        }

        AppMessage::Task(msg) => {
            task::merge(app, msg);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::domain_expiring;
    use crate::message::TaskMessage;
    use chrono::Utc;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use porkbun_provider::PricingTable;

    fn key(c: char) -> AppMessage {
        AppMessage::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn esc() -> AppMessage {
        AppMessage::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
    }

    fn app_with(names: &[&str]) -> App {
        let now = Utc::now();
        let domains = names
            .iter()
            .enumerate()
            .map(|(i, n)| domain_expiring(n, now, 30 * (i as i64 + 1)))
            .collect();
        App::new(domains, PricingTable::new())
    }

    #[test]
    fn help_toggle_remembers_previous_page() {
        let mut app = app_with(&["a.com"]);
        update(&mut app, key('c'));
        assert_eq!(app.current_page, Page::Calendar);

        update(&mut app, AppMessage::ToggleHelp);
        assert_eq!(app.current_page, Page::Help);
        update(&mut app, AppMessage::ToggleHelp);
        assert_eq!(app.current_page, Page::Calendar);

        update(&mut app, AppMessage::ToggleHelp);
        update(&mut app, esc());
        assert_eq!(app.current_page, Page::Calendar);
    }

    #[test]
    fn esc_from_secondary_view_returns_to_list() {
        let mut app = app_with(&["a.com"]);
        update(&mut app, key('t'));
        assert_eq!(app.current_page, Page::CostBreakdown);
        update(&mut app, esc());
        assert_eq!(app.current_page, Page::DomainList);
    }

    #[test]
    fn resize_reaches_every_screen() {
        let mut app = app_with(&["a.com", "b.com", "c.com"]);
        update(&mut app, AppMessage::Resize { width: 120, height: 30 });
        assert_eq!(app.height, 30);
        // 30 - 5 行外框 - 3 行列表装饰
        assert_eq!(app.domain_list.viewport.height, 22);
        assert_eq!(app.calendar.height(), 24);
        assert_eq!(app.cost.height(), 21);
        assert_eq!(app.dns.viewport.height, 15);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app_with(&[]);
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn task_messages_are_merged() {
        let mut app = app_with(&[]);
        assert!(app.loading);
        let now = Utc::now();
        update(
            &mut app,
            TaskMessage::DomainsLoaded(Ok(vec![domain_expiring("x.dev", now, 5)])).into(),
        );
        assert!(!app.loading);
        assert!(!app.refreshing);
        assert_eq!(app.domain_list.items().len(), 1);
    }
}
