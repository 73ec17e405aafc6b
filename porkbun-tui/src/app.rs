//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环在主线程上同步运行，大约每 100 ms 一轮（取决于有无输入）：
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染
//!     if app.should_quit { break }                   // 检查退出
//!     while let Ok(msg) = mailbox.try_recv() {       // 取空后台任务邮箱
//!         update::update(&mut app, msg.into())
//!     }
//!     if let Some(event) = poll_event(100ms) {       // 等待输入，最长 100 ms
//!         let msg = handle_event(event, &app);
//!         update::update(&mut app, msg)
//!     }
//! }
//!
//! 后台任务只向邮箱发消息，所有状态修改都在这里串行发生。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::{AppMessage, TaskMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环；演示模式没有邮箱
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    mut mailbox: Option<UnboundedReceiver<TaskMessage>>,
) -> Result<()> {
    // 首帧之前把尺寸告诉各视图
    let size = terminal.size()?;
    update::update(
        app,
        AppMessage::Resize {
            width: size.width,
            height: size.height,
        },
    );

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 合并已完成的后台任务
        if let Some(rx) = mailbox.as_mut() {
            while let Ok(msg) = rx.try_recv() {
                log::debug!("Task finished: {}", msg.name());
                update::update(app, msg.into());
            }
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
