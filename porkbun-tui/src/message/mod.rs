//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Backend ──▶ Update 之间的桥梁。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // AppMessage：主循环送进 update() 的唯一类型
//!         mod command;    // ScreenCommand：视图处理按键后的返回值
//!         mod task;       // TaskMessage：后台任务的结果
//!
//!
//!     消息来源：
//!
//!         键盘 / 终端事件 ──handle_event()──▶ AppMessage::{Quit, ToggleHelp, Key, Resize}
//!         后台任务        ──mailbox──────────▶ AppMessage::Task(TaskMessage)
//!
//!     AppMessage::Key 会交给当前视图的 Screen::handle_input()，
//!     视图返回的 ScreenCommand 再由 Update 层执行（切换页面、派发任务等）。
//!

mod app;
mod command;
mod task;

pub use app::AppMessage;
pub use command::ScreenCommand;
pub use task::TaskMessage;
