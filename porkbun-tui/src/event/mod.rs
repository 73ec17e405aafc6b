//!
//! src/event/mod.rs
//! Event 层：把终端输入翻译成 AppMessage
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件轮询与分发
//!         pub mod keymap;     // 快捷键表
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键的去向
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Event::Key ──▶ 只认 Press
//!                     │
//!                     ├─ Ctrl+C                      → AppMessage::Quit（任何时候）
//!                     │
//!                     ├─ 当前视图不在输入文本时：
//!                     │     q  → Quit（帮助页里是关闭帮助）
//!                     │     ?  → ToggleHelp
//!                     │
//!                     └─ 其余                         → AppMessage::Key(key)
//!                                                      交给当前视图的 Screen::handle_input
//!
//!     Event::Resize(w, h) → AppMessage::Resize
//!
//!     "在输入文本" 指：域名列表的搜索框、名称服务器的编辑模式、可用性查询的输入框。
//!     这些时候 q 和 ? 会作为普通字符写进输入框。
//!

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
