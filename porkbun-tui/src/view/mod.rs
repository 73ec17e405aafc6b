//!
//! src/view/mod.rs
//! View 层：只读 App，绘制一帧
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 四段式主布局
//!         pub mod screen;     // Screen trait 与页面分发
//!         pub mod theme;      // 颜色与样式
//!         mod components;     // 状态栏、定宽文本
//!         mod pages;          // 各页面的 Screen 实现
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 布局
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ┌──────────────────────────────────────────────┐
//!     │ Porkbun TUI                                  │  标题栏（1 行）
//!     ├─ 页面标题 ───────────────────────────────────┤
//!     │                                              │
//!     │   screen(app, app.current_page).render()     │  内容区
//!     │                                              │
//!     ├──────────────────────────────────────────────┤
//!     │ ↻ 42 domains                                 │  状态栏：错误 / 刷新标记 + 状态文字
//!     │ j/k navigate │ enter details │ ...           │  提示栏：help_text()
//!     └──────────────────────────────────────────────┘
//!
//!     内容区可用行数 = 终端高度 - CHROME_ROWS，
//!     Resize 时由 Update 层传给每个 Screen::resize。
//!

mod components;
mod layout;
mod pages;
pub mod screen;
pub mod theme;

pub use layout::{render, CHROME_ROWS};
pub use screen::{screen, screen_mut, ALL_PAGES};
