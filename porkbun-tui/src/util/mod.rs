//!
//! src/util/mod.rs
//! Util 层：终端的进入与退出
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // tracing 文件日志
//!         mod terminal;       // raw 模式、备用屏幕、panic hook
//!
//!
//!     main.rs 中的顺序：
//!
//!         let mut terminal = init_terminal()?;        // 进入 raw 模式与备用屏幕
//!         let result = app::run(&mut terminal, ...);  // 主循环
//!         restore_terminal(&mut terminal)?;           // 先恢复终端
//!         result                                      // 再返回主循环的结果
//!
//!     主循环出错或 panic 时终端同样会被恢复：
//!     前者靠上面的顺序，后者靠 init_terminal 安装的 panic hook。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
