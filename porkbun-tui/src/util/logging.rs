//! 文件日志
//!
//! TUI 占用整个终端，日志只写文件：`<cache_dir>/porkbun-tui/porkbun-tui.log.YYYY-MM-DD`。
//! 级别取 `RUST_LOG`，默认 `info`；`log` 宏的记录经 tracing-log 桥接进来。

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "porkbun-tui.log";

/// 安装全局 subscriber；返回的 guard 必须活到程序结束，否则缓冲中的日志会丢失
///
/// 目录无法创建时不记录日志。
pub fn init_logging(dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Warning: could not create log directory {}: {e}", dir.display());
        return None;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}
