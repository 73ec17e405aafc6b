//! Porkbun TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 按键、后台任务结果、视图命令 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染与各页面的 `Screen` 实现 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 凭证、快照缓存、后台任务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     cli::parse()                // --help / --version 在此退出
//!     init_logging()              // 文件日志，终端上不输出任何日志
//!
//!     演示模式：
//!         App::demo()             // 固定数据，不发起网络请求
//!
//!     正常模式：
//!         load_credentials()      // 缺失则打印配置指引，退出码 1
//!         tokio Runtime           // 后台任务在这里运行
//!         CacheStore              // 先用上次的快照填充界面
//!         App::new().with_tasks().with_cache()
//!         update::start()         // 并发拉取域名与价格
//!
//!     init_terminal()
//!     app::run()                  // 主循环
//!     restore_terminal()          // 无论成功与否都恢复终端
//!
//! }

mod app;
mod backend;
mod cli;
mod error;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use porkbun_provider::{Domain, PorkbunClient, PricingTable};
use tokio::sync::mpsc::UnboundedReceiver;

use backend::{CacheStore, TaskSpawner};
use error::{CacheError, ConfigError};
use message::TaskMessage;
use model::App;
use util::{init_logging, init_terminal, restore_terminal};

/// 凭证缺失时返回 `ExitCode::FAILURE`；日志 guard 必须在返回时析构，缓冲的日志才会写盘
fn main() -> Result<ExitCode> {
    let _cli = cli::parse();

    let cache = match CacheStore::open_default() {
        Ok(cache) => Some(cache),
        Err(e) => {
            eprintln!("Warning: {e}");
            None
        }
    };
    let _log_guard = cache.as_ref().and_then(|c| init_logging(c.dir()));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting porkbun-tui");

    // 运行时要活到主循环结束
    let runtime;
    let (mut app, mailbox): (App, Option<UnboundedReceiver<TaskMessage>>) =
        if backend::demo_mode_requested() {
            log::info!("Demo mode: no credentials loaded, no network access");
            (App::demo(Utc::now()), None)
        } else {
            let credentials = match backend::load_credentials() {
                Ok(credentials) => credentials,
                Err(e) => {
                    log::error!("{e}");
                    eprintln!("{}", credentials_error_message(&e));
                    return Ok(ExitCode::FAILURE);
                }
            };

            runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            let client =
                PorkbunClient::new(credentials).context("failed to create Porkbun client")?;
            let (tasks, rx) = TaskSpawner::new(runtime.handle().clone(), Arc::new(client));

            let (domains, pricing) = load_snapshots(cache.as_ref());
            let mut app = App::new(domains, pricing).with_tasks(tasks);
            if let Some(cache) = cache {
                app = app.with_cache(cache);
            }
            update::start(&mut app);
            (app, Some(rx))
        };

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, mailbox);
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("Main loop failed: {e:#}");
    }
    result.map(|()| ExitCode::SUCCESS)
}

fn credentials_error_message(e: &ConfigError) -> String {
    format!("Error: {e}\n\n{}", backend::setup_guidance())
}

/// 读取上次的快照；失败只记录日志，按空数据启动
///
/// 任一快照损坏时清空缓存目录，下一次拉取成功后重新写入。
fn load_snapshots(cache: Option<&CacheStore>) -> (Vec<Domain>, PricingTable) {
    let Some(cache) = cache else {
        return (Vec::new(), PricingTable::new());
    };

    let mut corrupt = false;
    let domains = match cache.load_domains() {
        Ok(snapshot) if snapshot.is_empty() => Vec::new(),
        Ok(snapshot) => {
            log::info!(
                "Loaded {} cached domains (saved {:?})",
                snapshot.data.len(),
                snapshot.updated_at
            );
            snapshot.data
        }
        Err(e) => {
            log::warn!("Ignoring domain snapshot: {e}");
            corrupt |= matches!(e, CacheError::Decode { .. });
            Vec::new()
        }
    };
    let pricing = match cache.load_pricing() {
        Ok(snapshot) => snapshot.data,
        Err(e) => {
            log::warn!("Ignoring pricing snapshot: {e}");
            corrupt |= matches!(e, CacheError::Decode { .. });
            PricingTable::new()
        }
    };

    if corrupt {
        if let Err(e) = cache.clear() {
            log::warn!("Failed to clear corrupt cache: {e}");
        }
        return (Vec::new(), PricingTable::new());
    }
    (domains, pricing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_error_lists_missing_field_and_guidance() {
        let message = credentials_error_message(&ConfigError::MissingCredentials {
            missing: "secret_key",
        });
        assert!(message.starts_with("Error: missing API credentials: secret_key"));
        assert!(message.contains("config.yaml"));
        assert!(message.contains("PORKBUN_SECRET_KEY"));
    }

    #[test]
    fn missing_cache_means_empty_start() {
        let (domains, pricing) = load_snapshots(None);
        assert!(domains.is_empty());
        assert!(pricing.is_empty());
    }

    #[test]
    fn snapshots_seed_the_first_frame() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CacheStore::new(dir.path());
        let now = Utc::now();
        cache
            .save_domains(&[backend::mock::domain_expiring("a.com", now, 5)])
            .unwrap();

        let (domains, pricing) = load_snapshots(Some(&cache));
        assert_eq!(domains.len(), 1);
        assert_eq!(domains[0].name, "a.com");
        assert!(pricing.is_empty());
    }

    #[test]
    fn corrupt_snapshot_clears_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CacheStore::new(dir.path());
        cache.save_pricing(&PricingTable::new()).unwrap();
        std::fs::write(dir.path().join("domains.json"), "{ not json").unwrap();

        let (domains, pricing) = load_snapshots(Some(&cache));
        assert!(domains.is_empty());
        assert!(pricing.is_empty());
        assert!(!dir.path().join("domains.json").exists());
        assert!(!dir.path().join("pricing.json").exists());
    }
}
