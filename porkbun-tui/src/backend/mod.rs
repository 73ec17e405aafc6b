//!
//! src/backend/mod.rs
//! Backend 层：与 UI 无关的 I/O
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod cache_store;        // JSON 快照缓存（域名 / 价格）
//!         mod config_service;     // 凭证加载（环境变量 > config.yaml）
//!         mod demo;               // 演示数据
//!         mod task;               // 后台任务派发
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 后台任务（task.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层 ──调用──▶ TaskSpawner::fetch_xxx()
//!                              │
//!                              │ handle.spawn(async { client.xxx().await })
//!                              ▼
//!                        tokio 运行时（多线程）
//!                              │
//!                              │ tx.send(TaskMessage::...)
//!                              ▼
//!                        邮箱 UnboundedReceiver
//!                              │
//!                              │ app.rs 每轮 try_recv() 取空
//!                              ▼
//!                        update::update(app, AppMessage::Task(msg))
//!
//!     所有状态修改都在主线程完成，任务本身不接触 App。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 快照缓存（cache_store.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     启动时同步读取，用于在第一次网络请求返回前就显示数据；
//!     每次拉取成功后覆盖写入。读写失败只记录日志。
//!

mod cache_store;
mod config_service;
mod demo;
mod task;

#[cfg(test)]
pub(crate) mod mock;

pub use cache_store::CacheStore;
pub use config_service::{demo_mode_requested, load_credentials, setup_guidance};
pub use demo::{demo_domains, demo_pricing};
pub use task::TaskSpawner;
