//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App：状态根
//!         mod page;           // Page：当前显示哪个视图
//!         pub mod state;      // 各视图的状态与算法
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 状态树
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         current_page / previous_page        // 视图状态机
//!         demo / loading / refreshing / error // 全局标记
//!         pricing                             // TLD 价格表
//!
//!         domain_list: DomainListState        // 扁平列表引擎（过滤 + 排序 + 视口）
//!         calendar:    CalendarState          // 分组引擎，按到期月份
//!         cost:        CostState              // 分组引擎，按 TLD
//!         detail / dns / nameservers / availability / help
//!
//!         tasks: Option<TaskSpawner>          // 后台任务（演示模式为 None）
//!         cache: Option<CacheStore>           // 快照缓存
//!     }
//!
//!     域名列表与两个分组引擎共享同一份域名数据：
//!     每次域名或价格变化都整体重算，分组的展开状态随之重置。
//!

mod app;
mod page;
pub mod state;

pub use app::App;
pub use page::Page;
