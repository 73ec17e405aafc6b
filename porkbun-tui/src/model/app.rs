//! 应用状态
//!
//! App 是唯一的状态根：当前页面、各页面状态、全局加载/错误标记，
//! 以及后台任务派发器和快照缓存两个协作者。
//! 只有 Update 层会修改它。

use chrono::{DateTime, Utc};
use porkbun_provider::{Domain, PricingTable};

use crate::backend::{demo_domains, demo_pricing, CacheStore, TaskSpawner};

use super::state::{
    AvailabilityState, CalendarState, CostState, DetailState, DnsState, DomainListState,
    HelpState, NameserverState,
};
use super::Page;

pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub current_page: Page,
    /// 打开帮助前的页面
    pub previous_page: Page,

    /// 演示模式：不发起任何后台任务
    pub demo: bool,
    /// 没有任何域名数据，正在等待第一次拉取
    pub loading: bool,
    /// 后台刷新中（状态栏显示 ↻）
    pub refreshing: bool,
    /// 最近一次域名拉取失败的信息，显示在状态栏
    pub error: Option<String>,

    /// 终端尺寸
    pub width: u16,
    pub height: u16,

    pub pricing: PricingTable,

    // === 各页面状态 ===
    pub domain_list: DomainListState,
    pub detail: DetailState,
    pub dns: DnsState,
    pub nameservers: NameserverState,
    pub availability: AvailabilityState,
    pub cost: CostState,
    pub calendar: CalendarState,
    pub help: HelpState,

    tasks: Option<TaskSpawner>,
    cache: Option<CacheStore>,
}

impl App {
    /// 以缓存数据（可能为空）启动
    pub fn new(domains: Vec<Domain>, pricing: PricingTable) -> Self {
        let loading = domains.is_empty();
        let mut app = Self {
            should_quit: false,
            current_page: Page::DomainList,
            previous_page: Page::DomainList,
            demo: false,
            loading,
            refreshing: true,
            error: None,
            width: 0,
            height: 0,
            pricing: PricingTable::new(),
            domain_list: DomainListState::new(),
            detail: DetailState::default(),
            dns: DnsState::default(),
            nameservers: NameserverState::default(),
            availability: AvailabilityState::default(),
            cost: CostState::default(),
            calendar: CalendarState::default(),
            help: HelpState,
            tasks: None,
            cache: None,
        };
        app.set_pricing(pricing);
        app.set_domains(domains);
        app
    }

    /// 演示模式
    pub fn demo(now: DateTime<Utc>) -> Self {
        let mut app = Self::new(demo_domains(now), demo_pricing());
        app.demo = true;
        app.loading = false;
        app.refreshing = false;
        app
    }

    pub fn with_tasks(mut self, tasks: TaskSpawner) -> Self {
        self.tasks = Some(tasks);
        self
    }

    pub fn with_cache(mut self, cache: CacheStore) -> Self {
        self.cache = Some(cache);
        self
    }

    /// 演示模式下总是 `None`
    pub fn tasks(&self) -> Option<&TaskSpawner> {
        if self.demo {
            None
        } else {
            self.tasks.as_ref()
        }
    }

    pub fn cache(&self) -> Option<&CacheStore> {
        self.cache.as_ref()
    }

    /// 替换域名列表并重新计算两个分组视图
    ///
    /// 列表光标回到 0，详情页随之切换到新的选中项。
    pub fn set_domains(&mut self, domains: Vec<Domain>) {
        self.calendar.regroup(&domains);
        self.cost.regroup(&domains);
        self.domain_list.set_items(domains);
        self.detail.show(self.domain_list.selected());
    }

    /// 替换价格表并重新计算费用分组
    pub fn set_pricing(&mut self, pricing: PricingTable) {
        self.cost.set_data(self.domain_list.items(), pricing.clone());
        self.pricing = pricing;
    }

    /// 域名列表当前选中的域名
    pub fn selected_domain(&self) -> Option<&Domain> {
        self.domain_list.selected()
    }
}
