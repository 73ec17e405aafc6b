//! 页面（视图）定义

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 域名列表
    #[default]
    DomainList,
    /// 域名详情
    Detail,
    /// DNS 记录
    Dns,
    /// 名称服务器
    Nameservers,
    /// 可用性查询
    Availability,
    /// 按 TLD 的费用统计
    CostBreakdown,
    /// 到期日历
    Calendar,
    /// 帮助
    Help,
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Page::DomainList => "Domains",
            Page::Detail => "Domain Details",
            Page::Dns => "DNS Records",
            Page::Nameservers => "Nameservers",
            Page::Availability => "Domain Availability Checker",
            Page::CostBreakdown => "TLD Breakdown",
            Page::Calendar => "Expiration Calendar",
            Page::Help => "Help",
        }
    }
}
