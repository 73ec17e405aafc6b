//! 各视图的状态
//!
//! 这里只放纯状态与算法，不依赖终端；
//! 渲染和按键映射在 view/pages 中通过 `Screen` trait 实现。

mod availability;
mod calendar;
mod cost;
mod detail;
mod dns;
mod domain_list;
mod grouped;
mod nameservers;
mod viewport;

pub use availability::AvailabilityState;
pub use calendar::CalendarState;
pub use cost::{CostState, TldCost};
pub use detail::DetailState;
pub use dns::DnsState;
pub use domain_list::{DomainListState, SortField};
pub use grouped::{GroupPolicy, GroupRow, GroupedList};
pub use nameservers::{NameserverState, NsMode, NS_PRESETS};
pub use viewport::Viewport;

use porkbun_provider::ProviderError;

/// 帮助页（静态内容，无状态）
#[derive(Debug, Default)]
pub struct HelpState;

/// 显示在视图内的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    pub message: String,
    /// 域名未开启 API 访问时，额外显示开启指引
    pub needs_api_access: bool,
}

impl ViewError {
    pub fn local(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            needs_api_access: false,
        }
    }
}

impl From<&ProviderError> for ViewError {
    fn from(err: &ProviderError) -> Self {
        let message = err.to_string();
        let lower = message.to_lowercase();
        Self {
            needs_api_access: matches!(err, ProviderError::PermissionDenied { .. })
                || lower.contains("not opted in")
                || lower.contains("api access"),
            message,
        }
    }
}
