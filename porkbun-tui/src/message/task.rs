//! 异步任务完成消息

use porkbun_provider::{AvailabilityResult, DnsRecord, Domain, PricingTable, ProviderError};

/// 后台任务的结果
///
/// 每个任务只发送一条消息（成功载荷或错误）。
/// DNS / 名称服务器相关消息带上请求时的域名，用于丢弃过期结果。
#[derive(Debug)]
pub enum TaskMessage {
    DomainsLoaded(Result<Vec<Domain>, ProviderError>),

    PricingLoaded(Result<PricingTable, ProviderError>),

    DnsLoaded {
        domain: String,
        result: Result<Vec<DnsRecord>, ProviderError>,
    },

    NameserversLoaded {
        domain: String,
        result: Result<Vec<String>, ProviderError>,
    },

    NameserversSaved {
        domain: String,
        result: Result<(), ProviderError>,
    },

    AvailabilityChecked(Result<AvailabilityResult, ProviderError>),
}

impl TaskMessage {
    /// 日志用的简短名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::DomainsLoaded(_) => "domains",
            Self::PricingLoaded(_) => "pricing",
            Self::DnsLoaded { .. } => "dns",
            Self::NameserversLoaded { .. } => "nameservers",
            Self::NameserversSaved { .. } => "save-nameservers",
            Self::AvailabilityChecked(_) => "availability",
        }
    }
}
