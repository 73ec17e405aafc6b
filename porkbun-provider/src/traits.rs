use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{AvailabilityResult, DnsRecord, Domain, PricingTable};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（HTTP 状态码等，Porkbun 的 JSON 错误本身不带错误码）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    #[cfg(test)]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 请求针对的域名（用于 `DomainNotFound`）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn for_domain(domain: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
        }
    }
}

/// 错误映射 Trait（内部使用）
/// 各客户端实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// 域名注册商客户端 Trait
///
/// 每个方法对应一次远程调用；实现不做重试，也不缓存结果。
#[async_trait]
pub trait RegistrarClient: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取账户下全部域名
    async fn list_domains(&self) -> Result<Vec<Domain>>;

    /// 获取域名的 DNS 记录
    async fn get_dns_records(&self, domain: &str) -> Result<Vec<DnsRecord>>;

    /// 获取域名当前的 NS 列表
    async fn get_nameservers(&self, domain: &str) -> Result<Vec<String>>;

    /// 覆盖域名的 NS 列表
    async fn update_nameservers(&self, domain: &str, nameservers: &[String]) -> Result<()>;

    /// 查询域名是否可注册
    async fn check_availability(&self, domain: &str) -> Result<AvailabilityResult>;

    /// 获取所有 TLD 的价格表
    async fn get_pricing(&self) -> Result<PricingTable>;
}
