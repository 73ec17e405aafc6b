//! 测试用的假 RegistrarClient

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use porkbun_provider::{
    AvailabilityResult, DnsRecord, Domain, PricingTable, ProviderError, RegistrarClient, Result,
};

/// 以 `now` 为基准、`days` 天后到期的域名
pub fn domain_expiring(name: &str, now: DateTime<Utc>, days: i64) -> Domain {
    Domain {
        name: name.to_string(),
        tld: name.rsplit('.').next().unwrap_or_default().to_string(),
        status: "ACTIVE".into(),
        create_date: now - Duration::days(365),
        expire_date: now + Duration::days(days),
        security_lock: true,
        whois_privacy: true,
        auto_renew: false,
        not_local: false,
        labels: Vec::new(),
    }
}

/// 固定返回值；记录保存过的名称服务器；价格接口总是失败
#[derive(Default)]
pub struct MockClient {
    pub domains: Vec<Domain>,
    pub saved: Mutex<Vec<(String, Vec<String>)>>,
}

#[async_trait]
impl RegistrarClient for MockClient {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_domains(&self) -> Result<Vec<Domain>> {
        Ok(self.domains.clone())
    }

    async fn get_dns_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        Ok(vec![DnsRecord {
            id: "1".into(),
            name: domain.to_string(),
            record_type: "A".into(),
            content: "192.0.2.1".into(),
            ttl: "600".into(),
            priority: String::new(),
            notes: String::new(),
        }])
    }

    async fn get_nameservers(&self, _domain: &str) -> Result<Vec<String>> {
        Ok(vec!["ns1.example.net".into()])
    }

    async fn update_nameservers(&self, domain: &str, nameservers: &[String]) -> Result<()> {
        self.saved
            .lock()
            .unwrap()
            .push((domain.to_string(), nameservers.to_vec()));
        Ok(())
    }

    async fn check_availability(&self, domain: &str) -> Result<AvailabilityResult> {
        Ok(AvailabilityResult {
            domain: domain.to_string(),
            available: true,
            price: "9.73".into(),
            premium: false,
        })
    }

    async fn get_pricing(&self) -> Result<PricingTable> {
        Err(ProviderError::NetworkError {
            provider: "mock".into(),
            detail: "offline".into(),
        })
    }
}
