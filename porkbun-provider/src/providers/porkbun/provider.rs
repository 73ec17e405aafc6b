//! Porkbun RegistrarClient trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{ErrorContext, ProviderErrorMapper, RegistrarClient};
use crate::types::{AvailabilityResult, DnsRecord, Domain, PricingTable, TldPricing};

use super::types::{
    CheckDomainResponse, EmptyRequest, GetNsResponse, ListAllRequest, ListAllResponse,
    PorkbunDomain, PorkbunRecord, PricingResponse, RetrieveRecordsResponse, UpdateNsRequest,
};
use super::{LIST_ALL_PAGE_SIZE, PorkbunClient};

impl PorkbunClient {
    /// 将 Porkbun 域名转换为 `Domain`
    /// 缺失的日期按 Unix 纪元处理
    pub(crate) fn porkbun_domain_to_domain(d: PorkbunDomain) -> Domain {
        Domain {
            name: d.domain,
            tld: d.tld,
            status: d.status,
            create_date: d.create_date.unwrap_or_default(),
            expire_date: d.expire_date.unwrap_or_default(),
            security_lock: d.security_lock,
            whois_privacy: d.whois_privacy,
            auto_renew: d.auto_renew,
            not_local: d.not_local,
            labels: d
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(|l| l.title)
                .collect(),
        }
    }

    pub(crate) fn porkbun_record_to_dns_record(r: PorkbunRecord) -> DnsRecord {
        DnsRecord {
            id: r.id,
            name: r.name,
            record_type: r.record_type,
            content: r.content,
            ttl: r.ttl,
            priority: r.prio,
            notes: r.notes,
        }
    }
}

#[async_trait]
impl RegistrarClient for PorkbunClient {
    fn id(&self) -> &'static str {
        "porkbun"
    }

    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let mut domains = Vec::new();
        let mut start = 0usize;

        // listAll 每页最多 1000 条，不足一页即为最后一页
        loop {
            let page: ListAllResponse = self
                .post(
                    "domain/listAll",
                    ListAllRequest {
                        start: start.to_string(),
                        include_labels: "yes",
                    },
                    ErrorContext::default(),
                )
                .await?;

            let count = page.domains.len();
            domains.extend(
                page.domains
                    .into_iter()
                    .map(Self::porkbun_domain_to_domain),
            );

            if count < LIST_ALL_PAGE_SIZE {
                break;
            }
            start += count;
        }

        log::info!("[porkbun] Loaded {} domains", domains.len());
        Ok(domains)
    }

    async fn get_dns_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        let resp: RetrieveRecordsResponse = self
            .post(
                &format!("dns/retrieve/{domain}"),
                EmptyRequest {},
                ErrorContext::for_domain(domain),
            )
            .await?;

        Ok(resp
            .records
            .into_iter()
            .map(Self::porkbun_record_to_dns_record)
            .collect())
    }

    async fn get_nameservers(&self, domain: &str) -> Result<Vec<String>> {
        let resp: GetNsResponse = self
            .post(
                &format!("domain/getNs/{domain}"),
                EmptyRequest {},
                ErrorContext::for_domain(domain),
            )
            .await?;
        Ok(resp.ns)
    }

    async fn update_nameservers(&self, domain: &str, nameservers: &[String]) -> Result<()> {
        if nameservers.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "ns".to_string(),
                detail: "at least one nameserver is required".to_string(),
            });
        }

        let _: serde_json::Value = self
            .post(
                &format!("domain/updateNs/{domain}"),
                UpdateNsRequest { ns: nameservers },
                ErrorContext::for_domain(domain),
            )
            .await?;

        log::info!("[porkbun] Updated nameservers of {domain}: {nameservers:?}");
        Ok(())
    }

    async fn check_availability(&self, domain: &str) -> Result<AvailabilityResult> {
        let resp: CheckDomainResponse = self
            .post(
                &format!("domain/checkDomain/{domain}"),
                EmptyRequest {},
                ErrorContext::default(),
            )
            .await?;

        Ok(AvailabilityResult {
            domain: domain.to_string(),
            available: resp.response.avail,
            price: resp.response.price,
            premium: resp.response.premium,
        })
    }

    async fn get_pricing(&self) -> Result<PricingTable> {
        let resp: PricingResponse = self
            .post("pricing/get", EmptyRequest {}, ErrorContext::default())
            .await?;

        Ok(resp
            .pricing
            .into_iter()
            .map(|(tld, p)| {
                (
                    tld,
                    TldPricing {
                        registration: p.registration,
                        renewal: p.renewal,
                        transfer: p.transfer,
                    },
                )
            })
            .collect())
    }
}
