//! Porkbun 响应结构（wire format）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// 所有响应共有的状态字段
#[derive(Debug, Deserialize)]
pub(crate) struct PorkbunStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl PorkbunStatus {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("SUCCESS")
    }
}

/// 带凭证的请求体
#[derive(Debug, Serialize)]
pub(crate) struct AuthBody<'a, T: Serialize> {
    pub apikey: &'a str,
    pub secretapikey: &'a str,
    #[serde(flatten)]
    pub payload: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListAllRequest {
    pub start: String,
    pub include_labels: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateNsRequest<'a> {
    pub ns: &'a [String],
}

#[derive(Debug, Serialize)]
pub(crate) struct EmptyRequest {}

#[derive(Debug, Deserialize)]
pub(crate) struct ListAllResponse {
    #[serde(default)]
    pub domains: Vec<PorkbunDomain>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PorkbunDomain {
    pub domain: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tld: String,
    #[serde(default, deserialize_with = "lenient::datetime")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::datetime")]
    pub expire_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub security_lock: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub whois_privacy: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub auto_renew: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub not_local: bool,
    #[serde(default)]
    pub labels: Option<Vec<PorkbunLabel>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PorkbunLabel {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RetrieveRecordsResponse {
    #[serde(default)]
    pub records: Vec<PorkbunRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PorkbunRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub record_type: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub ttl: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub prio: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetNsResponse {
    #[serde(default)]
    pub ns: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckDomainResponse {
    pub response: CheckDomainDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckDomainDetail {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub avail: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub premium: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PricingResponse {
    #[serde(default)]
    pub pricing: std::collections::BTreeMap<String, PorkbunPrice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PorkbunPrice {
    #[serde(default, deserialize_with = "lenient::text")]
    pub registration: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub renewal: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub transfer: String,
}
