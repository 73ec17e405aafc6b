//! Porkbun JSON API v3 client
//!
//! Every endpoint is a `POST` whose JSON body carries `apikey` and `secretapikey`.
//! Failures come back as `{"status": "ERROR", "message": "..."}`, usually with a 4xx status.

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;
use crate::utils::log_sanitizer::mask_secret;

pub(crate) const PORKBUN_API_BASE: &str = "https://api.porkbun.com/api/json/v3";
/// `domain/listAll` 单页最大返回数
pub(crate) const LIST_ALL_PAGE_SIZE: usize = 1000;

/// Porkbun API 凭证
#[derive(Clone)]
pub struct PorkbunCredentials {
    pub api_key: String,
    pub secret_key: String,
}

impl std::fmt::Debug for PorkbunCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PorkbunCredentials")
            .field("api_key", &mask_secret(&self.api_key))
            .field("secret_key", &mask_secret(&self.secret_key))
            .finish()
    }
}

/// Porkbun registrar client
pub struct PorkbunClient {
    pub(crate) client: Client,
    pub(crate) credentials: PorkbunCredentials,
    pub(crate) base_url: String,
}

impl PorkbunClient {
    pub fn new(credentials: PorkbunCredentials) -> Result<Self> {
        Self::with_base_url(credentials, PORKBUN_API_BASE)
    }

    /// 指定 API 根地址（代理或测试桩）
    pub fn with_base_url(credentials: PorkbunCredentials, base_url: &str) -> Result<Self> {
        log::debug!(
            "Creating Porkbun client for {base_url} with key {}",
            mask_secret(&credentials.api_key)
        );
        Ok(Self {
            client: create_http_client("porkbun")?,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}
