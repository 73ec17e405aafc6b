//! Porkbun HTTP 请求方法

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::PorkbunClient;
use super::types::{AuthBody, PorkbunStatus};

impl PorkbunClient {
    /// 执行带凭证的 POST 请求并解析响应
    pub(crate) async fn post<P, T>(
        &self,
        endpoint: &str,
        payload: P,
        context: ErrorContext,
    ) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}/{endpoint}", self.base_url);
        let body = AuthBody {
            apikey: &self.credentials.api_key,
            secretapikey: &self.credentials.secret_key,
            payload,
        };
        let bytes = serde_json::to_vec(&body).map_err(|e| ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: e.to_string(),
        })?;

        let request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(bytes);

        let (status_code, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", endpoint).await?;

        self.decode_response(status_code, &response_text, context)
    }

    /// 根据 `status` 字段区分成功与错误响应
    pub(crate) fn decode_response<T: DeserializeOwned>(
        &self,
        status_code: u16,
        response_text: &str,
        context: ErrorContext,
    ) -> Result<T> {
        match serde_json::from_str::<PorkbunStatus>(response_text) {
            Ok(status) if status.is_success() => {
                HttpUtils::parse_json(response_text, self.provider_name())
            }
            Ok(status) => {
                let message = status
                    .message
                    .unwrap_or_else(|| format!("HTTP {status_code}, status {}", status.status));
                let err = self.map_error(
                    RawApiError::with_code(status_code.to_string(), message),
                    context,
                );
                if err.is_expected() {
                    log::warn!("API 错误: {err}");
                } else {
                    log::error!("API 错误: {err}");
                }
                Err(err)
            }
            Err(_) if status_code >= 400 => {
                log::error!("HTTP {status_code}: {}", truncate_for_log(response_text));
                Err(self.map_error(
                    RawApiError::with_code(
                        status_code.to_string(),
                        format!("HTTP {status_code}: {}", truncate_for_log(response_text)),
                    ),
                    context,
                ))
            }
            Err(e) => {
                log::error!("JSON 解析失败: {e}");
                Err(self.parse_error(e))
            }
        }
    }
}
