//! Porkbun error mapping
//!
//! Porkbun error responses carry only a human-readable message, so mapping is by
//! message content. Unrecognised messages fall through to `Unknown`.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::PorkbunClient;

impl ProviderErrorMapper for PorkbunClient {
    fn provider_name(&self) -> &'static str {
        "porkbun"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let lower = raw.message.to_lowercase();

        // "Invalid API key. (002)"
        if lower.contains("invalid api key") || lower.contains("apikey") {
            return ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            };
        }

        // "Domain is not opted in to API access."
        if lower.contains("not opted in") || lower.contains("api access") {
            return ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            };
        }

        if lower.contains("rate limit") || lower.contains("too many") {
            return ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            };
        }

        // "Invalid domain." / "Domain not found" / "... is not registered"
        if lower.contains("invalid domain")
            || lower.contains("not found")
            || lower.contains("not registered")
        {
            if let Some(domain) = context.domain {
                return ProviderError::DomainNotFound {
                    provider: self.provider_name().to_string(),
                    domain,
                    raw_message: Some(raw.message),
                };
            }
        }

        self.unknown_error(raw)
    }
}
