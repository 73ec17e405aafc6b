//! Registrar data types shared by every client implementation.
//!
//! These are the crate's public domain model. They are also what callers persist:
//! every type derives `Serialize`/`Deserialize` with plain snake_case field names.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered domain on the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Fully qualified name, unique per account.
    pub name: String,
    /// TLD label without the leading dot (`"com"`, `"io"`).
    pub tld: String,
    /// Registry status as reported by the registrar (e.g. `ACTIVE`).
    pub status: String,
    pub create_date: DateTime<Utc>,
    pub expire_date: DateTime<Utc>,
    pub security_lock: bool,
    pub whois_privacy: bool,
    pub auto_renew: bool,
    /// Registered elsewhere and not managed locally (transfer pending, etc.).
    pub not_local: bool,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Domain {
    /// Whole days until expiration, truncated toward zero. Negative once expired.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        (self.expire_date - now).num_days()
    }
}

/// A DNS record. Read-only; values are kept exactly as the API returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub notes: String,
}

/// Prices for one TLD. Values are opaque decimal text (`"9.73"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TldPricing {
    pub registration: String,
    pub renewal: String,
    pub transfer: String,
}

impl TldPricing {
    /// Renewal price as a number, `None` when the text is not a valid decimal.
    pub fn renewal_amount(&self) -> Option<f64> {
        self.renewal.trim().parse::<f64>().ok()
    }
}

/// Pricing for every TLD the registrar sells, keyed by TLD label.
pub type PricingTable = BTreeMap<String, TldPricing>;

/// Result of a single availability lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub domain: String,
    pub available: bool,
    /// Registration price text; empty when the registrar quoted none.
    pub price: String,
    pub premium: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn domain_expiring(expire_date: DateTime<Utc>) -> Domain {
        Domain {
            name: "example.com".to_string(),
            tld: "com".to_string(),
            status: "ACTIVE".to_string(),
            create_date: expire_date - Duration::days(365),
            expire_date,
            security_lock: true,
            whois_privacy: true,
            auto_renew: false,
            not_local: false,
            labels: Vec::new(),
        }
    }

    #[test]
    fn days_until_expiry_truncates() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let d = domain_expiring(now + Duration::hours(36));
        assert_eq!(d.days_until_expiry(now), 1);
    }

    #[test]
    fn days_until_expiry_negative_when_expired() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        let d = domain_expiring(now - Duration::days(3));
        assert_eq!(d.days_until_expiry(now), -3);
    }

    #[test]
    fn renewal_amount_parses_decimal_text() {
        let p = TldPricing {
            registration: "9.73".into(),
            renewal: "10.37".into(),
            transfer: "10.37".into(),
        };
        assert_eq!(p.renewal_amount(), Some(10.37));
        assert_eq!(TldPricing::default().renewal_amount(), None);
    }

    #[test]
    fn dns_record_uses_type_key() {
        let json = r#"{"id":"1","name":"www.example.com","type":"A","content":"1.2.3.4","ttl":"600"}"#;
        let record: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, "A");
        assert!(record.priority.is_empty());
    }
}
