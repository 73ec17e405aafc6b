//! 演示数据
//!
//! `PORKBUN_TUI_DEMO=1` 时使用，不访问网络。
//! 日期相对于启动时间生成，保证日历和到期颜色始终有内容可看。

use chrono::{DateTime, Duration, Months, Utc};
use porkbun_provider::{Domain, PricingTable, TldPricing};

/// 相对 `now` 偏移若干月 + 若干天
fn shift(now: DateTime<Utc>, months: i32, days: i64) -> DateTime<Utc> {
    let by_month = if months >= 0 {
        now.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        now.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    by_month.unwrap_or(now) + Duration::days(days)
}

fn demo_domain(
    now: DateTime<Utc>,
    name: &str,
    age_months: i32,
    expires_in: (i32, i64),
    auto_renew: bool,
    security_lock: bool,
    whois_privacy: bool,
) -> Domain {
    Domain {
        name: name.to_string(),
        tld: name.rsplit('.').next().unwrap_or_default().to_string(),
        status: "ACTIVE".to_string(),
        create_date: shift(now, -age_months, 0),
        expire_date: shift(now, expires_in.0, expires_in.1),
        security_lock,
        whois_privacy,
        auto_renew,
        not_local: false,
        labels: Vec::new(),
    }
}

/// 12 个域名，每个 TLD 一个
pub fn demo_domains(now: DateTime<Utc>) -> Vec<Domain> {
    vec![
        demo_domain(now, "acmecorp.com", 60, (3, 0), true, true, true),
        demo_domain(now, "startupkit.io", 24, (6, 0), true, true, true),
        demo_domain(now, "devtools.dev", 36, (1, 5), false, false, true),
        demo_domain(now, "cloudnative.app", 15, (9, 0), true, true, true),
        demo_domain(now, "myblog.org", 72, (11, 0), true, true, false),
        demo_domain(now, "shopfront.store", 10, (14, 0), true, true, true),
        demo_domain(now, "portfolio.design", 20, (4, 7), false, false, true),
        demo_domain(now, "techbytes.net", 48, (8, 15), true, true, true),
        demo_domain(now, "gameserver.gg", 11, (12, 15), true, true, true),
        demo_domain(now, "cryptotrader.xyz", 36, (0, 15), false, false, true),
        demo_domain(now, "mailservice.email", 17, (7, 0), true, true, true),
        demo_domain(now, "aistartup.ai", 9, (2, 15), true, true, true),
    ]
}

/// 与演示域名对应的价格表
pub fn demo_pricing() -> PricingTable {
    [
        ("com", "9.73", "10.37"),
        ("io", "32.98", "32.98"),
        ("dev", "14.00", "14.00"),
        ("app", "14.00", "14.00"),
        ("org", "10.87", "10.87"),
        ("store", "5.00", "25.00"),
        ("design", "25.00", "25.00"),
        ("net", "11.52", "11.52"),
        ("gg", "75.00", "75.00"),
        ("xyz", "2.00", "12.00"),
        ("email", "20.00", "20.00"),
        ("ai", "50.00", "50.00"),
    ]
    .into_iter()
    .map(|(tld, registration, renewal)| {
        (
            tld.to_string(),
            TldPricing {
                registration: registration.to_string(),
                renewal: renewal.to_string(),
                transfer: renewal.to_string(),
            },
        )
    })
    .collect()
}
