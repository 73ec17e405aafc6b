//! 费用统计：按 TLD 分组

use porkbun_provider::{Domain, PricingTable};

use super::grouped::{Group, GroupPolicy, GroupedList};

/// 每个 TLD 的续费单价与年度总价；未知单价按 0 计
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TldCost {
    pub renewal: f64,
    pub total: f64,
}

/// TLD 分组策略：总价降序，总价相同按 TLD 字母升序，默认全部折叠
#[derive(Debug, Default)]
pub struct CostPolicy {
    pub pricing: PricingTable,
}

impl GroupPolicy for CostPolicy {
    type Key = String;
    type Meta = TldCost;

    fn key_of(&self, domain: &Domain) -> String {
        if domain.tld.is_empty() {
            domain
                .name
                .rsplit_once('.')
                .map(|(_, tld)| tld.to_string())
                .unwrap_or_default()
        } else {
            domain.tld.clone()
        }
    }

    fn summarize(&self, key: &String, members: &[Domain]) -> TldCost {
        let renewal = self
            .pricing
            .get(key)
            .and_then(|p| p.renewal_amount())
            .unwrap_or(0.0);
        TldCost {
            renewal,
            total: renewal * members.len() as f64,
        }
    }

    fn order_groups(&self, groups: &mut [Group<String, TldCost>]) {
        groups.sort_by(|a, b| {
            b.meta
                .total
                .total_cmp(&a.meta.total)
                .then_with(|| a.key.cmp(&b.key))
        });
    }
}

pub type CostState = GroupedList<CostPolicy>;

impl Default for CostState {
    fn default() -> Self {
        GroupedList::new(CostPolicy::default())
    }
}

impl CostState {
    /// 替换价格表后重新分组
    pub fn set_data(&mut self, domains: &[Domain], pricing: PricingTable) {
        self.policy_mut().pricing = pricing;
        self.regroup(domains);
    }

    /// 年度总费用
    pub fn grand_total(&self) -> f64 {
        self.groups().iter().map(|g| g.meta.total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use porkbun_provider::TldPricing;

    fn domain(name: &str) -> Domain {
        let at = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        Domain {
            name: name.to_string(),
            tld: name.rsplit('.').next().unwrap_or_default().to_string(),
            status: "ACTIVE".into(),
            create_date: at,
            expire_date: at,
            security_lock: false,
            whois_privacy: false,
            auto_renew: false,
            not_local: false,
            labels: Vec::new(),
        }
    }

    fn pricing(entries: &[(&str, &str)]) -> PricingTable {
        entries
            .iter()
            .map(|(tld, renewal)| {
                (
                    tld.to_string(),
                    TldPricing {
                        renewal: renewal.to_string(),
                        ..TldPricing::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn three_com_domains_cost_thirty() {
        let mut cost = CostState::default();
        cost.set_data(
            &[domain("a.com"), domain("b.com"), domain("c.com")],
            pricing(&[("com", "10.00")]),
        );

        assert_eq!(cost.len(), 1);
        let group = &cost.groups()[0];
        assert_eq!(group.key, "com");
        assert!((group.meta.renewal - 10.0).abs() < f64::EPSILON);
        assert!((group.meta.total - 30.0).abs() < f64::EPSILON);
        assert!(!group.expanded);
    }

    #[test]
    fn ordered_by_total_descending_missing_price_is_zero() {
        let mut cost = CostState::default();
        cost.set_data(
            &[
                domain("a.com"),
                domain("b.com"),
                domain("c.io"),
                domain("d.dev"),
                domain("e.zzz"),
            ],
            pricing(&[("com", "10.00"), ("io", "30.00"), ("dev", "15.00")]),
        );

        let keys: Vec<&str> = cost.groups().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["io", "com", "dev", "zzz"]);
        assert_eq!(cost.groups()[3].meta.total, 0.0);
        assert_eq!(cost.member_count(), 5);
        assert!((cost.grand_total() - 65.0).abs() < 1e-9);
        assert!(cost.groups().iter().all(|g| !g.expanded));
    }

    #[test]
    fn equal_totals_break_ties_by_tld() {
        let mut cost = CostState::default();
        cost.set_data(
            &[domain("x.org"), domain("y.net"), domain("z.app")],
            pricing(&[("org", "12.00"), ("net", "12.00"), ("app", "12.00")]),
        );
        let keys: Vec<&str> = cost.groups().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["app", "net", "org"]);
    }

    #[test]
    fn unparsable_price_counts_as_zero() {
        let mut cost = CostState::default();
        cost.set_data(&[domain("a.com")], pricing(&[("com", "n/a")]));
        assert_eq!(cost.groups()[0].meta.renewal, 0.0);
    }

    #[test]
    fn empty_tld_falls_back_to_name_suffix() {
        let mut d = domain("a.example.co");
        d.tld.clear();
        assert_eq!(CostPolicy::default().key_of(&d), "co");
    }
}
