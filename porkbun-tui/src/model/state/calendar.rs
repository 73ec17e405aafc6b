//! 到期日历：按到期年月分组

use chrono::Datelike;
use porkbun_provider::Domain;

use super::grouped::{GroupPolicy, GroupedList};

/// (年, 月) 分组键，按时间先后自然排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// 月份英文名
    pub fn month_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?")
    }
}

/// 日历分组策略：组内按到期时间升序，最早的一组默认展开
#[derive(Debug, Default)]
pub struct CalendarPolicy;

impl GroupPolicy for CalendarPolicy {
    type Key = MonthKey;
    type Meta = ();

    fn key_of(&self, domain: &Domain) -> MonthKey {
        MonthKey {
            year: domain.expire_date.year(),
            month: domain.expire_date.month(),
        }
    }

    fn summarize(&self, _key: &MonthKey, _members: &[Domain]) {}

    fn sort_members(&self, members: &mut [Domain]) {
        members.sort_by_key(|d| d.expire_date);
    }

    fn initially_expanded(&self, index: usize) -> bool {
        index == 0
    }
}

pub type CalendarState = GroupedList<CalendarPolicy>;

impl Default for CalendarState {
    fn default() -> Self {
        GroupedList::new(CalendarPolicy)
    }
}
