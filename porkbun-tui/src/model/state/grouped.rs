//! 分组 + 展开/折叠 + 按行虚拟滚动
//!
//! 到期日历（按月分组）与费用统计（按 TLD 分组）共用同一套算法，
//! 差异通过 `GroupPolicy` 注入：
//!
//!     key_of          域名 → 分组键
//!     summarize       分组元数据（例如 TLD 的续费单价与总价）
//!     sort_members    组内排序
//!     order_groups    组间排序（默认按键升序）
//!     initially_expanded  重新分组后的默认展开状态
//!
//! 行模型：
//!     每组 1 行标题；展开时再加 |members| 行
//!     光标指向的是「组下标」而不是行号
//!
//!     line_for_group(i) = Σ_{j<i} (1 + (expanded(j) ? |g_j| : 0))

use std::collections::BTreeMap;

use porkbun_provider::Domain;

/// 一个分组
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, M> {
    pub key: K,
    pub members: Vec<Domain>,
    pub meta: M,
    pub expanded: bool,
}

impl<K, M> Group<K, M> {
    /// 该组占用的行数
    pub fn line_count(&self) -> usize {
        if self.expanded {
            1 + self.members.len()
        } else {
            1
        }
    }
}

/// 分组策略
pub trait GroupPolicy {
    type Key: Ord + Clone;
    type Meta;

    fn key_of(&self, domain: &Domain) -> Self::Key;

    fn summarize(&self, key: &Self::Key, members: &[Domain]) -> Self::Meta;

    fn sort_members(&self, _members: &mut [Domain]) {}

    fn order_groups(&self, _groups: &mut [Group<Self::Key, Self::Meta>]) {}

    fn initially_expanded(&self, _index: usize) -> bool {
        false
    }
}

/// 渲染用的一行
#[derive(Debug)]
pub enum GroupRow<'a, K, M> {
    Header {
        group: &'a Group<K, M>,
        selected: bool,
    },
    Item {
        domain: &'a Domain,
    },
}

/// 视口内的行与滚动位置
#[derive(Debug)]
pub struct VisibleRows<'a, K, M> {
    pub rows: Vec<GroupRow<'a, K, M>>,
    /// 第一行的行号
    pub start: usize,
    /// 最后一行的下一行
    pub end: usize,
    pub total: usize,
}

/// 分组视口
#[derive(Debug)]
pub struct GroupedList<P: GroupPolicy> {
    policy: P,
    groups: Vec<Group<P::Key, P::Meta>>,
    cursor: usize,
    offset: usize,
    height: usize,
}

impl<P: GroupPolicy> GroupedList<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            groups: Vec::new(),
            cursor: 0,
            offset: 0,
            height: 1,
        }
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    pub fn groups(&self) -> &[Group<P::Key, P::Meta>] {
        &self.groups
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[cfg(test)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// 全量重新分组，光标与偏移归零
    ///
    /// 展开状态不跨重新分组保留：每次都回到策略给出的默认值。
    pub fn regroup(&mut self, domains: &[Domain]) {
        let mut buckets: BTreeMap<P::Key, Vec<Domain>> = BTreeMap::new();
        for domain in domains {
            buckets
                .entry(self.policy.key_of(domain))
                .or_default()
                .push(domain.clone());
        }

        let mut groups: Vec<_> = buckets
            .into_iter()
            .map(|(key, mut members)| {
                self.policy.sort_members(&mut members);
                let meta = self.policy.summarize(&key, &members);
                Group {
                    key,
                    members,
                    meta,
                    expanded: false,
                }
            })
            .collect();

        self.policy.order_groups(&mut groups);
        for (i, group) in groups.iter_mut().enumerate() {
            group.expanded = self.policy.initially_expanded(i);
        }

        self.groups = groups;
        self.cursor = 0;
        self.offset = 0;
    }

    /// 组数
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 所有组成员总数
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }

    /// 可显示的总行数
    pub fn total_lines(&self) -> usize {
        self.groups.iter().map(Group::line_count).sum()
    }

    /// 第 `index` 组标题所在的行号
    pub fn line_for_group(&self, index: usize) -> usize {
        self.groups.iter().take(index).map(Group::line_count).sum()
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_offset();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.groups.len() {
            self.cursor += 1;
            self.adjust_offset();
        }
    }

    /// 展开/折叠光标所在组
    pub fn toggle(&mut self) {
        if let Some(group) = self.groups.get_mut(self.cursor) {
            group.expanded = !group.expanded;
            self.adjust_offset();
        }
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.adjust_offset();
    }

    /// 让光标所在组的标题行可见，并把偏移夹在 `[0, max(0, total - height)]`
    fn adjust_offset(&mut self) {
        let header = self.line_for_group(self.cursor);

        if header < self.offset {
            self.offset = header;
        }
        if header >= self.offset + self.height {
            self.offset = header + 1 - self.height;
        }

        let max_offset = self.total_lines().saturating_sub(self.height);
        self.offset = self.offset.min(max_offset);
    }

    /// 当前视口内的行
    pub fn visible_rows(&self) -> VisibleRows<'_, P::Key, P::Meta> {
        let total = self.total_lines();
        let end = (self.offset + self.height).min(total);

        let rows = self
            .groups
            .iter()
            .enumerate()
            .flat_map(|(index, group)| {
                let header = std::iter::once(GroupRow::Header {
                    group,
                    selected: index == self.cursor,
                });
                let items = group
                    .members
                    .iter()
                    .filter(move |_| group.expanded)
                    .map(|domain| GroupRow::Item { domain });
                header.chain(items)
            })
            .skip(self.offset)
            .take(end.saturating_sub(self.offset))
            .collect();

        VisibleRows {
            rows,
            start: self.offset,
            end,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    /// 按首字母分组，组内按名称排序
    struct ByInitial {
        expand_first: bool,
    }

    impl GroupPolicy for ByInitial {
        type Key = char;
        type Meta = usize;

        fn key_of(&self, domain: &Domain) -> char {
            domain.name.chars().next().unwrap_or(' ')
        }

        fn summarize(&self, _key: &char, members: &[Domain]) -> usize {
            members.len()
        }

        fn sort_members(&self, members: &mut [Domain]) {
            members.sort_by(|a, b| a.name.cmp(&b.name));
        }

        fn initially_expanded(&self, index: usize) -> bool {
            self.expand_first && index == 0
        }
    }

    fn domain(name: &str) -> Domain {
        let at = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        Domain {
            name: name.to_string(),
            tld: "com".into(),
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

    fn list(names: &[&str], expand_first: bool) -> GroupedList<ByInitial> {
        let mut list = GroupedList::new(ByInitial { expand_first });
        let domains: Vec<_> = names.iter().map(|n| domain(n)).collect();
        list.regroup(&domains);
        list
    }

    #[test]
    fn regroup_is_exact_partition() {
        let list = list(&["b2.com", "a1.com", "c1.com", "b1.com", "a2.com"], false);
        assert_eq!(list.len(), 3);
        assert_eq!(list.member_count(), 5);

        let keys: Vec<char> = list.groups().iter().map(|g| g.key).collect();
        assert_eq!(keys, vec!['a', 'b', 'c']);
        assert_eq!(list.groups()[1].members[0].name, "b1.com");
        assert_eq!(list.groups()[1].meta, 2);
    }

    #[test]
    fn line_for_group_follows_recurrence() {
        let mut list = list(&["a1", "a2", "b1", "b2", "b3", "c1"], true);
        // a 展开（2 个成员），b 折叠
        assert_eq!(list.line_for_group(0), 0);
        assert_eq!(list.line_for_group(1), 3);
        assert_eq!(list.line_for_group(2), 4);

        list.move_down();
        list.toggle();
        assert_eq!(list.line_for_group(2), 7);
        assert_eq!(list.total_lines(), 8);

        for k in 0..=list.len() {
            let expected: usize = list
                .groups()
                .iter()
                .take(k)
                .map(|g| 1 + if g.expanded { g.members.len() } else { 0 })
                .sum();
            assert_eq!(list.line_for_group(k), expected);
        }
    }

    #[test]
    fn offset_follows_cursor_header() {
        // 每组 3 个成员，全部展开后每组 4 行
        let names: Vec<String> = ["a", "b", "c", "d"]
            .iter()
            .flat_map(|p| (1..=3).map(move |i| format!("{p}{i}")))
            .collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut list = list(&refs, false);
        list.set_height(3);

        for _ in 0..4 {
            list.toggle();
            list.move_down();
        }
        assert_eq!(list.total_lines(), 16);
        assert_eq!(list.cursor(), 3);
        // 标题行 12 >= offset + 3 → offset = 12 - 3 + 1 = 10
        assert_eq!(list.offset(), 10);

        list.move_up();
        list.move_up();
        assert_eq!(list.offset(), 4);

        // 折叠后总行数变少，偏移被夹住
        list.toggle();
        assert_eq!(list.total_lines(), 13);
        assert!(list.offset() <= list.total_lines() - list.height());
    }

    #[test]
    fn offset_never_exceeds_total_minus_height() {
        let mut list = list(&["a1", "b1"], false);
        list.set_height(10);
        list.move_down();
        list.toggle();
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn regroup_resets_expansion_and_cursor() {
        let mut list = list(&["a1", "b1", "c1"], true);
        list.move_down();
        list.toggle();
        assert!(list.groups()[1].expanded);

        list.regroup(&[domain("a1"), domain("b1"), domain("c1")]);
        assert_eq!(list.cursor(), 0);
        assert!(list.groups()[0].expanded);
        assert!(!list.groups()[1].expanded);
    }

    #[test]
    fn visible_rows_window() {
        let mut list = list(&["a1", "a2", "b1", "c1"], true);
        list.set_height(2);
        list.move_down();
        list.move_down();

        let visible = list.visible_rows();
        assert_eq!((visible.start, visible.end, visible.total), (3, 5, 5));
        let rows = visible.rows;
        assert_eq!(rows.len(), 2);
        assert!(matches!(rows[0], GroupRow::Header { group, selected: false } if group.key == 'b'));
        assert!(matches!(rows[1], GroupRow::Header { group, selected: true } if group.key == 'c'));
    }

    #[test]
    fn empty_list_is_inert() {
        let mut list = list(&[], true);
        list.move_down();
        list.toggle();
        assert_eq!(list.total_lines(), 0);
        assert!(list.visible_rows().rows.is_empty());
    }
}
