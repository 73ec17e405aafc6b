//! 域名列表状态（可排序、可过滤的扁平列表）

use porkbun_provider::Domain;

use super::Viewport;

/// 搜索框最大字符数
pub const SEARCH_CHAR_LIMIT: usize = 50;

/// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Expiration,
}

/// 域名列表状态
///
/// `visible` 保存过滤 + 排序后的下标，指向 `items`。
#[derive(Debug)]
pub struct DomainListState {
    items: Vec<Domain>,
    visible: Vec<usize>,
    query: String,
    searching: bool,
    sort_field: SortField,
    ascending: bool,
    pub viewport: Viewport,
}

impl Default for DomainListState {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainListState {
    /// 默认按到期时间升序
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            visible: Vec::new(),
            query: String::new(),
            searching: false,
            sort_field: SortField::Expiration,
            ascending: true,
            viewport: Viewport::new(1),
        }
    }

    /// 替换全部域名，保留当前过滤与排序，光标归零
    pub fn set_items(&mut self, items: Vec<Domain>) {
        self.items = items;
        self.recompute();
        self.viewport.reset();
    }

    /// 全部域名（未过滤）
    pub fn items(&self) -> &[Domain] {
        &self.items
    }

    /// 过滤 + 排序后的域名
    pub fn visible(&self) -> impl Iterator<Item = &Domain> + '_ {
        self.visible.iter().map(|&i| &self.items[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn selected(&self) -> Option<&Domain> {
        self.visible
            .get(self.viewport.cursor)
            .map(|&i| &self.items[i])
    }

    // ========== 过滤 ==========

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn start_search(&mut self) {
        self.searching = true;
    }

    /// 退出搜索子模式，保留过滤条件
    pub fn stop_search(&mut self) {
        self.searching = false;
    }

    /// 设置过滤条件：名称不区分大小写的子串匹配，空串表示不过滤
    pub fn apply_filter(&mut self, query: &str) {
        self.query = query.to_string();
        self.recompute();
        self.viewport.clamp(self.visible.len());
    }

    pub fn push_char(&mut self, c: char) {
        if self.query.chars().count() >= SEARCH_CHAR_LIMIT {
            return;
        }
        let mut query = self.query.clone();
        query.push(c);
        self.apply_filter(&query);
    }

    pub fn pop_char(&mut self) {
        let mut query = self.query.clone();
        if query.pop().is_some() {
            self.apply_filter(&query);
        }
    }

    /// 清空过滤条件，返回之前是否有过滤
    pub fn clear_filter(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.apply_filter("");
        true
    }

    // ========== 排序 ==========

    pub fn sort(&self) -> (SortField, bool) {
        (self.sort_field, self.ascending)
    }

    pub fn set_sort(&mut self, field: SortField, ascending: bool) {
        self.sort_field = field;
        self.ascending = ascending;
        self.sort_visible();
    }

    /// 重复选择当前字段时翻转方向；切换字段时重置为升序
    pub fn toggle_sort(&mut self, field: SortField) {
        let ascending = if self.sort_field == field {
            !self.ascending
        } else {
            true
        };
        self.set_sort(field, ascending);
    }

    // ========== 光标 ==========

    pub fn move_up(&mut self) {
        self.viewport.move_up(self.visible.len());
    }

    pub fn move_down(&mut self) {
        self.viewport.move_down(self.visible.len());
    }

    pub fn set_height(&mut self, height: usize) {
        self.viewport.set_height(height.max(1), self.visible.len());
    }

    fn recompute(&mut self) {
        let query = self.query.to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, d)| query.is_empty() || d.name.to_lowercase().contains(&query))
            .map(|(i, _)| i)
            .collect();
        self.sort_visible();
    }

    /// 稳定排序：相等元素保持过滤后的相对顺序
    fn sort_visible(&mut self) {
        let items = &self.items;
        let field = self.sort_field;
        let ascending = self.ascending;
        self.visible.sort_by(|&a, &b| {
            let (a, b) = (&items[a], &items[b]);
            let ord = match field {
                SortField::Name => a.name.cmp(&b.name),
                SortField::Expiration => a.expire_date.cmp(&b.expire_date),
            };
            if ascending { ord } else { ord.reverse() }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn domain(name: &str, expire_day: u32) -> Domain {
        Domain {
            name: name.to_string(),
            tld: name.rsplit('.').next().unwrap_or_default().to_string(),
            status: "ACTIVE".into(),
            create_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            expire_date: Utc.with_ymd_and_hms(2027, 1, expire_day, 0, 0, 0).unwrap(),
            security_lock: false,
            whois_privacy: false,
            auto_renew: false,
            not_local: false,
            labels: Vec::new(),
        }
    }

    fn names(state: &DomainListState) -> Vec<&str> {
        state.visible().map(|d| d.name.as_str()).collect()
    }

    fn sample() -> DomainListState {
        let mut state = DomainListState::new();
        state.set_items(vec![
            domain("Beta.com", 3),
            domain("alpha.io", 1),
            domain("gamma.dev", 2),
            domain("betamax.net", 2),
        ]);
        state
    }

    #[test]
    fn default_sort_is_expiration_ascending() {
        let state = sample();
        assert_eq!(state.sort(), (SortField::Expiration, true));
        // gamma 与 betamax 同一天到期，保持原有相对顺序
        assert_eq!(
            names(&state),
            vec!["alpha.io", "gamma.dev", "betamax.net", "Beta.com"]
        );
    }

    #[test]
    fn filter_is_case_insensitive_subset() {
        let mut state = sample();
        state.apply_filter("BETA");
        assert_eq!(names(&state), vec!["betamax.net", "Beta.com"]);

        state.apply_filter("");
        assert_eq!(state.visible_len(), 4);

        state.apply_filter("zzz");
        assert_eq!(state.visible_len(), 0);
        assert!(state.selected().is_none());
    }

    #[test]
    fn filter_clamps_cursor() {
        let mut state = sample();
        state.set_height(10);
        for _ in 0..3 {
            state.move_down();
        }
        assert_eq!(state.viewport.cursor, 3);

        state.apply_filter("beta");
        assert_eq!(state.viewport.cursor, 1);
        assert_eq!(state.selected().unwrap().name, "Beta.com");
    }

    #[test]
    fn toggle_sort_flips_then_resets() {
        let mut state = sample();

        state.toggle_sort(SortField::Name);
        assert_eq!(state.sort(), (SortField::Name, true));
        assert_eq!(
            names(&state),
            vec!["Beta.com", "alpha.io", "betamax.net", "gamma.dev"]
        );

        state.toggle_sort(SortField::Name);
        assert_eq!(state.sort(), (SortField::Name, false));
        assert_eq!(names(&state)[0], "gamma.dev");

        state.toggle_sort(SortField::Expiration);
        assert_eq!(state.sort(), (SortField::Expiration, true));
    }

    #[test]
    fn descending_sort_is_still_stable() {
        let mut state = sample();
        state.set_sort(SortField::Expiration, false);
        assert_eq!(
            names(&state),
            vec!["Beta.com", "gamma.dev", "betamax.net", "alpha.io"]
        );
    }

    #[test]
    fn set_items_keeps_filter_and_resets_cursor() {
        let mut state = sample();
        state.apply_filter("a");
        state.move_down();

        state.set_items(vec![domain("delta.com", 5), domain("echo.org", 4)]);
        assert_eq!(state.query(), "a");
        assert_eq!(names(&state), vec!["delta.com"]);
        assert_eq!(state.viewport.cursor, 0);
        assert_eq!(state.viewport.offset, 0);
    }

    #[test]
    fn search_editing() {
        let mut state = sample();
        state.start_search();
        state.push_char('g');
        state.push_char('a');
        assert_eq!(names(&state), vec!["gamma.dev"]);

        state.pop_char();
        assert_eq!(state.query(), "g");
        state.stop_search();
        assert!(!state.is_searching());
        assert_eq!(state.query(), "g");

        assert!(state.clear_filter());
        assert!(!state.clear_filter());
    }
}
