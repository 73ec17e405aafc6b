//! 域名可用性查询状态

use std::collections::VecDeque;

use porkbun_provider::AvailabilityResult;

use super::ViewError;

/// 最多保留的查询记录
pub const HISTORY_LIMIT: usize = 10;
const INPUT_CHAR_LIMIT: usize = 100;

#[derive(Debug, Default)]
pub struct AvailabilityState {
    input: String,
    history: VecDeque<AvailabilityResult>,
    pub checking: bool,
    pub error: Option<ViewError>,
}

impl AvailabilityState {
    pub fn input(&self) -> &str {
        &self.input
    }

    /// 最近的在前
    pub fn history(&self) -> impl Iterator<Item = &AvailabilityResult> {
        self.history.iter()
    }

    pub fn push_char(&mut self, c: char) {
        if self.input.chars().count() < INPUT_CHAR_LIMIT {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// 提交输入：去掉空白后非空且当前没有查询在进行时，
    /// 清空输入框并返回要查询的域名
    pub fn submit(&mut self) -> Option<String> {
        if self.checking {
            return None;
        }
        let domain = self.input.trim().to_string();
        if domain.is_empty() {
            return None;
        }
        self.input.clear();
        self.checking = true;
        self.error = None;
        Some(domain)
    }

    pub fn record_result(&mut self, result: AvailabilityResult) {
        self.checking = false;
        self.error = None;
        self.history.push_front(result);
        self.history.truncate(HISTORY_LIMIT);
    }

    pub fn set_error(&mut self, error: ViewError) {
        self.checking = false;
        self.error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(domain: &str) -> AvailabilityResult {
        AvailabilityResult {
            domain: domain.to_string(),
            available: true,
            price: "9.73".into(),
            premium: false,
        }
    }

    fn type_in(state: &mut AvailabilityState, text: &str) {
        for c in text.chars() {
            state.push_char(c);
        }
    }

    #[test]
    fn submit_trims_and_clears_input() {
        let mut state = AvailabilityState::default();
        type_in(&mut state, "  new-idea.com ");

        assert_eq!(state.submit().as_deref(), Some("new-idea.com"));
        assert_eq!(state.input(), "");
        assert!(state.checking);
    }

    #[test]
    fn blank_or_busy_submit_is_ignored() {
        let mut state = AvailabilityState::default();
        type_in(&mut state, "   ");
        assert_eq!(state.submit(), None);

        type_in(&mut state, "a.com");
        state.checking = true;
        assert_eq!(state.submit(), None);
    }

    #[test]
    fn history_is_most_recent_first_and_capped() {
        let mut state = AvailabilityState::default();
        for i in 0..12 {
            state.record_result(result(&format!("d{i}.com")));
        }

        let domains: Vec<&str> = state.history().map(|r| r.domain.as_str()).collect();
        assert_eq!(domains.len(), HISTORY_LIMIT);
        assert_eq!(domains[0], "d11.com");
        assert_eq!(domains[9], "d2.com");
    }
}
