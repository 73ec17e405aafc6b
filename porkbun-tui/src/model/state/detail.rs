//! 域名详情状态
//!
//! 保存当前选中域名的副本；域名列表光标移动后由 Update 层刷新。

use porkbun_provider::Domain;

#[derive(Debug, Default)]
pub struct DetailState {
    domain: Option<Domain>,
}

impl DetailState {
    pub fn show(&mut self, domain: Option<&Domain>) {
        self.domain = domain.cloned();
    }

    pub fn domain(&self) -> Option<&Domain> {
        self.domain.as_ref()
    }
}
