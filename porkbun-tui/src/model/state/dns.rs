//! DNS 记录表格状态

use porkbun_provider::DnsRecord;

use super::{ViewError, Viewport};

#[derive(Debug, Default)]
pub struct DnsState {
    domain: String,
    records: Vec<DnsRecord>,
    pub loading: bool,
    pub error: Option<ViewError>,
    pub viewport: Viewport,
}

impl DnsState {
    /// 切换到新域名：清空记录，进入加载状态
    pub fn set_domain(&mut self, domain: &str) {
        self.domain = domain.to_string();
        self.records.clear();
        self.loading = true;
        self.error = None;
        self.viewport.reset();
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn records(&self) -> &[DnsRecord] {
        &self.records
    }

    pub fn set_records(&mut self, records: Vec<DnsRecord>) {
        self.records = records;
        self.loading = false;
        self.error = None;
        self.viewport.clamp(self.records.len());
    }

    pub fn set_error(&mut self, error: ViewError) {
        self.error = Some(error);
        self.loading = false;
    }

    pub fn selected(&self) -> Option<&DnsRecord> {
        self.records.get(self.viewport.cursor)
    }

    pub fn move_up(&mut self) {
        self.viewport.move_up(self.records.len());
    }

    pub fn move_down(&mut self) {
        self.viewport.move_down(self.records.len());
    }

    pub fn set_height(&mut self, height: usize) {
        self.viewport.set_height(height.max(1), self.records.len());
    }
}
