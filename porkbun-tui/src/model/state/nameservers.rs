//! 名称服务器编辑器状态
//!
//! 三种模式：
//!     View    只读展示，`e` 进入编辑，`p` 进入预设
//!     Edit    4 个输入框，Tab/↓ 下一个，↑/Shift+Tab 上一个，Ctrl+S 保存
//!     Preset  选择预设，Enter 覆盖全部 4 个输入框并进入编辑

use super::ViewError;

/// 输入框个数
pub const NS_FIELDS: usize = 4;
/// 单个输入框最大字符数
pub const NS_CHAR_LIMIT: usize = 100;

/// 名称服务器预设
#[derive(Debug, Clone, Copy)]
pub struct NsPreset {
    pub name: &'static str,
    pub nameservers: &'static [&'static str],
}

pub const NS_PRESETS: [NsPreset; 3] = [
    NsPreset {
        name: "Porkbun Default",
        nameservers: &[
            "maceio.ns.porkbun.com",
            "curitiba.ns.porkbun.com",
            "salvador.ns.porkbun.com",
            "fortaleza.ns.porkbun.com",
        ],
    },
    NsPreset {
        name: "Cloudflare",
        nameservers: &["ns1.cloudflare.com", "ns2.cloudflare.com"],
    },
    NsPreset {
        name: "Google Cloud DNS",
        nameservers: &[
            "ns-cloud-a1.googledomains.com",
            "ns-cloud-a2.googledomains.com",
            "ns-cloud-a3.googledomains.com",
            "ns-cloud-a4.googledomains.com",
        ],
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NsMode {
    #[default]
    View,
    Edit,
    Preset,
}

#[derive(Debug, Default)]
pub struct NameserverState {
    domain: String,
    nameservers: Vec<String>,
    inputs: [String; NS_FIELDS],
    focus: usize,
    mode: NsMode,
    preset_cursor: usize,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<ViewError>,
    pub success: Option<String>,
}

impl NameserverState {
    /// 切换到新域名，进入加载状态
    pub fn set_domain(&mut self, domain: &str) {
        self.domain = domain.to_string();
        self.nameservers.clear();
        self.inputs = Default::default();
        self.focus = 0;
        self.mode = NsMode::View;
        self.loading = true;
        self.saving = false;
        self.error = None;
        self.success = None;
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn nameservers(&self) -> &[String] {
        &self.nameservers
    }

    /// 载入名称服务器并重置输入框
    pub fn set_nameservers(&mut self, nameservers: Vec<String>) {
        self.inputs = Default::default();
        for (input, ns) in self.inputs.iter_mut().zip(&nameservers) {
            input.clone_from(ns);
        }
        self.nameservers = nameservers;
        self.focus = 0;
        self.loading = false;
    }

    pub fn set_error(&mut self, error: ViewError) {
        self.error = Some(error);
        self.loading = false;
        self.saving = false;
    }

    pub fn set_success(&mut self, message: &str) {
        self.success = Some(message.to_string());
        self.saving = false;
        self.mode = NsMode::View;
    }

    pub fn start_saving(&mut self) {
        self.saving = true;
        self.error = None;
        self.success = None;
    }

    pub fn mode(&self) -> NsMode {
        self.mode
    }

    pub fn inputs(&self) -> &[String; NS_FIELDS] {
        &self.inputs
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn preset_cursor(&self) -> usize {
        self.preset_cursor
    }

    /// 去掉空白后的非空输入
    pub fn values(&self) -> Vec<String> {
        self.inputs
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    // ========== 模式切换 ==========

    pub fn enter_edit(&mut self) {
        self.mode = NsMode::Edit;
        self.focus = 0;
    }

    pub fn enter_presets(&mut self) {
        self.mode = NsMode::Preset;
        self.preset_cursor = 0;
    }

    pub fn back_to_view(&mut self) {
        self.mode = NsMode::View;
    }

    // ========== 编辑模式 ==========

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % NS_FIELDS;
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + NS_FIELDS - 1) % NS_FIELDS;
    }

    pub fn push_char(&mut self, c: char) {
        let input = &mut self.inputs[self.focus];
        if input.chars().count() < NS_CHAR_LIMIT {
            input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.inputs[self.focus].pop();
    }

    // ========== 预设模式 ==========

    pub fn preset_up(&mut self) {
        self.preset_cursor = self.preset_cursor.saturating_sub(1);
    }

    pub fn preset_down(&mut self) {
        if self.preset_cursor + 1 < NS_PRESETS.len() {
            self.preset_cursor += 1;
        }
    }

    /// 用选中的预设覆盖全部输入框，缺少的位置清空
    pub fn apply_preset(&mut self) {
        let preset = NS_PRESETS[self.preset_cursor.min(NS_PRESETS.len() - 1)];
        for (i, input) in self.inputs.iter_mut().enumerate() {
            *input = preset
                .nameservers
                .get(i)
                .map(|ns| (*ns).to_string())
                .unwrap_or_default();
        }
        self.enter_edit();
    }
}
