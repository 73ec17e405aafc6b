//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift：`?` 在多数终端上带 SHIFT 修饰。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers,
            _ => key.modifiers == self.modifiers,
        }
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::char('q');
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::char('?');
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 导航
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_UP_VIM: KeyBinding = KeyBinding::char('k');
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_DOWN_VIM: KeyBinding = KeyBinding::char('j');
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 域名列表
    pub const SEARCH: KeyBinding = KeyBinding::char('/');
    pub const REFRESH: KeyBinding = KeyBinding::char('r');
    pub const SORT_NAME: KeyBinding = KeyBinding::char('1');
    pub const SORT_EXPIRATION: KeyBinding = KeyBinding::char('2');

    // 打开视图
    pub const OPEN_DNS: KeyBinding = KeyBinding::char('d');
    pub const OPEN_NAMESERVERS: KeyBinding = KeyBinding::char('n');
    pub const OPEN_AVAILABILITY: KeyBinding = KeyBinding::char('a');
    pub const OPEN_COST: KeyBinding = KeyBinding::char('t');
    pub const OPEN_CALENDAR: KeyBinding = KeyBinding::char('c');

    // 名称服务器编辑
    pub const NS_EDIT: KeyBinding = KeyBinding::char('e');
    pub const NS_PRESETS: KeyBinding = KeyBinding::char('p');
    pub const NS_SAVE: KeyBinding = KeyBinding::ctrl(KeyCode::Char('s'));
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);

    /// ↑ 或 k
    pub fn is_up(key: &KeyEvent) -> bool {
        Self::NAV_UP.matches(key) || Self::NAV_UP_VIM.matches(key)
    }

    /// ↓ 或 j
    pub fn is_down(key: &KeyEvent) -> bool {
        Self::NAV_DOWN.matches(key) || Self::NAV_DOWN_VIM.matches(key)
    }

    /// 输入模式下只认方向键（j/k 是正常字符）
    pub fn is_arrow_up(key: &KeyEvent) -> bool {
        Self::NAV_UP.matches(key) || KeyBinding::ctrl(KeyCode::Char('k')).matches(key)
    }

    pub fn is_arrow_down(key: &KeyEvent) -> bool {
        Self::NAV_DOWN.matches(key) || KeyBinding::ctrl(KeyCode::Char('j')).matches(key)
    }

    /// Shift+Tab，部分终端不带 SHIFT 修饰
    pub fn is_prev_field(key: &KeyEvent) -> bool {
        key.code == KeyCode::BackTab
    }

    /// 可输入的字符（无修饰或仅 Shift）
    pub fn text_input(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                Some(c)
            }
            _ => None,
        }
    }
}
