//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};

/// 获取颜色方案
pub fn colors() -> ThemeColors {
    ThemeColors::default()
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub header_bg: Color,
    pub statusbar_bg: Color,
    pub statusbar_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub caution: Color,
    pub error: Color,
    pub muted: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            fg: Color::Rgb(250, 250, 250),
            border: Color::Rgb(56, 56, 56),
            highlight: Color::Rgb(125, 86, 244),
            selected_bg: Color::Rgb(125, 86, 244),
            selected_fg: Color::Rgb(250, 250, 250),
            header_bg: Color::Rgb(90, 90, 90),
            statusbar_bg: Color::Rgb(56, 56, 56),
            statusbar_fg: Color::Rgb(193, 198, 178),
            success: Color::Rgb(115, 245, 159),
            warning: Color::Rgb(245, 213, 115),
            caution: Color::Rgb(245, 165, 115),
            error: Color::Rgb(245, 115, 115),
            muted: Color::Rgb(136, 136, 136),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框样式
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// 标题栏样式
    pub fn title_bar() -> Style {
        let c = colors();
        Style::default()
            .bg(c.highlight)
            .fg(c.fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 内容区标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 表头样式
    pub fn table_header() -> Style {
        let c = colors();
        Style::default()
            .bg(c.header_bg)
            .fg(c.fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.statusbar_bg).fg(c.statusbar_fg)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 标签（灰色）
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 普通值
    pub fn value() -> Style {
        Style::default().fg(colors().fg)
    }

    /// 正在输入的文本框
    pub fn input() -> Style {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(colors().error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    /// 进行中的操作（加载、保存）
    pub fn pending() -> Style {
        Style::default().fg(colors().highlight)
    }

    /// 开关类字段：开为绿色，关为红色
    pub fn toggle(on: bool) -> Style {
        let c = colors();
        Style::default().fg(if on { c.success } else { c.error })
    }
}

/// 按剩余天数着色
///
/// 已过期为红色加粗，不足 7 天红色，不足 30 天橙色，不足 90 天黄色，其余绿色。
pub fn expiration_style(days: i64) -> Style {
    let c = colors();
    let style = Style::default();
    match days {
        d if d < 0 => style.fg(c.error).add_modifier(Modifier::BOLD),
        d if d < 7 => style.fg(c.error),
        d if d < 30 => style.fg(c.caution),
        d if d < 90 => style.fg(c.warning),
        _ => style.fg(c.success),
    }
}

/// 剩余天数的文字：负数显示 EXPIRED
pub fn days_label(days: i64) -> String {
    if days < 0 {
        "EXPIRED".to_string()
    } else {
        days.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiration_thresholds() {
        let c = colors();
        assert_eq!(expiration_style(-1).fg, Some(c.error));
        assert!(expiration_style(-1).add_modifier.contains(Modifier::BOLD));
        assert_eq!(expiration_style(0).fg, Some(c.error));
        assert!(!expiration_style(6).add_modifier.contains(Modifier::BOLD));
        assert_eq!(expiration_style(7).fg, Some(c.caution));
        assert_eq!(expiration_style(29).fg, Some(c.caution));
        assert_eq!(expiration_style(30).fg, Some(c.warning));
        assert_eq!(expiration_style(89).fg, Some(c.warning));
        assert_eq!(expiration_style(90).fg, Some(c.success));
    }

    #[test]
    fn negative_days_read_expired() {
        assert_eq!(days_label(-3), "EXPIRED");
        assert_eq!(days_label(0), "0");
        assert_eq!(days_label(45), "45");
    }
}
