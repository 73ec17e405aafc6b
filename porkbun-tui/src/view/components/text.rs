//! 定宽列的文字处理

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 超出 `max` 显示宽度时截断并补 `...`
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// 截断后按显示宽度右侧补空格
pub fn pad(s: &str, width: usize) -> String {
    let s = truncate(s, width);
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("example.com", 35), "example.com");
    }

    #[test]
    fn long_text_gets_ellipsis_within_width() {
        let out = truncate("averyveryverylongdomainname.com", 10);
        assert_eq!(out, "averyve...");
        assert_eq!(out.width(), 10);
    }

    #[test]
    fn wide_characters_count_double() {
        let out = truncate("例子例子例子.com", 8);
        assert!(out.width() <= 8);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("ab", 5), "ab   ");
        assert_eq!(pad("abcdefgh", 5), "ab...");
    }
}
