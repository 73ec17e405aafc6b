//! 光标 + 滚动偏移视口
//!
//! 域名列表、DNS 表格共用。不变量：
//!     cursor < len（len > 0 时）
//!     offset ∈ [0, max(0, len - height)]
//!     offset <= cursor < offset + height（height > 0 时）

/// 扁平列表的视口
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub cursor: usize,
    pub offset: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// 光标与偏移归零
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn move_up(&mut self, len: usize) {
        self.cursor = self.cursor.saturating_sub(1);
        self.follow_cursor(len);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
        self.follow_cursor(len);
    }

    pub fn set_height(&mut self, height: usize, len: usize) {
        self.height = height;
        self.follow_cursor(len);
    }

    /// 列表长度变化后，把光标夹回范围内并重新定位偏移
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.follow_cursor(len);
    }

    fn follow_cursor(&mut self, len: usize) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.height > 0 && self.cursor >= self.offset + self.height {
            self.offset = self.cursor + 1 - self.height;
        }
        self.offset = self.offset.min(len.saturating_sub(self.height));
    }

    /// 当前可见的 `[start, end)` 范围
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = (self.offset + self.height).min(len);
        start..end
    }
}
