//! 应用主消息枚举

use crossterm::event::KeyEvent;

use super::TaskMessage;

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 打开 / 关闭帮助
    ToggleHelp,

    /// 交给当前视图处理的按键
    Key(KeyEvent),

    /// 终端尺寸变化
    Resize { width: u16, height: u16 },

    /// 后台任务完成
    Task(TaskMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

impl From<TaskMessage> for AppMessage {
    fn from(msg: TaskMessage) -> Self {
        Self::Task(msg)
    }
}
