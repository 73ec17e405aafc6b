//! UI 组件

pub mod statusbar;
pub mod text;
