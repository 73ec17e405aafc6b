//! 视图返回给 Update 层的命令
//!
//! 视图只修改自己的状态；需要切换页面、派发后台任务
//! 或读写其他视图状态时，返回一个 ScreenCommand。

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    /// 已在视图内处理完毕
    None,

    /// 返回（帮助页回到之前的页面，其余回到域名列表）
    Back,

    OpenDetail,
    OpenDns,
    OpenNameservers,
    OpenAvailability,
    OpenCostBreakdown,
    OpenCalendar,

    /// 重新拉取域名与价格
    Refresh,

    /// 详情页中移动域名列表光标
    SelectPrevious,
    SelectNext,

    /// 保存名称服务器（已去空白、非空）
    SaveNameservers(Vec<String>),

    /// 查询域名可用性
    CheckAvailability(String),
}
