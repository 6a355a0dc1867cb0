// Tray Port
//
// 托盘管理端口定义

use thiserror::Error;

/// 托盘错误类型
#[derive(Error, Debug)]
pub enum TrayError {
    #[error("Tray operation failed: {0}")]
    OperationFailed(String),

    #[error("Invalid icon: {0}")]
    InvalidIcon(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),
}

/// 托盘端口 - 启动后会话只需要同步置顶勾选状态
pub trait TrayPort: Send + Sync {
    /// 设置 Always On Top 勾选状态
    fn set_always_on_top_checked(&self, checked: bool) -> Result<(), TrayError>;
}
