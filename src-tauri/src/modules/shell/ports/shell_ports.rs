// Shell Ports
//
// 进程、应用菜单与全局快捷键端口定义

use thiserror::Error;

/// 应用菜单错误类型
#[derive(Error, Debug)]
pub enum AppMenuError {
    #[error("Menu operation failed: {0}")]
    OperationFailed(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),
}

/// 全局快捷键错误类型
#[derive(Error, Debug)]
pub enum ShortcutError {
    #[error("Invalid shortcut: {0}")]
    InvalidShortcut(String),

    #[error("Shortcut registration failed: {0}")]
    RegistrationFailed(String),
}

/// 应用菜单端口
pub trait AppMenuPort: Send + Sync {
    /// 设置 View > Always On Top 勾选状态
    fn set_always_on_top_checked(&self, checked: bool) -> Result<(), AppMenuError>;
}

/// 进程端口
pub trait ProcessPort: Send + Sync {
    /// 结束进程
    fn exit(&self, code: i32);
}
