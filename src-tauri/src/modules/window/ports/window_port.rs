// Window Port
//
// 窗口管理端口定义

use thiserror::Error;
use url::Url;

use crate::modules::window::domain::{ContextMenuModel, SpellcheckLanguage, WindowConfig};

/// 窗口错误类型
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Window not found: {0}")]
    NotFound(String),

    #[error("Window operation failed: {0}")]
    OperationFailed(String),

    #[error("Invalid window configuration: {0}")]
    InvalidConfig(String),

    #[error("Platform not supported: {0}")]
    PlatformNotSupported(String),

    #[error("Window already exists: {0}")]
    AlreadyExists(String),
}

/// 主窗口端口
///
/// 所有操作都作用于唯一的主窗口，窗口不存在时返回 `NotFound`
pub trait WindowPort: Send + Sync {
    /// 创建主窗口并加载页面
    fn create(&self, config: &WindowConfig) -> Result<(), WindowError>;

    /// 窗口对象是否存在
    fn exists(&self) -> bool;

    /// 取消最小化、显示并聚焦
    fn show(&self) -> Result<(), WindowError>;

    /// 隐藏窗口（不销毁）
    fn hide(&self) -> Result<(), WindowError>;

    /// 重新加载页面
    fn reload(&self) -> Result<(), WindowError>;

    fn is_focused(&self) -> Result<bool, WindowError>;

    fn is_minimized(&self) -> Result<bool, WindowError>;

    fn set_always_on_top(&self, always_on_top: bool) -> Result<(), WindowError>;

    /// 设置任务栏/Dock 徽标，None 表示移除
    fn set_badge_count(&self, count: Option<i64>) -> Result<(), WindowError>;

    fn set_zoom(&self, factor: f64) -> Result<(), WindowError>;

    fn toggle_devtools(&self) -> Result<(), WindowError>;

    /// 切换拼写检查语言：页面 lang 属性与引擎词典
    fn set_spellcheck_language(&self, language: SpellcheckLanguage) -> Result<(), WindowError>;

    /// 在页面中执行脚本
    fn eval(&self, script: &str) -> Result<(), WindowError>;

    /// 在指定位置弹出右键菜单
    fn popup_context_menu(&self, menu: &ContextMenuModel) -> Result<(), WindowError>;
}

/// 外部地址打开端口（系统默认浏览器）
pub trait ExternalOpener: Send + Sync {
    fn open(&self, url: &Url) -> Result<(), WindowError>;
}
