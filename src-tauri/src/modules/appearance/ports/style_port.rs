// Style Port
//
// 页面样式注入端口定义

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::appearance::domain::StyleHandle;

/// 外观错误类型
#[derive(Error, Debug)]
pub enum AppearanceError {
    #[error("Window not available")]
    WindowUnavailable,

    #[error("Style injection failed: {0}")]
    InjectFailed(String),

    #[error("Style removal failed: {0}")]
    RemoveFailed(String),
}

/// 样式注入端口
#[async_trait]
pub trait StylePort: Send + Sync {
    /// 当前是否有可注入样式的窗口
    fn is_available(&self) -> bool;

    /// 注入样式，返回用于移除的句柄
    async fn insert_css(&self, css: &str) -> Result<StyleHandle, AppearanceError>;

    /// 移除之前注入的样式
    async fn remove_css(&self, handle: &StyleHandle) -> Result<(), AppearanceError>;
}
