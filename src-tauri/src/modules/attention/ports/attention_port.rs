// Attention Port
//
// 提醒信号端口定义

use thiserror::Error;

use crate::modules::attention::domain::AttentionRequest;

/// 提醒错误类型
#[derive(Error, Debug)]
pub enum AttentionError {
    #[error("Window not available")]
    WindowUnavailable,

    #[error("Attention not supported: {0}")]
    Unsupported(String),

    #[error("Attention operation failed: {0}")]
    OperationFailed(String),
}

/// 提醒端口
pub trait AttentionPort: Send + Sync {
    /// 发出提醒
    fn request(&self, request: AttentionRequest) -> Result<(), AttentionError>;

    /// 清除提醒
    fn clear(&self) -> Result<(), AttentionError>;
}
