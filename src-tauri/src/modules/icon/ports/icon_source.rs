// Icon Source Port
//
// 图标来源端口：只读文件系统探测与解码

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::modules::icon::domain::{IconImage, ProbeOutcome};

/// 图标错误类型
#[derive(Error, Debug)]
pub enum IconError {
    #[error("Icon not found: {0}")]
    NotFound(String),

    #[error("Unsupported icon format: {0}")]
    UnsupportedFormat(String),

    #[error("Icon decode failed: {0}")]
    DecodeFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 图标来源端口
pub trait IconSource: Send + Sync {
    /// 路径是否为已存在的目录
    fn is_dir(&self, path: &Path) -> bool;

    /// 列出目录的一级子目录，出错时返回空列表
    fn subdirectories(&self, path: &Path) -> Vec<PathBuf>;

    /// 探测候选文件是否可用
    fn probe(&self, path: &Path) -> ProbeOutcome;

    /// 加载为 RGBA 图像
    fn load(&self, path: &Path) -> Result<IconImage, IconError>;
}
