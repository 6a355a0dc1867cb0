// Attention Value Objects
//
// 提醒信号相关的值对象定义

use serde::{Deserialize, Serialize};

/// 平台族：决定用哪种方式吸引用户注意
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformFamily {
    /// 没有窗口闪烁能力，改为 Dock 图标跳动（macOS）
    DockBounce,
    /// 闪烁窗口边框/任务栏按钮（Windows、Linux）
    FrameFlash,
}

impl PlatformFamily {
    /// 当前编译目标所属的平台族
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            PlatformFamily::DockBounce
        } else {
            PlatformFamily::FrameFlash
        }
    }

    /// 该平台族使用的提醒方式
    pub fn request(&self) -> AttentionRequest {
        match self {
            PlatformFamily::DockBounce => AttentionRequest::DockBounce,
            PlatformFamily::FrameFlash => AttentionRequest::FlashFrame,
        }
    }
}

/// 提醒方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttentionRequest {
    DockBounce,
    FlashFrame,
}

/// 提醒操作结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttentionOutcome {
    /// 已发出提醒（或提醒已在进行中）
    Requested(AttentionRequest),
    /// 已清除提醒（或本来就没有提醒）
    Cleared,
    /// 当前平台或窗口不支持该能力，已跳过
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_family_maps_to_request() {
        assert_eq!(
            PlatformFamily::DockBounce.request(),
            AttentionRequest::DockBounce
        );
        assert_eq!(
            PlatformFamily::FrameFlash.request(),
            AttentionRequest::FlashFrame
        );
    }

    #[test]
    fn test_current_platform_family() {
        let expected = if cfg!(target_os = "macos") {
            PlatformFamily::DockBounce
        } else {
            PlatformFamily::FrameFlash
        };
        assert_eq!(PlatformFamily::current(), expected);
    }
}
