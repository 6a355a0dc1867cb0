// Appearance Styles
//
// 暗色模式样式覆盖：颜色反相 + 色相旋转，图片和视频再反相一次恢复原色

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 暗色模式样式
pub const DARK_MODE_CSS: &str = "html, body { filter: invert(1) hue-rotate(180deg) !important; background: #222 !important; color: #fff !important; }\nimg, video { filter: invert(1) hue-rotate(180deg) !important; }";

/// 已注入样式的句柄
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleHandle(String);

impl StyleHandle {
    pub fn generate() -> Self {
        Self(format!("whatsapp-shell-style-{}", Uuid::new_v4().simple()))
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StyleHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 一次应用请求的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOutcome {
    /// 注入了新样式（可能先移除了旧样式）
    Applied(StyleHandle),
    /// 移除了旧样式，未注入新样式
    Removed,
    /// 没有样式需要移除，也没有请求注入
    Unchanged,
    /// 没有窗口，请求被忽略
    NoWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_handles_are_unique() {
        let a = StyleHandle::generate();
        let b = StyleHandle::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("whatsapp-shell-style-"));
    }

    #[test]
    fn test_dark_mode_css_restores_media() {
        assert!(DARK_MODE_CSS.contains("html, body"));
        assert!(DARK_MODE_CSS.contains("img, video"));
        assert_eq!(DARK_MODE_CSS.matches("invert(1)").count(), 2);
    }
}
