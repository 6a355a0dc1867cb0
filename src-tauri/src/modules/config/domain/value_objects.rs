// Config Value Objects
//
// 配置相关的值对象定义

use serde::{Deserialize, Serialize};

/// 系统主题跟随策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePolicy {
    /// 每次系统主题变化都重新应用系统偏好（手动选择保持到下一次系统变化）
    #[default]
    FollowSystem,
    /// 忽略系统主题变化，只响应菜单操作
    Manual,
}

impl ThemePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePolicy::FollowSystem => "follow-system",
            ThemePolicy::Manual => "manual",
        }
    }

    pub fn follows_system(&self) -> bool {
        matches!(self, ThemePolicy::FollowSystem)
    }
}

impl From<&str> for ThemePolicy {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "manual" => ThemePolicy::Manual,
            _ => ThemePolicy::FollowSystem,
        }
    }
}

/// 快捷键定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Shortcut(String);

impl Shortcut {
    pub fn new(keys: impl Into<String>) -> Self {
        Self(keys.into())
    }

    pub fn keys(&self) -> &str {
        &self.0
    }

    /// 验证快捷键格式是否有效
    pub fn is_valid(&self) -> bool {
        // 简单验证：非空且包含 + 或是单个按键
        !self.0.is_empty() && (self.0.contains('+') || self.0.len() <= 5)
    }
}

/// 尺寸配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 800,
        }
    }
}
