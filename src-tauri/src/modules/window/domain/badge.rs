// Unread Badge
//
// 从页面标题中提取未读数
//
// 页面通常以前缀形式 "(3) WhatsApp" 报告未读数

use regex::Regex;
use std::sync::LazyLock;

static UNREAD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\d+)\)").unwrap());

/// 提取标题中最后一个括号内的整数
///
/// 常见标题只有一个前缀计数，取最后一个只影响群名里也带括号数字的情况。
/// 超出 i64 范围的数字视为不存在
pub fn extract_unread_count(title: &str) -> Option<i64> {
    let digits = UNREAD_PATTERN
        .captures_iter(title)
        .last()
        .and_then(|caps| caps.get(1))?;

    match digits.as_str().parse::<i64>() {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::debug!("Ignoring unread count {}: {}", digits.as_str(), e);
            None
        }
    }
}

/// 标题变化对应的徽标更新
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeUpdate {
    /// 有未读消息
    Unread(i64),
    /// 标题中没有计数，或计数为 0
    Cleared,
}

impl BadgeUpdate {
    pub fn from_title(title: &str) -> Self {
        match extract_unread_count(title) {
            Some(count) if count > 0 => BadgeUpdate::Unread(count),
            _ => BadgeUpdate::Cleared,
        }
    }

    /// 徽标显示的数值
    pub fn count(&self) -> i64 {
        match self {
            BadgeUpdate::Unread(count) => *count,
            BadgeUpdate::Cleared => 0,
        }
    }

    /// 传给窗口的徽标值，0 表示移除徽标
    pub fn badge(&self) -> Option<i64> {
        match self {
            BadgeUpdate::Unread(count) => Some(*count),
            BadgeUpdate::Cleared => None,
        }
    }
}
