// Window Domain Events
//
// 窗口领域事件定义

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::context_menu::{ContextMenuCommand, ContextMenuParams};
use super::entities::WindowLifecycle;

/// 页面内容事件
#[derive(Debug, Clone)]
pub enum ContentEvent {
    /// 页面标题变化
    TitleChanged(String),
    /// 页面加载完成
    PageLoaded(Url),
    /// 页面内右键
    ContextMenuRequested(ContextMenuParams),
    /// 引擎原生右键菜单中的选择
    ContextMenuCommand(ContextMenuCommand),
}

/// 生命周期状态变化
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowTransition {
    pub from: WindowLifecycle,
    pub to: WindowLifecycle,
    pub timestamp: DateTime<Utc>,
}

impl WindowTransition {
    pub fn new(from: WindowLifecycle, to: WindowLifecycle) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    pub fn is_change(&self) -> bool {
        self.from != self.to
    }

    /// 上一次变化之后在 `from` 状态停留的时长
    pub fn dwell_since(&self, previous: &WindowTransition) -> Duration {
        (self.timestamp - previous.timestamp).max(Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_serializes_lowercase_states() {
        let transition = WindowTransition::new(WindowLifecycle::Visible, WindowLifecycle::Hidden);
        assert!(transition.is_change());

        let json = serde_json::to_value(&transition).unwrap();
        assert_eq!(json["from"], "visible");
        assert_eq!(json["to"], "hidden");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_dwell_since_previous_transition() {
        let mut shown = WindowTransition::new(WindowLifecycle::Absent, WindowLifecycle::Visible);
        shown.timestamp -= Duration::seconds(90);
        let hidden = WindowTransition::new(WindowLifecycle::Visible, WindowLifecycle::Hidden);

        assert!(hidden.dwell_since(&shown) >= Duration::seconds(90));
        assert_eq!(shown.dwell_since(&hidden), Duration::zero());
    }
}
