// Tray Domain Events
//
// 托盘领域事件定义

use serde::{Deserialize, Serialize};

/// 托盘点击事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrayClickEvent {
    pub button: TrayMouseButton,
}

/// 鼠标按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrayMouseButton {
    Left,
    Right,
    Middle,
}

impl TrayClickEvent {
    pub fn new(button: TrayMouseButton) -> Self {
        Self { button }
    }

    /// 左键单击显示窗口，右键留给菜单
    pub fn shows_window(&self) -> bool {
        self.button == TrayMouseButton::Left
    }
}

/// 托盘菜单动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrayAction {
    Show,
    Reload,
    /// 强制开启暗色模式
    DarkMode,
    ToggleAlwaysOnTop,
    Quit,
}

impl TrayAction {
    pub const ALL: [TrayAction; 5] = [
        TrayAction::Show,
        TrayAction::Reload,
        TrayAction::DarkMode,
        TrayAction::ToggleAlwaysOnTop,
        TrayAction::Quit,
    ];

    /// 菜单项 id
    pub fn id(&self) -> &'static str {
        match self {
            TrayAction::Show => "tray:show",
            TrayAction::Reload => "tray:reload",
            TrayAction::DarkMode => "tray:dark-mode",
            TrayAction::ToggleAlwaysOnTop => "tray:always-on-top",
            TrayAction::Quit => "tray:quit",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TrayAction::Show => "Show",
            TrayAction::Reload => "Reload",
            TrayAction::DarkMode => "Dark Mode",
            TrayAction::ToggleAlwaysOnTop => "Always On Top",
            TrayAction::Quit => "Quit",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tray_action_ids() {
        for action in TrayAction::ALL {
            assert_eq!(TrayAction::from_id(action.id()), Some(action));
        }
        assert_eq!(TrayAction::from_id("app:quit"), None);
    }

    #[test]
    fn test_only_left_click_shows_window() {
        assert!(TrayClickEvent::new(TrayMouseButton::Left).shows_window());
        assert!(!TrayClickEvent::new(TrayMouseButton::Right).shows_window());
    }
}
