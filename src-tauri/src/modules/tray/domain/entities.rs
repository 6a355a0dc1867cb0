// Tray Domain Entities
//
// 托盘领域实体定义

use serde::{Deserialize, Serialize};

use super::events::TrayAction;
use crate::modules::config::TraySettings;

/// 托盘菜单项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrayMenuItem {
    pub id: String,
    pub title: String,
    pub enabled: bool,
}

impl TrayMenuItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            enabled: true,
        }
    }

    pub fn for_action(action: TrayAction) -> Self {
        Self::new(action.id(), action.title())
    }
}

/// 托盘菜单元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrayMenuElement {
    Item(TrayMenuItem),
    Check { item: TrayMenuItem, checked: bool },
    Separator,
}

/// 托盘菜单配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrayMenuConfig {
    pub items: Vec<TrayMenuElement>,
}

impl TrayMenuConfig {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add_item(mut self, item: TrayMenuItem) -> Self {
        self.items.push(TrayMenuElement::Item(item));
        self
    }

    pub fn add_check(mut self, item: TrayMenuItem, checked: bool) -> Self {
        self.items.push(TrayMenuElement::Check { item, checked });
        self
    }

    pub fn add_separator(mut self) -> Self {
        self.items.push(TrayMenuElement::Separator);
        self
    }

    /// Show / Reload / Dark Mode / Always On Top / 分隔符 / Quit
    pub fn shell(always_on_top: bool) -> Self {
        Self::new()
            .add_item(TrayMenuItem::for_action(TrayAction::Show))
            .add_item(TrayMenuItem::for_action(TrayAction::Reload))
            .add_item(TrayMenuItem::for_action(TrayAction::DarkMode))
            .add_check(
                TrayMenuItem::for_action(TrayAction::ToggleAlwaysOnTop),
                always_on_top,
            )
            .add_separator()
            .add_item(TrayMenuItem::for_action(TrayAction::Quit))
    }
}

impl Default for TrayMenuConfig {
    fn default() -> Self {
        Self::shell(false)
    }
}

/// 托盘配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrayConfig {
    pub id: String,
    pub tooltip: String,
    /// 图标最大边长
    pub icon_size: u32,
    pub menu: TrayMenuConfig,
}

impl TrayConfig {
    pub fn from_settings(settings: &TraySettings, always_on_top: bool) -> Self {
        Self {
            id: settings.id.clone(),
            tooltip: settings.tooltip.clone(),
            icon_size: settings.icon_size,
            menu: TrayMenuConfig::shell(always_on_top),
        }
    }
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self::from_settings(&TraySettings::default(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_menu_order() {
        let menu = TrayMenuConfig::shell(true);
        let titles: Vec<&str> = menu
            .items
            .iter()
            .map(|element| match element {
                TrayMenuElement::Item(item) => item.title.as_str(),
                TrayMenuElement::Check { item, .. } => item.title.as_str(),
                TrayMenuElement::Separator => "-",
            })
            .collect();

        assert_eq!(
            titles,
            vec!["Show", "Reload", "Dark Mode", "Always On Top", "-", "Quit"]
        );
    }

    #[test]
    fn test_always_on_top_item_reflects_flag() {
        let menu = TrayMenuConfig::shell(true);
        assert!(menu.items.iter().any(|element| matches!(
            element,
            TrayMenuElement::Check { checked: true, item } if item.id == TrayAction::ToggleAlwaysOnTop.id()
        )));
    }

    #[test]
    fn test_tray_config_defaults() {
        let config = TrayConfig::default();
        assert_eq!(config.tooltip, "WhatsApp");
        assert_eq!(config.icon_size, 24);
    }
}
