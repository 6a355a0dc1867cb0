// Application Menu
//
// 应用菜单布局与菜单 id 路由
//
// 托盘菜单、应用菜单、右键菜单的事件都由同一个全局回调接收，按 id 前缀区分

use crate::modules::tray::TrayAction;
use crate::modules::window::ContextMenuCommand;

/// 应用菜单动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMenuAction {
    DarkMode,
    LightMode,
    ToggleAlwaysOnTop,
    Reload,
    ToggleDevTools,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Quit,
}

impl AppMenuAction {
    pub const ALL: [AppMenuAction; 9] = [
        AppMenuAction::DarkMode,
        AppMenuAction::LightMode,
        AppMenuAction::ToggleAlwaysOnTop,
        AppMenuAction::Reload,
        AppMenuAction::ToggleDevTools,
        AppMenuAction::ZoomIn,
        AppMenuAction::ZoomOut,
        AppMenuAction::ResetZoom,
        AppMenuAction::Quit,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AppMenuAction::DarkMode => "app:dark-mode",
            AppMenuAction::LightMode => "app:light-mode",
            AppMenuAction::ToggleAlwaysOnTop => "app:always-on-top",
            AppMenuAction::Reload => "app:reload",
            AppMenuAction::ToggleDevTools => "app:toggle-devtools",
            AppMenuAction::ZoomIn => "app:zoom-in",
            AppMenuAction::ZoomOut => "app:zoom-out",
            AppMenuAction::ResetZoom => "app:reset-zoom",
            AppMenuAction::Quit => "app:quit",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppMenuAction::DarkMode => "Dark Mode",
            AppMenuAction::LightMode => "Light Mode",
            AppMenuAction::ToggleAlwaysOnTop => "Always On Top",
            AppMenuAction::Reload => "Reload",
            AppMenuAction::ToggleDevTools => "Toggle Developer Tools",
            AppMenuAction::ZoomIn => "Zoom In",
            AppMenuAction::ZoomOut => "Zoom Out",
            AppMenuAction::ResetZoom => "Actual Size",
            AppMenuAction::Quit => "Quit",
        }
    }

    pub fn accelerator(&self) -> Option<&'static str> {
        match self {
            AppMenuAction::Reload => Some("CmdOrCtrl+R"),
            AppMenuAction::ToggleDevTools => Some("CmdOrCtrl+Shift+I"),
            AppMenuAction::ZoomIn => Some("CmdOrCtrl+Plus"),
            AppMenuAction::ZoomOut => Some("CmdOrCtrl+-"),
            AppMenuAction::ResetZoom => Some("CmdOrCtrl+0"),
            AppMenuAction::Quit => Some("CmdOrCtrl+Q"),
            _ => None,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

/// 应用菜单元素
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMenuElement {
    Item(AppMenuAction),
    Check { action: AppMenuAction, checked: bool },
    Separator,
}

/// 应用菜单布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMenuConfig {
    pub view_title: String,
    pub view: Vec<AppMenuElement>,
    /// View 子菜单之后的顶层条目
    pub trailing: Vec<AppMenuAction>,
}

impl AppMenuConfig {
    /// View 子菜单 + Quit；开发者工具只在 debug 构建中出现
    pub fn shell(always_on_top: bool, include_devtools: bool) -> Self {
        let mut view = vec![
            AppMenuElement::Item(AppMenuAction::DarkMode),
            AppMenuElement::Item(AppMenuAction::LightMode),
            AppMenuElement::Separator,
            AppMenuElement::Check {
                action: AppMenuAction::ToggleAlwaysOnTop,
                checked: always_on_top,
            },
            AppMenuElement::Separator,
            AppMenuElement::Item(AppMenuAction::Reload),
        ];
        if include_devtools {
            view.push(AppMenuElement::Item(AppMenuAction::ToggleDevTools));
        }
        view.extend([
            AppMenuElement::Separator,
            AppMenuElement::Item(AppMenuAction::ZoomIn),
            AppMenuElement::Item(AppMenuAction::ZoomOut),
            AppMenuElement::Item(AppMenuAction::ResetZoom),
        ]);

        Self {
            view_title: "View".to_string(),
            view,
            trailing: vec![AppMenuAction::Quit],
        }
    }
}

/// 任意菜单的点击
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Tray(TrayAction),
    App(AppMenuAction),
    Context(ContextMenuCommand),
}

impl MenuCommand {
    pub fn from_id(id: &str) -> Option<Self> {
        TrayAction::from_id(id)
            .map(MenuCommand::Tray)
            .or_else(|| AppMenuAction::from_id(id).map(MenuCommand::App))
            .or_else(|| ContextMenuCommand::from_id(id).map(MenuCommand::Context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::window::SpellcheckLanguage;

    #[test]
    fn test_view_menu_layout() {
        let config = AppMenuConfig::shell(false, true);
        assert_eq!(config.view.len(), 11);
        assert_eq!(config.view[0], AppMenuElement::Item(AppMenuAction::DarkMode));
        assert_eq!(
            config.view[3],
            AppMenuElement::Check {
                action: AppMenuAction::ToggleAlwaysOnTop,
                checked: false
            }
        );
        assert_eq!(config.view[6], AppMenuElement::Item(AppMenuAction::ToggleDevTools));
        assert_eq!(config.trailing, vec![AppMenuAction::Quit]);
    }

    #[test]
    fn test_release_menu_has_no_devtools() {
        let config = AppMenuConfig::shell(true, false);
        assert!(!config
            .view
            .contains(&AppMenuElement::Item(AppMenuAction::ToggleDevTools)));
    }

    #[test]
    fn test_menu_command_routing() {
        assert_eq!(
            MenuCommand::from_id("tray:always-on-top"),
            Some(MenuCommand::Tray(TrayAction::ToggleAlwaysOnTop))
        );
        assert_eq!(
            MenuCommand::from_id("app:always-on-top"),
            Some(MenuCommand::App(AppMenuAction::ToggleAlwaysOnTop))
        );
        assert_eq!(
            MenuCommand::from_id("context:spellcheck:fr-FR"),
            Some(MenuCommand::Context(ContextMenuCommand::SetSpellcheckLanguage(
                SpellcheckLanguage::French
            )))
        );
        assert_eq!(MenuCommand::from_id("copy"), None);
    }

    #[test]
    fn test_app_menu_ids_are_unique() {
        for action in AppMenuAction::ALL {
            assert_eq!(AppMenuAction::from_id(action.id()), Some(action));
        }
    }
}
