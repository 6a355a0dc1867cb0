// Tauri Application Menu
//
// 基于 Tauri 的应用菜单实现：View 子菜单 + Quit

use tauri::menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};
use tauri::{AppHandle, Wry};

use crate::modules::shell::domain::{AppMenuAction, AppMenuConfig, AppMenuElement};
use crate::modules::shell::ports::{AppMenuError, AppMenuPort};

/// Tauri 应用菜单
pub struct TauriAppMenu {
    always_on_top_item: Option<CheckMenuItem<Wry>>,
}

impl TauriAppMenu {
    /// 构建并设置为应用菜单
    pub fn install(app_handle: &AppHandle, config: &AppMenuConfig) -> Result<Self, AppMenuError> {
        let menu = Menu::new(app_handle).map_err(op_failed)?;
        let view = Submenu::new(app_handle, &config.view_title, true).map_err(op_failed)?;
        let mut always_on_top_item = None;

        for element in &config.view {
            match element {
                AppMenuElement::Item(action) => {
                    view.append(&menu_item(app_handle, *action)?)
                        .map_err(op_failed)?;
                }
                AppMenuElement::Check { action, checked } => {
                    let check = CheckMenuItem::with_id(
                        app_handle,
                        action.id(),
                        action.title(),
                        true,
                        *checked,
                        action.accelerator(),
                    )
                    .map_err(op_failed)?;
                    view.append(&check).map_err(op_failed)?;
                    if *action == AppMenuAction::ToggleAlwaysOnTop {
                        always_on_top_item = Some(check);
                    }
                }
                AppMenuElement::Separator => {
                    let separator = PredefinedMenuItem::separator(app_handle).map_err(op_failed)?;
                    view.append(&separator).map_err(op_failed)?;
                }
            }
        }

        // macOS 菜单栏只接受子菜单，顶层条目放进应用名子菜单
        if cfg!(target_os = "macos") {
            let app_name = app_handle.package_info().name.clone();
            let app_menu = Submenu::new(app_handle, app_name, true).map_err(op_failed)?;
            for action in &config.trailing {
                app_menu
                    .append(&menu_item(app_handle, *action)?)
                    .map_err(op_failed)?;
            }
            menu.append(&app_menu).map_err(op_failed)?;
            menu.append(&view).map_err(op_failed)?;
        } else {
            menu.append(&view).map_err(op_failed)?;
            for action in &config.trailing {
                menu.append(&menu_item(app_handle, *action)?)
                    .map_err(op_failed)?;
            }
        }

        app_handle.set_menu(menu).map_err(op_failed)?;
        tracing::debug!("Application menu installed");

        Ok(Self { always_on_top_item })
    }
}

fn menu_item(app_handle: &AppHandle, action: AppMenuAction) -> Result<MenuItem<Wry>, AppMenuError> {
    MenuItem::with_id(
        app_handle,
        action.id(),
        action.title(),
        true,
        action.accelerator(),
    )
    .map_err(op_failed)
}

fn op_failed(e: tauri::Error) -> AppMenuError {
    AppMenuError::OperationFailed(e.to_string())
}

impl AppMenuPort for TauriAppMenu {
    fn set_always_on_top_checked(&self, checked: bool) -> Result<(), AppMenuError> {
        let item = self.always_on_top_item.as_ref().ok_or_else(|| {
            AppMenuError::MenuItemNotFound(AppMenuAction::ToggleAlwaysOnTop.id().to_string())
        })?;
        item.set_checked(checked).map_err(op_failed)
    }
}
