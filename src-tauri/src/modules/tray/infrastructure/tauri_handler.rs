// Tauri Tray Handler
//
// 基于 Tauri 的托盘处理实现

use std::sync::Arc;
use tauri::image::Image;
use tauri::menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem};
use tauri::tray::{MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};
use tauri::{AppHandle, Wry};

use crate::modules::icon::IconImage;
use crate::modules::tray::domain::{
    TrayAction, TrayClickEvent, TrayConfig, TrayMenuElement, TrayMenuItem, TrayMouseButton,
};
use crate::modules::tray::ports::{TrayError, TrayPort};

/// 托盘左键点击回调
pub type TrayClickHandler = Arc<dyn Fn(&AppHandle) + Send + Sync>;

/// Tauri 托盘处理器
pub struct TauriTrayHandler {
    _tray: TrayIcon,
    always_on_top_item: Option<CheckMenuItem<Wry>>,
}

impl TauriTrayHandler {
    /// 构建托盘；图标无法使用时退回透明占位图
    pub fn build(
        app_handle: &AppHandle,
        config: &TrayConfig,
        icon: Option<IconImage>,
        on_click: TrayClickHandler,
    ) -> Result<Self, TrayError> {
        let (menu, always_on_top_item) = Self::build_menu(app_handle, config)?;

        let image = icon
            .filter(|image| !image.is_empty())
            .map(|image| image.fit_within(config.icon_size))
            .unwrap_or_else(IconImage::placeholder);

        let tray = match Self::build_tray(app_handle, config, &menu, image, on_click.clone()) {
            Ok(tray) => tray,
            Err(e) => {
                tracing::warn!("Tray icon rejected ({}), retrying with placeholder", e);
                Self::build_tray(app_handle, config, &menu, IconImage::placeholder(), on_click)?
            }
        };

        tracing::info!("Tray created: {}", config.id);
        Ok(Self {
            _tray: tray,
            always_on_top_item,
        })
    }

    fn build_menu(
        app_handle: &AppHandle,
        config: &TrayConfig,
    ) -> Result<(Menu<Wry>, Option<CheckMenuItem<Wry>>), TrayError> {
        let menu = Menu::new(app_handle).map_err(|e| TrayError::OperationFailed(e.to_string()))?;
        let mut always_on_top_item = None;

        for element in &config.menu.items {
            let appended = match element {
                TrayMenuElement::Item(item) => Self::menu_item(app_handle, item)
                    .and_then(|menu_item| menu.append(&menu_item)),
                TrayMenuElement::Check { item, checked } => {
                    CheckMenuItem::with_id(
                        app_handle,
                        item.id.as_str(),
                        &item.title,
                        item.enabled,
                        *checked,
                        None::<&str>,
                    )
                    .and_then(|check| {
                        menu.append(&check)?;
                        if item.id == TrayAction::ToggleAlwaysOnTop.id() {
                            always_on_top_item = Some(check);
                        }
                        Ok(())
                    })
                }
                TrayMenuElement::Separator => PredefinedMenuItem::separator(app_handle)
                    .and_then(|separator| menu.append(&separator)),
            };
            appended.map_err(|e| TrayError::OperationFailed(e.to_string()))?;
        }

        Ok((menu, always_on_top_item))
    }

    fn menu_item(app_handle: &AppHandle, item: &TrayMenuItem) -> tauri::Result<MenuItem<Wry>> {
        MenuItem::with_id(
            app_handle,
            item.id.as_str(),
            &item.title,
            item.enabled,
            None::<&str>,
        )
    }

    fn build_tray(
        app_handle: &AppHandle,
        config: &TrayConfig,
        menu: &Menu<Wry>,
        image: IconImage,
        on_click: TrayClickHandler,
    ) -> Result<TrayIcon, TrayError> {
        // 菜单事件由应用级 on_menu_event 统一分发
        TrayIconBuilder::with_id(config.id.as_str())
            .menu(menu)
            .tooltip(&config.tooltip)
            .icon(Image::new_owned(image.rgba, image.width, image.height))
            .show_menu_on_left_click(false)
            .on_tray_icon_event(move |tray, event| {
                if let TrayIconEvent::Click {
                    button,
                    button_state: MouseButtonState::Up,
                    ..
                } = event
                {
                    let click = TrayClickEvent::new(map_button(button));
                    if click.shows_window() {
                        on_click(tray.app_handle());
                    }
                }
            })
            .build(app_handle)
            .map_err(|e| TrayError::InvalidIcon(e.to_string()))
    }
}

fn map_button(button: MouseButton) -> TrayMouseButton {
    match button {
        MouseButton::Left => TrayMouseButton::Left,
        MouseButton::Right => TrayMouseButton::Right,
        MouseButton::Middle => TrayMouseButton::Middle,
    }
}

impl TrayPort for TauriTrayHandler {
    fn set_always_on_top_checked(&self, checked: bool) -> Result<(), TrayError> {
        let item = self.always_on_top_item.as_ref().ok_or_else(|| {
            TrayError::MenuItemNotFound(TrayAction::ToggleAlwaysOnTop.id().to_string())
        })?;
        item.set_checked(checked)
            .map_err(|e| TrayError::OperationFailed(e.to_string()))
    }
}
