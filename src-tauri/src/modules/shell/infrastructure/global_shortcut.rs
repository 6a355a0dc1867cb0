// Global Shortcut
//
// 全局快捷键注册，进程退出前统一注销

use std::sync::Arc;
use tauri::AppHandle;
use tauri_plugin_global_shortcut::{GlobalShortcutExt, ShortcutState};

use crate::modules::config::Shortcut;
use crate::modules::shell::ports::ShortcutError;

/// 快捷键触发回调
pub type ShortcutHandler = Arc<dyn Fn(&AppHandle) + Send + Sync>;

/// 注册显示窗口快捷键，只在按下时触发
pub fn register_show_shortcut(
    app_handle: &AppHandle,
    shortcut: &Shortcut,
    handler: ShortcutHandler,
) -> Result<(), ShortcutError> {
    if !shortcut.is_valid() {
        return Err(ShortcutError::InvalidShortcut(shortcut.keys().to_string()));
    }

    app_handle
        .global_shortcut()
        .on_shortcut(shortcut.keys(), move |app, _shortcut, event| {
            if event.state() == ShortcutState::Pressed {
                handler(app);
            }
        })
        .map_err(|e| ShortcutError::RegistrationFailed(e.to_string()))?;

    tracing::info!("Global shortcut registered: {}", shortcut.keys());
    Ok(())
}

/// 注销全部快捷键
pub fn unregister_all(app_handle: &AppHandle) -> Result<(), ShortcutError> {
    app_handle
        .global_shortcut()
        .unregister_all()
        .map_err(|e| ShortcutError::RegistrationFailed(e.to_string()))?;
    tracing::debug!("Global shortcuts released");
    Ok(())
}
