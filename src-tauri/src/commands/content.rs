use tauri::{AppHandle, Manager};

use crate::infrastructure::SessionState;
use crate::modules::shell::{EventOutcome, ShellEvent};
use crate::modules::window::{ContentEvent, ContextMenuParams};
use crate::shared::{AppError, AppResult};

/// 页面右键：由初始化脚本调用，弹出原生右键菜单
#[tauri::command]
pub fn content_context_menu(app: AppHandle, params: ContextMenuParams) -> AppResult<()> {
    let state = app
        .try_state::<SessionState>()
        .ok_or_else(|| AppError::SessionUnavailable("session not initialized".to_string()))?;

    let event = ShellEvent::Content(ContentEvent::ContextMenuRequested(params));
    match state.dispatch(&app, event) {
        EventOutcome::Failed => Err(AppError::Unknown(
            "Failed to show context menu".to_string(),
        )),
        _ => Ok(()),
    }
}
