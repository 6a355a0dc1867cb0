// Tauri Attention Adapter
//
// 基于 Tauri 窗口的提醒实现

use tauri::{AppHandle, Manager, UserAttentionType, WebviewWindow};

use crate::modules::attention::domain::AttentionRequest;
use crate::modules::attention::ports::{AttentionError, AttentionPort};

/// Tauri 提醒适配器
pub struct TauriAttentionAdapter {
    app_handle: AppHandle,
    label: String,
}

impl TauriAttentionAdapter {
    pub fn new(app_handle: AppHandle, label: impl Into<String>) -> Self {
        Self {
            app_handle,
            label: label.into(),
        }
    }

    fn get_window(&self) -> Result<WebviewWindow, AttentionError> {
        self.app_handle
            .get_webview_window(&self.label)
            .ok_or(AttentionError::WindowUnavailable)
    }
}

impl AttentionPort for TauriAttentionAdapter {
    fn request(&self, request: AttentionRequest) -> Result<(), AttentionError> {
        let window = self.get_window()?;
        let kind = match request {
            // macOS: Dock 图标跳动一次
            AttentionRequest::DockBounce => UserAttentionType::Informational,
            // Windows 闪烁窗口直到获得焦点；Linux 设置 urgency hint
            AttentionRequest::FlashFrame => UserAttentionType::Critical,
        };
        window
            .request_user_attention(Some(kind))
            .map_err(|e| AttentionError::Unsupported(e.to_string()))
    }

    fn clear(&self) -> Result<(), AttentionError> {
        let window = self.get_window()?;
        window
            .request_user_attention(None)
            .map_err(|e| AttentionError::OperationFailed(e.to_string()))
    }
}
