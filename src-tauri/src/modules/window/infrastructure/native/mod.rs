// Native Webview Hooks
//
// 通过 with_webview 接入网页引擎的原生回调:
// - 权限请求按 PermissionKind 决策表放行或拒绝
// - 右键菜单带上引擎给出的拼写建议
// - 拼写词典跟随当前语言
//
// WebKitGTK (Linux) 与 WebView2 (Windows) 有原生回调，其他平台退回页面脚本

use std::sync::{Arc, Mutex};
use tauri::WebviewWindow;

use crate::modules::window::domain::{ContextMenuSource, SpellcheckLanguage};
use crate::modules::window::infrastructure::ContentEventSink;
use crate::modules::window::ports::WindowError;

#[cfg(target_os = "linux")]
mod webkitgtk;
#[cfg(windows)]
mod webview2;

/// 当前平台的右键事件来源
pub const CONTEXT_MENU_SOURCE: ContextMenuSource = if cfg!(any(target_os = "linux", windows)) {
    ContextMenuSource::Engine
} else {
    ContextMenuSource::PageScript
};

/// 原生回调共享的状态
#[derive(Clone)]
pub struct NativeHooks {
    pub sink: ContentEventSink,
    pub languages: Vec<SpellcheckLanguage>,
    pub current: Arc<Mutex<SpellcheckLanguage>>,
}

impl NativeHooks {
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    fn current_language(&self) -> SpellcheckLanguage {
        match self.current.lock() {
            Ok(current) => *current,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// 在新建的窗口上注册原生回调
pub fn install(window: &WebviewWindow, hooks: NativeHooks) -> Result<(), WindowError> {
    #[cfg(target_os = "linux")]
    let result = window.with_webview(move |platform| webkitgtk::install(&platform.inner(), hooks));

    #[cfg(windows)]
    let result = {
        let scale = window.scale_factor().unwrap_or(1.0);
        window.with_webview(move |platform| {
            if let Err(e) = webview2::install(&platform, hooks, scale) {
                tracing::warn!("WebView2 hooks not installed: {}", e);
            }
        })
    };

    #[cfg(not(any(target_os = "linux", windows)))]
    let result: tauri::Result<()> = {
        let _ = (window, hooks);
        tracing::debug!("No native webview hooks on this platform");
        Ok(())
    };

    result.map_err(|e| WindowError::OperationFailed(e.to_string()))
}

/// 切换引擎拼写词典
pub fn apply_spellcheck_language(
    window: &WebviewWindow,
    language: SpellcheckLanguage,
) -> Result<(), WindowError> {
    #[cfg(target_os = "linux")]
    {
        window
            .with_webview(move |platform| webkitgtk::apply_language(&platform.inner(), language))
            .map_err(|e| WindowError::OperationFailed(e.to_string()))
    }

    // WebView2 与 WKWebView 的词典跟随系统语言设置
    #[cfg(not(target_os = "linux"))]
    {
        let _ = window;
        tracing::debug!("Engine dictionary not switchable, page lang set to {}", language.code());
        Ok(())
    }
}
