// Webview Style Adapter
//
// 通过 eval 在页面中插入/删除 <style> 节点

use async_trait::async_trait;
use tauri::{AppHandle, Manager, WebviewWindow};

use crate::modules::appearance::domain::StyleHandle;
use crate::modules::appearance::ports::{AppearanceError, StylePort};

/// Webview 样式适配器
pub struct WebviewStyleAdapter {
    app_handle: AppHandle,
    label: String,
}

impl WebviewStyleAdapter {
    pub fn new(app_handle: AppHandle, label: impl Into<String>) -> Self {
        Self {
            app_handle,
            label: label.into(),
        }
    }

    fn get_window(&self) -> Result<WebviewWindow, AppearanceError> {
        self.app_handle
            .get_webview_window(&self.label)
            .ok_or(AppearanceError::WindowUnavailable)
    }
}

/// 生成插入样式的脚本
pub fn insert_style_script(handle: &StyleHandle, css: &str) -> Result<String, AppearanceError> {
    let id = serde_json::to_string(handle.as_str())
        .map_err(|e| AppearanceError::InjectFailed(e.to_string()))?;
    let css = serde_json::to_string(css).map_err(|e| AppearanceError::InjectFailed(e.to_string()))?;
    Ok(format!(
        "(function(){{var s=document.createElement('style');s.id={id};s.textContent={css};(document.head||document.documentElement).appendChild(s);}})();"
    ))
}

/// 生成删除样式的脚本
pub fn remove_style_script(handle: &StyleHandle) -> Result<String, AppearanceError> {
    let id = serde_json::to_string(handle.as_str())
        .map_err(|e| AppearanceError::RemoveFailed(e.to_string()))?;
    Ok(format!(
        "(function(){{var s=document.getElementById({id});if(s){{s.remove();}}}})();"
    ))
}

#[async_trait]
impl StylePort for WebviewStyleAdapter {
    fn is_available(&self) -> bool {
        self.app_handle.get_webview_window(&self.label).is_some()
    }

    async fn insert_css(&self, css: &str) -> Result<StyleHandle, AppearanceError> {
        let window = self.get_window()?;
        let handle = StyleHandle::generate();
        let script = insert_style_script(&handle, css)?;
        window
            .eval(&script)
            .map_err(|e| AppearanceError::InjectFailed(e.to_string()))?;
        Ok(handle)
    }

    async fn remove_css(&self, handle: &StyleHandle) -> Result<(), AppearanceError> {
        let window = self.get_window()?;
        let script = remove_style_script(handle)?;
        window
            .eval(&script)
            .map_err(|e| AppearanceError::RemoveFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_script_escapes_css() {
        let handle = StyleHandle::from_string("dark");
        let script = insert_style_script(&handle, "a { content: \"x\" }\n").unwrap();
        assert!(script.contains("s.id=\"dark\""));
        assert!(script.contains(r#"s.textContent="a { content: \"x\" }\n""#));
    }

    #[test]
    fn test_remove_script_targets_handle() {
        let script = remove_style_script(&StyleHandle::from_string("dark")).unwrap();
        assert!(script.contains("getElementById(\"dark\")"));
    }
}
