// Tauri Window Adapter
//
// 基于 Tauri 的主窗口适配器实现

use std::sync::{Arc, Mutex};
use tauri::image::Image;
use tauri::menu::{CheckMenuItem, IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};
use tauri::webview::{NewWindowResponse, PageLoadEvent};
use tauri::{AppHandle, LogicalPosition, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder, Wry};

use super::native::{self, NativeHooks};
use crate::modules::window::domain::{
    initialization_script, spellcheck_language_script, ContentEvent, ContextMenuEntry,
    ContextMenuModel, NavigationGuard, SpellcheckLanguage, WindowConfig, WindowLabel,
};
use crate::modules::window::ports::{ExternalOpener, WindowError, WindowPort};

/// 页面内容事件回调
pub type ContentEventSink = Arc<dyn Fn(ContentEvent) + Send + Sync>;

/// Tauri 窗口适配器
pub struct TauriWindowAdapter {
    app_handle: AppHandle,
    label: WindowLabel,
    guard: NavigationGuard,
    opener: Arc<dyn ExternalOpener>,
    sink: ContentEventSink,
    /// 引擎原生右键菜单读取的当前语言
    spellcheck: Arc<Mutex<SpellcheckLanguage>>,
}

impl TauriWindowAdapter {
    pub fn new(
        app_handle: AppHandle,
        label: WindowLabel,
        guard: NavigationGuard,
        opener: Arc<dyn ExternalOpener>,
        sink: ContentEventSink,
        spellcheck_language: SpellcheckLanguage,
    ) -> Self {
        Self {
            app_handle,
            label,
            guard,
            opener,
            sink,
            spellcheck: Arc::new(Mutex::new(spellcheck_language)),
        }
    }

    fn remember_language(&self, language: SpellcheckLanguage) {
        match self.spellcheck.lock() {
            Ok(mut current) => *current = language,
            Err(poisoned) => *poisoned.into_inner() = language,
        }
    }

    /// 获取 Tauri 窗口句柄
    fn get_window(&self) -> Result<WebviewWindow, WindowError> {
        self.app_handle
            .get_webview_window(self.label.as_str())
            .ok_or_else(|| WindowError::NotFound(self.label.to_string()))
    }

    fn build_menu(&self, model: &ContextMenuModel) -> tauri::Result<Menu<Wry>> {
        let menu = Menu::new(&self.app_handle)?;
        for entry in &model.entries {
            match entry {
                ContextMenuEntry::Submenu { title, items } => {
                    let submenu = Submenu::new(&self.app_handle, title, true)?;
                    for item in items {
                        self.append_entry(item, |i| submenu.append(i))?;
                    }
                    menu.append(&submenu)?;
                }
                entry => self.append_entry(entry, |i| menu.append(i))?,
            }
        }
        Ok(menu)
    }

    fn append_entry<F>(&self, entry: &ContextMenuEntry, append: F) -> tauri::Result<()>
    where
        F: Fn(&dyn IsMenuItem<Wry>) -> tauri::Result<()>,
    {
        let app = &self.app_handle;
        match entry {
            ContextMenuEntry::Radio { id, title, checked } => append(&CheckMenuItem::with_id(
                app,
                id.as_str(),
                title,
                true,
                *checked,
                None::<&str>,
            )?),
            ContextMenuEntry::Item { id, title } => {
                append(&MenuItem::with_id(app, id.as_str(), title, true, None::<&str>)?)
            }
            ContextMenuEntry::Separator => append(&PredefinedMenuItem::separator(app)?),
            ContextMenuEntry::Copy => append(&PredefinedMenuItem::copy(app, None)?),
            ContextMenuEntry::Paste => append(&PredefinedMenuItem::paste(app, None)?),
            ContextMenuEntry::SelectAll => append(&PredefinedMenuItem::select_all(app, None)?),
            // 只支持一级子菜单
            ContextMenuEntry::Submenu { title, .. } => {
                tracing::debug!("Skipping nested submenu {}", title);
                Ok(())
            }
        }
    }
}

impl WindowPort for TauriWindowAdapter {
    fn create(&self, config: &WindowConfig) -> Result<(), WindowError> {
        // 检查窗口是否已存在
        if self
            .app_handle
            .get_webview_window(config.label.as_str())
            .is_some()
        {
            return Err(WindowError::AlreadyExists(config.label.to_string()));
        }

        let data_directory = self
            .app_handle
            .path()
            .app_data_dir()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?
            .join("partitions")
            .join(&config.storage_partition);
        let init_script = initialization_script(config.spellcheck_language, native::CONTEXT_MENU_SOURCE);
        self.remember_language(config.spellcheck_language);

        let nav_guard = self.guard.clone();
        let nav_opener = self.opener.clone();
        let popup_guard = self.guard.clone();
        let popup_opener = self.opener.clone();
        let load_guard = self.guard.clone();
        let title_sink = self.sink.clone();
        let load_sink = self.sink.clone();

        let mut builder = WebviewWindowBuilder::new(
            &self.app_handle,
            config.label.as_str(),
            WebviewUrl::External(config.url.clone()),
        )
        .title(&config.title)
        .inner_size(config.size.width as f64, config.size.height as f64)
        .always_on_top(config.always_on_top)
        .user_agent(&config.user_agent)
        .data_directory(data_directory)
        .initialization_script(&init_script)
        .on_navigation(move |url| nav_guard.apply(nav_guard.decide(url), nav_opener.as_ref()))
        .on_new_window(move |url, _features| {
            popup_guard.apply(popup_guard.decide_new_window(&url), popup_opener.as_ref());
            NewWindowResponse::Deny
        })
        .on_document_title_changed(move |_window, title| {
            title_sink(ContentEvent::TitleChanged(title));
        })
        .on_page_load(move |_window, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished) {
                load_guard.page_loaded(payload.url());
                load_sink(ContentEvent::PageLoaded(payload.url().clone()));
            }
        });

        if let Some(icon) = &config.icon {
            builder = builder
                .icon(Image::new_owned(icon.rgba.clone(), icon.width, icon.height))
                .map_err(|e| WindowError::InvalidConfig(e.to_string()))?;
        }

        let window = builder
            .build()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;

        let hooks = NativeHooks {
            sink: self.sink.clone(),
            languages: config.spellcheck_languages.clone(),
            current: self.spellcheck.clone(),
        };
        // 原生回调缺失时页面脚本仍然生效
        if let Err(e) = native::install(&window, hooks) {
            tracing::warn!("Native webview hooks unavailable: {}", e);
        }

        tracing::info!("Main window created: {}", config.url);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.app_handle
            .get_webview_window(self.label.as_str())
            .is_some()
    }

    fn show(&self) -> Result<(), WindowError> {
        let window = self.get_window()?;
        window
            .unminimize()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
        window
            .show()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
        window
            .set_focus()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
        Ok(())
    }

    fn hide(&self) -> Result<(), WindowError> {
        let window = self.get_window()?;
        window
            .hide()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
        Ok(())
    }

    fn reload(&self) -> Result<(), WindowError> {
        self.eval("window.location.reload();")
    }

    fn is_focused(&self) -> Result<bool, WindowError> {
        let window = self.get_window()?;
        window
            .is_focused()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))
    }

    fn is_minimized(&self) -> Result<bool, WindowError> {
        let window = self.get_window()?;
        window
            .is_minimized()
            .map_err(|e| WindowError::OperationFailed(e.to_string()))
    }

    fn set_always_on_top(&self, always_on_top: bool) -> Result<(), WindowError> {
        let window = self.get_window()?;
        window
            .set_always_on_top(always_on_top)
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
        Ok(())
    }

    fn set_badge_count(&self, count: Option<i64>) -> Result<(), WindowError> {
        let window = self.get_window()?;
        window
            .set_badge_count(count)
            .map_err(|e| WindowError::PlatformNotSupported(e.to_string()))
    }

    fn set_zoom(&self, factor: f64) -> Result<(), WindowError> {
        let window = self.get_window()?;
        window
            .set_zoom(factor)
            .map_err(|e| WindowError::OperationFailed(e.to_string()))
    }

    #[cfg(debug_assertions)]
    fn toggle_devtools(&self) -> Result<(), WindowError> {
        let window = self.get_window()?;
        if window.is_devtools_open() {
            window.close_devtools();
        } else {
            window.open_devtools();
        }
        Ok(())
    }

    #[cfg(not(debug_assertions))]
    fn toggle_devtools(&self) -> Result<(), WindowError> {
        Err(WindowError::PlatformNotSupported(
            "developer tools are only available in debug builds".to_string(),
        ))
    }

    fn set_spellcheck_language(&self, language: SpellcheckLanguage) -> Result<(), WindowError> {
        self.remember_language(language);
        let window = self.get_window()?;
        native::apply_spellcheck_language(&window, language)?;
        window
            .eval(&spellcheck_language_script(language))
            .map_err(|e| WindowError::OperationFailed(e.to_string()))
    }

    fn eval(&self, script: &str) -> Result<(), WindowError> {
        let window = self.get_window()?;
        window
            .eval(script)
            .map_err(|e| WindowError::OperationFailed(e.to_string()))
    }

    fn popup_context_menu(&self, model: &ContextMenuModel) -> Result<(), WindowError> {
        let window = self.get_window()?;
        let menu = self
            .build_menu(model)
            .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
        window
            .popup_menu_at(&menu, LogicalPosition::new(model.x, model.y))
            .map_err(|e| WindowError::OperationFailed(e.to_string()))
    }
}
