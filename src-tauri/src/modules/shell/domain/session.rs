// Shell Session
//
// 应用会话：持有窗口生命周期、退出标记、置顶标记等进程级状态
//
// 所有窗口、托盘、菜单、页面事件都以 ShellEvent 的形式送入 handle()，
// 处理函数中的错误只在这里记录，不会向外传播

use std::sync::Arc;

use super::events::{CloseDecision, EventOutcome, ShellEvent, ShowSource};
use super::menu::{AppMenuAction, MenuCommand};
use crate::modules::appearance::AppearanceController;
use crate::modules::attention::{AttentionOutcome, AttentionSignal};
use crate::modules::config::{ShellConfig, ThemePolicy};
use crate::modules::shell::ports::{AppMenuPort, ProcessPort};
use crate::modules::tray::{TrayAction, TrayPort};
use crate::modules::window::{
    replace_misspelling_script, BadgeUpdate, ContentEvent,
    ContextMenuCommand, ContextMenuModel, ContextMenuParams, SpellcheckLanguage, WindowConfig,
    WindowLifecycle, WindowPort, WindowTransition, ZoomLevel,
};
use crate::shared::AppResult;

/// 应用会话
pub struct ShellSession {
    window_config: WindowConfig,
    window: Arc<dyn WindowPort>,
    process: Arc<dyn ProcessPort>,
    tray: Option<Arc<dyn TrayPort>>,
    app_menu: Option<Arc<dyn AppMenuPort>>,
    attention: AttentionSignal,
    appearance: AppearanceController,
    theme_policy: ThemePolicy,
    spellcheck_languages: Vec<SpellcheckLanguage>,

    lifecycle: WindowLifecycle,
    last_transition: Option<WindowTransition>,
    quitting: bool,
    always_on_top: bool,
    spellcheck_language: SpellcheckLanguage,
    zoom: ZoomLevel,
    /// 最近一次右键菜单中的拼写建议
    pending_suggestions: Vec<String>,
}

impl ShellSession {
    pub fn new(
        config: &ShellConfig,
        window_config: WindowConfig,
        window: Arc<dyn WindowPort>,
        process: Arc<dyn ProcessPort>,
        attention: AttentionSignal,
        appearance: AppearanceController,
    ) -> Self {
        let spellcheck_language = window_config.spellcheck_language;
        let always_on_top = window_config.always_on_top;

        Self {
            window_config,
            window,
            process,
            tray: None,
            app_menu: None,
            attention,
            appearance,
            theme_policy: config.appearance.theme_policy,
            spellcheck_languages: config.content.spellcheck_languages.clone(),
            lifecycle: WindowLifecycle::Absent,
            last_transition: None,
            quitting: false,
            always_on_top,
            spellcheck_language,
            zoom: ZoomLevel::default(),
            pending_suggestions: Vec::new(),
        }
    }

    pub fn attach_tray(&mut self, tray: Arc<dyn TrayPort>) {
        self.tray = Some(tray);
    }

    pub fn attach_app_menu(&mut self, app_menu: Arc<dyn AppMenuPort>) {
        self.app_menu = Some(app_menu);
    }

    pub fn lifecycle(&self) -> WindowLifecycle {
        self.lifecycle
    }

    pub fn last_transition(&self) -> Option<&WindowTransition> {
        self.last_transition.as_ref()
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }

    pub fn spellcheck_language(&self) -> SpellcheckLanguage {
        self.spellcheck_language
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn appearance(&self) -> &AppearanceController {
        &self.appearance
    }

    /// 事件处理表
    pub fn handle(&mut self, event: ShellEvent) -> EventOutcome {
        let name = event.name();
        let result = match event {
            ShellEvent::ShowRequested(source) => self.on_show_requested(source),
            ShellEvent::Menu(command) => self.on_menu(command),
            ShellEvent::CloseRequested => self.on_close_requested(),
            ShellEvent::FocusChanged(focused) => self.on_focus_changed(focused),
            ShellEvent::SystemThemeChanged { dark } => self.on_system_theme_changed(dark),
            ShellEvent::Content(content) => self.on_content(content),
            ShellEvent::WindowDestroyed => self.on_window_destroyed(),
            ShellEvent::ExitRequested => self.on_exit_requested(),
        };

        match result {
            Ok(outcome) => {
                tracing::debug!("Shell event {} -> {:?}", name, outcome);
                outcome
            }
            Err(e) => {
                tracing::warn!("Shell event {} failed: {}", name, e);
                EventOutcome::Failed
            }
        }
    }

    fn transition(&mut self, to: WindowLifecycle) {
        let transition = WindowTransition::new(self.lifecycle, to);
        if transition.is_change() {
            let dwell = self
                .last_transition
                .as_ref()
                .map(|previous| transition.dwell_since(previous).num_seconds())
                .unwrap_or(0);
            tracing::info!(
                "Main window {} -> {} after {}s",
                transition.from.as_str(),
                transition.to.as_str(),
                dwell
            );
        }
        self.lifecycle = to;
        self.last_transition = Some(transition);
    }

    // ---- 窗口生命周期 ----

    fn on_show_requested(&mut self, source: ShowSource) -> AppResult<EventOutcome> {
        tracing::debug!("Show requested by {:?}", source);
        self.show_window()
    }

    /// 窗口存在时只显示并聚焦，否则创建
    fn show_window(&mut self) -> AppResult<EventOutcome> {
        if self.quitting || self.lifecycle.is_terminal() {
            return Ok(EventOutcome::Ignored);
        }

        if self.window.exists() {
            self.window.show()?;
        } else {
            let mut config = self
                .window_config
                .clone()
                .with_always_on_top(self.always_on_top);
            config.spellcheck_language = self.spellcheck_language;
            self.window.create(&config)?;
            self.attention.reset();
            self.zoom = ZoomLevel::reset();
        }

        self.transition(WindowLifecycle::Visible);
        Ok(EventOutcome::Handled)
    }

    fn on_close_requested(&mut self) -> AppResult<EventOutcome> {
        if self.quitting {
            self.transition(WindowLifecycle::Destroyed);
            return Ok(EventOutcome::Close(CloseDecision::Proceed));
        }

        self.window.hide()?;
        self.transition(WindowLifecycle::Hidden);
        Ok(EventOutcome::Close(CloseDecision::Hide))
    }

    fn on_window_destroyed(&mut self) -> AppResult<EventOutcome> {
        self.attention.reset();
        self.pending_suggestions.clear();
        if self.quitting {
            self.transition(WindowLifecycle::Destroyed);
        } else {
            // 被系统销毁，下次显示时重新创建
            self.transition(WindowLifecycle::Absent);
        }
        Ok(EventOutcome::Handled)
    }

    fn on_exit_requested(&mut self) -> AppResult<EventOutcome> {
        self.quitting = true;
        Ok(EventOutcome::Handled)
    }

    fn quit(&mut self) -> AppResult<EventOutcome> {
        tracing::info!("Quit requested");
        self.quitting = true;
        self.process.exit(0);
        Ok(EventOutcome::Handled)
    }

    fn on_focus_changed(&mut self, focused: bool) -> AppResult<EventOutcome> {
        if !focused {
            return Ok(EventOutcome::Ignored);
        }
        match self.attention.clear() {
            AttentionOutcome::Cleared => Ok(EventOutcome::Handled),
            _ => Ok(EventOutcome::Ignored),
        }
    }

    // ---- 外观 ----

    fn set_dark_mode(&mut self, enable: bool) -> AppResult<EventOutcome> {
        if !self.lifecycle.has_window() {
            return Ok(EventOutcome::Ignored);
        }
        self.appearance.set_dark_mode(enable);
        Ok(EventOutcome::Handled)
    }

    fn on_system_theme_changed(&mut self, dark: bool) -> AppResult<EventOutcome> {
        if !self.theme_policy.follows_system() {
            tracing::debug!("Ignoring system theme change, policy is manual");
            return Ok(EventOutcome::Ignored);
        }
        self.set_dark_mode(dark)
    }

    // ---- 置顶 ----

    fn toggle_always_on_top(&mut self) -> AppResult<EventOutcome> {
        self.always_on_top = !self.always_on_top;
        let always_on_top = self.always_on_top;

        // 被点击的勾选项已由系统切换，这里统一写入，保证两处一致
        if let Some(tray) = &self.tray {
            if let Err(e) = tray.set_always_on_top_checked(always_on_top) {
                tracing::warn!("Failed to sync tray check item: {}", e);
            }
        }
        if let Some(app_menu) = &self.app_menu {
            if let Err(e) = app_menu.set_always_on_top_checked(always_on_top) {
                tracing::warn!("Failed to sync app menu check item: {}", e);
            }
        }

        if self.window.exists() {
            self.window.set_always_on_top(always_on_top)?;
        }
        tracing::debug!("Always on top: {}", always_on_top);
        Ok(EventOutcome::Handled)
    }

    // ---- 菜单 ----

    fn on_menu(&mut self, command: MenuCommand) -> AppResult<EventOutcome> {
        match command {
            MenuCommand::Tray(action) => self.on_tray_action(action),
            MenuCommand::App(action) => self.on_app_menu_action(action),
            MenuCommand::Context(command) => self.on_context_command(command),
        }
    }

    fn on_tray_action(&mut self, action: TrayAction) -> AppResult<EventOutcome> {
        match action {
            TrayAction::Show => self.show_window(),
            TrayAction::Reload => self.reload(),
            TrayAction::DarkMode => self.set_dark_mode(true),
            TrayAction::ToggleAlwaysOnTop => self.toggle_always_on_top(),
            TrayAction::Quit => self.quit(),
        }
    }

    fn on_app_menu_action(&mut self, action: AppMenuAction) -> AppResult<EventOutcome> {
        match action {
            AppMenuAction::DarkMode => self.set_dark_mode(true),
            AppMenuAction::LightMode => self.set_dark_mode(false),
            AppMenuAction::ToggleAlwaysOnTop => self.toggle_always_on_top(),
            AppMenuAction::Reload => self.reload(),
            AppMenuAction::ToggleDevTools => {
                if !self.window.exists() {
                    return Ok(EventOutcome::Ignored);
                }
                self.window.toggle_devtools()?;
                Ok(EventOutcome::Handled)
            }
            AppMenuAction::ZoomIn => self.set_zoom(self.zoom.zoom_in()),
            AppMenuAction::ZoomOut => self.set_zoom(self.zoom.zoom_out()),
            AppMenuAction::ResetZoom => self.set_zoom(ZoomLevel::reset()),
            AppMenuAction::Quit => self.quit(),
        }
    }

    fn reload(&mut self) -> AppResult<EventOutcome> {
        if !self.window.exists() {
            return Ok(EventOutcome::Ignored);
        }
        self.window.reload()?;
        Ok(EventOutcome::Handled)
    }

    fn set_zoom(&mut self, zoom: ZoomLevel) -> AppResult<EventOutcome> {
        if !self.window.exists() {
            return Ok(EventOutcome::Ignored);
        }
        self.window.set_zoom(zoom.factor())?;
        self.zoom = zoom;
        Ok(EventOutcome::Handled)
    }

    // ---- 页面内容 ----

    fn on_content(&mut self, event: ContentEvent) -> AppResult<EventOutcome> {
        match event {
            ContentEvent::TitleChanged(title) => self.on_title_changed(&title),
            ContentEvent::PageLoaded(url) => {
                tracing::debug!("Page loaded: {}", url);
                // 重新加载会丢失注入的样式和语言设置
                self.appearance.reapply();
                self.window.set_spellcheck_language(self.spellcheck_language)?;
                Ok(EventOutcome::Handled)
            }
            ContentEvent::ContextMenuRequested(params) => self.on_context_menu(&params),
            ContentEvent::ContextMenuCommand(command) => self.on_context_command(command),
        }
    }

    fn on_title_changed(&mut self, title: &str) -> AppResult<EventOutcome> {
        let update = BadgeUpdate::from_title(title);
        if let Err(e) = self.window.set_badge_count(update.badge()) {
            tracing::debug!("Badge not updated: {}", e);
        }

        match update {
            BadgeUpdate::Unread(count) => {
                let focused = self.window.is_focused()?;
                let minimized = self.window.is_minimized()?;
                if !focused || minimized {
                    tracing::debug!("{} unread while in background", count);
                    self.attention.demand();
                }
            }
            BadgeUpdate::Cleared => {
                self.attention.clear();
            }
        }
        Ok(EventOutcome::Handled)
    }

    fn on_context_menu(&mut self, params: &ContextMenuParams) -> AppResult<EventOutcome> {
        if !self.window.exists() {
            return Ok(EventOutcome::Ignored);
        }
        let model = ContextMenuModel::build(
            params,
            &self.spellcheck_languages,
            self.spellcheck_language,
        );
        self.pending_suggestions = model.suggestions.clone();
        self.window.popup_context_menu(&model)?;
        Ok(EventOutcome::Handled)
    }

    fn on_context_command(&mut self, command: ContextMenuCommand) -> AppResult<EventOutcome> {
        match command {
            ContextMenuCommand::SetSpellcheckLanguage(language) => {
                self.spellcheck_language = language;
                tracing::debug!("Spellcheck language: {}", language.code());
                if self.window.exists() {
                    self.window.set_spellcheck_language(language)?;
                }
                Ok(EventOutcome::Handled)
            }
            ContextMenuCommand::ReplaceMisspelling(index) => {
                let Some(replacement) = self.pending_suggestions.get(index).cloned() else {
                    return Ok(EventOutcome::Ignored);
                };
                self.window.eval(&replace_misspelling_script(&replacement)?)?;
                Ok(EventOutcome::Handled)
            }
        }
    }
}
