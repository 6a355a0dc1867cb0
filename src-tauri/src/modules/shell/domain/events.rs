// Shell Events
//
// 会话处理的所有事件及处理结果

use super::menu::MenuCommand;
use crate::modules::window::ContentEvent;

/// 显示窗口请求的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowSource {
    Launch,
    TrayClick,
    Shortcut,
    SecondInstance,
    /// macOS 点击 Dock 图标
    Reopen,
}

/// 会话事件
#[derive(Debug, Clone)]
pub enum ShellEvent {
    ShowRequested(ShowSource),
    Menu(MenuCommand),
    CloseRequested,
    FocusChanged(bool),
    SystemThemeChanged { dark: bool },
    Content(ContentEvent),
    WindowDestroyed,
    ExitRequested,
}

impl ShellEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ShellEvent::ShowRequested(_) => "show-requested",
            ShellEvent::Menu(_) => "menu",
            ShellEvent::CloseRequested => "close-requested",
            ShellEvent::FocusChanged(_) => "focus-changed",
            ShellEvent::SystemThemeChanged { .. } => "system-theme-changed",
            ShellEvent::Content(_) => "content",
            ShellEvent::WindowDestroyed => "window-destroyed",
            ShellEvent::ExitRequested => "exit-requested",
        }
    }
}

/// 关闭请求的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// 阻止关闭，窗口已隐藏
    Hide,
    /// 正在退出，允许销毁
    Proceed,
}

/// 事件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    Close(CloseDecision),
    /// 当前状态下事件没有效果
    Ignored,
    /// 会话忙，事件稍后在主线程处理
    Deferred,
    /// 处理失败，错误已记录
    Failed,
}

impl EventOutcome {
    /// 窗口关闭请求是否应被阻止
    pub fn prevents_close(&self) -> bool {
        !matches!(self, EventOutcome::Close(CloseDecision::Proceed))
    }
}
