// Shell Module
//
// 应用会话模块，采用六边形架构
//
// 层次结构:
// - domain: 会话状态机、事件、应用菜单布局
// - ports: 进程、应用菜单、快捷键抽象
// - infrastructure: Tauri 实现

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{
    AppMenuAction, AppMenuConfig, AppMenuElement, CloseDecision, EventOutcome, MenuCommand,
    ShellEvent, ShellSession, ShowSource,
};
pub use infrastructure::{
    register_show_shortcut, unregister_all, ShortcutHandler, TauriAppMenu, TauriProcess,
};
pub use ports::{AppMenuError, AppMenuPort, ProcessPort, ShortcutError};
