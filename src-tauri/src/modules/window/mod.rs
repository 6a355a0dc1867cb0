// Window Module
//
// 主窗口模块，采用六边形架构
//
// 层次结构:
// - domain: 窗口配置、生命周期、徽标解析、导航与权限策略、右键菜单模型、页面注入脚本
// - ports: 主窗口与外部打开的抽象接口
// - infrastructure: Tauri 窗口适配器、opener 插件实现、WebKitGTK/WebView2 原生回调

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Domain
pub use domain::{
    extract_unread_count, initialization_script, permission_gate_script, replace_misspelling_script,
    spellcheck_language_script, BadgeUpdate, ContentEvent, ContextMenuCommand,
    ContextMenuEntry, ContextMenuModel, ContextMenuParams, ContextMenuSource, NavigationDecision, NavigationGuard,
    PermissionDecision, PermissionKind, SpellcheckLanguage, WindowConfig, WindowLabel,
    WindowLifecycle, WindowTransition, ZoomLevel,
};

// Ports
pub use ports::{ExternalOpener, WindowError, WindowPort};

// Infrastructure
pub use infrastructure::{ContentEventSink, TauriOpener, TauriWindowAdapter};
