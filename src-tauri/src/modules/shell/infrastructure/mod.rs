// Shell Infrastructure Layer
//
// Tauri 应用菜单、进程与全局快捷键实现

pub mod app_menu;
pub mod global_shortcut;
pub mod process;

pub use app_menu::TauriAppMenu;
pub use global_shortcut::{register_show_shortcut, unregister_all, ShortcutHandler};
pub use process::TauriProcess;
