// Tray Module
//
// 系统托盘模块，管理托盘图标和菜单
//
// 功能：
// - 托盘图标（超过 24x24 时缩小，无法使用时退回占位图）
// - 托盘菜单（Show / Reload / Dark Mode / Always On Top / Quit）
// - 左键点击显示窗口

pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use domain::*;
pub use infrastructure::*;
pub use ports::*;
