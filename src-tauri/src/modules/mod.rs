// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - appearance: 暗色模式样式注入
// - attention: 未读提醒信号
// - config: 编译期配置
// - icon: 系统图标查找
// - shell: 应用会话、应用菜单与进程生命周期
// - tray: 系统托盘模块
// - window: 主窗口与页面内容策略

pub mod appearance;
pub mod attention;
pub mod config;
pub mod icon;
pub mod shell;
pub mod tray;
pub mod window;
