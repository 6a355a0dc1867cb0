// Shell Domain Layer
//
// 应用会话：窗口生命周期状态机与事件处理表

pub mod events;
pub mod menu;
pub mod session;

pub use events::*;
pub use menu::*;
pub use session::*;
