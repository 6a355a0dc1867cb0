// Icon Ports
//
// 图标查找端口定义

pub mod icon_source;

pub use icon_source::*;
