// Icon Domain Layer
//
// 图标查找领域层

pub mod search;
pub mod value_objects;

pub use search::*;
pub use value_objects::*;
