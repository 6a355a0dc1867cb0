// Attention Domain Layer
//
// 提醒信号领域层

pub mod value_objects;

pub use value_objects::*;
