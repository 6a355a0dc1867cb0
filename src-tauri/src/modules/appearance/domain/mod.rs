// Appearance Domain Layer

pub mod styles;

pub use styles::*;
