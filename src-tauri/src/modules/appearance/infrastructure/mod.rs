// Appearance Infrastructure Layer

pub mod webview_styles;

pub use webview_styles::*;
