// Window Infrastructure Layer

pub mod native;
pub mod opener;
pub mod tauri_adapter;

pub use opener::*;
pub use tauri_adapter::*;
