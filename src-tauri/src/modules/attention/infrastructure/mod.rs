// Attention Infrastructure Layer

pub mod tauri_attention;

pub use tauri_attention::*;
