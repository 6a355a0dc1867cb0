// Tray Infrastructure Layer

pub mod tauri_handler;

pub use tauri_handler::*;
