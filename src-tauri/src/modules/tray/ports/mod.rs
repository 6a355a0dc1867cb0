// Tray Ports Layer

pub mod tray_port;

pub use tray_port::*;
