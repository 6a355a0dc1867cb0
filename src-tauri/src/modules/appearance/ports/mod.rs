// Appearance Ports Layer

pub mod style_port;

pub use style_port::*;
