// Attention Ports

pub mod attention_port;

pub use attention_port::*;
