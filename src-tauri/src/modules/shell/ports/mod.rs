// Shell Ports Layer

pub mod shell_ports;

pub use shell_ports::*;
