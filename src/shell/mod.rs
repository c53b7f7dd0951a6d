//! External command execution.

pub mod command;

pub use command::capture_stdout;
