//! Command-line interface module.

mod args;
pub mod check;
pub mod deploy;
pub mod init;
pub mod publish;
pub mod render;

pub use args::{Cli, Commands};
