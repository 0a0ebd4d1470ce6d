//! Utility modules shared across commands.

pub mod exec;
pub mod git;
pub mod path;
