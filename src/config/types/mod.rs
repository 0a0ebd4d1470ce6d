//! Configuration utility types.

mod error;

pub use error::{ConfigDiagnostics, ConfigError};
