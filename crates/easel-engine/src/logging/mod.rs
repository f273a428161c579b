//! Logging setup.
//!
//! The scene logs through the `log` facade only. Binaries pick the backend;
//! [`init_logging`] installs `env_logger` with sensible defaults.

mod init;

pub use init::{init_logging, LoggingConfig};
