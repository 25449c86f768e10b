//! Logging utilities.
//!
//! Centralizes logger initialization. Only the `log` facade appears in
//! engine and demo code; `env_logger` is the backend wired up here.

mod init;

pub use init::{init_logging, LoggingConfig};
