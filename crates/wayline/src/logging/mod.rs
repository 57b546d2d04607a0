//! Logging utilities.
//!
//! Centralizes logger initialization. The library itself only speaks through
//! the `log` facade; hosts that already install their own backend can skip
//! this module entirely.

mod init;

pub use init::{init_logging, LoggingConfig};
