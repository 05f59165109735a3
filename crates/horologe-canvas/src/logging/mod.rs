//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade; the
//! rest of the workspace only ever uses `log::...` macros.

mod init;

pub use init::{LoggingConfig, init_logging};
