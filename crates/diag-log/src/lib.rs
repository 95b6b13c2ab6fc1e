//! # Diagnostic console log
//!
//! Human-facing, ANSI-styled console output gated by a single enabled flag.
//! Each semantic channel (`ok`, `error`, `banner`, ...) is bound to one fixed
//! entry of the [`Color`] table. This is not a structured logging pipeline;
//! operational logs go through `tracing`.
//!
//! ```rust
//! use diag_log::{Log, LogConfig};
//!
//! let log = Log::from_config(&LogConfig::from_env());
//! log.banner(&[&"api"]);
//! log.disable();
//! log.error(&[&"suppressed"]);
//! ```

mod color;
mod config;
mod log;
mod sink;

pub use color::{Channel, Color};
pub use config::{parse_flag, LogConfig, DEBUG_MODE_ENV, NO_COLOR_ENV};
pub use log::Log;
pub use sink::{LogSink, MemorySink, StdoutSink};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LogError {
    #[error("Unknown log color: {name}")]
    UnknownColor { name: String },
}
