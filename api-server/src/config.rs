//! Process configuration, read from flags or the environment.
//!
//! `.env` files are loaded by the binary before parsing, so every value can
//! also come from there.

use clap::{ArgAction, Parser};
use diag_log::{parse_flag, LogConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "api-server", about = "HTTP API serving uniform response envelopes")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind_addr: String,

    /// Initial state of the diagnostic console log
    #[arg(
        long,
        env = "DEBUGG_MODE",
        default_value = "true",
        value_parser = parse_debug_mode,
        action = ArgAction::Set
    )]
    pub debug_mode: bool,

    /// Print diagnostic output without ANSI styling. Any non-empty
    /// `NO_COLOR` value counts, whatever it says.
    #[arg(long, env = "NO_COLOR", num_args = 0..=1, default_missing_value = "1")]
    pub no_color: Option<String>,
}

fn parse_debug_mode(value: &str) -> Result<bool, String> {
    Ok(parse_flag(value))
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            enabled: self.debug_mode,
            color: self.no_color.is_none(),
        }
    }
}
