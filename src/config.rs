//! Server Configuration
//!
//! Resolves the listen address and log level from command-line flags, then
//! environment variables, then built-in defaults.
//!
//! ```text
//! string_analyzer [--bind <addr:port>] [--log-level <level>]
//! ANALYZER_BIND=0.0.0.0:8000 ANALYZER_LOG=debug string_analyzer
//! ```

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::Level;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const ENV_BIND: &str = "ANALYZER_BIND";
pub const ENV_LOG: &str = "ANALYZER_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub log_level: Level,
}

impl ServerConfig {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// Resolves configuration from `args` (program name excluded) and an env lookup.
    ///
    /// Unknown flags are ignored. A known flag without a value is an error.
    pub fn parse<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind: Option<String> = None;
        let mut log: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = Some(flag_value(args, i)?);
                    i += 2;
                }
                "--log-level" => {
                    log = Some(flag_value(args, i)?);
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let bind = bind
            .or_else(|| env(ENV_BIND))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;

        let log_level = match log.or_else(|| env(ENV_LOG)) {
            Some(level) => level
                .parse::<Level>()
                .map_err(|_| anyhow::anyhow!("Invalid log level: {}", level))?,
            None => Level::INFO,
        };

        Ok(Self {
            bind_addr,
            log_level,
        })
    }
}

fn flag_value(args: &[String], i: usize) -> Result<String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", args[i]))
}
