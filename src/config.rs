use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::{AppError, Result};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
impl FromStr for LogFormat {
    type Err = AppError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!("unknown log format '{other}'"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Reads `EXCHANGE_*` variables, loading a `.env` file first if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr = lookup("EXCHANGE_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("EXCHANGE_LISTEN_ADDR: {e}")))?;
        let timeout_secs = match lookup("EXCHANGE_REQUEST_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|e| AppError::Config(format!("EXCHANGE_REQUEST_TIMEOUT_SECS: {e}")))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let log_format = match lookup("EXCHANGE_LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => LogFormat::default(),
        };
        Ok(Self {
            listen_addr,
            request_timeout: Duration::from_secs(timeout_secs),
            log_format,
        })
    }
}
