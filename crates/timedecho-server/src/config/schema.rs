use std::net::SocketAddr;

use serde::Deserialize;
use timedecho_core::error::{EchoError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EchoConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl EchoConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(EchoError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.server.listen.parse().map_err(|e| {
            EchoError::BadRequest(format!(
                "server.listen must be a valid SocketAddr ({}): {e}",
                self.server.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Upper bound on blocking handlers running at once.
    #[serde(default = "default_blocking_workers")]
    pub blocking_workers: usize,

    /// Optional upper bound on `sleep_sec`; unset accepts any duration.
    #[serde(default)]
    pub max_sleep_sec: Option<f64>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            blocking_workers: default_blocking_workers(),
            max_sleep_sec: None,
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(EchoError::BadRequest(
                "server.listen must be a valid SocketAddr".into(),
            ));
        }
        if !(1..=1024).contains(&self.blocking_workers) {
            return Err(EchoError::BadRequest(
                "server.blocking_workers must be between 1 and 1024".into(),
            ));
        }
        if let Some(max) = self.max_sleep_sec {
            if !max.is_finite() || max <= 0.0 {
                return Err(EchoError::BadRequest(
                    "server.max_sleep_sec must be a positive number".into(),
                ));
            }
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_blocking_workers() -> usize {
    40
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Name attached to handler entry/exit events.
    #[serde(default = "default_logger")]
    pub logger: String,

    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            logger: default_logger(),
            level: default_level(),
        }
    }
}

impl LoggingSection {
    pub fn validate(&self) -> Result<()> {
        if self.logger.trim().is_empty() {
            return Err(EchoError::BadRequest("logging.logger must not be empty".into()));
        }
        if self.level.parse::<tracing::Level>().is_err() {
            return Err(EchoError::BadRequest(format!(
                "logging.level must be one of trace, debug, info, warn, error (got {})",
                self.level
            )));
        }
        Ok(())
    }
}

fn default_logger() -> String {
    "myapp".into()
}
fn default_level() -> String {
    "info".into()
}
