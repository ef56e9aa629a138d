//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use timedecho_core::error::{EchoError, Result};

pub use schema::{EchoConfig, LoggingSection, ServerSection};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "TIMEDECHO_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "timedecho.yaml";

pub fn load_from_file(path: &str) -> Result<EchoConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| EchoError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<EchoConfig> {
    let cfg: EchoConfig = serde_yaml::from_str(s)
        .map_err(|e| EchoError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// `$TIMEDECHO_CONFIG` if set, else `timedecho.yaml` if it exists, else defaults.
pub fn load_from_env() -> Result<EchoConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH),
        Err(_) => Ok(EchoConfig::default()),
    }
}
