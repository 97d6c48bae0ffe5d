//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use synthmon_core::error::{Result, SynthmonError};

pub use schema::{SamplingSection, ServerConfig, ServerSection};

/// Load config from `path`. A missing file is not an error: the defaults
/// reproduce the built-in constants (listen on 8080, one sample per second,
/// queue capacity 10), so the server runs with no config at all.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ServerConfig::default()),
        Err(e) => Err(SynthmonError::Config(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| SynthmonError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
