//! Link configuration

use crate::error::LinkError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix (`LINK_DEVICE`, `LINK_BAUD_RATE`, ...)
pub const ENV_PREFIX: &str = "LINK";

/// Serial link configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Serial device path (e.g., "/dev/ttyUSB0" or "COM3")
    pub device: String,

    /// Baud rate
    pub baud_rate: u32,

    /// Bytes requested from the transport per read
    pub read_chunk: usize,

    /// Consumer drain period (milliseconds)
    pub drain_interval_ms: u64,

    /// Max log level ("trace" through "error")
    pub log_level: String,

    /// Emit JSON log lines instead of plain text
    pub log_json: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            device: "/dev/ttyUSB0".to_string(),
            baud_rate: 57_600,
            read_chunk: 64,
            drain_interval_ms: 10,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl LinkConfig {
    /// Load configuration: defaults, then an optional file, then `LINK_*` env vars
    pub fn load(path: Option<&Path>) -> Result<Self, LinkError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&LinkConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let loaded: LinkConfig = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject values the receive path cannot run with
    pub fn validate(&self) -> Result<(), LinkError> {
        if self.device.is_empty() {
            return Err(LinkError::Config("device must not be empty".into()));
        }
        if self.baud_rate == 0 {
            return Err(LinkError::Config("baud_rate must be > 0".into()));
        }
        if self.read_chunk == 0 {
            return Err(LinkError::Config("read_chunk must be > 0".into()));
        }
        if self.drain_interval_ms == 0 {
            return Err(LinkError::Config("drain_interval_ms must be > 0".into()));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> Result<tracing::Level, LinkError> {
        self.log_level
            .parse()
            .map_err(|_| LinkError::Config(format!("unknown log level: {}", self.log_level)))
    }
}
