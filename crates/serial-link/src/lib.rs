//! Serial Link Receive Path
//!
//! Feeds bytes from a serial transport into a shared circular buffer and
//! hands them to consumers. The buffer itself lives in `ring-buffer`; this
//! crate adds the locking, the async producer, configuration and logging.

mod config;
mod error;
mod reader;
mod shared;
mod telemetry;

pub use crate::config::{LinkConfig, ENV_PREFIX};
pub use error::LinkError;
pub use reader::ByteReader;
pub use ring_buffer::{BufferStats, RingBuffer, BSIZE};
pub use shared::SharedRingBuffer;
pub use telemetry::{decode_stats, encode_stats};

use tokio_serial::{SerialPortBuilderExt, SerialStream};
use tracing::info;

/// Open the configured serial device for async reads
pub fn open_port(config: &LinkConfig) -> Result<SerialStream, LinkError> {
    info!("Opening {} at {} baud", config.device, config.baud_rate);
    let port = tokio_serial::new(&config.device, config.baud_rate).open_native_async()?;
    Ok(port)
}

/// Initialize logging
pub fn init_logging(config: &LinkConfig) -> Result<(), LinkError> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_target(true);

    let result = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| LinkError::Logging(e.to_string()))
}
