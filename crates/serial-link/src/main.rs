//! Serial link monitor: drains the receive buffer and reports its health

use serial_link::{init_logging, open_port, ByteReader, LinkConfig, SharedRingBuffer, BSIZE};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = LinkConfig::load(config_path.as_deref())?;
    init_logging(&config)?;

    info!("=== Serial link monitor v{} ===", env!("CARGO_PKG_VERSION"));

    let port = open_port(&config)?;
    let buffer: SharedRingBuffer<u8> = SharedRingBuffer::new();
    let reader = ByteReader::new(port, buffer.clone(), config.read_chunk);
    let mut reader_task = tokio::spawn(reader.run());

    let mut ticker = tokio::time::interval(Duration::from_millis(config.drain_interval_ms));
    let mut scratch = [0u8; BSIZE];

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let drained = buffer.read_into(&mut scratch);
                if drained > 0 {
                    let stats = buffer.stats();
                    info!(
                        "Drained {} bytes (length {}, head {}, overflow {})",
                        drained, stats.length, stats.head, stats.overflow
                    );
                    debug!("{:02X?}", &scratch[..drained]);
                }
            }
            result = &mut reader_task => {
                match result {
                    Ok(Ok(total)) => info!("Reader finished after {} bytes", total),
                    Ok(Err(e)) => error!("Reader failed: {}", e),
                    Err(e) => error!("Reader task aborted: {}", e),
                }
                break;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                reader_task.abort();
                break;
            }
        }
    }

    let stats = buffer.stats();
    info!("Final buffer state: {:?}", stats);
    Ok(())
}
