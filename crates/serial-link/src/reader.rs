//! Async byte producer

use crate::error::LinkError;
use crate::shared::SharedRingBuffer;
use ring_buffer::BSIZE;
use std::io::ErrorKind;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info, warn};

/// Pulls bytes off a transport and appends them to a shared buffer
pub struct ByteReader<R, const N: usize = BSIZE> {
    /// Serial port, socket, or any other byte source
    transport: R,
    /// Destination buffer
    buffer: SharedRingBuffer<u8, N>,
    /// Bytes requested per read
    chunk: usize,
}

impl<R: AsyncRead + Unpin, const N: usize> ByteReader<R, N> {
    /// Create a new reader
    pub fn new(transport: R, buffer: SharedRingBuffer<u8, N>, chunk: usize) -> Self {
        Self {
            transport,
            buffer,
            chunk: chunk.max(1),
        }
    }

    /// Read until EOF, returning the total number of bytes received
    pub async fn run(mut self) -> Result<u64, LinkError> {
        let mut scratch = vec![0u8; self.chunk];
        let mut total: u64 = 0;

        info!("Byte reader started (chunk {} bytes, buffer {} bytes)", self.chunk, N);

        loop {
            let n = match self.transport.read(&mut scratch).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("Transport read failed after {} bytes: {}", total, e);
                    return Err(e.into());
                }
            };

            let overflowed = self.buffer.write_all(&scratch[..n]);
            total += n as u64;

            metrics::counter!("serial_link.bytes_received").increment(n as u64);
            metrics::gauge!("serial_link.buffer_length").set(self.buffer.len() as f64);

            if overflowed > 0 {
                metrics::counter!("serial_link.bytes_overflowed").increment(u64::from(overflowed));
                warn!(
                    "Receive buffer full: {} unread bytes evicted (total overflow {})",
                    overflowed,
                    self.buffer.overflow()
                );
            }

            debug!("Received {} bytes", n);
        }

        info!("Transport closed after {} bytes", total);
        Ok(total)
    }
}
