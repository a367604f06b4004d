//! Circular Buffer
//!
//! Fixed-capacity FIFO used to stage bytes between the serial receive path
//! and the protocol parsers. No allocation, no locking.

mod buffer;

pub use buffer::RingBuffer;

use serde::{Deserialize, Serialize};

/// Default buffer capacity (serial receive buffer size on the autopilot)
pub const BSIZE: usize = 512;

/// Point-in-time snapshot of a buffer, suitable for telemetry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferStats {
    /// Number of unread elements
    pub length: u32,
    /// Raw storage index of the next element to be read
    pub head: u32,
    /// Writes that landed while the buffer was full
    pub overflow: u32,
    /// Fixed capacity of the buffer
    pub capacity: u32,
}
