//! Compact encoding of buffer snapshots for downlink

use crate::error::LinkError;
use ring_buffer::BufferStats;

/// Encode a snapshot with postcard
pub fn encode_stats(stats: &BufferStats) -> Result<Vec<u8>, LinkError> {
    Ok(postcard::to_allocvec(stats)?)
}

/// Decode a snapshot produced by [`encode_stats`]
pub fn decode_stats(bytes: &[u8]) -> Result<BufferStats, LinkError> {
    Ok(postcard::from_bytes(bytes)?)
}
