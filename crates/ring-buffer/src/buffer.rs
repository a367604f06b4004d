//! Circular Buffer Implementation

use crate::{BufferStats, BSIZE};

/// Fixed-capacity circular buffer of scalar elements
///
/// Writes always succeed. Once the buffer holds `N` elements, each further
/// write evicts the oldest unread element and bumps the overflow counter, so
/// the buffer always exposes the most recent `N` values in write order.
///
/// Reads from an empty buffer return `T::default()` (zero for integers)
/// without touching any state. Check [`RingBuffer::len`] first when a genuine
/// zero has to be told apart from an empty read.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize = BSIZE> {
    /// Backing storage, owned by the buffer
    storage: [T; N],
    /// Index of the next element to be read
    head: usize,
    /// Number of unread elements
    length: usize,
    /// Writes performed while full
    overflow: u32,
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    const NONZERO_CAPACITY: () = assert!(N > 0, "RingBuffer capacity must be > 0");

    /// Create an empty buffer
    pub fn new() -> Self {
        let () = Self::NONZERO_CAPACITY;
        Self {
            storage: [T::default(); N],
            head: 0,
            length: 0,
            overflow: 0,
        }
    }

    /// Reset to the empty state, clearing the overflow counter
    pub fn initialize(&mut self) {
        self.head = 0;
        self.length = 0;
        self.overflow = 0;
    }

    /// Append a value after the most recently written element
    pub fn write_back(&mut self, value: T) {
        let back = (self.head + self.length) % N;
        self.storage[back] = value;

        if self.length < N {
            self.length += 1;
        } else {
            // Full: `back` was the oldest slot, so the next oldest is now at head + 1
            self.head = (self.head + 1) % N;
            self.overflow = self.overflow.saturating_add(1);
        }
    }

    /// Remove and return the oldest element, or the sentinel when empty
    pub fn read_front(&mut self) -> T {
        if self.length == 0 {
            return T::default();
        }

        let value = self.storage[self.head];
        self.head = (self.head + 1) % N;
        self.length -= 1;
        value
    }

    /// Return the element `read_front` would return next, without removing it
    pub fn peek(&self) -> T {
        if self.length == 0 {
            T::default()
        } else {
            self.storage[self.head]
        }
    }

    /// Raw storage index of the next element to be read
    pub fn read_head(&self) -> usize {
        self.head
    }

    /// Number of unread elements
    pub fn len(&self) -> usize {
        self.length
    }

    /// Number of writes that evicted an unread element since the last reset
    ///
    /// Saturates at `u32::MAX` instead of wrapping.
    pub fn overflow(&self) -> u32 {
        self.overflow
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.length == N
    }

    /// Get the buffer capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Move up to `dst.len()` elements out of the buffer, oldest first
    ///
    /// Returns the number of elements copied. Nothing is written to `dst`
    /// past that count, and an empty buffer copies nothing.
    pub fn read_into(&mut self, dst: &mut [T]) -> usize {
        let count = dst.len().min(self.length);

        // At most two contiguous runs: head..end, then 0..rest
        let first = count.min(N - self.head);
        dst[..first].copy_from_slice(&self.storage[self.head..self.head + first]);
        dst[first..count].copy_from_slice(&self.storage[..count - first]);

        self.head = (self.head + count) % N;
        self.length -= count;
        count
    }

    /// Snapshot the counters for telemetry
    pub fn stats(&self) -> BufferStats {
        BufferStats {
            length: to_u32(self.length),
            head: to_u32(self.head),
            overflow: self.overflow,
            capacity: to_u32(N),
        }
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
