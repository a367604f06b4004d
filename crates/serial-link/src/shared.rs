//! Mutex-guarded buffer handle shared by producer and consumer

use ring_buffer::{BufferStats, RingBuffer, BSIZE};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a single [`RingBuffer`]
///
/// Every call takes the lock for the duration of one buffer operation, so the
/// empty-read and evict-oldest semantics are exactly those of the inner buffer.
#[derive(Debug)]
pub struct SharedRingBuffer<T, const N: usize = BSIZE> {
    inner: Arc<Mutex<RingBuffer<T, N>>>,
}

impl<T, const N: usize> Clone for SharedRingBuffer<T, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Copy + Default, const N: usize> SharedRingBuffer<T, N> {
    /// Create a handle to a fresh, empty buffer
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RingBuffer::new())),
        }
    }

    // Operations never leave the buffer half-updated, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, RingBuffer<T, N>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reset to the empty state
    pub fn initialize(&self) {
        self.lock().initialize();
    }

    /// Append one value
    pub fn write_back(&self, value: T) {
        self.lock().write_back(value);
    }

    /// Append a run of values under one lock, returning how many overflowed
    pub fn write_all(&self, values: &[T]) -> u32 {
        let mut buffer = self.lock();
        let before = buffer.overflow();
        for &value in values {
            buffer.write_back(value);
        }
        buffer.overflow() - before
    }

    /// Remove and return the oldest value, or the sentinel when empty
    pub fn read_front(&self) -> T {
        self.lock().read_front()
    }

    /// Next value without removing it
    pub fn peek(&self) -> T {
        self.lock().peek()
    }

    /// Raw head index
    pub fn read_head(&self) -> usize {
        self.lock().read_head()
    }

    /// Number of unread values
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Overflow counter
    pub fn overflow(&self) -> u32 {
        self.lock().overflow()
    }

    /// Move up to `dst.len()` values out, oldest first
    pub fn read_into(&self, dst: &mut [T]) -> usize {
        self.lock().read_into(dst)
    }

    /// Counter snapshot taken under a single lock
    pub fn stats(&self) -> BufferStats {
        self.lock().stats()
    }
}

impl<T: Copy + Default, const N: usize> Default for SharedRingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
