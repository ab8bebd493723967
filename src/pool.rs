//! Bounded pool of reusable output buffers.
//!
//! Checkout and check-in never block: the idle list sits behind a mutex that
//! is only ever taken with `try_lock`. A contended or empty checkout falls
//! back to a fresh allocation, and a contended or full check-in drops the
//! buffer. Buffers that grew past the retention ceiling are never pooled.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, TryLockError};

use crate::limits::{MAX_POOLED_CAPACITY, POOL_CAPACITY};

/// Pool sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of idle buffers kept.
    pub capacity: usize,
    /// Buffers with at least this much capacity are dropped on release.
    pub max_retained: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            capacity: POOL_CAPACITY,
            max_retained: MAX_POOLED_CAPACITY,
        }
    }
}

/// A bounded collection of idle `String` buffers.
///
/// # Example
/// ```
/// use marklite::BufferPool;
///
/// let pool = BufferPool::new();
/// let mut buf = pool.acquire(1024);
/// buf.push_str("<p>hi</p>\n");
/// pool.release(buf);
/// assert_eq!(pool.idle(), 10);
/// ```
#[derive(Debug)]
pub struct BufferPool {
    idle: Mutex<Vec<String>>,
    config: PoolConfig,
}

impl BufferPool {
    /// Create a pool with the default limits, pre-filled with empty buffers.
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Create a pool with explicit limits, pre-filled with empty buffers.
    pub fn with_config(config: PoolConfig) -> Self {
        let idle = std::iter::repeat_with(String::new)
            .take(config.capacity)
            .collect();
        Self {
            idle: Mutex::new(idle),
            config,
        }
    }

    /// The limits this pool was created with.
    #[inline]
    pub fn config(&self) -> PoolConfig {
        self.config
    }

    /// Take a cleared buffer with at least `hint` bytes of capacity.
    ///
    /// Never fails and never blocks.
    pub fn acquire(&self, hint: usize) -> String {
        let pooled = self.try_idle().and_then(|mut idle| idle.pop());
        match pooled {
            Some(mut buf) => {
                buf.clear();
                buf.reserve(hint);
                log::trace!("pool: reused buffer (capacity {})", buf.capacity());
                buf
            }
            None => {
                log::trace!("pool: allocating fresh buffer ({hint} bytes)");
                String::with_capacity(hint)
            }
        }
    }

    /// Return a buffer to the pool.
    ///
    /// The buffer is dropped if it is too large to retain or the pool is
    /// already full.
    pub fn release(&self, mut buf: String) {
        if buf.capacity() >= self.config.max_retained {
            log::trace!("pool: dropping oversized buffer ({})", buf.capacity());
            return;
        }
        buf.clear();
        if let Some(mut idle) = self.try_idle() {
            if idle.len() < self.config.capacity {
                idle.push(buf);
                return;
            }
        }
        log::trace!("pool: full, dropping buffer");
    }

    /// Check out a buffer that returns itself to the pool when dropped.
    pub fn checkout(&self, hint: usize) -> PooledBuffer<'_> {
        PooledBuffer {
            buf: self.acquire(hint),
            pool: self,
        }
    }

    /// Number of idle buffers currently held.
    pub fn idle(&self) -> usize {
        self.idle.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn try_idle(&self) -> Option<MutexGuard<'_, Vec<String>>> {
        match self.idle.try_lock() {
            Ok(guard) => Some(guard),
            // A panic elsewhere cannot leave a Vec<String> half-updated.
            Err(TryLockError::Poisoned(e)) => Some(e.into_inner()),
            Err(TryLockError::WouldBlock) => None,
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

/// A buffer checked out of a [`BufferPool`], released on drop.
pub struct PooledBuffer<'a> {
    buf: String,
    pool: &'a BufferPool,
}

impl Deref for PooledBuffer<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}
