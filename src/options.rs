//! Conversion options.
//!
//! Options only size the converter's buffer pool. They never change the
//! rendered HTML, so any payload (including garbage) produces the same
//! output as the defaults.

use serde::{Deserialize, Serialize};

use crate::limits::{MAX_POOL_CAPACITY, MAX_POOLED_CAPACITY, POOL_CAPACITY};
use crate::pool::PoolConfig;

/// Options accepted by [`convert_with_options`](crate::convert_with_options).
///
/// Deserialized from JSON; missing fields take their defaults and unknown
/// fields are ignored.
///
/// # Example
/// ```
/// use marklite::Options;
///
/// let options = Options::from_json(r#"{"pool_capacity": 2}"#);
/// assert_eq!(options.pool_capacity, 2);
/// assert_eq!(options.max_pooled_capacity, 64 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Idle buffers kept between conversions, at most [`MAX_POOL_CAPACITY`].
    pub pool_capacity: usize,
    /// Buffers that grow to this many bytes are not pooled.
    pub max_pooled_capacity: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pool_capacity: POOL_CAPACITY,
            max_pooled_capacity: MAX_POOLED_CAPACITY,
        }
    }
}

impl Options {
    /// Parse an options payload, falling back to defaults.
    ///
    /// Empty, `null`, or malformed payloads yield [`Options::default`].
    pub fn from_json(payload: &str) -> Self {
        let payload = payload.trim();
        if payload.is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<Option<Self>>(payload) {
            Ok(options) => options.unwrap_or_default(),
            Err(e) => {
                log::debug!("ignoring unparseable options payload: {e}");
                Self::default()
            }
        }
    }

    /// Pool limits derived from these options.
    ///
    /// The pool capacity is capped at [`MAX_POOL_CAPACITY`].
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            capacity: self.pool_capacity.min(MAX_POOL_CAPACITY),
            max_retained: self.max_pooled_capacity,
        }
    }
}
