//! Resource limits and sizing constants.
//!
//! These bound the memory a converter retains between calls and the
//! capacity it reserves up front for a single conversion.

/// Number of idle buffers a pool keeps.
pub const POOL_CAPACITY: usize = 10;

/// Upper bound on a configured pool capacity.
pub const MAX_POOL_CAPACITY: usize = 256;

/// Buffers whose capacity reaches this many bytes are dropped on release
/// instead of being pooled.
pub const MAX_POOLED_CAPACITY: usize = 64 * 1024;

/// Smallest capacity hint the size estimator produces.
pub const MIN_ESTIMATE: usize = 512;

/// Largest capacity hint the size estimator produces.
pub const MAX_ESTIMATE: usize = 1024 * 1024;

/// Extra output bytes expected per `#` (`<h1></h1>` vs `#`).
pub const HEADING_OVERHEAD: usize = 10;

/// Extra output bytes expected per `](` (`<a href=""></a>` vs `[]()`).
pub const LINK_OVERHEAD: usize = 20;

/// Extra output bytes expected per `**` (`<strong></strong>` vs `**`).
pub const BOLD_OVERHEAD: usize = 15;

/// Extra output bytes expected per `*` (`<em></em>` vs `*`).
pub const ITALIC_OVERHEAD: usize = 10;

/// Extra output bytes expected per fence (`<pre><code></code></pre>` vs the fence).
pub const FENCE_OVERHEAD: usize = 30;
