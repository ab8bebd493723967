//! Byte ranges into a line of text.
//!
//! All markers the converter looks for are ASCII, so every range produced
//! by the scanners starts and ends on a `char` boundary.

/// Half-open byte range into a `str`.
///
/// # Example
/// ```
/// use marklite::Range;
///
/// let line = "see [docs](https://docs.rs)";
/// let range = Range::new(5, 9);
/// assert_eq!(range.slice(line), "docs");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the text this range refers to.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}
