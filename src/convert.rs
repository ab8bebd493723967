//! The conversion driver.
//!
//! A [`Converter`] owns a buffer pool and renders documents line by line:
//! check out a buffer sized by the estimator, feed every block event through
//! the writer, copy the HTML out and return the buffer to the pool.

use serde::Serialize;

use crate::block::BlockParser;
use crate::estimate::estimate_html_size;
use crate::inline::InlineFormatter;
use crate::options::Options;
use crate::pool::{BufferPool, PoolConfig};
use crate::render::{HtmlWriter, render_block_event};
use crate::word_count;

/// HTML plus the word count of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub html: String,
    pub word_count: usize,
}

/// Markdown to HTML converter with a reusable buffer pool.
///
/// A converter can be shared between threads; every conversion works in a
/// buffer it has checked out exclusively.
///
/// # Example
/// ```
/// use marklite::Converter;
///
/// let converter = Converter::new();
/// let out = converter.convert("# Hi\n\nSome **bold** words");
/// assert_eq!(out.html, "<h1>Hi</h1>\n<p>Some <strong>bold</strong> words</p>\n");
/// assert_eq!(out.word_count, 5);
/// ```
#[derive(Debug, Default)]
pub struct Converter {
    pool: BufferPool,
}

impl Converter {
    /// Create a converter with the default pool limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter whose pool is sized by `options`.
    pub fn with_options(options: &Options) -> Self {
        Self::with_pool_config(options.pool_config())
    }

    /// Create a converter with explicit pool limits.
    pub fn with_pool_config(config: PoolConfig) -> Self {
        Self {
            pool: BufferPool::with_config(config),
        }
    }

    /// The converter's buffer pool.
    #[inline]
    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Convert `markdown` to HTML and count its words.
    pub fn convert(&self, markdown: &str) -> Conversion {
        Conversion {
            html: self.to_html(markdown),
            word_count: word_count(markdown),
        }
    }

    /// Convert `markdown` to HTML.
    pub fn to_html(&self, markdown: &str) -> String {
        let mut buf = self.pool.checkout(estimate_html_size(markdown));
        render_into(markdown, &mut buf);
        buf.as_str().to_owned()
    }

    /// Convert `markdown` to HTML, replacing the contents of `out`.
    ///
    /// Renders straight into `out`; no pooled buffer is used.
    pub fn to_html_into(&self, markdown: &str, out: &mut String) {
        out.clear();
        out.reserve(estimate_html_size(markdown));
        render_into(markdown, out);
    }
}

/// Render every block of `markdown`, appending to `out`.
fn render_into(markdown: &str, out: &mut String) {
    let mut writer = HtmlWriter::new(out);
    let mut inline = InlineFormatter::new();
    let mut parser = BlockParser::new(markdown);
    for event in parser.by_ref() {
        render_block_event(&event, &mut writer, &mut inline);
    }
    if parser.in_code_block() {
        log::debug!("unterminated code fence, leaving <pre><code> open");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::POOL_CAPACITY;

    #[test]
    fn test_convert_counts_raw_words() {
        let out = Converter::new().convert("# A **b**\n- c");
        assert_eq!(out.html, "<h1>A **b**</h1>\n<li>c</li>\n");
        assert_eq!(out.word_count, 5);
    }

    #[test]
    fn test_buffer_returns_to_pool() {
        let converter = Converter::new();
        converter.to_html("# One");
        converter.to_html("# Two");
        assert_eq!(converter.pool().idle(), POOL_CAPACITY);
    }

    #[test]
    fn test_large_output_buffer_not_pooled() {
        let converter = Converter::new();
        let big = "word ".repeat(20_000);
        let html = converter.to_html(&big);
        assert!(html.starts_with("<p>word word"));
        // The oversized buffer was dropped rather than pooled.
        assert_eq!(converter.pool().idle(), POOL_CAPACITY - 1);
    }

    #[test]
    fn test_to_html_into_replaces_contents() {
        let converter = Converter::new();
        let mut out = String::from("stale");
        converter.to_html_into("> q", &mut out);
        assert_eq!(out, "<blockquote>q</blockquote>\n");
    }

    #[test]
    fn test_state_does_not_leak_between_calls() {
        let converter = Converter::new();
        assert_eq!(converter.to_html("```"), "<pre><code>");
        assert_eq!(converter.to_html("# A"), "<h1>A</h1>\n");
    }

    #[test]
    fn test_zero_capacity_pool_still_converts() {
        let converter = Converter::with_pool_config(PoolConfig {
            capacity: 0,
            max_retained: 0,
        });
        assert_eq!(converter.to_html("*x*"), "<p><em>x</em></p>\n");
        assert_eq!(converter.pool().idle(), 0);
    }
}
