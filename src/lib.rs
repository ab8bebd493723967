//! marklite: line-oriented Markdown to HTML converter with a C ABI
//!
//! Converts a small Markdown dialect (ATX headings, `-`/`*` list items,
//! `>` quotes, fenced code, strong, emphasis, links and code spans) to HTML,
//! one line at a time.
//!
//! # Design Principles
//! - No AST: every line is classified and rendered on its own
//! - Graceful degradation: unmatched markers stay literal, nothing errors
//! - Bounded allocation: output buffers are pre-sized and pooled
//! - No escaping: text is passed through to the HTML verbatim
//!
//! The library is also built as a `cdylib`/`staticlib`; see [`ffi`] for the
//! exported C functions.

pub mod api;
pub mod block;
pub mod convert;
pub mod error;
pub mod estimate;
pub mod ffi;
pub mod inline;
pub mod limits;
pub mod options;
pub mod pool;
pub mod range;
pub mod render;

// Re-export primary types
pub use api::{
    PARSER_INFO, ParseResult, ParserInfo, convert, convert_batch, convert_with_options,
    describe, try_convert,
};
pub use block::{BlockEvent, BlockParser};
pub use convert::{Conversion, Converter};
pub use error::{Error, Result};
pub use estimate::estimate_html_size;
pub use inline::{InlineFormatter, format_inline};
pub use options::Options;
pub use pool::{BufferPool, PoolConfig, PooledBuffer};
pub use range::Range;
pub use render::HtmlWriter;

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = marklite::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    Converter::new().to_html(input)
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// This avoids allocation if the buffer has sufficient capacity.
pub fn to_html_into(input: &str, out: &mut String) {
    Converter::new().to_html_into(input, out);
}

/// Count whitespace-separated words in the raw Markdown.
///
/// Markup characters count as part of the words they touch.
///
/// # Example
/// ```
/// assert_eq!(marklite::word_count("a  b\tc\n"), 3);
/// ```
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
