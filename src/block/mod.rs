//! Block-level parser for the Markdown dialect.
//!
//! The block parser is line-oriented and recognizes:
//! - ATX headings
//! - Fenced code blocks
//! - Blockquote lines
//! - List items
//! - Paragraph lines
//!
//! Every line is classified on its own; there is no list or paragraph
//! grouping across lines.

mod event;
mod parser;

pub use event::BlockEvent;
pub use parser::{BlockParser, FENCE, classify_line};
