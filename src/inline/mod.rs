//! Inline span reformatter.
//!
//! Rewrites the inline markup of a single line into HTML. Span kinds are
//! resolved one pass at a time, in precedence order:
//! 1. Strong (`**text**`)
//! 2. Emphasis (`*text*`), skipped while an unmatched `**` remains
//! 3. Links (`[text](url)`)
//! 4. Code spans (`` `code` ``)
//!
//! Each pass is a cursor walk over the output of the previous pass, so tags
//! written by an earlier pass are plain text to the later ones. The links
//! pass walks again from any `[` that a substitution carried into its output.
//! Markers without a partner are left as literal text. User text is not
//! HTML-escaped.

mod code_span;
mod emphasis;
mod links;

use memchr::{memchr, memchr3, memmem};

use crate::Range;

pub use links::Link;

/// A span enclosed by a delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanMatch {
    /// Covers the delimiters and the content.
    pub outer: Range,
    /// Covers the content only.
    pub inner: Range,
}

/// A matched span that knows how to render itself.
pub(crate) trait Span {
    /// Range replaced by the rendered HTML.
    fn outer(&self) -> Range;

    /// Append the HTML for this span.
    fn write_html(&self, text: &str, out: &mut String);
}

/// Reusable inline formatter.
///
/// Holds two scratch buffers that passes alternate between, so formatting
/// many lines does not allocate once the buffers have grown.
///
/// # Example
/// ```
/// use marklite::InlineFormatter;
///
/// let mut inline = InlineFormatter::new();
/// assert_eq!(
///     inline.format("**bold** and [docs](https://docs.rs)"),
///     "<strong>bold</strong> and <a href=\"https://docs.rs\">docs</a>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct InlineFormatter {
    current: String,
    scratch: String,
}

impl InlineFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format one line of inline markup.
    pub fn format<'a>(&'a mut self, text: &'a str) -> &'a str {
        if memchr3(b'*', b'[', b'`', text.as_bytes()).is_none() {
            return text;
        }

        self.current.clear();
        self.current.push_str(text);

        self.run(emphasis::rewrite_strong);
        if !self.current.contains("**") {
            self.run(emphasis::rewrite_emphasis);
        }
        links::rewrite_links(&mut self.current, &mut self.scratch);
        self.run(code_span::rewrite_code_spans);

        &self.current
    }

    fn run(&mut self, pass: fn(&str, &mut String) -> usize) {
        if pass(&self.current, &mut self.scratch) > 0 {
            std::mem::swap(&mut self.current, &mut self.scratch);
        }
    }
}

/// Format one line of inline markup into a new `String`.
pub fn format_inline(text: &str) -> String {
    InlineFormatter::new().format(text).to_owned()
}

/// Position of the next `needle` at or after `from`.
#[inline]
pub(crate) fn find_from(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    let rest = haystack.get(from..)?;
    let hit = match needle {
        [b] => memchr(*b, rest),
        _ => memmem::find(rest, needle),
    };
    hit.map(|i| from + i)
}

/// Find the first `delim` at or after `from` and the first `delim` after it.
pub(crate) fn find_delimited(text: &str, from: usize, delim: &[u8]) -> Option<SpanMatch> {
    let bytes = text.as_bytes();
    let open = find_from(bytes, from, delim)?;
    let content_start = open + delim.len();
    let close = find_from(bytes, content_start, delim)?;
    Some(SpanMatch {
        outer: Range::new(open, close + delim.len()),
        inner: Range::new(content_start, close),
    })
}

/// Splice every span `find` locates into `out`.
///
/// `out` is only written when at least one span matched; the return value is
/// the number of spans replaced.
pub(crate) fn rewrite<S: Span>(
    text: &str,
    out: &mut String,
    mut find: impl FnMut(&str, usize) -> Option<S>,
) -> usize {
    let mut pos = 0;
    let mut count = 0;

    while let Some(span) = find(text, pos) {
        if count == 0 {
            out.clear();
            out.reserve(text.len() + 32);
        }
        let outer = span.outer();
        out.push_str(&text[pos..outer.start]);
        span.write_html(text, out);
        pos = outer.end;
        count += 1;
    }

    if count > 0 {
        out.push_str(&text[pos..]);
    }
    count
}
