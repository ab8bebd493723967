//! Strong and emphasis spans.
//!
//! Pairing is first-opener, first-closer: `**a **b** c**` closes at the
//! second `**`, and same-kind spans never nest.

use super::{Span, SpanMatch, find_delimited, rewrite};
use crate::Range;

struct Strong(SpanMatch);

impl Span for Strong {
    fn outer(&self) -> Range {
        self.0.outer
    }

    fn write_html(&self, text: &str, out: &mut String) {
        out.push_str("<strong>");
        out.push_str(self.0.inner.slice(text));
        out.push_str("</strong>");
    }
}

struct Emphasis(SpanMatch);

impl Span for Emphasis {
    fn outer(&self) -> Range {
        self.0.outer
    }

    fn write_html(&self, text: &str, out: &mut String) {
        out.push_str("<em>");
        out.push_str(self.0.inner.slice(text));
        out.push_str("</em>");
    }
}

/// Replace `**text**` with `<strong>text</strong>`.
pub fn rewrite_strong(text: &str, out: &mut String) -> usize {
    rewrite(text, out, |t, from| find_delimited(t, from, b"**").map(Strong))
}

/// Replace `*text*` with `<em>text</em>`.
///
/// Callers only run this once no `**` is left in the text.
pub fn rewrite_emphasis(text: &str, out: &mut String) -> usize {
    rewrite(text, out, |t, from| find_delimited(t, from, b"*").map(Emphasis))
}
