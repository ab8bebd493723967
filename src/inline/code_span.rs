//! Code spans.
//!
//! Single backticks pair first-opener, first-closer. Runs of backticks have
//! no special meaning: ``` ``a`` ``` is an empty span, `a`, another empty span.

use super::{Span, SpanMatch, find_delimited, rewrite};
use crate::Range;

struct CodeSpan(SpanMatch);

impl Span for CodeSpan {
    fn outer(&self) -> Range {
        self.0.outer
    }

    fn write_html(&self, text: &str, out: &mut String) {
        out.push_str("<code>");
        out.push_str(self.0.inner.slice(text));
        out.push_str("</code>");
    }
}

/// Replace `` `code` `` with `<code>code</code>`.
pub fn rewrite_code_spans(text: &str, out: &mut String) -> usize {
    rewrite(text, out, |t, from| find_delimited(t, from, b"`").map(CodeSpan))
}
