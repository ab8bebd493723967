//! Inline links: `[text](url)`.
//!
//! A link is the first `[`, the first `](` after it and the first `)` after
//! that. The label may contain anything, including another `[`; the URL is
//! written to the `href` attribute unmodified.
//!
//! Matching runs against the current text, substitutions included: a `[`
//! left inside an emitted URL or label can open the next link.

use memchr::memchr;

use super::{Span, find_from};
use crate::Range;

/// A resolved inline link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// From `[` through `)`.
    pub outer: Range,
    /// Text between `[` and `](`.
    pub label: Range,
    /// Text between `](` and `)`.
    pub href: Range,
}

impl Link {
    /// Find the next link at or after `from`.
    pub fn find(text: &str, from: usize) -> Option<Self> {
        let bytes = text.as_bytes();
        let open = find_from(bytes, from, b"[")?;
        let mid = find_from(bytes, open, b"](")?;
        let close = find_from(bytes, mid + 2, b")")?;
        Some(Self {
            outer: Range::new(open, close + 1),
            label: Range::new(open + 1, mid),
            href: Range::new(mid + 2, close),
        })
    }
}

impl Span for Link {
    fn outer(&self) -> Range {
        self.outer
    }

    fn write_html(&self, text: &str, out: &mut String) {
        out.push_str("<a href=\"");
        out.push_str(self.href.slice(text));
        out.push_str("\">");
        out.push_str(self.label.slice(text));
        out.push_str("</a>");
    }
}

/// Replace `[text](url)` with `<a href="url">text</a>` until no link is left.
///
/// Rewrites `current` in place, using `scratch` as the second buffer. Returns
/// the number of links replaced.
pub fn rewrite_links(current: &mut String, scratch: &mut String) -> usize {
    let mut total = 0;
    let mut from = 0;
    loop {
        let (replaced, resume) = splice_links(current, from, scratch);
        if replaced > 0 {
            std::mem::swap(current, scratch);
            total += replaced;
        }
        match resume {
            Some(pos) => from = pos,
            None => return total,
        }
    }
}

/// Splice links found at or after `from` into `out`.
///
/// Stops early when an emitted link contains a `[`, returning the offset of
/// that `[` in `out` so the caller can search again from there. Nothing in
/// `out` before that offset holds a `[`. `out` is only written when at least
/// one link matched.
fn splice_links(text: &str, from: usize, out: &mut String) -> (usize, Option<usize>) {
    let mut pos = 0;
    let mut search = from;
    let mut count = 0;

    while let Some(link) = Link::find(text, search) {
        if count == 0 {
            out.clear();
            out.reserve(text.len() + 32);
        }
        out.push_str(&text[pos..link.outer.start]);
        let emitted = out.len();
        link.write_html(text, out);
        pos = link.outer.end;
        count += 1;

        if let Some(i) = memchr(b'[', &out.as_bytes()[emitted..]) {
            out.push_str(&text[pos..]);
            return (count, Some(emitted + i));
        }
        search = pos;
    }

    if count > 0 {
        out.push_str(&text[pos..]);
    }
    (count, None)
}
