//! Output size estimation.
//!
//! Predicts how large the rendered HTML will be so the output buffer can be
//! reserved once instead of growing during accumulation. The estimate only
//! affects capacity, never output.

use memchr::{memchr_iter, memmem};

use crate::limits::{
    BOLD_OVERHEAD, FENCE_OVERHEAD, HEADING_OVERHEAD, ITALIC_OVERHEAD, LINK_OVERHEAD,
    MAX_ESTIMATE, MIN_ESTIMATE,
};

/// Estimate the HTML capacity needed for `markdown`.
///
/// Starts from twice the input length, adds a fixed overhead per marker
/// occurrence, scales by 1.2 and clamps to
/// [`MIN_ESTIMATE`]..=[`MAX_ESTIMATE`].
///
/// # Example
/// ```
/// assert_eq!(marklite::estimate_html_size(""), 512);
/// assert_eq!(marklite::estimate_html_size(&"x".repeat(1000)), 2400);
/// ```
pub fn estimate_html_size(markdown: &str) -> usize {
    let bytes = markdown.as_bytes();

    let headings = memchr_iter(b'#', bytes).count();
    let links = count_substr(bytes, b"](");
    let bolds = count_substr(bytes, b"**");
    let italics = memchr_iter(b'*', bytes).count();
    let fences = count_substr(bytes, b"```");

    let estimate = bytes
        .len()
        .saturating_mul(2)
        .saturating_add(headings.saturating_mul(HEADING_OVERHEAD))
        .saturating_add(links.saturating_mul(LINK_OVERHEAD))
        .saturating_add(bolds.saturating_mul(BOLD_OVERHEAD))
        .saturating_add(italics.saturating_mul(ITALIC_OVERHEAD))
        .saturating_add(fences.saturating_mul(FENCE_OVERHEAD));

    // x1.2, truncating
    let scaled = estimate.saturating_mul(6) / 5;
    scaled.clamp(MIN_ESTIMATE, MAX_ESTIMATE)
}

/// Count non-overlapping occurrences of `needle`.
#[inline]
fn count_substr(haystack: &[u8], needle: &[u8]) -> usize {
    memmem::find_iter(haystack, needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_input_clamped_to_minimum() {
        assert_eq!(estimate_html_size(""), MIN_ESTIMATE);
        assert_eq!(estimate_html_size("# Title"), MIN_ESTIMATE);
    }

    #[test]
    fn test_plain_text_scales_with_length() {
        // 300 * 2 * 1.2
        assert_eq!(estimate_html_size(&"a".repeat(300)), 720);
    }

    #[test]
    fn test_marker_weights() {
        // 400 bytes of padding plus one of each marker kind.
        let pad = "a".repeat(400);
        // '#' adds 10
        assert_eq!(estimate_html_size(&format!("{pad}#")), (401 * 2 + 10) * 6 / 5);
        // "](" adds 20
        assert_eq!(estimate_html_size(&format!("{pad}](")), (402 * 2 + 20) * 6 / 5);
        // "**" adds 15 plus 2 * 10 for the two single stars
        assert_eq!(
            estimate_html_size(&format!("{pad}**")),
            (402 * 2 + 15 + 20) * 6 / 5
        );
        // "```" adds 30
        assert_eq!(estimate_html_size(&format!("{pad}```")), (403 * 2 + 30) * 6 / 5);
    }

    #[test]
    fn test_counts_are_non_overlapping() {
        assert_eq!(count_substr(b"****", b"**"), 2);
        assert_eq!(count_substr(b"*****", b"**"), 2);
        assert_eq!(count_substr(b"``````", b"```"), 2);
    }

    #[test]
    fn test_large_input_clamped_to_maximum() {
        let big = "#".repeat(MAX_ESTIMATE);
        assert_eq!(estimate_html_size(&big), MAX_ESTIMATE);
    }
}
