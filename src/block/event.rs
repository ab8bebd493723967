//! Block-level event types.

/// Events emitted by the block parser, one per non-blank line.
///
/// Text payloads borrow from the input with block markers already stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent<'a> {
    /// ATX heading (`#` through `######` followed by a space).
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Text after the marker, not inline-formatted.
        text: &'a str,
    },

    /// List item (`- ` or `* `).
    ListItem {
        /// Text after the marker.
        text: &'a str,
    },

    /// Blockquote line (`> `).
    BlockQuote {
        /// Text after the marker, not inline-formatted.
        text: &'a str,
    },

    /// Any other non-blank line.
    Paragraph {
        /// The whole line.
        text: &'a str,
    },

    /// Opening fence of a code block.
    CodeBlockStart {
        /// Text following the fence, if any (language identifier).
        info: Option<&'a str>,
    },
    /// A line inside a code block, emitted verbatim.
    CodeLine(&'a str),
    /// Closing fence of a code block.
    CodeBlockEnd,
}
