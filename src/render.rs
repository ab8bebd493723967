//! HTML output writer.
//!
//! Writes into a borrowed `String`, normally a buffer checked out of the
//! converter's pool, so the caller decides where the allocation comes from.

use crate::block::BlockEvent;
use crate::inline::InlineFormatter;

/// HTML output writer over a caller-provided buffer.
///
/// Nothing written through the writer is HTML-escaped.
///
/// # Example
/// ```
/// use marklite::HtmlWriter;
///
/// let mut buf = String::new();
/// let mut writer = HtmlWriter::new(&mut buf);
/// writer.heading_start(2);
/// writer.write_str("Usage");
/// writer.heading_end(2);
/// assert_eq!(buf, "<h2>Usage</h2>\n");
/// ```
pub struct HtmlWriter<'a> {
    out: &'a mut String,
}

impl<'a> HtmlWriter<'a> {
    /// Create a writer appending to `out`.
    #[inline]
    pub fn new(out: &'a mut String) -> Self {
        Self { out }
    }

    /// Write text verbatim.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    // --- Common HTML Elements ---

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("<h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write heading end: `</hN>\n`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("</h");
        self.out.push(char::from(b'0' + level));
        self.out.push_str(">\n");
    }

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.out.push_str("<p>");
    }

    /// Write paragraph end: `</p>\n`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.out.push_str("</p>\n");
    }

    /// Write list item start: `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.out.push_str("<li>");
    }

    /// Write list item end: `</li>\n`
    #[inline]
    pub fn li_end(&mut self) {
        self.out.push_str("</li>\n");
    }

    /// Write blockquote start: `<blockquote>`
    #[inline]
    pub fn blockquote_start(&mut self) {
        self.out.push_str("<blockquote>");
    }

    /// Write blockquote end: `</blockquote>\n`
    #[inline]
    pub fn blockquote_end(&mut self) {
        self.out.push_str("</blockquote>\n");
    }

    /// Write code block start with optional language class.
    ///
    /// The language is written into the attribute as-is.
    #[inline]
    pub fn code_block_start(&mut self, lang: Option<&str>) {
        match lang {
            Some(l) if !l.is_empty() => {
                self.out.push_str("<pre><code class=\"language-");
                self.out.push_str(l);
                self.out.push_str("\">");
            }
            _ => {
                self.out.push_str("<pre><code>");
            }
        }
    }

    /// Write one line of code block content followed by a newline.
    #[inline]
    pub fn code_line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    /// Write code block end: `</code></pre>\n`
    #[inline]
    pub fn code_block_end(&mut self) {
        self.out.push_str("</code></pre>\n");
    }
}

/// Render a single block event to HTML.
pub fn render_block_event(
    event: &BlockEvent<'_>,
    writer: &mut HtmlWriter<'_>,
    inline: &mut InlineFormatter,
) {
    match *event {
        BlockEvent::Heading { level, text } => {
            writer.heading_start(level);
            writer.write_str(text);
            writer.heading_end(level);
        }
        BlockEvent::ListItem { text } => {
            writer.li_start();
            writer.write_str(inline.format(text));
            writer.li_end();
        }
        BlockEvent::BlockQuote { text } => {
            writer.blockquote_start();
            writer.write_str(text);
            writer.blockquote_end();
        }
        BlockEvent::Paragraph { text } => {
            writer.paragraph_start();
            writer.write_str(inline.format(text));
            writer.paragraph_end();
        }
        BlockEvent::CodeBlockStart { info } => writer.code_block_start(info),
        BlockEvent::CodeLine(line) => writer.code_line(line),
        BlockEvent::CodeBlockEnd => writer.code_block_end(),
    }
}
