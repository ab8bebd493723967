//! Block parser implementation.

use std::str::Split;

use super::event::BlockEvent;

/// Code fence delimiter.
pub const FENCE: &str = "```";

/// Maximum ATX heading level.
const MAX_HEADING_LEVEL: usize = 6;

/// Line-oriented block parser.
///
/// Splits the input on `\n` and yields one [`BlockEvent`] per line, skipping
/// blank lines outside code blocks. The only state carried from line to line
/// is whether a fenced code block is open.
///
/// # Example
/// ```
/// use marklite::{BlockEvent, BlockParser};
///
/// let events: Vec<_> = BlockParser::new("# Title\n\nBody").collect();
/// assert_eq!(
///     events,
///     vec![
///         BlockEvent::Heading { level: 1, text: "Title" },
///         BlockEvent::Paragraph { text: "Body" },
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct BlockParser<'a> {
    lines: Split<'a, char>,
    in_code_block: bool,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.split('\n'),
            in_code_block: false,
        }
    }

    /// Whether a fenced code block is currently open.
    #[inline]
    pub fn in_code_block(&self) -> bool {
        self.in_code_block
    }

    /// Process one line, returning `None` for lines that produce no output.
    fn parse_line(&mut self, raw: &'a str) -> Option<BlockEvent<'a>> {
        let line = raw.trim_end_matches([' ', '\t']);

        if let Some(info) = line.strip_prefix(FENCE) {
            return Some(self.toggle_fence(info));
        }

        if self.in_code_block {
            return Some(BlockEvent::CodeLine(line));
        }

        classify_line(line)
    }

    fn toggle_fence(&mut self, info: &'a str) -> BlockEvent<'a> {
        if self.in_code_block {
            self.in_code_block = false;
            BlockEvent::CodeBlockEnd
        } else {
            self.in_code_block = true;
            BlockEvent::CodeBlockStart {
                info: (!info.is_empty()).then_some(info),
            }
        }
    }
}

impl<'a> Iterator for BlockParser<'a> {
    type Item = BlockEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.lines.next()?;
            if let Some(event) = self.parse_line(raw) {
                return Some(event);
            }
        }
    }
}

/// Classify a line outside a code block.
///
/// `line` must already have trailing spaces and tabs removed. Returns `None`
/// for blank lines.
pub fn classify_line(line: &str) -> Option<BlockEvent<'_>> {
    if let Some((level, text)) = atx_heading(line) {
        return Some(BlockEvent::Heading { level, text });
    }

    if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Some(BlockEvent::ListItem { text });
    }

    if let Some(text) = line.strip_prefix("> ") {
        return Some(BlockEvent::BlockQuote { text });
    }

    if line.trim().is_empty() {
        return None;
    }

    Some(BlockEvent::Paragraph { text: line })
}

/// Match 1-6 `#` followed by a space.
fn atx_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=MAX_HEADING_LEVEL).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, text))
}
