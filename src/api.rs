//! The four boundary operations and their result envelopes.
//!
//! Every call builds its own [`Converter`]; a batch shares one converter,
//! and therefore one pool, across its entries.

use serde::Serialize;

use crate::convert::{Conversion, Converter};
use crate::error::{Error, Result};
use crate::options::Options;

/// Result envelope for one conversion.
///
/// Serializes to `{"html": ..., "word_count": ..., "error": null}` on
/// success and `{"error": "..."}` on failure; batch entries also carry
/// `index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub error: Option<String>,
}

impl ParseResult {
    /// A successful conversion.
    pub fn success(conversion: Conversion) -> Self {
        Self {
            html: Some(conversion.html),
            word_count: Some(conversion.word_count),
            index: None,
            error: None,
        }
    }

    /// A failed conversion.
    pub fn failure(error: &Error) -> Self {
        Self {
            html: None,
            word_count: None,
            index: None,
            error: Some(error.to_string()),
        }
    }

    /// Tag this result with its batch position.
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Whether this result carries an error.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Result<Conversion>> for ParseResult {
    fn from(result: Result<Conversion>) -> Self {
        match result {
            Ok(conversion) => Self::success(conversion),
            Err(e) => Self::failure(&e),
        }
    }
}

/// Static description of this converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParserInfo {
    pub version: &'static str,
    pub features: &'static [&'static str],
    pub backend: &'static str,
    pub performance: &'static str,
}

/// Metadata reported by [`describe`].
pub static PARSER_INFO: ParserInfo = ParserInfo {
    version: env!("CARGO_PKG_VERSION"),
    features: &[
        "headings",
        "lists",
        "bold",
        "italic",
        "links",
        "code",
        "blockquotes",
    ],
    backend: "marklite-rust",
    performance: "optimized",
};

/// Convert `markdown` to HTML and count its words.
///
/// # Example
/// ```
/// let out = marklite::convert("**hi** there");
/// assert_eq!(out.html, "<p><strong>hi</strong> there</p>\n");
/// assert_eq!(out.word_count, 2);
/// ```
pub fn convert(markdown: &str) -> Conversion {
    log::debug!("convert: {} bytes", markdown.len());
    Converter::new().convert(markdown)
}

/// Convert with an options payload.
///
/// The payload only sizes the buffer pool; the output is always identical
/// to [`convert`].
pub fn convert_with_options(markdown: &str, options: &str) -> Conversion {
    log::debug!("convert_with_options: {} bytes", markdown.len());
    Converter::with_options(&Options::from_json(options)).convert(markdown)
}

/// Convert an optional input, reporting a missing one as [`Error::NullInput`].
pub fn try_convert(markdown: Option<&str>) -> Result<Conversion> {
    match markdown {
        Some(markdown) => Ok(convert(markdown)),
        None => {
            log::warn!("convert: null input");
            Err(Error::NullInput)
        }
    }
}

/// Convert a sequence of inputs in order with one shared converter.
///
/// The result at position `i` always describes input `i`; a missing input
/// produces an error entry and the batch carries on.
///
/// # Example
/// ```
/// let results = marklite::convert_batch([None, Some("# A")]);
/// assert_eq!(results[0].error.as_deref(), Some("null input at index 0"));
/// assert_eq!(results[1].html.as_deref(), Some("<h1>A</h1>\n"));
/// assert_eq!(results[1].word_count, Some(2));
/// ```
pub fn convert_batch<'a, I>(inputs: I) -> Vec<ParseResult>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let converter = Converter::new();
    let results: Vec<ParseResult> = inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            let result = match input {
                Some(markdown) => ParseResult::success(converter.convert(markdown)),
                None => {
                    log::warn!("convert_batch: null input at index {index}");
                    ParseResult::failure(&Error::NullInputAt { index })
                }
            };
            result.at_index(index)
        })
        .collect();
    log::debug!("convert_batch: {} entries", results.len());
    results
}

/// Static metadata describing this converter.
pub fn describe() -> &'static ParserInfo {
    &PARSER_INFO
}
