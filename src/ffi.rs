//! C ABI exports.
//!
//! Every function returns a NUL-terminated JSON document allocated by this
//! library. The caller owns the returned pointer and must release it with
//! [`marklite_free_string`]; freeing it any other way is undefined behavior.
//! Input strings are borrowed for the duration of the call only. Bytes that
//! are not valid UTF-8 are replaced with U+FFFD.
//!
//! The matching declarations live in `include/marklite.h`.

use std::borrow::Cow;
use std::ffi::{CStr, CString, c_char, c_int};
use std::sync::OnceLock;

use serde::Serialize;

use crate::api::{ParseResult, convert_batch, describe, try_convert};
use crate::convert::Converter;
use crate::error::Error;
use crate::options::Options;

/// Returned when a result cannot be serialized.
const ENCODE_FAILURE: &CStr = c"{\"error\":\"failed to encode result\"}";

/// Borrow a C string as UTF-8, replacing invalid sequences.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// and unmodified for `'a`.
unsafe fn read_c_str<'a>(ptr: *const c_char) -> Option<Cow<'a, str>> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: ptr is non-null and NUL-terminated per caller contract.
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy())
}

/// Hand a string to the caller as an owned C string.
fn into_raw(json: String) -> *mut c_char {
    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            log::error!("result contains an interior NUL: {e}");
            CString::from(ENCODE_FAILURE).into_raw()
        }
    }
}

/// Serialize `value` to JSON and hand it to the caller.
fn encode<T: Serialize + ?Sized>(value: &T) -> *mut c_char {
    match serde_json::to_string(value).map_err(Error::from) {
        Ok(json) => into_raw(json),
        Err(e) => {
            log::error!("{e}");
            CString::from(ENCODE_FAILURE).into_raw()
        }
    }
}

/// Convert a Markdown string to HTML.
///
/// Returns `{"html": ..., "word_count": ..., "error": null}`, or
/// `{"error": "null input"}` when `input` is null.
///
/// # Safety
///
/// `input` must be null or a valid NUL-terminated C string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn marklite_parse(input: *const c_char) -> *mut c_char {
    // SAFETY: input is null or a valid C string per caller contract.
    let markdown = unsafe { read_c_str(input) };
    encode(&ParseResult::from(try_convert(markdown.as_deref())))
}

/// Convert a Markdown string to HTML with an options payload.
///
/// `options` is a JSON object or null. It never changes the output; see
/// [`Options`].
///
/// # Safety
///
/// `input` and `options` must each be null or a valid NUL-terminated C
/// string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn marklite_parse_with_options(
    input: *const c_char,
    options: *const c_char,
) -> *mut c_char {
    // SAFETY: input is null or a valid C string per caller contract.
    let Some(markdown) = (unsafe { read_c_str(input) }) else {
        log::warn!("marklite_parse_with_options: null input");
        return encode(&ParseResult::failure(&Error::NullInput));
    };
    // SAFETY: options is null or a valid C string per caller contract.
    let options = unsafe { read_c_str(options) }
        .map(|payload| Options::from_json(&payload))
        .unwrap_or_default();

    let conversion = Converter::with_options(&options).convert(&markdown);
    encode(&ParseResult::success(conversion))
}

/// Convert `len` Markdown strings in order.
///
/// Returns a JSON array with one entry per input, each carrying its `index`.
/// Null entries produce an error entry without stopping the batch. A null
/// array or a non-positive `len` returns `{"error": "invalid input array"}`.
///
/// # Safety
///
/// `inputs` must be null or point to `len` readable pointers, each of which
/// is null or a valid NUL-terminated C string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn marklite_parse_batch(
    inputs: *const *const c_char,
    len: c_int,
) -> *mut c_char {
    let Ok(len) = usize::try_from(len) else {
        return encode(&ParseResult::failure(&Error::InvalidInputArray));
    };
    if inputs.is_null() || len == 0 {
        return encode(&ParseResult::failure(&Error::InvalidInputArray));
    }

    // SAFETY: inputs points to len readable pointers per caller contract.
    let ptrs = unsafe { std::slice::from_raw_parts(inputs, len) };
    // SAFETY: each pointer is null or a valid C string per caller contract.
    let decoded: Vec<Option<Cow<'_, str>>> =
        ptrs.iter().map(|&ptr| unsafe { read_c_str(ptr) }).collect();

    let results = convert_batch(decoded.iter().map(|s| s.as_deref()));
    encode(results.as_slice())
}

/// Describe this converter.
///
/// Returns `{"version", "features", "backend", "performance"}`.
#[unsafe(no_mangle)]
pub extern "C" fn marklite_parser_info() -> *mut c_char {
    static INFO_JSON: OnceLock<Option<String>> = OnceLock::new();

    let json = INFO_JSON.get_or_init(|| match serde_json::to_string(describe()) {
        Ok(json) => Some(json),
        Err(e) => {
            log::error!("{}", Error::from(e));
            None
        }
    });
    match json {
        Some(json) => into_raw(json.clone()),
        None => CString::from(ENCODE_FAILURE).into_raw(),
    }
}

/// Release a string returned by this library.
///
/// Passing null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by one of the `marklite_*`
/// functions that has not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn marklite_free_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: ptr came from CString::into_raw per caller contract.
    drop(unsafe { CString::from_raw(ptr) });
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Take ownership of a returned string and free it.
    unsafe fn take(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        // SAFETY: ptr is a valid C string returned by this library.
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_owned();
        // SAFETY: ptr was returned by this library and not yet freed.
        unsafe { marklite_free_string(ptr) };
        s
    }

    #[test]
    fn test_parse() {
        let input = CString::new("# Hello").unwrap();
        // SAFETY: input is a valid C string.
        let json = unsafe { take(marklite_parse(input.as_ptr())) };
        assert_eq!(json, r#"{"html":"<h1>Hello</h1>\n","word_count":2,"error":null}"#);
    }

    #[test]
    fn test_parse_null() {
        // SAFETY: null is an accepted input.
        let json = unsafe { take(marklite_parse(std::ptr::null())) };
        assert_eq!(json, r#"{"error":"null input"}"#);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let input = CString::new(vec![b'a', 0xFF, b'b']).unwrap();
        // SAFETY: input is a valid C string.
        let json = unsafe { take(marklite_parse(input.as_ptr())) };
        assert_eq!(json, "{\"html\":\"<p>a\u{FFFD}b</p>\\n\",\"word_count\":1,\"error\":null}");
    }

    #[test]
    fn test_parse_with_null_options() {
        let input = CString::new("*x*").unwrap();
        // SAFETY: input is a valid C string; null options are accepted.
        let json =
            unsafe { take(marklite_parse_with_options(input.as_ptr(), std::ptr::null())) };
        assert_eq!(json, r#"{"html":"<p><em>x</em></p>\n","word_count":1,"error":null}"#);
    }

    #[test]
    fn test_batch_rejects_bad_array() {
        // SAFETY: null and non-positive lengths are rejected before any read.
        let invalid = r#"{"error":"invalid input array"}"#;
        let one = [c"a".as_ptr()];
        unsafe {
            assert_eq!(take(marklite_parse_batch(std::ptr::null(), 3)), invalid);
            assert_eq!(take(marklite_parse_batch(one.as_ptr(), 0)), invalid);
            assert_eq!(take(marklite_parse_batch(one.as_ptr(), -1)), invalid);
        }
    }

    #[test]
    fn test_free_null_is_noop() {
        // SAFETY: null is accepted.
        unsafe { marklite_free_string(std::ptr::null_mut()) };
    }

    #[test]
    fn test_parser_info() {
        // SAFETY: the returned pointer is freed exactly once.
        let json = unsafe { take(marklite_parser_info()) };
        assert!(json.contains(
            r#""features":["headings","lists","bold","italic","links","code","blockquotes"]"#
        ));
        assert!(json.contains(r#""performance":"optimized""#));
    }
}
