//! Character encoding detection and transcoding.
//!
//! Pages arrive as bytes. The charset is taken, in order, from a byte order
//! mark, the `Content-Type` response header, a `<meta>` declaration in the
//! first kilobyte, and finally defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `charset=...` in a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// Match both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Detect the character encoding of a page.
///
/// `content_type` is the raw `Content-Type` header, when the page came over
/// HTTP. Unknown labels are skipped rather than treated as errors.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    if let Some(encoding) = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(encoding) =
        meta_charset(&head_str).and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    UTF_8
}

/// Charset label from a `Content-Type` header value.
#[must_use]
pub fn header_charset(content_type: &str) -> Option<&str> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn meta_charset(html: &str) -> Option<String> {
    META_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode page bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than failing; a BOM is stripped.
#[must_use]
pub fn decode_page(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    let (decoded, _encoding_used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "page contained undecodable bytes");
    }
    decoded.into_owned()
}

/// Transcode HTML bytes with no header information to UTF-8.
///
/// # Examples
///
/// ```
/// use mot_du_jour::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>caf\xC3\xA9</body></html>";
/// assert!(transcode_to_utf8(html).contains("café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    decode_page(html, None)
}
