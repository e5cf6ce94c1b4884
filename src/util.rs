//! Text helpers shared by the page loader and the binders.

use std::borrow::Cow;

/// Decode skeleton bytes to a string.
///
/// 1. UTF-8 first (a BOM is handled by encoding_rs)
/// 2. then the hint encoding, usually from `<meta charset>`
/// 3. finally Windows-1252, a superset of ISO-8859-1
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Pull the charset label out of the first `<meta charset=...>` (or the
/// `http-equiv` form's `content="...; charset=..."`) in the first 1 KiB.
pub fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let head = &bytes[..bytes.len().min(1024)];
    let needle = b"charset=";
    let start = head
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))?
        + needle.len();

    let rest = &head[start..];
    let rest = rest
        .strip_prefix(b"\"")
        .or_else(|| rest.strip_prefix(b"'"))
        .unwrap_or(rest);
    let end = rest
        .iter()
        .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
        .unwrap_or(rest.len());

    std::str::from_utf8(&rest[..end]).ok().filter(|s| !s.is_empty())
}

/// Whether a charset label names UTF-8 (`utf8`, `unicode-1-1-utf-8`, ...).
pub fn is_utf8_label(label: Option<&str>) -> bool {
    label.and_then(|l| encoding_rs::Encoding::for_label(l.trim().as_bytes()))
        == Some(encoding_rs::UTF_8)
}

/// Escape text for inclusion in generated markup.
pub fn escape_markup(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
