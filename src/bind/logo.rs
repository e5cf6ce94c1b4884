//! Accent-split wordmark.

use crate::util::escape_markup;

/// Default wordmark split: `"NosoTrack"` becomes
/// `Noso<span class="accent">Track</span>`.
pub fn logo_markup(text: &str) -> String {
    logo_markup_with(text, "Track", "accent")
}

/// Wrap the first occurrence of `token` in `<span class="{accent_class}">`.
///
/// Everything is escaped, so the wordmark stays text even though the result
/// is written as markup. Without a match (or with an empty token) the text is
/// returned unchanged apart from escaping.
pub fn logo_markup_with(text: &str, token: &str, accent_class: &str) -> String {
    if token.is_empty() {
        return escape_markup(text);
    }
    match text.find(token) {
        Some(at) => {
            let (prefix, rest) = text.split_at(at);
            let suffix = &rest[token.len()..];
            format!(
                r#"{}<span class="{}">{}</span>{}"#,
                escape_markup(prefix),
                escape_markup(accent_class),
                escape_markup(token),
                escape_markup(suffix)
            )
        }
        None => escape_markup(text),
    }
}
