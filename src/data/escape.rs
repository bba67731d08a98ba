// src/data/escape.rs
//! Pre-pass that makes raw ampersands legal before XML parsing

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Either a well-formed reference (kept) or a bare `&` (escaped)
static AMPERSAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:amp|lt|gt|quot|apos|#[0-9]+|#x[0-9a-fA-F]+);|&").unwrap()
});

/// Replaces every `&` that does not start a predefined entity or a character
/// reference with `&amp;`. Newlines are untouched, so line numbers survive.
pub fn escape_ampersands(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    AMPERSAND.replace_all(text, |caps: &Captures| {
        let matched = &caps[0];
        if matched.len() > 1 {
            matched.to_string()
        } else {
            "&amp;".to_string()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_ampersand_is_escaped() {
        assert_eq!(escape_ampersands("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_ampersands("AT&T"), "AT&amp;T");
        assert_eq!(escape_ampersands("&"), "&amp;");
    }

    #[test]
    fn test_known_references_are_kept() {
        let text = "a &amp; b &lt;c&gt; &quot;d&quot; &apos; &#38; &#x26;";
        assert_eq!(escape_ampersands(text), text);
    }

    #[test]
    fn test_unknown_entity_is_escaped() {
        assert_eq!(escape_ampersands("&nbsp;"), "&amp;nbsp;");
        assert_eq!(escape_ampersands("&amp"), "&amp;amp");
    }

    #[test]
    fn test_no_ampersand_borrows() {
        assert!(matches!(escape_ampersands("plain text"), Cow::Borrowed(_)));
    }
}
