//! HTML escaping.
//!
//! Text and attribute values are escaped with the same five entities, so a
//! single function serves both contexts.

use std::borrow::Cow;

/// Replacement entity for a byte, if it needs escaping.
fn entity(b: u8) -> Option<&'static str> {
    match b {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for inclusion in HTML.
///
/// Returns the input borrowed when nothing needs escaping.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use marklet_core::escape_html;
///
/// assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = bytes.iter().position(|&b| entity(b).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    let mut last = first;

    // All escaped bytes are ASCII, so every slice boundary is a char boundary.
    for (i, &b) in bytes.iter().enumerate().skip(first) {
        if let Some(rep) = entity(b) {
            out.push_str(&text[last..i]);
            out.push_str(rep);
            last = i + 1;
        }
    }
    out.push_str(&text[last..]);

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_special_chars_borrows() {
        let input = "Hello, world!";
        match escape_html(input) {
            Cow::Borrowed(s) => assert!(std::ptr::eq(s, input)),
            Cow::Owned(_) => panic!("expected a borrowed value"),
        }
    }

    #[test]
    fn test_all_five_entities() {
        assert_eq!(escape_html("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn test_runs_between_specials_are_kept() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_multibyte_text_untouched() {
        assert_eq!(escape_html("café & crème"), "café &amp; crème");
        assert_eq!(escape_html("日本語"), "日本語");
    }

    #[test]
    fn test_empty() {
        assert!(matches!(escape_html(""), Cow::Borrowed("")));
    }
}
