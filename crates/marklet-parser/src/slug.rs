//! Heading id generation.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not an ASCII word character, whitespace or a hyphen
static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static HYPHENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Turn heading text into an anchor slug.
///
/// # Example
///
/// ```
/// use marklet_parser::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("What's new in v2.0?"), "whats-new-in-v20");
/// ```
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = NON_SLUG_RE.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
    let collapsed = HYPHENS_RE.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}
