//! Code rendering.
//!
//! Fenced blocks render as `<pre><code>`; the language becomes a
//! `language-*` class. When a highlighter is configured and the block names
//! a language, the highlighter's markup is inserted as is. Everything else
//! is escaped.

use marklet_core::{escape_html, Highlight};

/// Append a fenced code block.
pub fn render_fence(out: &mut String, lang: &str, code: &str, highlight: Option<&dyn Highlight>) {
    if lang.is_empty() {
        out.push_str("<pre><code>");
    } else {
        out.push_str("<pre><code class=\"language-");
        out.push_str(&escape_html(lang));
        out.push_str("\">");
    }

    match highlight {
        Some(highlighter) if !lang.is_empty() => out.push_str(&highlighter.highlight(code, lang)),
        _ => out.push_str(&escape_html(code)),
    }

    out.push_str("</code></pre>\n");
}

/// Append an inline code span.
pub fn render_code_inline(out: &mut String, code: &str) {
    out.push_str("<code>");
    out.push_str(&escape_html(code));
    out.push_str("</code>");
}
