//! Inline text, link and image rendering.

use marklet_core::escape_html;

/// Append escaped literal text.
pub fn render_text(out: &mut String, text: &str) {
    out.push_str(&escape_html(text));
}

/// Append `<a href="...">`, with a `title` attribute when present.
pub fn render_link_open(out: &mut String, href: &str, title: Option<&str>) {
    out.push_str("<a href=\"");
    out.push_str(&escape_html(href));
    out.push('"');
    push_title(out, title);
    out.push('>');
}

/// Append `<img src="..." alt="...">`, with a `title` attribute when present.
pub fn render_image(out: &mut String, src: &str, alt: &str, title: Option<&str>) {
    out.push_str("<img src=\"");
    out.push_str(&escape_html(src));
    out.push_str("\" alt=\"");
    out.push_str(&escape_html(alt));
    out.push('"');
    push_title(out, title);
    out.push('>');
}

fn push_title(out: &mut String, title: Option<&str>) {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        out.push_str(" title=\"");
        out.push_str(&escape_html(title));
        out.push('"');
    }
}
