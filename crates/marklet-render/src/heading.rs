//! Heading rendering.

use marklet_core::escape_html;

/// Append `<hN>` or `<hN id="...">`.
///
/// The id is attribute-escaped.
pub fn render_heading_open(out: &mut String, level: u8, id: Option<&str>) {
    let level = level.clamp(1, 6);
    match id {
        Some(id) => {
            out.push_str(&format!("<h{} id=\"", level));
            out.push_str(&escape_html(id));
            out.push_str("\">");
        }
        None => out.push_str(&format!("<h{}>", level)),
    }
}

/// Append `</hN>` and a newline.
pub fn render_heading_close(out: &mut String, level: u8) {
    out.push_str(&format!("</h{}>\n", level.clamp(1, 6)));
}
