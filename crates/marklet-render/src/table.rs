//! Table cell rendering.

use marklet_core::Align;

/// Append `<th>`/`<td>`, with an `align` attribute when set.
pub fn render_cell_open(out: &mut String, tag: &str, align: Option<Align>) {
    out.push('<');
    out.push_str(tag);
    if let Some(align) = align {
        out.push_str(" align=\"");
        out.push_str(align.as_str());
        out.push('"');
    }
    out.push('>');
}
