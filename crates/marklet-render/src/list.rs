//! List and blockquote rendering.

/// Checkbox prefix of a checked task item.
pub const TASK_CHECKED: &str = "<input type=\"checkbox\" checked disabled> ";

/// Checkbox prefix of an open task item.
pub const TASK_UNCHECKED: &str = "<input type=\"checkbox\" disabled> ";

/// Append `<li>`, with a disabled checkbox for task items.
pub fn render_list_item_open(out: &mut String, task: Option<bool>) {
    out.push_str("<li>");
    match task {
        Some(true) => out.push_str(TASK_CHECKED),
        Some(false) => out.push_str(TASK_UNCHECKED),
        None => {}
    }
}

/// Append a container tag on its own line: `<ul>`, `</ol>`, `<blockquote>`...
pub fn render_container(out: &mut String, tag: &str, close: bool) {
    out.push('<');
    if close {
        out.push('/');
    }
    out.push_str(tag);
    out.push_str(">\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_item() {
        let mut out = String::new();
        render_list_item_open(&mut out, None);
        assert_eq!(out, "<li>");
    }

    #[test]
    fn test_task_items() {
        let mut out = String::new();
        render_list_item_open(&mut out, Some(true));
        assert_eq!(out, "<li><input type=\"checkbox\" checked disabled> ");

        out.clear();
        render_list_item_open(&mut out, Some(false));
        assert_eq!(out, "<li><input type=\"checkbox\" disabled> ");
    }

    #[test]
    fn test_container() {
        let mut out = String::new();
        render_container(&mut out, "ul", false);
        render_container(&mut out, "ul", true);
        assert_eq!(out, "<ul>\n</ul>\n");
    }
}
