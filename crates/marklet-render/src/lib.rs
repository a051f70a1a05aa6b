//! Marklet Render
//!
//! This crate turns a finished token stream into HTML.
//!
//! # Overview
//!
//! Rendering is a single forward pass: every token maps to one fixed piece
//! of markup, so the output follows token order exactly. Nesting is never
//! checked here; balanced input gives balanced HTML.
//!
//! All text, code and attribute values are escaped. The only markup
//! inserted unescaped is the output of a configured [`Highlight`] hook.
//!
//! # Example
//!
//! ```
//! use marklet_core::{Options, Token, TokenKind};
//! use marklet_render::render;
//!
//! let tokens = vec![
//!     Token::new(TokenKind::ParagraphOpen, 0),
//!     Token::new(TokenKind::Text("1 < 2".into()), 1),
//!     Token::new(TokenKind::ParagraphClose, 0),
//! ];
//! assert_eq!(render(&tokens, &Options::default()), "<p>1 &lt; 2</p>\n");
//! ```

pub mod code;
pub mod heading;
pub mod list;
pub mod table;
pub mod text;

pub use code::{render_code_inline, render_fence};
pub use heading::{render_heading_close, render_heading_open};
pub use list::{render_container, render_list_item_open, TASK_CHECKED, TASK_UNCHECKED};
pub use table::render_cell_open;
pub use text::{render_image, render_link_open, render_text};

use log::trace;
use marklet_core::{Highlight, Options, Token, TokenKind};

/// Render a token stream to HTML.
pub fn render(tokens: &[Token], options: &Options) -> String {
    let mut renderer = HtmlRenderer::new(options);
    for token in tokens {
        renderer.render_token(token);
    }
    renderer.finish()
}

/// HTML renderer accumulating output for one token stream.
pub struct HtmlRenderer<'o> {
    html: String,
    options: &'o Options,
}

impl<'o> HtmlRenderer<'o> {
    pub fn new(options: &'o Options) -> Self {
        Self {
            html: String::new(),
            options,
        }
    }

    /// HTML produced so far.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Append the markup for one token.
    pub fn render_token(&mut self, token: &Token) {
        let out = &mut self.html;

        match &token.kind {
            TokenKind::HeadingOpen { level, id } => render_heading_open(out, *level, id.as_deref()),
            TokenKind::HeadingClose { level } => render_heading_close(out, *level),

            TokenKind::ParagraphOpen => out.push_str("<p>"),
            TokenKind::ParagraphClose => out.push_str("</p>\n"),

            TokenKind::Fence { lang, content } => {
                let highlight: Option<&dyn Highlight> = self.options.highlight.as_deref();
                render_fence(out, lang, content, highlight);
            }
            TokenKind::CodeInline(code) => render_code_inline(out, code),

            TokenKind::Hr => out.push_str("<hr>\n"),

            TokenKind::BlockquoteOpen => render_container(out, "blockquote", false),
            TokenKind::BlockquoteClose => render_container(out, "blockquote", true),
            TokenKind::BulletListOpen => render_container(out, "ul", false),
            TokenKind::BulletListClose => render_container(out, "ul", true),
            TokenKind::OrderedListOpen => render_container(out, "ol", false),
            TokenKind::OrderedListClose => render_container(out, "ol", true),
            TokenKind::ListItemOpen { task } => render_list_item_open(out, *task),
            TokenKind::ListItemClose => out.push_str("</li>\n"),

            TokenKind::TableOpen => render_container(out, "table", false),
            TokenKind::TableClose => render_container(out, "table", true),
            TokenKind::TheadOpen => render_container(out, "thead", false),
            TokenKind::TheadClose => render_container(out, "thead", true),
            TokenKind::TbodyOpen => render_container(out, "tbody", false),
            TokenKind::TbodyClose => render_container(out, "tbody", true),
            TokenKind::TrOpen => render_container(out, "tr", false),
            TokenKind::TrClose => render_container(out, "tr", true),
            TokenKind::ThOpen { align } => render_cell_open(out, "th", *align),
            TokenKind::ThClose => out.push_str("</th>\n"),
            TokenKind::TdOpen { align } => render_cell_open(out, "td", *align),
            TokenKind::TdClose => out.push_str("</td>\n"),

            TokenKind::StrongOpen => out.push_str("<strong>"),
            TokenKind::StrongClose => out.push_str("</strong>"),
            TokenKind::EmOpen => out.push_str("<em>"),
            TokenKind::EmClose => out.push_str("</em>"),
            TokenKind::DelOpen => out.push_str("<del>"),
            TokenKind::DelClose => out.push_str("</del>"),

            TokenKind::LinkOpen { href, title } => render_link_open(out, href, title.as_deref()),
            TokenKind::LinkClose => out.push_str("</a>"),
            TokenKind::Image { src, alt, title } => render_image(out, src, alt, title.as_deref()),

            TokenKind::Break => out.push_str("<br>"),
            TokenKind::Text(text) => render_text(out, text),
        }
    }

    /// Take the finished HTML.
    pub fn finish(self) -> String {
        trace!("rendered {} bytes of html", self.html.len());
        self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marklet_parser::tokenize;

    fn html(src: &str) -> String {
        html_with(src, &Options::default())
    }

    fn html_with(src: &str, options: &Options) -> String {
        render(&tokenize(src, options), options)
    }

    #[test]
    fn test_empty() {
        assert_eq!(render(&[], &Options::default()), "");
    }

    #[test]
    fn test_heading() {
        assert_eq!(
            html("# Hello World"),
            "<h1 id=\"hello-world\">Hello World</h1>\n"
        );
    }

    #[test]
    fn test_paragraph_inline() {
        assert_eq!(
            html("a **b** *c* ~~d~~ `e`"),
            "<p>a <strong>b</strong> <em>c</em> <del>d</del> <code>e</code></p>\n"
        );
    }

    #[test]
    fn test_fence() {
        assert_eq!(
            html("```js\nif (a < b && c) {}\n```"),
            "<pre><code class=\"language-js\">if (a &lt; b &amp;&amp; c) {}</code></pre>\n"
        );
    }

    #[test]
    fn test_fence_with_highlighter() {
        let options =
            Options::default().with_highlight(|code: &str, lang: &str| format!("[{}]{}", lang, code));
        assert_eq!(
            html_with("```py\nx\n```", &options),
            "<pre><code class=\"language-py\">[py]x</code></pre>\n"
        );
    }

    #[test]
    fn test_blockquote_and_hr() {
        assert_eq!(
            html("> quote\n\n---"),
            "<blockquote>\n<p>quote</p>\n</blockquote>\n<hr>\n"
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            html("- [x] done\n- todo"),
            "<ul>\n<li><input type=\"checkbox\" checked disabled> done</li>\n<li>todo</li>\n</ul>\n"
        );
        assert_eq!(html("1. one"), "<ol>\n<li>one</li>\n</ol>\n");
    }

    #[test]
    fn test_table() {
        assert_eq!(
            html("| a | b |\n|:-:|---|\n| 1 | 2 |"),
            "<table>\n<thead>\n<tr>\n<th align=\"center\">a</th>\n<th>b</th>\n</tr>\n</thead>\n\
             <tbody>\n<tr>\n<td align=\"center\">1</td>\n<td>2</td>\n</tr>\n</tbody>\n</table>\n"
        );
    }

    #[test]
    fn test_link_and_image() {
        assert_eq!(
            html(r#"[a](/x "T") ![i](/p.png)"#),
            "<p><a href=\"/x\" title=\"T\">a</a> <img src=\"/p.png\" alt=\"i\"></p>\n"
        );
    }

    #[test]
    fn test_breaks() {
        let options = Options {
            breaks: true,
            ..Options::default()
        };
        assert_eq!(html_with("a\nb", &options), "<p>a<br>b</p>\n");
    }

    #[test]
    fn test_renderer_incremental() {
        let options = Options::default();
        let mut renderer = HtmlRenderer::new(&options);
        renderer.render_token(&Token::new(TokenKind::Hr, 0));
        assert_eq!(renderer.html(), "<hr>\n");
        renderer.render_token(&Token::new(TokenKind::Break, 0));
        assert_eq!(renderer.finish(), "<hr>\n<br>");
    }
}
