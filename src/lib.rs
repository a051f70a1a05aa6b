//! Marklet - a small markdown to HTML converter.
//!
//! Conversion is total: any input string produces HTML, with malformed
//! markup kept as literal (escaped) text.
//!
//! # Example
//!
//! ```
//! use marklet::{parse, Options};
//!
//! let html = parse("# Hello World", &Options::default());
//! assert_eq!(html, "<h1 id=\"hello-world\">Hello World</h1>\n");
//! ```
//!
//! The stages are also available separately:
//!
//! ```
//! use marklet::{render, tokenize, Options};
//!
//! let options = Options::default();
//! let tokens = tokenize("some *text*", &options);
//! assert_eq!(render(&tokens, &options), "<p>some <em>text</em></p>\n");
//! ```

pub use marklet_core::{
    escape_html, Align, Highlight, MarkletError, Nesting, Options, Result, Token, TokenKind,
};
pub use marklet_parser::{slugify, tokenize, Parser};
pub use marklet_render::{render, HtmlRenderer};

/// Convert a markdown document to HTML.
pub fn parse(markdown: &str, options: &Options) -> String {
    render(&tokenize(markdown, options), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_stages() {
        let options = Options::default();
        let src = "# T\n\n- a\n- b\n\n> q";
        assert_eq!(parse(src, &options), render(&tokenize(src, &options), &options));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("", &Options::default()), "");
    }
}
