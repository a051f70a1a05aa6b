//! Marklet Parser
//!
//! Turns markdown text into a flat, ordered stream of [`Token`]s.
//!
//! # Overview
//!
//! Parsing happens in two layers. The block grammar ([`block`]) walks the
//! document and recognizes headings, fenced code, thematic breaks,
//! blockquotes, lists, GFM tables and paragraphs. Each block's text is
//! handed to the inline grammar ([`inline`]), which recognizes emphasis,
//! code spans, links, images, strikethrough and hard breaks, recursing into
//! nested content.
//!
//! Malformed markup never fails: an unmatched candidate is kept as literal
//! text.
//!
//! # Example
//!
//! ```
//! use marklet_core::{Options, TokenKind};
//! use marklet_parser::Parser;
//!
//! let tokens = Parser::new().parse("# Hello *World*");
//! assert_eq!(
//!     tokens[0].kind,
//!     TokenKind::HeadingOpen { level: 1, id: Some("hello-world".into()) }
//! );
//! assert!(tokens.iter().any(|t| t.kind == TokenKind::EmOpen));
//! ```

pub mod block;
pub mod inline;
pub mod slug;
pub mod state;
pub mod table;

pub use block::parse_blocks;
pub use inline::{parse_inline, split_target};
pub use slug::slugify;
pub use state::{Cursor, MAX_INLINE_DEPTH, TokenBuffer};
pub use table::{parse_alignments, split_cells};

use log::debug;
use marklet_core::{Options, Token};
use std::borrow::Cow;

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Tokenize a markdown document.
pub fn tokenize(markdown: &str, options: &Options) -> Vec<Token> {
    let src = normalize_newlines(markdown);

    let mut buf = TokenBuffer::new(options);
    parse_blocks(&mut buf, &src);
    let tokens = buf.finish();

    debug!("tokenized {} bytes into {} tokens", src.len(), tokens.len());
    tokens
}

/// Markdown parser holding the options for its parse calls.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: Options,
}

impl Parser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Tokenize `markdown` with this parser's options.
    pub fn parse(&self, markdown: &str) -> Vec<Token> {
        tokenize(markdown, &self.options)
    }
}
