//! Scanner cursor and token buffer.
//!
//! A parse is driven by two pieces of state:
//!
//! - [`Cursor`] - a read position over one source string. It is `Copy`, so
//!   a recognizer can probe ahead on its own copy and the caller only moves
//!   forward when the recognizer reports a match. Inline re-entry builds a
//!   new cursor over the content string instead of swapping the caller's.
//! - [`TokenBuffer`] - the flat token list, the pending-text accumulator,
//!   the nesting level and the inline recursion depth.

use marklet_core::{Nesting, Options, Token, TokenKind};

/// Maximum number of nested inline scans before content is kept literal.
pub const MAX_INLINE_DEPTH: usize = 32;

/// Byte cursor over a source string.
///
/// Positions are byte offsets. Every position the grammar computes sits
/// right after an ASCII marker or at a search hit, so slicing is always on
/// a char boundary.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'s> {
    src: &'s str,
    pos: usize,
    max: usize,
}

impl<'s> Cursor<'s> {
    /// Create a cursor at the start of `src`.
    pub fn new(src: &'s str) -> Self {
        Self {
            src,
            pos: 0,
            max: src.len(),
        }
    }

    /// The full source string.
    pub fn src(&self) -> &'s str {
        self.src
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// End bound (exclusive).
    pub fn max(&self) -> usize {
        self.max
    }

    /// Move to `pos`, clamped to the end bound.
    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.max);
    }

    /// A copy of this cursor moved to `pos`.
    pub fn at(self, pos: usize) -> Self {
        let mut cursor = self;
        cursor.set_pos(pos);
        cursor
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.max
    }

    /// Byte at the current position.
    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    pub fn byte_at(&self, index: usize) -> Option<u8> {
        if index < self.max {
            Some(self.src.as_bytes()[index])
        } else {
            None
        }
    }

    /// Character starting at byte `index`.
    pub fn char_at(&self, index: usize) -> Option<char> {
        if index >= self.max {
            return None;
        }
        self.src[index..self.max].chars().next()
    }

    /// Character ending right before byte `index`.
    pub fn char_before(&self, index: usize) -> Option<char> {
        self.src[..index.min(self.max)].chars().next_back()
    }

    /// Remaining input from the current position.
    pub fn rest(&self) -> &'s str {
        &self.src[self.pos..self.max]
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Whether the current position is the first byte of a line.
    pub fn is_line_start(&self) -> bool {
        self.pos == 0 || self.src.as_bytes()[self.pos - 1] == b'\n'
    }

    /// First occurrence of `needle` at or after `from`.
    pub fn find(&self, needle: &str, from: usize) -> Option<usize> {
        if from > self.max {
            return None;
        }
        self.src[from..self.max].find(needle).map(|i| from + i)
    }

    /// Offset of the line feed ending the line containing `from`, or the
    /// end bound.
    pub fn line_end(&self, from: usize) -> usize {
        self.find("\n", from).unwrap_or(self.max)
    }

    /// Source between two offsets, clamped to the end bound.
    pub fn slice(&self, start: usize, end: usize) -> &'s str {
        let end = end.min(self.max);
        let start = start.min(end);
        &self.src[start..end]
    }

    /// Consume one character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.char_at(self.pos)?;
        self.pos += c.len_utf8();
        Some(c)
    }
}

/// Accumulated output of one parse call.
#[derive(Debug)]
pub struct TokenBuffer<'o> {
    tokens: Vec<Token>,
    pending: String,
    level: usize,
    depth: usize,
    options: &'o Options,
}

impl<'o> TokenBuffer<'o> {
    pub fn new(options: &'o Options) -> Self {
        Self {
            tokens: Vec::new(),
            pending: String::new(),
            level: 0,
            depth: 0,
            options,
        }
    }

    pub fn options(&self) -> &'o Options {
        self.options
    }

    /// Current nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Current inline recursion depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Literal text not yet turned into a token.
    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn push_char(&mut self, c: char) {
        self.pending.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.pending.push_str(text);
    }

    /// Turn pending text into a single text token.
    pub fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let content = std::mem::take(&mut self.pending);
        self.tokens
            .push(Token::new(TokenKind::Text(content), self.level));
    }

    /// Push a markup token, flushing pending text first.
    ///
    /// Close tokens are recorded one level up from their children, open
    /// tokens at the level they open from.
    pub fn push(&mut self, kind: TokenKind) {
        self.flush_pending();

        let nesting = kind.nesting();
        if nesting == Nesting::Close {
            self.level = self.level.saturating_sub(1);
        }
        self.tokens.push(Token::new(kind, self.level));
        if nesting == Nesting::Open {
            self.level += 1;
        }
    }

    /// Enter one level of inline recursion; `false` once the limit is hit.
    pub(crate) fn enter_inline(&mut self) -> bool {
        if self.depth >= MAX_INLINE_DEPTH {
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn exit_inline(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Flush pending text and hand over the token list.
    pub fn finish(mut self) -> Vec<Token> {
        self.flush_pending();
        self.tokens
    }
}
