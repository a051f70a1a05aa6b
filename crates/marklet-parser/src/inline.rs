//! Inline markdown grammar.
//!
//! Scans one block's content for emphasis, strong emphasis, code spans,
//! links, images, strikethrough and hard breaks. Nested content (the inside
//! of `**...**`, link text, ...) is scanned by a recursive call on a fresh
//! cursor over just that substring, so the caller's position is never
//! touched. Any candidate that does not find its closing delimiter is
//! abandoned and its first character is kept as literal text.

use crate::state::{Cursor, TokenBuffer};
use log::trace;
use marklet_core::TokenKind;
use regex::Regex;
use std::sync::LazyLock;

/// Link/image target with a trailing quoted title: `url "title"` or `url 'title'`
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(.*?)\s+["'](.*)["']$"#).unwrap());

/// Scan `content` and append its tokens to `buf`.
///
/// Pending literal text is flushed before returning.
pub fn parse_inline(buf: &mut TokenBuffer<'_>, content: &str) {
    if !buf.enter_inline() {
        trace!(
            "inline depth limit reached, keeping {} bytes literal",
            content.len()
        );
        buf.push_str(content);
        buf.flush_pending();
        return;
    }

    InlineScanner {
        buf: &mut *buf,
        cur: Cursor::new(content),
    }
    .run();

    buf.flush_pending();
    buf.exit_inline();
}

/// Split a link target into URL and optional non-empty title.
pub fn split_target(target: &str) -> (&str, Option<&str>) {
    match TITLE_RE.captures(target) {
        Some(caps) => {
            let url = caps.get(1).map_or("", |m| m.as_str());
            let title = caps.get(2).map(|m| m.as_str()).filter(|t| !t.is_empty());
            (url, title)
        }
        None => (target, None),
    }
}

/// Word characters block `_` emphasis from opening or closing.
fn is_word(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Locate `[label](target)` with the label starting at `label_start`.
///
/// Returns the label, the raw target and the offset past `)`.
fn bracket_target(cur: Cursor<'_>, label_start: usize) -> Option<(&str, &str, usize)> {
    let label_end = cur.find("]", label_start)?;
    if cur.byte_at(label_end + 1) != Some(b'(') {
        return None;
    }
    let target_start = label_end + 2;
    let target_end = cur.find(")", target_start)?;
    Some((
        cur.slice(label_start, label_end),
        cur.slice(target_start, target_end),
        target_end + 1,
    ))
}

struct InlineScanner<'b, 'o, 's> {
    buf: &'b mut TokenBuffer<'o>,
    cur: Cursor<'s>,
}

impl InlineScanner<'_, '_, '_> {
    fn run(&mut self) {
        let options = self.buf.options();

        while let Some(b) = self.cur.peek() {
            let pos = self.cur.pos();
            let next_byte = self.cur.byte_at(pos + 1);

            let matched = match b {
                b'*' | b'_' => {
                    let strong = if next_byte == Some(b) {
                        self.strong(b)
                    } else {
                        None
                    };
                    strong.or_else(|| self.emphasis(b))
                }
                b'`' => self.code_span(),
                b'[' => self.link(),
                b'!' if next_byte == Some(b'[') => self.image(),
                b'~' if options.gfm && next_byte == Some(b'~') => self.strikethrough(),
                b'\n' if options.breaks => {
                    self.buf.push(TokenKind::Break);
                    Some(pos + 1)
                }
                _ => None,
            };

            match matched {
                Some(next) => self.cur.set_pos(next),
                None => {
                    if let Some(c) = self.cur.bump() {
                        self.buf.push_char(c);
                    }
                }
            }
        }
    }

    /// `**strong**` or `__strong__`
    fn strong(&mut self, marker: u8) -> Option<usize> {
        let start = self.cur.pos();
        let underscore = marker == b'_';
        if underscore && is_word(self.cur.char_before(start)) {
            return None;
        }

        let delim = if underscore { "__" } else { "**" };
        let close = self.cur.find(delim, start + 2)?;
        if underscore && is_word(self.cur.char_at(close + 2)) {
            return None;
        }

        let text = self.cur.slice(start + 2, close);
        self.buf.push(TokenKind::StrongOpen);
        parse_inline(self.buf, text);
        self.buf.push(TokenKind::StrongClose);
        Some(close + 2)
    }

    /// `*em*` or `_em_`
    fn emphasis(&mut self, marker: u8) -> Option<usize> {
        let start = self.cur.pos();
        let underscore = marker == b'_';
        if underscore && is_word(self.cur.char_before(start)) {
            return None;
        }

        let delim = if underscore { "_" } else { "*" };
        let text_start = start + 1;
        let mut from = text_start;
        let close = loop {
            let at = self.cur.find(delim, from)?;
            if self.cur.byte_at(at + 1) == Some(marker) {
                // part of a doubled marker
                from = at + 2;
                continue;
            }
            if underscore && is_word(self.cur.char_at(at + 1)) {
                from = at + 1;
                continue;
            }
            break at;
        };

        if close == text_start {
            return None;
        }

        let text = self.cur.slice(text_start, close);
        self.buf.push(TokenKind::EmOpen);
        parse_inline(self.buf, text);
        self.buf.push(TokenKind::EmClose);
        Some(close + 1)
    }

    /// `` `code` ``, content taken verbatim
    fn code_span(&mut self) -> Option<usize> {
        let start = self.cur.pos();
        let close = self.cur.find("`", start + 1)?;
        let code = self.cur.slice(start + 1, close);
        self.buf.push(TokenKind::CodeInline(code.to_string()));
        Some(close + 1)
    }

    /// `[text](url "title")`
    fn link(&mut self) -> Option<usize> {
        let cur = self.cur;
        let (text, target, next) = bracket_target(cur, cur.pos() + 1)?;
        let (href, title) = split_target(target);

        self.buf.push(TokenKind::LinkOpen {
            href: href.to_string(),
            title: title.map(str::to_string),
        });
        parse_inline(self.buf, text);
        self.buf.push(TokenKind::LinkClose);
        Some(next)
    }

    /// `![alt](src "title")`, alt kept literal
    fn image(&mut self) -> Option<usize> {
        let cur = self.cur;
        let (alt, target, next) = bracket_target(cur, cur.pos() + 2)?;
        let (src, title) = split_target(target);

        self.buf.push(TokenKind::Image {
            src: src.to_string(),
            alt: alt.to_string(),
            title: title.map(str::to_string),
        });
        Some(next)
    }

    /// `~~deleted~~`
    fn strikethrough(&mut self) -> Option<usize> {
        let start = self.cur.pos();
        let close = self.cur.find("~~", start + 2)?;

        let text = self.cur.slice(start + 2, close);
        self.buf.push(TokenKind::DelOpen);
        parse_inline(self.buf, text);
        self.buf.push(TokenKind::DelClose);
        Some(close + 2)
    }
}
