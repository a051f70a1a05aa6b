//! Block markdown grammar.
//!
//! Walks the document one block at a time. At each position the block
//! recognizers are tried in a fixed order and the first that matches wins.
//! A recognizer probes on its own copy of the cursor and returns the
//! offset to resume from, or `None` to let the next one try. Paragraphs
//! accept anything, so the walk always moves forward.

use crate::inline::parse_inline;
use crate::slug::slugify;
use crate::state::{Cursor, TokenBuffer};
use crate::table::table;
use log::debug;
use marklet_core::TokenKind;
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Task list prefix on an item's content: `[ ]`, `[x]` or `[X]`
static TASK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([ xX])\]\s+(.+)$").unwrap());

// =============================================================================
// Entry point
// =============================================================================

/// Scan a whole document and append its block and inline tokens to `buf`.
pub fn parse_blocks(buf: &mut TokenBuffer<'_>, src: &str) {
    let mut cur = Cursor::new(src);

    while let Some(b) = cur.peek() {
        if b == b'\n' {
            cur.set_pos(cur.pos() + 1);
            continue;
        }

        match dispatch(buf, cur, b) {
            Some(next) if next > cur.pos() => cur.set_pos(next),
            _ => {
                cur.bump();
            }
        }
    }

    buf.flush_pending();
}

/// Whether `b` can start a list item.
pub fn is_list_marker(b: u8) -> bool {
    matches!(b, b'*' | b'-' | b'+' | b'0'..=b'9')
}

fn dispatch(buf: &mut TokenBuffer<'_>, cur: Cursor<'_>, b: u8) -> Option<usize> {
    let line_start = cur.is_line_start();

    if b == b'#' && line_start {
        if let Some(next) = heading(buf, cur) {
            return Some(next);
        }
    }

    if b == b'`' && cur.starts_with("```") {
        if let Some(next) = fence(buf, cur) {
            return Some(next);
        }
    }

    if matches!(b, b'*' | b'-' | b'_') && line_start {
        if let Some(next) = thematic_break(buf, cur) {
            return Some(next);
        }
    }

    if b == b'>' && line_start {
        return Some(blockquote(buf, cur));
    }

    if is_list_marker(b) && line_start {
        if let Some(next) = list(buf, cur) {
            return Some(next);
        }
    }

    if b == b'|' && line_start && buf.options().gfm {
        if let Some(next) = table(buf, cur) {
            return Some(next);
        }
    }

    Some(paragraph(buf, cur))
}

// =============================================================================
// Recognizers
// =============================================================================

/// `# Heading` through `###### Heading`
fn heading(buf: &mut TokenBuffer<'_>, cur: Cursor<'_>) -> Option<usize> {
    let start = cur.pos();
    let mut pos = start;
    while pos - start < 6 && cur.byte_at(pos) == Some(b'#') {
        pos += 1;
    }

    let level = pos - start;
    if level == 0 || cur.byte_at(pos) != Some(b' ') {
        return None;
    }

    let text_start = pos + 1;
    let text_end = cur.line_end(text_start);
    let content = cur.slice(text_start, text_end).trim();

    let options = buf.options();
    let id = if options.header_ids {
        let id = format!("{}{}", options.header_prefix, slugify(content));
        (!id.is_empty()).then_some(id)
    } else {
        None
    };

    let level = level as u8;
    buf.push(TokenKind::HeadingOpen { level, id });
    parse_inline(buf, content);
    buf.push(TokenKind::HeadingClose { level });

    Some(text_end + 1)
}

/// Fenced code block opened by three backticks.
fn fence(buf: &mut TokenBuffer<'_>, cur: Cursor<'_>) -> Option<usize> {
    let start = cur.pos();
    let lang_start = start + 3;
    let lang_end = cur.line_end(lang_start);
    let lang = cur.slice(lang_start, lang_end).trim();

    let code_start = lang_end + 1;
    if code_start > cur.max() {
        debug!("code fence at byte {} has no body", start);
        return None;
    }

    if cur.at(code_start).starts_with("```") {
        buf.push(TokenKind::Fence {
            lang: lang.to_string(),
            content: String::new(),
        });
        return Some(code_start + 3);
    }

    let Some(close) = cur.find("\n```", code_start) else {
        debug!("unterminated code fence at byte {}", start);
        return None;
    };

    buf.push(TokenKind::Fence {
        lang: lang.to_string(),
        content: cur.slice(code_start, close).to_string(),
    });
    Some(close + 4)
}

/// Three or more `*`, `-` or `_` alone on a line, spaces allowed between.
fn thematic_break(buf: &mut TokenBuffer<'_>, cur: Cursor<'_>) -> Option<usize> {
    let marker = cur.peek()?;
    let end = cur.line_end(cur.pos());

    let mut count = 0;
    for b in cur.slice(cur.pos(), end).bytes() {
        if b == marker {
            count += 1;
        } else if b != b' ' {
            return None;
        }
    }

    if count < 3 {
        return None;
    }

    buf.push(TokenKind::Hr);
    Some(end + 1)
}

/// Consecutive `>` lines; every non-empty line becomes its own paragraph.
fn blockquote(buf: &mut TokenBuffer<'_>, cur: Cursor<'_>) -> usize {
    buf.push(TokenKind::BlockquoteOpen);

    let mut pos = cur.pos();
    while cur.byte_at(pos) == Some(b'>') {
        pos += 1;
        if cur.byte_at(pos) == Some(b' ') {
            pos += 1;
        }

        let line_end = cur.line_end(pos);
        let content = cur.slice(pos, line_end).trim();
        if !content.is_empty() {
            buf.push(TokenKind::ParagraphOpen);
            parse_inline(buf, content);
            buf.push(TokenKind::ParagraphClose);
        }

        pos = line_end + 1;
    }

    buf.push(TokenKind::BlockquoteClose);
    pos
}

/// Length of the item marker at `pos` including its trailing space.
///
/// Ordered: one or more digits, `.`, space. Bullet: a single `*`, `-` or
/// `+` followed by a space; a doubled marker is not a list item.
fn item_marker(cur: Cursor<'_>, pos: usize, ordered: bool) -> Option<usize> {
    let mut end = pos;
    if ordered {
        while cur.byte_at(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
        }
        if end == pos || cur.byte_at(end) != Some(b'.') {
            return None;
        }
        end += 1;
    } else {
        let marker = cur.byte_at(pos)?;
        if !matches!(marker, b'*' | b'-' | b'+') || cur.byte_at(pos + 1) == Some(marker) {
            return None;
        }
        end += 1;
    }

    if cur.byte_at(end) != Some(b' ') {
        return None;
    }
    Some(end + 1 - pos)
}

/// Bullet or ordered list, one item per line.
fn list(buf: &mut TokenBuffer<'_>, cur: Cursor<'_>) -> Option<usize> {
    let start = cur.pos();
    let ordered = cur.peek()?.is_ascii_digit();
    item_marker(cur, start, ordered)?;

    buf.push(if ordered {
        TokenKind::OrderedListOpen
    } else {
        TokenKind::BulletListOpen
    });

    let mut pos = start;
    while let Some(marker_len) = item_marker(cur, pos, ordered) {
        let item_start = pos + marker_len;
        let item_end = cur.line_end(item_start);
        let mut content = cur.slice(item_start, item_end).trim();

        let mut task = None;
        if let Some(caps) = TASK_RE.captures(content) {
            task = Some(&caps[1] != " ");
            if let Some(rest) = caps.get(2) {
                content = rest.as_str();
            }
        }

        buf.push(TokenKind::ListItemOpen { task });
        parse_inline(buf, content);
        buf.push(TokenKind::ListItemClose);

        pos = item_end + 1;
        if !cur.byte_at(pos).is_some_and(is_list_marker) {
            break;
        }
    }

    buf.push(if ordered {
        TokenKind::OrderedListClose
    } else {
        TokenKind::BulletListClose
    });
    Some(pos)
}

/// Text up to the next blank line.
///
/// Whitespace-only content emits nothing but still moves past the blank
/// line.
fn paragraph(buf: &mut TokenBuffer<'_>, cur: Cursor<'_>) -> usize {
    let start = cur.pos();
    let end = cur.find("\n\n", start).unwrap_or(cur.max());
    let content = cur.slice(start, end).trim();

    if !content.is_empty() {
        buf.push(TokenKind::ParagraphOpen);
        parse_inline(buf, content);
        buf.push(TokenKind::ParagraphClose);
    }

    end + 1
}
