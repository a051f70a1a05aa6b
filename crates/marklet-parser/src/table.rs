//! GFM table grammar.

use crate::inline::parse_inline;
use crate::state::{Cursor, TokenBuffer};
use log::debug;
use marklet_core::{Align, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

/// Delimiter row: `|---|:--|--:|:-:|`
static ALIGN_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|(?:\s*:?-+:?\s*\|)+$").unwrap());

/// Split a table row into trimmed cells.
///
/// Pipes inside backtick code spans or preceded by a backslash do not split.
/// Backslashes are kept so inline parsing sees the original text. The
/// pieces before the first and after the last pipe are dropped.
///
/// # Example
///
/// ```
/// use marklet_parser::split_cells;
///
/// assert_eq!(split_cells("| a | `b|c` |"), vec!["a", "`b|c`"]);
/// assert_eq!(split_cells(r"| x \| y |"), vec![r"x \| y"]);
/// ```
pub fn split_cells(line: &str) -> Vec<&str> {
    let mut cells = Vec::new();
    let mut cell_start = 0;
    let mut in_code = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '`' => in_code = !in_code,
            '|' if !in_code => {
                cells.push(line[cell_start..i].trim());
                cell_start = i + 1;
            }
            _ => {}
        }
    }

    let last = &line[cell_start..];
    if !last.is_empty() || !cells.is_empty() {
        cells.push(last.trim());
    }

    if cells.len() < 2 {
        return Vec::new();
    }
    cells.pop();
    cells.remove(0);
    cells
}

/// Column alignments from a delimiter row, or `None` if it is not one.
pub fn parse_alignments(row: &str) -> Option<Vec<Option<Align>>> {
    if !ALIGN_ROW_RE.is_match(row) {
        return None;
    }

    let cells: Vec<&str> = row.split('|').collect();
    let inner = &cells[1..cells.len() - 1];
    Some(inner.iter().map(|cell| cell_align(cell)).collect())
}

fn cell_align(cell: &str) -> Option<Align> {
    let cell = cell.trim();
    match (cell.starts_with(':'), cell.ends_with(':')) {
        (true, true) => Some(Align::Center),
        (false, true) => Some(Align::Right),
        (true, false) => Some(Align::Left),
        (false, false) => None,
    }
}

/// Header row, delimiter row, then body rows while lines are `|...|`.
pub fn table(buf: &mut TokenBuffer<'_>, cur: Cursor<'_>) -> Option<usize> {
    let start = cur.pos();
    let header_end = cur.line_end(start);
    let header = cur.slice(start, header_end);
    if !header.starts_with('|') || !header.trim().ends_with('|') {
        return None;
    }

    let delim_start = header_end + 1;
    let delim_end = cur.line_end(delim_start);
    let Some(aligns) = parse_alignments(cur.slice(delim_start, delim_end).trim()) else {
        debug!("table at byte {} has no delimiter row", start);
        return None;
    };

    buf.push(TokenKind::TableOpen);
    buf.push(TokenKind::TheadOpen);
    buf.push(TokenKind::TrOpen);
    for (i, cell) in split_cells(header).into_iter().enumerate() {
        let align = aligns.get(i).copied().flatten();
        buf.push(TokenKind::ThOpen { align });
        parse_inline(buf, cell);
        buf.push(TokenKind::ThClose);
    }
    buf.push(TokenKind::TrClose);
    buf.push(TokenKind::TheadClose);

    buf.push(TokenKind::TbodyOpen);
    let mut pos = delim_end + 1;
    while pos < cur.max() {
        let line_end = cur.line_end(pos);
        let row = cur.slice(pos, line_end).trim();
        if !row.starts_with('|') || !row.ends_with('|') {
            break;
        }

        buf.push(TokenKind::TrOpen);
        for (i, cell) in split_cells(row).into_iter().enumerate() {
            let align = aligns.get(i).copied().flatten();
            buf.push(TokenKind::TdOpen { align });
            parse_inline(buf, cell);
            buf.push(TokenKind::TdClose);
        }
        buf.push(TokenKind::TrClose);

        pos = line_end + 1;
    }
    buf.push(TokenKind::TbodyClose);
    buf.push(TokenKind::TableClose);

    Some(pos)
}
