//! Integration tests for marklet.
//!
//! These tests run whole documents through `marklet::parse` and check the
//! exact HTML produced.

use std::sync::Arc;
use std::thread;

use marklet::{escape_html, parse, tokenize, Options, TokenKind};

/// Helper to convert with default options.
fn html(src: &str) -> String {
    parse(src, &Options::default())
}

// =============================================================================
// Block Tests
// =============================================================================

#[test]
fn test_heading_with_id() {
    assert_eq!(
        html("# Hello World"),
        "<h1 id=\"hello-world\">Hello World</h1>\n"
    );
}

#[test]
fn test_heading_levels() {
    let out = html("# A\n## B\n### C\n#### D\n##### E\n###### F");
    for level in 1..=6 {
        assert!(out.contains(&format!("<h{} id=", level)), "missing h{}", level);
    }
}

#[test]
fn test_heading_prefix_and_disabled_ids() {
    let prefixed = Options {
        header_prefix: "doc-".to_string(),
        ..Options::default()
    };
    assert_eq!(
        parse("## Intro", &prefixed),
        "<h2 id=\"doc-intro\">Intro</h2>\n"
    );

    let no_ids = Options {
        header_ids: false,
        ..Options::default()
    };
    assert_eq!(parse("# Title", &no_ids), "<h1>Title</h1>\n");
}

#[test]
fn test_heading_id_keeps_ascii_word_chars_only() {
    assert_eq!(
        html("# Café Crème"),
        "<h1 id=\"caf-crme\">Café Crème</h1>\n"
    );
    assert_eq!(html("# 日本語"), "<h1>日本語</h1>\n");
}

#[test]
fn test_fence_with_language() {
    assert_eq!(
        html("```js\ncode\n```"),
        "<pre><code class=\"language-js\">code</code></pre>\n"
    );
}

#[test]
fn test_fence_without_language() {
    assert_eq!(
        html("```\n<div>\n```"),
        "<pre><code>&lt;div&gt;</code></pre>\n"
    );
}

#[test]
fn test_fence_keeps_markup_literal() {
    let out = html("```md\n# not a heading\n**not bold**\n```");
    assert!(!out.contains("<h1"));
    assert!(!out.contains("<strong>"));
    assert!(out.contains("# not a heading\n**not bold**"));
}

#[test]
fn test_unterminated_fence_is_not_code_block() {
    let out = html("```rust\nfn main() {}");
    assert!(!out.contains("<pre>"));
    assert!(out.contains("fn main() {}"));
}

#[test]
fn test_thematic_breaks() {
    for src in ["---", "***", "___", "- - -", "*****"] {
        assert_eq!(html(src), "<hr>\n", "input {:?}", src);
    }
}

#[test]
fn test_thematic_break_must_fill_line() {
    assert_eq!(html("***bold***"), "<p><strong>*bold</strong>*</p>\n");
    assert_eq!(html("--- x"), "<p>--- x</p>\n");
}

#[test]
fn test_blockquote_lines_are_paragraphs() {
    assert_eq!(
        html("> first\n> second"),
        "<blockquote>\n<p>first</p>\n<p>second</p>\n</blockquote>\n"
    );
}

#[test]
fn test_bullet_list() {
    assert_eq!(
        html("- one\n* two\n+ three"),
        "<ul>\n<li>one</li>\n<li>two</li>\n<li>three</li>\n</ul>\n"
    );
}

#[test]
fn test_ordered_list() {
    assert_eq!(
        html("1. one\n2. two"),
        "<ol>\n<li>one</li>\n<li>two</li>\n</ol>\n"
    );
}

#[test]
fn test_task_list() {
    assert_eq!(
        html("- [x] done\n- [ ] todo"),
        "<ul>\n<li><input type=\"checkbox\" checked disabled> done</li>\n\
         <li><input type=\"checkbox\" disabled> todo</li>\n</ul>\n"
    );
}

#[test]
fn test_bold_line_is_not_list() {
    assert_eq!(html("**Item**"), "<p><strong>Item</strong></p>\n");
}

#[test]
fn test_table_with_alignment() {
    assert_eq!(
        html("| L | C | R |\n|:--|:-:|--:|\n| 1 | 2 | 3 |"),
        "<table>\n<thead>\n<tr>\n\
         <th align=\"left\">L</th>\n<th align=\"center\">C</th>\n<th align=\"right\">R</th>\n\
         </tr>\n</thead>\n<tbody>\n<tr>\n\
         <td align=\"left\">1</td>\n<td align=\"center\">2</td>\n<td align=\"right\">3</td>\n\
         </tr>\n</tbody>\n</table>\n"
    );
}

#[test]
fn test_table_escaped_pipe_in_code_cell() {
    assert_eq!(
        html("| a | b |\n|---|---|\n| `x \\| y` | z |"),
        "<table>\n<thead>\n<tr>\n<th>a</th>\n<th>b</th>\n</tr>\n</thead>\n\
         <tbody>\n<tr>\n<td><code>x \\| y</code></td>\n<td>z</td>\n</tr>\n</tbody>\n</table>\n"
    );
}

#[test]
fn test_table_requires_gfm() {
    let options = Options {
        gfm: false,
        ..Options::default()
    };
    let out = parse("| a |\n|---|\n| 1 |", &options);
    assert!(!out.contains("<table>"));
    assert!(out.starts_with("<p>| a |"));
}

#[test]
fn test_paragraphs_split_on_blank_line() {
    assert_eq!(html("one\ntwo\n\nthree"), "<p>one\ntwo</p>\n<p>three</p>\n");
}

#[test]
fn test_crlf_input() {
    assert_eq!(html("# T\r\n\r\nbody\r\n"), html("# T\n\nbody\n"));
}

// =============================================================================
// Inline Tests
// =============================================================================

#[test]
fn test_emphasis() {
    assert_eq!(html("*d*"), "<p><em>d</em></p>\n");
    assert_eq!(html("_d_"), "<p><em>d</em></p>\n");
}

#[test]
fn test_strong() {
    assert_eq!(html("**b** __u__"), "<p><strong>b</strong> <strong>u</strong></p>\n");
}

#[test]
fn test_intraword_underscores() {
    assert_eq!(html("snake_case_value"), "<p>snake_case_value</p>\n");
    assert!(!html("foo__bar__baz").contains("<strong>"));
    assert_eq!(html("é_x_"), "<p>é<em>x</em></p>\n");
}

#[test]
fn test_unclosed_strong_is_literal() {
    assert_eq!(html("**unclosed bold"), "<p>**unclosed bold</p>\n");
}

#[test]
fn test_code_span_not_reparsed() {
    assert_eq!(
        html("`*not italic*`"),
        "<p><code>*not italic*</code></p>\n"
    );
}

#[test]
fn test_strikethrough() {
    assert_eq!(html("~~gone~~"), "<p><del>gone</del></p>\n");

    let options = Options {
        gfm: false,
        ..Options::default()
    };
    assert_eq!(parse("~~kept~~", &options), "<p>~~kept~~</p>\n");
}

#[test]
fn test_nested_inline() {
    assert_eq!(
        html("**bold *and* italic**"),
        "<p><strong>bold <em>and</em> italic</strong></p>\n"
    );
    assert_eq!(
        html("[**x**](/y)"),
        "<p><a href=\"/y\"><strong>x</strong></a></p>\n"
    );
}

#[test]
fn test_link_with_title_and_escaping() {
    assert_eq!(
        html("[a](/x?a=1&b=2 \"T\")"),
        "<p><a href=\"/x?a=1&amp;b=2\" title=\"T\">a</a></p>\n"
    );
}

#[test]
fn test_link_without_target_is_text() {
    assert_eq!(html("[not a link]"), "<p>[not a link]</p>\n");
}

#[test]
fn test_image() {
    assert_eq!(
        html("![alt|x](/i.png \"Pic\")"),
        "<p><img src=\"/i.png\" alt=\"alt|x\" title=\"Pic\"></p>\n"
    );
}

#[test]
fn test_breaks_option() {
    let options = Options {
        breaks: true,
        ..Options::default()
    };
    assert_eq!(parse("a\nb", &options), "<p>a<br>b</p>\n");
    assert_eq!(html("a\nb"), "<p>a\nb</p>\n");
}

// =============================================================================
// Escaping and Options Tests
// =============================================================================

#[test]
fn test_text_is_escaped() {
    assert_eq!(
        html("<script>alert('x') & \"y\"</script>"),
        "<p>&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;</p>\n"
    );
}

#[test]
fn test_escape_html_borrows_clean_input() {
    use std::borrow::Cow;
    assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
    assert_eq!(escape_html("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
}

#[test]
fn test_highlight_hook() {
    let options = Options::default()
        .with_highlight(|code: &str, lang: &str| format!("<b>{}</b>:{}", lang, code.len()));
    assert_eq!(
        parse("```rs\nabc\n```\n\n```\nplain\n```", &options),
        "<pre><code class=\"language-rs\"><b>rs</b>:3</code></pre>\n\
         <pre><code>plain</code></pre>\n"
    );
}

#[test]
fn test_reserved_options_have_no_effect() {
    let src = "# T\n\n- a\n\n\"quotes\" -- dashes <b>";
    let reserved = Options {
        pedantic: true,
        smart_lists: false,
        smartypants: true,
        sanitize: true,
        ..Options::default()
    };
    assert_eq!(parse(src, &reserved), html(src));
}

#[test]
fn test_parse_from_many_threads() {
    let options = Arc::new(Options::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let options = Arc::clone(&options);
            thread::spawn(move || parse(&format!("# Doc {}\n\n*x*", i), &options))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap();
        assert_eq!(
            out,
            format!("<h1 id=\"doc-{}\">Doc {}</h1>\n<p><em>x</em></p>\n", i, i)
        );
    }
}

// =============================================================================
// Document Tests
// =============================================================================

#[test]
fn test_full_document() {
    let src = "# Title\n\nIntro with `code` and a [link](https://example.com).\n\n\
               - [x] first\n- second\n\n> quoted\n\n```python\nprint(1 < 2)\n```\n\n---\n";
    assert_eq!(
        html(src),
        "<h1 id=\"title\">Title</h1>\n\
         <p>Intro with <code>code</code> and a <a href=\"https://example.com\">link</a>.</p>\n\
         <ul>\n<li><input type=\"checkbox\" checked disabled> first</li>\n<li>second</li>\n</ul>\n\
         <blockquote>\n<p>quoted</p>\n</blockquote>\n\
         <pre><code class=\"language-python\">print(1 &lt; 2)</code></pre>\n\
         <hr>\n"
    );
}

#[test]
fn test_token_levels_balance() {
    let src = "# T\n\n- **a**\n\n> q\n\n| x |\n|---|\n| ~~y~~ |\n\n[l](u)";
    let tokens = tokenize(src, &Options::default());

    let mut level: isize = 0;
    for token in &tokens {
        level += token.nesting.delta() as isize;
        assert!(level >= 0);
    }
    assert_eq!(level, 0);
    assert!(tokens.iter().any(|t| t.kind == TokenKind::TableOpen));
}
