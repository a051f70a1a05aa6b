//! Parse options.
//!
//! [`Options`] is read-only for the duration of one parse call and shared
//! by the block grammar, the inline grammar and the renderer.

use std::fmt;
use std::sync::Arc;

/// Code highlighting hook for fenced code blocks.
///
/// The returned markup is inserted into the output verbatim, so an
/// implementation is responsible for escaping the code it emits.
pub trait Highlight: Send + Sync {
    /// Highlight `code` written in `lang` (never empty).
    fn highlight(&self, code: &str, lang: &str) -> String;
}

impl<F> Highlight for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn highlight(&self, code: &str, lang: &str) -> String {
        self(code, lang)
    }
}

/// Markdown conversion options.
///
/// # Example
///
/// ```
/// use marklet_core::Options;
///
/// let options = Options {
///     breaks: true,
///     header_prefix: "doc-".to_string(),
///     ..Options::default()
/// };
/// assert!(options.gfm);
/// ```
#[derive(Clone)]
pub struct Options {
    /// Enable GitHub Flavored Markdown (tables, strikethrough).
    /// Default: true
    pub gfm: bool,

    /// Turn line feeds inside inline content into `<br>`.
    /// Default: false
    pub breaks: bool,

    /// Emit slug `id` attributes on headings.
    /// Default: true
    pub header_ids: bool,

    /// Prefix prepended to generated heading ids.
    /// Default: ""
    pub header_prefix: String,

    /// Optional code highlighter for fenced blocks with a language.
    pub highlight: Option<Arc<dyn Highlight>>,

    /// Reserved, no effect.
    pub pedantic: bool,

    /// Reserved, no effect.
    pub smart_lists: bool,

    /// Reserved, no effect.
    pub smartypants: bool,

    /// Reserved, no effect.
    pub sanitize: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            gfm: true,
            breaks: false,
            header_ids: true,
            header_prefix: String::new(),
            highlight: None,
            pedantic: false,
            smart_lists: true,
            smartypants: false,
            sanitize: false,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("gfm", &self.gfm)
            .field("breaks", &self.breaks)
            .field("header_ids", &self.header_ids)
            .field("header_prefix", &self.header_prefix)
            .field("highlight", &self.highlight.is_some())
            .field("pedantic", &self.pedantic)
            .field("smart_lists", &self.smart_lists)
            .field("smartypants", &self.smartypants)
            .field("sanitize", &self.sanitize)
            .finish()
    }
}

impl Options {
    /// Attach a highlighter.
    pub fn with_highlight<H: Highlight + 'static>(mut self, highlighter: H) -> Self {
        self.highlight = Some(Arc::new(highlighter));
        self
    }
}
