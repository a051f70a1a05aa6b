//! Marklet Syntax
//!
//! HTML syntax highlighting for fenced code blocks using the syntect
//! library.
//!
//! # Features
//!
//! - **Fence names** - Map common fence names (py, js, sh) to syntect syntaxes
//! - **Inline styles** - Each token becomes a `<span style="...">`, no stylesheet needed
//! - **Safe fallback** - Unknown languages render as plain text; failures as escaped code
//!
//! # Example
//!
//! ```
//! use marklet_syntax::Highlighter;
//!
//! let highlighter = Highlighter::new();
//! let html = highlighter.highlight_html("let x = 1;", "rs").unwrap();
//! assert!(html.contains("<span"));
//! ```

mod languages;

pub use languages::{syntax_name, FENCE_NAMES};

use log::warn;
use marklet_core::{escape_html, Highlight, MarkletError, Result};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Syntax highlighter producing HTML.
pub struct Highlighter {
    /// Syntax definitions
    syntax_set: SyntaxSet,
    /// Color themes
    theme_set: ThemeSet,
    /// Current theme name
    theme_name: String,
}

impl std::fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Highlighter")
            .field("theme_name", &self.theme_name)
            .finish()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Create a highlighter with the default theme.
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME)
    }

    /// Create a highlighter with a specific theme.
    ///
    /// Built-in themes:
    /// - "InspiredGitHub"
    /// - "base16-ocean.dark"
    /// - "base16-ocean.light"
    /// - "base16-eighties.dark"
    /// - "base16-mocha.dark"
    /// - "Solarized (dark)"
    /// - "Solarized (light)"
    pub fn with_theme(theme_name: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme_name.to_string(),
        }
    }

    pub fn set_theme(&mut self, theme_name: &str) {
        self.theme_name = theme_name.to_string();
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// The current theme, if it exists.
    pub fn theme(&self) -> Option<&Theme> {
        self.theme_set.themes.get(&self.theme_name)
    }

    /// Find the syntax for a fence language.
    ///
    /// Known fence names are mapped first, then syntect's own name, token
    /// and extension lookups are tried.
    pub fn syntax_for_language(&self, language: &str) -> Option<&SyntaxReference> {
        syntax_name(language)
            .and_then(|name| self.syntax_set.find_syntax_by_name(name))
            .or_else(|| self.syntax_set.find_syntax_by_name(language))
            .or_else(|| self.syntax_set.find_syntax_by_token(language))
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
    }

    /// Highlight `code` as HTML spans with inline styles.
    ///
    /// Unknown languages are highlighted as plain text. Fails if the theme
    /// does not exist or syntect cannot parse the code.
    pub fn highlight_html(&self, code: &str, language: &str) -> Result<String> {
        let theme = self
            .theme()
            .ok_or_else(|| MarkletError::Highlight(format!("unknown theme: {}", self.theme_name)))?;
        let syntax = self
            .syntax_for_language(language)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut lines = HighlightLines::new(syntax, theme);
        let mut html = String::new();
        for line in LinesWithEndings::from(code) {
            let regions = lines
                .highlight_line(line, &self.syntax_set)
                .map_err(|e| MarkletError::Highlight(e.to_string()))?;
            let styled = styled_line_to_highlighted_html(&regions, IncludeBackground::No)
                .map_err(|e| MarkletError::Highlight(e.to_string()))?;
            html.push_str(&styled);
        }

        Ok(html)
    }

    /// List available theme names.
    pub fn themes(&self) -> Vec<&str> {
        self.theme_set.themes.keys().map(|s| s.as_str()).collect()
    }

    /// List available syntax names.
    pub fn languages(&self) -> Vec<&str> {
        self.syntax_set
            .syntaxes()
            .iter()
            .map(|s| s.name.as_str())
            .collect()
    }

    pub fn has_theme(&self, name: &str) -> bool {
        self.theme_set.themes.contains_key(name)
    }

    pub fn has_language(&self, name: &str) -> bool {
        self.syntax_for_language(name).is_some()
    }
}

impl Highlight for Highlighter {
    fn highlight(&self, code: &str, lang: &str) -> String {
        match self.highlight_html(code, lang) {
            Ok(html) => html,
            Err(e) => {
                warn!("{}; rendering {} block unhighlighted", e, lang);
                escape_html(code).into_owned()
            }
        }
    }
}
