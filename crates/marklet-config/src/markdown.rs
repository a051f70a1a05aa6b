//! Markdown dialect configuration.
//!
//! The `[markdown]` section maps onto [`marklet_core::Options`].

use marklet_core::Options;
use serde::{Deserialize, Serialize};

/// Markdown dialect settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarkdownConfig {
    /// Enable GitHub Flavored Markdown (tables, strikethrough).
    /// Default: true
    #[serde(default = "default_true")]
    pub gfm: bool,

    /// Turn line feeds inside paragraphs into `<br>`.
    /// Default: false
    #[serde(default)]
    pub breaks: bool,

    /// Emit slug ids on headings.
    /// Default: true
    #[serde(default = "default_true")]
    pub header_ids: bool,

    /// Prefix for heading ids.
    /// Default: ""
    #[serde(default)]
    pub header_prefix: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            breaks: false,
            header_ids: true,
            header_prefix: String::new(),
        }
    }
}

impl MarkdownConfig {
    /// Merge another MarkdownConfig into this one; `other` wins.
    pub fn merge(&mut self, other: &MarkdownConfig) {
        self.gfm = other.gfm;
        self.breaks = other.breaks;
        self.header_ids = other.header_ids;
        self.header_prefix = other.header_prefix.clone();
    }

    /// Parse options for these settings, without a highlighter.
    pub fn to_options(&self) -> Options {
        Options {
            gfm: self.gfm,
            breaks: self.breaks,
            header_ids: self.header_ids,
            header_prefix: self.header_prefix.clone(),
            ..Options::default()
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_options() {
        let options = MarkdownConfig::default().to_options();
        let defaults = Options::default();
        assert_eq!(options.gfm, defaults.gfm);
        assert_eq!(options.breaks, defaults.breaks);
        assert_eq!(options.header_ids, defaults.header_ids);
        assert_eq!(options.header_prefix, defaults.header_prefix);
        assert!(options.highlight.is_none());
    }

    #[test]
    fn test_serde_pascal_case() {
        let toml_str = r#"
            Gfm = false
            Breaks = true
            HeaderIds = false
            HeaderPrefix = "user-content-"
        "#;

        let markdown: MarkdownConfig = toml::from_str(toml_str).unwrap();
        assert!(!markdown.gfm);
        assert!(markdown.breaks);
        assert!(!markdown.header_ids);
        assert_eq!(markdown.header_prefix, "user-content-");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let markdown: MarkdownConfig = toml::from_str("Breaks = true").unwrap();
        assert!(markdown.gfm);
        assert!(markdown.header_ids);
        assert!(markdown.breaks);
    }

    #[test]
    fn test_merge() {
        let mut base = MarkdownConfig::default();
        let other = MarkdownConfig {
            header_prefix: "x-".into(),
            ..MarkdownConfig::default()
        };
        base.merge(&other);
        assert_eq!(base.header_prefix, "x-");
    }
}
