//! Code highlighting configuration.

use serde::{Deserialize, Serialize};

/// Theme used when the config does not name one.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Code highlighting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HighlightConfig {
    /// Highlight fenced code blocks that name a language.
    /// Default: false
    #[serde(default)]
    pub enabled: bool,

    /// syntect theme name.
    /// Default: "InspiredGitHub"
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            theme: default_theme(),
        }
    }
}

impl HighlightConfig {
    /// Merge another HighlightConfig into this one; `other` wins.
    pub fn merge(&mut self, other: &HighlightConfig) {
        self.enabled = other.enabled;
        self.theme = other.theme.clone();
    }
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}
