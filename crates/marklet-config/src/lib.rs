//! Marklet Config
//!
//! This crate handles configuration loading and management
//! for marklet, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/marklet/config.toml`
//! - macOS: `~/Library/Application Support/marklet/config.toml`
//! - Windows: `%APPDATA%\marklet\config\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use marklet_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or layer an override file (or inline TOML) on top
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! let options = config.options();
//! ```

mod highlight;
mod markdown;

pub use highlight::{HighlightConfig, DEFAULT_THEME};
pub use markdown::MarkdownConfig;

use log::debug;
use marklet_core::{MarkletError, Options, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[markdown]
Gfm          = true
Breaks       = false
HeaderIds    = true
HeaderPrefix = ""

[highlight]
Enabled = false
Theme   = "InspiredGitHub"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Markdown dialect
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Code highlighting
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use marklet_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[markdown]"));
    /// assert!(toml.contains("[highlight]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "marklet")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| MarkletError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            debug!("writing default config to {}", config_path.display());
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MarkletError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Read the config file from the default location, if any
    /// 2. If `override_config` is an existing file path, read it; otherwise
    ///    treat it as inline TOML
    /// 3. Keys set in the override replace keys from the file; keys set in
    ///    neither take their defaults
    ///
    /// # Example
    ///
    /// ```no_run
    /// use marklet_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[markdown]\nBreaks = true")).unwrap();
    /// assert!(config.markdown.breaks);
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut table = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                parse_table(&content, &path.display().to_string())?
            }
            _ => toml::Table::new(),
        };

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);
            let overrides = if override_path.exists() {
                debug!("loading config override from {}", override_path.display());
                let content = std::fs::read_to_string(override_path)?;
                parse_table(&content, override_str)?
            } else {
                parse_table(override_str, "override")?
            };
            merge_tables(&mut table, overrides);
        }

        toml::Value::Table(table)
            .try_into()
            .map_err(|e| MarkletError::Config(format!("Invalid config: {}", e)))
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use marklet_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [markdown]
    ///     Gfm = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.markdown.gfm);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.markdown.merge(&other.markdown);
        self.highlight.merge(&other.highlight);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| MarkletError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Parse options from the `[markdown]` section.
    ///
    /// The highlighter is not attached here; see `marklet_syntax`.
    pub fn options(&self) -> Options {
        self.markdown.to_options()
    }
}

fn parse_table(content: &str, origin: &str) -> Result<toml::Table> {
    content
        .parse::<toml::Table>()
        .map_err(|e| MarkletError::Config(format!("Parse error in {}: {}", origin, e)))
}

/// Recursively overlay `overrides` onto `base`; nested tables merge key by key.
fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}
