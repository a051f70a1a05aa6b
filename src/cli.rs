//! Command-line interface for marklet.

use clap::Parser;
use marklet_config::Config;
use std::path::PathBuf;

/// Marklet - convert markdown to HTML.
///
/// Reads markdown from files or stdin and writes HTML, with GFM tables,
/// task lists, strikethrough and optional syntax highlighting.
#[derive(Parser, Debug)]
#[command(
    name = "marklet",
    author = "Marklet Contributors",
    version,
    about = "Convert markdown to HTML",
    after_help = "Examples:\n  \
                  cat README.md | marklet\n  \
                  marklet README.md -o README.html\n  \
                  marklet --highlight --theme 'Solarized (dark)' notes.md\n  \
                  marklet -c '[markdown]\\nBreaks = true' chat.md"
)]
pub struct Cli {
    /// Input files to convert (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Disable GitHub Flavored Markdown (tables, strikethrough)
    #[arg(long = "no-gfm")]
    pub no_gfm: bool,

    /// Render line feeds inside paragraphs as <br>
    #[arg(long = "breaks")]
    pub breaks: bool,

    /// Do not emit id attributes on headings
    #[arg(long = "no-header-ids")]
    pub no_header_ids: bool,

    /// Prefix for generated heading ids
    #[arg(long = "header-prefix", value_name = "PREFIX")]
    pub header_prefix: Option<String>,

    /// Highlight fenced code blocks
    #[arg(long = "highlight")]
    pub highlight: bool,

    /// Syntax highlighting theme
    #[arg(long = "theme")]
    pub theme: Option<String>,

    /// Print the token stream instead of HTML
    #[arg(long = "tokens")]
    pub tokens: bool,

    /// Write HTML to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }

    /// Apply command-line flags on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if self.no_gfm {
            config.markdown.gfm = false;
        }
        if self.breaks {
            config.markdown.breaks = true;
        }
        if self.no_header_ids {
            config.markdown.header_ids = false;
        }
        if let Some(ref prefix) = self.header_prefix {
            config.markdown.header_prefix = prefix.clone();
        }
        if self.highlight {
            config.highlight.enabled = true;
        }
        if let Some(ref theme) = self.theme {
            config.highlight.theme = theme.clone();
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
