//! Marklet - convert markdown to HTML.
//!
//! This binary provides the CLI interface to the marklet library,
//! reading markdown from files or stdin.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use marklet::{render, tokenize, Options, Result};
use marklet_config::Config;
use marklet_syntax::Highlighter;
use std::fs;
use std::io::{self, Read, Write};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("marklet v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let options = build_options(&config);
    debug!("Options: {:?}", options);

    let input = read_input(cli)?;

    let tokens = tokenize(&input, &options);
    let output = if cli.tokens {
        format_tokens(&tokens)
    } else {
        render(&tokens, &options)
    };

    write_output(cli, &output)
}

/// Load configuration and layer the command-line flags on top.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    cli.apply(&mut config);
    Ok(config)
}

/// Build parse options, attaching a highlighter when enabled.
fn build_options(config: &Config) -> Options {
    let options = config.options();
    if !config.highlight.enabled {
        return options;
    }

    let highlighter = Highlighter::with_theme(&config.highlight.theme);
    if highlighter.theme().is_none() {
        let mut themes = highlighter.themes();
        themes.sort_unstable();
        error!(
            "Unknown theme '{}', code blocks will not be highlighted (available: {})",
            config.highlight.theme,
            themes.join(", ")
        );
    }
    options.with_highlight(highlighter)
}

/// Read all input files in order, or stdin if none are given.
fn read_input(cli: &Cli) -> Result<String> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }

    let mut input = String::new();
    for path in &cli.files {
        info!("Processing file: {}", path.display());
        if !input.is_empty() && !input.ends_with('\n') {
            input.push('\n');
        }
        input.push_str(&fs::read_to_string(path)?);
    }
    Ok(input)
}

fn format_tokens(tokens: &[marklet::Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("{:?}\n", token));
    }
    out
}

fn write_output(cli: &Cli, output: &str) -> Result<()> {
    match cli.output {
        Some(ref path) => {
            debug!("Writing {} bytes to {}", output.len(), path.display());
            fs::write(path, output)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
