//! Marklet Core
//!
//! This crate provides the shared types used by every stage of the
//! markdown-to-HTML pipeline.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Token`], [`TokenKind`], [`Nesting`], [`Align`] - The flat token stream
//! - [`Options`] and the [`Highlight`] hook - Per-parse settings
//! - [`escape_html`] - HTML escaping shared by the renderer and highlighters
//! - [`MarkletError`] - Error types for the fallible edges (config, I/O)

pub mod error;
pub mod escape;
pub mod options;
pub mod token;

pub use error::{MarkletError, Result};
pub use escape::escape_html;
pub use options::{Highlight, Options};
pub use token::{Align, Nesting, Token, TokenKind};
