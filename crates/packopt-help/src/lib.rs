//! Templated help output for `packopt` registries.
//!
//! The core crate prints a plain `USAGE:` summary for `-h`/`--help`. This
//! crate renders the same registry through a minijinja template with
//! terminal styling instead:
//!
//! - [`render_help`]: Render help for a registry
//! - [`renderer`]: Wrap rendering as a [`HelpRenderer`](packopt::HelpRenderer)
//!   hook for [`ParserConfig`](packopt::ParserConfig)
//! - [`HelpConfig`]: Template, styles, column width and headings
//! - [`default_help_styles`]: The styles used when none are configured
//!
//! # Example
//!
//! ```rust
//! use packopt::{OptionBuilder, ParserConfig, Registry};
//! use packopt_help::{render_help, HelpConfig};
//!
//! let mut output = String::new();
//! let registry = Registry::with_config(
//!     [OptionBuilder::new('o')
//!         .with_alias("output")
//!         .with_help("Write output to FILE")
//!         .store(&mut output)],
//!     ParserConfig::new().program_name("cc"),
//! )?;
//!
//! let help = render_help(&registry, Some(HelpConfig::new().styled(false)))?;
//! assert!(help.starts_with("Usage: cc"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Templates
//!
//! Templates see `name`, `usage`, `about`, `heading` and `options`, a list of
//! rows with `name`, `help`, `padding` and `repeatable`. The `style` filter
//! applies a named [`console::Style`]: `{{ heading | style("header") }}`.

mod config;
mod data;
mod error;
mod render;

pub use config::{default_help_styles, HelpConfig};
pub use error::HelpRenderError;
pub use render::{render_help, renderer};
