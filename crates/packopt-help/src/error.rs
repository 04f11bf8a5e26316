//! Error types for help rendering.

use thiserror::Error;

/// Errors raised while rendering help text.
#[derive(Debug, Error)]
pub enum HelpRenderError {
    /// The template failed to parse or render.
    #[error("help template error: {0}")]
    Template(#[from] minijinja::Error),
}
