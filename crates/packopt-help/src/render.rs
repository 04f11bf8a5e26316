//! Help rendering functions.

use std::collections::HashMap;
use std::rc::Rc;

use console::Style;
use minijinja::{Environment, Value};
use packopt::{usage_summary, HelpRenderer, Registry};

use crate::config::{default_help_styles, HelpConfig};
use crate::data::extract_help_data;
use crate::error::HelpRenderError;

/// Renders the help for a registry.
pub fn render_help(
    registry: &Registry<'_>,
    config: Option<HelpConfig>,
) -> Result<String, HelpRenderError> {
    let config = config.unwrap_or_default();
    let template = config
        .template
        .as_deref()
        .unwrap_or(include_str!("template.txt"));

    let styles = config.styles.unwrap_or_else(default_help_styles);
    let styled = config.styled.unwrap_or_else(console::colors_enabled);

    let data = extract_help_data(
        registry,
        config.name_width,
        config.heading.as_deref(),
        config.about.as_deref(),
    );

    let mut env = Environment::new();
    env.set_trim_blocks(true);
    register_style_filter(&mut env, styles, styled);

    Ok(env.render_str(template, &data)?)
}

/// Wraps [`render_help`] as a hook for
/// [`ParserConfig::help_renderer`](packopt::ParserConfig::help_renderer).
///
/// Falls back to the plain [`usage_summary`] if the template fails.
pub fn renderer(config: HelpConfig) -> HelpRenderer {
    Rc::new(move |registry: &Registry<'_>| {
        render_help(registry, Some(config.clone())).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to plain usage");
            usage_summary(registry)
        })
    })
}

// Usage: {{ value | style("header") }}
fn register_style_filter(env: &mut Environment<'_>, styles: HashMap<String, Style>, styled: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match styles.get(&name) {
            Some(style) if styled => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            _ => text,
        }
    });
}
