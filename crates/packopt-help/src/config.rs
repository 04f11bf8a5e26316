//! Help rendering configuration.

use std::collections::HashMap;

use console::Style;

/// Configuration for registry help rendering.
#[derive(Debug, Clone, Default)]
pub struct HelpConfig {
    /// Custom template string. If None, uses the default template.
    pub template: Option<String>,
    /// Named styles available to the template's `style` filter. If None,
    /// uses [`default_help_styles`].
    pub styles: Option<HashMap<String, Style>>,
    /// Force styling on or off. If None, follows terminal detection.
    pub styled: Option<bool>,
    /// Width of the option name column. If None, uses the built-in width.
    pub name_width: Option<usize>,
    /// Title of the options section. If None, "Options".
    pub heading: Option<String>,
    /// Free text shown between the usage line and the options.
    pub about: Option<String>,
}

impl HelpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn style(mut self, name: impl Into<String>, style: Style) -> Self {
        self.styles
            .get_or_insert_with(default_help_styles)
            .insert(name.into(), style);
        self
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = Some(styled);
        self
    }

    pub fn name_width(mut self, width: usize) -> Self {
        self.name_width = Some(width);
        self
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }
}

/// Returns the default styles for help rendering.
pub fn default_help_styles() -> HashMap<String, Style> {
    [
        ("header", Style::new().bold()),
        ("item", Style::new().bold()),
        ("desc", Style::new()),
        ("usage", Style::new()),
    ]
    .into_iter()
    .map(|(name, style)| (name.to_string(), style))
    .collect()
}
