//! Help data extraction from option registries.

use packopt::Registry;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Fixed width for the option name column in help output.
pub(crate) const NAME_COLUMN_WIDTH: usize = 24;

const HELP_OPTION_TEXT: &str = "Print this help";

#[derive(Debug, Serialize)]
pub(crate) struct HelpData {
    pub name: String,
    pub usage: String,
    pub about: String,
    pub heading: String,
    pub options: Vec<OptionData>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OptionData {
    pub name: String,
    pub help: String,
    pub padding: String,
    pub repeatable: bool,
}

pub(crate) fn extract_help_data(
    registry: &Registry<'_>,
    name_width: Option<usize>,
    heading: Option<&str>,
    about: Option<&str>,
) -> HelpData {
    let width = name_width.unwrap_or(NAME_COLUMN_WIDTH);

    let options = registry
        .options()
        .filter_map(|opt| {
            let help = if opt.is_help() {
                HELP_OPTION_TEXT.to_string()
            } else {
                opt.help()?.to_string()
            };
            let name = opt.signature();
            // Names wider than the column keep a two-space gap.
            let pad = width.saturating_sub(name.width()).max(2);
            Some(OptionData {
                name,
                help,
                padding: " ".repeat(pad),
                repeatable: opt.aggregation().is_repeatable(),
            })
        })
        .collect();

    HelpData {
        name: registry.program_name().to_string(),
        usage: usage_line(registry),
        about: about.unwrap_or_default().to_string(),
        heading: heading.unwrap_or("Options").to_string(),
        options,
    }
}

fn usage_line(registry: &Registry<'_>) -> String {
    let shorts = registry.short_names();
    let mut usage = registry.program_name().to_string();
    if !shorts.is_empty() {
        usage.push_str(&format!(" [-{}]", shorts.concat()));
    }
    if registry.has_long_names() {
        usage.push_str(" [OPTIONS]");
    }
    usage.push_str(" [--] [OPERANDS]...");
    usage
}
