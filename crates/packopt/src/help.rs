//! Built-in `-h`/`--help` handling.

use std::io::Write;

use crate::error::ParseError;
use crate::policy::HelpPolicy;
use crate::registry::Registry;
use crate::value::FromArg;

/// Plain usage text used when no [`HelpRenderer`](crate::HelpRenderer) is
/// configured.
///
/// ```text
/// USAGE: cc [-Ohov] [LONG_OPTIONS]
///
///     -o <str>, --output <str>
///         write output to this file
/// ```
///
/// Entries are tab-indented, one per documented option.
pub fn usage_summary(registry: &Registry<'_>) -> String {
    let shorts = registry.short_names();
    let mut out = format!("USAGE: {}", registry.program_name());
    if !shorts.is_empty() {
        out.push_str(&format!(" [-{}]", shorts.concat()));
    }
    if registry.has_long_names() {
        out.push_str(" [LONG_OPTIONS]");
    }
    out.push_str("\n\n");

    for opt in registry.options() {
        if let Some(help) = opt.help() {
            out.push_str(&format!("\t{}\n\t\t{}\n", opt.signature(), help));
        }
    }
    out
}

/// Runs the help option: renders the text and applies the help policy.
///
/// A value that converts to `false` (`--help=off`) does nothing.
pub(crate) fn respond(registry: &Registry<'_>, value: &str) -> Result<(), ParseError> {
    if !bool::from_arg(value).unwrap_or(true) {
        return Ok(());
    }

    let config = registry.config();
    let text = match &config.help_renderer {
        Some(render) => render(registry),
        None => usage_summary(registry),
    };

    match config.help_policy {
        HelpPolicy::Exit { code } => {
            tracing::debug!(code, "help requested, exiting");
            if let Err(err) = print(&text) {
                tracing::warn!(%err, "failed to write help text");
            }
            std::process::exit(code)
        }
        HelpPolicy::Return => Err(ParseError::HelpRequested(text)),
    }
}

fn print(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OptionBuilder, ParserConfig};

    #[test]
    fn summary_lists_documented_options() {
        let mut output = String::new();
        let mut quiet = false;
        let registry = Registry::with_config(
            [
                OptionBuilder::new('o')
                    .with_alias("output")
                    .with_help("write output to this file")
                    .store(&mut output),
                OptionBuilder::new('q').store(&mut quiet),
            ],
            ParserConfig::new().program_name("cc"),
        )
        .unwrap();

        let text = usage_summary(&registry);
        assert!(text.starts_with("USAGE: cc [-hoq] [LONG_OPTIONS]\n\n"));
        assert!(text.contains("\t-o <str>, --output <str>\n\t\twrite output to this file\n"));
        assert!(!text.contains("-q"));
    }

    #[test]
    fn summary_without_long_options() {
        let mut a = false;
        let registry = Registry::with_config(
            [OptionBuilder::new('a').with_help("all").store(&mut a)],
            ParserConfig::new().auto_help(false),
        )
        .unwrap();
        assert!(usage_summary(&registry).starts_with("USAGE: program [-a]\n\n"));
    }

    #[test]
    fn respond_returns_text_under_return_policy() {
        let mut a = false;
        let registry = Registry::with_config(
            [OptionBuilder::new('a').with_help("all").store(&mut a)],
            ParserConfig::new()
                .help_policy(HelpPolicy::Return)
                .help_renderer(|_| "custom help".to_string()),
        )
        .unwrap();

        match respond(&registry, "1") {
            Err(ParseError::HelpRequested(text)) => assert_eq!(text, "custom help"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn print_reports_success() {
        assert!(print("").is_ok());
    }

    #[test]
    fn falsy_value_is_a_no_op() {
        let registry = Registry::new(Vec::new()).unwrap();
        assert!(respond(&registry, "off").is_ok());
        assert!(respond(&registry, "0").is_ok());
    }
}
