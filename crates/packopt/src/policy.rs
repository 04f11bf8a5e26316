//! Parser configuration: unknown-option policy, help policy and help hook.

use std::fmt;
use std::rc::Rc;

use crate::option::dashed;
use crate::registry::Registry;

/// How an option token that matches no registered name is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownOptionPolicy {
    /// Abort, reporting the token with its dashes (`-z`, `--name=value`).
    ThrowWithLeading,
    /// Abort, reporting the bare name (`z`, `name`), like legacy getopt
    /// style diagnostics.
    #[default]
    Classic,
    /// Append the whole token to the operands and keep going.
    PassBack,
}

impl UnknownOptionPolicy {
    /// How a known option's name is written inside error messages.
    pub(crate) fn option_label(self, name: &str) -> String {
        match self {
            UnknownOptionPolicy::Classic => name.to_string(),
            UnknownOptionPolicy::ThrowWithLeading | UnknownOptionPolicy::PassBack => dashed(name),
        }
    }
}

/// What happens after help text has been produced for `-h`/`--help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpPolicy {
    /// Print to stdout and exit the process with `code`.
    Exit { code: i32 },
    /// Abort the parse with [`ParseError::HelpRequested`](crate::ParseError::HelpRequested).
    Return,
}

impl Default for HelpPolicy {
    fn default() -> Self {
        HelpPolicy::Exit { code: 1 }
    }
}

/// Produces help text for a registry. Installed through
/// [`ParserConfig::help_renderer`].
pub type HelpRenderer = Rc<dyn Fn(&Registry<'_>) -> String>;

/// Configuration fixed when a [`Registry`] is built.
#[derive(Clone)]
pub struct ParserConfig {
    pub unknown_policy: UnknownOptionPolicy,
    pub help_policy: HelpPolicy,
    /// Add `-h`/`--help` when any option carries help text.
    pub auto_help: bool,
    /// Program name shown in usage lines.
    pub program_name: Option<String>,
    /// Help text producer. `None` uses [`usage_summary`](crate::usage_summary).
    pub help_renderer: Option<HelpRenderer>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            unknown_policy: UnknownOptionPolicy::default(),
            help_policy: HelpPolicy::default(),
            auto_help: true,
            program_name: None,
            help_renderer: None,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unknown_policy(mut self, policy: UnknownOptionPolicy) -> Self {
        self.unknown_policy = policy;
        self
    }

    pub fn help_policy(mut self, policy: HelpPolicy) -> Self {
        self.help_policy = policy;
        self
    }

    pub fn auto_help(mut self, enabled: bool) -> Self {
        self.auto_help = enabled;
        self
    }

    pub fn program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = Some(name.into());
        self
    }

    pub fn help_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Registry<'_>) -> String + 'static,
    {
        self.help_renderer = Some(Rc::new(renderer));
        self
    }
}

impl fmt::Debug for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserConfig")
            .field("unknown_policy", &self.unknown_policy)
            .field("help_policy", &self.help_policy)
            .field("auto_help", &self.auto_help)
            .field("program_name", &self.program_name)
            .field("help_renderer", &self.help_renderer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.unknown_policy, UnknownOptionPolicy::Classic);
        assert_eq!(config.help_policy, HelpPolicy::Exit { code: 1 });
        assert!(config.auto_help);
        assert!(config.help_renderer.is_none());
    }

    #[test]
    fn labels() {
        assert_eq!(UnknownOptionPolicy::Classic.option_label("i"), "i");
        assert_eq!(UnknownOptionPolicy::ThrowWithLeading.option_label("i"), "-i");
        assert_eq!(UnknownOptionPolicy::PassBack.option_label("name"), "--name");
    }

    #[test]
    fn builder_setters() {
        let config = ParserConfig::new()
            .unknown_policy(UnknownOptionPolicy::PassBack)
            .help_policy(HelpPolicy::Return)
            .auto_help(false)
            .program_name("cc")
            .help_renderer(|_| "custom".to_string());
        assert_eq!(config.unknown_policy, UnknownOptionPolicy::PassBack);
        assert_eq!(config.help_policy, HelpPolicy::Return);
        assert!(!config.auto_help);
        assert_eq!(config.program_name.as_deref(), Some("cc"));
        assert!(format!("{:?}", config).contains("help_renderer: true"));
    }
}
