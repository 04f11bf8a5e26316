//! The immutable option registry.

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::option::{dashed, OptionDescriptor};
use crate::policy::{ParserConfig, UnknownOptionPolicy};

/// The set of options known to a parse, indexed by their command-line form.
///
/// Built once and read-only afterwards. Keys are normalized option strings:
/// `"-x"` for one-character names, `"--name"` otherwise. Aliases point at the
/// same descriptor.
///
/// Handlers may borrow caller state for `'a`; drop the registry to release
/// those borrows.
#[derive(Debug)]
pub struct Registry<'a> {
    options: Vec<OptionDescriptor<'a>>,
    index: HashMap<String, usize>,
    config: ParserConfig,
}

impl<'a> Registry<'a> {
    /// Builds a registry with the default [`ParserConfig`].
    pub fn new<I>(descriptors: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = OptionDescriptor<'a>>,
    {
        Self::with_config(descriptors, ParserConfig::default())
    }

    /// Builds a registry with an explicit configuration.
    ///
    /// Fails if a name is empty or claimed twice. When auto-help is enabled
    /// and some option has help text, `-h` and `--help` are added for the
    /// names still free.
    pub fn with_config<I>(descriptors: I, config: ParserConfig) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = OptionDescriptor<'a>>,
    {
        let mut registry = Registry {
            options: Vec::new(),
            index: HashMap::new(),
            config,
        };

        for descriptor in descriptors {
            registry.insert(descriptor)?;
        }

        let documented = registry.options.iter().any(|opt| opt.help().is_some());
        if registry.config.auto_help && documented {
            let mut help = OptionDescriptor::help_option();
            help.retain_names(|name| !registry.index.contains_key(&dashed(name)));
            if !help.names().is_empty() {
                registry.insert(help)?;
            }
        }

        Ok(registry)
    }

    fn insert(&mut self, descriptor: OptionDescriptor<'a>) -> Result<(), RegistryError> {
        let slot = self.options.len();
        for name in descriptor.names() {
            if name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            let key = dashed(name);
            if self.index.contains_key(&key) {
                return Err(RegistryError::DuplicateName(key));
            }
            self.index.insert(key, slot);
        }
        self.options.push(descriptor);
        Ok(())
    }

    /// Looks up a normalized option string such as `"-x"` or `"--name"`.
    pub fn find(&self, key: &str) -> Option<&OptionDescriptor<'a>> {
        self.index.get(key).map(|&slot| &self.options[slot])
    }

    /// Looks up a short option by its character.
    pub fn find_short(&self, name: char) -> Option<&OptionDescriptor<'a>> {
        let mut buf = [0u8; 5];
        buf[0] = b'-';
        let len = 1 + name.encode_utf8(&mut buf[1..]).len();
        std::str::from_utf8(&buf[..len])
            .ok()
            .and_then(|key| self.find(key))
    }

    /// Looks up a long option by its bare name.
    pub fn find_long(&self, name: &str) -> Option<&OptionDescriptor<'a>> {
        self.find(&format!("--{}", name))
    }

    /// Number of registered names, aliases and help entries included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Descriptors in registration order. The auto-help descriptor, if any,
    /// comes last.
    pub fn options(&self) -> impl Iterator<Item = &OptionDescriptor<'a>> {
        self.options.iter()
    }

    /// One-character names across all descriptors, sorted.
    pub fn short_names(&self) -> Vec<&str> {
        let mut shorts: Vec<&str> = self
            .names()
            .filter(|name| name.chars().count() == 1)
            .collect();
        shorts.sort_unstable();
        shorts
    }

    /// Returns true if any descriptor has a long name.
    pub fn has_long_names(&self) -> bool {
        self.names().any(|name| name.chars().count() > 1)
    }

    fn names(&self) -> impl Iterator<Item = &str> + use<'_, 'a> {
        self.options
            .iter()
            .flat_map(|opt| opt.names().iter().map(String::as_str))
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn policy(&self) -> UnknownOptionPolicy {
        self.config.unknown_policy
    }

    /// Program name for usage lines, `"program"` when not configured.
    pub fn program_name(&self) -> &str {
        self.config.program_name.as_deref().unwrap_or("program")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptionBuilder;

    #[test]
    fn counts_names_and_aliases() {
        let mut a = false;
        let mut name = String::new();
        let registry = Registry::new([
            OptionBuilder::new('a').store(&mut a),
            OptionBuilder::new('n').with_alias("name").store(&mut name),
        ])
        .unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.options().count(), 2);
    }

    #[test]
    fn aliases_share_descriptor() {
        let mut name = String::new();
        let registry =
            Registry::new([OptionBuilder::new('n').with_alias("name").store(&mut name)]).unwrap();
        let short = registry.find("-n").unwrap();
        let long = registry.find("--name").unwrap();
        assert!(std::ptr::eq(short, long));
        assert!(std::ptr::eq(registry.find_short('n').unwrap(), short));
        assert!(std::ptr::eq(registry.find_long("name").unwrap(), long));
    }

    #[test]
    fn single_character_names_are_short_only() {
        let mut x = false;
        let registry = Registry::new([OptionBuilder::new('x').store(&mut x)]).unwrap();
        assert!(registry.find_long("x").is_none());
        assert!(registry.find_short('x').is_some());
    }

    #[test]
    fn short_and_long_names() {
        let mut a = false;
        let mut name = String::new();
        let registry = Registry::new([
            OptionBuilder::new('z').store(&mut a),
            OptionBuilder::new('n').with_alias("name").store(&mut name),
        ])
        .unwrap();
        assert_eq!(registry.short_names(), ["n", "z"]);
        assert!(registry.has_long_names());

        let empty = Registry::new(Vec::new()).unwrap();
        assert!(empty.short_names().is_empty());
        assert!(!empty.has_long_names());
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut a = false;
        let mut b = 0i32;
        let err = Registry::new([
            OptionBuilder::new('x').store(&mut a),
            OptionBuilder::new("count").with_alias('x').store(&mut b),
        ])
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("-x".into()));
    }

    #[test]
    fn empty_name_rejected() {
        let mut a = false;
        let err = Registry::new([OptionBuilder::new("--").store(&mut a)]).unwrap_err();
        assert_eq!(err, RegistryError::EmptyName);
    }

    #[test]
    fn auto_help_added_when_documented() {
        let mut a = false;
        let registry =
            Registry::new([OptionBuilder::new('a').with_help("all").store(&mut a)]).unwrap();
        assert!(registry.find("-h").unwrap().is_help());
        assert!(registry.find("--help").unwrap().is_help());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn no_auto_help_without_help_text() {
        let mut a = false;
        let registry = Registry::new([OptionBuilder::new('a').store(&mut a)]).unwrap();
        assert!(registry.find("--help").is_none());
        assert!(registry.find("-h").is_none());
    }

    #[test]
    fn auto_help_can_be_disabled() {
        let mut a = false;
        let registry = Registry::with_config(
            [OptionBuilder::new('a').with_help("all").store(&mut a)],
            ParserConfig::new().auto_help(false),
        )
        .unwrap();
        assert!(registry.find("--help").is_none());
    }

    #[test]
    fn auto_help_keeps_user_defined_names() {
        let mut host = String::new();
        let registry = Registry::new([OptionBuilder::new('h')
            .with_alias("host")
            .with_help("server host")
            .store(&mut host)])
        .unwrap();
        assert!(!registry.find("-h").unwrap().is_help());
        assert!(registry.find("--help").unwrap().is_help());
    }

    #[test]
    fn program_name_default() {
        let registry = Registry::new(Vec::new()).unwrap();
        assert_eq!(registry.program_name(), "program");
        assert!(registry.is_empty());
    }
}
