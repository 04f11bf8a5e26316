//! Option descriptors and the builder that assembles them.
//!
//! # Example
//!
//! ```rust
//! use packopt::{parse, OptionBuilder, Registry};
//!
//! let mut output = String::new();
//! let mut verbosity = 0u32;
//! let mut warnings: Vec<String> = Vec::new();
//!
//! let registry = Registry::new([
//!     OptionBuilder::new('o').with_alias("output").store(&mut output),
//!     OptionBuilder::new('v').accumulate(&mut verbosity),
//!     OptionBuilder::new('W').append(&mut warnings),
//! ])?;
//! let operands = parse(&registry, &["-vvo", "a.out", "-Wall", "main.c"])?;
//! drop(registry);
//!
//! assert_eq!(operands, vec!["main.c"]);
//! assert_eq!(output, "a.out");
//! assert_eq!(verbosity, 2);
//! assert_eq!(warnings, vec!["all"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::error::HandlerFailure;
use crate::sink::{self, Accumulate, Aggregation};
use crate::types::TypeDescriptor;
use crate::value::FromArg;

/// Handler invoked with the raw text extracted for an option.
pub type Handler<'a> = Box<dyn FnMut(&str) -> Result<(), HandlerFailure> + 'a>;

pub(crate) enum Action<'a> {
    Handler(RefCell<Handler<'a>>),
    Help,
}

/// A registered option: its names, value type, handler and help text.
pub struct OptionDescriptor<'a> {
    names: Vec<String>,
    ty: TypeDescriptor,
    help: Option<String>,
    aggregation: Aggregation,
    action: Action<'a>,
}

impl<'a> OptionDescriptor<'a> {
    /// The primary name followed by aliases, without dashes.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The primary name.
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// True for the `-h`/`--help` option added by the registry.
    pub fn is_help(&self) -> bool {
        matches!(self.action, Action::Help)
    }

    /// Renders the names with dashes and a value placeholder, e.g.
    /// `-o, --output <str>`. Optional values use `[type]`, flags none.
    pub fn signature(&self) -> String {
        let placeholder = if self.ty.display_name == "bool" {
            String::new()
        } else if self.ty.accepts_nothing {
            format!(" [{}]", self.ty.display_name)
        } else {
            format!(" <{}>", self.ty.display_name)
        };

        self.names
            .iter()
            .map(|name| format!("{}{}", dashed(name), placeholder))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn help_option() -> Self {
        Self {
            names: vec!["h".to_string(), "help".to_string()],
            ty: TypeDescriptor::flag(),
            help: None,
            aggregation: Aggregation::Overwrite,
            action: Action::Help,
        }
    }

    /// Restricts the names this descriptor answers to.
    pub(crate) fn retain_names(&mut self, keep: impl Fn(&str) -> bool) {
        self.names.retain(|name| keep(name));
    }

    /// Runs the handler. The help option has no handler and succeeds.
    pub(crate) fn run(&self, raw: &str) -> Result<(), HandlerFailure> {
        match &self.action {
            Action::Handler(cell) => {
                let mut handler = cell
                    .try_borrow_mut()
                    .map_err(|_| HandlerFailure::new("handler is already running"))?;
                handler(raw)
            }
            Action::Help => Ok(()),
        }
    }
}

impl fmt::Debug for OptionDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("names", &self.names)
            .field("ty", &self.ty)
            .field("help", &self.help)
            .field("aggregation", &self.aggregation)
            .field("is_help", &self.is_help())
            .finish()
    }
}

/// Writes a bare option name in its command-line form: `-x` or `--name`.
pub fn dashed(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{}", name)
    } else {
        format!("--{}", name)
    }
}

/// Builder for [`OptionDescriptor`].
///
/// Names are given without dashes (leading dashes are stripped). Finish the
/// descriptor with one of the binding methods, which also fix the value type
/// and the [`Aggregation`].
#[derive(Debug, Clone)]
pub struct OptionBuilder {
    names: Vec<String>,
    help: Option<String>,
}

impl OptionBuilder {
    /// Starts an option with its primary name. Accepts `char`, `&str` or
    /// `String`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            names: vec![strip_dashes(name.into())],
            help: None,
        }
    }

    /// Adds another name for the same option.
    pub fn with_alias(mut self, name: impl Into<String>) -> Self {
        self.names.push(strip_dashes(name.into()));
        self
    }

    /// Attaches help text. Empty text leaves the option undocumented.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        let help = help.into();
        self.help = if help.is_empty() { None } else { Some(help) };
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Binds a raw string handler. The value is free-form text.
    pub fn bind<'a, F>(self, handler: F) -> OptionDescriptor<'a>
    where
        F: FnMut(&str) -> Result<(), HandlerFailure> + 'a,
    {
        self.finish(TypeDescriptor::string(), Aggregation::Overwrite, Box::new(handler))
    }

    /// Binds a raw string handler with a caller-supplied type descriptor,
    /// for value types without a [`FromArg`] implementation.
    pub fn bind_typed<'a, F>(self, ty: TypeDescriptor, handler: F) -> OptionDescriptor<'a>
    where
        F: FnMut(&str) -> Result<(), HandlerFailure> + 'a,
    {
        self.finish(ty, Aggregation::Overwrite, Box::new(handler))
    }

    /// Binds a callback receiving the converted value.
    pub fn call<'a, T, F>(self, callback: F) -> OptionDescriptor<'a>
    where
        T: FromArg + 'a,
        F: FnMut(T) -> Result<(), HandlerFailure> + 'a,
    {
        self.finish(T::descriptor(), Aggregation::Overwrite, sink::typed(callback))
    }

    /// Stores each occurrence into `target`, replacing the previous value.
    pub fn store<'a, T: FromArg + 'a>(self, target: &'a mut T) -> OptionDescriptor<'a> {
        self.finish(T::descriptor(), Aggregation::Overwrite, sink::overwrite(target))
    }

    /// Pushes each occurrence onto `target`.
    pub fn append<'a, T: FromArg + 'a>(self, target: &'a mut Vec<T>) -> OptionDescriptor<'a> {
        self.finish(T::descriptor(), Aggregation::Append, sink::append(target))
    }

    /// Adds each occurrence to `target`. The option becomes valueless with an
    /// implied value of 1, so `-vvv` adds 3.
    pub fn accumulate<'a, T: Accumulate + 'a>(self, target: &'a mut T) -> OptionDescriptor<'a> {
        let ty = T::descriptor().with_default("1");
        self.finish(ty, Aggregation::Accumulate, sink::accumulate(target))
    }

    fn finish<'a>(
        self,
        ty: TypeDescriptor,
        aggregation: Aggregation,
        handler: Handler<'a>,
    ) -> OptionDescriptor<'a> {
        OptionDescriptor {
            names: self.names,
            ty,
            help: self.help,
            aggregation,
            action: Action::Handler(RefCell::new(handler)),
        }
    }
}

fn strip_dashes(name: String) -> String {
    match name.strip_prefix("--").or_else(|| name.strip_prefix('-')) {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharClass;
    use std::cell::OnceCell;
    use std::rc::{Rc, Weak};

    #[test]
    fn builder_collects_names_in_order() {
        let builder = OptionBuilder::new('f')
            .with_alias("fancy-option")
            .with_alias('F');
        assert_eq!(builder.names(), ["f", "fancy-option", "F"]);
    }

    #[test]
    fn builder_strips_dashes() {
        let builder = OptionBuilder::new("--output").with_alias("-o");
        assert_eq!(builder.names(), ["output", "o"]);
    }

    #[test]
    fn empty_help_is_no_help() {
        let mut flag = false;
        let opt = OptionBuilder::new('q').with_help("").store(&mut flag);
        assert_eq!(opt.help(), None);
    }

    #[test]
    fn store_uses_value_type_descriptor() {
        let mut level = 0i32;
        let opt = OptionBuilder::new('O').with_help("level").store(&mut level);
        assert_eq!(opt.ty().character_class, CharClass::Numeric);
        assert_eq!(opt.aggregation(), Aggregation::Overwrite);
        assert_eq!(opt.help(), Some("level"));
        assert!(!opt.is_help());
    }

    #[test]
    fn accumulate_makes_option_valueless() {
        let mut count = 0u8;
        let opt = OptionBuilder::new('v').accumulate(&mut count);
        assert!(opt.ty().accepts_nothing);
        assert_eq!(opt.ty().default_value, "1");
        assert_eq!(opt.ty().character_class, CharClass::Numeric);
        assert_eq!(opt.aggregation(), Aggregation::Accumulate);
    }

    #[test]
    fn run_invokes_handler() {
        let mut seen = Vec::new();
        {
            let opt = OptionBuilder::new("name").bind(|raw| {
                seen.push(raw.to_string());
                Ok(())
            });
            opt.run("first").unwrap();
            opt.run("second").unwrap();
        }
        assert_eq!(seen, vec!["first", "second"]);
    }

    #[test]
    fn reentrant_run_fails_instead_of_panicking() {
        let this: Rc<OnceCell<Weak<OptionDescriptor<'static>>>> = Rc::new(OnceCell::new());
        let nested = Rc::new(RefCell::new(None));
        let opt = {
            let this = Rc::clone(&this);
            let nested = Rc::clone(&nested);
            Rc::new(OptionBuilder::new("again").bind(move |raw| {
                if let Some(opt) = this.get().and_then(Weak::upgrade) {
                    *nested.borrow_mut() = Some(opt.run(raw));
                }
                Ok(())
            }))
        };
        this.set(Rc::downgrade(&opt)).unwrap();

        opt.run("x").unwrap();
        let err = nested.borrow_mut().take().unwrap().unwrap_err();
        assert_eq!(err.reason(), "handler is already running");
        // The handler is free again once the outer call returns.
        opt.run("y").unwrap();
    }

    #[test]
    fn signature_formats() {
        let mut out = String::new();
        let mut flag = false;
        let mut count = 0u32;
        let out_opt = OptionBuilder::new('o').with_alias("output").store(&mut out);
        let flag_opt = OptionBuilder::new("quiet").store(&mut flag);
        let count_opt = OptionBuilder::new('v').accumulate(&mut count);

        assert_eq!(out_opt.signature(), "-o <str>, --output <str>");
        assert_eq!(flag_opt.signature(), "--quiet");
        assert_eq!(count_opt.signature(), "-v [u32]");
    }

    #[test]
    fn dashed_by_length() {
        assert_eq!(dashed("x"), "-x");
        assert_eq!(dashed("name"), "--name");
        assert_eq!(dashed("é"), "-é");
    }
}
